use fltk::text::TextBuffer;

/// Text storage behind a document. Implemented for FLTK's `TextBuffer`
/// (bound to the editor widget) and for `String` (headless use and tests).
pub trait TextStore {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

impl TextStore for TextBuffer {
    fn text(&self) -> String {
        buffer_text_no_leak(self)
    }

    fn set_text(&mut self, text: &str) {
        TextBuffer::set_text(self, text);
    }
}

impl TextStore for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Copy the contents of `buf` into a `String`, freeing FLTK's C copy.
/// `TextBuffer::text()` leaks that copy on every call.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: the handle stays valid for the borrow of `buf`. The returned
    // pointer is null or a NUL-terminated malloc allocation owned by us.
    unsafe {
        let raw = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if raw.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(raw).to_string_lossy().into_owned();
        free(raw.cast());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_store_replaces_contents() {
        let mut store = String::from("old contents");
        TextStore::set_text(&mut store, "new");
        assert_eq!(TextStore::text(&store), "new");
        TextStore::set_text(&mut store, "");
        assert_eq!(TextStore::text(&store), "");
    }
}
