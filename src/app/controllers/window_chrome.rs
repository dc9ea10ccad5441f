//! State behind the custom window frame: the maximize/restore toggle and
//! pointer-drag repositioning. FLTK offers no portable "begin interactive
//! move" call, so moves are tracked as pointer deltas from the press.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Used when restoring a window that was never in the normal state.
pub const DEFAULT_BOUNDS: Bounds = Bounds::new(100, 100, 1000, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizeState {
    Normal,
    Maximized,
}

#[derive(Debug, Clone, Copy)]
struct DragGrab {
    pointer: (i32, i32),
    window: (i32, i32),
}

#[derive(Debug)]
pub struct WindowChrome {
    state: MaximizeState,
    restore_bounds: Option<Bounds>,
    grab: Option<DragGrab>,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowChrome {
    pub fn new() -> Self {
        Self {
            state: MaximizeState::Normal,
            restore_bounds: None,
            grab: None,
        }
    }

    pub fn state(&self) -> MaximizeState {
        self.state
    }

    /// Normal -> Maximized fills `work_area` and remembers `current`;
    /// Maximized -> Normal returns the remembered bounds. Returns the bounds
    /// the window should take.
    pub fn toggle_maximize(&mut self, current: Bounds, work_area: Bounds) -> Bounds {
        self.grab = None;
        match self.state {
            MaximizeState::Normal => {
                self.restore_bounds = Some(current);
                self.state = MaximizeState::Maximized;
                work_area
            }
            MaximizeState::Maximized => {
                self.state = MaximizeState::Normal;
                self.restore_bounds.take().unwrap_or(DEFAULT_BOUNDS)
            }
        }
    }

    /// Pointer pressed on the title bar at screen position `pointer` while
    /// the window's origin is at `window`.
    pub fn press(&mut self, pointer: (i32, i32), window: (i32, i32)) {
        if self.state == MaximizeState::Normal {
            self.grab = Some(DragGrab { pointer, window });
        }
    }

    /// Pointer moved with the button held. Returns the new window origin,
    /// translated by the pointer delta since the press.
    pub fn drag_to(&self, pointer: (i32, i32)) -> Option<(i32, i32)> {
        let grab = self.grab?;
        Some((
            grab.window.0 + pointer.0 - grab.pointer.0,
            grab.window.1 + pointer.1 - grab.pointer.1,
        ))
    }

    pub fn release(&mut self) {
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}
