pub mod manager;

use crate::geometry::DeskRect;

pub use manager::DesktopManager;

/// Stable identifier for a declared window. Windows are declared statically
/// for the lifetime of the process, so a borrowed slug is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub &'static str);

impl WindowId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Lifecycle state of one window. Exactly one state at a time; `Minimized`
/// and `Maximized` both imply the window has been opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Closed,
    Open,
    Minimized,
    Maximized,
}

/// Title and icon captured from the window's static definition the first
/// time it opens. Immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMeta {
    pub title: String,
    pub icon: String,
}

/// Per-window record owned by the desktop manager: state machine position,
/// geometry, restore geometry for maximize, and the last stacking value.
#[derive(Debug, Clone)]
pub(crate) struct WindowEntity {
    pub state: WindowState,
    pub frame: DeskRect,
    pub restore_frame: Option<DeskRect>,
    pub z: u64,
}

impl WindowEntity {
    pub(crate) fn new(frame: DeskRect, z: u64) -> Self {
        Self {
            state: WindowState::Open,
            frame,
            restore_frame: None,
            z,
        }
    }
}
