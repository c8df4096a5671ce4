//! Shared crate-wide constants.
//!
//! The geometry values are in logical units, the coordinate space of the
//! window-manager core. `DesktopMetrics::default()` picks these up; the
//! terminal front-end substitutes cell-scale values via
//! `DesktopMetrics::cells()`.

/// Minimum window width in logical units. Resize requests below this floor
/// leave the horizontal axis untouched.
pub const MIN_WINDOW_WIDTH: i32 = 450;

/// Minimum window height in logical units. Resize requests below this floor
/// leave the vertical axis untouched.
pub const MIN_WINDOW_HEIGHT: i32 = 350;

/// Side length of the square resize hot zone anchored at a window's
/// bottom-right corner. A pointer-down inside the zone starts a resize
/// gesture and takes priority over a header drag.
pub const RESIZE_HOT_ZONE: i32 = 20;

/// Vertical space reserved at the bottom of the viewport for the taskbar.
/// Windows are never dragged or centered into this band.
pub const TASKBAR_RESERVED: i32 = 48;

/// Height of the draggable window header band.
pub const HEADER_HEIGHT: i32 = 36;

/// Width of the control-button region (minimize/maximize/close) at the
/// right end of the header. Pointer-downs here never start a drag.
pub const CONTROLS_WIDTH: i32 = 96;

/// First stacking value handed out by the z-order counter.
pub const Z_ORDER_START: u64 = 100;

/// Number of decorative background particles spawned at session start.
pub const PARTICLE_COUNT: usize = 15;

/// How long the welcome splash stays up before the desktop takes over.
pub const WELCOME_MILLIS: u64 = 3500;

/// Two pointer-downs on the same target within this interval count as a
/// double-click (desktop icons, window headers).
pub const DOUBLE_CLICK_MILLIS: u64 = 500;
