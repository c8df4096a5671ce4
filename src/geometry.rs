//! Pure geometry for the window-manager core.
//!
//! Everything here operates on logical units with signed origins, so
//! intermediate drag math may go negative before clamping. The clamp is the
//! single place that guarantees windows stay inside the viewport minus the
//! reserved taskbar band.

use crate::constants::{
    CONTROLS_WIDTH, HEADER_HEIGHT, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, RESIZE_HOT_ZONE,
    TASKBAR_RESERVED,
};

/// Pointer or window-origin position in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window or viewport extent in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Signed rectangle: origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeskRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DeskRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the rightmost column covered by the rect.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row covered by the rect.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Interaction constants for one desktop session.
///
/// The defaults are logical-unit values; the terminal binary swaps in
/// cell-scale values so the same transition logic drives a character grid.
#[derive(Debug, Clone, Copy)]
pub struct DesktopMetrics {
    pub min_window: Size,
    pub resize_hot_zone: i32,
    pub taskbar_reserved: i32,
    pub header_height: i32,
    pub controls_width: i32,
}

impl Default for DesktopMetrics {
    fn default() -> Self {
        Self {
            min_window: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            resize_hot_zone: RESIZE_HOT_ZONE,
            taskbar_reserved: TASKBAR_RESERVED,
            header_height: HEADER_HEIGHT,
            controls_width: CONTROLS_WIDTH,
        }
    }
}

impl DesktopMetrics {
    /// Metrics scaled to terminal cells: one-row header, one-row taskbar,
    /// a single-cell resize corner, and a minimum size that still fits a
    /// header plus a few content rows.
    pub fn cells() -> Self {
        Self {
            min_window: Size::new(28, 8),
            resize_hot_zone: 1,
            taskbar_reserved: 1,
            header_height: 1,
            controls_width: 6,
        }
    }
}

/// Clamp a window origin so the window stays inside `container`, keeping the
/// bottom `reserved_margin` rows free. Oversized windows pin to 0; no
/// negative positions are ever produced.
pub fn clamp_position(pos: Point, size: Size, container: Size, reserved_margin: i32) -> Point {
    let max_x = (container.width - size.width).max(0);
    let max_y = (container.height - size.height - reserved_margin).max(0);
    Point {
        x: pos.x.clamp(0, max_x),
        y: pos.y.clamp(0, max_y),
    }
}

/// Initial placement for a freshly opened window: centered, nudged up by
/// half the reserved margin so the window sits centered in the usable area
/// above the taskbar.
pub fn center_position(size: Size, container: Size, reserved_margin: i32) -> Point {
    let x = (container.width - size.width) / 2;
    let y = (container.height - size.height) / 2 - reserved_margin / 2;
    Point {
        x: x.max(0),
        y: y.max(0),
    }
}

/// True when the pointer sits inside the square resize hot zone anchored at
/// the window's bottom-right corner.
pub fn in_resize_zone(pointer: Point, window: DeskRect, zone: i32) -> bool {
    window.contains(pointer)
        && pointer.x >= window.right() - zone
        && pointer.y >= window.bottom() - zone
}

/// What a pointer-down inside a window header resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Drag,
    Minimize,
    Maximize,
    Close,
    None,
}

/// Hit-test a pointer against a window's header band. The control region at
/// the right end splits evenly into minimize/maximize/close; the rest of the
/// band is the drag surface.
pub fn header_action(pointer: Point, window: DeskRect, metrics: &DesktopMetrics) -> HeaderAction {
    if !window.contains(pointer) || pointer.y >= window.y + metrics.header_height {
        return HeaderAction::None;
    }
    let controls_left = window.right() - metrics.controls_width;
    if pointer.x < controls_left {
        return HeaderAction::Drag;
    }
    let button = metrics.controls_width / 3;
    if button == 0 {
        return HeaderAction::Close;
    }
    match (pointer.x - controls_left) / button {
        0 => HeaderAction::Minimize,
        1 => HeaderAction::Maximize,
        _ => HeaderAction::Close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size {
        width: 1000,
        height: 800,
    };

    #[test]
    fn clamp_inside_bounds_is_identity() {
        let pos = clamp_position(
            Point::new(150, 130),
            Size::new(450, 350),
            CONTAINER,
            TASKBAR_RESERVED,
        );
        assert_eq!(pos, Point::new(150, 130));
    }

    #[test]
    fn clamp_pins_to_reserved_margin() {
        let size = Size::new(450, 350);
        let pos = clamp_position(Point::new(2000, 2000), size, CONTAINER, TASKBAR_RESERVED);
        assert_eq!(pos.x, CONTAINER.width - size.width);
        assert_eq!(pos.y, CONTAINER.height - size.height - TASKBAR_RESERVED);
    }

    #[test]
    fn clamp_never_goes_negative() {
        let pos = clamp_position(
            Point::new(-40, -9000),
            Size::new(450, 350),
            CONTAINER,
            TASKBAR_RESERVED,
        );
        assert_eq!(pos, Point::new(0, 0));
    }

    #[test]
    fn clamp_oversized_window_pins_to_origin() {
        let pos = clamp_position(
            Point::new(50, 50),
            Size::new(1200, 900),
            CONTAINER,
            TASKBAR_RESERVED,
        );
        assert_eq!(pos, Point::new(0, 0));
    }

    #[test]
    fn clamp_holds_across_a_position_sweep() {
        let size = Size::new(450, 350);
        for x in (-500..1500).step_by(37) {
            for y in (-500..1200).step_by(41) {
                let pos = clamp_position(Point::new(x, y), size, CONTAINER, TASKBAR_RESERVED);
                assert!(pos.x >= 0 && pos.x <= CONTAINER.width - size.width);
                assert!(
                    pos.y >= 0 && pos.y <= CONTAINER.height - size.height - TASKBAR_RESERVED,
                    "y {} escaped for input ({x},{y})",
                    pos.y
                );
            }
        }
    }

    #[test]
    fn center_offsets_for_taskbar() {
        let pos = center_position(Size::new(450, 350), CONTAINER, TASKBAR_RESERVED);
        assert_eq!(pos.x, (1000 - 450) / 2);
        assert_eq!(pos.y, (800 - 350) / 2 - 24);
    }

    #[test]
    fn center_clamps_small_containers() {
        let pos = center_position(Size::new(450, 350), Size::new(300, 200), TASKBAR_RESERVED);
        assert_eq!(pos, Point::new(0, 0));
    }

    #[test]
    fn resize_zone_hits_bottom_right_corner_only() {
        let window = DeskRect::new(100, 100, 450, 350);
        assert!(in_resize_zone(
            Point::new(549, 449),
            window,
            RESIZE_HOT_ZONE
        ));
        assert!(in_resize_zone(
            Point::new(530, 430),
            window,
            RESIZE_HOT_ZONE
        ));
        // just outside the 20x20 zone
        assert!(!in_resize_zone(
            Point::new(529, 449),
            window,
            RESIZE_HOT_ZONE
        ));
        assert!(!in_resize_zone(
            Point::new(549, 429),
            window,
            RESIZE_HOT_ZONE
        ));
        // outside the window entirely
        assert!(!in_resize_zone(
            Point::new(560, 460),
            window,
            RESIZE_HOT_ZONE
        ));
    }

    #[test]
    fn header_action_splits_drag_and_controls() {
        let metrics = DesktopMetrics::default();
        let window = DeskRect::new(0, 0, 450, 350);
        assert_eq!(
            header_action(Point::new(10, 10), window, &metrics),
            HeaderAction::Drag
        );
        // inside the controls region: minimize, maximize, close left to right
        assert_eq!(
            header_action(Point::new(450 - 96 + 5, 10), window, &metrics),
            HeaderAction::Minimize
        );
        assert_eq!(
            header_action(Point::new(450 - 96 + 40, 10), window, &metrics),
            HeaderAction::Maximize
        );
        assert_eq!(
            header_action(Point::new(445, 10), window, &metrics),
            HeaderAction::Close
        );
        // below the header band
        assert_eq!(
            header_action(Point::new(10, 40), window, &metrics),
            HeaderAction::None
        );
    }
}
