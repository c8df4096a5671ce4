//! The desktop session: window lifecycle, stacking, and pointer gestures.
//!
//! `DesktopManager` owns the whole session (the open-window map, the z
//! counter, the active window) as one value with an explicit lifetime. It exposes pure state transitions; an input-dispatch
//! layer translates platform events into calls here and never the other way
//! around.
//!
//! Every operation is total: unknown ids and pointer events outside a
//! gesture are no-ops, requested sizes below the floor leave that axis
//! untouched, and requested positions outside the viewport clamp into
//! bounds. Nothing in here returns an error.

use std::collections::BTreeMap;

use crate::apps::{self, WindowDef};
use crate::geometry::{
    self, DeskRect, DesktopMetrics, Point, Size, clamp_position, center_position,
};
use crate::registry::{TaskbarEntry, WindowRegistry};
use crate::session::ZOrder;
use crate::window::{WindowEntity, WindowId, WindowMeta, WindowState};

/// In-flight header drag: the pointer offset from the window origin is
/// recorded at mouse-down and re-applied on every move.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    id: WindowId,
    offset: Point,
}

/// In-flight corner resize: size deltas are measured against the gesture's
/// starting pointer and size, never the intermediate values.
#[derive(Debug, Clone, Copy)]
struct ResizeSession {
    id: WindowId,
    start_pointer: Point,
    start_size: Size,
}

pub struct DesktopManager {
    metrics: DesktopMetrics,
    default_size: Size,
    declared: &'static [WindowDef],
    windows: BTreeMap<WindowId, WindowEntity>,
    registry: WindowRegistry,
    z_order: ZOrder,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
}

impl DesktopManager {
    /// Session with the logical-unit default metrics. The terminal binary
    /// uses [`DesktopManager::with_metrics`] with cell-scale values.
    pub fn new() -> Self {
        let metrics = DesktopMetrics::default();
        Self::with_metrics(metrics, metrics.min_window)
    }

    pub fn with_metrics(metrics: DesktopMetrics, default_size: Size) -> Self {
        Self {
            metrics,
            default_size,
            declared: apps::DECLARED_WINDOWS,
            windows: BTreeMap::new(),
            registry: WindowRegistry::new(),
            z_order: ZOrder::new(),
            drag: None,
            resize: None,
        }
    }

    pub fn metrics(&self) -> &DesktopMetrics {
        &self.metrics
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.z_order.active()
    }

    /// Current state of `id`; undeclared or never-opened windows are
    /// `Closed`.
    pub fn state(&self, id: WindowId) -> WindowState {
        self.windows
            .get(&id)
            .map(|entity| entity.state)
            .unwrap_or(WindowState::Closed)
    }

    pub fn frame(&self, id: WindowId) -> Option<DeskRect> {
        self.windows.get(&id).map(|entity| entity.frame)
    }

    /// Ids of windows with a visible surface, bottom to top. Draw in this
    /// order so the highest stacking value paints last.
    pub fn stacked(&self) -> Vec<WindowId> {
        let mut visible: Vec<(WindowId, u64)> = self
            .windows
            .iter()
            .filter(|(_, entity)| {
                matches!(entity.state, WindowState::Open | WindowState::Maximized)
            })
            .map(|(id, entity)| (*id, entity.z))
            .collect();
        visible.sort_by_key(|(_, z)| *z);
        visible.into_iter().map(|(id, _)| id).collect()
    }

    /// Taskbar projection: registry entries in insertion order with the
    /// active flag resolved.
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.registry.render(self.z_order.active())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    fn declared_def(&self, id: WindowId) -> Option<&'static WindowDef> {
        self.declared.iter().find(|def| def.id == id)
    }

    /// Open `id`, restoring from minimized if needed, and bring it to the
    /// front. A window minimized while maximized comes back maximized.
    /// First open centers the window and captures its taskbar meta from
    /// the static definition. Undeclared ids are ignored.
    pub fn open(&mut self, id: WindowId, viewport: Size) {
        let Some(def) = self.declared_def(id) else {
            return;
        };
        match self.windows.get_mut(&id) {
            Some(entity) => {
                // a saved restore frame means the window was maximized when
                // it went away; bring it back in the same mode
                entity.state = match entity.state {
                    WindowState::Minimized if entity.restore_frame.is_some() => {
                        WindowState::Maximized
                    }
                    WindowState::Maximized => WindowState::Maximized,
                    _ => WindowState::Open,
                };
            }
            None => {
                let origin =
                    center_position(self.default_size, viewport, self.metrics.taskbar_reserved);
                let frame = DeskRect::new(
                    origin.x,
                    origin.y,
                    self.default_size.width,
                    self.default_size.height,
                );
                self.windows.insert(id, WindowEntity::new(frame, 0));
                tracing::debug!(window = %id, ?frame, "opened window");
            }
        }
        // Idempotent: a window already present keeps its first-open meta.
        self.registry.register(
            id,
            WindowMeta {
                title: def.title.to_string(),
                icon: def.icon.to_string(),
            },
        );
        self.bring_to_front(id);
    }

    /// Close `id`: drop its entity and taskbar entry. If it was the active
    /// window, there is no active window until the next interaction.
    pub fn close(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_none() {
            return;
        }
        tracing::debug!(window = %id, "closed window");
        self.registry.unregister(id);
        self.z_order.clear_active_if(id);
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
        if self.resize.is_some_and(|resize| resize.id == id) {
            self.resize = None;
        }
    }

    /// Close whichever window is active, if any. Backs the Escape shortcut.
    pub fn close_active(&mut self) {
        if let Some(id) = self.z_order.active() {
            self.close(id);
        }
    }

    /// Hide `id` without touching its taskbar entry. The entry stays
    /// clickable and restores the window via [`DesktopManager::open`].
    pub fn minimize(&mut self, id: WindowId) {
        let Some(entity) = self.windows.get_mut(&id) else {
            return;
        };
        if !matches!(entity.state, WindowState::Open | WindowState::Maximized) {
            return;
        }
        entity.state = WindowState::Minimized;
        self.z_order.clear_active_if(id);
        tracing::debug!(window = %id, "minimized window");
    }

    /// Toggle between maximized (viewport minus the taskbar band) and the
    /// saved restore geometry. Minimized windows are left alone.
    pub fn toggle_maximize(&mut self, id: WindowId, viewport: Size) {
        let usable = DeskRect::new(
            0,
            0,
            viewport.width,
            (viewport.height - self.metrics.taskbar_reserved).max(0),
        );
        let Some(entity) = self.windows.get_mut(&id) else {
            return;
        };
        match entity.state {
            WindowState::Open => {
                entity.restore_frame = Some(entity.frame);
                entity.frame = usable;
                entity.state = WindowState::Maximized;
            }
            WindowState::Maximized => {
                if let Some(previous) = entity.restore_frame.take() {
                    entity.frame = previous;
                }
                entity.state = WindowState::Open;
            }
            WindowState::Minimized | WindowState::Closed => return,
        }
        self.bring_to_front(id);
    }

    /// Stamp `id` on top of the stack and make it active.
    pub fn bring_to_front(&mut self, id: WindowId) {
        let Some(entity) = self.windows.get_mut(&id) else {
            return;
        };
        entity.z = self.z_order.bring_to_front(id);
    }

    /// Start a header drag. Refused while maximized or minimized, outside
    /// the header band, over the control buttons, or while a resize gesture
    /// is already in flight.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        if self.resize.is_some() {
            return false;
        }
        let Some(entity) = self.windows.get(&id) else {
            return false;
        };
        if entity.state != WindowState::Open {
            return false;
        }
        if geometry::header_action(pointer, entity.frame, &self.metrics)
            != geometry::HeaderAction::Drag
        {
            return false;
        }
        self.drag = Some(DragSession {
            id,
            offset: Point::new(pointer.x - entity.frame.x, pointer.y - entity.frame.y),
        });
        self.bring_to_front(id);
        true
    }

    /// Move the dragged window to `pointer - offset`, clamped into the
    /// viewport above the taskbar band. No-op outside a drag gesture.
    pub fn drag_move(&mut self, pointer: Point, viewport: Size) {
        let Some(drag) = self.drag else {
            return;
        };
        let reserved = self.metrics.taskbar_reserved;
        let Some(entity) = self.windows.get_mut(&drag.id) else {
            return;
        };
        let target = Point::new(pointer.x - drag.offset.x, pointer.y - drag.offset.y);
        let clamped = clamp_position(target, entity.frame.size(), viewport, reserved);
        entity.frame.x = clamped.x;
        entity.frame.y = clamped.y;
    }

    /// Start a corner resize. The hot zone wins over the header for the
    /// rest of the gesture, so any recorded drag is dropped here.
    pub fn begin_resize(&mut self, id: WindowId, pointer: Point) -> bool {
        let Some(entity) = self.windows.get(&id) else {
            return false;
        };
        if entity.state != WindowState::Open {
            return false;
        }
        if !geometry::in_resize_zone(pointer, entity.frame, self.metrics.resize_hot_zone) {
            return false;
        }
        self.drag = None;
        self.resize = Some(ResizeSession {
            id,
            start_pointer: pointer,
            start_size: entity.frame.size(),
        });
        self.bring_to_front(id);
        true
    }

    /// Grow or shrink the resized window by the pointer delta since the
    /// gesture started. Each axis applies independently and only while it
    /// meets the minimum floor; a below-floor axis keeps its last value.
    pub fn resize_move(&mut self, pointer: Point) {
        let Some(resize) = self.resize else {
            return;
        };
        let min = self.metrics.min_window;
        let Some(entity) = self.windows.get_mut(&resize.id) else {
            return;
        };
        let width = resize.start_size.width + (pointer.x - resize.start_pointer.x);
        let height = resize.start_size.height + (pointer.y - resize.start_pointer.y);
        if width >= min.width {
            entity.frame.width = width;
        }
        if height >= min.height {
            entity.frame.height = height;
        }
    }

    /// Release whichever gesture is in flight. Runs on every pointer-up on
    /// the whole surface, including releases outside any window; calling it
    /// with no gesture active does nothing.
    pub fn end_interaction(&mut self) {
        self.drag = None;
        self.resize = None;
    }

    /// Taskbar button click: an open or maximized window minimizes,
    /// anything else opens (which restores from minimized).
    pub fn taskbar_click(&mut self, id: WindowId, viewport: Size) {
        match self.state(id) {
            WindowState::Open | WindowState::Maximized => self.minimize(id),
            WindowState::Minimized | WindowState::Closed => self.open(id, viewport),
        }
    }
}

impl Default for DesktopManager {
    fn default() -> Self {
        Self::new()
    }
}
