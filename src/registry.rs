//! Registry of currently open windows, backing the taskbar.
//!
//! Insertion order is taskbar display order, so entries live in a plain
//! vector; window counts are single digits. A minimized window keeps its
//! entry (its taskbar button stays clickable); only close removes it.

use crate::window::{WindowId, WindowMeta};

/// One taskbar button: the projection of a registry entry plus the active
/// flag derived from the z-order manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    entries: Vec<(WindowId, WindowMeta)>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` with its first-open meta. Idempotent: a window already
    /// present keeps the meta captured at its first registration.
    pub fn register(&mut self, id: WindowId, meta: WindowMeta) {
        if self.contains(id) {
            return;
        }
        tracing::debug!(window = %id, title = %meta.title, "registered window");
        self.entries.push((id, meta));
    }

    /// Remove `id`; no-op when absent.
    pub fn unregister(&mut self, id: WindowId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowMeta> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, meta)| meta)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project the registry into taskbar buttons in insertion order.
    /// Recomputed in full on every call; no diffing at these window counts.
    pub fn render(&self, active: Option<WindowId>) -> Vec<TaskbarEntry> {
        self.entries
            .iter()
            .map(|(id, meta)| TaskbarEntry {
                id: *id,
                title: meta.title.clone(),
                icon: meta.icon.clone(),
                is_active: active == Some(*id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str) -> WindowMeta {
        WindowMeta {
            title: title.to_string(),
            icon: "◉".to_string(),
        }
    }

    const ABOUT: WindowId = WindowId("about");
    const SKILLS: WindowId = WindowId("skills");

    #[test]
    fn register_is_idempotent_and_keeps_first_meta() {
        let mut registry = WindowRegistry::new();
        registry.register(ABOUT, meta("About Me"));
        registry.register(ABOUT, meta("Renamed"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ABOUT).map(|m| m.title.as_str()), Some("About Me"));
    }

    #[test]
    fn unregister_missing_is_noop() {
        let mut registry = WindowRegistry::new();
        registry.unregister(ABOUT);
        assert!(registry.is_empty());
    }

    #[test]
    fn render_preserves_insertion_order_and_marks_active() {
        let mut registry = WindowRegistry::new();
        registry.register(ABOUT, meta("About Me"));
        registry.register(SKILLS, meta("Skills"));
        let entries = registry.render(Some(SKILLS));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, ABOUT);
        assert!(!entries[0].is_active);
        assert_eq!(entries[1].id, SKILLS);
        assert!(entries[1].is_active);
    }

    #[test]
    fn render_with_no_active_window_marks_none() {
        let mut registry = WindowRegistry::new();
        registry.register(ABOUT, meta("About Me"));
        assert!(registry.render(None).iter().all(|e| !e.is_active));
    }
}
