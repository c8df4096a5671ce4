//! Statically declared windows.
//!
//! The desktop ships a fixed set of windows; the core only consumes their
//! id, title, and icon, plus the digit each one is bound to for the
//! Alt+digit shortcut. Content lines are rendered verbatim by the terminal
//! front-end.

use crate::geometry::Size;
use crate::window::WindowId;

#[derive(Debug, Clone, Copy)]
pub struct WindowDef {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: &'static str,
    /// Digit bound to this window for the Alt+digit shortcut.
    pub shortcut: char,
    pub content: &'static [&'static str],
}

pub const DECLARED_WINDOWS: &[WindowDef] = &[
    WindowDef {
        id: WindowId("about"),
        title: "About Me",
        icon: "◉",
        shortcut: '1',
        content: &[
            "Alex Chen",
            "Systems engineer with a soft spot for terminals.",
            "",
            "This desktop is a demo shell: drag windows by their",
            "header, resize from the bottom-right corner, and use",
            "the taskbar to minimize and restore.",
        ],
    },
    WindowDef {
        id: WindowId("education"),
        title: "Education",
        icon: "✎",
        shortcut: '2',
        content: &[
            "B.Sc. Computer Science",
            "Focus: operating systems and human interfaces.",
            "",
            "Selected coursework: compilers, distributed systems,",
            "computer graphics.",
        ],
    },
    WindowDef {
        id: WindowId("skills"),
        title: "Skills",
        icon: "⚡",
        shortcut: '3',
        content: &[
            "Rust        ██████████░░",
            "Terminals   █████████░░░",
            "Networking  ████████░░░░",
            "Databases   ██████░░░░░░",
        ],
    },
    WindowDef {
        id: WindowId("projects"),
        title: "Projects",
        icon: "⌂",
        shortcut: '4',
        content: &[
            "term-desk   this desktop shell",
            "term-wm     a tiling/floating terminal window manager",
            "deskclock   a widget clock with weekday display",
        ],
    },
    WindowDef {
        id: WindowId("achievements"),
        title: "Achievements",
        icon: "★",
        shortcut: '5',
        content: &[
            "★ Shipped a window manager that fits in a terminal",
            "★ Zero open P1 bugs for a full release cycle",
            "★ Conference talk: 'Desktops Without Pixels'",
        ],
    },
    WindowDef {
        id: WindowId("contact"),
        title: "Contact",
        icon: "✉",
        shortcut: '6',
        content: &[
            "email   alexchen@example.com",
            "github  github.com/jzombie",
            "",
            "Escape closes this window.",
        ],
    },
];

/// Default size for a freshly opened window, in cell-scale units. The core
/// centers and clamps this against the live viewport.
pub const DEFAULT_WINDOW_CELLS: Size = Size {
    width: 56,
    height: 14,
};

/// Look up a declared window by id. Unknown ids resolve to `None`, which
/// makes every core operation on them a no-op.
pub fn window_def(id: WindowId) -> Option<&'static WindowDef> {
    DECLARED_WINDOWS.iter().find(|def| def.id == id)
}

/// Resolve the Alt+digit shortcut map.
pub fn window_for_digit(digit: char) -> Option<WindowId> {
    DECLARED_WINDOWS
        .iter()
        .find(|def| def.shortcut == digit)
        .map(|def| def.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_ids_are_unique() {
        for (i, def) in DECLARED_WINDOWS.iter().enumerate() {
            for other in &DECLARED_WINDOWS[i + 1..] {
                assert_ne!(def.id, other.id);
                assert_ne!(def.shortcut, other.shortcut);
            }
        }
    }

    #[test]
    fn digit_map_covers_one_through_six() {
        for digit in '1'..='6' {
            assert!(window_for_digit(digit).is_some(), "digit {digit} unmapped");
        }
        assert!(window_for_digit('7').is_none());
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert!(window_def(WindowId("settings")).is_none());
    }
}
