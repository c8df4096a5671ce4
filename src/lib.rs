//! term-desk: a desktop-metaphor shell for terminal emulators.
//!
//! The crate splits into a pure window-manager core
//! ([`window::manager::DesktopManager`] plus [`geometry`], [`registry`],
//! and [`session`]) and a terminal front-end ([`desktop`], [`taskbar`])
//! that feeds it crossterm events and renders with ratatui. The core has
//! no terminal types in its signatures and is exercised directly by the
//! integration tests.

pub mod apps;
pub mod constants;
pub mod desktop;
pub mod effects;
pub mod geometry;
pub mod keybindings;
pub mod prefs;
pub mod registry;
pub mod session;
pub mod taskbar;
pub mod theme;
pub mod tracing_sub;
mod ui;
pub mod window;
