//! Terminal taskbar and start menu.
//!
//! The taskbar is a pure function of the registry projection: every frame
//! it re-renders the start button, one button per open window, the theme
//! toggle, and the clock, capturing hit rectangles for the mouse dispatch
//! that follows. No incremental diffing; window counts are tiny.

use crossterm::event::{Event, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::WindowDef;
use crate::registry::TaskbarEntry;
use crate::theme::{self, Theme, Wallpaper};
use crate::ui::{rect_contains, safe_set_string, truncate_to_width};
use crate::window::WindowId;

#[derive(Debug, Clone, Copy)]
struct WindowHit {
    id: WindowId,
    rect: Rect,
}

#[derive(Debug, Default)]
pub struct Taskbar {
    area: Rect,
    start_rect: Option<Rect>,
    theme_rect: Option<Rect>,
    window_hits: Vec<WindowHit>,
    menu_bounds: Option<Rect>,
    menu_item_hits: Vec<WindowHit>,
    menu_wallpaper_rect: Option<Rect>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit rectangles describe the last rendered frame only.
    pub fn begin_frame(&mut self) {
        self.start_rect = None;
        self.theme_rect = None;
        self.window_hits.clear();
        self.menu_bounds = None;
        self.menu_item_hits.clear();
        self.menu_wallpaper_rect = None;
    }

    /// Split the terminal area into the desktop surface and the bottom
    /// taskbar strip of `height` rows.
    pub fn split_area(&mut self, area: Rect, height: u16) -> (Rect, Rect) {
        let bar_h = height.min(area.height);
        let bar = Rect {
            x: area.x,
            y: area.y.saturating_add(area.height).saturating_sub(bar_h),
            width: area.width,
            height: bar_h,
        };
        let desktop = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(bar_h),
        };
        self.area = bar;
        (desktop, bar)
    }

    pub fn render(
        &mut self,
        buffer: &mut Buffer,
        theme: Theme,
        entries: &[TaskbarEntry],
        clock: &str,
        menu_open: bool,
    ) {
        let area = self.area;
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(theme::taskbar_bg(theme))
            .fg(theme::taskbar_fg(theme));
        crate::ui::fill_rect(buffer, bounds, base);

        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        let mut x = area.x;

        const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
        let start_label = format!("≡ {CRATE_NAME}");
        let start_width = start_label.chars().count() as u16;
        if x.saturating_add(start_width) <= max_x {
            let style = if menu_open {
                Style::default()
                    .bg(theme::menu_selected_bg(theme))
                    .fg(theme::menu_selected_fg(theme))
                    .add_modifier(Modifier::BOLD)
            } else {
                base.add_modifier(Modifier::BOLD)
            };
            safe_set_string(buffer, bounds, x, y, &start_label, style);
            self.start_rect = Some(Rect {
                x,
                y,
                width: start_width,
                height: 1,
            });
            x = x.saturating_add(start_width).saturating_add(1);
        }

        // One button per open window, insertion order.
        for entry in entries {
            let label = format!(" {} {} ", entry.icon, entry.title);
            let label = truncate_to_width(&label, max_x.saturating_sub(x) as usize);
            let width = label.chars().count() as u16;
            if width == 0 || x.saturating_add(width) > max_x {
                break;
            }
            let style = if entry.is_active {
                Style::default()
                    .bg(theme::taskbar_active_bg(theme))
                    .fg(theme::taskbar_active_fg(theme))
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            safe_set_string(buffer, bounds, x, y, &label, style);
            self.window_hits.push(WindowHit {
                id: entry.id,
                rect: Rect {
                    x,
                    y,
                    width,
                    height: 1,
                },
            });
            x = x.saturating_add(width);
        }

        // Right side: theme toggle then clock.
        let theme_label = match theme {
            Theme::Dark => "[☾]",
            Theme::Light => "[☀]",
        };
        let clock_width = clock.chars().count() as u16;
        let theme_width = theme_label.chars().count() as u16;
        let right_width = clock_width.saturating_add(theme_width).saturating_add(1);
        if right_width < area.width {
            let mut cursor = max_x.saturating_sub(right_width);
            safe_set_string(buffer, bounds, cursor, y, theme_label, base);
            self.theme_rect = Some(Rect {
                x: cursor,
                y,
                width: theme_width,
                height: 1,
            });
            cursor = cursor.saturating_add(theme_width).saturating_add(1);
            safe_set_string(buffer, bounds, cursor, y, clock, base);
        }
    }

    /// Pop the start menu above the taskbar: one row per declared window
    /// (with its shortcut hint), a rule, then the wallpaper-cycling entry.
    pub fn render_menu(
        &mut self,
        buffer: &mut Buffer,
        theme: Theme,
        items: &[WindowDef],
        shortcuts: &[String],
        wallpaper: Wallpaper,
    ) {
        let Some(anchor) = self.start_rect else {
            return;
        };
        if items.is_empty() {
            return;
        }
        let label_width = items
            .iter()
            .map(|def| def.title.chars().count() + 4)
            .max()
            .unwrap_or(8);
        let shortcut_width = shortcuts
            .iter()
            .map(|combo| combo.chars().count())
            .max()
            .unwrap_or(0);
        let wallpaper_label = format!(" ▦ wallpaper: {}", wallpaper.as_str());
        let width = (label_width + shortcut_width + 2)
            .max(wallpaper_label.chars().count() + 1) as u16;
        let height = items.len() as u16 + 2;
        let y = anchor.y.saturating_sub(height);
        let menu = Rect {
            x: anchor.x,
            y,
            width,
            height,
        };
        let bounds = menu.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let style = Style::default()
            .bg(theme::menu_bg(theme))
            .fg(theme::menu_fg(theme));
        crate::ui::fill_rect(buffer, bounds, style);
        self.menu_bounds = Some(menu);
        for (idx, def) in items.iter().enumerate() {
            let row = y.saturating_add(idx as u16);
            let line = format!(" {} {}", def.icon, def.title);
            safe_set_string(buffer, bounds, menu.x, row, &line, style);
            if let Some(combo) = shortcuts.get(idx).filter(|combo| !combo.is_empty()) {
                let combo_width = combo.chars().count() as u16;
                let x = menu
                    .x
                    .saturating_add(menu.width)
                    .saturating_sub(combo_width + 1);
                safe_set_string(buffer, bounds, x, row, combo, style.add_modifier(Modifier::DIM));
            }
            self.menu_item_hits.push(WindowHit {
                id: def.id,
                rect: Rect {
                    x: menu.x,
                    y: row,
                    width: menu.width,
                    height: 1,
                },
            });
        }
        // inert rule between the windows and the wallpaper entry
        let rule_row = y.saturating_add(items.len() as u16);
        let rule: String = "─".repeat(width as usize);
        safe_set_string(buffer, bounds, menu.x, rule_row, &rule, style);
        let wallpaper_row = rule_row.saturating_add(1);
        safe_set_string(buffer, bounds, menu.x, wallpaper_row, &wallpaper_label, style);
        self.menu_wallpaper_rect = Some(Rect {
            x: menu.x,
            y: wallpaper_row,
            width: menu.width,
            height: 1,
        });
    }

    fn mouse_down(event: &Event) -> Option<(u16, u16)> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        matches!(mouse.kind, MouseEventKind::Down(_)).then_some((mouse.column, mouse.row))
    }

    pub fn hit_test_start(&self, event: &Event) -> bool {
        Self::mouse_down(event).is_some_and(|(col, row)| {
            self.start_rect
                .is_some_and(|rect| rect_contains(rect, col, row))
        })
    }

    pub fn hit_test_theme(&self, event: &Event) -> bool {
        Self::mouse_down(event).is_some_and(|(col, row)| {
            self.theme_rect
                .is_some_and(|rect| rect_contains(rect, col, row))
        })
    }

    pub fn hit_test_window(&self, event: &Event) -> Option<WindowId> {
        let (col, row) = Self::mouse_down(event)?;
        self.window_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, col, row))
            .map(|hit| hit.id)
    }

    pub fn hit_test_menu_item(&self, event: &Event) -> Option<WindowId> {
        let (col, row) = Self::mouse_down(event)?;
        self.menu_item_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, col, row))
            .map(|hit| hit.id)
    }

    pub fn hit_test_menu_wallpaper(&self, event: &Event) -> bool {
        Self::mouse_down(event).is_some_and(|(col, row)| {
            self.menu_wallpaper_rect
                .is_some_and(|rect| rect_contains(rect, col, row))
        })
    }

    pub fn menu_contains(&self, column: u16, row: u16) -> bool {
        self.menu_bounds
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};

    fn down(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn entry(id: &'static str, active: bool) -> TaskbarEntry {
        TaskbarEntry {
            id: WindowId(id),
            title: id.to_string(),
            icon: "◉".to_string(),
            is_active: active,
        }
    }

    #[test]
    fn split_reserves_bottom_rows() {
        let mut bar = Taskbar::new();
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (desktop, strip) = bar.split_area(area, 1);
        assert_eq!(desktop.height, 23);
        assert_eq!(strip.y, 23);
        assert_eq!(strip.height, 1);
    }

    #[test]
    fn render_captures_hits_for_start_windows_and_theme() {
        let mut bar = Taskbar::new();
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (_, strip) = bar.split_area(area, 1);
        let mut buffer = Buffer::empty(area);
        bar.begin_frame();
        bar.render(
            &mut buffer,
            Theme::Dark,
            &[entry("about", true), entry("skills", false)],
            "12:34",
            false,
        );
        assert!(bar.hit_test_start(&down(0, strip.y)));
        // first window button sits after "≡ term-desk "
        let first = bar.window_hits[0];
        assert_eq!(first.id, WindowId("about"));
        assert_eq!(bar.hit_test_window(&down(first.rect.x, strip.y)), Some(WindowId("about")));
        // theme toggle near the right edge
        let theme_rect = bar.theme_rect.unwrap();
        assert!(bar.hit_test_theme(&down(theme_rect.x, strip.y)));
        // misses return nothing
        assert_eq!(bar.hit_test_window(&down(79, 0)), None);
    }

    #[test]
    fn menu_items_hit_above_the_bar() {
        let mut bar = Taskbar::new();
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        bar.split_area(area, 1);
        let mut buffer = Buffer::empty(area);
        bar.begin_frame();
        bar.render(&mut buffer, Theme::Dark, &[], "12:34", true);
        bar.render_menu(
            &mut buffer,
            Theme::Dark,
            crate::apps::DECLARED_WINDOWS,
            &[],
            Wallpaper::Default,
        );
        // window rows, then a rule row, then the wallpaper entry
        let count = crate::apps::DECLARED_WINDOWS.len() as u16;
        let first_row = 23 - (count + 2);
        assert_eq!(
            bar.hit_test_menu_item(&down(1, first_row)),
            Some(crate::apps::DECLARED_WINDOWS[0].id)
        );
        let rule_row = first_row + count;
        assert_eq!(bar.hit_test_menu_item(&down(1, rule_row)), None);
        assert!(!bar.hit_test_menu_wallpaper(&down(1, rule_row)));
        assert!(bar.hit_test_menu_wallpaper(&down(1, rule_row + 1)));
        assert!(bar.menu_contains(1, rule_row));
        assert!(!bar.menu_contains(1, 0));
    }
}
