//! Terminal front-end for the desktop session.
//!
//! `Desktop` owns the window-manager core plus everything presentational:
//! taskbar, start menu, wallpaper, particles, icons, and the welcome
//! overlay. It translates crossterm events into core transitions and draws
//! the whole surface into a ratatui buffer once per frame. The core never
//! sees a terminal type.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::{self, DECLARED_WINDOWS};
use crate::constants::{DOUBLE_CLICK_MILLIS, WELCOME_MILLIS};
use crate::effects::{ParticleField, clock_text, weekday_text};
use crate::geometry::{self, DeskRect, DesktopMetrics, HeaderAction, Point, Size};
use crate::keybindings::{Action, KeyBindings};
use crate::prefs::Preferences;
use crate::taskbar::Taskbar;
use crate::theme::{self, Theme, Wallpaper};
use crate::ui::{fill_rect, rect_contains, safe_set_string};
use crate::window::{WindowId, manager::DesktopManager};

const WELCOME_ART: &str = indoc! {"
    ╭───────────────────────────────╮
    │                               │
    │      w e l c o m e            │
    │                               │
    │   starting the desktop...     │
    │                               │
    ╰───────────────────────────────╯
"};

/// The window each Alt+digit-less path (welcome timeout, welcome click)
/// lands on.
const HOME_WINDOW: WindowId = WindowId("about");

pub struct Desktop {
    manager: DesktopManager,
    taskbar: Taskbar,
    bindings: KeyBindings,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    particles: ParticleField,
    menu_open: bool,
    welcome_until: Option<Instant>,
    icon_hits: Vec<(WindowId, Rect)>,
    last_icon_click: Option<(WindowId, Instant)>,
    viewport: Size,
    quit: bool,
}

impl Desktop {
    /// `prefs_path` is where toggles are written back immediately; `None`
    /// keeps preference changes in memory only.
    pub fn new(
        prefs: Preferences,
        prefs_path: Option<PathBuf>,
        show_welcome: bool,
        now: Instant,
    ) -> Self {
        Self {
            manager: DesktopManager::with_metrics(
                DesktopMetrics::cells(),
                apps::DEFAULT_WINDOW_CELLS,
            ),
            taskbar: Taskbar::new(),
            bindings: KeyBindings::default(),
            prefs,
            prefs_path,
            particles: ParticleField::from_time(),
            menu_open: false,
            welcome_until: show_welcome
                .then(|| now + Duration::from_millis(WELCOME_MILLIS)),
            icon_hits: Vec::new(),
            last_icon_click: None,
            viewport: Size::default(),
            quit: false,
        }
    }

    pub fn manager(&self) -> &DesktopManager {
        &self.manager
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn wallpaper(&self) -> Wallpaper {
        self.prefs.wallpaper
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Idle-frame housekeeping: advance the particles and expire the
    /// welcome overlay, which opens the home window once.
    pub fn tick(&mut self, now: Instant) {
        self.particles.tick();
        if self.welcome_until.is_some_and(|deadline| now >= deadline) {
            self.dismiss_welcome();
        }
    }

    fn dismiss_welcome(&mut self) {
        if self.welcome_until.take().is_some() {
            self.manager.open(HOME_WINDOW, self.viewport);
        }
    }

    fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggled();
        tracing::debug!(theme = self.prefs.theme.as_str(), "toggled theme");
        self.persist_prefs();
    }

    fn cycle_wallpaper(&mut self) {
        self.prefs.wallpaper = self.prefs.wallpaper.next();
        tracing::debug!(wallpaper = self.prefs.wallpaper.as_str(), "cycled wallpaper");
        self.persist_prefs();
    }

    /// Write the preferences straight back on every toggle; a write failure
    /// is logged and the in-memory value stays authoritative.
    fn persist_prefs(&self) {
        if let Some(path) = &self.prefs_path
            && let Err(err) = self.prefs.save_to(path)
        {
            tracing::warn!(%err, "failed to persist preferences");
        }
    }

    // Event dispatch

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = self.bindings.action_for_key(key) {
                    self.run_action(action);
                } else if self.welcome_until.is_some() {
                    self.dismiss_welcome();
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.on_mouse_down(event, mouse.column, mouse.row, now);
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    let pointer = Point::new(mouse.column as i32, mouse.row as i32);
                    self.manager.drag_move(pointer, self.viewport);
                    self.manager.resize_move(pointer);
                }
                MouseEventKind::Up(_) => self.manager.end_interaction(),
                _ => {}
            },
            Event::Resize(width, height) => {
                self.viewport = Size::new(*width as i32, *height as i32);
            }
            _ => {}
        }
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::CloseActiveWindow => {
                if self.menu_open {
                    self.menu_open = false;
                } else {
                    self.manager.close_active();
                }
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleStartMenu => self.menu_open = !self.menu_open,
            Action::OpenWindow(id) => {
                self.dismiss_welcome_quietly();
                self.manager.open(id, self.viewport);
            }
        }
    }

    /// Drop the welcome overlay without its open-home side effect; used
    /// when the input itself already opens a window.
    fn dismiss_welcome_quietly(&mut self) {
        self.welcome_until = None;
    }

    fn on_mouse_down(&mut self, event: &Event, column: u16, row: u16, now: Instant) {
        if self.welcome_until.is_some() {
            self.dismiss_welcome();
            return;
        }
        if self.menu_open {
            if let Some(id) = self.taskbar.hit_test_menu_item(event) {
                self.menu_open = false;
                self.manager.open(id, self.viewport);
            } else if self.taskbar.hit_test_menu_wallpaper(event) {
                // stays open so the presets can be cycled through
                self.cycle_wallpaper();
            } else if self.taskbar.menu_contains(column, row) {
                // inert menu chrome (the rule row)
            } else {
                // any click outside the menu closes it, including the
                // start button itself
                self.menu_open = false;
            }
            return;
        }
        if self.taskbar.contains(column, row) {
            if self.taskbar.hit_test_start(event) {
                self.menu_open = true;
            } else if self.taskbar.hit_test_theme(event) {
                self.toggle_theme();
            } else if let Some(id) = self.taskbar.hit_test_window(event) {
                self.manager.taskbar_click(id, self.viewport);
            }
            return;
        }

        let pointer = Point::new(column as i32, row as i32);
        // windows, topmost first
        let stacked = self.manager.stacked();
        for id in stacked.into_iter().rev() {
            let Some(frame) = self.manager.frame(id) else {
                continue;
            };
            if !frame.contains(pointer) {
                continue;
            }
            if self.manager.begin_resize(id, pointer) {
                return;
            }
            match geometry::header_action(pointer, frame, self.manager.metrics()) {
                HeaderAction::Drag => {
                    self.manager.begin_drag(id, pointer);
                }
                HeaderAction::Minimize => self.manager.minimize(id),
                HeaderAction::Maximize => self.manager.toggle_maximize(id, self.viewport),
                HeaderAction::Close => self.manager.close(id),
                HeaderAction::None => self.manager.bring_to_front(id),
            }
            return;
        }

        // desktop icons: open on double-click
        let hit = self
            .icon_hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(id, _)| *id);
        if let Some(id) = hit {
            let is_double = self
                .last_icon_click
                .is_some_and(|(last_id, at)| {
                    last_id == id && now.duration_since(at).as_millis() <= DOUBLE_CLICK_MILLIS as u128
                });
            if is_double {
                self.last_icon_click = None;
                self.manager.open(id, self.viewport);
            } else {
                self.last_icon_click = Some((id, now));
            }
        }
    }

    // Rendering

    pub fn draw(&mut self, buffer: &mut Buffer, now: DateTime<Local>) {
        let area = buffer.area;
        self.viewport = Size::new(area.width as i32, area.height as i32);
        self.taskbar.begin_frame();
        self.icon_hits.clear();

        let reserved = self.manager.metrics().taskbar_reserved.max(0) as u16;
        let (desktop_area, _) = self.taskbar.split_area(area, reserved);

        self.draw_wallpaper(buffer, desktop_area);
        self.draw_particles(buffer, desktop_area);
        self.draw_icons(buffer, desktop_area);
        self.draw_clock_widget(buffer, desktop_area, now);

        for id in self.manager.stacked() {
            if let Some(frame) = self.manager.frame(id) {
                let focused = self.manager.active_window() == Some(id);
                self.draw_window(buffer, desktop_area, id, frame, focused);
            }
        }

        if self.welcome_until.is_some() {
            self.draw_welcome(buffer, desktop_area);
        }

        let entries = self.manager.taskbar();
        self.taskbar.render(
            buffer,
            self.prefs.theme,
            &entries,
            &clock_text(now),
            self.menu_open,
        );
        if self.menu_open {
            let shortcuts: Vec<String> = DECLARED_WINDOWS
                .iter()
                .map(|def| {
                    self.bindings
                        .combos_for(Action::OpenWindow(def.id))
                        .into_iter()
                        .next()
                        .unwrap_or_default()
                })
                .collect();
            self.taskbar.render_menu(
                buffer,
                self.prefs.theme,
                DECLARED_WINDOWS,
                &shortcuts,
                self.prefs.wallpaper,
            );
        }
    }

    fn draw_wallpaper(&self, buffer: &mut Buffer, area: Rect) {
        let style = Style::default()
            .bg(self.prefs.wallpaper.background())
            .fg(theme::icon_fg(self.prefs.theme));
        fill_rect(buffer, area, style);
    }

    fn draw_particles(&self, buffer: &mut Buffer, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(theme::particle_fg(self.prefs.theme));
        for particle in self.particles.particles() {
            let x = area.x + (particle.x * area.width as f32) as u16;
            let y = area.y + (particle.y * area.height as f32) as u16;
            if rect_contains(area, x, y)
                && let Some(cell) = buffer.cell_mut((x, y))
            {
                cell.set_symbol(particle.glyph());
                cell.set_style(style);
            }
        }
    }

    fn draw_icons(&mut self, buffer: &mut Buffer, area: Rect) {
        let style = Style::default().fg(theme::icon_fg(self.prefs.theme));
        for (idx, def) in DECLARED_WINDOWS.iter().enumerate() {
            let y = area.y + 1 + (idx as u16) * 2;
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let label = format!("{} {}", def.icon, def.title);
            let width = label.chars().count() as u16;
            safe_set_string(buffer, area, area.x + 2, y, &label, style);
            self.icon_hits.push((
                def.id,
                Rect {
                    x: area.x + 2,
                    y,
                    width,
                    height: 1,
                },
            ));
        }
    }

    fn draw_clock_widget(&self, buffer: &mut Buffer, area: Rect, now: DateTime<Local>) {
        let clock = clock_text(now);
        let weekday = weekday_text(now);
        let style = Style::default()
            .fg(theme::icon_fg(self.prefs.theme))
            .add_modifier(Modifier::BOLD);
        let right = area.x.saturating_add(area.width);
        let x = right.saturating_sub(clock.chars().count() as u16 + 2);
        safe_set_string(buffer, area, x, area.y + 1, &clock, style);
        let x = right.saturating_sub(weekday.chars().count() as u16 + 2);
        safe_set_string(buffer, area, x, area.y + 2, &weekday, style.remove_modifier(Modifier::BOLD));
    }

    fn draw_window(
        &self,
        buffer: &mut Buffer,
        desktop_area: Rect,
        id: WindowId,
        frame: DeskRect,
        focused: bool,
    ) {
        let rect = cell_rect(frame);
        let clip = rect.intersection(desktop_area);
        if clip.width == 0 || clip.height == 0 {
            return;
        }
        let theme = self.prefs.theme;
        fill_rect(
            buffer,
            clip,
            Style::default()
                .bg(theme::window_bg(theme))
                .fg(theme::window_fg(theme)),
        );

        // header band: icon + title on the left, controls on the right
        let metrics = self.manager.metrics();
        let header_height = (metrics.header_height.max(0) as u16).min(rect.height);
        let header = Rect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: header_height,
        }
        .intersection(clip);
        let header_style = Style::default()
            .bg(theme::header_bg(theme, focused))
            .fg(theme::header_fg(theme, focused));
        fill_rect(buffer, header, header_style);
        let title = self
            .manager
            .registry()
            .get(id)
            .map(|meta| format!(" {} {}", meta.icon, meta.title))
            .unwrap_or_default();
        safe_set_string(buffer, header, rect.x, rect.y, &title, header_style);
        let controls_x = rect
            .x
            .saturating_add(rect.width)
            .saturating_sub(metrics.controls_width.max(0) as u16);
        safe_set_string(buffer, header, controls_x, rect.y, " ─ □ ×", header_style);

        // body content below the header
        let body_style = Style::default()
            .bg(theme::window_bg(theme))
            .fg(theme::window_fg(theme));
        if let Some(def) = apps::window_def(id) {
            for (idx, line) in def.content.iter().enumerate() {
                let y = rect.y + header_height + 1 + idx as u16;
                if y + 1 >= clip.y.saturating_add(clip.height) {
                    break;
                }
                safe_set_string(buffer, clip, rect.x + 2, y, line, body_style);
            }
        }

        // resize affordance in the bottom-right corner
        let corner = (
            rect.x.saturating_add(rect.width).saturating_sub(1),
            rect.y.saturating_add(rect.height).saturating_sub(1),
        );
        if rect_contains(clip, corner.0, corner.1)
            && let Some(cell) = buffer.cell_mut(corner)
        {
            cell.set_symbol("◢");
            cell.set_fg(theme::window_border(theme));
        }
    }

    fn draw_welcome(&self, buffer: &mut Buffer, area: Rect) {
        let lines: Vec<&str> = WELCOME_ART.lines().collect();
        let height = lines.len() as u16;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16;
        if width > area.width || height > area.height {
            return;
        }
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let style = Style::default()
            .bg(theme::window_bg(self.prefs.theme))
            .fg(theme::icon_fg(self.prefs.theme));
        let bounds = Rect {
            x,
            y,
            width,
            height,
        }
        .intersection(area);
        fill_rect(buffer, bounds, style);
        for (idx, line) in lines.iter().enumerate() {
            safe_set_string(buffer, bounds, x, y + idx as u16, line, style);
        }
    }
}

/// Convert a core rect (signed, but clamped non-negative by the manager)
/// into a buffer rect.
fn cell_rect(rect: DeskRect) -> Rect {
    Rect {
        x: rect.x.max(0) as u16,
        y: rect.y.max(0) as u16,
        width: rect.width.clamp(0, u16::MAX as i32) as u16,
        height: rect.height.clamp(0, u16::MAX as i32) as u16,
    }
}
