use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_desk::desktop::Desktop;
use term_desk::prefs::Preferences;
use term_desk::theme::{Theme, Wallpaper};
use term_desk::tracing_sub;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "term-desk", version, about)]
struct Cli {
    /// Override the persisted theme (dark or light).
    #[arg(long)]
    theme: Option<Theme>,

    /// Override the persisted wallpaper preset.
    #[arg(long)]
    wallpaper: Option<Wallpaper>,

    /// Skip the welcome overlay and its automatic first window.
    #[arg(long)]
    no_welcome: bool,

    /// Append debug logs to this file. Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        tracing_sub::set_log_file(path)?;
    }
    tracing_sub::init_default();

    let mut prefs = Preferences::load_or_default();
    if let Some(theme) = cli.theme {
        prefs.theme = theme;
    }
    if let Some(wallpaper) = cli.wallpaper {
        prefs.wallpaper = wallpaper;
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, prefs, !cli.no_welcome);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    prefs: Preferences,
    show_welcome: bool,
) -> io::Result<()> {
    let mut desktop = Desktop::new(
        prefs,
        Preferences::default_path().ok(),
        show_welcome,
        Instant::now(),
    );

    loop {
        desktop.tick(Instant::now());
        terminal.draw(|frame| desktop.draw(frame.buffer_mut(), Local::now()))?;

        if event::poll(POLL_INTERVAL)? {
            // Drain the queue so a burst of mouse-drag events does not
            // leave rendering behind the input stream.
            loop {
                let ev = event::read()?;
                desktop.handle_event(&ev, Instant::now());
                if desktop.should_quit() || !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }
        if desktop.should_quit() {
            break;
        }
    }

    Ok(())
}
