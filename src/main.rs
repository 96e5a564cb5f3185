use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::layout::Rect;
use ratatui::backend::CrosstermBackend;

use holonet::app::App;
use holonet::config::{Config, Overrides};
use holonet::event::{AppEvent, EventHandler};
use holonet::logging::{self, LogTarget};
use holonet::screen::BrowserScreen;
use holonet::source::{HttpRosterSource, RosterSource};
use holonet::ui;

#[derive(Parser)]
#[command(
    name = "holonet",
    version,
    about = "Browse the Star Wars API character roster in your terminal"
)]
struct Cli {
    #[arg(short, long, help = "Listing endpoint: py4e, swapi.dev, or a full url")]
    endpoint: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Detail fields to show (height,gender,hair_color,eye_color,birth_year)"
    )]
    fields: Option<Vec<String>>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Interface language (en, pt-BR)")]
    locale: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    timeout: Option<u64>,

    #[arg(long, help = "Print the roster to stdout instead of opening the browser")]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: ignoring config file: {err:#}");
        Config::default()
    });
    config.apply_overrides(Overrides {
        endpoint: cli.endpoint,
        detail_fields: cli.fields,
        theme: cli.theme,
        locale: cli.locale,
        request_timeout_secs: cli.timeout,
    });
    config.normalize_locale(&holonet::available_locales());

    let source: Arc<dyn RosterSource> = Arc::new(HttpRosterSource::new(
        config.endpoint(),
        config.request_timeout(),
    ));

    if cli.list {
        if let Err(err) = logging::init(LogTarget::Stderr) {
            eprintln!("Warning: logging disabled: {err:#}");
        }
        return run_list(&config, &*source);
    }

    if let Err(err) = logging::init(LogTarget::File(config.log_path())) {
        eprintln!("Warning: logging disabled: {err:#}");
    }
    log::info!("starting holonet against {}", source.label());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    let mut app = App::new(config, source, events.sender());
    app.activate();

    let result = run_app(&mut terminal, &mut app, &events);

    app.deactivate();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("event loop failed: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_list(config: &Config, source: &dyn RosterSource) -> Result<()> {
    let mut screen = BrowserScreen::new(config.detail_fields());
    if let Some(ticket) = screen.on_activate() {
        screen.on_fetch_complete(ticket, source.fetch_roster());
    }
    for line in ui::plain::roster_report(&mut screen, &config.locale) {
        println!("{line}");
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            other => app.on_event(other),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // The modal blocks the list underneath.
    if app.screen.modal().is_open() {
        handle_modal_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc
        | KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Char('q')
        | KeyCode::Char('c') => app.screen.dismiss(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.screen.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.screen.cursor_up(),
        KeyCode::Home | KeyCode::Char('g') => app.screen.cursor_first(),
        KeyCode::End | KeyCode::Char('G') => app.screen.cursor_last(),
        KeyCode::PageDown => {
            let rows = page_rows(app);
            app.screen.page_down(rows);
        }
        KeyCode::PageUp => {
            let rows = page_rows(app);
            app.screen.page_up(rows);
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('v') => {
            app.screen.view_details();
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let slot = digit as usize - '1' as usize;
            let rows = page_rows(app);
            app.screen.select_visible(slot, rows);
        }
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

/// List entries that fit on one screen, for paging and number keys.
fn page_rows(app: &App) -> usize {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    ui::list_capacity(app, Rect::new(0, 0, width, height)).max(1)
}
