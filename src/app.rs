use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::config::Config;
use crate::event::AppEvent;
use crate::fetcher;
use crate::screen::BrowserScreen;
use crate::source::RosterSource;
use crate::ui::theme::Theme;

/// Named routes the host can show. The browser is the only one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Overview,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Overview => "Overview",
        }
    }
}

/// Navigation host: owns the active screen and drives its lifecycle.
pub struct App {
    pub route: Route,
    pub screen: BrowserScreen,
    pub theme: Theme,
    pub config: Config,
    pub should_quit: bool,
    source: Arc<dyn RosterSource>,
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn RosterSource>, events: Sender<AppEvent>) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_else(|| {
            log::warn!("theme {:?} not found, using default", config.theme);
            Theme::default()
        });
        let screen = BrowserScreen::new(config.detail_fields());

        Self {
            route: Route::Overview,
            screen,
            theme,
            config,
            should_quit: false,
            source,
            events,
        }
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    pub fn source_label(&self) -> String {
        self.source.label()
    }

    /// Bring the route to the foreground, starting its fetch if it needs one.
    pub fn activate(&mut self) {
        if let Some(ticket) = self.screen.on_activate() {
            fetcher::spawn_fetch(Arc::clone(&self.source), ticket, self.events.clone());
        }
    }

    pub fn deactivate(&mut self) {
        self.screen.on_deactivate();
    }

    pub fn reload(&mut self) {
        log::info!("reloading {}", self.route.name());
        self.deactivate();
        self.activate();
    }

    pub fn quit(&mut self) {
        self.deactivate();
        self.should_quit = true;
    }

    /// Apply a non-input event. Key events are dispatched by the caller.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.screen.tick(),
            AppEvent::RosterFetched { ticket, result } => {
                self.screen.on_fetch_complete(ticket, result);
            }
            AppEvent::Key(_) | AppEvent::Resize(_, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::roster::CharacterRecord;
    use crate::screen::FetchStatus;
    use crate::source::FetchError;

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RosterSource for CountingSource {
        fn fetch_roster(&self) -> Result<Vec<CharacterRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status(500));
            }
            Ok(vec![CharacterRecord {
                name: "Obi-Wan Kenobi".to_string(),
                height: "182".to_string(),
                gender: "male".to_string(),
                hair_color: "auburn, white".to_string(),
                eye_color: "blue-gray".to_string(),
                birth_year: "57BBY".to_string(),
                url: "https://swapi.dev/api/people/10/".to_string(),
            }])
        }

        fn label(&self) -> String {
            "counting".to_string()
        }
    }

    fn make_app(fail: bool) -> (App, Arc<CountingSource>, mpsc::Receiver<AppEvent>) {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail,
        });
        let (tx, rx) = mpsc::channel();
        let app = App::new(Config::default(), source.clone(), tx);
        (app, source, rx)
    }

    fn pump_one(app: &mut App, rx: &mpsc::Receiver<AppEvent>) {
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        app.on_event(event);
    }

    #[test]
    fn test_route_name() {
        assert_eq!(Route::Overview.name(), "Overview");
    }

    #[test]
    fn test_activate_fetches_and_populates() {
        let (mut app, source, rx) = make_app(false);
        app.activate();
        pump_one(&mut app, &rx);
        assert_eq!(app.screen.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_double_activate_fetches_once() {
        let (mut app, source, rx) = make_app(false);
        app.activate();
        app.activate();
        pump_one(&mut app, &rx);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_fetch_is_contained() {
        let (mut app, _source, rx) = make_app(true);
        app.activate();
        pump_one(&mut app, &rx);
        assert!(app.screen.is_empty());
        assert!(matches!(app.screen.fetch_status(), FetchStatus::Failed(_)));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_reload_refetches() {
        let (mut app, source, rx) = make_app(false);
        app.activate();
        pump_one(&mut app, &rx);
        app.reload();
        pump_one(&mut app, &rx);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(app.screen.fetch_status(), &FetchStatus::Loaded);
    }

    #[test]
    fn test_result_after_quit_is_ignored() {
        let (mut app, _source, rx) = make_app(false);
        app.activate();
        app.quit();
        pump_one(&mut app, &rx);
        assert!(app.should_quit);
        assert!(app.screen.is_empty());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let (tx, _rx) = mpsc::channel();
        let config = Config {
            theme: "no-such-theme".to_string(),
            ..Config::default()
        };
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let app = App::new(config, source, tx);
        assert_eq!(app.theme.name, "rebel-purple");
    }
}
