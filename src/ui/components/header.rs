use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::screen::{BrowserScreen, FetchStatus};
use crate::ui::theme::Theme;

/// One-line bar: app name, route, data source, and load status.
pub struct HeaderBar<'a> {
    route: &'a str,
    source: &'a str,
    screen: &'a BrowserScreen,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> HeaderBar<'a> {
    pub fn new(
        route: &'a str,
        source: &'a str,
        screen: &'a BrowserScreen,
        theme: &'a Theme,
        locale: &'a str,
    ) -> Self {
        Self {
            route,
            source,
            screen,
            theme,
            locale,
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let base = Style::default().fg(colors.header_fg()).bg(colors.header_bg());

        let (status, status_style) = match self.screen.fetch_status() {
            FetchStatus::Idle | FetchStatus::InFlight(_) => {
                (t!("header.loading", locale = self.locale), base)
            }
            FetchStatus::Failed(_) => (
                t!("header.failed", locale = self.locale),
                base.fg(colors.error()),
            ),
            FetchStatus::Loaded => (
                t!("header.count", locale = self.locale, count = self.screen.len()),
                base.fg(colors.success()),
            ),
        };

        let line = Line::from(vec![
            Span::styled(" holonet ", base.add_modifier(Modifier::BOLD)),
            Span::styled(format!("| {} | {} | ", self.route, self.source), base),
            Span::styled(status.to_string(), status_style),
        ]);
        Paragraph::new(line).style(base).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CharacterRecord;

    fn render_buf(screen: &BrowserScreen) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("Overview", "swapi.dev", screen, &theme, "en").render(area, &mut buf);
        buf
    }

    fn render_text(screen: &BrowserScreen) -> String {
        let buf = render_buf(screen);
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    fn yoda() -> CharacterRecord {
        CharacterRecord {
            name: "Yoda".to_string(),
            height: "66".to_string(),
            gender: "male".to_string(),
            hair_color: "white".to_string(),
            eye_color: "brown".to_string(),
            birth_year: "896BBY".to_string(),
            url: "https://swapi.dev/api/people/20/".to_string(),
        }
    }

    #[test]
    fn test_header_while_loading() {
        let mut screen = BrowserScreen::new(Vec::new());
        screen.on_activate();
        let text = render_text(&screen);
        assert!(text.contains("Overview"));
        assert!(text.contains("swapi.dev"));
        assert!(text.contains("loading"));
    }

    #[test]
    fn test_header_shows_count() {
        let mut screen = BrowserScreen::new(Vec::new());
        let ticket = screen.on_activate().unwrap();
        screen.on_fetch_complete(ticket, Ok(vec![yoda(), yoda()]));
        assert!(render_text(&screen).contains("2 characters"));
    }

    #[test]
    fn test_count_uses_success_color() {
        let mut screen = BrowserScreen::new(Vec::new());
        let ticket = screen.on_activate().unwrap();
        screen.on_fetch_complete(ticket, Ok(vec![yoda()]));
        let text = render_text(&screen);
        let x = text.find("1 characters").unwrap() as u16;
        let buf = render_buf(&screen);
        assert_eq!(buf[(x, 0)].fg, Theme::default().colors.success());
        assert_ne!(buf[(0, 0)].fg, Theme::default().colors.success());
    }
}
