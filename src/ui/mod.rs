pub mod components;
pub mod layout;
pub mod plain;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use crate::app::App;
use crate::roster::field::DetailField;
use components::character_list::{self, CharacterList};
use components::detail_modal::DetailModal;
use components::header::HeaderBar;
use layout::{BrowserLayout, pack_hint_lines};

pub fn field_label(field: DetailField, locale: &str) -> String {
    match field {
        DetailField::Height => t!("field.height", locale = locale),
        DetailField::Gender => t!("field.gender", locale = locale),
        DetailField::HairColor => t!("field.hair_color", locale = locale),
        DetailField::EyeColor => t!("field.eye_color", locale = locale),
        DetailField::BirthYear => t!("field.birth_year", locale = locale),
    }
    .to_string()
}

fn footer_hints(app: &App) -> Vec<String> {
    let locale = app.locale();
    if app.screen.modal().is_open() {
        vec![t!("hints.close", locale = locale).to_string()]
    } else {
        vec![
            t!("hints.move", locale = locale).to_string(),
            t!("hints.details", locale = locale).to_string(),
            t!("hints.reload", locale = locale).to_string(),
            t!("hints.quit", locale = locale).to_string(),
        ]
    }
}

/// Split `area` for the current screen. The footer grows when the key hints
/// wrap on narrow terminals.
fn browser_layout(app: &App, area: Rect) -> (BrowserLayout, Vec<String>) {
    let hints = footer_hints(app);
    let hint_refs: Vec<&str> = hints.iter().map(String::as_str).collect();
    let hint_lines = pack_hint_lines(&hint_refs, area.width as usize);
    let layout = BrowserLayout::new(area, hint_lines.len() as u16);
    (layout, hint_lines)
}

/// Character entries shown at once when the app fills `area`.
pub fn list_capacity(app: &App, area: Rect) -> usize {
    let (layout, _) = browser_layout(app, area);
    character_list::visible_rows(layout.list)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let locale = app.locale();

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let (layout, hint_lines) = browser_layout(app, area);

    let source = app.source_label();
    frame.render_widget(
        HeaderBar::new(app.route.name(), &source, &app.screen, &app.theme, locale),
        layout.header,
    );
    frame.render_widget(
        CharacterList::new(&app.screen, &app.theme, locale),
        layout.list,
    );

    let footer = Paragraph::new(hint_lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(colors.muted()).bg(colors.bg()));
    frame.render_widget(footer, layout.footer);

    if let Some(detail) = app.screen.detail() {
        let progress = app.screen.modal().slide_progress();
        frame.render_widget(
            DetailModal::new(detail, progress, &app.theme, locale),
            area,
        );
    }
}
