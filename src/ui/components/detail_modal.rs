use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use rust_i18n::t;

use crate::screen::DetailView;
use crate::screen::modal::slide_offset;
use crate::ui::field_label;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Read-only overlay for the selected record. Renders over the whole
/// screen: dims everything beneath, then draws the popup at its current
/// slide position.
pub struct DetailModal<'a> {
    detail: DetailView<'a>,
    progress: f64,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> DetailModal<'a> {
    pub fn new(detail: DetailView<'a>, progress: f64, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            detail,
            progress,
            theme,
            locale,
        }
    }

    /// Where the popup sits once the slide-in has finished.
    pub fn resting_area(&self, area: Rect) -> Rect {
        // borders + blank + fields + blank + close button
        let height = self.detail.fields.len() as u16 + 5;
        centered_rect(60, height, area)
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        buf.set_style(
            area,
            Style::default().bg(colors.backdrop()).fg(colors.muted()),
        );

        let resting = self.resting_area(area);
        let travel = area.bottom().saturating_sub(resting.y);
        let offset = slide_offset(self.progress, travel);
        let popup = Rect::new(
            resting.x,
            resting.y.saturating_add(offset),
            resting.width,
            resting.height,
        )
        .intersection(area);
        if popup.is_empty() {
            return;
        }

        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" {} ", self.detail.record.name),
                Style::default()
                    .fg(colors.modal_title())
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.modal_title()))
            .style(Style::default().bg(colors.modal_bg()).fg(colors.modal_fg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::from("")];
        for (field, value) in &self.detail.fields {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", field_label(*field, self.locale)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.clone()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!(" {} ", t!("modal.close", locale = self.locale)),
                Style::default()
                    .bg(colors.button_bg())
                    .fg(colors.button_fg())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CharacterRecord;
    use crate::roster::field::DetailField;

    fn luke() -> CharacterRecord {
        CharacterRecord {
            name: "Luke Skywalker".to_string(),
            height: "172".to_string(),
            gender: "male".to_string(),
            hair_color: "blond".to_string(),
            eye_color: "blue".to_string(),
            birth_year: "19BBY".to_string(),
            url: "https://swapi.dev/api/people/1/".to_string(),
        }
    }

    fn detail_of<'a>(record: &'a CharacterRecord, fields: &[DetailField]) -> DetailView<'a> {
        DetailView {
            record,
            fields: fields.iter().map(|f| (*f, f.display(record))).collect(),
        }
    }

    fn render_text(modal: DetailModal<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf);
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_settled_modal_shows_fields() {
        let record = luke();
        let theme = Theme::default();
        let modal = DetailModal::new(detail_of(&record, &DetailField::ALL), 1.0, &theme, "en");
        let text = render_text(modal, Rect::new(0, 0, 80, 24));
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("Height: 172 cm"));
        assert!(text.contains("Gender: male"));
        assert!(text.contains("Hair color: blond"));
        assert!(text.contains("Eye color: blue"));
        assert!(text.contains("Birth year: 19BBY"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_configured_subset_only() {
        let record = luke();
        let theme = Theme::default();
        let fields = [DetailField::Height, DetailField::Gender];
        let modal = DetailModal::new(detail_of(&record, &fields), 1.0, &theme, "en");
        let text = render_text(modal, Rect::new(0, 0, 80, 24));
        assert!(text.contains("Height: 172 cm"));
        assert!(!text.contains("Hair color"));
    }

    #[test]
    fn test_localized_labels() {
        let record = luke();
        let theme = Theme::default();
        let modal = DetailModal::new(detail_of(&record, &DetailField::ALL), 1.0, &theme, "pt-BR");
        let text = render_text(modal, Rect::new(0, 0, 80, 24));
        assert!(text.contains("Altura: 172 cm"));
        assert!(text.contains("Fechar"));
    }

    #[test]
    fn test_popup_starts_below_screen() {
        let record = luke();
        let theme = Theme::default();
        let modal = DetailModal::new(detail_of(&record, &DetailField::ALL), 0.0, &theme, "en");
        let text = render_text(modal, Rect::new(0, 0, 80, 24));
        assert!(!text.contains("Luke Skywalker"));
    }

    #[test]
    fn test_resting_area_is_centered() {
        let record = luke();
        let theme = Theme::default();
        let modal = DetailModal::new(detail_of(&record, &DetailField::ALL), 1.0, &theme, "en");
        let resting = modal.resting_area(Rect::new(0, 0, 100, 30));
        assert_eq!(resting.height, 10);
        assert_eq!(resting.x, 20);
        assert_eq!(resting.y, 10);
    }
}
