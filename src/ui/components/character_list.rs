use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::roster::avatar::AvatarRef;
use crate::screen::{BrowserScreen, FetchStatus, RowView};
use crate::ui::theme::Theme;

/// Terminal rows per character entry: name line plus portrait line.
pub const ROW_HEIGHT: u16 = 2;

/// Entries that fit inside the bordered list drawn over `area`.
pub fn visible_rows(area: Rect) -> usize {
    (Block::bordered().inner(area).height / ROW_HEIGHT) as usize
}

pub struct CharacterList<'a> {
    screen: &'a BrowserScreen,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> CharacterList<'a> {
    pub fn new(screen: &'a BrowserScreen, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            screen,
            theme,
            locale,
        }
    }

    fn render_row(&self, row: RowView<'_>, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let bg = if row.highlighted {
            colors.row_highlight_bg()
        } else {
            colors.row_bg()
        };
        let base = Style::default().bg(bg).fg(colors.row_fg());
        buf.set_style(area, base);

        let button = format!(" {} ", t!("list.view_details", locale = self.locale));
        let button_width = button.chars().count() as u16;
        let show_button = area.width >= button_width + 8;

        let marker = if row.highlighted { ">" } else { " " };
        let name = format!(" {marker} {}", row.record.name);
        let name_width = if show_button {
            area.width - button_width - 1
        } else {
            area.width
        };
        buf.set_stringn(
            area.x,
            area.y,
            &name,
            name_width as usize,
            base.add_modifier(Modifier::BOLD),
        );

        if show_button {
            let button_style = Style::default()
                .bg(colors.button_bg())
                .fg(colors.button_fg())
                .add_modifier(if row.highlighted {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            buf.set_string(area.right() - button_width - 1, area.y, &button, button_style);
        }

        if area.height < 2 {
            return;
        }
        let portrait = match row.avatar {
            AvatarRef::Image { url, .. } => {
                format!("   {}: {url}", t!("list.portrait", locale = self.locale))
            }
            AvatarRef::Placeholder => {
                format!("   [{}]", t!("list.no_portrait", locale = self.locale))
            }
        };
        buf.set_stringn(
            area.x,
            area.y + 1,
            &portrait,
            area.width as usize,
            base.add_modifier(Modifier::ITALIC),
        );
    }
}

impl Widget for CharacterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" {} ", t!("app.title", locale = self.locale)),
                Style::default()
                    .fg(colors.title())
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.screen.is_empty() {
            let message = match self.screen.fetch_status() {
                FetchStatus::Idle | FetchStatus::InFlight(_) => {
                    t!("list.loading", locale = self.locale)
                }
                FetchStatus::Failed(_) => t!("list.failed", locale = self.locale),
                FetchStatus::Loaded => t!("list.empty", locale = self.locale),
            };
            Paragraph::new(message.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.muted()))
                .render(inner, buf);
            return;
        }

        let visible = visible_rows(area);
        let offset = self.screen.scroll_offset(visible);
        for (slot, row) in self.screen.rows().skip(offset).take(visible).enumerate() {
            let row_area = Rect::new(
                inner.x,
                inner.y + slot as u16 * ROW_HEIGHT,
                inner.width,
                ROW_HEIGHT,
            );
            self.render_row(row, row_area, buf);
        }
    }
}
