use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct BrowserLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl BrowserLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        Self {
            header: vertical[0],
            list: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Wrap key hints into as few lines as fit in `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// A popup of `percent_x` of the width and exactly `height` rows, centered
/// in `area` and never larger than it.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 36;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = height.min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
