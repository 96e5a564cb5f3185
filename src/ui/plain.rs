//! Plain-text rendition of the browser for non-interactive output.

use rust_i18n::t;

use crate::roster::avatar::AvatarRef;
use crate::screen::{BrowserScreen, DetailView};
use crate::ui::field_label;

pub fn row_line(index: usize, name: &str, avatar: &AvatarRef, locale: &str) -> String {
    match avatar {
        AvatarRef::Image { url, .. } => format!("{:>3}. {name}  {url}", index + 1),
        AvatarRef::Placeholder => format!(
            "{:>3}. {name}  [{}]",
            index + 1,
            t!("list.no_portrait", locale = locale)
        ),
    }
}

pub fn detail_lines(detail: &DetailView<'_>, locale: &str) -> Vec<String> {
    detail
        .fields
        .iter()
        .map(|(field, value)| format!("       {}: {value}", field_label(*field, locale)))
        .collect()
}

/// Every row followed by its detail fields. Opens and dismisses the modal
/// on each row in turn, so the output reflects exactly what the interactive
/// modal would show.
pub fn roster_report(screen: &mut BrowserScreen, locale: &str) -> Vec<String> {
    let rows: Vec<String> = screen
        .rows()
        .map(|row| row_line(row.index, &row.record.name, row.avatar, locale))
        .collect();

    let mut out = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        out.push(row);
        if screen.select(index) {
            if let Some(detail) = screen.detail() {
                out.extend(detail_lines(&detail, locale));
            }
            screen.dismiss();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CharacterRecord;
    use crate::roster::field::DetailField;

    #[test]
    fn test_row_line_with_image() {
        let avatar = AvatarRef::Image {
            id: "1".to_string(),
            url: "https://starwars-visualguide.com/assets/img/characters/1.jpg".to_string(),
        };
        assert_eq!(
            row_line(0, "Luke Skywalker", &avatar, "en"),
            "  1. Luke Skywalker  https://starwars-visualguide.com/assets/img/characters/1.jpg"
        );
    }

    #[test]
    fn test_row_line_placeholder() {
        assert_eq!(
            row_line(9, "Mystery", &AvatarRef::Placeholder, "en"),
            " 10. Mystery  [no portrait available]"
        );
    }

    #[test]
    fn test_roster_report_leaves_modal_closed() {
        let mut screen = BrowserScreen::new(vec![DetailField::Height]);
        let ticket = screen.on_activate().unwrap();
        screen.on_fetch_complete(
            ticket,
            Ok(vec![CharacterRecord {
                name: "Chewbacca".to_string(),
                height: "228".to_string(),
                gender: "male".to_string(),
                hair_color: "brown".to_string(),
                eye_color: "blue".to_string(),
                birth_year: "200BBY".to_string(),
                url: "https://swapi.dev/api/people/13/".to_string(),
            }]),
        );
        let report = roster_report(&mut screen, "en");
        assert_eq!(report.len(), 2);
        assert!(report[0].contains("Chewbacca"));
        assert_eq!(report[1], "       Height: 228 cm");
        assert!(!screen.modal().is_open());
    }
}
