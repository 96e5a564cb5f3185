use crate::roster::CharacterRecord;

/// A record attribute the detail modal can show under the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailField {
    Height,
    Gender,
    HairColor,
    EyeColor,
    BirthYear,
}

impl DetailField {
    pub const ALL: [DetailField; 5] = [
        DetailField::Height,
        DetailField::Gender,
        DetailField::HairColor,
        DetailField::EyeColor,
        DetailField::BirthYear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DetailField::Height => "height",
            DetailField::Gender => "gender",
            DetailField::HairColor => "hair_color",
            DetailField::EyeColor => "eye_color",
            DetailField::BirthYear => "birth_year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key.trim())
    }

    pub fn raw<'a>(self, record: &'a CharacterRecord) -> &'a str {
        match self {
            DetailField::Height => &record.height,
            DetailField::Gender => &record.gender,
            DetailField::HairColor => &record.hair_color,
            DetailField::EyeColor => &record.eye_color,
            DetailField::BirthYear => &record.birth_year,
        }
    }

    /// Display value. Numeric heights carry their unit; sentinels such as
    /// `unknown` are shown as-is.
    pub fn display(self, record: &CharacterRecord) -> String {
        let raw = self.raw(record);
        match self {
            DetailField::Height if is_plain_number(raw.trim()) => format!("{raw} cm"),
            _ => raw.to_string(),
        }
    }
}

/// Digits with at most one decimal point. Rejects `NaN`, `inf` and exponents.
fn is_plain_number(value: &str) -> bool {
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('.') {
        None => !value.is_empty() && digits(value),
        Some((whole, frac)) => {
            !(whole.is_empty() && frac.is_empty()) && digits(whole) && digits(frac)
        }
    }
}

/// Resolve configured field keys, keeping order and dropping unknown or
/// repeated entries.
pub fn parse_field_list<S: AsRef<str>>(keys: &[S]) -> Vec<DetailField> {
    let mut fields = Vec::new();
    for key in keys {
        match DetailField::from_key(key.as_ref()) {
            Some(field) if !fields.contains(&field) => fields.push(field),
            Some(_) => {}
            None => log::warn!("ignoring unknown detail field {:?}", key.as_ref()),
        }
    }
    fields
}

pub fn default_field_keys() -> Vec<String> {
    DetailField::ALL.iter().map(|f| f.key().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_key_roundtrip() {
        for field in DetailField::ALL {
            assert_eq!(DetailField::from_key(field.key()), Some(field));
        }
        assert_eq!(DetailField::from_key(" gender "), Some(DetailField::Gender));
        assert_eq!(DetailField::from_key("mass"), None);
    }

    #[test]
    fn test_display_height_with_unit() {
        assert_eq!(DetailField::Height.display(&luke()), "172 cm");
    }

    #[test]
    fn test_display_height_sentinel() {
        let mut record = luke();
        record.height = "unknown".to_string();
        assert_eq!(DetailField::Height.display(&record), "unknown");
    }

    #[test]
    fn test_display_height_decimal() {
        let mut record = luke();
        record.height = "66.5".to_string();
        assert_eq!(DetailField::Height.display(&record), "66.5 cm");
    }

    #[test]
    fn test_display_height_float_spellings_are_not_numbers() {
        let mut record = luke();
        for raw in ["NaN", "inf", "infinity", "1e3", "-172", "1.2.3", ".", ""] {
            record.height = raw.to_string();
            assert_eq!(DetailField::Height.display(&record), raw, "height {raw:?}");
        }
    }

    #[test]
    fn test_display_other_fields_verbatim() {
        let record = luke();
        assert_eq!(DetailField::Gender.display(&record), "male");
        assert_eq!(DetailField::HairColor.display(&record), "blond");
        assert_eq!(DetailField::EyeColor.display(&record), "blue");
        assert_eq!(DetailField::BirthYear.display(&record), "19BBY");
    }

    #[test]
    fn test_parse_field_list_keeps_order() {
        let fields = parse_field_list(&["gender", "height"]);
        assert_eq!(fields, vec![DetailField::Gender, DetailField::Height]);
    }

    #[test]
    fn test_parse_field_list_drops_unknown_and_duplicates() {
        let fields = parse_field_list(&["height", "mass", "height", "birth_year"]);
        assert_eq!(fields, vec![DetailField::Height, DetailField::BirthYear]);
    }

    #[test]
    fn test_default_field_keys_cover_all() {
        let fields = parse_field_list(&default_field_keys());
        assert_eq!(fields, DetailField::ALL.to_vec());
    }
}
