use thiserror::Error;

use crate::roster::CharacterRecord;

pub const IMAGE_BASE_URL: &str = "https://starwars-visualguide.com/assets/img/characters";

/// Extract the numeric id from a resource url such as
/// `https://swapi.dev/api/people/42/`.
///
/// Matches only a run of ASCII digits that sits between a `/` and a trailing
/// `/` at the very end of the string. Anything else yields `None`.
pub fn derive_image_id(url: &str) -> Option<&str> {
    let trimmed = url.strip_suffix('/')?;
    let start = trimmed.rfind('/')? + 1;
    let id = &trimmed[start..];
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Some(id)
    } else {
        None
    }
}

pub fn image_url(id: &str) -> String {
    format!("{IMAGE_BASE_URL}/{id}.jpg")
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("record {name:?} has no numeric id in url {url:?}")]
pub struct MalformedRecord {
    pub name: String,
    pub url: String,
}

/// What a list row shows in place of the portrait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarRef {
    Image { id: String, url: String },
    Placeholder,
}

impl AvatarRef {
    pub fn try_for_record(record: &CharacterRecord) -> Result<Self, MalformedRecord> {
        match derive_image_id(&record.url) {
            Some(id) => Ok(AvatarRef::Image {
                id: id.to_string(),
                url: image_url(id),
            }),
            None => Err(MalformedRecord {
                name: record.name.clone(),
                url: record.url.clone(),
            }),
        }
    }

    /// Like [`AvatarRef::try_for_record`], substituting the placeholder for
    /// malformed records.
    pub fn for_record(record: &CharacterRecord) -> Self {
        Self::try_for_record(record).unwrap_or_else(|err| {
            log::debug!("using placeholder avatar: {err}");
            AvatarRef::Placeholder
        })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            AvatarRef::Image { id, .. } => Some(id),
            AvatarRef::Placeholder => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            AvatarRef::Image { url, .. } => Some(url),
            AvatarRef::Placeholder => None,
        }
    }
}
