use std::time::Duration;

use thiserror::Error;

use crate::roster::{CharacterRecord, parse_listing};

pub const PY4E_PEOPLE_URL: &str = "https://swapi.py4e.com/api/people/";
pub const SWAPI_DEV_PEOPLE_URL: &str = "https://swapi.dev/api/people/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(feature = "network")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("listing endpoint answered with status {0}")]
    Status(u16),
    #[error("response is not a character listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response has no `results` array")]
    MissingResults,
    #[error("built without network support")]
    Disabled,
}

/// Where the character listing is fetched from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    #[default]
    Py4e,
    SwapiDev,
    Custom(String),
}

impl Endpoint {
    /// Accepts a mirror name (`py4e`, `swapi.dev`) or a full listing url.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "py4e" | "swapi.py4e.com" | PY4E_PEOPLE_URL => Endpoint::Py4e,
            "dev" | "swapi.dev" | SWAPI_DEV_PEOPLE_URL => Endpoint::SwapiDev,
            other => Endpoint::Custom(other.to_string()),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Endpoint::Py4e => PY4E_PEOPLE_URL,
            Endpoint::SwapiDev => SWAPI_DEV_PEOPLE_URL,
            Endpoint::Custom(url) => url,
        }
    }

    /// Short label for the header bar.
    pub fn label(&self) -> &str {
        match self {
            Endpoint::Py4e => "swapi.py4e.com",
            Endpoint::SwapiDev => "swapi.dev",
            Endpoint::Custom(url) => url,
        }
    }
}

/// Anything that can produce one page of character records.
pub trait RosterSource: Send + Sync {
    fn fetch_roster(&self) -> Result<Vec<CharacterRecord>, FetchError>;

    fn label(&self) -> String;
}

pub struct HttpRosterSource {
    endpoint: Endpoint,
    timeout: Duration,
}

impl HttpRosterSource {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    #[cfg(feature = "network")]
    fn fetch_body(&self) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(self.endpoint.url()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }

    #[cfg(not(feature = "network"))]
    fn fetch_body(&self) -> Result<String, FetchError> {
        let _ = self.timeout;
        Err(FetchError::Disabled)
    }
}

impl RosterSource for HttpRosterSource {
    fn fetch_roster(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        let body = self.fetch_body()?;
        parse_listing(&body)
    }

    fn label(&self) -> String {
        self.endpoint.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_mirror_names() {
        assert_eq!(Endpoint::from_name("py4e"), Endpoint::Py4e);
        assert_eq!(Endpoint::from_name("swapi.dev"), Endpoint::SwapiDev);
        assert_eq!(Endpoint::from_name("dev"), Endpoint::SwapiDev);
        assert_eq!(Endpoint::from_name(SWAPI_DEV_PEOPLE_URL), Endpoint::SwapiDev);
    }

    #[test]
    fn test_endpoint_custom_url() {
        let endpoint = Endpoint::from_name("http://localhost:8000/api/people/");
        assert_eq!(endpoint.url(), "http://localhost:8000/api/people/");
        assert_eq!(endpoint.label(), "http://localhost:8000/api/people/");
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(Endpoint::Py4e.url(), "https://swapi.py4e.com/api/people/");
        assert_eq!(Endpoint::SwapiDev.url(), "https://swapi.dev/api/people/");
        assert_eq!(Endpoint::default(), Endpoint::Py4e);
    }

    #[cfg(feature = "network")]
    #[test]
    fn test_http_source_unreachable_host_is_error() {
        // Port 9 on localhost is the discard service and is not expected to speak HTTP.
        let source = HttpRosterSource::new(
            Endpoint::Custom("http://127.0.0.1:9/api/people/".to_string()),
            Duration::from_millis(500),
        );
        assert!(source.fetch_roster().is_err());
    }
}
