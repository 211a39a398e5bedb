use std::time::Duration;

use url::Url;

use crate::{FailureKind, FetchError};

/// Root of the demo image API; both the record list and the images live under it.
pub const DEFAULT_BASE_URL: &str = "https://sebi.io/demo-image-api/";

/// Record list location, relative to the base URL.
pub const RECORDS_PATH: &str = "pictures.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
                "text/plain".to_string(),
            ],
        }
    }
}

impl FetchSettings {
    pub fn records_url(&self) -> Result<Url, FetchError> {
        self.resolve(RECORDS_PATH)
    }

    /// Absolute URL of an image given a record's relative `path`.
    pub fn image_url(&self, path: &str) -> Result<Url, FetchError> {
        self.resolve(path.trim_start_matches('/'))
    }

    pub(crate) fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn resolve(&self, relative: &str) -> Result<Url, FetchError> {
        let base = base_with_trailing_slash(&self.base_url);
        Url::parse(&base)
            .and_then(|base| base.join(relative))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

// Without the slash, `Url::join` would replace the last segment of the base.
fn base_with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
