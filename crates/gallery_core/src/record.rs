use serde::{Deserialize, Serialize};

/// One bird photo as listed by the remote endpoint.
///
/// `path` is relative to the image base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub author: String,
    pub category: String,
    pub path: String,
}

impl Record {
    pub fn new(
        author: impl Into<String>,
        category: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            category: category.into(),
            path: path.into(),
        }
    }
}
