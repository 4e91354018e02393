use std::fmt::{self, Display};

use roster::payloads::SEARCH_PARAM;
use url::{Url, form_urlencoded};

use crate::error::NavigatorError;

const ORIGIN: &str = "http://localhost/";

/// Path plus query string, the part of the address bar the app cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// Query string without the leading `?`.
    pub search: String,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self, NavigatorError> {
        let url = Url::parse(ORIGIN)?.join(href)?;

        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            pathname: url.path().to_string(),
            search: url.query().unwrap_or_default().to_string(),
        }
    }

    pub fn search_for(q: &str) -> Self {
        Self {
            pathname: "/".to_string(),
            search: form_urlencoded::Serializer::new(String::new())
                .append_pair(SEARCH_PARAM, q)
                .finish(),
        }
    }

    /// `None` when the query has no `q` at all, `Some("")` when it is present but empty.
    pub fn q(&self) -> Option<String> {
        form_urlencoded::parse(self.search.as_bytes())
            .find(|(key, _)| key == SEARCH_PARAM)
            .map(|(_, value)| value.into_owned())
    }

    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
