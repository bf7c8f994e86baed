//! # Filter Navigation
//!
//! Changing any dropdown on the listing navigates to a fresh URL. The page always resets to 1
//! and defaults are left out so the URL stays short.
use url::form_urlencoded::Serializer;

pub const ALL: &str = "all";
pub const DEFAULT_SORT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub kind: String,
    pub sub: String,
    pub special: String,
    pub sort: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            kind: ALL.to_string(),
            sub: ALL.to_string(),
            special: ALL.to_string(),
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl FilterSelection {
    pub fn query_string(&self) -> String {
        let mut query = Serializer::new(String::new());
        query.append_pair("page", "1");

        if self.kind != ALL {
            query.append_pair("type", &self.kind);
        }
        if self.sub != ALL {
            query.append_pair("sub", &self.sub);
        }
        if self.special != ALL {
            query.append_pair("special", &self.special);
        }
        if self.sort != DEFAULT_SORT {
            query.append_pair("sort", &self.sort);
        }

        query.finish()
    }

    pub fn listing_url(&self, base_url: &str) -> String {
        format!("{}/?{}", base_url.trim_end_matches('/'), self.query_string())
    }
}
