//! Configuration for the external catalog collaborator.
//!
//! Session and cookie settings live in
//! [`session::SessionConfig`](crate::session::SessionConfig).

/// Where and how to reach the external recipe catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API base, e.g. `https://api.spoonacular.com`.
    pub base_url: String,
    pub api_key: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Trailing slash would produce `//recipes/...` request paths
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty");
        }
        if self.api_key.is_empty() {
            return Err("api_key must not be empty");
        }
        Ok(())
    }
}
