//! Site configuration.
//!
//! The hosted service endpoint and publishable key are baked in at build
//! time. Both are required; startup is fatal without them.
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Service base URL without a trailing slash.
    pub base_url: String,
    /// Publishable (anon) API key sent with every request.
    pub anon_key: String,
}

impl SiteConfig {
    /// Read the configuration from compile-time environment values.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first missing variable.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = option_env!("MAJLIS_SUPABASE_URL").ok_or(Error::Config("MAJLIS_SUPABASE_URL"))?;
        let anon_key =
            option_env!("MAJLIS_SUPABASE_ANON_KEY").ok_or(Error::Config("MAJLIS_SUPABASE_ANON_KEY"))?;
        Ok(Self::new(base_url, anon_key))
    }

    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Data endpoint for one table.
    #[must_use]
    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Auth endpoint for one operation path.
    #[must_use]
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_compose_without_double_slashes() {
        let config = SiteConfig::new("https://example.supabase.co/", "anon");
        assert_eq!(
            config.rest_endpoint("games"),
            "https://example.supabase.co/rest/v1/games"
        );
        assert_eq!(
            config.auth_endpoint("token?grant_type=password"),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
    }
}
