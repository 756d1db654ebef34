//! Error taxonomy shared by the store and auth clients.
use thiserror::Error;

/// Provider error code PostgREST emits when a single-object request matches
/// no rows. Treated as "not found" and suppressed by `maybe_single` lookups.
pub const NO_ROWS_CODE: &str = "PGRST116";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input rejected before any request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation needs a signed-in identity or a role flag the caller
    /// does not hold. Checked proactively in the client; the hosted service
    /// is never relied on to reject.
    #[error("not authorized")]
    NotAuthorized,

    /// A lookup that required a row found none.
    #[error("not found")]
    NotFound,

    /// The hosted service rejected a request or the transport failed.
    #[error("store error{}: {message}", .code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default())]
    Store {
        code: Option<String>,
        message: String,
    },

    /// A required environment value was missing at startup.
    #[error("missing configuration: {0}")]
    Config(&'static str),
}

impl Error {
    /// True when this is the provider's "no rows" signal.
    #[must_use]
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::Store { code: Some(code), .. } if code == NO_ROWS_CODE)
    }

    pub(crate) fn network(err: &reqwest::Error) -> Self {
        Self::Store {
            code: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_detection_matches_provider_code() {
        let err = Error::Store {
            code: Some(NO_ROWS_CODE.to_string()),
            message: String::from("JSON object requested, multiple (or no) rows returned"),
        };
        assert!(err.is_no_rows());

        let other = Error::Store {
            code: Some(String::from("PGRST301")),
            message: String::from("permission denied"),
        };
        assert!(!other.is_no_rows());
        assert!(!Error::NotFound.is_no_rows());
    }

    #[test]
    fn display_includes_provider_code_when_present() {
        let err = Error::Store {
            code: Some(String::from("PGRST301")),
            message: String::from("permission denied"),
        };
        assert_eq!(err.to_string(), "store error [PGRST301]: permission denied");

        let bare = Error::Store {
            code: None,
            message: String::from("connection reset"),
        };
        assert_eq!(bare.to_string(), "store error: connection reset");
    }
}
