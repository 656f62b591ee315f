//! The condenser trait and the never-fail wrapper.

use thiserror::Error;
use tracing::debug;

/// Condensing errors. Callers are expected to absorb these via
/// [`condense_or_original`]; none of them is fatal to the query flow.
#[derive(Debug, Error)]
pub enum CondenseError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for condensing operations.
pub type CondenseResult<T> = Result<T, CondenseError>;

/// A text-condensing capability: `condense(text) -> shorter text`.
pub trait Condenser {
    /// Backend name for diagnostics.
    fn name(&self) -> &str;

    /// Condense the text, preserving meaning.
    fn condense(&self, text: &str) -> CondenseResult<String>;
}

/// Condense if possible; on any error return the input unchanged.
pub fn condense_or_original(condenser: &dyn Condenser, text: &str) -> String {
    match condenser.condense(text) {
        Ok(condensed) => condensed,
        Err(e) => {
            debug!(backend = condenser.name(), error = %e, "condense skipped");
            text.to_string()
        }
    }
}

/// A mock condenser for tests: canned response, or a forced error.
pub struct MockCondenser {
    response: Option<String>,
    fail: bool,
}

impl MockCondenser {
    pub fn new() -> Self {
        Self {
            response: None,
            fail: false,
        }
    }

    /// Always answer with this text.
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    /// Always fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for MockCondenser {
    fn default() -> Self {
        Self::new()
    }
}

impl Condenser for MockCondenser {
    fn name(&self) -> &str {
        "mock"
    }

    fn condense(&self, text: &str) -> CondenseResult<String> {
        if self.fail {
            return Err(CondenseError::ConnectionFailed("mock failure".into()));
        }
        match &self.response {
            Some(r) => Ok(r.clone()),
            // Default behavior: first sentence.
            None => Ok(text
                .split_once('.')
                .map(|(head, _)| format!("{}.", head))
                .unwrap_or_else(|| text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_canned_response() {
        let c = MockCondenser::new().with_response("short");
        assert_eq!(c.condense("a very long text").unwrap(), "short");
    }

    #[test]
    fn mock_default_takes_first_sentence() {
        let c = MockCondenser::new();
        assert_eq!(c.condense("First. Second. Third.").unwrap(), "First.");
    }

    #[test]
    fn failure_returns_original_unchanged() {
        let c = MockCondenser::new().failing();
        let original = "keep me exactly as I am";
        assert_eq!(condense_or_original(&c, original), original);
    }

    #[test]
    fn success_returns_condensed() {
        let c = MockCondenser::new().with_response("tl;dr");
        assert_eq!(condense_or_original(&c, "long text"), "tl;dr");
    }
}
