use thiserror::Error;

/// Failures talking to the text-generation service.
///
/// This is the diagnostic taxonomy. Callers of the analyzer and the chat
/// client only ever see [`AnalysisError`] or [`ChatError`]; the variant is kept
/// as the error source so it can be logged.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Service returned status {status}: {body}")]
    Service { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Service returned an empty reply")]
    EmptyReply,
}

impl ProviderError {
    /// Short label used as the `kind` field in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Configuration(_) => "configuration",
            ProviderError::Network(_) => "network",
            ProviderError::Service { .. } => "service",
            ProviderError::MalformedResponse(_) => "malformed_response",
            ProviderError::EmptyReply => "empty_reply",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs stay out of error text.
        let err = err.without_url();
        if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
#[error("Analysis failed. Please try again.")]
pub struct AnalysisError(#[source] pub ProviderError);

impl AnalysisError {
    pub fn cause(&self) -> &ProviderError {
        &self.0
    }
}

#[derive(Error, Debug)]
#[error("Connection interruption detected. Please verify API Key configuration.")]
pub struct ChatError(#[source] pub ProviderError);

impl ChatError {
    pub fn cause(&self) -> &ProviderError {
        &self.0
    }
}

/// Rejected user input, raised before any request leaves the process.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Please input at least two ingredients.")]
    TooFewIngredients,
    #[error("At most three ingredients can be combined.")]
    TooManyIngredients,
    #[error("Message is empty.")]
    EmptyMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_error_hides_cause_from_display() {
        let missing = AnalysisError(ProviderError::MalformedResponse("missing field `riskLevel`".into()));
        let offline = AnalysisError(ProviderError::Network("connection refused".into()));

        assert_eq!(missing.to_string(), offline.to_string());
        assert_eq!(missing.cause().kind(), "malformed_response");
        assert_eq!(offline.cause().kind(), "network");
    }

    #[test]
    fn chat_error_message_points_at_configuration() {
        let err = ChatError(ProviderError::EmptyReply);
        assert!(err.to_string().contains("API Key"));
        assert_eq!(err.cause().kind(), "empty_reply");
    }
}
