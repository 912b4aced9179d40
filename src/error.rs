use thiserror::Error;

/// Errors that can occur while turning recipe text into a schema.org Recipe
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The caller submitted blank text
    #[error("Recipe text cannot be empty")]
    EmptyInput,

    /// No credential is configured for the generation service
    #[error("No API key configured for provider '{0}'")]
    MissingApiKey(String),

    /// Transport-level failure talking to the generation service
    #[error("Request to generation service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The generation service answered with a non-success status
    #[error("Generation service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The model declined to produce a recipe
    #[error("Generation service refused the request: {0}")]
    Refused(String),

    /// The response did not have the expected completion shape
    #[error("Invalid response from generation service: {0}")]
    InvalidResponse(String),

    /// The completion content is not a schema-conforming Recipe
    #[error("Recipe JSON does not match the output schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider could not be built from configuration
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading the input file or writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractionError {
    /// True for the blank-input case, which callers report as a warning
    /// rather than a failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ExtractionError::EmptyInput)
    }
}
