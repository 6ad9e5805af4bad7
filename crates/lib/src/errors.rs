use thiserror::Error;

/// Errors raised while talking to a remote text-generation provider.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error (status {status}): {body}")]
    AiApi { status: u16, body: String },
    #[error("AI provider returned no text: {0}")]
    EmptyResponse(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
}

/// Errors that stop a question generation request before or during the remote call.
///
/// None of these are retried within the same request.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Syllabus text is empty; nothing to generate questions from")]
    EmptySyllabus,
    #[error("Question count must be between 1 and {max}, got {count}")]
    InvalidCount { count: u32, max: u32 },
    #[error("Unknown difficulty '{0}', expected one of: easy, moderate, hard")]
    UnknownDifficulty(String),
    #[error(transparent)]
    Provider(#[from] PromptError),
}
