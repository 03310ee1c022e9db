use std::{error::Error, fmt};

const BODY_EXCERPT_LEN: usize = 120;

/// Everything that can go wrong talking to the server.
#[derive(Clone, Debug)]
pub enum RequestError {
    /// The transport failed before a body could be read.
    Transport(String),
    /// The body was not JSON at all.
    JsonDecode(String),
    /// The body was JSON but matched neither expected shape.
    MalformedResponse(String),
    /// A submission was already in flight and the overlap policy rejects it.
    SubmissionInFlight,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(s) => write!(f, "request error: {s}"),
            Self::JsonDecode(s) => write!(f, "json decode error: {s}"),
            Self::MalformedResponse(s) => write!(f, "malformed response: {s}"),
            Self::SubmissionInFlight => write!(f, "a submission is already in flight"),
        }
    }
}

impl Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonDecode(value.to_string())
    }
}

/// Clips a response body for inclusion in an error message.
pub(crate) fn body_excerpt(text: &str) -> String {
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
