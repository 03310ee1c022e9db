use serde::{Deserialize, Serialize};

use crate::data::VideoEntry;

// Response payloads

/// Response body of `POST /process_video`.
///
/// The server answers with either an `error` field or a `trailer_url` field
/// (plus a human-readable `message` on success, which this layer ignores).
/// The failed variant is tried first, so a body carrying both fields is a
/// failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProcessResponse {
    Failed { error: String },
    Processed { trailer_url: String },
}

/// Response body of `GET /get_processed_videos`. The listing may be empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ProcessedVideosResponse {
    pub videos: Vec<VideoEntry>,
}
