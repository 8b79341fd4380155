pub mod config;
pub mod error;
pub mod oembed;
pub mod server;
pub mod transcript;
pub mod youtube;

use serde::Serialize;

/// A single caption cue: free text plus its position in the video.
#[derive(Debug, Clone, Serialize)]
pub struct Fragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Assumed speaking rate for duration estimation, in words per minute.
pub const WORDS_PER_MINUTE: f64 = 150.0;

/// Extract the 11-character video ID from the supported YouTube URL shapes.
///
/// This is deliberate substring slicing, not URL parsing: a superficially
/// matching but malformed input can yield a truncated ID instead of `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Some(pos) = url.find("youtube.com/watch?v=") {
        let rest = &url[pos + "youtube.com/watch?v=".len()..];
        return Some(rest.split('&').next().unwrap_or(rest).to_string());
    }

    if let Some(pos) = url.find("youtu.be/") {
        let rest = &url[pos + "youtu.be/".len()..];
        return Some(rest.split('?').next().unwrap_or(rest).to_string());
    }

    if let Some(pos) = url.find("youtube.com/shorts/") {
        let rest = &url[pos + "youtube.com/shorts/".len()..];
        return Some(rest.split('?').next().unwrap_or(rest).to_string());
    }

    // Bare 11-character video ID
    if url.chars().count() == 11 {
        return Some(url.to_string());
    }

    None
}

/// Estimate how long the transcript takes to speak, in whole seconds.
///
/// Word count over 150 words/minute, truncated (not rounded).
pub fn estimate_duration(transcript: &str) -> u64 {
    let words = transcript.split_whitespace().count();
    let minutes = words as f64 / WORDS_PER_MINUTE;
    (minutes * 60.0) as u64
}
