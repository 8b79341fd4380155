use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::error::Error;
use crate::youtube::CaptionSource;
use crate::{extract_video_id, estimate_duration, oembed, transcript};

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub captions: Arc<dyn CaptionSource>,
    pub oembed_endpoint: String,
    pub default_language: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extract", post(extract))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub transcript: String,
    pub duration: u64,
    #[serde(rename = "characterCount")]
    pub character_count: usize,
}

/// The whole pipeline: validate, resolve the video ID, best-effort metadata,
/// transcript with language fallback, duration estimate.
async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, Error> {
    if req.url.is_empty() {
        return Err(Error::MissingUrl);
    }
    if !req.url.contains("youtube.com") && !req.url.contains("youtu.be") {
        return Err(Error::InvalidUrl);
    }

    let video_id = extract_video_id(&req.url).ok_or(Error::InvalidUrl)?;
    let language = req.language.as_deref().unwrap_or(&state.default_language);
    info!("Extracting transcript: video_id={video_id} language={language}");

    let meta = oembed::fetch(&state.client, &state.oembed_endpoint, &video_id).await;
    let transcript = transcript::fetch(state.captions.as_ref(), &video_id, language).await?;

    if transcript.is_empty() {
        return Err(Error::EmptyTranscript);
    }

    let duration = estimate_duration(&transcript);
    let character_count = transcript.chars().count();
    debug!("Extraction done: video_id={video_id} chars={character_count} duration={duration}s");

    Ok(Json(ExtractResponse {
        success: true,
        video_id,
        title: meta.title,
        author: meta.author,
        transcript,
        duration,
        character_count,
    }))
}
