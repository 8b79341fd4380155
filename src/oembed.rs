use std::time::Duration;

use eyre::Result;
use log::warn;
use serde::Deserialize;

/// YouTube's public oembed endpoint. Overridable so tests can point the
/// fetcher at a fixture.
pub const DEFAULT_ENDPOINT: &str = "https://www.youtube.com/oembed";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Basic video metadata. Always available: lookups that fail produce
/// placeholder values instead of errors.
#[derive(Debug, Clone)]
pub struct VideoMeta {
    pub title: String,
    pub author: String,
}

impl VideoMeta {
    pub fn placeholder(video_id: &str) -> Self {
        Self {
            title: format!("Video {video_id}"),
            author: "Desconhecido".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
    author_name: Option<String>,
}

/// Look up title and author for a video. Never fails: timeouts, non-2xx
/// statuses, and malformed bodies all collapse to placeholder metadata.
pub async fn fetch(client: &reqwest::Client, endpoint: &str, video_id: &str) -> VideoMeta {
    match try_fetch(client, endpoint, video_id).await {
        Ok(meta) => meta,
        Err(e) => {
            warn!("Metadata lookup failed for {video_id}: {e}");
            VideoMeta::placeholder(video_id)
        }
    }
}

async fn try_fetch(client: &reqwest::Client, endpoint: &str, video_id: &str) -> Result<VideoMeta> {
    let url = format!("{endpoint}?url=http://www.youtube.com/watch?v={video_id}&format=json");

    let body: OembedResponse = client
        .get(&url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(VideoMeta {
        title: body.title.unwrap_or_else(|| format!("Video {video_id}")),
        author: body.author_name.unwrap_or_else(|| "Desconhecido".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::get};
    use tokio::net::TcpListener;

    async fn spawn_fixture(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/oembed")
    }

    #[test]
    fn test_placeholder() {
        let meta = VideoMeta::placeholder("dQw4w9WgXcQ");
        assert_eq!(meta.title, "Video dQw4w9WgXcQ");
        assert_eq!(meta.author, "Desconhecido");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let app = Router::new().route(
            "/oembed",
            get(|| async {
                Json(serde_json::json!({
                    "title": "Never Gonna Give You Up",
                    "author_name": "Rick Astley",
                    "provider_name": "YouTube"
                }))
            }),
        );
        let endpoint = spawn_fixture(app).await;

        let client = reqwest::Client::new();
        let meta = fetch(&client, &endpoint, "dQw4w9WgXcQ").await;
        assert_eq!(meta.title, "Never Gonna Give You Up");
        assert_eq!(meta.author, "Rick Astley");
    }

    #[tokio::test]
    async fn test_fetch_non_200_falls_back() {
        let app = Router::new().route(
            "/oembed",
            get(|| async { (axum::http::StatusCode::NOT_FOUND, "Not Found") }),
        );
        let endpoint = spawn_fixture(app).await;

        let client = reqwest::Client::new();
        let meta = fetch(&client, &endpoint, "dQw4w9WgXcQ").await;
        assert_eq!(meta.title, "Video dQw4w9WgXcQ");
        assert_eq!(meta.author, "Desconhecido");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_falls_back() {
        let client = reqwest::Client::new();
        let meta = fetch(&client, "http://127.0.0.1:1/oembed", "dQw4w9WgXcQ").await;
        assert_eq!(meta.title, "Video dQw4w9WgXcQ");
        assert_eq!(meta.author, "Desconhecido");
    }
}
