use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors surfaced to HTTP callers. Messages are part of the service's
/// observable contract, so they stay in Portuguese like the rest of it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("URL e obrigatoria")]
    MissingUrl,
    #[error("URL do YouTube invalida")]
    InvalidUrl,
    #[error("Nao foi possivel obter a transcricao.")]
    EmptyTranscript,
    #[error("Erro ao obter transcricao: {0}")]
    Transcript(String),
    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingUrl | Error::InvalidUrl | Error::EmptyTranscript => {
                StatusCode::BAD_REQUEST
            }
            Error::Transcript(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(Error::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::InvalidUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::EmptyTranscript.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transcript_errors_are_500() {
        let err = Error::Transcript("no captions".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Erro ao obter transcricao: no captions");
    }

    #[test]
    fn test_messages() {
        assert_eq!(Error::MissingUrl.to_string(), "URL e obrigatoria");
        assert_eq!(Error::InvalidUrl.to_string(), "URL do YouTube invalida");
    }
}
