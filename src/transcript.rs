use log::debug;

use crate::Fragment;
use crate::error::Error;
use crate::youtube::CaptionSource;

/// Languages tried after the requested one, in order.
pub const FALLBACK_LANGUAGES: [&str; 4] = ["pt", "en", "es", "pt-BR"];

/// Fetch the transcript for a video, trying the target language first and
/// then each fallback language in order. First success wins.
///
/// The target is prepended as-is, so a target that coincides with a fallback
/// entry gets attempted twice. Preserved behavior, not an optimization target.
pub async fn fetch(
    source: &dyn CaptionSource,
    video_id: &str,
    target_language: &str,
) -> Result<String, Error> {
    let mut candidates: Vec<&str> = vec![target_language];
    candidates.extend_from_slice(&FALLBACK_LANGUAGES);

    let mut last_error: Option<eyre::Report> = None;

    for lang in candidates {
        debug!("Trying caption language: {lang}");
        match source.fetch(video_id, lang).await {
            Ok(fragments) => {
                debug!("Got {} fragments for language {lang}", fragments.len());
                return Ok(join_fragments(&fragments));
            }
            Err(e) => {
                debug!("Language {lang} failed: {e}");
                last_error = Some(e);
            }
        }
    }

    let message = match last_error {
        Some(e) => e.to_string(),
        None => "Nenhuma legenda encontrada".to_string(),
    };
    Err(Error::Transcript(message))
}

/// Concatenate fragment texts into one blob: newlines become spaces, each
/// fragment is trimmed, empties are dropped, survivors are space-joined.
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.replace('\n', " "))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
