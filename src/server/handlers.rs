use super::types::{ErrorResponse, MoodResponse, TextAnalyzeRequest, WelcomeResponse};
use crate::Error;
use crate::analysis::{ImageEmotionAnalyzer, TextEmotionAnalyzer};
use crate::caption::CaptionProvider;
use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub text_analyzer: Arc<dyn TextEmotionAnalyzer>,
    pub image_analyzer: Arc<dyn ImageEmotionAnalyzer>,
    pub captions: Arc<dyn CaptionProvider>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to MoodMirror API".to_string(),
    })
}

pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<TextAnalyzeRequest>,
) -> Result<Json<MoodResponse>, HandlerError> {
    info!("Received text analysis request: {}", request.text);

    let estimate = state
        .text_analyzer
        .analyze(&request.text)
        .await
        .map_err(error_response)?;

    let caption = if request.generate_caption {
        let caption = state
            .captions
            .caption(estimate.emotion, Some(&request.text))
            .await
            .map_err(error_response)?;
        Some(caption)
    } else {
        None
    };

    info!("Text resolved to {} ({})", estimate.emotion, estimate.score);
    Ok(Json(MoodResponse::new(estimate, caption)))
}

pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MoodResponse>, HandlerError> {
    let mut image_bytes = None;
    let mut generate_caption = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("image") => {
                // Reject non-image uploads before any analyzer work
                let content_type = field.content_type().unwrap_or_default().to_string();
                if !content_type.starts_with("image/") {
                    return Err(error_response(Error::bad_request("File must be an image")));
                }
                image_bytes = Some(field.bytes().await.map_err(multipart_error)?);
            }
            Some("generate_caption") => {
                let raw = field.text().await.map_err(multipart_error)?;
                generate_caption = parse_bool_field(&raw).ok_or_else(|| {
                    error_response(Error::bad_request(
                        "Field 'generate_caption' must be a boolean",
                    ))
                })?;
            }
            _ => continue,
        }
    }

    let Some(bytes) = image_bytes else {
        return Err(error_response(Error::bad_request(
            "Missing file field 'image'",
        )));
    };

    info!("Received image analysis request ({} bytes)", bytes.len());

    let estimate = state
        .image_analyzer
        .analyze(&bytes)
        .await
        .map_err(error_response)?;

    let caption = if generate_caption {
        let caption = state
            .captions
            .caption(estimate.emotion, None)
            .await
            .map_err(error_response)?;
        Some(caption)
    } else {
        None
    };

    info!("Image resolved to {} ({})", estimate.emotion, estimate.score);
    Ok(Json(MoodResponse::new(estimate, caption)))
}

// Invalid image bytes deliberately map to 500: existing clients expect
// that status, so only pre-analysis validation reports 400 here.
fn error_response(e: Error) -> HandlerError {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        error!("Request failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}

fn multipart_error(e: MultipartError) -> HandlerError {
    error!("Malformed multipart request: {}", e);
    (
        e.status(),
        Json(ErrorResponse {
            detail: e.body_text(),
        }),
    )
}

fn parse_bool_field(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
