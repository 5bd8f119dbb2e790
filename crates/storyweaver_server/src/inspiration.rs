//! Inspiration Endpoint: `POST /inspiration`.

use crate::{
    error::{rejection_error, INSPIRATION_FALLBACK_MESSAGE},
    prompts::INSPIRATION_SYSTEM_PROMPT,
    schema::{inspiration_schema, INSPIRATION_SCHEMA_NAME},
    ApiError, AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use storyweaver_core::{
    Ideation, InspirationPayload, InspirationPrompt, InspirationRequest, InspirationResult,
};
use storyweaver_error::{BuilderError, JsonError, StoryweaverResult};
use storyweaver_interface::{
    generate_validated, CreativeProvider, ImageRequest, SpeechRequest, StructuredRequest,
};
use tracing::{debug, info, instrument};

/// Produce an inspiration kit: ideation first, then image and audio together.
///
/// Either render failing fails the whole kit.
#[instrument(skip_all, fields(vibe = %request.vibe, medium = %request.medium, focus = %request.focus))]
pub async fn generate_inspiration_kit(
    provider: &dyn CreativeProvider,
    request: &InspirationRequest,
) -> StoryweaverResult<InspirationResult> {
    let prompt = InspirationPrompt::from(request);
    let user_content =
        serde_json::to_string(&prompt).map_err(|e| JsonError::new(e.to_string()))?;

    let structured = StructuredRequest::builder()
        .system_prompt(INSPIRATION_SYSTEM_PROMPT)
        .user_content(user_content)
        .schema_name(INSPIRATION_SCHEMA_NAME)
        .schema(inspiration_schema())
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;

    let ideation: Ideation = generate_validated(provider, &structured).await?;
    debug!(tags = ideation.vibe_tags.len(), "Ideation complete");

    let image_request = ImageRequest::builder()
        .prompt(ideation.image_prompt.as_str())
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;
    let speech_request = SpeechRequest::builder()
        .input(ideation.audio_prompt.as_str())
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;

    let (image, audio) = tokio::try_join!(
        provider.generate_image(&image_request),
        provider.synthesize_speech(&speech_request),
    )?;

    let audio_base64 = STANDARD.encode(audio.data());
    let image_base64 = image.into_base64();
    info!(
        has_image = image_base64.is_some(),
        audio_bytes = audio.data().len(),
        "Generated inspiration kit"
    );

    Ok(InspirationResult::from_parts(
        ideation,
        image_base64,
        audio_base64,
        audio.mime_type().as_str(),
    ))
}

/// Handler for `POST /inspiration`.
pub async fn inspiration_handler(
    State(state): State<AppState>,
    payload: Result<Json<InspirationPayload>, JsonRejection>,
) -> Result<Json<InspirationResult>, ApiError> {
    let to_api = |err| {
        ApiError::from_error(err, INSPIRATION_FALLBACK_MESSAGE, state.expose_error_details())
    };

    let Json(payload) = payload.map_err(|rejection| to_api(rejection_error(rejection)))?;
    let request = InspirationRequest::try_from(payload).map_err(|e| to_api(e.into()))?;

    generate_inspiration_kit(state.provider(), &request)
        .await
        .map(Json)
        .map_err(to_api)
}
