//! Story Endpoint: `POST /story`.

use crate::{
    error::{rejection_error, STORY_FALLBACK_MESSAGE},
    prompts::STORY_SYSTEM_PROMPT,
    schema::{story_beat_schema, STORY_SCHEMA_NAME},
    ApiError, AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use storyweaver_core::{StoryBeat, StoryPrompt, StoryRequest, StoryRequestPayload};
use storyweaver_error::{BuilderError, JsonError, StoryweaverResult};
use storyweaver_interface::{generate_validated, CreativeProvider, StructuredRequest};
use tracing::{debug, info, instrument};

/// Generate the next beat for `request`.
///
/// Only the last few prior beats are forwarded; see
/// [`storyweaver_core::condense_history`].
#[instrument(skip_all, fields(mode = %request.mode, beats = request.previous_beats.len()))]
pub async fn generate_story_beat(
    provider: &dyn CreativeProvider,
    request: &StoryRequest,
) -> StoryweaverResult<StoryBeat> {
    let prompt = StoryPrompt::from(request);
    debug!(history = prompt.story_so_far.len(), "Condensed story history");

    let user_content =
        serde_json::to_string(&prompt).map_err(|e| JsonError::new(e.to_string()))?;

    let structured = StructuredRequest::builder()
        .system_prompt(STORY_SYSTEM_PROMPT)
        .user_content(user_content)
        .schema_name(STORY_SCHEMA_NAME)
        .schema(story_beat_schema())
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;

    let beat: StoryBeat = generate_validated(provider, &structured).await?;
    info!(title = %beat.title, choices = beat.choices.len(), "Generated story beat");
    Ok(beat)
}

/// Handler for `POST /story`.
pub async fn story_handler(
    State(state): State<AppState>,
    payload: Result<Json<StoryRequestPayload>, JsonRejection>,
) -> Result<Json<StoryBeat>, ApiError> {
    let to_api =
        |err| ApiError::from_error(err, STORY_FALLBACK_MESSAGE, state.expose_error_details());

    let Json(payload) = payload.map_err(|rejection| to_api(rejection_error(rejection)))?;
    let request = StoryRequest::try_from(payload).map_err(|e| to_api(e.into()))?;

    generate_story_beat(state.provider(), &request)
        .await
        .map(Json)
        .map_err(to_api)
}
