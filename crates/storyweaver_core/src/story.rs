//! Story continuation requests and condensed history.

use crate::{CharacterFocus, StoryBeat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyweaver_error::{ValidationError, ValidationErrorKind};

/// How many prior beats are forwarded to the generator.
///
/// Older beats are dropped to bound prompt size; continuity beyond this horizon
/// is not preserved.
pub const HISTORY_WINDOW: usize = 3;

/// What the caller wants the next beat to do.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyweaver_core::StoryMode;
///
/// assert_eq!(StoryMode::from_str("genre-shift").unwrap(), StoryMode::GenreShift);
/// assert_eq!(StoryMode::Continue.to_string(), "continue");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StoryMode {
    /// Open a new story
    Start,
    /// Continue from the previous beats
    Continue,
    /// Reframe the story into `targetGenre`
    GenreShift,
}

/// A story request as received on the wire, before required-field checks.
///
/// Every field is optional so that absent fields can be reported by name rather
/// than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryRequestPayload {
    /// `start`, `continue`, or `genre-shift`
    pub mode: Option<String>,
    /// Genre the story is currently in
    pub current_genre: Option<String>,
    /// Genre to shift to
    pub target_genre: Option<String>,
    /// What the writer wants from this beat
    pub user_intent: Option<String>,
    /// Id of the choice taken on the previous beat
    pub choice_id: Option<String>,
    /// Beats produced so far, oldest first
    pub previous_beats: Option<Vec<StoryBeat>>,
    /// Who the story is for
    pub audience_profile: Option<String>,
}

/// A validated story continuation request.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryRequest {
    /// Requested mode
    pub mode: StoryMode,
    /// Genre the story is currently in
    pub current_genre: String,
    /// Genre to shift to
    pub target_genre: Option<String>,
    /// What the writer wants from this beat
    pub user_intent: String,
    /// Id of the choice taken on the previous beat
    pub choice_id: Option<String>,
    /// Beats produced so far, oldest first
    pub previous_beats: Vec<StoryBeat>,
    /// Who the story is for
    pub audience_profile: Option<String>,
}

/// Take a required field, recording its wire name when absent or empty.
pub(crate) fn required(
    value: Option<String>,
    name: &str,
    missing: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(name.to_string());
            None
        }
    }
}

impl TryFrom<StoryRequestPayload> for StoryRequest {
    type Error = ValidationError;

    fn try_from(payload: StoryRequestPayload) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mode = required(payload.mode, "mode", &mut missing);
        let current_genre = required(payload.current_genre, "currentGenre", &mut missing);
        let user_intent = required(payload.user_intent, "userIntent", &mut missing);

        let (Some(mode), Some(current_genre), Some(user_intent)) =
            (mode, current_genre, user_intent)
        else {
            return Err(ValidationError::new(ValidationErrorKind::MissingFields(
                missing,
            )));
        };

        let mode = StoryMode::from_str(&mode).map_err(|_| {
            ValidationError::new(ValidationErrorKind::InvalidField {
                field: "mode".to_string(),
                reason: format!("expected start, continue, or genre-shift, got '{}'", mode),
            })
        })?;

        Ok(Self {
            mode,
            current_genre,
            target_genre: payload.target_genre,
            user_intent,
            choice_id: payload.choice_id,
            previous_beats: payload.previous_beats.unwrap_or_default(),
            audience_profile: payload.audience_profile,
        })
    }
}

/// A prior beat projected down to what the generator needs for continuity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondensedBeat {
    /// Beat title
    pub title: String,
    /// Narrative text
    pub narrative: String,
    /// Label of the choice matching the request's `choiceId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_taken: Option<String>,
    /// Genre label of the beat
    pub genre_context: String,
    /// The beat's twist
    pub twist: String,
    /// Character the beat centred on
    pub character_focus: CharacterFocus,
}

/// Project the last [`HISTORY_WINDOW`] beats into condensed history.
///
/// For each forwarded beat, `choiceTaken` is the label of that beat's choice
/// whose id equals `choice_id`, or absent when nothing matches.
///
/// # Examples
///
/// ```
/// use storyweaver_core::condense_history;
///
/// assert!(condense_history(&[], Some("left")).is_empty());
/// ```
pub fn condense_history(beats: &[StoryBeat], choice_id: Option<&str>) -> Vec<CondensedBeat> {
    let start = beats.len().saturating_sub(HISTORY_WINDOW);
    beats[start..]
        .iter()
        .map(|beat| CondensedBeat {
            title: beat.title.clone(),
            narrative: beat.narrative.clone(),
            choice_taken: choice_id
                .and_then(|id| beat.choice_label(id))
                .map(str::to_string),
            genre_context: beat.genre_context.clone(),
            twist: beat.twist.clone(),
            character_focus: beat.character_focus.clone(),
        })
        .collect()
}

/// The user message sent to the story generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPrompt {
    /// Requested mode
    pub mode: StoryMode,
    /// Genre the story is currently in
    pub current_genre: String,
    /// Genre to shift to, `null` when not shifting
    pub target_genre: Option<String>,
    /// What the writer wants from this beat
    pub user_intent: String,
    /// Choice taken, `null` when none
    pub choice_id: Option<String>,
    /// Who the story is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_profile: Option<String>,
    /// Condensed history, oldest first
    pub story_so_far: Vec<CondensedBeat>,
}

impl From<&StoryRequest> for StoryPrompt {
    fn from(request: &StoryRequest) -> Self {
        Self {
            mode: request.mode,
            current_genre: request.current_genre.clone(),
            target_genre: request.target_genre.clone(),
            user_intent: request.user_intent.clone(),
            choice_id: request.choice_id.clone(),
            audience_profile: request.audience_profile.clone(),
            story_so_far: condense_history(&request.previous_beats, request.choice_id.as_deref()),
        }
    }
}
