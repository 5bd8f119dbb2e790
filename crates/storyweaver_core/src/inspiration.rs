//! Inspiration kit requests, ideation, and results.

use crate::story::required;
use crate::validate::{check_len, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyweaver_error::{ValidationError, ValidationErrorKind};

/// Fixed instruction appended to every ideation request.
pub const INSPIRATION_INSTRUCTION: &str = "Supply detailed prompts suitable for DALL·E 3 and short audio cue generation. Reflect the requested vibe and focus.";

/// Emotional register of the kit.
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
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Vibe {
    /// Moody
    Moody,
    /// Uplifting
    Uplifting,
    /// Mysterious
    Mysterious,
    /// Epic
    Epic,
    /// Intimate
    Intimate,
}

/// Medium the creator is working in.
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
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Medium {
    /// Prose
    Text,
    /// Visual art
    Image,
    /// Sound
    Audio,
    /// Any combination
    Mixed,
}

/// What the kit should concentrate on.
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
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Focus {
    /// A character
    Character,
    /// The world
    World,
    /// A single scene
    Scene,
    /// An atmosphere
    Mood,
}

/// An inspiration request as received on the wire, before required-field checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspirationPayload {
    /// Free-text theme
    pub theme: Option<String>,
    /// One of the [`Vibe`] values
    pub vibe: Option<String>,
    /// One of the [`Medium`] values
    pub medium: Option<String>,
    /// One of the [`Focus`] values
    pub focus: Option<String>,
}

/// A validated inspiration request.
///
/// # Examples
///
/// ```
/// use storyweaver_core::{InspirationPayload, InspirationRequest, Vibe};
///
/// let payload = InspirationPayload {
///     theme: Some("tidal city".to_string()),
///     vibe: Some("epic".to_string()),
///     medium: Some("image".to_string()),
///     focus: Some("world".to_string()),
/// };
/// let request = InspirationRequest::try_from(payload).unwrap();
/// assert_eq!(request.vibe, Vibe::Epic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InspirationRequest {
    /// Free-text theme
    pub theme: String,
    /// Emotional register
    pub vibe: Vibe,
    /// Target medium
    pub medium: Medium,
    /// Focus of the kit
    pub focus: Focus,
}

/// Parse an enum-valued field, naming the accepted values on failure.
#[track_caller]
fn parse_choice<T>(field: &str, value: &str, allowed: &[&str]) -> Result<T, ValidationError>
where
    T: FromStr,
{
    T::from_str(value).map_err(|_| {
        ValidationError::new(ValidationErrorKind::InvalidField {
            field: field.to_string(),
            reason: format!("expected one of {}, got '{}'", allowed.join(", "), value),
        })
    })
}

impl TryFrom<InspirationPayload> for InspirationRequest {
    type Error = ValidationError;

    fn try_from(payload: InspirationPayload) -> Result<Self, Self::Error> {
        use strum::VariantNames;

        let mut missing = Vec::new();
        let theme = required(payload.theme, "theme", &mut missing);
        let vibe = required(payload.vibe, "vibe", &mut missing);
        let medium = required(payload.medium, "medium", &mut missing);
        let focus = required(payload.focus, "focus", &mut missing);

        let (Some(theme), Some(vibe), Some(medium), Some(focus)) = (theme, vibe, medium, focus)
        else {
            return Err(ValidationError::new(ValidationErrorKind::MissingFields(
                missing,
            )));
        };

        Ok(Self {
            theme,
            vibe: parse_choice("vibe", &vibe, Vibe::VARIANTS)?,
            medium: parse_choice("medium", &medium, Medium::VARIANTS)?,
            focus: parse_choice("focus", &focus, Focus::VARIANTS)?,
        })
    }
}

/// The user message sent to the ideation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspirationPrompt {
    /// Free-text theme
    pub theme: String,
    /// Emotional register
    pub vibe: Vibe,
    /// Target medium
    pub medium: Medium,
    /// Focus of the kit
    pub focus: Focus,
    /// Always [`INSPIRATION_INSTRUCTION`]
    pub instruction: String,
}

impl From<&InspirationRequest> for InspirationPrompt {
    fn from(request: &InspirationRequest) -> Self {
        Self {
            theme: request.theme.clone(),
            vibe: request.vibe,
            medium: request.medium,
            focus: request.focus,
            instruction: INSPIRATION_INSTRUCTION.to_string(),
        }
    }
}

/// Structured output of the ideation pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ideation {
    /// Prompt for the image render
    pub image_prompt: String,
    /// Prompt for the audio render
    pub audio_prompt: String,
    /// One or two evocative sentences
    pub text_spark: String,
    /// Three to six short tags
    pub vibe_tags: Vec<String>,
}

impl Validate for Ideation {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("vibeTags", self.vibe_tags.len(), 3, 6)
    }
}

/// The merged inspiration kit returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspirationResult {
    /// Text spark from ideation
    pub text_spark: String,
    /// Image prompt from ideation
    pub image_prompt: String,
    /// Audio prompt from ideation
    pub audio_prompt: String,
    /// Tags from ideation
    pub vibe_tags: Vec<String>,
    /// Base64 image, `null` when the provider returned none
    pub image_base64: Option<String>,
    /// Base64 audio
    pub audio_base64: String,
    /// MIME type of the audio
    pub audio_mime_type: String,
}

impl InspirationResult {
    /// Merge ideation with its rendered media.
    pub fn from_parts(
        ideation: Ideation,
        image_base64: Option<String>,
        audio_base64: String,
        audio_mime_type: impl Into<String>,
    ) -> Self {
        Self {
            text_spark: ideation.text_spark,
            image_prompt: ideation.image_prompt,
            audio_prompt: ideation.audio_prompt,
            vibe_tags: ideation.vibe_tags,
            image_base64,
            audio_base64,
            audio_mime_type: audio_mime_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> InspirationPayload {
        InspirationPayload {
            theme: Some("lighthouse keeper".to_string()),
            vibe: Some("moody".to_string()),
            medium: Some("mixed".to_string()),
            focus: Some("character".to_string()),
        }
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let err = InspirationRequest::try_from(InspirationPayload::default()).unwrap_err();
        assert_eq!(
            err.kind().to_string(),
            "Missing required fields: theme, vibe, medium, focus"
        );
    }

    #[test]
    fn test_single_missing_field_reported() {
        let payload = InspirationPayload {
            medium: None,
            ..full_payload()
        };
        let err = InspirationRequest::try_from(payload).unwrap_err();
        assert_eq!(err.kind().to_string(), "Missing required fields: medium");
    }

    #[test]
    fn test_unknown_vibe_lists_allowed_values() {
        let payload = InspirationPayload {
            vibe: Some("chaotic".to_string()),
            ..full_payload()
        };
        let err = InspirationRequest::try_from(payload).unwrap_err();
        let message = err.kind().to_string();
        assert!(message.contains("'vibe'"));
        assert!(message.contains("moody, uplifting, mysterious, epic, intimate"));
    }

    #[test]
    fn test_prompt_carries_instruction() {
        let request = InspirationRequest::try_from(full_payload()).unwrap();
        let value = serde_json::to_value(InspirationPrompt::from(&request)).unwrap();
        assert_eq!(value["vibe"], "moody");
        assert_eq!(value["focus"], "character");
        assert_eq!(value["instruction"], INSPIRATION_INSTRUCTION);
    }

    #[test]
    fn test_ideation_tag_bounds() {
        let mut ideation = Ideation {
            image_prompt: "Storm-lit lighthouse".to_string(),
            audio_prompt: "Low cello drone".to_string(),
            text_spark: "The lamp remembers every ship.".to_string(),
            vibe_tags: vec!["salt".into(), "vigil".into()],
        };
        assert!(ideation.validate().is_err());
        ideation.vibe_tags.push("storm".into());
        assert!(ideation.validate().is_ok());
    }

    #[test]
    fn test_result_serializes_null_image() {
        let ideation = Ideation {
            image_prompt: "i".to_string(),
            audio_prompt: "a".to_string(),
            text_spark: "t".to_string(),
            vibe_tags: vec!["x".into(), "y".into(), "z".into()],
        };
        let result = InspirationResult::from_parts(ideation, None, "AAAA".to_string(), "audio/mpeg");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["imageBase64"].is_null());
        assert_eq!(value["audioBase64"], "AAAA");
        assert_eq!(value["audioMimeType"], "audio/mpeg");
    }
}
