//! JSON schemas the provider's structured output must follow.
//!
//! Every object forbids extra properties and lists all of its properties as
//! required. The array bounds here are checked again after parsing by the
//! [`storyweaver_core::Validate`] impls.

use serde_json::{json, Value};

/// Schema name registered for story beats.
pub const STORY_SCHEMA_NAME: &str = "story_beat";

/// Schema name registered for inspiration kits.
pub const INSPIRATION_SCHEMA_NAME: &str = "inspiration_kit";

fn string_array(min: usize, max: usize) -> Value {
    json!({
        "type": "array",
        "minItems": min,
        "maxItems": max,
        "items": {"type": "string"}
    })
}

/// Schema for one [`storyweaver_core::StoryBeat`].
pub fn story_beat_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": [
            "title",
            "narrative",
            "choices",
            "twist",
            "genreContext",
            "characterFocus",
            "creativeFeedback",
            "microGoals",
            "suggestedDailyChallenge",
            "suggestedWeeklyChallenge",
            "inspiration"
        ],
        "properties": {
            "title": {"type": "string"},
            "narrative": {"type": "string"},
            "twist": {"type": "string"},
            "genreContext": {"type": "string"},
            "choices": {
                "type": "array",
                "minItems": 2,
                "maxItems": 4,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["id", "label", "description"],
                    "properties": {
                        "id": {"type": "string"},
                        "label": {"type": "string"},
                        "description": {"type": "string"}
                    }
                }
            },
            "characterFocus": {
                "type": "object",
                "additionalProperties": false,
                "required": ["name", "motivation", "conflict"],
                "properties": {
                    "name": {"type": "string"},
                    "motivation": {"type": "string"},
                    "conflict": {"type": "string"}
                }
            },
            "creativeFeedback": {
                "type": "object",
                "additionalProperties": false,
                "required": ["strengths", "opportunities", "pacingNote", "dialogueNote"],
                "properties": {
                    "strengths": string_array(1, 3),
                    "opportunities": string_array(1, 3),
                    "pacingNote": {"type": "string"},
                    "dialogueNote": {"type": "string"}
                }
            },
            "microGoals": string_array(2, 4),
            "suggestedDailyChallenge": {"type": "string"},
            "suggestedWeeklyChallenge": {"type": "string"},
            "inspiration": {
                "type": "object",
                "additionalProperties": false,
                "required": ["imagePrompt", "audioPrompt", "textSpark"],
                "properties": {
                    "imagePrompt": {"type": "string"},
                    "audioPrompt": {"type": "string"},
                    "textSpark": {"type": "string"}
                }
            }
        }
    })
}

/// Schema for one [`storyweaver_core::Ideation`].
pub fn inspiration_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["imagePrompt", "audioPrompt", "textSpark", "vibeTags"],
        "properties": {
            "imagePrompt": {"type": "string"},
            "audioPrompt": {"type": "string"},
            "textSpark": {"type": "string"},
            "vibeTags": string_array(3, 6)
        }
    })
}
