//! Story beat types.

use crate::validate::{check_len, Validate};
use serde::{Deserialize, Serialize};
use storyweaver_error::ValidationError;

/// A direction the reader can take after a beat.
///
/// # Examples
///
/// ```
/// use storyweaver_core::StoryChoice;
///
/// let choice = StoryChoice {
///     id: "sneak".to_string(),
///     label: "Slip past the guards".to_string(),
///     description: "Risk discovery to reach the archive tonight.".to_string(),
/// };
/// assert_eq!(choice.id, "sneak");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryChoice {
    /// Identifier the client echoes back as `choiceId`
    pub id: String,
    /// Short label shown on the choice button
    pub label: String,
    /// One-line consequence preview
    pub description: String,
}

/// The character a beat centres on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterFocus {
    /// Character name
    pub name: String,
    /// What the character wants
    pub motivation: String,
    /// What stands in their way
    pub conflict: String,
}

/// Mentor feedback on the beat just written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreativeFeedback {
    /// One to three strengths
    pub strengths: Vec<String>,
    /// One to three opportunities
    pub opportunities: Vec<String>,
    /// Note on pacing
    pub pacing_note: String,
    /// Note on dialogue
    pub dialogue_note: String,
}

/// Multimedia hooks attached to a beat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BeatInspiration {
    /// Image generation prompt
    pub image_prompt: String,
    /// Audio mood cue prompt
    pub audio_prompt: String,
    /// One or two evocative sentences
    pub text_spark: String,
}

/// One generated unit of interactive narrative.
///
/// Beats are immutable once produced. The caller keeps them in an ordered list
/// and sends that list back as `previousBeats`; a beat has no identity beyond its
/// position there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoryBeat {
    /// Beat title
    pub title: String,
    /// Narrative text
    pub narrative: String,
    /// Two to four choices for the next step
    pub choices: Vec<StoryChoice>,
    /// The twist introduced by this beat
    pub twist: String,
    /// Genre label the beat was written in
    pub genre_context: String,
    /// Character the beat centres on
    pub character_focus: CharacterFocus,
    /// Mentor feedback
    pub creative_feedback: CreativeFeedback,
    /// Two to four short imperative goals
    pub micro_goals: Vec<String>,
    /// Daily accountability challenge
    pub suggested_daily_challenge: String,
    /// Weekly accountability challenge
    pub suggested_weekly_challenge: String,
    /// Multimedia inspiration hooks
    pub inspiration: BeatInspiration,
}

impl StoryBeat {
    /// Label of the choice with the given id, if this beat offered it.
    pub fn choice_label(&self, choice_id: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.id == choice_id)
            .map(|choice| choice.label.as_str())
    }
}

impl Validate for StoryBeat {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("choices", self.choices.len(), 2, 4)?;
        check_len(
            "creativeFeedback.strengths",
            self.creative_feedback.strengths.len(),
            1,
            3,
        )?;
        check_len(
            "creativeFeedback.opportunities",
            self.creative_feedback.opportunities.len(),
            1,
            3,
        )?;
        check_len("microGoals", self.micro_goals.len(), 2, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn beat_json() -> serde_json::Value {
        json!({
            "title": "The Lantern Market",
            "narrative": "Mira threads through stalls of humming glass.",
            "choices": [
                {"id": "follow", "label": "Follow the courier", "description": "Trail the stranger."},
                {"id": "bargain", "label": "Bargain for the map", "description": "Spend the last coin."}
            ],
            "twist": "The map is blank until moonrise.",
            "genreContext": "fantasy",
            "characterFocus": {"name": "Mira", "motivation": "Find her brother", "conflict": "She is broke"},
            "creativeFeedback": {
                "strengths": ["Vivid setting"],
                "opportunities": ["Sharpen the stakes"],
                "pacingNote": "Brisk.",
                "dialogueNote": "Add a line for the courier."
            },
            "microGoals": ["Name the courier", "Sketch the market map"],
            "suggestedDailyChallenge": "Write 200 words tonight.",
            "suggestedWeeklyChallenge": "Finish act one by Sunday.",
            "inspiration": {
                "imagePrompt": "Night market, paper lanterns, cinematic lighting",
                "audioPrompt": "Soft hang drum, 90 bpm, distant chatter",
                "textSpark": "Every lantern hides a name."
            }
        })
    }

    #[test]
    fn test_beat_decodes_camel_case() {
        let beat: StoryBeat = serde_json::from_value(beat_json()).unwrap();
        assert_eq!(beat.genre_context, "fantasy");
        assert_eq!(beat.creative_feedback.pacing_note, "Brisk.");
        assert!(beat.validate().is_ok());
    }

    #[test]
    fn test_beat_rejects_unknown_fields() {
        let mut value = beat_json();
        value["mood"] = json!("ominous");
        assert!(serde_json::from_value::<StoryBeat>(value).is_err());

        let mut value = beat_json();
        value["choices"][0]["weight"] = json!(3);
        assert!(serde_json::from_value::<StoryBeat>(value).is_err());
    }

    #[test]
    fn test_beat_rejects_missing_fields() {
        let mut value = beat_json();
        value.as_object_mut().unwrap().remove("twist");
        assert!(serde_json::from_value::<StoryBeat>(value).is_err());
    }

    #[test]
    fn test_validate_rejects_single_choice() {
        let mut value = beat_json();
        value["choices"].as_array_mut().unwrap().pop();
        let beat: StoryBeat = serde_json::from_value(value).unwrap();
        assert!(beat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_micro_goals() {
        let mut value = beat_json();
        value["microGoals"] = json!(["a", "b", "c", "d", "e"]);
        let beat: StoryBeat = serde_json::from_value(value).unwrap();
        assert!(beat.validate().is_err());
    }

    #[test]
    fn test_choice_label_lookup() {
        let beat: StoryBeat = serde_json::from_value(beat_json()).unwrap();
        assert_eq!(beat.choice_label("bargain"), Some("Bargain for the map"));
        assert_eq!(beat.choice_label("flee"), None);
    }

    #[test]
    fn test_beat_serializes_back_to_same_json() {
        let beat: StoryBeat = serde_json::from_value(beat_json()).unwrap();
        assert_eq!(serde_json::to_value(&beat).unwrap(), beat_json());
    }
}
