//! JSON fixtures shaped like provider output.
#![allow(dead_code)]

use serde_json::{json, Value};

/// A schema-conforming story beat. Choice ids are `<n>-a` and `<n>-b`.
pub fn beat_json(n: usize) -> Value {
    json!({
        "title": format!("Beat {n}"),
        "narrative": format!("Rain hammers the pier in beat {n}."),
        "choices": [
            {"id": format!("{n}-a"), "label": format!("Follow the lantern {n}"), "description": "Chase the light."},
            {"id": format!("{n}-b"), "label": format!("Stay hidden {n}"), "description": "Wait it out."}
        ],
        "twist": "The lantern was never lit.",
        "genreContext": "noir",
        "characterFocus": {
            "name": "Ines",
            "motivation": "Find her brother",
            "conflict": "She owes the harbourmaster"
        },
        "creativeFeedback": {
            "strengths": ["Vivid weather"],
            "opportunities": ["Sharpen Ines's voice"],
            "pacingNote": "Brisk.",
            "dialogueNote": "Sparse, which suits her."
        },
        "microGoals": ["Name the harbourmaster", "Draft the brother's last letter"],
        "suggestedDailyChallenge": "Write 100 words from the lantern's view today.",
        "suggestedWeeklyChallenge": "Finish act one by Sunday.",
        "inspiration": {
            "imagePrompt": "Rain-slick pier at night, sodium light, film grain",
            "audioPrompt": "Low cello drone, distant foghorn, 60 bpm",
            "textSpark": "Some lights are lit only to be followed."
        }
    })
}

/// A schema-conforming ideation.
pub fn ideation_json() -> Value {
    json!({
        "imagePrompt": "A lighthouse in a storm, oil painting, warm interior glow",
        "audioPrompt": "Wind, creaking timber, a slow music box melody",
        "textSpark": "The keeper counts ships that never arrive.",
        "vibeTags": ["stormy", "lonely", "warm"]
    })
}
