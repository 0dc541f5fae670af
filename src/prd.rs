use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the interview collected, fixed once collection finishes.
///
/// This is the sole input to PRD generation. `answers` maps catalog question
/// ids to the recorded answer; skipped optional questions are present with an
/// empty string rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarifyingAnswers {
    pub feature_description: String,
    pub answers: BTreeMap<String, String>,
}

impl ClarifyingAnswers {
    pub fn new(feature_description: String) -> Self {
        Self {
            feature_description,
            answers: BTreeMap::new(),
        }
    }

    /// The recorded answer for a question id, empty if skipped or unknown.
    pub fn answer(&self, id: &str) -> &str {
        self.answers.get(id).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    /// 1 = highest, 3 = lowest.
    pub priority: u8,
}

/// The structured PRD produced by generation.
///
/// Constructed once, read-only thereafter; the markdown renderer and the
/// tracker converter consume it independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrd {
    pub name: String,
    pub slug: String,
    pub branch_name: String,
    pub description: String,
    pub user_stories: Vec<UserStory>,
}
