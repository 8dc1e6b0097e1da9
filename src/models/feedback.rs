use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillRating {
    pub name: String,
    pub score: i64,
}

/// Shape the provider is asked to emit. Responses are passed through as raw
/// JSON, so this type is for clients reading the analyze body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub overall_score: i64,
    pub detailed_feedback: String,
    pub skill_ratings: Vec<SkillRating>,
    #[serde(default)]
    pub improvement_tips: Vec<String>,
    #[serde(default)]
    pub example_prompts: Vec<String>,
}
