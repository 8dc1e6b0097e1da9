use phf::phf_map;

use crate::consts;
use crate::models::request::{Difficulty, ValidatedRequest};

static STRICTNESS: phf::Map<&'static str, &'static str> = phf_map! {
    "beginner" => "The user is a beginner. Be encouraging and forgiving: reward the basics \
        done right and point out at most a few fundamental gaps.",
    "intermediate" => "The user is at an intermediate level. Be moderately strict: expect clear \
        intent and reasonable context, and call out missing constraints or structure.",
    "advanced" => "The user claims advanced skill. Be strict: expect precise goals, explicit \
        constraints, output format and edge cases, and score anything less accordingly.",
};

fn strictness_clause(difficulty: Difficulty) -> &'static str {
    STRICTNESS
        .get(difficulty.as_str())
        .copied()
        .unwrap_or_default()
}

fn output_schema() -> String {
    let skills = consts::SKILLS
        .iter()
        .map(|skill| format!("    {{ \"name\": \"{skill}\", \"score\": <integer 1-10> }}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "{{\n  \"overallScore\": <integer 1-10>,\n  \"detailedFeedback\": \"<one paragraph>\",\n  \
         \"skillRatings\": [\n{skills}\n  ],\n  \
         \"improvementTips\": [<exactly {tips} short strings>],\n  \
         \"examplePrompts\": [<exactly {examples} improved prompts for this scenario>]\n}}",
        tips = consts::IMPROVEMENT_TIP_COUNT,
        examples = consts::EXAMPLE_PROMPT_COUNT,
    )
}

/// Renders the evaluation instructions sent to the provider. Inputs are
/// embedded as-is.
pub fn compose_prompt(request: &ValidatedRequest) -> String {
    format!(
        "You are an expert prompt engineering coach. Evaluate the prompt a user wrote for the \
         scenario below.\n\n\
         Scenario: {scenario}\n\
         Difficulty: {difficulty}\n\
         User's prompt: {user_prompt}\n\n\
         {strictness}\n\n\
         Rate the prompt on each of these skills: {skills}.\n\n\
         Respond with a single JSON object and nothing else, using exactly this structure:\n\
         {schema}",
        scenario = request.scenario,
        difficulty = request.difficulty,
        user_prompt = request.user_prompt,
        strictness = strictness_clause(request.level()),
        skills = consts::SKILLS.join(", "),
        schema = output_schema(),
    )
}
