#![allow(dead_code)]

use serde_json::{Value, json};

pub fn sample_feedback() -> Value {
    json!({
        "overallScore": 7,
        "detailedFeedback": "Clear goal, but the prompt lacks audience and format constraints.",
        "skillRatings": [
            {"name": "Clarity", "score": 8},
            {"name": "Specificity", "score": 6},
            {"name": "Context", "score": 5},
            {"name": "Structure", "score": 7},
            {"name": "Goal Alignment", "score": 8}
        ],
        "improvementTips": [
            "Name the target audience",
            "Specify the desired length",
            "Ask for a specific format",
            "Give an example of the tone",
            "State what to avoid"
        ],
        "examplePrompts": [
            "Write a 200-word product description for busy parents, in a warm tone.",
            "Summarize the attached article in five bullet points for executives."
        ]
    })
}

/// Feedback wrapped in the kind of chatter models add around JSON.
pub fn noisy_feedback_text() -> String {
    format!(
        "Sure! Here is my evaluation:\n```json\n{}\n```\nHope this helps.",
        serde_json::to_string_pretty(&sample_feedback()).unwrap()
    )
}

pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 80}
    })
}

pub fn gemini_error(code: u16, message: &str) -> Value {
    json!({
        "error": {"code": code, "message": message, "status": "UNAVAILABLE"}
    })
}

pub fn analyze_body() -> Value {
    json!({
        "scenario": "Ask an AI to draft a product description",
        "difficulty": "beginner",
        "userPrompt": "write a product description for my blender",
        "apiKey": "test-key"
    })
}
