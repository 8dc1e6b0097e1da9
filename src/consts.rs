/// Fallback chain, highest priority first.
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const API_VERSION: &str = "v1beta";

/// Skills the provider is asked to rate, in response order.
pub const SKILLS: [&str; 5] = [
    "Clarity",
    "Specificity",
    "Context",
    "Structure",
    "Goal Alignment",
];

pub const IMPROVEMENT_TIP_COUNT: usize = 5;
pub const EXAMPLE_PROMPT_COUNT: usize = 2;

pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse AI response";
pub const ALL_MODELS_FAILED_MESSAGE: &str = "All AI models failed to generate feedback";

pub const DEFAULT_PORT: u16 = 5000;
pub const RECORDS_TABLE: &str = "prompt_analyses";
