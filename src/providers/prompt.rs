/// The system instruction sent with every extraction request.
///
/// Loaded from `prompt.txt` at compile time so the wording can be edited
/// without touching Rust string syntax.
pub const RECIPE_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");
