pub mod extraction;
pub mod analysis;
pub mod processor;

pub use processor::*;

use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());

/// Strip an optional Markdown code fence from a model reply. Models asked for
/// strict JSON still wrap it in ```json fences often enough that every parse
/// path goes through this first.
pub fn strip_code_fences(text: &str) -> &str {
    match CODE_FENCE.captures(text) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => text.trim(),
    }
}
