use anyhow::Result;
use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::plan::GeneratedLessonPlan;
use crate::wire::GenRequest;

pub mod gemini;

#[async_trait]
pub trait Provider: Send + Sync {
    async fn send(&self, req: &GenRequest, debug: bool) -> Result<GeneratedLessonPlan>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(
    kind: ProviderKind,
    model: String,
    timeout_secs: u64,
    api_base: String,
) -> Result<DynProvider> {
    match kind {
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiProvider::new(
            model,
            timeout_secs,
            api_base,
        ))),
    }
}

/// Extracts the first top-level JSON object substring from a string.
/// Handles nested braces; returns None if not found.
pub fn extract_first_json_object(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut start = None;
    let mut depth = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'{' {
            if start.is_none() {
                start = Some(i);
            }
            depth += 1;
        } else if b == b'}' {
            if depth > 0 {
                depth -= 1;
                if depth == 0 {
                    if let Some(st) = start {
                        let slice = &s[st..=i];
                        return Some(slice.to_string());
                    }
                }
            }
        }
    }
    None
}
