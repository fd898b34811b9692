use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::plan::GeneratedLessonPlan;
use crate::wire::GenRequest;

/// Gemini provider. Sends the prompt as a single user turn and asks the API
/// to constrain the response body to our lesson-plan schema.
pub struct GeminiProvider {
    model: String,
    client: Client,
    timeout_secs: u64,
    api_base: String,
}

impl GeminiProvider {
    pub fn new(model: String, timeout_secs: u64, api_base: String) -> Self {
        Self {
            model,
            client: Client::new(),
            timeout_secs,
            api_base,
        }
    }
}

#[async_trait]
impl super::Provider for GeminiProvider {
    async fn send(&self, req: &GenRequest, debug: bool) -> Result<GeneratedLessonPlan> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY env var is not set"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );

        let body = json!({
            "contents": [
                { "parts": [ { "text": &req.prompt } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": &req.response_schema,
                "temperature": req.temperature
            }
        });

        if debug {
            eprintln!("debug[gemini]: HTTP POST {}", url);
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if debug {
            eprintln!("debug[gemini]: raw status: {}", status);
            eprintln!("debug[gemini]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({}): {}", status, text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse Gemini response: {e}\nRaw: {text}"))?;

        let content = parsed.first_text().unwrap_or_default();
        let content = content.trim();

        // Try strict parse first
        match serde_json::from_str::<GeneratedLessonPlan>(content) {
            Ok(ok) => return Ok(ok),
            Err(_e) => {
                // Fallback: extract first {...} JSON object from the text, then parse it.
                if let Some(obj) = super::extract_first_json_object(content) {
                    if let Ok(plan) = serde_json::from_str::<GeneratedLessonPlan>(&obj) {
                        return Ok(plan);
                    }
                }
            }
        }

        Err(anyhow!(
            "Model did not return a valid lesson plan JSON body.\n--- content start ---\n{}\n--- content end ---",
            content
        ))
    }
}

// Minimal structs to parse the generateContent response
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
    }
}
