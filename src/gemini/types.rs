//! Wire types for the Gemini generateContent endpoint

use serde::{Deserialize, Serialize};

/// Request body for POST models/{model}:generateContent
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// One content part; only text parts are used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation parameters; only the output-length cap is set
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// Response body from generateContent
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate output
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateResponse {
    /// Extract the first text part of the first candidate, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 200,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 200);
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Stay hydrated."}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("Stay hydrated."));
    }

    #[test]
    fn test_response_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_response_empty_parts() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_text().is_none());
    }
}
