//! Gateway client for the Gemini `generateContent` API.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{GatewayConfig, SecureString};
use crate::model::{DictionaryEntry, Phrase, QuizQuestion, SourceLanguage};

use super::error::GatewayError;
use super::{prompts, schema, ContentGateway, PHRASE_BATCH};

/// HTTP client for the generative service.
pub struct GeminiGateway {
    client: Client,
    config: GatewayConfig,
    api_key: Option<SecureString>,
}

impl GeminiGateway {
    /// Build a client from config. A missing API key is not an error
    /// here; calls made without one degrade to empty results.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            tracing::warn!("No API key configured; content requests will return nothing");
        }
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(
        &self,
        operation: &'static str,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GatewayError> {
        let api_key = self.api_key.as_ref().ok_or(GatewayError::NotConfigured)?;
        let url = self.endpoint(model);

        tracing::debug!(operation, url = %url, model, "Sending content request");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose())
            .json(request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        tracing::debug!(operation, latency_ms, bytes = body.len(), "Content response received");

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Parse(format!("Failed to parse response JSON: {}", e)))
    }

    /// Ask for JSON matching `response_schema` and parse it into `T`.
    async fn generate_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        prompt: String,
        response_schema: Value,
    ) -> Result<T, GatewayError> {
        let request = GenerateRequest::text(prompt, response_schema);
        let response = self
            .generate(operation, &self.config.text_model, &request)
            .await?;
        let text = response
            .first_part()
            .and_then(|p| p.text.as_deref())
            .ok_or(GatewayError::EmptyResponse)?;
        serde_json::from_str(text)
            .map_err(|e| GatewayError::InvalidShape(format!("{} response: {}", operation, e)))
    }

    async fn try_lookup(
        &self,
        term: &str,
        language: SourceLanguage,
    ) -> Result<DictionaryEntry, GatewayError> {
        let entry = self
            .generate_json("lookup", prompts::lookup(term, language), schema::entry())
            .await?;
        schema::validate_entry(entry)
    }

    async fn try_word_of_the_day(&self) -> Result<DictionaryEntry, GatewayError> {
        let entry = self
            .generate_json(
                "word_of_the_day",
                prompts::WORD_OF_THE_DAY.to_string(),
                schema::entry(),
            )
            .await?;
        schema::validate_entry(entry)
    }

    async fn try_phrases(&self, category: &str) -> Result<Vec<Phrase>, GatewayError> {
        let phrases = self
            .generate_json(
                "phrases",
                prompts::phrases(category, PHRASE_BATCH),
                schema::phrases(),
            )
            .await?;
        Ok(schema::validate_phrases(phrases, PHRASE_BATCH))
    }

    async fn try_quiz(
        &self,
        count: usize,
        test_type: &str,
    ) -> Result<Vec<QuizQuestion>, GatewayError> {
        let questions = self
            .generate_json("quiz", prompts::quiz(test_type, count), schema::quiz())
            .await?;
        Ok(schema::validate_questions(questions, count))
    }

    async fn try_speech(&self, text: &str) -> Result<String, GatewayError> {
        let request = GenerateRequest::speech(prompts::speech(text), &self.config.voice);
        let response = self
            .generate("speech", &self.config.speech_model, &request)
            .await?;
        response
            .first_part()
            .and_then(|p| p.inline_data.as_ref())
            .map(|d| d.data.clone())
            .filter(|d| !d.is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }
}

/// Log a failed call and hand back the empty value for its operation.
fn degrade<T>(operation: &str, result: Result<T, GatewayError>, empty: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(operation, error = %e, "Content request failed");
            empty
        }
    }
}

#[async_trait]
impl ContentGateway for GeminiGateway {
    async fn lookup(&self, term: &str, language: SourceLanguage) -> Option<DictionaryEntry> {
        degrade("lookup", self.try_lookup(term, language).await.map(Some), None)
    }

    async fn word_of_the_day(&self) -> Option<DictionaryEntry> {
        degrade(
            "word_of_the_day",
            self.try_word_of_the_day().await.map(Some),
            None,
        )
    }

    async fn phrases_for_category(&self, category: &str) -> Vec<Phrase> {
        degrade("phrases", self.try_phrases(category).await, Vec::new())
    }

    async fn generate_quiz(&self, count: usize, test_type: &str) -> Vec<QuizQuestion> {
        degrade("quiz", self.try_quiz(count, test_type).await, Vec::new())
    }

    async fn synthesize_speech(&self, text: &str) -> String {
        degrade("speech", self.try_speech(text).await, String::new())
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn text(prompt: String, response_schema: Value) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema),
                ..Default::default()
            },
        }
    }

    fn speech(prompt: String, voice: &str) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.to_string(),
                        },
                    },
                }),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<RequestPart>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: "user",
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

/// `generateContent` response body, reduced to what we read.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_part(&self) -> Option<&ResponsePart> {
        self.candidates.first()?.content.as_ref()?.parts.first()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_declares_json_schema() {
        let request = GenerateRequest::text("hello".into(), schema::phrases());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert!(value["generationConfig"].get("speechConfig").is_none());
    }

    #[test]
    fn speech_request_selects_voice() {
        let request = GenerateRequest::speech("Say clearly in Luganda: Wano".into(), "Kore");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            value["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn first_part_handles_missing_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_part().is_none());

        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"audio/pcm","data":"AAA="}}]}}]}"#)
                .unwrap();
        let part = response.first_part().unwrap();
        assert_eq!(part.inline_data.as_ref().unwrap().data, "AAA=");
        assert!(part.text.is_none());
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let gateway = GeminiGateway::new(GatewayConfig {
            base_url: "http://localhost:9999/".into(),
            api_key: Some("k".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            gateway.endpoint("gemini-3-flash-preview"),
            "http://localhost:9999/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert!(gateway.is_configured());
    }

    #[test]
    fn degrade_returns_empty_on_error() {
        let value = degrade("quiz", Err::<Vec<u8>, _>(GatewayError::EmptyResponse), vec![]);
        assert!(value.is_empty());
        assert_eq!(degrade("speech", Ok("abc".to_string()), String::new()), "abc");
    }
}
