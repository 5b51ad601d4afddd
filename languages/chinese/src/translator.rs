use std::time::Duration;

use async_trait::async_trait;
use dushu_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// LibreTranslate-compatible HTTP client
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
    #[serde(default)]
    confidence: f64,
}

impl LibreTranslator {
    /// `api_url` is the full `/translate` endpoint. An empty key is not sent.
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    pub fn with_timeout(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }

    fn key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|key| !key.is_empty())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `/detect` endpoint next to the configured `/translate` one
    pub fn detect_url(&self) -> String {
        let base = self.api_url.trim_end_matches('/');
        match base.strip_suffix("/translate") {
            Some(root) => format!("{}/detect", root),
            None => format!("{}/detect", base),
        }
    }
}

fn check_status(status: StatusCode) -> Result<(), TranslateError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TranslateError::AuthenticationError);
    }

    if !status.is_success() {
        return Err(TranslateError::ApiError(format!("HTTP {}", status)));
    }

    Ok(())
}

/// LibreTranslate answers 400 with `{"error": "... is not supported"}` for
/// languages the instance does not have
fn bad_request(error: Option<String>, from: &str, to: &str) -> TranslateError {
    match error {
        Some(message) if message.to_lowercase().contains("not supported") => {
            TranslateError::UnsupportedLanguagePair {
                from: from.to_string(),
                to: to.to_string(),
            }
        }
        Some(message) => TranslateError::ApiError(message),
        None => TranslateError::ApiError(format!("HTTP {}", StatusCode::BAD_REQUEST)),
    }
}

fn translated_text(response: TranslateResponse) -> Result<String, TranslateError> {
    match (response.translated_text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(TranslateError::ApiError(error)),
        (None, None) => Err(TranslateError::ApiError(
            "No translation in response".to_string(),
        )),
    }
}

fn best_detection(detections: Vec<Detection>) -> Result<LanguageCode, TranslateError> {
    detections
        .into_iter()
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
        .map(|d| d.language)
        .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.key(),
        };

        tracing::debug!("Translating {} chars {} -> {}", text.chars().count(), from, to);

        let response = self.client.post(&self.api_url).json(&request).send().await?;
        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body: TranslateResponse = response.json().await.map_err(|e| {
                TranslateError::ApiError(format!("Failed to parse response: {}", e))
            })?;
            return Err(bad_request(body.error, &from, &to));
        }
        check_status(status)?;

        let body: TranslateResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: translated_text(body)?,
            from,
            to,
            provider: "libretranslate".to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let request = DetectRequest {
            q: text,
            api_key: self.key(),
        };

        let response = self
            .client
            .post(self.detect_url())
            .json(&request)
            .send()
            .await?;
        check_status(response.status())?;

        let detections: Vec<Detection> = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        best_detection(detections)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(url: &str) -> LibreTranslator {
        LibreTranslator::new(String::new(), url.to_string())
    }

    #[test]
    fn test_detect_url() {
        assert_eq!(
            translator("https://libretranslate.de/translate").detect_url(),
            "https://libretranslate.de/detect"
        );
        assert_eq!(
            translator("http://localhost:5000/translate/").detect_url(),
            "http://localhost:5000/detect"
        );
        assert_eq!(
            translator("http://localhost:5000").detect_url(),
            "http://localhost:5000/detect"
        );
    }

    #[test]
    fn test_request_body_omits_empty_key() {
        let request = TranslateRequest {
            q: "你好",
            source: "zh",
            target: "en",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"q": "你好", "source": "zh", "target": "en", "format": "text"})
        );
    }

    #[test]
    fn test_request_body_includes_key() {
        let request = TranslateRequest {
            q: "你好",
            source: "zh",
            target: "en",
            format: "text",
            api_key: Some("secret"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["api_key"], "secret");
    }

    #[test]
    fn test_status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::TOO_MANY_REQUESTS),
            Err(TranslateError::RateLimitExceeded)
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(TranslateError::AuthenticationError)
        ));
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(TranslateError::AuthenticationError)
        ));
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(TranslateError::ApiError(_))
        ));
    }

    #[test]
    fn test_unsupported_language_from_bad_request() {
        let err = bad_request(Some("xx is not supported".to_string()), "xx", "en");
        assert!(matches!(
            err,
            TranslateError::UnsupportedLanguagePair { ref from, ref to } if from == "xx" && to == "en"
        ));
        assert_eq!(err.to_string(), "Unsupported language pair: xx -> en");

        assert!(matches!(
            bad_request(Some("Invalid request: missing q parameter".to_string()), "zh", "en"),
            TranslateError::ApiError(msg) if msg.starts_with("Invalid request")
        ));
        assert!(matches!(
            bad_request(None, "zh", "en"),
            TranslateError::ApiError(_)
        ));
    }

    #[test]
    fn test_response_parsing() {
        let ok: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "Hello"}"#).unwrap();
        assert_eq!(translated_text(ok).unwrap(), "Hello");

        let err: TranslateResponse =
            serde_json::from_str(r#"{"error": "Invalid API key"}"#).unwrap();
        assert!(matches!(
            translated_text(err),
            Err(TranslateError::ApiError(msg)) if msg == "Invalid API key"
        ));

        let empty: TranslateResponse = serde_json::from_str("{}").unwrap();
        assert!(translated_text(empty).is_err());
    }

    #[test]
    fn test_best_detection() {
        let detections: Vec<Detection> = serde_json::from_str(
            r#"[{"language": "ja", "confidence": 12.5}, {"language": "zh", "confidence": 90.0}]"#,
        )
        .unwrap();
        assert_eq!(best_detection(detections).unwrap(), "zh");
        assert!(best_detection(Vec::new()).is_err());
    }

    #[test]
    fn test_metadata() {
        let metadata = translator("http://localhost:5000/translate").metadata();
        assert_eq!(metadata.name, "LibreTranslate");
        assert!(!metadata.requires_api_key);
    }
}
