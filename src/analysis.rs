//! Client for the generative-text service that comments on attendance reports.
//!
//! The request path only ever calls [`GeminiClient::analyze`], which folds
//! every failure into a displayable string. [`GeminiClient::generate`] keeps
//! the failure typed for callers that want to branch on it.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use serde_json::json;

pub const PROMPT_PREFIX: &str =
    "أنت مساعد تربوي. حلل التقرير التالي واكتب ملاحظات مختصرة حول الطلاب المتغيبين وتوصيات للمعلم:\n";

pub const MSG_NO_KEY: &str = "لم يتم وضع مفتاح Gemini";
pub const MSG_FAILED: &str = "فشل تحليل Gemini";
pub const MSG_CONNECTION_PREFIX: &str = "حدث خطأ في الاتصال بـ Gemini";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: AnalysisConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Single best-effort attempt; no retry and no timeout.
    pub async fn generate(&self, text: &str) -> Result<String, AnalysisError> {
        let Some(key) = self.api_key() else {
            return Err(AnalysisError::MissingKey);
        };

        let body = json!({
            "contents": [
                { "parts": [ { "text": format!("{}{}", PROMPT_PREFIX, text) } ] }
            ]
        });

        let response = self
            .http
            .post(self.url())
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;
        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AnalysisError::Malformed("missing candidates[0].content.parts[0].text".to_string())
            })
    }

    pub async fn analyze(&self, text: &str) -> String {
        match self.generate(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "report analysis unavailable");
                fallback_message(&e)
            }
        }
    }
}

pub fn fallback_message(err: &AnalysisError) -> String {
    match err {
        AnalysisError::MissingKey => MSG_NO_KEY.to_string(),
        AnalysisError::Status(_) => MSG_FAILED.to_string(),
        AnalysisError::Transport(_) | AnalysisError::Malformed(_) => {
            format!("{}: {}", MSG_CONNECTION_PREFIX, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(AnalysisConfig {
            api_key: key.map(|k| k.to_string()),
            endpoint: endpoint.to_string(),
            model: "gemini-2.0-flash".to_string(),
        })
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let c = client("https://example.test/v1beta/", Some("k"));
        assert_eq!(
            c.url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(client("http://x", Some("   ")).api_key().is_none());
        assert!(client("http://x", None).api_key().is_none());
        assert_eq!(client("http://x", Some("abc")).api_key(), Some("abc"));
    }

    #[test]
    fn fallback_messages_are_distinct() {
        assert_eq!(fallback_message(&AnalysisError::MissingKey), MSG_NO_KEY);
        assert_eq!(fallback_message(&AnalysisError::Status(500)), MSG_FAILED);
        let m = fallback_message(&AnalysisError::Transport("refused".to_string()));
        assert!(m.starts_with(MSG_CONNECTION_PREFIX));
        assert!(m.ends_with("refused"));
    }

    #[tokio::test]
    async fn missing_key_never_touches_network() {
        let c = client("http://127.0.0.1:1", None);
        assert_eq!(c.analyze("Sam حضر 1 من 1 أيام").await, MSG_NO_KEY);
    }
}
