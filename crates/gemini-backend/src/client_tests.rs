//! Unit tests for GeminiClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GeminiClient;
    use crate::error::GeminiError;
    use finder_core::{FinderError, REASON_FAILED, ReasonGenerator, TextGenerator};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

    fn mock_generation(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 80, "candidatesTokenCount": 12}
        })
    }

    fn mock_quota_error() -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })
    }

    #[tokio::test]
    async fn test_generate_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "key-1"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [{"text": "Explain this"}]}]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mock_generation("A documentation fix.\n")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        let text = client.generate_content("key-1", "Explain this").unwrap();

        assert_eq!(text, "A documentation fix.\n");
    }

    #[tokio::test]
    async fn test_custom_model_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_generation("A test.")))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri()).with_model("gemini-2.0-flash");
        assert_eq!(client.model(), "gemini-2.0-flash");
        assert_eq!(client.generate_content("key-1", "prompt").unwrap(), "A test.");
    }

    #[tokio::test]
    async fn test_quota_error_detection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_json(mock_quota_error()))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        match client.generate_content("key-1", "prompt").unwrap_err() {
            GeminiError::QuotaExceeded(message) => assert!(message.contains("exhausted")),
            other => panic!("Expected QuotaExceeded, got: {:?}", other),
        }

        let err = client.generate("key-1", "prompt").unwrap_err();
        assert!(err.is_quota_exhausted());
    }

    #[tokio::test]
    async fn test_invalid_key_is_not_quota() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        match client.generate_content("bad", "prompt").unwrap_err() {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.starts_with("API key not valid"));
            }
            other => panic!("Expected Api error, got: {:?}", other),
        }
        assert!(!client.generate("bad", "prompt").unwrap_err().is_quota_exhausted());
    }

    #[tokio::test]
    async fn test_missing_candidates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        assert!(matches!(
            client.generate_content("key-1", "prompt").unwrap_err(),
            GeminiError::NoContent
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        assert!(matches!(
            client.generate_content("key-1", "prompt").unwrap_err(),
            GeminiError::Parse(_)
        ));
        assert!(matches!(
            client.generate("key-1", "prompt").unwrap_err(),
            FinderError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_failover_to_second_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "exhausted-key"))
            .respond_with(ResponseTemplate::new(429).set_body_json(mock_quota_error()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "fresh-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_generation("  A bug fix.  ")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        let keys = vec!["exhausted-key".to_string(), "fresh-key".to_string()];
        let reason = ReasonGenerator::new(&client, &keys).explain("App crashes on start", None);

        assert_eq!(reason, "A bug fix.");
    }

    #[tokio::test]
    async fn test_server_error_aborts_failover() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "key-1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "key-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_generation("unused")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&mock_server.uri());
        let keys = vec!["key-1".to_string(), "key-2".to_string()];
        let reason = ReasonGenerator::new(&client, &keys).explain("Crash", Some("Stack trace"));

        assert_eq!(reason, REASON_FAILED);
    }
}
