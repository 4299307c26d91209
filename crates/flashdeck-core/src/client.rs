use serde::Serialize;
use serde_json::Value;

use crate::{ClientError, Concept};

/// Request body for the analyze endpoint.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    youtube_link: &'a str,
}

/// Client for the remote concept-extraction service.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze_video", self.endpoint.trim_end_matches('/'))
    }

    /// Submit a video link and return the extracted key concepts.
    ///
    /// The link text is sent as-is; the service decides what to make of it.
    /// No timeout is set beyond reqwest defaults — the call suspends until
    /// the transport resolves or rejects it.
    pub async fn analyze(&self, link: &str) -> Result<Vec<Concept>, ClientError> {
        let url = self.analyze_url();
        tracing::debug!(%url, link_len = link.len(), "submitting link for analysis");

        let resp = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { youtube_link: link })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: Value = resp.json().await?;
        parse_key_concepts(&body)
    }
}

/// Structural schema check for the analyzer response.
///
/// The body must be an object whose `key_concepts` field is an array, and
/// every element an object with string `term` and `definition` fields. Any
/// violation rejects the whole response as malformed.
pub fn parse_key_concepts(body: &Value) -> Result<Vec<Concept>, ClientError> {
    let Some(list) = body.get("key_concepts") else {
        return Err(ClientError::Malformed(
            "response has no key_concepts field".into(),
        ));
    };
    let Some(items) = list.as_array() else {
        return Err(ClientError::Malformed(
            "key_concepts is not an array".into(),
        ));
    };

    let mut concepts = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let term = item.get("term").and_then(Value::as_str);
        let definition = item.get("definition").and_then(Value::as_str);
        match (term, definition) {
            (Some(term), Some(definition)) => concepts.push(Concept {
                term: term.to_string(),
                definition: definition.to_string(),
            }),
            _ => {
                return Err(ClientError::Malformed(format!(
                    "key_concepts[{i}] is missing a string term or definition"
                )));
            }
        }
    }
    Ok(concepts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_response() {
        let body = json!({
            "key_concepts": [
                {"term": "A", "definition": "1"},
                {"term": "B", "definition": "2"},
            ]
        });
        let concepts = parse_key_concepts(&body).unwrap();
        assert_eq!(concepts.len(), 2);
        assert_eq!(concepts[0].term, "A");
        assert_eq!(concepts[0].definition, "1");
        assert_eq!(concepts[1].term, "B");
        assert_eq!(concepts[1].definition, "2");
    }

    #[test]
    fn test_parse_empty_list_is_valid() {
        let body = json!({"key_concepts": []});
        assert!(parse_key_concepts(&body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_strings_are_valid() {
        // Best-effort rendering: empty fields pass the schema check.
        let body = json!({"key_concepts": [{"term": "", "definition": ""}]});
        let concepts = parse_key_concepts(&body).unwrap();
        assert_eq!(concepts[0].term, "");
    }

    #[test]
    fn test_parse_missing_field() {
        let body = json!({"unexpected": true});
        let err = parse_key_concepts(&body).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_parse_non_array_field() {
        let body = json!({"key_concepts": "lots of them"});
        assert!(matches!(
            parse_key_concepts(&body),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_element_missing_term() {
        let body = json!({"key_concepts": [{"definition": "only"}]});
        assert!(matches!(
            parse_key_concepts(&body),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_element_non_string_definition() {
        let body = json!({"key_concepts": [{"term": "A", "definition": 7}]});
        assert!(matches!(
            parse_key_concepts(&body),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_one_bad_element_rejects_all() {
        let body = json!({
            "key_concepts": [
                {"term": "A", "definition": "1"},
                {"term": "B"},
            ]
        });
        assert!(parse_key_concepts(&body).is_err());
    }

    #[test]
    fn test_analyze_url_trims_trailing_slash() {
        let client = AnalyzerClient::new("http://localhost:8000/");
        assert_eq!(client.analyze_url(), "http://localhost:8000/analyze_video");
    }

    #[test]
    fn test_analyze_url_default_endpoint() {
        let client = AnalyzerClient::new(crate::DEFAULT_ENDPOINT);
        assert_eq!(client.analyze_url(), "http://localhost:8000/analyze_video");
    }
}
