//! Request normalizer and typed task operations.
//!
//! # Design
//! `ApiClient` holds an immutable [`Config`] and a [`Transport`], and carries
//! no other state between calls. Every operation funnels through
//! [`ApiClient::request`], which resolves the URL, merges headers, executes
//! exactly one transport call, and classifies the response into parsed JSON,
//! `None` (204), or an [`ApiError`]. The typed task methods are thin serde
//! wrappers over `request`.

use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
use crate::types::{CreateTask, Task};

/// Client for the tasks API.
///
/// Generic over the transport so tests can substitute a recording double;
/// production code pairs it with [`UreqTransport`](crate::UreqTransport).
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    config: Config,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issue one HTTP call and normalize its outcome.
    ///
    /// The target URL is the plain concatenation of the configured base URL
    /// and `path`; no normalization or encoding is applied. A
    /// `Content-Type: application/json` header is always sent, and a
    /// caller-supplied `Content-Type` is deliberately ignored rather than
    /// allowed to override it.
    ///
    /// Outcomes:
    /// - 204 → `Ok(None)`, the body is never parsed
    /// - other 2xx → `Ok(Some(value))` with the body parsed as JSON
    /// - non-2xx → `Err(ApiError::Http)` carrying the body's `detail` field
    ///   when present, otherwise the generic `"HTTP <status>"` message
    pub fn request(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.config.base_url, path),
            headers: merge_headers(options.headers),
            body: options.body,
        };
        let response = self.transport.execute(&request)?;

        if response.is_no_content() {
            return Ok(None);
        }
        if response.is_success() {
            let value = serde_json::from_str(&response.body)
                .map_err(|e| ApiError::Deserialization(e.to_string()))?;
            return Ok(Some(value));
        }
        Err(error_from(&response))
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let value = self.expect_body(self.request("/tasks", RequestOptions::default())?)?;
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn create_task(&self, input: &CreateTask) -> Result<Task, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let options = RequestOptions {
            method: HttpMethod::Post,
            body: Some(body),
            headers: Vec::new(),
        };
        let value = self.expect_body(self.request("/tasks", options)?)?;
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn get_task(&self, id: Uuid) -> Result<Task, ApiError> {
        let path = format!("/tasks/{id}");
        let value = self.expect_body(self.request(&path, RequestOptions::default())?)?;
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn delete_task(&self, id: Uuid) -> Result<(), ApiError> {
        let path = format!("/tasks/{id}");
        let options = RequestOptions {
            method: HttpMethod::Delete,
            ..RequestOptions::default()
        };
        self.request(&path, options)?;
        Ok(())
    }

    fn expect_body(&self, outcome: Option<Value>) -> Result<Value, ApiError> {
        outcome.ok_or_else(|| ApiError::Deserialization("expected a response body".to_string()))
    }
}

/// Merge caller headers with the forced JSON default.
///
/// A caller-supplied `Content-Type` (any casing) is dropped; the default is
/// always present on the outgoing request.
fn merge_headers(caller: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = caller
        .into_iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
        .collect();
    headers.push(("Content-Type".to_string(), "application/json".to_string()));
    headers
}

/// Build the error for a non-2xx response: the body's `detail` field when it
/// parses as JSON and carries one, otherwise `"HTTP <status>"`.
fn error_from(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("detail").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    ApiError::Http {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::json;

    use super::*;

    /// Transport double: records every outgoing request and answers from a
    /// queue of canned responses.
    struct MockTransport {
        calls: RefCell<Vec<HttpRequest>>,
        responses: RefCell<VecDeque<HttpResponse>>,
    }

    impl MockTransport {
        fn new(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                responses: RefCell::new(responses.into_iter().collect()),
            }
        }

        fn single(status: u16, body: &str) -> Self {
            Self::new([HttpResponse {
                status,
                body: body.to_string(),
            }])
        }

        fn calls(&self) -> Vec<HttpRequest> {
            self.calls.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.borrow_mut().push(request.clone());
            Ok(self
                .responses
                .borrow_mut()
                .pop_front()
                .expect("mock transport ran out of responses"))
        }
    }

    fn client(transport: &MockTransport) -> ApiClient<&MockTransport> {
        ApiClient::new(Config::new("http://api.test"), transport)
    }

    #[test]
    fn request_returns_parsed_json_when_response_ok() {
        let transport = MockTransport::single(200, r#"{"hello":"world"}"#);
        let options = RequestOptions {
            method: HttpMethod::Put,
            body: Some(r#"{"a":1}"#.to_string()),
            headers: Vec::new(),
        };

        let outcome = client(&transport).request("/test", options).unwrap();

        assert_eq!(outcome, Some(json!({"hello": "world"})));
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "http://api.test/test");
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(calls[0].body.as_deref(), Some(r#"{"a":1}"#));
        assert!(calls[0]
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
    }

    #[test]
    fn request_returns_none_on_204_without_parsing_body() {
        // body present but never parsed; invalid JSON must not matter
        let transport = MockTransport::single(204, "not json");
        let outcome = client(&transport)
            .request("/no-content", RequestOptions::default())
            .unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn request_fails_with_detail_from_error_body() {
        let transport = MockTransport::single(400, r#"{"detail":"Bad request"}"#);
        let err = client(&transport)
            .request("/bad", RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad request");
        assert!(matches!(err, ApiError::Http { status: 400, .. }));
    }

    #[test]
    fn request_fails_with_generic_message_when_error_body_unparsable() {
        let transport = MockTransport::single(500, "invalid json");
        let err = client(&transport)
            .request("/err", RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn request_fails_with_generic_message_when_detail_absent() {
        let transport = MockTransport::single(400, r#"{"error":"nope"}"#);
        let err = client(&transport)
            .request("/bad", RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400");
    }

    #[test]
    fn identical_calls_issue_independent_requests() {
        let transport = MockTransport::new([
            HttpResponse {
                status: 200,
                body: r#"{"n":1}"#.to_string(),
            },
            HttpResponse {
                status: 200,
                body: r#"{"n":1}"#.to_string(),
            },
        ]);
        let client = client(&transport);

        let first = client.request("/same", RequestOptions::default()).unwrap();
        let second = client.request("/same", RequestOptions::default()).unwrap();

        assert_eq!(first, second);
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].url, calls[1].url);
    }

    #[test]
    fn url_is_plain_concatenation_of_base_and_path() {
        let transport = MockTransport::single(200, "{}");
        client(&transport)
            .request("/test", RequestOptions::default())
            .unwrap();
        assert_eq!(transport.calls()[0].url, "http://api.test/test");
    }

    #[test]
    fn caller_headers_are_kept_but_content_type_is_forced() {
        let transport = MockTransport::single(200, "{}");
        let options = RequestOptions {
            headers: vec![
                ("X-Request-Id".to_string(), "abc123".to_string()),
                ("content-type".to_string(), "text/plain".to_string()),
            ],
            ..RequestOptions::default()
        };

        client(&transport).request("/test", options).unwrap();

        let headers = &transport.calls()[0].headers;
        assert!(headers.contains(&("X-Request-Id".to_string(), "abc123".to_string())));
        assert!(!headers
            .iter()
            .any(|(_, value)| value == "text/plain"));
        assert!(headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
    }

    #[test]
    fn default_method_is_get_with_no_body() {
        let transport = MockTransport::single(200, "[]");
        client(&transport)
            .request("/tasks", RequestOptions::default())
            .unwrap();
        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert!(calls[0].body.is_none());
    }

    #[test]
    fn request_propagates_parse_error_on_invalid_success_body() {
        let transport = MockTransport::single(200, "not json");
        let err = client(&transport)
            .request("/test", RequestOptions::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn list_tasks_deserializes_the_array() {
        let transport = MockTransport::single(
            200,
            r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"Test","description":""}]"#,
        );
        let tasks = client(&transport).list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Test");
        assert_eq!(transport.calls()[0].url, "http://api.test/tasks");
    }

    #[test]
    fn create_task_posts_json_payload() {
        let transport = MockTransport::single(
            201,
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"New","description":"d"}"#,
        );
        let input = CreateTask {
            title: "New".to_string(),
            description: "d".to_string(),
        };

        let task = client(&transport).create_task(&input).unwrap();

        assert_eq!(task.title, "New");
        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        let body: Value = serde_json::from_str(calls[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "New");
        assert_eq!(body["description"], "d");
    }

    #[test]
    fn delete_task_accepts_204() {
        let transport = MockTransport::single(204, "");
        assert!(client(&transport).delete_task(Uuid::nil()).is_ok());
        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Delete);
        assert_eq!(
            calls[0].url,
            "http://api.test/tasks/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn get_task_surfaces_not_found_detail() {
        let transport = MockTransport::single(404, r#"{"detail":"Task not found"}"#);
        let err = client(&transport).get_task(Uuid::nil()).unwrap_err();
        assert_eq!(err.to_string(), "Task not found");
    }
}
