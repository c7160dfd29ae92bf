//! Blocking transport backed by ureq.
//!
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data rather than `Err`, leaving status
//! interpretation to the normalizer in [`crate::client`].

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (request.method, &request.body) {
            (HttpMethod::Get, _) => {
                let mut call = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()
            }
            (HttpMethod::Delete, _) => {
                let mut call = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()
            }
            (HttpMethod::Post, body) => {
                let mut call = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut call = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
