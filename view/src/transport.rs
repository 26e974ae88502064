//! ureq-backed `Transport`.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, RequestError, Transport};
use tracing::trace;

/// Blocking HTTP transport. Statuses are returned as data so the core client
/// decides what counts as failure.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
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

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.path), req).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&req.path), req).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&req.path), req);
                match req.body.as_deref() {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        trace!(status, body_len = body.len(), "read response body");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Copy the headers chosen by the core onto the outgoing request.
fn with_headers<B>(builder: ureq::RequestBuilder<B>, req: &HttpRequest) -> ureq::RequestBuilder<B> {
    req.headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name.as_str(), value.as_str()))
}
