mod errors;
mod message;
mod queue;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use sqsign_aws_v4::{Config, Credential, RequestSigner, StaticCredentialProvider};
use sqsign_core::time::parse_iso8601;
use sqsign_core::{Context, HttpSend, Result, Signer};
use sqsign_sqs::Client;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// Request as it reached the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// MockHttpSend records every request and replies with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpSend {
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("at least one request must be sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((StatusCode::OK, String::new()));
        Ok(http::Response::builder()
            .status(status)
            .body(Bytes::from(body))?)
    }
}

/// Build a client over the mock transport with keys and signing time pinned.
pub fn init_client(mock: &MockHttpSend) -> Result<Client> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    let config = Config {
        region: Some("us-east-1".to_string()),
        ..Default::default()
    };
    let signer: Signer<Credential> = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)?,
        RequestSigner::new("sqs", "us-east-1")?
            .with_time(parse_iso8601("20150830T123600Z")?),
    );

    Ok(Client::new(ctx, config)?.with_signer(signer))
}
