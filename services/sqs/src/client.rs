use crate::error::ServiceError;
use crate::response::*;
use crate::{Message, MessageResponse, Queue, QueueListResponse, QueueResponse};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode, Uri};
use log::debug;
use quick_xml::de;
use serde::de::DeserializeOwned;
use sqsign_aws_v4::constants::DEFAULT_CONTENT_TYPE;
use sqsign_aws_v4::{percent_encode, Config, Credential, DefaultCredentialProvider, RequestSigner};
use sqsign_core::{Context, Error, Result, Signer};
use std::sync::Arc;

/// Name used in the credential scope of every request.
pub const SERVICE: &str = "sqs";
/// Query API version sent with every action.
pub const API_VERSION: &str = "2012-11-05";
/// Delay the service accepts at most, in seconds.
pub const MAX_DELAY_SECONDS: u32 = 900;

/// Client for the SQS query API.
///
/// Read-only actions go out as pre-signed `GET` requests. Actions that carry
/// data are form encoded `POST` requests signed with headers.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,
    endpoint: String,
}

impl Client {
    /// Create a client from config.
    ///
    /// The region is required. Credentials are resolved through
    /// [`DefaultCredentialProvider`]: the keys on `config` first, then the
    /// environment of `ctx`.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let region = config
            .region
            .clone()
            .ok_or_else(|| Error::config_invalid("region is required for sqs client"))?;
        let endpoint = build_endpoint(&config, &region)?;

        let signer = Signer::new(
            ctx.clone(),
            DefaultCredentialProvider::new(Arc::new(config)),
            RequestSigner::new(SERVICE, &region)?,
        );

        Ok(Self {
            ctx,
            signer,
            endpoint,
        })
    }

    /// Replace the signer, for example to load credentials from another provider.
    pub fn with_signer(mut self, signer: Signer<Credential>) -> Self {
        self.signer = signer;
        self
    }

    /// Base url requests without a queue are sent to, like `https://sqs.us-east-1.amazonaws.com`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// List queues, optionally only those whose name starts with `prefix`.
    pub async fn list_queues(&self, prefix: Option<&str>) -> Result<QueueListResponse> {
        let mut params = Vec::new();
        if let Some(prefix) = prefix.filter(|v| !v.is_empty()) {
            params.push(("QueueNamePrefix".to_string(), prefix.to_string()));
        }

        let resp: ListQueuesResponse = self.get("ListQueues", params).await?;
        Ok(resp.into())
    }

    /// Look up the url of a queue by name.
    pub async fn get_queue_url(&self, name: &str) -> Result<QueueResponse> {
        validate_queue_name(name)?;

        let params = vec![("QueueName".to_string(), name.to_string())];
        let resp: GetQueueUrlResponse = self.get("GetQueueUrl", params).await?;
        Ok(resp.into())
    }

    /// Create a queue with its attributes.
    ///
    /// Attributes are sent as `Attribute.N.Name` / `Attribute.N.Value` pairs.
    pub async fn create_queue(&self, queue: &Queue) -> Result<QueueResponse> {
        validate_queue_name(&queue.name)?;

        let mut params = vec![("QueueName".to_string(), queue.name.clone())];
        for (idx, (name, value)) in queue.attributes.iter().enumerate() {
            params.push((format!("Attribute.{}.Name", idx + 1), name.clone()));
            params.push((format!("Attribute.{}.Value", idx + 1), value.clone()));
        }

        let resp: CreateQueueResponse = self.post("CreateQueue", None, params).await?;
        let mut resp = QueueResponse::from(resp);
        resp.queue.attributes = queue.attributes.clone();
        Ok(resp)
    }

    /// Send a message to a queue.
    ///
    /// `queue.url` must be known. `delay_seconds` postpones delivery by up to 15 minutes.
    pub async fn send_message(
        &self,
        queue: &Queue,
        body: &str,
        delay_seconds: Option<u32>,
    ) -> Result<MessageResponse> {
        if body.is_empty() {
            return Err(Error::request_invalid("message body must not be empty"));
        }
        if let Some(delay) = delay_seconds {
            if delay > MAX_DELAY_SECONDS {
                return Err(Error::request_invalid(format!(
                    "delay {delay}s exceeds the maximum of {MAX_DELAY_SECONDS}s"
                )));
            }
        }

        let mut params = vec![("MessageBody".to_string(), body.to_string())];
        if let Some(delay) = delay_seconds {
            params.push(("DelaySeconds".to_string(), delay.to_string()));
        }

        let resp: SendMessageResponse = self.post("SendMessage", Some(queue), params).await?;
        Ok(MessageResponse {
            message: Message {
                message_id: resp.send_message_result.message_id,
                body: body.to_string(),
                md5_of_body: resp.send_message_result.md5_of_message_body,
                delay_seconds,
            },
            metadata: resp.response_metadata,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Vec<(String, String)>,
    ) -> Result<T> {
        let query = action_params(action, params)
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method(Method::GET)
            .uri(format!("{}/?{query}", self.endpoint))
            .body(Bytes::new())?;

        self.send(action, req).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        queue: Option<&Queue>,
        params: Vec<(String, String)>,
    ) -> Result<T> {
        let url = match queue {
            None => format!("{}/", self.endpoint),
            Some(queue) => queue_url(queue)?,
        };
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(action_params(action, params))
            .finish();

        let req = Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE)
            .body(Bytes::from(body))?;

        self.send(action, req).await
    }

    async fn send<T: DeserializeOwned>(&self, action: &str, req: Request<Bytes>) -> Result<T> {
        let (mut parts, body) = req.into_parts();
        self.signer
            .sign(&mut parts, &body)
            .await
            .map_err(|e| e.with_context(format!("action: {action}")))?;
        let req = Request::from_parts(parts, body);

        debug!("sending sqs action {action} to {}", req.uri());
        let resp = self
            .ctx
            .http_send_as_string(req)
            .await
            .map_err(|e| e.with_context(format!("action: {action}")))?;
        debug!("sqs action {action} responded with {}", resp.status());

        if resp.status() != StatusCode::OK {
            let err = ServiceError::parse(resp.status(), resp.body());
            return Err(Error::from(err).with_context(format!("action: {action}")));
        }

        de::from_str(resp.body()).map_err(|e| {
            Error::unexpected("failed to decode sqs response")
                .with_source(e)
                .with_context(format!("action: {action}"))
        })
    }
}

/// `Action` leads, `Version` closes, parameters in between keep their order.
fn action_params(action: &str, params: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len() + 2);
    pairs.push(("Action".to_string(), action.to_string()));
    pairs.extend(params);
    pairs.push(("Version".to_string(), API_VERSION.to_string()));
    pairs
}

fn build_endpoint(config: &Config, region: &str) -> Result<String> {
    let scheme = config.scheme.as_deref().unwrap_or("https");
    if scheme != "https" && scheme != "http" {
        return Err(Error::config_invalid(format!(
            "scheme {scheme:?} is not supported, use https or http"
        )));
    }

    let endpoint = match &config.endpoint {
        Some(endpoint) if endpoint.contains("://") => endpoint.trim_end_matches('/').to_string(),
        Some(host) => format!("{scheme}://{}", host.trim_end_matches('/')),
        None => format!("{scheme}://sqs.{region}.amazonaws.com"),
    };

    let uri: Uri = endpoint
        .parse()
        .map_err(|e| Error::config_invalid(format!("endpoint {endpoint:?} is invalid")).with_source(e))?;
    if uri.authority().is_none() {
        return Err(Error::config_invalid(format!(
            "endpoint {endpoint:?} has no host"
        )));
    }

    Ok(endpoint)
}

fn queue_url(queue: &Queue) -> Result<String> {
    if queue.url.is_empty() {
        return Err(Error::request_invalid(format!(
            "url of queue {:?} is unknown, create it or look it up first",
            queue.name
        )));
    }

    Ok(queue.url.clone())
}

fn validate_queue_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::request_invalid("queue name must not be empty"));
    }

    Ok(())
}
