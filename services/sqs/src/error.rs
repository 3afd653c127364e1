use http::StatusCode;
use log::debug;
use quick_xml::de;
use serde::Deserialize;
use sqsign_core::{Error, ErrorKind};

/// Error codes returned when the service refuses the signature or the credential behind it.
const AUTHENTICATION_CODES: &[&str] = &[
    "SignatureDoesNotMatch",
    "IncompleteSignature",
    "InvalidClientTokenId",
    "MissingAuthenticationToken",
    "AccessDenied",
    "ExpiredToken",
    "RequestExpired",
    "InvalidSecurity",
];

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "RequestThrottled",
    "AWS.SimpleQueueService.RequestThrottled",
];

/// ServiceError is an error response returned by the queue service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{status} {code}] {request_id}: {message}")]
pub struct ServiceError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Error code such as `SignatureDoesNotMatch`.
    pub code: String,
    /// Human readable message, the status reason when the body has none.
    pub message: String,
    /// Id of the failed request.
    pub request_id: String,
}

impl ServiceError {
    /// Parse an error response body.
    ///
    /// Bodies that are not valid XML still produce an error carrying the status.
    pub fn parse(status: StatusCode, body: &str) -> Self {
        let resp: ErrorResponse = de::from_str(body).unwrap_or_else(|e| {
            debug!("error response is not valid xml: {e}");
            ErrorResponse::default()
        });

        let detail = resp
            .error
            .or_else(|| resp.errors.error.into_iter().next())
            .unwrap_or_default();
        let message = if detail.message.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            detail.message
        };

        Self {
            status,
            code: detail.code,
            message,
            request_id: resp.request_id,
        }
    }

    /// Whether the service rejected the request authentication.
    pub fn is_authentication_error(&self) -> bool {
        AUTHENTICATION_CODES.contains(&self.code.as_str())
            || self.status == StatusCode::UNAUTHORIZED
            || self.status == StatusCode::FORBIDDEN
    }

    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        self.status.is_server_error()
            || self.status == StatusCode::TOO_MANY_REQUESTS
            || THROTTLING_CODES.contains(&self.code.as_str())
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        let kind = if err.is_authentication_error() {
            ErrorKind::AuthenticationFailed
        } else {
            ErrorKind::Unexpected
        };
        let retryable = err.is_retryable();

        Error::new(kind, format!("service responded with error: {err}"))
            .with_source(err)
            .set_retryable(retryable)
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorResponse {
    error: Option<ErrorDetail>,
    errors: ErrorList,
    request_id: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorList {
    error: Vec<ErrorDetail>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorDetail {
    code: String,
    message: String,
}
