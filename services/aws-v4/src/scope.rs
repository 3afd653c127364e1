use crate::constants::SCOPE_TERMINATOR;
use chrono::Datelike;
use sqsign_core::time::{format_date, format_iso8601, DateTime};
use sqsign_core::{Error, Result};
use std::time::Duration;

/// SigningContext pins the region, service and instant of one signing operation.
///
/// Every date string of a signature (the `x-amz-date` value, the scope date and
/// the string to sign) is derived from the same `time`, so the context must be
/// built once per request and never re-sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    region: String,
    service: String,
    time: DateTime,
    expires_in: Option<Duration>,
}

impl SigningContext {
    /// Create a new signing context.
    ///
    /// Region and service are validated here, so signing itself never has to fail
    /// on them.
    pub fn new(region: &str, service: &str, time: DateTime) -> Result<Self> {
        validate_scope_part("region", region)?;
        validate_scope_part("service", service)?;
        if !(0..=9999).contains(&time.year()) {
            return Err(Error::config_invalid(format!(
                "signing time {time} can't be formatted as YYYYMMDD"
            )));
        }

        Ok(Self {
            region: region.to_string(),
            service: service.to_string(),
            time,
            expires_in: None,
        })
    }

    /// Set how long a pre-signed url stays valid, emitted as `X-Amz-Expires`.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Region of this context.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service of this context.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Signing instant of this context.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// Expiry of pre-signed urls, if any.
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    /// Scope date: `20150830`
    pub fn date(&self) -> String {
        format_date(self.time)
    }

    /// Signing timestamp: `20150830T123600Z`
    pub fn timestamp(&self) -> String {
        format_iso8601(self.time)
    }

    /// Scope: `20150830/us-east-1/sqs/aws4_request`
    pub fn scope(&self) -> String {
        format!(
            "{}/{}/{}/{SCOPE_TERMINATOR}",
            self.date(),
            self.region,
            self.service
        )
    }

    /// Credential: `AKIDEXAMPLE/20150830/us-east-1/sqs/aws4_request`
    pub fn credential(&self, access_key_id: &str) -> String {
        format!("{access_key_id}/{}", self.scope())
    }
}

/// Region and service are joined with `/` into the scope and fed into the key
/// derivation, so both must be non-empty and free of separators or whitespace.
pub(crate) fn validate_scope_part(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::config_invalid(format!("{name} is empty")));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.')
    {
        return Err(Error::config_invalid(format!(
            "{name} {value:?} contains invalid characters"
        )));
    }

    Ok(())
}
