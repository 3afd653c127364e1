use crate::canonical::{canonical_request, percent_encode, signed_header_names};
use crate::constants::*;
use crate::scope::validate_scope_part;
use crate::{Credential, SigningContext};
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};
use log::debug;
use sqsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use sqsign_core::time::{now, DateTime};
use sqsign_core::{Context, Error, Result, SignRequest, SigningMethod, SigningRequest};
use std::time::Duration;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// `GET` requests are pre-signed in the query, every other method is signed
/// with the `Authorization` header. See [`sign`] for the details.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
    expires_in: Option<Duration>,
}

impl RequestSigner {
    /// Create a new signer for AWS V4.
    ///
    /// Returns a config error if service or region can't appear in a credential scope.
    pub fn new(service: &str, region: &str) -> Result<Self> {
        validate_scope_part("service", service)?;
        validate_scope_part("region", region)?;

        Ok(Self {
            service: service.into(),
            region: region.into(),

            time: None,
            expires_in: None,
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Add `X-Amz-Expires` to pre-signed urls.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Sign the request with given credential right away.
    pub fn sign(&self, req: &mut Parts, body: &[u8], cred: &Credential) -> Result<()> {
        // Capture the instant once, everything below derives from it.
        let time = self.time.unwrap_or_else(now);
        let mut ctx = SigningContext::new(&self.region, &self.service, time)?;
        if let Some(expires_in) = self.expires_in {
            ctx = ctx.with_expires_in(expires_in);
        }

        sign(cred, &ctx, req, body)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("no credential loaded for signing"));
        };

        self.sign(req, body, cred)
    }
}

/// Sign request in place.
///
/// - Header mode (every method but `GET`): sets `host`, `x-amz-date`, defaults
///   `content-type`, then sets `Authorization`. The query is left alone.
/// - Query mode (`GET`): sets `host`, adds `X-Amz-Algorithm`, `X-Amz-Credential`,
///   `X-Amz-Date` and `X-Amz-SignedHeaders` before canonicalization, then appends
///   `X-Amz-Signature`. No `Authorization` header is set.
///
/// The body is only hashed. Given a validated [`Credential`] and [`SigningContext`]
/// this fails if `req` has no authority, if its query is not valid percent encoded
/// UTF-8, or if a signed header value is not visible ASCII. On failure `req` keeps
/// its uri and headers.
pub fn sign(
    cred: &Credential,
    ctx: &SigningContext,
    req: &mut Parts,
    body: &[u8],
) -> Result<()> {
    let method = SigningMethod::for_method(&req.method);
    let uri = req.uri.clone();
    let headers = req.headers.clone();

    match sign_parts(cred, ctx, req, body, method) {
        Ok(()) => {
            // Header mode sends the uri exactly as given.
            if method == SigningMethod::Header {
                req.uri = uri;
            }
            Ok(())
        }
        Err(err) => {
            req.uri = uri;
            req.headers = headers;
            Err(err)
        }
    }
}

fn sign_parts(
    cred: &Credential,
    ctx: &SigningContext,
    req: &mut Parts,
    body: &[u8],
    method: SigningMethod,
) -> Result<()> {
    let mut signed_req = SigningRequest::build(req)?;

    canonicalize_header(&mut signed_req, cred, ctx, method)?;
    validate_signed_headers(&signed_req.headers)?;
    canonicalize_query(&mut signed_req, cred, ctx, method);

    // build canonical request and string to sign.
    let creq = canonical_request(&signed_req, body);
    debug!("calculated canonical request: {creq}");
    let string_to_sign = string_to_sign(ctx, &hex_sha256(creq.as_bytes()));
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key =
        generate_signing_key(&cred.secret_access_key, ctx.time(), ctx.region(), ctx.service());
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    match method {
        SigningMethod::Query => {
            // Canonicalization reads decoded pairs, the uri needs them encoded.
            signed_req.query = signed_req
                .query
                .iter()
                .map(|(k, v)| (percent_encode(k), percent_encode(v)))
                .collect();
            signed_req.query_push(X_AMZ_SIGNATURE, signature);
        }
        SigningMethod::Header => {
            signed_req.query.clear();

            let mut authorization = HeaderValue::from_str(&format!(
                "{ALGORITHM} Credential={}, SignedHeaders={}, Signature={signature}",
                ctx.credential(&cred.access_key_id),
                signed_header_names(&signed_req.headers).join(";"),
            ))
            .map_err(|e| {
                Error::request_invalid("failed to create authorization header").with_source(e)
            })?;
            authorization.set_sensitive(true);

            signed_req.headers.insert(AUTHORIZATION, authorization);
        }
    }

    // Apply to the request.
    signed_req.apply(req)
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/us-east-1/iam/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(ctx: &SigningContext, hashed_canonical_request: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{}\n{hashed_canonical_request}",
        ctx.timestamp(),
        ctx.scope()
    )
}

/// Derive the signing key of the given date, region and service.
///
/// The raw 32 bytes are returned, callers use them as HMAC key.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(
        secret.as_bytes(),
        sqsign_core::time::format_date(time).as_bytes(),
    );
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes())
}

fn canonicalize_header(
    req: &mut SigningRequest,
    cred: &Credential,
    ctx: &SigningContext,
    method: SigningMethod,
) -> Result<()> {
    // Host must reflect the real target, overwrite whatever the caller set.
    let host = HeaderValue::from_str(req.authority.as_str())
        .map_err(|e| Error::request_invalid("authority is not a valid host header").with_source(e))?;
    req.headers.insert(HOST, host);

    if method == SigningMethod::Query {
        return Ok(());
    }

    req.headers.insert(
        X_AMZ_DATE,
        HeaderValue::from_str(&ctx.timestamp())
            .map_err(|e| Error::unexpected("failed to create date header").with_source(e))?,
    );

    // Content type must be settled before canonicalization, it's a signed header.
    if !req.headers.contains_key(CONTENT_TYPE) {
        req.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    }

    if let Some(token) = &cred.session_token {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            Error::credential_invalid("session token is not a valid header value").with_source(e)
        })?;
        // Keep the token out of debug output.
        value.set_sensitive(true);

        req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }

    Ok(())
}

/// Signed header values must be visible ASCII to be canonicalized as text.
fn validate_signed_headers(headers: &HeaderMap) -> Result<()> {
    for name in signed_header_names(headers) {
        for value in headers.get_all(name) {
            value.to_str().map_err(|e| {
                Error::request_invalid(format!("value of header {name} is not visible ascii"))
                    .with_source(e)
            })?;
        }
    }

    Ok(())
}

fn canonicalize_query(
    req: &mut SigningRequest,
    cred: &Credential,
    ctx: &SigningContext,
    method: SigningMethod,
) {
    if method == SigningMethod::Header {
        return;
    }

    let signed_headers = signed_header_names(&req.headers).join(";");

    // A signature left over from an earlier signing must not be signed itself.
    req.query.retain(|(k, _)| k != X_AMZ_SIGNATURE);
    req.query_set(X_AMZ_ALGORITHM, ALGORITHM.to_string());
    req.query_set(X_AMZ_CREDENTIAL, ctx.credential(&cred.access_key_id));
    req.query_set(X_AMZ_DATE_QUERY, ctx.timestamp());
    if let Some(expires_in) = ctx.expires_in() {
        req.query_set(X_AMZ_EXPIRES, expires_in.as_secs().to_string());
    }
    req.query_set(X_AMZ_SIGNED_HEADERS, signed_headers);
    if let Some(token) = &cred.session_token {
        req.query_set(X_AMZ_SECURITY_TOKEN_QUERY, token.clone());
    }
}
