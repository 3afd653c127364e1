//! Canonical request construction.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)

use crate::constants::{AWS_QUERY_ENCODE_SET, SIGNED_HEADERS};
use http::HeaderMap;
use percent_encoding::utf8_percent_encode;
use sqsign_core::hash::hex_sha256;
use sqsign_core::SigningRequest;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Write;

/// Percent encode input with the SigV4 unreserved set.
///
/// Everything except `A-Z a-z 0-9 - . _ ~` is written as `%XX` of its UTF-8
/// bytes with uppercase hex. Unlike form encoding, space becomes `%20` and
/// `+`, `*` and `/` are always escaped.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &AWS_QUERY_ENCODE_SET).to_string()
}

/// Canonical uri: the path as sent, with a leading `/`.
pub fn canonical_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Canonical query string built from decoded query pairs.
///
/// Only the first value of a repeated key is kept. Keys and values are encoded
/// independently, then pairs are sorted byte-wise by encoded key.
pub fn canonical_query(query: &[(String, String)]) -> String {
    let mut seen = HashSet::with_capacity(query.len());
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .filter(|(k, _)| seen.insert(k.as_str()))
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort_unstable_by(|(l, _), (r, _)| l.as_bytes().cmp(r.as_bytes()));

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

/// Names of the headers that take part in the signature, sorted.
pub fn signed_header_names(headers: &HeaderMap) -> Vec<&'static str> {
    SIGNED_HEADERS
        .into_iter()
        .filter(|name| headers.contains_key(*name))
        .collect()
}

/// Canonical headers: one `name:value\n` line per signed header.
///
/// `HeaderMap` names are already lowercase. Values lose leading and trailing
/// space, tab and newline; inner whitespace is kept as is.
///
/// Values are expected to be visible ASCII, [`crate::sign`] rejects the rest
/// before getting here.
pub fn canonical_headers(headers: &HeaderMap) -> String {
    let mut s = String::new();
    for name in signed_header_names(headers) {
        let Some(value) = headers.get(name) else {
            continue;
        };
        let Ok(value) = value.to_str() else {
            continue;
        };
        s.push_str(name);
        s.push(':');
        s.push_str(value.trim_matches(|c| matches!(c, ' ' | '\t' | '\n')));
        s.push('\n');
    }
    s
}

/// Build the canonical request of a signing request and its body.
///
/// ```text
/// GET
/// /
/// Action=ListUsers&Version=2010-05-08
/// content-type:application/x-www-form-urlencoded; charset=utf-8
/// host:iam.amazonaws.com
/// x-amz-date:20150830T123600Z
///
/// content-type;host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
///
/// `req.query` must still hold decoded pairs.
pub fn canonical_request(req: &SigningRequest, body: &[u8]) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Writing into a String never fails.
    let _ = writeln!(f, "{}", req.method.as_str().to_ascii_uppercase());
    let _ = writeln!(f, "{}", canonical_path(&req.path));
    let _ = writeln!(f, "{}", canonical_query(&req.query));
    // Canonical headers already end with a newline.
    let _ = writeln!(f, "{}", canonical_headers(&req.headers));
    let _ = writeln!(f, "{}", signed_header_names(&req.headers).join(";"));
    let _ = write!(f, "{}", hex_sha256(body));

    f
}
