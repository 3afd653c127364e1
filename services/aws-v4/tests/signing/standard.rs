use super::{init_signer, request_parts, SESSION_TOKEN};
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::{HeaderValue, Method};
use pretty_assertions::assert_eq;
use sqsign_aws_v4::constants::{DEFAULT_CONTENT_TYPE, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};

#[tokio::test]
async fn test_send_message_with_session_token() -> Result<()> {
    let signer = init_signer("us-east-1", Some(SESSION_TOKEN), |s| s)?;

    let body = b"Action=SendMessage&MessageBody=hello%20world&Version=2012-11-05";
    let mut req = request_parts(
        Method::POST,
        "https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue",
    );
    signer.sign(&mut req, body).await?;

    assert_eq!(
        req.uri.to_string(),
        "https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue"
    );
    assert_eq!(req.headers[HOST], "sqs.us-east-1.amazonaws.com");
    assert_eq!(req.headers[X_AMZ_DATE], "20150830T123600Z");
    assert_eq!(req.headers[CONTENT_TYPE], DEFAULT_CONTENT_TYPE);
    assert_eq!(req.headers[X_AMZ_SECURITY_TOKEN], SESSION_TOKEN);
    assert!(req.headers[X_AMZ_SECURITY_TOKEN].is_sensitive());
    assert_eq!(
        req.headers[AUTHORIZATION],
        "AWS4-HMAC-SHA256 \
         Credential=AKIDEXAMPLE/20150830/us-east-1/sqs/aws4_request, \
         SignedHeaders=content-type;host;x-amz-date, \
         Signature=9bb7146c1b7e3c8b5ca1dd5160561770ed8d7e7d03139a00944a2299a3318b8b"
    );
    Ok(())
}

#[tokio::test]
async fn test_custom_endpoint_keeps_port_in_host() -> Result<()> {
    let signer = init_signer("elasticmq", None, |s| s)?;

    let mut req = request_parts(Method::POST, "http://localhost:9324/000000000000/q1");
    signer.sign(&mut req, b"Action=GetQueueAttributes").await?;

    assert_eq!(req.uri.scheme_str(), Some("http"));
    assert_eq!(req.headers[HOST], "localhost:9324");
    assert!(req.headers[AUTHORIZATION].to_str()?.ends_with(
        "Signature=4047b01a40a807b947189cdd13bdd8cc966726984b35cdd95a68a8a35c00093a"
    ));
    Ok(())
}

#[tokio::test]
async fn test_resign_overwrites_stale_headers() -> Result<()> {
    let signer = init_signer("us-east-1", Some(SESSION_TOKEN), |s| s)?;
    let body = b"Action=SendMessage&MessageBody=hello%20world&Version=2012-11-05";

    let mut req = request_parts(
        Method::POST,
        "https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue",
    );
    req.headers
        .insert(X_AMZ_DATE, HeaderValue::from_static("20000101T000000Z"));
    req.headers
        .insert(HOST, HeaderValue::from_static("proxy.internal"));
    req.headers
        .insert(AUTHORIZATION, HeaderValue::from_static("stale"));
    signer.sign(&mut req, body).await?;

    assert_eq!(req.headers[X_AMZ_DATE], "20150830T123600Z");
    assert_eq!(req.headers[HOST], "sqs.us-east-1.amazonaws.com");
    assert_eq!(req.headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert!(req.headers[AUTHORIZATION]
        .to_str()?
        .ends_with("Signature=9bb7146c1b7e3c8b5ca1dd5160561770ed8d7e7d03139a00944a2299a3318b8b"));
    Ok(())
}

#[tokio::test]
async fn test_unsigned_headers_do_not_change_signature() -> Result<()> {
    let signer = init_signer("us-east-1", None, |s| s)?;
    let body = b"Action=ListQueues";

    let mut plain = request_parts(Method::POST, "https://sqs.us-east-1.amazonaws.com/");
    signer.sign(&mut plain, body).await?;

    let mut noisy = request_parts(Method::POST, "https://sqs.us-east-1.amazonaws.com/");
    noisy
        .headers
        .insert("user-agent", HeaderValue::from_static("sqsign-test"));
    noisy
        .headers
        .insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
    signer.sign(&mut noisy, body).await?;

    assert_eq!(plain.headers[AUTHORIZATION], noisy.headers[AUTHORIZATION]);
    Ok(())
}

#[tokio::test]
async fn test_body_changes_signature() -> Result<()> {
    let signer = init_signer("us-east-1", None, |s| s)?;

    let mut first = request_parts(Method::POST, "https://sqs.us-east-1.amazonaws.com/");
    signer.sign(&mut first, b"Action=ListQueues").await?;
    let mut second = request_parts(Method::POST, "https://sqs.us-east-1.amazonaws.com/");
    signer.sign(&mut second, b"Action=ListQueues ").await?;

    assert_ne!(first.headers[AUTHORIZATION], second.headers[AUTHORIZATION]);
    Ok(())
}
