use super::{init_client, MockHttpSend};
use anyhow::Result;
use http::StatusCode;
use sqsign_aws_v4::Config;
use sqsign_core::{Context, ErrorKind, StaticEnv};
use sqsign_sqs::{Client, ServiceError};

#[tokio::test]
async fn test_signature_mismatch_is_authentication_failure() -> Result<()> {
    let mock = MockHttpSend::default().respond(
        StatusCode::FORBIDDEN,
        r#"<ErrorResponse>
    <Error>
        <Type>Sender</Type>
        <Code>SignatureDoesNotMatch</Code>
        <Message>The request signature we calculated does not match the signature you provided.</Message>
    </Error>
    <RequestId>42d59b56-7407-4c4a-be0f-4c88daeea257</RequestId>
</ErrorResponse>"#,
    );
    let client = init_client(&mock)?;

    let err = client.list_queues(None).await.expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    assert!(!err.is_retryable());
    assert!(err.context().iter().any(|c| c == "action: ListQueues"));

    let service = err
        .downcast_source::<ServiceError>()
        .expect("source must be a service error");
    assert_eq!(service.status, StatusCode::FORBIDDEN);
    assert_eq!(service.code, "SignatureDoesNotMatch");
    assert_eq!(service.request_id, "42d59b56-7407-4c4a-be0f-4c88daeea257");
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_retryable() -> Result<()> {
    let mock = MockHttpSend::default().respond(StatusCode::SERVICE_UNAVAILABLE, "");
    let client = init_client(&mock)?;

    let err = client.get_queue_url("orders").await.expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.is_retryable());
    let service = err
        .downcast_source::<ServiceError>()
        .expect("source must be a service error");
    assert_eq!(service.message, "Service Unavailable");
    Ok(())
}

#[tokio::test]
async fn test_malformed_success_body() -> Result<()> {
    let mock = MockHttpSend::default().respond(StatusCode::OK, "<GetQueueUrlResponse><GetQueueUrlResult>");
    let client = init_client(&mock)?;

    let err = client.get_queue_url("orders").await.expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.downcast_source::<ServiceError>().is_none());
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_is_not_sent() -> Result<()> {
    let mock = MockHttpSend::default();
    let ctx = Context::new()
        .with_env(StaticEnv::default())
        .with_http_send(mock.clone());
    let config = Config {
        region: Some("us-east-1".to_string()),
        ..Default::default()
    };
    let client = Client::new(ctx, config)?;

    let err = client.list_queues(None).await.expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.context().iter().any(|c| c == "action: ListQueues"));
    assert!(mock.requests().is_empty());
    Ok(())
}
