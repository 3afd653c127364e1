use super::{init_client, MockHttpSend};
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use sqsign_core::ErrorKind;
use sqsign_sqs::Queue;
use test_case::test_case;

const SEND_MESSAGE: &str = r#"<SendMessageResponse>
    <SendMessageResult>
        <MD5OfMessageBody>5eb63bbbe01eeed093cb22bb8f5acdc3</MD5OfMessageBody>
        <MessageId>5fea7756-0ea4-451a-a703-a558b933e274</MessageId>
    </SendMessageResult>
    <ResponseMetadata>
        <RequestId>27daac76-34dd-47df-bd01-1f6e873584a0</RequestId>
    </ResponseMetadata>
</SendMessageResponse>"#;

#[tokio::test]
async fn test_send_message_with_delay() -> Result<()> {
    let mock = MockHttpSend::default().respond(StatusCode::OK, SEND_MESSAGE);
    let client = init_client(&mock)?;

    let queue = Queue::from_url("https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue");
    let resp = client.send_message(&queue, "hello world", Some(5)).await?;

    assert_eq!(resp.message.message_id, "5fea7756-0ea4-451a-a703-a558b933e274");
    assert_eq!(resp.message.md5_of_body, "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(resp.message.body, "hello world");
    assert_eq!(resp.message.delay_seconds, Some(5));
    assert_eq!(resp.metadata.request_id, "27daac76-34dd-47df-bd01-1f6e873584a0");

    let req = mock.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(
        req.uri,
        "https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue"
    );
    assert_eq!(
        std::str::from_utf8(&req.body)?,
        "Action=SendMessage&MessageBody=hello+world&DelaySeconds=5&Version=2012-11-05"
    );
    assert_eq!(
        req.headers[CONTENT_TYPE],
        "application/x-www-form-urlencoded; charset=utf-8"
    );
    assert_eq!(req.headers["x-amz-date"], "20150830T123600Z");
    assert_eq!(
        req.headers[AUTHORIZATION],
        "AWS4-HMAC-SHA256 \
         Credential=AKIDEXAMPLE/20150830/us-east-1/sqs/aws4_request, \
         SignedHeaders=content-type;host;x-amz-date, \
         Signature=1da248277d9607b3d072e32037b7ec23519bdbf0dee739f8a166642dc4c409ae"
    );
    Ok(())
}

#[tokio::test]
async fn test_send_message_without_delay() -> Result<()> {
    let mock = MockHttpSend::default().respond(StatusCode::OK, SEND_MESSAGE);
    let client = init_client(&mock)?;

    let queue = Queue::from_url("https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue");
    let resp = client.send_message(&queue, "hello world", None).await?;

    assert_eq!(resp.message.delay_seconds, None);
    assert!(!std::str::from_utf8(&mock.last_request().body)?.contains("DelaySeconds"));
    Ok(())
}

#[test_case(Queue::new("MyQueue"), "hello", None ; "unknown queue url")]
#[test_case(Queue::from_url("https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue"), "", None ; "empty body")]
#[test_case(Queue::from_url("https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue"), "hello", Some(901) ; "delay too long")]
#[tokio::test]
async fn test_send_message_rejected_locally(queue: Queue, body: &str, delay: Option<u32>) {
    let mock = MockHttpSend::default();
    let client = init_client(&mock).expect("client must be built");

    let err = client
        .send_message(&queue, body, delay)
        .await
        .expect_err("must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.requests().is_empty());
}
