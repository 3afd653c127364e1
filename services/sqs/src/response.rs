use crate::{Message, Queue};
use serde::Deserialize;

/// Metadata returned with every response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResponseMetadata {
    /// Id of the request, quote it when contacting support.
    pub request_id: String,
    /// Machine usage billed for the request, only reported by legacy endpoints.
    pub box_usage: Option<f64>,
}

/// Response carrying a single queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueResponse {
    /// The queue.
    pub queue: Queue,
    /// Response metadata.
    pub metadata: ResponseMetadata,
}

/// Response carrying a list of queues.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueListResponse {
    /// Queues in the order returned by the service.
    pub queues: Vec<Queue>,
    /// Response metadata.
    pub metadata: ResponseMetadata,
}

/// Response carrying a sent message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageResponse {
    /// The message.
    pub message: Message,
    /// Response metadata.
    pub metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct ListQueuesResponse {
    pub list_queues_result: ListQueuesResult,
    pub response_metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct ListQueuesResult {
    pub queue_url: Vec<String>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct CreateQueueResponse {
    pub create_queue_result: QueueUrlResult,
    pub response_metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct GetQueueUrlResponse {
    pub get_queue_url_result: QueueUrlResult,
    pub response_metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct QueueUrlResult {
    pub queue_url: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct SendMessageResponse {
    pub send_message_result: SendMessageResult,
    pub response_metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct SendMessageResult {
    #[serde(rename = "MD5OfMessageBody")]
    pub md5_of_message_body: String,
    pub message_id: String,
}

impl From<ListQueuesResponse> for QueueListResponse {
    fn from(resp: ListQueuesResponse) -> Self {
        Self {
            queues: resp
                .list_queues_result
                .queue_url
                .iter()
                .map(|url| Queue::from_url(url))
                .collect(),
            metadata: resp.response_metadata,
        }
    }
}

impl From<CreateQueueResponse> for QueueResponse {
    fn from(resp: CreateQueueResponse) -> Self {
        Self {
            queue: Queue::from_url(&resp.create_queue_result.queue_url),
            metadata: resp.response_metadata,
        }
    }
}

impl From<GetQueueUrlResponse> for QueueResponse {
    fn from(resp: GetQueueUrlResponse) -> Self {
        Self {
            queue: Queue::from_url(&resp.get_queue_url_result.queue_url),
            metadata: resp.response_metadata,
        }
    }
}
