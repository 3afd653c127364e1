//! Minimal Amazon SQS client built on `sqsign-aws-v4`.
//!
//! Supported actions: `ListQueues`, `GetQueueUrl`, `CreateQueue` and `SendMessage`.
//!
//! ```no_run
//! use sqsign_aws_v4::{region, Config};
//! use sqsign_core::{Context, OsEnv, Result};
//! use sqsign_http_send_reqwest::ReqwestHttpSend;
//! use sqsign_sqs::{Client, Queue};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new()
//!     .with_env(OsEnv)
//!     .with_http_send(ReqwestHttpSend::default());
//! let config = Config {
//!     region: Some(region::VIRGINIA.to_string()),
//!     ..Default::default()
//! }
//! .from_env(&ctx);
//!
//! let client = Client::new(ctx, config)?;
//! let created = client.create_queue(&Queue::new("orders")).await?;
//! client.send_message(&created.queue, "hello", None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Failed responses are returned as [`sqsign_core::Error`] whose source is a
//! [`ServiceError`]:
//!
//! ```
//! use sqsign_core::Error;
//! use sqsign_sqs::ServiceError;
//!
//! fn service_code(err: &Error) -> Option<&str> {
//!     err.downcast_source::<ServiceError>().map(|e| e.code.as_str())
//! }
//! ```

mod client;
pub use client::Client;
pub use client::API_VERSION;
pub use client::MAX_DELAY_SECONDS;
pub use client::SERVICE;

mod error;
pub use error::ServiceError;

mod queue;
pub use queue::Message;
pub use queue::Queue;

mod response;
pub use response::MessageResponse;
pub use response::QueueListResponse;
pub use response::QueueResponse;
pub use response::ResponseMetadata;
