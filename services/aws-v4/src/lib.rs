//! AWS SigV4 signer for query-protocol services.
//!
//! This crate signs HTTP requests with AWS Signature Version 4, producing either
//! an `Authorization` header or a pre-signed query string.
//!
//! ## Signing modes
//!
//! - `GET` requests are signed in the query: `X-Amz-Algorithm`,
//!   `X-Amz-Credential`, `X-Amz-Date`, `X-Amz-SignedHeaders` and finally
//!   `X-Amz-Signature` are added to the url.
//! - Every other method is signed with headers: `x-amz-date`, a default
//!   `content-type` and `Authorization` are set.
//!
//! Only `content-type`, `host` and `x-amz-date` take part in the signature.
//!
//! ## Example
//!
//! ```no_run
//! use sqsign_aws_v4::{DefaultCredentialProvider, RequestSigner};
//! use sqsign_core::{Context, OsEnv, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::default(),
//!     RequestSigner::new("sqs", "us-east-1")?,
//! );
//!
//! let body = b"Action=ListQueues&Version=2012-11-05";
//! let mut parts = http::Request::post("https://sqs.us-east-1.amazonaws.com/")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pure functions
//!
//! The building blocks are exposed for callers that manage time and credentials
//! themselves: [`canonical_request`], [`string_to_sign`], [`generate_signing_key`]
//! and [`sign`].

pub mod constants;

mod canonical;
pub use canonical::canonical_headers;
pub use canonical::canonical_path;
pub use canonical::canonical_query;
pub use canonical::canonical_request;
pub use canonical::percent_encode;
pub use canonical::signed_header_names;

mod config;
pub use config::region;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod scope;
pub use scope::SigningContext;

mod sign_request;
pub use sign_request::generate_signing_key;
pub use sign_request::sign;
pub use sign_request::string_to_sign;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
