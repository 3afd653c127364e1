mod standard;

use http::request::Parts;
use http::Method;
use sqsign_aws_v4::{RequestSigner, StaticCredentialProvider};
use sqsign_core::time::{parse_iso8601, DateTime};
use sqsign_core::{Context, Result, Signer};

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const SESSION_TOKEN: &str = "AQoDYXdzEJr";

/// All signatures below are taken at this instant.
pub fn signing_time() -> DateTime {
    parse_iso8601("20150830T123600Z").expect("signing time must be valid")
}

/// Build a signer over static keys with a pinned signing time.
pub fn init_signer(
    region: &str,
    session_token: Option<&str>,
    builder: impl FnOnce(RequestSigner) -> RequestSigner,
) -> Result<Signer<sqsign_aws_v4::Credential>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut loader = StaticCredentialProvider::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)?;
    if let Some(token) = session_token {
        loader = loader.with_session_token(token)?;
    }
    let signer = builder(RequestSigner::new("sqs", region)?.with_time(signing_time()));

    Ok(Signer::new(Context::new(), loader, signer))
}

pub fn request_parts(method: Method, uri: &str) -> Parts {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}
