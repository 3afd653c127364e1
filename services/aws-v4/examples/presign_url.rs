//! Example signing the same action in both modes.
//!
//! Credentials come from the environment, falling back to the documentation keys.

use sqsign_aws_v4::{
    EnvCredentialProvider, ProvideCredentialChain, RequestSigner, StaticCredentialProvider,
};
use sqsign_core::{Context, OsEnv, Signer};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Debug level shows the canonical request and string to sign.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_env(OsEnv);
    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        )?);
    let signer = Signer::new(
        ctx,
        chain,
        RequestSigner::new("sqs", "us-east-1")?.with_expires_in(Duration::from_secs(300)),
    );

    let mut get = http::Request::get("https://sqs.us-east-1.amazonaws.com/?Action=ListQueues")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut get, b"").await?;
    println!("pre-signed url:\n  {}\n", get.uri);

    let body = b"Action=ListQueues&Version=2012-11-05";
    let mut post = http::Request::post("https://sqs.us-east-1.amazonaws.com/")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut post, body).await?;
    println!("signed headers:");
    for (name, value) in &post.headers {
        // Sensitive values print as `Sensitive`.
        println!("  {name}: {value:?}");
    }

    Ok(())
}
