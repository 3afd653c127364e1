use anyhow::Result;
use sqsign_aws_v4::{region, Config};
use sqsign_core::{Context, OsEnv};
use sqsign_http_send_reqwest::ReqwestHttpSend;
use sqsign_sqs::Client;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();
    let _ = dotenv::dotenv();

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::default().from_env(&ctx);
    let config = Config {
        region: config.region.or_else(|| Some(region::VIRGINIA.to_string())),
        ..config
    };

    let client = Client::new(ctx, config)?;
    let prefix = env::args().nth(1);

    println!("Listing queues from {}", client.endpoint());
    match client.list_queues(prefix.as_deref()).await {
        Ok(resp) => {
            for queue in &resp.queues {
                println!("  {} -> {}", queue.name, queue.url);
            }
            println!("request id: {}", resp.metadata.request_id);
        }
        Err(e) => {
            eprintln!("Failed to list queues: {e}");
            if e.kind() == sqsign_core::ErrorKind::AuthenticationFailed {
                eprintln!("Check AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY.");
            }
        }
    }

    Ok(())
}
