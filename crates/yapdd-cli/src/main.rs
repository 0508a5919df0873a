//! pdd - manage DNS records hosted on Yandex PDD.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    yapdd_cli::run().await
}
