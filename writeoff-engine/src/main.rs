use std::sync::Arc;

use shared::AppError;
use shared::models::WriteOffRequest;
use writeoff_engine::{Config, LedgerClient, OAuthTokenProvider, WriteOffJob, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    tracing::info!("Invoice write-off engine starting");

    // 2. Configuration
    let config = Config::from_env();
    config.validate()?;

    // 3. Batch input: JSON array of {invoiceId, cancelSource}
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: writeoff-engine <batch.json>"))?;
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read batch file {path}: {e}"))?;
    let batch: Vec<WriteOffRequest> = serde_json::from_str(&raw)
        .map_err(|e| AppError::validation(format!("Invalid batch input in {path}: {e}")))?;

    // 4. Wire up the ledger collaborators and run the job
    let tokens = Arc::new(OAuthTokenProvider::from_config(&config)?);
    let client = Arc::new(LedgerClient::from_config(&config, tokens.clone())?);
    let job = WriteOffJob::new(client.clone(), client, tokens, &config);

    if let Err(e) = job.run(&batch).await {
        tracing::error!("Write-off run failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
