//! LedgerClient: HTTP client for the billing ledger
//!
//! Two wire dialects: the read endpoints speak camelCase JSON, the bulk
//! action endpoint speaks the ledger's PascalCase object format.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{ActionResult, AdjustmentInstruction, Invoice, InvoiceItem};
use shared::{AppError, AppResult};
use std::error::Error as StdError;

use crate::core::Config;
use crate::ledger::auth::{AccessToken, TokenProvider};
use std::sync::Arc;

/// Bulk-object type tag for invoice item adjustments
const ADJUSTMENT_OBJECT_TYPE: &str = "InvoiceItemAdjustment";

/// Capability for creating adjustments in bulk
///
/// Contract: one HTTP call per chunk; the response array's length and order
/// correspond to the request chunk.
#[async_trait]
pub trait AdjustmentLedger: Send + Sync {
    async fn create_adjustments(
        &self,
        token: &AccessToken,
        chunk: &[AdjustmentInstruction],
    ) -> AppResult<Vec<ActionResult>>;
}

/// Capability for reading invoices and their adjustable line items
#[async_trait]
pub trait InvoiceSource: Send + Sync {
    async fn load_invoice(&self, invoice_id: &str) -> AppResult<Invoice>;
    async fn adjustable_items(&self, invoice_id: &str) -> AppResult<Vec<InvoiceItem>>;
}

/// HTTP client for the ledger REST API
pub struct LedgerClient {
    client: reqwest::Client,
    base_url: String,
    /// Used for the read endpoints; bulk create calls receive their token
    /// from the batcher, one per chunk
    tokens: Arc<dyn TokenProvider>,
}

#[derive(Serialize)]
struct ActionCreateRequest<'a> {
    objects: &'a [AdjustmentInstruction],
    #[serde(rename = "type")]
    object_type: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceItemsResponse {
    invoice_items: Vec<InvoiceItem>,
}

impl LedgerClient {
    pub fn from_config(config: &Config, tokens: Arc<dyn TokenProvider>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.ledger_base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let token = self.tokens.access_token().await?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| AppError::transport(format!("GET {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::transport(format!(
                "GET {url} returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::unexpected(format!("Failed to parse response of {url}: {e}")))
    }
}

#[async_trait]
impl AdjustmentLedger for LedgerClient {
    async fn create_adjustments(
        &self,
        token: &AccessToken,
        chunk: &[AdjustmentInstruction],
    ) -> AppResult<Vec<ActionResult>> {
        let url = format!("{}/v1/action/create", self.base_url);
        let body = ActionCreateRequest {
            objects: chunk,
            object_type: ADJUSTMENT_OBJECT_TYPE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let mut msg = format!("Bulk adjustment request failed: {e}");
                let mut source: Option<&dyn StdError> = StdError::source(&e);
                while let Some(s) = source {
                    msg.push_str(&format!(" → {s}"));
                    source = s.source();
                }
                AppError::transport(msg)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::transport(format!(
                "Bulk adjustment call returned {status}: {body}"
            )));
        }

        let results: Vec<ActionResult> = response.json().await.map_err(|e| {
            AppError::unexpected(format!("Failed to parse bulk adjustment response: {e}"))
        })?;

        // The per-item results are matched to instructions by position, so a
        // length mismatch means the response cannot be classified safely.
        if results.len() != chunk.len() {
            return Err(AppError::unexpected(format!(
                "Bulk adjustment response has {} results for {} objects",
                results.len(),
                chunk.len()
            )));
        }

        Ok(results)
    }
}

#[async_trait]
impl InvoiceSource for LedgerClient {
    async fn load_invoice(&self, invoice_id: &str) -> AppResult<Invoice> {
        let url = format!("{}/v1/invoices/{invoice_id}", self.base_url);
        self.get_json(&url).await
    }

    async fn adjustable_items(&self, invoice_id: &str) -> AppResult<Vec<InvoiceItem>> {
        let url = format!("{}/v1/invoices/{invoice_id}/items", self.base_url);
        let response: InvoiceItemsResponse = self.get_json(&url).await?;
        Ok(response.invoice_items)
    }
}
