// ============================================================================
// TrackDesk Infrastructure - Sheet API Client
// File: crates/trackdesk-infrastructure/src/remote/client.rs
// ============================================================================
//! HTTP client for the remote spreadsheet API.
//!
//! One endpoint serves every tenant: reads are `GET` with `alias`, `sheet`
//! and `key` in the query string, writes are `POST` with a JSON body naming
//! the action. Both answer with a JSON envelope carrying its own `status`.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use trackdesk_core::repositories::WriteReceipt;
use trackdesk_core::Page;
use trackdesk_shared::config::RemoteSettings;

use super::error::RemoteError;
use super::sheet::{ReadQuery, Sheet, WriteAction};

#[derive(Debug, Serialize)]
struct WriteRequest<'a, D: Serialize> {
    alias: &'a str,
    sheet: &'static str,
    action: WriteAction,
    key: &'a str,
    data: &'a D,
}

/// Parsed answer to a write: the server message and the echoed record.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome<T> {
    pub message: Option<String>,
    pub record: Option<T>,
}

impl<T> WriteOutcome<T> {
    /// Receipt with the server message, or `default_message` when it sent none.
    pub fn into_receipt(self, default_message: &str) -> WriteReceipt<T> {
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_message.to_string());
        WriteReceipt::new(message, self.record)
    }
}

#[derive(Clone)]
pub struct SheetApiClient {
    client: Client,
    base_url: String,
    key: String,
}

impl SheetApiClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            key: settings.key.clone(),
        })
    }

    /// Reads one page of `sheet`. Rows that fail to decode are skipped with a
    /// warning; `total` still reports what the server counted.
    pub async fn read<T: DeserializeOwned>(
        &self,
        alias: &str,
        sheet: Sheet,
        query: &ReadQuery,
    ) -> Result<Page<T>, RemoteError> {
        debug!(alias, sheet = sheet.as_str(), ?query, "Reading sheet");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("alias", alias), ("sheet", sheet.as_str()), ("key", self.key.as_str())])
            .query(query)
            .send()
            .await?;

        let mut envelope = read_envelope(response).await?;
        let section = envelope
            .get_mut(sheet.as_str())
            .map(Value::take)
            .filter(|v| !v.is_null())
            .ok_or(RemoteError::MissingSection(sheet.as_str()))?;

        let page: Page<Value> =
            serde_json::from_value(section).map_err(|e| RemoteError::Decode(e.to_string()))?;

        Ok(retain_decoded(page.map(|row| decode_row::<T>(sheet, row))))
    }

    pub async fn write<D: Serialize, T: DeserializeOwned>(
        &self,
        alias: &str,
        sheet: Sheet,
        action: WriteAction,
        data: &D,
    ) -> Result<WriteOutcome<T>, RemoteError> {
        debug!(alias, sheet = sheet.as_str(), ?action, "Writing sheet");

        let request = WriteRequest {
            alias,
            sheet: sheet.as_str(),
            action,
            key: &self.key,
            data,
        };

        let response = self.client.post(&self.base_url).json(&request).send().await?;
        let mut envelope = read_envelope(response).await?;

        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let record = envelope
            .get_mut(sheet.record_key())
            .map(Value::take)
            .filter(|v| !v.is_null())
            .and_then(|row| decode_row(sheet, row));

        Ok(WriteOutcome { message, record })
    }
}

/// Checks the HTTP status and the envelope's own `status` field.
async fn read_envelope(response: reqwest::Response) -> Result<Value, RemoteError> {
    let http_status = response.status();
    let body = response.text().await?;
    let parsed: Result<Value, _> = serde_json::from_str(&body);

    if !http_status.is_success() {
        let message = parsed.ok().as_ref().and_then(message_of);
        return Err(RemoteError::Status { status: http_status.as_u16(), message });
    }

    let envelope = parsed.map_err(|e| RemoteError::Decode(e.to_string()))?;
    match envelope.get("status").and_then(Value::as_i64) {
        Some(200) | None => Ok(envelope),
        Some(status) => Err(RemoteError::Rejected { status, message: message_of(&envelope) }),
    }
}

fn message_of(envelope: &Value) -> Option<String> {
    envelope.get("message").and_then(Value::as_str).map(str::to_string)
}

fn decode_row<T: DeserializeOwned>(sheet: Sheet, row: Value) -> Option<T> {
    match serde_json::from_value(row) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(sheet = sheet.as_str(), error = %e, "Skipping undecodable row");
            None
        }
    }
}

fn retain_decoded<T>(page: Page<Option<T>>) -> Page<T> {
    Page {
        page: page.page,
        per_page: page.per_page,
        total: page.total,
        data: page.data.into_iter().flatten().collect(),
    }
}
