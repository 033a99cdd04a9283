//! # Saved Configuration Commands
//!
//! Save, reopen, list and delete named configurations.
//!
//! Handlers are generic over [`SnapshotStore`]; the binary passes a
//! `FileStore`, tests pass a `MemoryStore`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use showroom_core::{Money, PriceFormat};
use showroom_store::{SavedConfiguration, SnapshotStore};
use tracing::{debug, info};

use super::quote::QuoteResponse;
use super::{line, Context, Render};
use crate::cli::SessionArgs;
use crate::error::ApiResult;

/// One row of `showroom list`, and the result of `showroom save`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSummary {
    pub id: String,
    pub name: String,
    pub model: String,
    pub total: Money,
    pub saved_at: DateTime<Utc>,
}

impl From<&SavedConfiguration> for SavedSummary {
    fn from(record: &SavedConfiguration) -> Self {
        SavedSummary {
            id: record.id.to_string(),
            name: record.name.clone(),
            model: record.snapshot.model.clone(),
            total: record.total,
            saved_at: record.saved_at,
        }
    }
}

/// `showroom list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub saved: Vec<SavedSummary>,
}

/// `showroom load <name>`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub name: String,
    /// Total recorded when the configuration was saved.
    pub saved_total: Money,
    /// True when the current catalog prices it differently.
    pub price_changed: bool,
    pub quote: QuoteResponse,
}

/// `showroom delete <name>`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: String,
}

/// Saves the configuration described by `args` under `name`.
pub fn save<S: SnapshotStore>(
    ctx: &Context,
    store: &mut S,
    name: &str,
    args: &SessionArgs,
) -> ApiResult<SavedSummary> {
    debug!(name = %name, "save command");
    let session = ctx.session(args)?;
    let record = SavedConfiguration::capture(name, &session)?;
    store.save(&record)?;

    info!(name = %record.name, total = record.total.units(), "Configuration saved");
    Ok(SavedSummary::from(&record))
}

/// Reopens a saved configuration against the current catalog.
pub fn load<S: SnapshotStore>(ctx: &Context, store: &S, name: &str) -> ApiResult<LoadResponse> {
    debug!(name = %name, "load command");
    let record = store.load(name)?;
    let session = record.open(ctx.shared_catalog())?;
    let quote = QuoteResponse::from_session(&session)?;

    Ok(LoadResponse {
        name: record.name,
        saved_total: record.total,
        price_changed: quote.breakdown.total != record.total,
        quote,
    })
}

/// Lists saved configurations by name.
pub fn list<S: SnapshotStore>(store: &S) -> ApiResult<ListResponse> {
    debug!("list command");
    let saved = store.list()?.iter().map(SavedSummary::from).collect();
    Ok(ListResponse { saved })
}

/// Deletes a saved configuration.
pub fn delete<S: SnapshotStore>(store: &mut S, name: &str) -> ApiResult<DeleteResponse> {
    debug!(name = %name, "delete command");
    store.delete(name)?;
    Ok(DeleteResponse {
        deleted: name.to_string(),
    })
}

impl Render for SavedSummary {
    fn render(&self, format: &PriceFormat) -> String {
        format!(
            "Saved '{}' ({}, {})\n",
            self.name,
            self.model,
            self.total.format(format)
        )
    }
}

impl Render for ListResponse {
    fn render(&self, format: &PriceFormat) -> String {
        if self.saved.is_empty() {
            return "No saved configurations\n".to_string();
        }

        self.saved
            .iter()
            .map(|s| {
                line(
                    &format!(
                        "{:<20}{:<10}{}",
                        s.name,
                        s.model,
                        s.saved_at.format("%Y-%m-%d %H:%M")
                    ),
                    &s.total.format(format),
                )
            })
            .collect()
    }
}

impl Render for LoadResponse {
    fn render(&self, format: &PriceFormat) -> String {
        let mut out = self.quote.render(format);
        if self.price_changed {
            out.push_str(&format!(
                "\nPrice changed since '{}' was saved (was {})\n",
                self.name,
                self.saved_total.format(format)
            ));
        }
        out
    }
}

impl Render for DeleteResponse {
    fn render(&self, _format: &PriceFormat) -> String {
        format!("Deleted '{}'\n", self.deleted)
    }
}
