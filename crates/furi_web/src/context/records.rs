//! The records currently shown on the page.

use super::get_client;
use crate::error::WebResult;
use furi_core::FuriganaRecord;
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct RecordStore {
    records: RwSignal<Vec<FuriganaRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
        }
    }

    pub fn records(&self) -> ReadSignal<Vec<FuriganaRecord>> {
        self.records.read_only()
    }

    /// Fetches every record from the backend in the background.
    ///
    /// Loads are not cancelled or sequenced, whichever response arrives last decides the contents.
    pub fn load(&self) {
        let client = get_client();
        let load = self.complete(async move { client.all_records().await });
        leptos::task::spawn_local(load);
    }

    /// Waits for a response and replaces the records with it.
    /// On failure the current records are kept.
    pub async fn complete<F>(self, response: F)
    where
        F: Future<Output = WebResult<Vec<FuriganaRecord>>>,
    {
        match response.await {
            Ok(records) => {
                tracing::info!("Replacing {} records", records.len());
                self.records.set(records);
            }
            Err(err) => {
                tracing::warn!("Failed to load records: {err}");
            }
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
