pub mod client;
pub mod records;

use self::{client::Client, records::RecordStore};
use leptos::prelude::*;

pub fn initialise_context() {
    tracing::trace!("initialising context");

    leptos::context::provide_context(RecordStore::new());
}

pub fn get_client() -> Client {
    Client::new()
}

pub fn get_records() -> RecordStore {
    leptos::prelude::expect_context::<RecordStore>()
}
