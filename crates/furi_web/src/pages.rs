//! Top level pages.

use crate::{components::*, context::get_records};
use leptos::prelude::*;

/// Lists the records loaded from the backend.
#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    let records = get_records().records();

    view! {
        <div>
            <div class="block">
                <LoadButton/>
            </div>
            <div class="block">
                <Table records/>
            </div>
        </div>
    }
}
