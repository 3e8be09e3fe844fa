#![allow(clippy::unit_arg)]

pub mod components;
pub mod context;
pub mod error;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};
use pages::*;

/// The id of the element the app is rendered into.
pub const MOUNT_ID: &str = "app";

/// Wraps the content in the container the app is mounted in
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    context::initialise_context();
    leptos_meta::provide_meta_context();

    view! {
        <Meta name="description" content="furi lists furigana records"/>
        <Title text="furi"/>
        <div id=MOUNT_ID>
            <Content/>
        </div>
    }
}

/// Contains the router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <main>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route
                        path=StaticSegment("/")
                        view=Home
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
