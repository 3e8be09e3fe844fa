//! Web backend for furi.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;

use crate::handlers::records;
use axum::{
    extract::FromRef,
    routing::{any, post},
    Router,
};
use config::Config;
use eyre::WrapErr;
use furi_api::ALL_RECORDS_PATH;
use furi_core::FuriganaRecord;
use furi_web::App;
use leptos::prelude::*;
use leptos_axum::LeptosRoutes;
use leptos_meta::*;
use std::{fmt::Debug, ops::Deref, sync::Arc};
use tower_http::trace::TraceLayer;

/// The records loaded at startup, shared by all requests.
#[derive(Clone)]
pub struct Records(Arc<[FuriganaRecord]>);

impl Records {
    pub fn new(records: Vec<FuriganaRecord>) -> Self {
        Self(records.into())
    }
}

impl Deref for Records {
    type Target = [FuriganaRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone)]
pub struct FuriState(Arc<FuriStateCore>);

impl Deref for FuriState {
    type Target = FuriStateCore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for FuriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Furi")
    }
}

pub struct FuriStateCore {
    pub records: Records,
    pub leptos_options: LeptosOptions,
}

impl FromRef<FuriState> for LeptosOptions {
    fn from_ref(input: &FuriState) -> Self {
        input.leptos_options.clone()
    }
}

impl FromRef<FuriState> for Records {
    fn from_ref(input: &FuriState) -> Self {
        input.records.clone()
    }
}

/// The JSON API. Every API call is a POST so that GET stays free for pages and files.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Records: FromRef<S>,
{
    Router::new()
        .route(
            ALL_RECORDS_PATH,
            post(records::all).fallback(records::not_found),
        )
        .route("/api", any(records::not_found))
        .route("/api/{*rest}", any(records::not_found))
}

pub fn router(state: FuriState) -> Router<()> {
    api_routes()
        .leptos_routes(
            &state,
            leptos_axum::generate_route_list(|| {
                tracing::info!("Generating route list");
                view! { <App/> }
            }),
            {
                tracing::info!("Running app");
                let leptos_options = state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<FuriState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    tracing::info!("Running shell");
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

pub async fn router_from_config(config: &Config) -> eyre::Result<Router<()>> {
    let records = domain::database::load_or_create(&config.database_path)
        .await
        .wrap_err("Failed to load the database")?;
    let leptos_options = leptos::prelude::get_configuration(None)
        .wrap_err("Failed to read the Leptos configuration")?
        .leptos_options;

    let state = FuriState(Arc::new(FuriStateCore {
        records: Records::new(records),
        leptos_options,
    }));
    Ok(self::router(state))
}
