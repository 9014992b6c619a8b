use crate::query_parameters::MapQueryParameters;
use crate::summary::settings_summary;
use crate::templates;
use crate::view_model::{MapViewModel, view_models};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::Query,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{AppendHeaders, Html, IntoResponse},
    routing::get,
};
use std::net::SocketAddr;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[axum::debug_handler]
async fn index() -> Html<String> {
    let html = include_str!("../data/index.html").to_string();
    Html(html)
}

#[axum::debug_handler]
async fn main_css() -> impl IntoResponse {
    (
        AppendHeaders([(CONTENT_TYPE, "text/css")]),
        include_str!("../data/main.css").to_string(),
    )
}

fn build_view_models(query: &MapQueryParameters) -> Vec<MapViewModel> {
    let settings = query.raw_settings().resolve();
    view_models(&settings, &query.addresses(), &query.page_langcode())
}

#[axum::debug_handler]
async fn map_html(params: Query<MapQueryParameters>) -> Result<Html<String>, StatusCode> {
    let query = params.0;
    let models = build_view_models(&query);
    let html = templates::render_page(&query.page_langcode(), &models)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Html(html))
}

#[axum::debug_handler]
async fn map_json(params: Query<MapQueryParameters>) -> Json<Vec<MapViewModel>> {
    Json(build_view_models(&params.0))
}

#[axum::debug_handler]
async fn summary_json(params: Query<MapQueryParameters>) -> Json<Vec<String>> {
    Json(settings_summary(&params.0.raw_settings().resolve()))
}

pub async fn run_server(address: [u8; 4], port: u16) -> Result<()> {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .route("/", get(index))
        .route("/main.css", get(main_css))
        .route("/map", get(map_html))
        .route("/map.json", get(map_json))
        .route("/summary.json", get(summary_json))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    let ip_addr = std::net::Ipv4Addr::from(address);
    tracing::info!("Starting server on http://{ip_addr}:{port}");

    let addr = SocketAddr::from((address, port));
    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
