#![forbid(unsafe_code)]
pub mod map_type;
pub mod query_parameters;
pub mod regex_patterns;
pub mod server;
pub mod settings;
pub mod summary;
pub mod templates;
pub mod view_model;

use anyhow::Result;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let port: u16 = match env::var("SIMPLE_GMAP_PORT") {
        Ok(port) => port.as_str().parse::<u16>().unwrap_or(8000),
        Err(_) => 8000,
    };

    server::run_server([0, 0, 0, 0], port).await
}

/*
TESTING:

curl -sg 'http://localhost:8000/map.json?address=1%20Infinite%20Loop&include_link=1&link_text=use_address&map_type=k&zoom_level=10&langcode=page&uselang=en'

curl -sg 'http://localhost:8000/summary.json?include_map=1&include_static_map=1&iframe_width=400&iframe_height=300'

 */
