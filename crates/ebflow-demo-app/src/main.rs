//! Demo payload for the example pipeline.
//!
//! Two routes, nothing else. This is the bundle the pipeline deploys to the
//! hosting environment; it is not part of the synthesis logic.

use axum::{Router, response::Html, routing::get};

const PORT: u16 = 4000;

async fn test_route() -> &'static str {
    "the REST endpoint test run!"
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../index.html"))
}

fn app() -> Router {
    Router::new()
        .route("/test", get(test_route))
        .route("/", get(index))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT)).await?;
    println!("Server running at http://127.0.0.1:{PORT}");
    axum::serve(listener, app()).await?;
    Ok(())
}
