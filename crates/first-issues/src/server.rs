//! HTTP API: a single `POST /analyze` route with fully open CORS

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use warp::http::{Method, StatusCode};
use warp::{Filter, Rejection, Reply};

use crate::app::App;
use crate::output::JsonError;

const MAX_BODY_BYTES: u64 = 16 * 1024;
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Serve the API until Ctrl-C
pub async fn serve(app: Arc<App>, addr: SocketAddr) -> Result<()> {
    let (bound, server) = warp::serve(routes(app))
        .try_bind_with_graceful_shutdown(addr, async {
            tokio::signal::ctrl_c().await.ok();
        })
        .with_context(|| format!("Failed to bind {}", addr))?;

    log::info!("Listening on http://{}", bound);
    server.await;
    log::info!("Server stopped");
    Ok(())
}

pub fn routes(app: Arc<App>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let analyze = warp::path("analyze")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_app(app))
        .and_then(analyze_handler);

    preflight()
        .or(analyze)
        .recover(handle_rejection)
        .with(warp::reply::with::header("access-control-allow-origin", "*"))
        .with(warp::log("first_issues::server"))
}

/// Answer every CORS preflight, granting whatever headers the browser asks for
fn preflight() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    options_only()
        .and(warp::header::optional::<String>("access-control-request-headers"))
        .map(|requested: Option<String>| {
            let reply = warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT);
            let reply = warp::reply::with_header(reply, "access-control-allow-methods", ALLOWED_METHODS);
            let reply = warp::reply::with_header(reply, "access-control-max-age", "600");
            warp::reply::with_header(
                reply,
                "access-control-allow-headers",
                requested.unwrap_or_else(|| "*".to_string()),
            )
        })
}

// warp::options() would reject other methods with 405, which outranks the 404 of unknown paths
fn options_only() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::method()
        .and_then(|method: Method| async move {
            if method == Method::OPTIONS {
                Ok(())
            } else {
                Err(warp::reject::not_found())
            }
        })
        .untuple_one()
}

fn with_app(app: Arc<App>) -> impl Filter<Extract = (Arc<App>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&app))
}

fn error_reply(message: &str, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&JsonError::new(message)), status)
}

async fn analyze_handler(
    request: AnalyzeRequest,
    app: Arc<App>,
) -> Result<impl Reply, Infallible> {
    let username = match request.username.as_deref().map(str::trim) {
        Some(username) if !username.is_empty() => username.to_string(),
        _ => {
            return Ok(error_reply(
                "A GitHub username is required",
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    log::info!("Analyzing {}", username);

    // the recommendation makes blocking HTTP calls
    let outcome = tokio::task::spawn_blocking(move || app.recommend(&username)).await;

    Ok(match outcome {
        Ok(Ok(recommendation)) => {
            warp::reply::with_status(warp::reply::json(&recommendation), StatusCode::OK)
        }
        Ok(Err(e)) => error_reply(&e.to_string(), StatusCode::OK),
        Err(e) => {
            log::error!("Analysis task failed: {}", e);
            error_reply("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
        }
    })
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (message, status) = if err.is_not_found() {
        ("Not found", StatusCode::NOT_FOUND)
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        ("Invalid request body", StatusCode::BAD_REQUEST)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ("Request body too large", StatusCode::PAYLOAD_TOO_LARGE)
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        ("Expected a JSON body", StatusCode::UNSUPPORTED_MEDIA_TYPE)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        ("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(error_reply(message, status))
}
