#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tokio::net::TcpListener;

pub use relay_sync::source::{ScriptStep as Step, ScriptedSource};

/// Local origin server for fetcher tests.
pub struct Origin {
    base: String,
    failing: Arc<AtomicBool>,
}

impl Origin {
    /// Returns the absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Makes `/news.m3u` answer 503 from now on (or recover).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

async fn news(State(failing): State<Arc<AtomicBool>>) -> Response {
    if failing.load(Ordering::SeqCst) {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    } else {
        "#EXTAAA\ndata".into_response()
    }
}

/// Starts an origin on an ephemeral port.
pub async fn spawn_origin() -> Origin {
    let failing = Arc::new(AtomicBool::new(false));

    let app = Router::new()
        .route(
            "/marked.m3u",
            get(|| async { "#EXTM3U\n#EXTINF:-1,One\nhttp://origin/1.ts" }),
        )
        .route("/raw.m3u", get(|| async { "#EXTINF:-1,One\nhttp://origin/1.ts" }))
        .route("/empty.m3u", get(|| async { "" }))
        .route("/missing.m3u", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/broken.m3u",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "#EXTM3U\nerror page") }),
        )
        .route("/moved.m3u", get(|| async { Redirect::temporary("/marked.m3u") }))
        .route(
            "/mapping.json",
            get(|| async { r#"{"news":"http://src/news.m3u","sports":"http://src/sports.m3u"}"# }),
        )
        .route("/bad-mapping.json", get(|| async { "{ not json" }))
        .route("/invalid-key.json", get(|| async { r#"{"a/b":"http://src/x.m3u"}"# }))
        .route("/news.m3u", get(news))
        .with_state(Arc::clone(&failing));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind origin");
    let addr = listener.local_addr().expect("Failed to read origin address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Origin server failed");
    });

    Origin {
        base: format!("http://{}", addr),
        failing,
    }
}
