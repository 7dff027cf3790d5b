//! Fuentes de playlists para tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

pub use relay_sync::source::{ScriptStep as Step, ScriptedSource};

/// Local origin that serves a mapping document and playlists.
pub struct Origin {
    base: String,
    failing: Arc<AtomicBool>,
}

impl Origin {
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
            "/mapping.json",
            get(|| async { r#"{"news":"http://127.0.0.1:9/news.m3u","sports":"http://127.0.0.1:9/sports.m3u"}"# }),
        )
        .route("/bad-mapping.json", get(|| async { "[1, 2, 3]" }))
        .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }))
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
