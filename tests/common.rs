#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use confpapers::ConferenceConfig;
use serde_json::{json, Value};
use tracing::subscriber::DefaultGuard;

/// Start a local listing server and return its base URL
pub async fn spawn_listing_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, listing_router()).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Routes mimicking conference listing APIs
///
/// - `/neurips/{year}`: 2023 has two papers, 2024 one, anything else 404
/// - `/empty/{year}`: `{"results": []}`
/// - `/no-results/{year}`: JSON object without a `results` key
/// - `/broken/{year}`: 500
/// - `/garbage/{year}`: body that is not JSON
/// - `/bad-shape/{year}`: `results` is a string
/// - `/staggered/{year}`: one paper, 2023 answers slowest
/// - `/slow/{year}`: answers after two seconds
pub fn listing_router() -> Router {
    Router::new()
        .route("/neurips/{year}", get(neurips))
        .route("/empty/{year}", get(|| async { Json(json!({ "results": [] })) }))
        .route(
            "/no-results/{year}",
            get(|| async { Json(json!({ "count": 0, "next": null })) }),
        )
        .route(
            "/broken/{year}",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage/{year}", get(|| async { "<html>not json</html>" }))
        .route(
            "/bad-shape/{year}",
            get(|| async { Json(json!({ "results": "nope" })) }),
        )
        .route("/staggered/{year}", get(staggered))
        .route(
            "/slow/{year}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "results": [{ "uid": "late" }] }))
            }),
        )
}

async fn neurips(Path(year): Path<i32>) -> Result<Json<Value>, StatusCode> {
    match year {
        2023 => Ok(Json(json!({
            "count": 2,
            "results": [
                {
                    "uid": "n23-1",
                    "name": "Deep Learning",
                    "title": "Ignored Title",
                    "authors": [
                        { "fullname": "A. Smith", "institution": "MIT" },
                        { "fullname": "B. Jones" }
                    ],
                    "abstract": "We learn deeply.",
                    "topic": "Deep Learning",
                    "paper_pdf_url": "http://x/n23-1.pdf",
                    "paper_url": "http://x/n23-1"
                },
                {
                    "uid": "n23-2",
                    "title": "Only A Title",
                    "authors": [{ "id": 12 }],
                    "paper_url": "http://x/n23-2"
                }
            ]
        }))),
        2024 => Ok(Json(json!({
            "results": [
                {
                    "uid": "p1",
                    "name": "Deep Learning",
                    "authors": [{ "fullname": "A. Smith" }],
                    "paper_pdf_url": "http://x/p1.pdf"
                }
            ]
        }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn staggered(Path(year): Path<i32>) -> Json<Value> {
    if year == 2023 {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    Json(json!({ "results": [{ "uid": year.to_string() }] }))
}

/// Conference entry whose URL template points at `route` on the test server
pub fn conference(base: &str, name: &str, route: &str, years: &[i32]) -> ConferenceConfig {
    ConferenceConfig {
        name: name.to_string(),
        url_template: format!("{}/{}/{{year}}", base, route),
        years: years.to_vec(),
    }
}

/// Log output captured from a scoped subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
