use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::{Value, json};
use tokio::sync::Notify;
use uuid::Uuid;

use rfp_accelerator::backend::HttpBackend;
use rfp_accelerator::config::Config;
use rfp_accelerator::dashboard::Dashboard;
use rfp_accelerator::session::SESSION_COOKIE;
use rfp_accelerator::state::SharedState;

// ── Mock analysis backend ───────────────────────────────────────

/// Shared state of the fake analysis service.
pub struct MockState {
    pub uploads: AtomicUsize,
    pub upload_reply: Mutex<(StatusCode, Value)>,
    pub received: Mutex<Vec<(String, String)>>,
    /// When set, uploads wait on this before replying.
    pub gate: Mutex<Option<Arc<Notify>>>,
    pub catalog: Mutex<Vec<Value>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn uploads(&self) -> usize {
        self.state.uploads.load(Ordering::SeqCst)
    }

    pub fn reply_with(&self, status: StatusCode, body: Value) {
        *self.state.upload_reply.lock().unwrap() = (status, body);
    }

    /// Hold uploads until the returned handle is notified.
    pub fn hold_uploads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.state.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Let the held upload through and stop holding later ones.
    pub fn release_uploads(&self) {
        if let Some(gate) = self.state.gate.lock().unwrap().take() {
            gate.notify_one();
        }
    }

    /// (file name, content type) of every upload received.
    pub fn received(&self) -> Vec<(String, String)> {
        self.state.received.lock().unwrap().clone()
    }

    pub async fn wait_for_uploads(&self, count: usize) {
        for _ in 0..500 {
            if self.uploads() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("mock backend never saw {count} upload(s)");
    }
}

pub fn project_json(id: i64, title: &str, cost: f64, score: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} engagement"),
        "cost": cost,
        "duration": "12 months",
        "technology_stack": ["Corporate Law", "Securities Regulation"],
        "client": "Global Manufacturing Corp",
        "completion_date": "2024-03-15",
        "similarity_score": score,
    })
}

/// The two-project example: listed in reverse similarity order on purpose.
pub fn sample_projects() -> Vec<Value> {
    vec![
        project_json(2, "Multi-Jurisdiction Litigation Defense", 3000.0, 0.85),
        project_json(1, "Corporate Restructuring Advisory", 1000.0, 0.95),
    ]
}

pub fn success_body(projects: Vec<Value>, decision: Option<Value>) -> Value {
    let mut body = json!({
        "success": true,
        "message": "RFP uploaded successfully",
        "file_info": {
            "original_name": "rfp.pdf",
            "saved_name": "20240315_101500_rfp.pdf",
            "size": 2048,
        },
        "similar_projects": projects,
    });
    if let Some(decision) = decision {
        body["ai_decision"] = decision;
    }
    body
}

pub fn decision_json() -> Value {
    json!({
        "recommendation": "REVIEW_REQUIRED",
        "confidence_score": 0.72,
        "executive_summary": "Good strategic fit but tight timeline.",
        "key_factors": ["Existing client relationship", "Aggressive deadline"],
        "risk_assessment": "Moderate delivery risk.",
        "financial_analysis": "Margins in line with comparable engagements.",
        "next_steps": ["Confirm staffing", "Request deadline extension"],
    })
}

async fn mock_upload(
    State(mock): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    mock.uploads.fetch_add(1, Ordering::SeqCst);

    if let Some(file) = first_file(&headers, body).await {
        mock.received.lock().unwrap().push(file);
    }

    let gate = mock.gate.lock().unwrap().clone();
    if let Some(gate) = gate {
        gate.notified().await;
    }

    let (status, body) = mock.upload_reply.lock().unwrap().clone();
    (status, Json(body))
}

async fn first_file(headers: &HeaderMap, body: Bytes) -> Option<(String, String)> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())?;
    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or_default().to_string();
            let mime = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_default();
            return Some((name, mime));
        }
    }
    None
}

async fn mock_health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": "2024-06-01T12:00:00" }))
}

async fn mock_projects(State(mock): State<Arc<MockState>>) -> Json<Value> {
    let projects = mock.catalog.lock().unwrap().clone();
    Json(json!({ "total_count": projects.len(), "projects": projects }))
}

async fn mock_project(
    State(mock): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    let found = mock
        .catalog
        .lock()
        .unwrap()
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .cloned();
    match found {
        Some(project) => (StatusCode::OK, Json(json!({ "project": project }))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Project not found" })),
        ),
    }
}

pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(MockState {
        uploads: AtomicUsize::new(0),
        upload_reply: Mutex::new((StatusCode::OK, success_body(sample_projects(), None))),
        received: Mutex::new(Vec::new()),
        gate: Mutex::new(None),
        catalog: Mutex::new(sample_projects()),
    });

    let app = Router::new()
        .route("/api/upload-rfp", post(mock_upload))
        .route("/api/health", get(mock_health))
        .route("/api/projects", get(mock_projects))
        .route("/api/project/{id}", get(mock_project))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend failed");
    });

    MockBackend { addr, state }
}

/// A base URL nothing is listening on.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ── App under test ──────────────────────────────────────────────

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Multipart form carrying one `file` part.
    pub fn document_form(file_name: &str, mime: &str, bytes: &[u8]) -> Form {
        let part = Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime)
            .unwrap();
        Form::new().part("file", part)
    }

    pub async fn analyze(&self, form: Form) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/analyze"))
            .multipart(form)
            .send()
            .await
            .expect("analyze request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Browser-style upload. `cookie` is a `rfp_session=...` pair.
    pub async fn upload(&self, form: Form, cookie: Option<&str>, htmx: bool) -> Response {
        let mut req = self.client.post(self.url("/upload")).multipart(form);
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        if htmx {
            req = req.header("hx-request", "true");
        }
        req.send().await.expect("upload request failed")
    }

    pub async fn get_page(&self, path: &str, cookie: Option<&str>) -> (String, StatusCode) {
        let mut req = self.client.get(self.url(path));
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        let resp = req.send().await.expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    pub async fn reset(&self, cookie: &str) -> Response {
        self.client
            .post(self.url("/reset"))
            .header("cookie", cookie)
            .send()
            .await
            .expect("reset request failed")
    }

    /// Open a session by loading the dashboard, returning its cookie pair.
    pub async fn open_session(&self) -> String {
        let resp = self.client.get(self.url("/")).send().await.unwrap();
        session_cookie(&resp).expect("dashboard did not set a session cookie")
    }

    /// Wait for the session's upload to leave the loading state.
    pub async fn wait_until_settled(&self, cookie: &str) -> Dashboard {
        for _ in 0..500 {
            let dashboard = self.dashboard(cookie);
            if !dashboard.is_loading() {
                return dashboard;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("session never left the loading state");
    }

    pub fn dashboard(&self, cookie: &str) -> Dashboard {
        let id = cookie
            .strip_prefix(&format!("{SESSION_COOKIE}="))
            .and_then(|v| Uuid::parse_str(v).ok())
            .expect("malformed session cookie");
        self.state.sessions.snapshot(id)
    }
}

/// `rfp_session=<uuid>` from a response's Set-Cookie headers.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(|v| v.split(';').next().unwrap_or(v).to_string())
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        backend_url: backend_url.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_upload_size: 16 * 1024 * 1024,
        backend_timeout: Some(Duration::from_secs(10)),
        session_ttl: Duration::from_secs(3600),
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app(backend_url: &str) -> TestApp {
    spawn_app_with(test_config(backend_url)).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let backend = HttpBackend::new(&config.backend_url, config.backend_timeout)
        .expect("Failed to build backend client");
    let (app, state) = rfp_accelerator::build_app(config, Arc::new(backend));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        state,
    }
}
