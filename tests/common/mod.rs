use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use server::clients::livechess::LiveChessClient;
use server::config::Config;

pub const TOURNAMENT_ID: &str = "test-open";

/// Request seen by the mock: path plus the Cache-Control header sent.
#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub cache_control: Option<String>,
}

/// Stand-in for the LiveChessCloud pool, served from memory.
#[derive(Clone, Default)]
pub struct MockUpstream {
    routes: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockUpstream {
    pub fn json(&self, path: &str, body: Value) {
        self.respond(path, StatusCode::OK, &body.to_string());
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("/get/{TOURNAMENT_ID}/{path}"), (status, body.to_string()));
    }

    /// Hold the response for `path` back by `delay`.
    pub fn delay(&self, path: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(format!("/get/{TOURNAMENT_ID}/{path}"), delay);
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits().into_iter().map(|h| h.path).collect()
    }

    /// Serve on an ephemeral port; returns the base URL to configure.
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(serve_mock).with_state(self.clone());
        format!("{}/get", spawn(app).await)
    }
}

async fn serve_mock(
    State(mock): State<MockUpstream>,
    headers: HeaderMap,
    uri: Uri,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    mock.hits.lock().unwrap().push(Hit {
        path: path.clone(),
        cache_control: headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });

    let delay = mock.delays.lock().unwrap().get(&path).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    mock.routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn livechess_client(base_url: &str) -> LiveChessClient {
    LiveChessClient::new(&Config {
        livechess_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    })
    .unwrap()
}

/// Start the download service against `upstream`; returns its base URL.
pub async fn spawn_app(upstream: &MockUpstream) -> String {
    let base = upstream.start().await;
    spawn(server::routes::router(livechess_client(&base))).await
}

pub fn client() -> Client {
    Client::new()
}

/// Three rounds: round 1 with two boards, round 2 empty, round 3 with one board.
pub fn seed_tournament(mock: &MockUpstream) {
    mock.json(
        "tournament.json",
        json!({
            "id": TOURNAMENT_ID,
            "name": "Test Open",
            "location": "Oslo",
            "country": "NOR",
            "website": null,
            "rules": "STANDARD",
            "chess960": "NO_960",
            "timecontrol": "90+30",
            "rounds": [
                {"count": 2, "live": 0},
                {"count": 0, "live": 0},
                {"count": 1, "live": 1}
            ],
            "eboards": []
        }),
    );

    mock.json(
        "round-1/index.json",
        json!({
            "date": "2024-06-01",
            "pairings": [
                {
                    "white": {"fname": "Magnus", "mname": null, "lname": "Carlsen", "title": "GM",
                              "federation": "NOR", "gender": "MALE", "fideid": 1503014},
                    "black": {"fname": "Alireza", "mname": null, "lname": "Firouzja", "title": "GM",
                              "federation": "FRA", "gender": "MALE", "fideid": 12573981},
                    "result": "WHITEWIN",
                    "live": false
                },
                {
                    "white": {"fname": null, "mname": null, "lname": null, "title": null,
                              "federation": null, "gender": null, "fideid": null},
                    "black": {"fname": null, "mname": null, "lname": "Smith", "title": null,
                              "federation": null, "gender": null, "fideid": null},
                    "result": "DRAW",
                    "live": false
                }
            ]
        }),
    );

    mock.json(
        "round-3/index.json",
        json!({
            "date": "2024-06-03",
            "pairings": [
                {
                    "white": {"fname": "Hikaru", "lname": "Nakamura"},
                    "black": {"fname": "Magnus", "lname": "Carlsen"},
                    "result": "*",
                    "live": true
                }
            ]
        }),
    );

    mock.json(
        "round-1/game-1.json",
        json!({
            "live": false, "serialNr": "1", "firstMove": 1717236000000i64, "chess960": 518,
            "result": "WHITEWIN",
            "moves": ["e4 5400+3", "e5 5390+10", "Nf3 5380+23"]
        }),
    );
    mock.json(
        "round-1/game-2.json",
        json!({
            "live": false, "serialNr": "2", "firstMove": 1717236000000i64, "chess960": 518,
            "result": "DRAW",
            "moves": ["d4 5400", "d5"]
        }),
    );
    mock.json(
        "round-3/game-1.json",
        json!({
            "live": true, "serialNr": "3", "firstMove": 1717408800000i64, "chess960": 518,
            "result": null,
            "moves": ["c4 5400+1"]
        }),
    );
}
