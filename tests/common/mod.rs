//! Shared utilities for integration testing.

use exercise_tracker::config::TrackerConfig;
use exercise_tracker::http::HttpServer;
use exercise_tracker::lifecycle::Shutdown;
use serde_json::Value;
use tokio::net::TcpListener;

/// A tracker served on an ephemeral local port.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a user and return its `_id`.
    pub async fn create_user(&self, username: &str) -> String {
        let res = self
            .client
            .post(self.url("/api/exercise/new-user"))
            .form(&[("username", username)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        body["_id"].as_str().unwrap().to_string()
    }

    /// Submit an exercise form and return the raw response.
    #[allow(dead_code)]
    pub async fn add_exercise(&self, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/api/exercise/add"))
            .form(form)
            .send()
            .await
            .unwrap()
    }

    /// Query a log and return the raw response.
    #[allow(dead_code)]
    pub async fn log(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(self.url("/api/exercise/log"))
            .query(query)
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a tracker on 127.0.0.1 with a fresh store.
pub async fn spawn_server() -> TestServer {
    let mut config = TrackerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        shutdown,
    }
}
