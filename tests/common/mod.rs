//! Shared helpers: run the full app in-process on an ephemeral port.

use product_crud_api::transport;
use product_crud_api::MemoryProductStore;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct TestApp {
    pub base_url: String,
    pub store: Arc<MemoryProductStore>,
    pub client: reqwest::Client,
    server: JoinHandle<()>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryProductStore::new());
        let app_state = transport::http::AppState::new(store.clone());
        let router = transport::http::build_app(app_state);

        // Bind to an ephemeral port so tests can run in parallel.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            store,
            client: reqwest::Client::new(),
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}
