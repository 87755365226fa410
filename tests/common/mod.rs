//! Shared test utilities: fixtures, a scripted gateway and the mock store.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use showcase::config::Config;
use showcase::gateway::{AppGateway, FetchFailure};
use showcase::model::{App, AppStatus, AppType};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn app(id: &str, status: AppStatus, created_at: &str) -> App {
    App {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: format!("Description of {}", id),
        status,
        app_type: AppType::Web,
        url: None,
        app_store_url: None,
        image_url: None,
        created_at: created_at.to_string(),
    }
}

/// Config pointing at `base_url` with a test key.
pub fn store_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.store.base_url = base_url.to_string();
    config.store.anon_key = Some("test-anon-key".to_string());
    config.defaults.timeout_seconds = 5;
    config.defaults.connect_timeout_seconds = 2;
    config
}

/// One scripted gateway answer.
pub struct Step {
    result: Result<Vec<App>, FetchFailure>,
    gate: Option<oneshot::Receiver<()>>,
}

impl Step {
    pub fn ok(apps: Vec<App>) -> Self {
        Self {
            result: Ok(apps),
            gate: None,
        }
    }

    pub fn err(message: &str) -> Self {
        Self {
            result: Err(FetchFailure::new(message)),
            gate: None,
        }
    }

    /// Hold the answer until the returned sender fires.
    pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.gate = Some(rx);
        (self, tx)
    }
}

/// Gateway answering from a queue of [`Step`]s.
///
/// An exhausted queue answers with an empty list.
#[derive(Default)]
pub struct ScriptedGateway {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedGateway {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, step: Step) {
        self.steps.lock().push_back(step);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppGateway for ScriptedGateway {
    async fn fetch_all_apps(&self) -> Result<Vec<App>, FetchFailure> {
        let step = self.steps.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(step) = step else {
            return Ok(Vec::new());
        };
        if let Some(gate) = step.gate {
            let _ = gate.await;
        }
        step.result
    }
}

/// Yield until `gateway` has been called `n` times.
pub async fn wait_for_calls(gateway: &ScriptedGateway, n: usize) {
    while gateway.calls() < n {
        tokio::task::yield_now().await;
    }
}
