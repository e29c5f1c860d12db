//! Common utilities for integration tests

use hubrelay::config::Config;
use hubrelay::di::ServiceContainer;
use hubrelay::server::serve_on;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A relay running in the background until dropped
pub struct RunningRelay {
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl RunningRelay {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for RunningRelay {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Start a relay pointed at `api_url`
pub async fn spawn_relay(api_url: &str) -> RunningRelay {
    spawn_relay_with(Config {
        api_url: api_url.to_string(),
        ..Default::default()
    })
    .await
}

pub async fn spawn_relay_with(config: Config) -> RunningRelay {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let container = ServiceContainer::new(config).unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        serve_on(listener, container, async move {
            rx.await.ok();
        })
        .await
        .unwrap();
    });

    RunningRelay {
        base_url: format!("http://{}", addr),
        shutdown: Some(tx),
    }
}

/// An address with nothing listening on it
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
