/// Common test utilities for adapter integration tests
///
/// Spins up the mock bank backend in-process on an ephemeral port and
/// wires an `ApiClient` (with an in-memory session store) against it.
use std::sync::Arc;

use backend_mock::BankState;
use mankat_client::{ApiClient, ClientConfig, MemoryStore, SessionCache};

pub const DEMO_EMAIL: &str = "demo@mankat.dev";
pub const DEMO_PASSWORD: &str = "password";

pub struct TestEnvironment {
    pub client: ApiClient<MemoryStore>,
    pub base_url: String,
    _server: tokio::task::JoinHandle<()>,
}

impl TestEnvironment {
    pub async fn new() -> anyhow::Result<Self> {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = Arc::new(BankState::seeded());
        let (addr, server) = backend_mock::spawn_server(state).await?;
        let base_url = format!("http://{}", addr);

        let config = ClientConfig {
            api_base_url: base_url.clone(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config, SessionCache::new(MemoryStore::new()));

        Ok(Self {
            client,
            base_url,
            _server: server,
        })
    }

    pub async fn login_demo(&self) -> anyhow::Result<()> {
        self.client.login(DEMO_EMAIL, DEMO_PASSWORD).await?;
        Ok(())
    }
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> anyhow::Result<ApiClient<MemoryStore>> {
    // bind and immediately drop a listener to find a dead port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = ClientConfig {
        api_base_url: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    Ok(ApiClient::new(&config, SessionCache::new(MemoryStore::new())))
}
