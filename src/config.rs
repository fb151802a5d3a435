use std::{env, net::SocketAddr, path::PathBuf};

/// Process configuration, resolved once at startup so handlers receive
/// capabilities through state instead of reading the environment ad hoc.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    /// Shared secret unlocking the history views. Unset means the history
    /// API denies every request.
    pub access_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let data_path = env::var("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/tracker.json"));

        let access_key = env::var("TRACKER_ACCESS_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            port,
            data_path,
            access_key,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
