const DEFAULT_DATABASE_PATH: &str = "tournament.db";
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub max_connections: u32,
    pub busy_timeout_ms: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            max_connections: 4,
            busy_timeout_ms: 5_000,
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        Self {
            database_path,
            ..Self::default()
        }
    }

    /// Every in-memory SQLite connection is its own database, so the pool
    /// holds exactly one.
    pub fn in_memory() -> Self {
        Self {
            database_path: IN_MEMORY_DATABASE.to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::from_env(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            store: StoreSettings::in_memory(),
        }
    }
}
