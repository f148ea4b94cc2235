use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Reads configuration from the environment, falling back to development
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|port| port.parse().ok())
                    .unwrap_or(8000),
            },
            database: DatabaseSettings {
                url: env::var("MONGODB_URL")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                name: env::var("DATABASE_NAME").unwrap_or_else(|_| "narration".to_string()),
            },
            cors: CorsSettings::from_list(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        }
    }
}

impl CorsSettings {
    /// Parses a comma-separated origin list, e.g.
    /// `http://localhost:3000, https://app.example.com`.
    pub fn from_list(list: &str) -> Self {
        let allowed_origins = list
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        Self { allowed_origins }
    }

    /// An empty list or a `*` entry allows any origin.
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|origin| origin == "*")
    }
}
