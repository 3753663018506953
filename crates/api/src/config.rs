use std::str::FromStr;

/// Which repository backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Volatile in-process tables. Data is lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "unknown storage backend '{other}' (expected 'postgres' or 'memory')"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Repository backend (default: `postgres`).
    pub storage_backend: StorageBackend,
    /// Connection string; required for the Postgres backend.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Path prefix for resolved audio references (default: `/audio`).
    pub audio_base_path: String,
    /// Load starter scenes and sentences into an empty store (default: `true`).
    pub seed_data: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `postgres`                 |
    /// | `DATABASE_URL`         | (none)                     |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `AUDIO_BASE_PATH`      | `/audio`                   |
    /// | `SEED_DATA`            | `true`                     |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "8080")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_backend: StorageBackend = env_or("STORAGE_BACKEND", "postgres")
            .parse()
            .unwrap_or_else(|e| panic!("STORAGE_BACKEND is invalid: {e}"));

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", "10")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let audio_base_path = normalize_base_path(&env_or("AUDIO_BASE_PATH", "/audio"));

        let seed_data = parse_flag(&env_or("SEED_DATA", "true"))
            .expect("SEED_DATA must be true/false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_backend,
            database_url,
            db_max_connections,
            audio_base_path,
            seed_data,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Strip trailing slashes so `{base}/{id}.mp3` never doubles them.
fn normalize_base_path(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_parses_known_names() {
        assert_eq!("postgres".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert_eq!("PostgreSQL".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert_eq!(" memory ".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
    }

    #[test]
    fn storage_backend_rejects_unknown_names() {
        let err = "mysql".parse::<StorageBackend>().unwrap_err();
        assert!(err.contains("mysql"));
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_origins("http://a.test, http://b.test ,,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn base_path_loses_trailing_slash() {
        assert_eq!(normalize_base_path("/static/audio/"), "/static/audio");
        assert_eq!(normalize_base_path("/audio"), "/audio");
    }
}
