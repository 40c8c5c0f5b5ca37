//! FILENAME: core/access/src/config.rs
// PURPOSE: Database endpoint configuration from environment variables.

/// Where the database lives. Credentials are NOT part of the config;
/// they come from the login form, per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl ConnectionConfig {
    /// Reads `DB_HOST`, `DB_PORT` and `DB_NAME`, with the documented
    /// defaults `localhost` / `5432` / `postgres`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup,
    /// so the resolution rules stay testable without mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
        let port = lookup("DB_PORT")
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(5432);
        let database = lookup("DB_NAME").unwrap_or_else(|| "postgres".to_string());
        ConnectionConfig {
            host,
            port,
            database,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ConnectionConfig::from_lookup(|_| None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "postgres");
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = ConnectionConfig::from_lookup(|key| match key {
            "DB_HOST" => Some("db.internal".to_string()),
            "DB_PORT" => Some("6543".to_string()),
            "DB_NAME" => Some("capstone".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.database, "capstone");
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = ConnectionConfig::from_lookup(|key| match key {
            "DB_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 5432);
    }
}
