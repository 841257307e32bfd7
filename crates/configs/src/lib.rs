use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            request_timeout_secs: default_request_timeout(),
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_request_timeout() -> u64 { 30 }
fn default_run_migrations() -> bool { true }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Config file for a service: `CONFIG_PATH`, else `config/<service>.toml`.
pub fn config_path_for(service: &str) -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| format!("config/{service}.toml"))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load the named service's config file (defaults when it is absent),
    /// apply env overrides, then validate.
    pub fn load_for_service(service: &str) -> Result<Self> {
        let path = config_path_for(service);
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate(service)?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self, service: &str) -> Result<()> {
        self.server.normalize_from_env();
        self.server.validate()?;
        self.database.normalize_from_env(service);
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.worker_threads = Some(w);
        }
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("server.request_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Fill the URL from `<SERVICE>_DATABASE_URL`, then `DATABASE_URL`,
    /// when the file left it empty.
    pub fn normalize_from_env(&mut self, service: &str) {
        if !self.url.trim().is_empty() {
            return;
        }
        let scoped = format!("{}_DATABASE_URL", service.to_ascii_uppercase());
        if let Ok(url) = std::env::var(&scoped).or_else(|_| std::env::var("DATABASE_URL")) {
            self.url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in the config file or via DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(url: &str) -> DatabaseConfig {
        DatabaseConfig { url: url.into(), ..DatabaseConfig::default() }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.run_migrations);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.min_connections, 2);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let cfg = parse(
            r#"
            [server]
            port = 9001

            [database]
            url = "postgres://u:p@localhost/clientes"
            max_connections = 4
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.database.max_connections, 4);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert!(cfg.database.validate().is_ok());
    }

    #[test]
    fn accepts_postgres_and_sqlite_urls() {
        assert!(db("postgres://localhost/x").validate().is_ok());
        assert!(db("postgresql://localhost/x").validate().is_ok());
        assert!(db("sqlite::memory:").validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_unknown_scheme() {
        assert!(db("").validate().is_err());
        assert!(db("mysql://localhost/x").validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let mut cfg = db("postgres://localhost/x");
        cfg.min_connections = 5;
        cfg.max_connections = 2;
        assert!(cfg.validate().is_err());
        cfg.min_connections = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let s = ServerConfig { host: "0.0.0.0".into(), port: 4000, ..ServerConfig::default() };
        assert_eq!(s.bind_addr(), "0.0.0.0:4000");
    }
}
