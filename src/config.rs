use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    /// Report validation failures as 400 with the reason instead of the
    /// generic 500 the site front end expects.
    pub strict_status: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        // Hosting platforms usually inject PORT; the prefixed variable wins.
        let (port_key, port_raw) = ["CONTACT_PORT", "PORT"]
            .into_iter()
            .find_map(|key| std::env::var(key).ok().map(|v| (key, v)))
            .unwrap_or(("CONTACT_PORT", "5000".to_string()));
        let port = parse_port(port_key, &port_raw)?;

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("CONTACT_DB_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_DB_MAX_CONNECTIONS: {e}"))?;

        let strict_status = parse_bool(&env_or("CONTACT_STRICT_STATUS", "false"))
            .ok_or_else(|| "Invalid CONTACT_STRICT_STATUS: expected true or false".to_string())?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            strict_status,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(key: &str, raw: &str) -> Result<u16, String> {
    raw.parse().map_err(|e| format!("Invalid {key}: {e}"))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
