use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Peers whose `X-Forwarded-For` header is trusted (single IPs or CIDRs).
    pub trusted_proxies: Vec<String>,
    pub max_form_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            trusted_proxies: parse_proxy_list(&env::var("TRUSTED_PROXIES").unwrap_or_default()),
            max_form_bytes: env::var("MAX_FORM_BYTES")
                .unwrap_or_else(|_| "65536".to_string())
                .parse()
                .unwrap_or(65536),
        })
    }
}

/// Split a comma-separated proxy list, dropping blank entries.
fn parse_proxy_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_list_ignores_blanks() {
        assert_eq!(
            parse_proxy_list(" 10.0.0.1 , ,192.168.0.0/16,"),
            vec!["10.0.0.1".to_string(), "192.168.0.0/16".to_string()]
        );
        assert!(parse_proxy_list("").is_empty());
    }
}
