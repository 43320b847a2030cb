use dotenvy::dotenv;
use std::env;
use yahoo_api::api::YAHOO_BASE_API_URL;

const DEFAULT_WORKERS: usize = 2;

pub struct Config {
    pub workers: usize,
    pub upstream_url: String,
}

impl Config {
    pub fn new() -> Result<Config, Box<dyn std::error::Error>> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, Box<dyn std::error::Error>> {
        let mut workers = match lookup("QUOTE_PROXY_WORKERS") {
            Some(workers) => workers.trim().parse()?,
            None => DEFAULT_WORKERS,
        };
        let mut upstream_url = lookup("QUOTE_PROXY_UPSTREAM").unwrap_or_default();

        if workers == 0 {
            workers = 1;
        }

        if upstream_url.trim().is_empty() {
            upstream_url = YAHOO_BASE_API_URL.to_string();
        }

        let config = Config {
            workers,
            upstream_url,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Box<dyn std::error::Error>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn from_lookup_pass_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.workers, 2);
        assert_eq!(config.upstream_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn from_lookup_pass_overrides() {
        let config = config(&[
            ("QUOTE_PROXY_WORKERS", "8"),
            ("QUOTE_PROXY_UPSTREAM", "http://localhost:9000"),
        ])
        .unwrap();
        assert_eq!(config.workers, 8);
        assert_eq!(config.upstream_url, "http://localhost:9000");
    }

    #[test]
    fn from_lookup_pass_zero_workers_raised() {
        let config =
            config(&[("QUOTE_PROXY_WORKERS", "0"), ("QUOTE_PROXY_UPSTREAM", " ")]).unwrap();
        assert_eq!(config.workers, 1);
        assert_eq!(config.upstream_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn from_lookup_fail_workers_not_a_number() {
        assert!(config(&[("QUOTE_PROXY_WORKERS", "many")]).is_err());
    }
}
