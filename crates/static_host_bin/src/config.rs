use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_WORKERS: usize = 2;
const DEFAULT_ROOT: &str = "public";

pub struct Config {
    pub workers: usize,
    pub root: PathBuf,
}

impl Config {
    pub fn new() -> Result<Config, Box<dyn std::error::Error>> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, Box<dyn std::error::Error>> {
        let mut workers = match lookup("STATIC_HOST_WORKERS") {
            Some(workers) => workers.trim().parse()?,
            None => DEFAULT_WORKERS,
        };
        let mut root = lookup("STATIC_HOST_ROOT").unwrap_or_default();

        if workers == 0 {
            workers = 1;
        }

        if root.trim().is_empty() {
            root = DEFAULT_ROOT.to_string();
        }

        Ok(Config {
            workers,
            root: PathBuf::from(root),
        })
    }
}
