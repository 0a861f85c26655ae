use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Read `PORT`, `DATA_FILE` and `STATIC_DIR` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            port,
            data_file: lookup("DATA_FILE")
                .unwrap_or_else(|| "data.txt".to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
        }
    }
}
