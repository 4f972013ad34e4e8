use std::path::PathBuf;

const DEFAULT_MATERIALS_DIR: &str = "summaries";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the per-session PDF summaries
    pub materials_dir: PathBuf,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_filter = std::env::var("MFIN_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            materials_dir: PathBuf::from(env_var_or("MFIN_MATERIALS_DIR", DEFAULT_MATERIALS_DIR)),
            log_filter,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
