use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found; please create '{0}' or pass --schedule.")]
    ConfigFileNotFound(String),

    #[error("Required field '{0}' is not found; please set '{0}' in '{1}'.")]
    RequiredFieldNotFound(String, String),

    #[error("Neither ${0} nor $HOME is set; cannot locate config.lua.")]
    HomeNotSet(&'static str),

    #[error("Failed to evaluate '{path}': {message}")]
    LuaRuntime { path: String, message: String },
}
