use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] clusterver_config::ConfigError),

    #[error("version resolution failed")]
    Operation(#[from] clusterver_operations::OperationError),

    #[error("failed to render output")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
