/// Startup configuration errors. Any of these aborts the process before the
/// server binds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.missing_variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: &'static str, value: String },
}
