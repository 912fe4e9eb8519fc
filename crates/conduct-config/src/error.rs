use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `CONDUCT_*` variable could not be read into `ConductConfig`.
    #[error("cannot read conduct configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
