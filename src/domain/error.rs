use thiserror::Error;

/// Errors returned by a parameter fetcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Parameter not found: {name}")]
    NotFound { name: String },

    #[error("Parameter {name} has no value")]
    MissingValue { name: String },

    #[error("Parameter store error: {message}")]
    Service { message: String },
}

impl FetchError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn missing_value(name: impl Into<String>) -> Self {
        Self::MissingValue { name: name.into() }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("failed to retrieve key {key} from parameter store: {source}")]
    Fetch {
        key: String,
        #[source]
        source: FetchError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn fetch(key: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            key: key.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Key whose refresh failed, if this is a fetch error
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Fetch { key, .. } => Some(key),
            Self::Configuration { .. } => None,
        }
    }

    /// Returns true when the remote store reported the parameter as missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Fetch {
                source: FetchError::NotFound { .. },
                ..
            }
        )
    }
}
