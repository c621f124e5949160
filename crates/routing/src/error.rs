use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("route pattern '{pattern}' overlaps '{existing}'")]
    DuplicatePattern { pattern: String, existing: String },
    #[error("route name '{name}' is declared twice")]
    DuplicateName { name: String },
    #[error("no route named '{name}'")]
    UnknownRoute { name: String },
    #[error("route '{route}' cannot take '{value}' for parameter '{param}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },
    #[error("route '{route}' needs parameter '{param}'")]
    MissingParam { route: String, param: String },
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
