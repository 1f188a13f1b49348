pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("jump size must be a positive finite number, got {size}")]
    InvalidJumpSize { size: f64 },

    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },

    #[error("parameter '{param}' out of range: {value}")]
    OutOfBounds { param: &'static str, value: f64 },

    #[error("invalid link id {id}")]
    UnknownLink { id: u32 },

    #[error("route has {len} points, at most {max} allowed")]
    RouteTooLong { len: usize, max: usize },

    #[error("surface already holds the maximum of {max} links")]
    TooManyLinks { max: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid surface document: {message}")]
    Invalid { message: String },
}

impl Error {
    /// Stable machine-readable code for host bindings.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidJumpSize { .. } => "invalid_size",
            Error::NonFinite { .. } => "non_finite",
            Error::OutOfBounds { .. } => "out_of_range",
            Error::UnknownLink { .. } => "invalid_id",
            Error::RouteTooLong { .. } => "route_too_long",
            Error::TooManyLinks { .. } => "too_many_links",
            Error::Json(_) => "invalid_json",
            Error::Invalid { .. } => "invalid_document",
        }
    }
}
