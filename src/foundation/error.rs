/// Convenience result type used across the crate.
pub type ImagegenResult<T> = Result<T, ImagegenError>;

/// Top-level error taxonomy. Every variant is fatal for a run.
#[derive(thiserror::Error, Debug)]
pub enum ImagegenError {
    /// Malformed document, missing required settings, or conflicting slide fields.
    #[error("configuration error: {0}")]
    Config(String),

    /// A referenced background, icon, slide image, or font could not be read or decoded.
    #[error("resource error: {context}")]
    Resource {
        /// Which configuration element and path failed.
        context: String,
        /// Underlying IO or decode failure.
        #[source]
        source: anyhow::Error,
    },

    /// Degenerate geometry, such as fitting a zero-sized image.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Rasterization or encoding failure.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagegenError {
    /// Build an [`ImagegenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`ImagegenError::Resource`] value.
    pub fn resource(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Resource {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Build an [`ImagegenError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build an [`ImagegenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
