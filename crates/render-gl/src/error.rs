use glint_geometry::GeometryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The driver refused to allocate a GPU object.
    #[error("gpu object allocation failed: {0}")]
    Allocation(String),

    #[error("failed to read shader source {path}")]
    ShaderSourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `reload()` on a program built from in-memory sources.
    #[error("shader program has no source paths to reload from")]
    NoReloadSource,

    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cause() {
        let err = RenderError::Allocation("out of memory".into());
        assert!(err.to_string().contains("out of memory"));
        assert!(RenderError::NoReloadSource.to_string().contains("reload"));
    }
}
