use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1 pixel")]
    ZeroWidth,
    #[error("aspect ratio must be a positive finite number, got {0}")]
    BadAspectRatio(f64),
    #[error("samples per pixel must be at least 1")]
    ZeroSamples,
    #[error("max depth must be at least 1")]
    ZeroDepth,
    #[error("vertical field of view must lie strictly between 0 and 180 degrees, got {0}")]
    BadFieldOfView(f64),
    #[error("focal length must be a positive finite number, got {0}")]
    BadFocalLength(f64),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
