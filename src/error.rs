use thiserror::Error;

// Configuration error type

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid frame size {width}x{height}: both dimensions must be positive")]
    InvalidFrameSize { width: u32, height: u32 },
    #[error("Invalid frame scale {0}: must be positive and finite")]
    InvalidFrameScale(f32),
    #[error("Package path segment {index} is empty")]
    EmptyPackageSegment { index: usize },
    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
