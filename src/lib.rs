pub mod error;
pub mod geometry;
pub mod logging;
pub mod paths;
pub mod project;
pub mod screen;

pub use error::ConfigError;

pub use geometry::{FrameSize, WindowOffset};
pub use project::ProjectConfig;
pub use screen::{ScreenSizePreset, ScreenSizeTable};
