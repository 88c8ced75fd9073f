use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{FrameSize, WindowOffset};
use crate::paths;

/// Delimiter between package path segments.
pub const PACKAGE_PATH_DELIMITER: char = ';';

const DEFAULT_SCRIPT_FILE: &str = "$WORKDIR/scripts/main.lua";
const ENV_PREFIX: &str = "SIMPLAYER";

/// Launch settings for one simulator run.
///
/// Constructed with defaults (or via [`ProjectConfig::load`]), adjusted
/// through the setters during startup, then read-only for the rest of
/// the run. All stored paths are kept in platform-canonical form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    project_dir: String,
    script_file: String,
    package_path: String,
    frame_size: FrameSize,
    frame_scale: f32,
    show_console: bool,
    load_precompiled_framework: bool,
    window_offset: Option<WindowOffset>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let mut config = Self {
            project_dir: String::new(),
            script_file: DEFAULT_SCRIPT_FILE.to_string(),
            package_path: String::new(),
            frame_size: FrameSize::new(320, 480),
            frame_scale: 1.0,
            show_console: true,
            load_precompiled_framework: true,
            window_offset: None,
        };
        config.normalize();
        config
    }
}

impl ProjectConfig {
    /// Loads settings from an optional file layered with `SIMPLAYER_*`
    /// environment overrides, then normalizes and validates the result.
    ///
    /// Keys absent from both sources keep their defaults, so a partial
    /// settings file is fine.
    pub fn load(settings_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = settings_file {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let mut config: ProjectConfig = settings.try_deserialize()?;
        config.normalize();
        config.validate()?;
        tracing::debug!("Loaded project configuration: {:?}", config);
        Ok(config)
    }

    pub fn project_dir(&self) -> &str {
        &self.project_dir
    }

    // Sets the project directory; the stored form is separator-normalized
    // with exactly one trailing separator.
    pub fn set_project_dir(&mut self, project_dir: &str) {
        self.project_dir = paths::ensure_trailing_separator(&paths::normalize(project_dir));
    }

    pub fn script_file(&self) -> &str {
        &self.script_file
    }

    pub fn set_script_file(&mut self, script_file: &str) {
        self.script_file = paths::normalize(script_file);
    }

    /// Path to the entry script with `$WORKDIR` resolved against the
    /// project directory.
    pub fn script_file_path(&self) -> String {
        paths::resolve_workdir(&self.script_file, &self.project_dir)
    }

    pub fn package_path(&self) -> &str {
        &self.package_path
    }

    pub fn set_package_path(&mut self, package_path: &str) {
        self.package_path = paths::normalize(package_path);
    }

    /// The package path rebuilt from its normalized, non-empty segments.
    pub fn normalized_package_path(&self) -> String {
        self.package_paths()
            .join(&PACKAGE_PATH_DELIMITER.to_string())
    }

    /// Splits the package path into its normalized segments, in order.
    ///
    /// Empty segments are dropped here; [`ProjectConfig::validate`]
    /// reports them as errors instead.
    pub fn package_paths(&self) -> Vec<String> {
        if self.package_path.is_empty() {
            return Vec::new();
        }
        let mut segments = Vec::new();
        for segment in self.package_path.split(PACKAGE_PATH_DELIMITER) {
            if segment.is_empty() {
                tracing::warn!("Dropping empty package path segment");
                continue;
            }
            segments.push(paths::normalize(segment));
        }
        segments
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    // Sets the frame size, rejecting zero width or height.
    pub fn set_frame_size(&mut self, frame_size: FrameSize) -> Result<(), ConfigError> {
        if frame_size.width == 0 || frame_size.height == 0 {
            return Err(ConfigError::InvalidFrameSize {
                width: frame_size.width,
                height: frame_size.height,
            });
        }
        self.frame_size = frame_size;
        Ok(())
    }

    pub fn is_landscape_frame(&self) -> bool {
        self.frame_size.width > self.frame_size.height
    }

    pub fn frame_scale(&self) -> f32 {
        self.frame_scale
    }

    // Sets the window scale multiplier, rejecting non-positive values.
    pub fn set_frame_scale(&mut self, frame_scale: f32) -> Result<(), ConfigError> {
        if frame_scale <= 0.0 || !frame_scale.is_finite() {
            return Err(ConfigError::InvalidFrameScale(frame_scale));
        }
        self.frame_scale = frame_scale;
        Ok(())
    }

    pub fn is_show_console(&self) -> bool {
        self.show_console
    }

    pub fn set_show_console(&mut self, show_console: bool) {
        self.show_console = show_console;
    }

    pub fn is_load_precompiled_framework(&self) -> bool {
        self.load_precompiled_framework
    }

    pub fn set_load_precompiled_framework(&mut self, load_precompiled_framework: bool) {
        self.load_precompiled_framework = load_precompiled_framework;
    }

    /// `None` means the window manager picks the position.
    pub fn window_offset(&self) -> Option<WindowOffset> {
        self.window_offset
    }

    pub fn set_window_offset(&mut self, window_offset: Option<WindowOffset>) {
        self.window_offset = window_offset;
    }

    /// Checks every invariant the setters enforce, for values that came
    /// in through deserialization instead of the setters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_size.width == 0 || self.frame_size.height == 0 {
            return Err(ConfigError::InvalidFrameSize {
                width: self.frame_size.width,
                height: self.frame_size.height,
            });
        }
        if self.frame_scale <= 0.0 || !self.frame_scale.is_finite() {
            return Err(ConfigError::InvalidFrameScale(self.frame_scale));
        }
        if !self.package_path.is_empty() {
            for (index, segment) in self.package_path.split(PACKAGE_PATH_DELIMITER).enumerate() {
                if segment.is_empty() {
                    return Err(ConfigError::EmptyPackageSegment { index });
                }
            }
        }
        Ok(())
    }

    /// Rewrites all stored paths to `'/'` separators, the form the
    /// script engine consumes regardless of platform.
    pub fn normalize_unix_style(&mut self) {
        self.project_dir = paths::normalize_with(&self.project_dir, '/');
        self.script_file = paths::normalize_with(&self.script_file, '/');
        self.package_path = paths::normalize_with(&self.package_path, '/');
    }

    fn normalize(&mut self) {
        if !self.project_dir.is_empty() {
            self.project_dir =
                paths::ensure_trailing_separator(&paths::normalize(&self.project_dir));
        }
        self.script_file = paths::normalize(&self.script_file);
        self.package_path = paths::normalize(&self.package_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.script_file(), paths::normalize(DEFAULT_SCRIPT_FILE));
        assert_eq!(config.package_path(), "");
        assert_eq!(config.frame_size(), FrameSize::new(320, 480));
        assert_eq!(config.frame_scale(), 1.0);
        assert!(config.is_show_console());
        assert!(config.is_load_precompiled_framework());
        assert_eq!(config.window_offset(), None);
        assert!(!config.is_landscape_frame());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_script_file_path_resolves_workdir() {
        let mut config = ProjectConfig::default();
        config.set_project_dir("/home/user/proj");
        assert_eq!(
            config.script_file_path(),
            paths::normalize("/home/user/proj/scripts/main.lua")
        );
    }

    #[test]
    fn test_set_project_dir_appends_trailing_separator() {
        let mut config = ProjectConfig::default();
        config.set_project_dir("/home/user/proj");
        let with_separator = config.project_dir().to_string();
        assert!(with_separator.ends_with(paths::DIRECTORY_SEPARATOR));

        config.set_project_dir(&with_separator);
        assert_eq!(config.project_dir(), with_separator);
    }

    #[test]
    fn test_set_frame_size_rejects_zero_dimensions() {
        let mut config = ProjectConfig::default();
        assert!(matches!(
            config.set_frame_size(FrameSize::new(0, 480)),
            Err(ConfigError::InvalidFrameSize { .. })
        ));
        assert!(matches!(
            config.set_frame_size(FrameSize::new(320, 0)),
            Err(ConfigError::InvalidFrameSize { .. })
        ));
        assert_eq!(config.frame_size(), FrameSize::new(320, 480));
    }

    #[test]
    fn test_landscape_detection() {
        let mut config = ProjectConfig::default();
        config.set_frame_size(FrameSize::new(320, 480)).unwrap();
        assert!(!config.is_landscape_frame());
        config.set_frame_size(FrameSize::new(480, 320)).unwrap();
        assert!(config.is_landscape_frame());
    }

    #[test]
    fn test_set_frame_scale_rejects_non_positive_values() {
        let mut config = ProjectConfig::default();
        assert!(matches!(
            config.set_frame_scale(0.0),
            Err(ConfigError::InvalidFrameScale(_))
        ));
        assert!(matches!(
            config.set_frame_scale(-1.0),
            Err(ConfigError::InvalidFrameScale(_))
        ));
        assert!(matches!(
            config.set_frame_scale(f32::NAN),
            Err(ConfigError::InvalidFrameScale(_))
        ));
        config.set_frame_scale(2.0).unwrap();
        assert_eq!(config.frame_scale(), 2.0);
    }

    #[test]
    fn test_package_paths_are_split_and_normalized() {
        let mut config = ProjectConfig::default();
        config.set_package_path("a/path;b\\path");
        assert_eq!(
            config.package_paths(),
            vec![paths::normalize("a/path"), paths::normalize("b/path")]
        );
        assert_eq!(
            config.normalized_package_path(),
            format!(
                "{};{}",
                paths::normalize("a/path"),
                paths::normalize("b/path")
            )
        );
    }

    #[test]
    fn test_package_paths_drop_empty_segments() {
        let mut config = ProjectConfig::default();
        config.set_package_path("a;;b");
        assert_eq!(config.package_paths(), vec!["a".to_string(), "b".to_string()]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPackageSegment { index: 1 })
        ));
    }

    #[test]
    fn test_normalize_unix_style() {
        let mut config = ProjectConfig::default();
        config.set_project_dir("/home/user/proj");
        config.set_package_path("a\\path;b/path");
        config.normalize_unix_style();
        assert_eq!(config.project_dir(), "/home/user/proj/");
        assert_eq!(config.package_path(), "a/path;b/path");
        assert!(!config.script_file().contains('\\'));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ProjectConfig = serde_json::from_str(r#"{"frame_scale": 2.0}"#).unwrap();
        assert_eq!(config.frame_scale(), 2.0);
        assert_eq!(config.frame_size(), FrameSize::new(320, 480));
        assert!(config.is_show_console());
    }

    #[test]
    fn test_load_reads_settings_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
frame_scale = 2.0
package_path = "a/path;b/path"
show_console = false

[frame_size]
width = 480
height = 320

[window_offset]
x = 10
y = 20
"#,
        )
        .unwrap();

        let config = ProjectConfig::load(Some(&path)).unwrap();
        assert_eq!(config.frame_size(), FrameSize::new(480, 320));
        assert!(config.is_landscape_frame());
        assert_eq!(config.frame_scale(), 2.0);
        assert!(!config.is_show_console());
        assert_eq!(config.window_offset(), Some(WindowOffset::new(10, 20)));
        assert_eq!(config.package_paths().len(), 2);
        // Keys absent from the file keep their defaults.
        assert!(config.is_load_precompiled_framework());
    }

    #[test]
    fn test_load_rejects_invalid_frame_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[frame_size]\nwidth = 0\nheight = 480\n").unwrap();

        assert!(matches!(
            ProjectConfig::load(Some(&path)),
            Err(ConfigError::InvalidFrameSize { .. })
        ));
    }
}
