use tracing::Level;

/// Installs the global tracing subscriber at INFO level.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Installs the global tracing subscriber at the given level.
///
/// Panics if a subscriber is already installed, so call it once from the
/// host application's startup path.
pub fn init_with_level(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}
