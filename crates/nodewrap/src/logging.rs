use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `NODEWRAP_LOG=debug`.
pub const LOG_ENV: &str = "NODEWRAP_LOG";

/// Installs the stderr subscriber. Silent unless [`LOG_ENV`] asks otherwise,
/// so the child's own output stays clean.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
