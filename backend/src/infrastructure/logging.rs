use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Filter from `RUST_LOG`, `info` by default.
///
/// Logs go to stderr: stdout carries the JSON responses.
pub fn init() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  // Ignore "already set" (tests may install their own subscriber first).
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
