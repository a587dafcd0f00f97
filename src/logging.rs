// src/logging.rs

/// Log to stderr. Quiet unless something goes wrong; `RUST_LOG` raises the
/// level for debugging.
pub fn setup() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}
