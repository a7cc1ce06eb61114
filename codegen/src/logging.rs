//! Logging setup of the `enumgen` binary.
//!
//! The filter is read from `ENUMGEN_LOG`, falling back to `RUST_LOG` and then to `info`.
//! Values use the `RUST_LOG` syntax, e.g. `ENUMGEN_LOG=enums_codegen=debug`.

use tracing_subscriber::EnvFilter;

fn build_filter() -> EnvFilter {
    match std::env::var("ENUMGEN_LOG") {
        Ok(value) => EnvFilter::builder().parse_lossy(value),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Installs the global subscriber. All output goes to stderr.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
