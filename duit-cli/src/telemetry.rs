use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. `RUST_LOG` overrides the default
/// filter. Output goes to stderr so replies on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,duit=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
