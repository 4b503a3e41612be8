use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber for an embedding binary.
///
/// Services and adapters emit info-level events; `RUST_LOG` overrides the
/// default filter. Output is structured JSON for log collectors.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_target(true).with_ansi(false))
        .init();
}
