use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global tracing subscriber. `COUNTER_LOG` overrides `RUST_LOG`.
pub fn init_logging() {
    let filter = std::env::var("COUNTER_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new("info"),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
