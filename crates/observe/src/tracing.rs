use {std::sync::Once, tracing::level_filters::LevelFilter, tracing_subscriber::EnvFilter};

/// Installs the global tracing subscriber. `env_filter` has similar syntax to
/// env_logger. It is documented at
/// https://docs.rs/tracing-subscriber/0.3/tracing_subscriber/filter/struct.EnvFilter.html
///
/// A `RUST_LOG` environment variable takes precedence over `env_filter`.
/// Output goes through the test harness' capture, so it only shows up for
/// failing tests.
///
/// Can be called multiple times in a row. Later calls are ignored.
pub fn initialize_reentrant(env_filter: &str) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(env_filter)
        });

        // Another subscriber may have been installed outside of this crate.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}
