use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per line, for hosted log collectors.
    Json,
}

/// `RUST_LOG` wins; otherwise our own events at info, or debug when verbose.
fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "smile_desk=debug,info"
    } else {
        "smile_desk=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    // 日誌寫到 stderr，stdout 留給訊息與連結
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let layer = match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .init();
}
