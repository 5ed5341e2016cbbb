use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    FmtSubscriber,
};

fn create_filter(verbose: Option<u8>) -> anyhow::Result<EnvFilter> {
    let mut extreme_trace = false;

    #[allow(clippy::wildcard_in_or_patterns)]
    let level_filter = match verbose {
        None | Some(0) => LevelFilter::INFO,
        Some(1) => LevelFilter::DEBUG,
        Some(2) => LevelFilter::TRACE,
        Some(3) | _ => {
            extreme_trace = true;
            LevelFilter::TRACE
        }
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level_filter.into());

    if !extreme_trace {
        // alias collisions are expected in large catalogs
        filter = filter.add_directive("emoji::index=info".parse()?);
    }

    Ok(filter)
}

/// Logs to stderr, leaving stdout for results
pub fn init(verbose: Option<u8>) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(create_filter(verbose)?)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
