//! Tracing subscriber setup shared by the binaries.

use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so stdout only
/// carries the report.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let mut filter = EnvFilter::from_default_env().add_directive("rcc_cli=info".parse()?);
    if let Some(directive) = &config.log_directive {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}
