use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target prefix shared by the binary and every `enterprise_*` library.
const TARGET: &str = "enterprise";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    /// No output at all
    Off,
    Error,
    Warn,
    Info,
    Debug,
    /// Everything, dependencies included
    Trace,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }

    /// `EnvFilter` directives. Dependencies stay silent below `trace`.
    pub(crate) fn directives(self) -> String {
        let filter = self.level_filter();

        match self {
            LogLevel::Off | LogLevel::Trace => filter.to_string(),
            _ => format!("{TARGET}={filter},off"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogStyle {
    /// Human readable lines, colored on a terminal
    Text,
    /// One JSON object per event
    Json,
}

/// Installs the process-wide subscriber writing to stdout.
pub(crate) fn init(level: LogLevel, style: LogStyle) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level.directives())?;

    let text = (style == LogStyle::Text)
        .then(|| tracing_subscriber::fmt::layer().with_ansi(atty::is(atty::Stream::Stdout)));

    let json = (style == LogStyle::Json).then(|| tracing_subscriber::fmt::layer().json());

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()?;

    Ok(())
}
