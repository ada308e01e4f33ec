use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    path::PathBuf,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, Layer};

/// Where and how the reminder job writes its log.
///
/// The job is normally started by cron or a CI schedule, so stdout is the
/// default sink and the other sinks are opt-in.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,notion=debug`.
    #[serde(default = "LogConfig::default_filters")]
    pub filters: String,

    #[serde(default = "LogConfig::default_formatter")]
    #[serde_as(as = "DisplayFromStr")]
    pub formatter: LogFormatter,

    #[serde(default = "LogConfig::default_stdout")]
    pub stdout: bool,

    #[serde(default)]
    pub stderr: bool,

    #[serde(default)]
    pub journald: bool,

    /// Append log lines to this file as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filters: Self::default_filters(),
            formatter: Self::default_formatter(),
            stdout: Self::default_stdout(),
            stderr: false,
            journald: false,
            file: None,
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub fn default_filters() -> String { "info".to_string() }

    #[inline]
    #[must_use]
    pub const fn default_formatter() -> LogFormatter { LogFormatter::Pretty }

    #[inline]
    #[must_use]
    pub const fn default_stdout() -> bool { true }

    /// Installs the global subscriber. Must be called at most once per
    /// process.
    pub fn registry(&self) {
        let Self { filters, formatter, stdout, stderr, journald, file } = self;

        tracing_subscriber::registry()
            .with(tracing_subscriber::filter::EnvFilter::new(filters.as_str()))
            .with(stdout.then(|| Sink::Stdout.layer(*formatter)).flatten())
            .with(stderr.then(|| Sink::Stderr.layer(*formatter)).flatten())
            .with(journald.then(|| Sink::Journald.layer(*formatter)).flatten())
            .with(file.clone().and_then(|path| Sink::File(path).layer(*formatter)))
            .init();
    }
}

#[derive(Clone, Debug)]
enum Sink {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl Sink {
    fn layer<S>(self, formatter: LogFormatter) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
    where
        S: tracing::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt = tracing_subscriber::fmt::layer().with_target(true);

        match (self, formatter) {
            (Self::Journald, _) => Some(tracing_journald::layer().ok()?.boxed()),
            (Self::Stdout, LogFormatter::Pretty) => {
                Some(fmt.with_writer(std::io::stdout).pretty().boxed())
            }
            (Self::Stdout, LogFormatter::Json) => {
                Some(fmt.with_writer(std::io::stdout).json().flatten_event(true).boxed())
            }
            (Self::Stderr, LogFormatter::Pretty) => {
                Some(fmt.with_writer(std::io::stderr).pretty().boxed())
            }
            (Self::Stderr, LogFormatter::Json) => {
                Some(fmt.with_writer(std::io::stderr).json().flatten_event(true).boxed())
            }
            (Self::File(path), formatter) => {
                // An unwritable log file only drops this sink.
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                match formatter {
                    LogFormatter::Pretty => Some(fmt.with_ansi(false).with_writer(file).boxed()),
                    LogFormatter::Json => {
                        Some(fmt.with_writer(file).json().flatten_event(true).boxed())
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LogFormatter {
    Pretty,
    Json,
}

impl FromStr for LogFormatter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Ok(Self::Pretty)
        }
    }
}

impl Display for LogFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}
