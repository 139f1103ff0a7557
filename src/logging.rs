use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }

    /// `-v`/`--verbose` and `-q`/`--quiet`; the last one given wins.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut v = Self::Normal;
        for a in args {
            match a.as_ref() {
                "-v" | "--verbose" => v = Self::Verbose,
                "-q" | "--quiet" => v = Self::Quiet,
                _ => {}
            }
        }
        v
    }
}

/// `RUST_LOG`, when set, wins over `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!(
        "rollbookd={},tower_http={}",
        verbosity.level(),
        verbosity.level()
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
