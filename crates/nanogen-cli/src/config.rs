use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use nanogen::{DEFAULT_ALPHABET, DEFAULT_LENGTH, GeneratorConfig};
use tracing::level_filters::LevelFilter;

/// Runtime configuration for the `nanogen` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file in the working directory is loaded first), with defaults matching the
/// library's default generator.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nanogen",
    version,
    about = "Mint random identifiers over a custom alphabet"
)]
pub struct CliArgs {
    /// String prepended verbatim to every identifier.
    ///
    /// Environment variable: `ID_PREFIX`
    #[arg(short, long, env = "ID_PREFIX", default_value_t = String::new())]
    pub prefix: String,

    /// Number of random symbols per identifier, excluding the prefix.
    ///
    /// For the `counter` source this is the zero-padded width.
    ///
    /// Environment variable: `ID_LENGTH`
    #[arg(short, long, env = "ID_LENGTH", default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Symbols to draw from: 2 to 64 distinct ASCII characters.
    ///
    /// Environment variable: `ID_ALPHABET`
    #[arg(short, long, env = "ID_ALPHABET", default_value_t = String::from(DEFAULT_ALPHABET))]
    pub alphabet: String,

    /// How many identifiers to print.
    ///
    /// Environment variable: `ID_COUNT`
    #[arg(short, long, env = "ID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Where random bytes come from.
    ///
    /// Environment variable: `ID_SOURCE`
    #[arg(short, long, env = "ID_SOURCE", value_enum, default_value_t = SourceKind::Os)]
    pub source: SourceKind,

    /// Minimum level to log (`off`, `error`, `warn`, `info`, `debug`,
    /// `trace`). `RUST_LOG` directives take precedence.
    ///
    /// Environment variable: `LOG_LEVEL`
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("info"))]
    pub log_level: String,

    /// Log line format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Include the source file and line in every log line.
    ///
    /// Environment variable: `LOG_SOURCE`
    #[arg(long, env = "LOG_SOURCE", default_value_t = false)]
    pub log_source: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Operating system CSPRNG, one system call per refill
    Os,
    /// Thread-local ChaCha CSPRNG seeded from the OS
    Thread,
    /// Deterministic zero-padded counter, for scripts and tests
    Counter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
    pub source: bool,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub generator: GeneratorConfig,
    pub count: usize,
    pub source: SourceKind,
    pub log: LogConfig,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("ID_COUNT must be greater than 0");
        }

        let generator = GeneratorConfig {
            prefix: args.prefix,
            length: args.length,
            alphabet: args.alphabet,
        };
        // The counter ignores the alphabet but still needs a usable width.
        match args.source {
            SourceKind::Counter if generator.length == 0 => {
                bail!("ID_LENGTH must be greater than 0");
            }
            SourceKind::Counter => {}
            SourceKind::Os | SourceKind::Thread => generator
                .validate()
                .context("invalid generator configuration")?,
        }

        let level = args
            .log_level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid LOG_LEVEL `{}`", args.log_level))?;

        Ok(Self {
            generator,
            count: args.count,
            source: args.source,
            log: LogConfig {
                level,
                format: args.log_format,
                source: args.log_source,
            },
        })
    }
}
