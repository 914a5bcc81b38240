use anyhow::bail;
use boxroom::AllocatorConfig;
use clap::{Parser, ValueEnum};
use core::num::NonZeroU32;

/// How log lines are rendered on stderr.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human readable.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// How the final listing is printed on stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime configuration for the `boxroom` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first), with defaults that produce a small demo run.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "boxroom",
    version,
    about = "Fill an in-memory boxroom with containers and items"
)]
pub struct CliArgs {
    /// Number of containers to create.
    ///
    /// Environment variable: `BOXROOM_CONTAINERS`
    #[arg(long, env = "BOXROOM_CONTAINERS", default_value_t = 3)]
    pub containers: usize,

    /// Number of items to put in each container.
    ///
    /// Environment variable: `BOXROOM_ITEMS_PER_CONTAINER`
    #[arg(long, env = "BOXROOM_ITEMS_PER_CONTAINER", default_value_t = 2)]
    pub items_per_container: usize,

    /// Seed for a reproducible id sequence. Without it ids come from the
    /// thread-local RNG.
    ///
    /// Environment variable: `BOXROOM_SEED`
    #[arg(long, env = "BOXROOM_SEED")]
    pub seed: Option<u64>,

    /// Give up allocating after this many taken candidates in a row. Unset
    /// means never give up.
    ///
    /// Environment variable: `BOXROOM_MAX_ATTEMPTS`
    #[arg(long, env = "BOXROOM_MAX_ATTEMPTS")]
    pub max_attempts: Option<u32>,

    /// Log rendering.
    ///
    /// Environment variable: `BOXROOM_LOG_FORMAT`
    #[arg(long, env = "BOXROOM_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Listing rendering.
    ///
    /// Environment variable: `BOXROOM_OUTPUT`
    #[arg(long, env = "BOXROOM_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub containers: usize,
    pub items_per_container: usize,
    pub total_items: usize,
    pub seed: Option<u64>,
    pub allocator: AllocatorConfig,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.containers == 0 {
            bail!("BOXROOM_CONTAINERS must be greater than 0");
        }

        let allocator = match args.max_attempts {
            None => AllocatorConfig::UNBOUNDED,
            Some(n) => match NonZeroU32::new(n) {
                Some(max) => AllocatorConfig::bounded(max),
                None => bail!("BOXROOM_MAX_ATTEMPTS must be greater than 0 (omit it for no limit)"),
            },
        };

        let total_items = args
            .containers
            .checked_mul(args.items_per_container)
            .ok_or_else(|| anyhow::anyhow!("Overflow in total item count"))?;

        Ok(Self {
            containers: args.containers,
            items_per_container: args.items_per_container,
            total_items,
            seed: args.seed,
            allocator,
            log_format: args.log_format,
            output: args.output,
        })
    }
}
