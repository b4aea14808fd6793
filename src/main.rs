use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use angsep::{
    compute_separation_stats, load_catalog, PartitionPolicy, ReductionConfig,
    DEFAULT_CATALOG_CAPACITY, DEFAULT_CATALOG_PATH,
};

const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(DEFAULT_CATALOG_CAPACITY).unwrap();

#[derive(Parser)]
#[command(
    name = "find-angular",
    about = "Average, minimum and maximum angular separation between catalog stars"
)]
struct Cli {
    /// Number of threads to use. Without it the catalog is scanned sequentially.
    #[arg(short = 't', long = "threads", value_name = "N")]
    threads: Option<NonZeroUsize>,

    /// Path to the catalog file (id, RA and Dec in degrees per line).
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Maximum number of catalog records accepted.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: NonZeroUsize,

    /// Give the rows left over by integer division to the last thread
    /// instead of skipping them.
    #[arg(long)]
    cover_remainder: bool,
}

impl Cli {
    fn reduction_config(&self) -> ReductionConfig {
        let partition = if self.cover_remainder {
            PartitionPolicy::CoverRemainder
        } else {
            PartitionPolicy::Truncate
        };
        match self.threads {
            Some(workers) => ReductionConfig::parallel(workers).with_partition(partition),
            None => ReductionConfig::sequential(),
        }
    }
}

/// Accept the historical single-dash `-help` alongside `-h`/`--help`.
fn normalize_args<I>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(|arg| {
        if arg.to_str() == Some("-help") {
            OsString::from("--help")
        } else {
            arg
        }
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let catalog = load_catalog(&cli.catalog, cli.capacity.get())
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;
    println!("{} records read", catalog.len());

    let report = compute_separation_stats(&catalog, &cli.reduction_config())
        .context("angular separation reduction failed")?;
    println!("{report}");

    Ok(())
}
