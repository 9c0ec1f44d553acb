use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use workload_gen::{generate_file, Distribution, RunConfig, Settings};

/// Workload generator: read/write command streams over a uniform or Zipfian key space.
#[derive(Parser)]
#[command(name = "generate")]
struct Args {
    /// Number of distinct keys (key0..keyN-1), at most 2^24 with zipf [default: 10]
    #[arg(long = "key_count")]
    key_count: Option<u64>,

    /// Probability that an operation is a read, in [0, 1] [default: 0.5]
    #[arg(long = "read_proportion", allow_negative_numbers = true)]
    read_proportion: Option<f64>,

    /// Length of generated write values [default: 4]
    #[arg(long = "value_length")]
    value_length: Option<usize>,

    /// Key popularity distribution [default: uniform]
    #[arg(long, value_enum)]
    distribution: Option<Distribution>,

    /// Number of operations to generate [default: 1000]
    #[arg(long)]
    operations: Option<u64>,

    /// Client invocation prefixed to every line [default: ./client]
    #[arg(long)]
    client: Option<String>,

    /// Seed for reproducible output (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with default settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    output: PathBuf,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            key_count: self.key_count,
            read_proportion: self.read_proportion,
            value_length: self.value_length,
            distribution: self.distribution,
            operations: self.operations,
            client: self.client.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version go to stdout and succeed; everything else is a usage error.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let file_settings = match &args.config {
        Some(path) => {
            let s = Settings::load(path)?;
            tracing::info!(path = %path.display(), "loaded config file");
            s
        }
        None => Settings::default(),
    };

    let config = RunConfig::resolve(args.settings().or(file_settings), args.output)
        .context("invalid configuration")?;

    tracing::info!(
        key_count = config.key_count,
        read_proportion = config.read_proportion,
        value_length = config.value_length,
        distribution = %config.distribution,
        operations = config.operations,
        seeded = config.seed.is_some(),
        "generating workload"
    );

    let summary = generate_file(&config).context("generation aborted")?;

    println!(
        "Generated {} operations into {}",
        summary.total(),
        config.output.display()
    );
    Ok(())
}
