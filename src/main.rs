//! siegelz command-line interface
//!
//! Evaluates the Hardy Z function at one or more points and prints one line
//! per point, either CSV (`<t>, <Z>`) or verbose
//! (`For t = <t>, Z(t) = <Z>`). All numeric arguments are validated before
//! any computation starts; any validation failure exits nonzero with no
//! partial output.

use clap::{Parser, ValueEnum};
use siegelz::{
    batch, input, BatchOptions, EvalOptions, Error, PrecisionContext, RemainderTier,
    DEFAULT_PRECISION, MAX_THREADS,
};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TierArg {
    /// Native f64 arithmetic; fastest, least precise
    Fast64,
    /// 128-bit coefficient arithmetic
    Quad128,
    /// Full working precision (default)
    Gabcke,
}

impl From<TierArg> for RemainderTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Fast64 => RemainderTier::Fast64,
            TierArg::Quad128 => RemainderTier::Quad128,
            TierArg::Gabcke => RemainderTier::Gabcke,
        }
    }
}

/// Evaluate the Hardy Z function via the Riemann-Siegel formula
#[derive(Debug, Parser)]
#[command(name = "siegelz", version, about)]
struct Cli {
    /// First t value (digits and at most one '.'; no exponent)
    #[arg(short = 't', long = "start")]
    start: String,

    /// Amount to increment t between evaluations
    #[arg(short = 'i', long = "incr", default_value = "1")]
    incr: String,

    /// Number of t values to evaluate
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    count: u32,

    /// Worker threads per round (capped at 8 and at the count)
    #[arg(short = 'k', long = "threads", default_value_t = 1)]
    threads: usize,

    /// Decimal places of Z(t) in the report
    #[arg(short = 'p', long = "places", default_value_t = 6)]
    places: usize,

    /// Working precision in bits (128..=1024, multiple of 64)
    #[arg(short = 'b', long = "bits", default_value_t = DEFAULT_PRECISION)]
    bits: u32,

    /// Verbose per-line report instead of CSV
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Report wall-clock seconds taken by the compute phase
    #[arg(short = 's', long)]
    seconds: bool,

    /// Remainder evaluation strategy
    #[arg(long = "remainder-tier", value_enum, default_value = "gabcke")]
    remainder_tier: TierArg,

    /// Skip the mod-2pi reduction of the cosine argument
    #[arg(long)]
    no_reduce_mod_2pi: bool,

    /// Recompute the cosine argument from scratch each term instead of the
    /// incremental recurrence
    #[arg(long)]
    direct_cos_arg: bool,

    /// Log the raw remainder and main-sum terms for each point
    #[arg(long)]
    print_remainder: bool,

    /// Print the coefficient tables and exit
    #[arg(long)]
    dump_coefficients: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.print_remainder { "siegelz=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> siegelz::Result<()> {
    if cli.dump_coefficients {
        dump_coefficients();
        return Ok(());
    }

    if cli.count < 1 {
        return Err(Error::invalid_argument("count", "must be at least 1"));
    }
    if cli.threads < 1 {
        return Err(Error::invalid_argument("threads", "must be at least 1"));
    }
    if cli.places < 1 {
        return Err(Error::invalid_argument("places", "must be at least 1"));
    }

    let t_places = input::decimal_places("t", &cli.start)?;
    let i_places = input::decimal_places("incr", &cli.incr)?;
    let t_out_places = t_places.max(i_places);

    // Validates the bit range before any constant is computed.
    let ctx = PrecisionContext::new(cli.bits)?;
    let start = ctx.float_from_str("t", &cli.start)?;
    let incr = ctx.float_from_str("incr", &cli.incr)?;

    let opts = BatchOptions {
        count: cli.count,
        threads: cli.threads.min(MAX_THREADS),
        eval: EvalOptions {
            tier: cli.remainder_tier.into(),
            reduce_mod_2pi: !cli.no_reduce_mod_2pi,
            incremental_recurrence: !cli.direct_cos_arg,
        },
    };

    let started = Instant::now();
    batch::run(&ctx, &start, &incr, &opts, |_, result| {
        if cli.verbose {
            println!(
                "For t = {t:.tp$}, Z(t) = {z:.zp$}",
                t = &result.t,
                z = &result.z,
                tp = t_out_places,
                zp = cli.places
            );
        } else {
            println!(
                "{t:.tp$}, {z:.zp$}",
                t = &result.t,
                z = &result.z,
                tp = t_out_places,
                zp = cli.places
            );
        }
    })?;
    if cli.seconds {
        println!("Compute took {:.6} seconds", started.elapsed().as_secs_f64());
    }
    Ok(())
}

fn dump_coefficients() {
    use siegelz::algorithm::remainder::coefficients::{CJ_COEFF, CJ_COEFF_COUNT};
    use siegelz::algorithm::remainder::gabcke_coefficients::GABCKE_COEFF_STR;

    println!("Haselgrove table ({:?} nonzero terms per Cj):", CJ_COEFF_COUNT);
    for (j, row) in CJ_COEFF.iter().enumerate() {
        println!("C{j}:");
        for coeff in row.iter().take(CJ_COEFF_COUNT[j]) {
            println!("  {coeff:.20}");
        }
    }
    println!("Gabcke table (44 nonzero terms per Cj):");
    for (j, row) in GABCKE_COEFF_STR.iter().enumerate() {
        println!("C{j}:");
        for coeff in row.iter() {
            println!("  {coeff}");
        }
    }
}
