use anyhow::Context;
use clap::Parser;
use rpncalc::{Evaluator, Number, RpnToken, Tracer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Evaluate a reverse polish notation expression.
///
/// Operands are single digits, operators are '+', '-', 'x' and '/'.
/// Commas only group things visually: `rpncalc 2,3,4+x2/` prints 7.0
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The expression. Several arguments are joined with ','.
    #[arg(required = true, value_name = "EXPR")]
    expr: Vec<String>,
    /// Log more to stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print every token and the resulting stack to stderr.
    #[arg(long)]
    trace: bool,
}

// prints each evaluation step, stdout is reserved for the result
struct StderrTrace;

impl Tracer for StderrTrace {
    fn step(&mut self, pos: usize, token: RpnToken, stack: &[Number]) {
        let stack = stack
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        eprintln!("{:>4} {}  [{}]", pos, token, stack);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = args.expr.join(",");
    let result = if args.trace {
        Evaluator::with_tracer(StderrTrace).eval_str(&input)
    } else {
        rpncalc::evaluate(&input)
    };
    let result = result.with_context(|| format!("failed to evaluate '{}'", input))?;

    println!("{}", result);
    Ok(())
}
