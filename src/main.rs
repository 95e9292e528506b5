use std::fs;

use clap::Parser;
use grapher::{
    compile,
    interpreter::evaluator::core::evaluate,
    plot::{Viewport, sample},
    session::{equation::EquationState, list::EquationList},
};

/// grapher evaluates and samples single-variable equations in `x`, such as
/// `2sin(x)+3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells grapher to read equations from a file, one per line, instead of
    /// taking a single equation.
    #[arg(short, long)]
    file: bool,

    /// Value of `x` to evaluate at.
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    x: f32,

    /// Print a table of samples across the x range instead of one value.
    #[arg(short, long)]
    sample: bool,

    /// Lower end of the sampled x range.
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    x_min: f32,

    /// Upper end of the sampled x range.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    x_max: f32,

    /// Number of samples across the x range.
    #[arg(long, default_value_t = 21)]
    columns: usize,

    /// Log each commit and print syntax trees.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                                            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                                      &args.contents);
                                                            std::process::exit(1);
                                                        });
        run_file(&script, &args)
    } else {
        run_single(&args.contents, &args)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Evaluates or samples one equation.
fn run_single(source: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let expr = compile(source)?;
    if args.verbose {
        print!("{expr}");
    }

    if args.sample {
        let viewport = Viewport::new((args.x_min, args.x_max), Viewport::default().y_range())?;
        for point in sample(&expr, &viewport, args.columns)? {
            println!("{}\t{}", point.x, point.y);
        }
    } else {
        println!("{}", evaluate(&expr, args.x));
    }
    Ok(())
}

/// Commits every non-empty line as an equation, the way an editor session
/// would, and reports each one's value at `x`.
fn run_file(script: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut equations = EquationList::new();
    for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let equation = equations.add();
        line.chars().for_each(|c| equation.editor_mut().insert(c));
    }
    equations.commit_selected();

    for (index, equation) in equations.iter().enumerate() {
        match (equation.state(), equation.evaluate(args.x)) {
            (EquationState::Valid, Some(value)) => {
                println!("{}: {} = {value}", index + 1, equation.text());
            },
            _ => {
                let reason = equation.error()
                                     .map_or_else(|| "not committed".to_string(), ToString::to_string);
                println!("{}: {} is invalid: {reason}", index + 1, equation.text());
            },
        }
    }
    Ok(())
}
