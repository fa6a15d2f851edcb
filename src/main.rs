use collatz_viz::*;
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn print_usage() {
    eprintln!("Collatz sequence engine");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  collatz-viz range <start> <end>   iteration count for every n in [start, end]");
    eprintln!("  collatz-viz sequence <n>          full path from n down to 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COLLATZ_MAX_STEPS   step limit per sequence (default {})", DEFAULT_MAX_STEPS);
    eprintln!("  RUST_LOG            tracing filter, e.g. collatz_viz=debug");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  collatz-viz range 1 10");
    eprintln!("  collatz-viz sequence 27");
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut engine = SequenceEngine::<u64>::from_config(&config);

    match args[1].as_str() {
        "range" => cmd_range(&mut engine, &args[2..]),
        "sequence" => cmd_sequence(&mut engine, &args[2..]),
        _ => {
            eprintln!("unknown command: {}", args[1]);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn cmd_range(engine: &mut SequenceEngine<u64>, args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("usage: collatz-viz range <start> <end>");
        return ExitCode::FAILURE;
    }

    let timer = Instant::now();
    let output = run_range_query(engine, &args[0], &args[1]);
    let elapsed = timer.elapsed();

    match output {
        ListOutput::Rows(rows) => {
            for row in &rows {
                println!("{}", row);
            }
            if let Some(longest) = rows.iter().max_by_key(|r| r.iterations) {
                eprintln!();
                eprintln!("numbers     = {}", rows.len());
                eprintln!("longest     = {} ({} iterations)", longest.number, longest.iterations);
            }
            let stats = engine.stats();
            eprintln!("cache       = {} entries, {} hits, {} misses", engine.len(), stats.hits, stats.misses);
            eprintln!("elapsed     = {:?}", elapsed);
            ExitCode::SUCCESS
        }
        ListOutput::Message(msg) => {
            println!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn cmd_sequence(engine: &mut SequenceEngine<u64>, args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("usage: collatz-viz sequence <n>");
        return ExitCode::FAILURE;
    }

    let plot = match run_sequence_query(engine, &args[0]) {
        Ok(plot) => plot,
        Err(msg) => {
            println!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    println!("{}: n = {}", plot.title, plot.start);
    println!("  {:>6}  {:>20}", plot.x_label, plot.y_label);
    for p in &plot.points {
        println!("  {:>6}  {:>20}", p.step, p.label);
    }
    println!();
    println!("iterations = {}", plot.iterations);
    println!("peak       = {}", plot.peak);
    ExitCode::SUCCESS
}
