use std::env;
use std::fs;
use std::process::ExitCode;

use tspbb::{parse_distance_file, solve, RunConfig, SolverError};

fn main() -> ExitCode {
    env_logger::builder().format_timestamp(None).init();

    let mut args = env::args();
    let _argv0 = args.next();
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("usage: tspbb <distance-file>");
            return ExitCode::from(2);
        }
    };

    match run(&path) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tspbb: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run(path: &str) -> Result<ExitCode, SolverError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SolverError::Usage(format!("couldn't read {:?}: {}", path, e)))?;
    let distance = parse_distance_file(&contents)?;
    let config = RunConfig::from_env();

    log::info!(
        "solving {} cities across {} worker(s), {} thread(s) each",
        distance.n(),
        config.world_size,
        config.threads_per_worker
    );

    match solve(&distance, config)? {
        Some(report) => {
            println!(
                "Optimal tour cost: {}   time: {:.3} s   ranks: {}",
                report.cost,
                report.elapsed.as_secs_f64(),
                report.world_size
            );
            let path_str = report
                .path
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("Optimal path: {}", path_str);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No solution found!");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code_for(e: &SolverError) -> ExitCode {
    match e {
        SolverError::Usage(_) => ExitCode::from(2),
        SolverError::MalformedMatrix(_) => ExitCode::from(3),
        SolverError::ResourceExhausted => ExitCode::from(4),
    }
}
