use std::{env, process::ExitCode};
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use Class_Exercises::runner::{ExerciseRunner, RunnerConfig};

fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = env::args().nth(1).unwrap_or_else(|| "help".to_string());

    let cfg = match RunnerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            debug!(error = %e, "invalid configuration");
            eprintln!("🛑 {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runner = ExerciseRunner::new(cfg);

    if let Err(e) = runner.run(&program) {
        debug!(program = %program, error = %e, "program failed");
        eprintln!("🛑 {} failed: {}", program, e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
