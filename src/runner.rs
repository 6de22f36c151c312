use std::{
    env,
    io::{self, Write},
    str::FromStr,
    sync::Arc,
};

use tracing::{info, warn};

use crate::{
    console::{
        handler::Dispatcher,
        input::{ConsoleInput, RandomInput, Session, TokenSource},
        programs::programs::build_programs,
    },
    errors::ExerciseError,
    utils::{
        cpu::is_prime::PrimeMethod,
        plot::{PlotSize, MAX_PLOT_SIDE},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Stdin,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub input_mode: InputMode,
    pub prime_method: PrimeMethod,
    pub random_min: i64,
    pub random_max: i64,
    pub plot: PlotSize,
    pub show_prompts: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Stdin,
            prime_method: PrimeMethod::Trial,
            random_min: -20,
            random_max: 200,
            plot: PlotSize::default(),
            show_prompts: true,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ExerciseError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable lookup. Missing variables take the
    /// default; unparseable ones take the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExerciseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let parse_var = |name: &str, default: String| -> String {
            lookup(name).map(|v| v.trim().to_string()).unwrap_or(default)
        };

        let input_mode = match parse_var("INPUT_MODE", "STDIN".into()).to_uppercase().as_str() {
            "STDIN" | "CONSOLE" => InputMode::Stdin,
            "RANDOM" | "DEMO" => InputMode::Random,
            other => {
                warn!(value = other, "unknown INPUT_MODE, reading stdin");
                InputMode::Stdin
            }
        };

        let method = parse_var("PRIME_NUMBER_METHOD", "TRIAL".into()).to_uppercase();
        let prime_method = match method.as_str() {
            "TRIAL" | "SQRT" => PrimeMethod::Trial,
            "MILLER_RABIN" | "MILLER-RABIN" => PrimeMethod::MillerRabin,
            other => {
                warn!(value = other, "unknown PRIME_NUMBER_METHOD, using trial division");
                PrimeMethod::Trial
            }
        };

        let cfg = Self {
            input_mode,
            prime_method,
            random_min: parse_or(&lookup, "RANDOM_MIN", defaults.random_min),
            random_max: parse_or(&lookup, "RANDOM_MAX", defaults.random_max),
            plot: PlotSize {
                width: parse_or(&lookup, "PLOT_WIDTH", defaults.plot.width),
                height: parse_or(&lookup, "PLOT_HEIGHT", defaults.plot.height),
            },
            show_prompts: parse_or(&lookup, "SHOW_PROMPTS", defaults.show_prompts),
        };

        if cfg.random_min > cfg.random_max {
            return Err(ExerciseError::Config(format!(
                "RANDOM_MIN ({}) is greater than RANDOM_MAX ({})",
                cfg.random_min, cfg.random_max
            )));
        }

        for (name, side) in [("PLOT_WIDTH", cfg.plot.width), ("PLOT_HEIGHT", cfg.plot.height)] {
            if !(1..=MAX_PLOT_SIDE).contains(&side) {
                return Err(ExerciseError::Config(format!(
                    "{} ({}) must be between 1 and {}",
                    name, side, MAX_PLOT_SIDE
                )));
            }
        }

        Ok(cfg)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Debug,
{
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, ?default, "unparseable value, using default");
            default
        }),
    }
}

pub struct ExerciseRunner {
    pub cfg: RunnerConfig,
    pub dispatcher: Arc<Dispatcher>,
}

impl ExerciseRunner {
    pub fn new(cfg: RunnerConfig) -> Self {
        Self::with_dispatcher(cfg, build_programs())
    }

    pub fn with_dispatcher(cfg: RunnerConfig, dispatcher: Dispatcher) -> Self {
        Self { cfg, dispatcher: Arc::new(dispatcher) }
    }

    /// Runs `program` against the console, or against generated values in random mode.
    pub fn run(&self, program: &str) -> Result<(), ExerciseError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.cfg.input_mode {
            InputMode::Stdin => {
                let stdin = io::stdin();
                let mut source = ConsoleInput::new(stdin.lock());
                self.run_with(program, &mut source, &mut out)
            }
            InputMode::Random => {
                let mut source = RandomInput::new(self.cfg.random_min, self.cfg.random_max);
                self.run_with(program, &mut source, &mut out)
            }
        }
    }

    pub fn run_with(
        &self,
        program: &str,
        source: &mut dyn TokenSource,
        out: &mut dyn Write,
    ) -> Result<(), ExerciseError> {
        info!(
            program,
            input = ?self.cfg.input_mode,
            prime_method = self.cfg.prime_method.name(),
            "running program"
        );

        let report = {
            let mut session = Session::new(source, &mut *out, &self.cfg);
            self.dispatcher.dispatch(program, &mut session)?
        };

        out.write_all(&report.to_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let cfg = RunnerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, RunnerConfig::default());
    }

    #[test]
    fn test_variables_override_defaults() {
        let cfg = RunnerConfig::from_lookup(lookup_from(&[
            ("INPUT_MODE", "random"),
            ("PRIME_NUMBER_METHOD", "miller_rabin"),
            ("RANDOM_MIN", "1"),
            ("RANDOM_MAX", "9"),
            ("PLOT_WIDTH", "40"),
            ("PLOT_HEIGHT", " 10 "),
            ("SHOW_PROMPTS", "false"),
        ]))
        .unwrap();
        assert_eq!(cfg.input_mode, InputMode::Random);
        assert_eq!(cfg.prime_method, PrimeMethod::MillerRabin);
        assert_eq!((cfg.random_min, cfg.random_max), (1, 9));
        assert_eq!(cfg.plot, PlotSize { width: 40, height: 10 });
        assert!(!cfg.show_prompts);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let cfg = RunnerConfig::from_lookup(lookup_from(&[
            ("INPUT_MODE", "carrier-pigeon"),
            ("PRIME_NUMBER_METHOD", "guess"),
            ("PLOT_WIDTH", "wide"),
        ]))
        .unwrap();
        assert_eq!(cfg.input_mode, InputMode::Stdin);
        assert_eq!(cfg.prime_method, PrimeMethod::Trial);
        assert_eq!(cfg.plot.width, 60);
    }

    #[test]
    fn test_inverted_random_range_is_rejected() {
        let lookup = lookup_from(&[("RANDOM_MIN", "10"), ("RANDOM_MAX", "1")]);
        let err = RunnerConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(err, ExerciseError::Config(_)));
    }

    #[test]
    fn test_oversized_plot_is_rejected() {
        let err = RunnerConfig::from_lookup(lookup_from(&[("PLOT_WIDTH", "9223372036854775807")]))
            .unwrap_err();
        assert!(matches!(err, ExerciseError::Config(ref m) if m.contains("PLOT_WIDTH")));

        let err = RunnerConfig::from_lookup(lookup_from(&[("PLOT_HEIGHT", "0")])).unwrap_err();
        assert!(matches!(err, ExerciseError::Config(ref m) if m.contains("PLOT_HEIGHT")));

        let cfg = RunnerConfig::from_lookup(lookup_from(&[
            ("PLOT_WIDTH", "1000"),
            ("PLOT_HEIGHT", "1"),
        ]))
        .unwrap();
        assert_eq!(cfg.plot, PlotSize { width: MAX_PLOT_SIDE, height: 1 });
    }

    #[test]
    fn test_run_with_writes_prompt_then_report() {
        let runner = ExerciseRunner::new(RunnerConfig::default());
        let mut src = ConsoleInput::new(Cursor::new("5 3 9 1 7 2 8 6 4 10"));
        let mut out = Vec::new();
        runner.run_with("min_of_10", &mut src, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter 10 integers:\nMinimum = 1\n");
    }

    #[test]
    fn test_run_with_unknown_program() {
        let runner = ExerciseRunner::new(RunnerConfig::default());
        let mut src = ConsoleInput::new(Cursor::new(""));
        let mut out = Vec::new();
        let err = runner.run_with("does_not_exist", &mut src, &mut out).unwrap_err();
        assert!(matches!(err, ExerciseError::UnknownProgram(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_random_mode_feeds_programs() {
        let cfg = RunnerConfig {
            input_mode: InputMode::Random,
            random_min: 1,
            random_max: 9,
            show_prompts: false,
            ..RunnerConfig::default()
        };
        let runner = ExerciseRunner::new(cfg);
        let mut src = RandomInput::new(1, 9);
        let mut out = Vec::new();
        runner.run_with("array_check_prime", &mut src, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().all(|l| l.contains("Prime")));
    }
}
