use std::collections::VecDeque;
use std::io::{BufRead, Write};

use rand::{distributions::Alphanumeric, rngs::ThreadRng, Rng};
use tracing::debug;

use crate::errors::ExerciseError;
use crate::runner::RunnerConfig;
use crate::utils::cpu::matrix::Grid;

/// Where a program's tokens come from.
pub trait TokenSource {
    /// Next whitespace-separated token, `None` once input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>, ExerciseError>;

    /// Next full line without its terminator. Tokens left over from a
    /// partially consumed line are returned first, joined by single spaces.
    fn next_line(&mut self) -> Result<Option<String>, ExerciseError>;
}

pub struct ConsoleInput<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    fn read_raw_line(&mut self) -> Result<Option<String>, ExerciseError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead> TokenSource for ConsoleInput<R> {
    fn next_token(&mut self) -> Result<Option<String>, ExerciseError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            match self.read_raw_line()? {
                Some(line) => self.pending.extend(line.split_whitespace().map(str::to_string)),
                None => return Ok(None),
            }
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, ExerciseError> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(Some(rest.join(" ")));
        }
        self.read_raw_line()
    }
}

/// Demo input: integers drawn uniformly from an inclusive range, lines of
/// random alphanumeric text.
pub struct RandomInput {
    min: i64,
    max: i64,
    rng: ThreadRng,
}

impl RandomInput {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max, rng: rand::thread_rng() }
    }
}

impl TokenSource for RandomInput {
    fn next_token(&mut self) -> Result<Option<String>, ExerciseError> {
        Ok(Some(self.rng.gen_range(self.min..=self.max).to_string()))
    }

    fn next_line(&mut self) -> Result<Option<String>, ExerciseError> {
        let len = self.rng.gen_range(8..=40);
        let line: String = (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        Ok(Some(line))
    }
}

/// One program run: typed reads over a token source, prompts to the console.
pub struct Session<'a> {
    source: &'a mut dyn TokenSource,
    prompts: &'a mut dyn Write,
    config: &'a RunnerConfig,
    consumed: usize,
}

impl<'a> Session<'a> {
    pub fn new(
        source: &'a mut dyn TokenSource,
        prompts: &'a mut dyn Write,
        config: &'a RunnerConfig,
    ) -> Self {
        Self { source, prompts, config, consumed: 0 }
    }

    pub fn config(&self) -> &RunnerConfig {
        self.config
    }

    /// Prompt text is written as given; include a trailing newline where wanted.
    pub fn prompt(&mut self, text: &str) -> Result<(), ExerciseError> {
        if self.config.show_prompts {
            self.prompts.write_all(text.as_bytes())?;
            self.prompts.flush()?;
        }
        Ok(())
    }

    pub fn read_i64(&mut self, what: &str) -> Result<i64, ExerciseError> {
        let token = self
            .source
            .next_token()?
            .ok_or_else(|| ExerciseError::UnexpectedEof(what.to_string()))?;
        self.consumed += 1;

        token.parse::<i64>().map_err(|_| {
            ExerciseError::BadInput(format!(
                "{}: token {} '{}' is not an integer",
                what, self.consumed, token
            ))
        })
    }

    pub fn read_values<const N: usize>(&mut self, what: &str) -> Result<[i64; N], ExerciseError> {
        let mut values = [0i64; N];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = self.read_i64(what).map_err(|e| match e {
                ExerciseError::UnexpectedEof(_) => {
                    ExerciseError::UnexpectedEof(format!("{} (got {} of {})", what, i, N))
                }
                other => other,
            })?;
        }
        debug!(what, count = N, "read values");
        Ok(values)
    }

    /// N² integers, row-major.
    pub fn read_grid<const N: usize>(&mut self, what: &str) -> Result<Grid<N>, ExerciseError> {
        let cells = N * N;
        let mut values = Vec::with_capacity(cells);
        while values.len() < cells {
            let v = self.read_i64(what).map_err(|e| match e {
                ExerciseError::UnexpectedEof(_) => ExerciseError::UnexpectedEof(format!(
                    "{} (got {} of {})",
                    what,
                    values.len(),
                    cells
                )),
                other => other,
            })?;
            values.push(v);
        }
        debug!(what, cells, "read grid");
        Grid::from_row_major(&values)
            .ok_or_else(|| ExerciseError::BadInput(format!("{}: expected {} values", what, cells)))
    }

    pub fn read_line(&mut self, what: &str) -> Result<String, ExerciseError> {
        self.source
            .next_line()?
            .ok_or_else(|| ExerciseError::UnexpectedEof(what.to_string()))
    }
}
