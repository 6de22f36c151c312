use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::ExerciseError;
use super::input::Session;
use super::output::Report;

pub trait ProgramStrategy: Send + Sync + 'static {
    /// One-line summary shown by `help`.
    fn describe(&self) -> &'static str;
    fn run(&self, session: &mut Session<'_>) -> Result<Report, ExerciseError>;
}

pub type ProgramFn = fn(&mut Session<'_>) -> Result<Report, ExerciseError>;

pub struct SimpleProgram {
    description: &'static str,
    run: ProgramFn,
}

impl SimpleProgram {
    pub fn new(description: &'static str, run: ProgramFn) -> Arc<Self> {
        Arc::new(Self { description, run })
    }
}

impl ProgramStrategy for SimpleProgram {
    fn describe(&self) -> &'static str {
        self.description
    }

    fn run(&self, session: &mut Session<'_>) -> Result<Report, ExerciseError> {
        (self.run)(session)
    }
}

/// Lists every registered program. Built last so it sees the full table.
pub struct HelpProgram {
    entries: Vec<(String, &'static str)>,
}

impl ProgramStrategy for HelpProgram {
    fn describe(&self) -> &'static str {
        "list available programs"
    }

    fn run(&self, _session: &mut Session<'_>) -> Result<Report, ExerciseError> {
        let mut report = Report::new().line("Available programs:");
        let width = self.entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, description) in &self.entries {
            report.push(format!(" - {:<width$}  {}", name, description, width = width));
        }
        Ok(report)
    }
}

pub struct Dispatcher {
    programs: BTreeMap<String, Arc<dyn ProgramStrategy>>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.programs.keys().map(String::as_str)
    }

    pub fn dispatch(&self, name: &str, session: &mut Session<'_>) -> Result<Report, ExerciseError> {
        match self.programs.get(name) {
            Some(program) => program.run(session),
            None => Err(ExerciseError::UnknownProgram(name.to_string())),
        }
    }
}

#[derive(Default)]
pub struct DispatcherBuilder {
    programs: BTreeMap<String, Arc<dyn ProgramStrategy>>,
}

impl DispatcherBuilder {
    pub fn program(mut self, name: &str, program: Arc<dyn ProgramStrategy>) -> Self {
        self.programs.insert(name.to_string(), program);
        self
    }

    /// Registers `alias` for an already registered program; unknown targets are ignored.
    pub fn alias(mut self, alias: &str, target: &str) -> Self {
        if let Some(program) = self.programs.get(target).cloned() {
            self.programs.insert(alias.to_string(), program);
        }
        self
    }

    pub fn build(mut self) -> Dispatcher {
        let mut entries: Vec<(String, &'static str)> = self
            .programs
            .iter()
            .map(|(name, p)| (name.clone(), p.describe()))
            .collect();
        entries.push(("help".into(), "list available programs"));
        entries.sort();

        self.programs.insert("help".into(), Arc::new(HelpProgram { entries }));
        Dispatcher { programs: self.programs }
    }
}
