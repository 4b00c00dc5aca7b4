//! Runtime configuration for the simulator binary.
//!
//! Precedence, lowest to highest: built-in defaults, `SCHED_SIM_*`
//! environment variables, command-line flags.
//!
//! ```text
//! sched_sim [--input <file>] [--output <dir>] [--quantum <n>] [--alpha <f>]
//!           [--json] [--generate <ticks>] [--seed <n>]
//! sched_sim --help | -h
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    core::Ticks,
    error::{Result, SchedError},
    scheduler::Discipline,
    sim::WorkloadSpec,
};

pub const ENV_INPUT: &str = "SCHED_SIM_INPUT";
pub const ENV_OUTPUT: &str = "SCHED_SIM_OUTPUT";
pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";
pub const ENV_ALPHA: &str = "SCHED_SIM_ALPHA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub quantum: Ticks,
    pub alpha: f64,
    pub format: OutputFormat,
    /// When set, a synthetic workload replaces the input file
    pub generate: Option<WorkloadSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output_dir: PathBuf::from("output"),
            quantum: 7,
            alpha: 0.5,
            format: OutputFormat::Text,
            generate: None,
        }
    }
}

impl SimConfig {
    /// Defaults overlaid with the process environment and `std::env::args`.
    pub fn load() -> Result<(Self, Action)> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        let action = config.apply_args(std::env::args().skip(1))?;
        config.validate()?;
        Ok((config, action))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output_dir = PathBuf::from(output);
        }
        if let Some(quantum) = lookup(ENV_QUANTUM) {
            self.quantum = parse_value("quantum", &quantum)?;
        }
        if let Some(alpha) = lookup(ENV_ALPHA) {
            self.alpha = parse_value("alpha", &alpha)?;
        }
        Ok(())
    }

    pub fn apply_args(&mut self, args: impl IntoIterator<Item = String>) -> Result<Action> {
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--help" | "-h" => return Ok(Action::Help),
                "--json" => self.format = OutputFormat::Json,
                "--input" | "-i" => self.input = PathBuf::from(value_of(&mut args, "input")?),
                "--output" | "-o" => {
                    self.output_dir = PathBuf::from(value_of(&mut args, "output")?)
                }
                "--quantum" | "-q" => {
                    self.quantum = parse_value("quantum", &value_of(&mut args, "quantum")?)?
                }
                "--alpha" | "-a" => {
                    self.alpha = parse_value("alpha", &value_of(&mut args, "alpha")?)?
                }
                "--generate" => {
                    let ticks = parse_value("generate", &value_of(&mut args, "generate")?)?;
                    self.generate.get_or_insert_with(WorkloadSpec::default).ticks = ticks;
                }
                "--seed" => {
                    let seed = parse_value("seed", &value_of(&mut args, "seed")?)?;
                    self.generate.get_or_insert_with(WorkloadSpec::default).seed = seed;
                }
                other => {
                    return Err(SchedError::invalid_parameter(
                        "argument",
                        format!("unknown flag '{other}'"),
                    ));
                }
            }
        }

        Ok(Action::Run)
    }

    /// Rejects values the schedulers would refuse, before any input is read.
    pub fn validate(&self) -> Result<()> {
        if self.quantum < 1 {
            return Err(SchedError::invalid_parameter(
                "quantum",
                "time quantum must be a positive integer",
            ));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SchedError::invalid_parameter(
                "alpha",
                format!("smoothing constant must be within [0, 1], got {}", self.alpha),
            ));
        }
        Ok(())
    }

    pub fn disciplines(&self) -> [Discipline; 4] {
        Discipline::all(self.quantum, self.alpha)
    }

    pub fn output_path(&self, discipline: &Discipline) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", discipline.name(), self.format.extension()))
    }
}

fn value_of(args: &mut impl Iterator<Item = String>, name: &'static str) -> Result<String> {
    args.next()
        .ok_or_else(|| SchedError::invalid_parameter(name, "missing value"))
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SchedError::invalid_parameter(name, format!("'{raw}': {e}")))
}

pub fn usage(exe: &str) -> String {
    format!(
        "Usage: {exe} [OPTIONS]\n\
         \n\
         Simulates FCFS, RR, SRTF and SJF over one workload and writes one\n\
         schedule file per discipline.\n\
         \n\
         Options:\n\
         \x20 -i, --input <file>      process list, one 'id arrival burst' per line [input.txt]\n\
         \x20 -o, --output <dir>      directory for <DISCIPLINE>.txt files [output]\n\
         \x20 -q, --quantum <n>       round-robin time quantum [7]\n\
         \x20 -a, --alpha <f>         SJF smoothing constant in [0, 1] [0.5]\n\
         \x20     --json              write JSON instead of text\n\
         \x20     --generate <ticks>  simulate a random workload instead of reading input\n\
         \x20     --seed <n>          seed for --generate [0]\n\
         \x20 -h, --help              print this help\n\
         \n\
         Environment: {ENV_INPUT}, {ENV_OUTPUT}, {ENV_QUANTUM}, {ENV_ALPHA}\n"
    )
}
