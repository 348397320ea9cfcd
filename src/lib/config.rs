//! Configuration.
//!
//! The configuration is read from TOML. All the fields are optional, and the
//! values are kept as given. A missing or non-positive value is replaced by
//! its default only when a policy asks for it, so that a bad value never
//! prevents a run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use toml;

use {Result, Ticks};

/// The default quantum.
pub const QUANTUM: Ticks = 1;

/// The default number of feedback levels.
pub const LEVELS: usize = 3;

/// A configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub round_robin: RoundRobin,
    pub feedback: Feedback,
}

/// A configuration of the round-robin policy.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RoundRobin {
    pub quantum: Option<i64>,
}

/// A configuration of the feedback policy.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Feedback {
    pub levels: Option<i64>,
    pub quantum: Option<i64>,
    pub bottom: Bottom,
}

/// The treatment of jobs at the lowest feedback level.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Bottom {
    /// Run each job to completion.
    Fifo,
    /// Keep the quantum of the level and requeue at the tail.
    RoundRobin,
}

impl Config {
    /// Read a configuration from a file.
    pub fn open<T: AsRef<Path>>(path: T) -> Result<Config> {
        let path = path.as_ref();
        let mut content = String::new();
        match File::open(path) {
            Ok(mut file) => {
                if let Err(error) = file.read_to_string(&mut content) {
                    raise!(Config, "failed to read {:?} ({})", path, error);
                }
            },
            Err(error) => raise!(Config, "failed to open {:?} ({})", path, error),
        }
        Config::parse(&content)
    }

    /// Parse a configuration.
    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Set the base quantum of both round robin and feedback.
    pub fn set_quantum(&mut self, quantum: i64) {
        self.round_robin.quantum = Some(quantum);
        self.feedback.quantum = Some(quantum);
    }

    /// Set the number of feedback levels.
    pub fn set_levels(&mut self, levels: i64) {
        self.feedback.levels = Some(levels);
    }
}

impl RoundRobin {
    #[inline]
    pub fn new(quantum: i64) -> RoundRobin {
        RoundRobin { quantum: Some(quantum) }
    }

    /// Return the quantum to use.
    #[inline]
    pub fn quantum(&self) -> Ticks {
        positive(self.quantum, QUANTUM as i64, "round-robin quantum") as Ticks
    }
}

impl Feedback {
    #[inline]
    pub fn new(levels: i64, quantum: i64) -> Feedback {
        Feedback { levels: Some(levels), quantum: Some(quantum), bottom: Bottom::Fifo }
    }

    /// Return the number of levels to use.
    #[inline]
    pub fn levels(&self) -> usize {
        positive(self.levels, LEVELS as i64, "number of feedback levels") as usize
    }

    /// Return the base quantum to use.
    #[inline]
    pub fn quantum(&self) -> Ticks {
        positive(self.quantum, QUANTUM as i64, "feedback quantum") as Ticks
    }
}

impl Default for Bottom {
    #[inline]
    fn default() -> Bottom {
        Bottom::Fifo
    }
}

fn positive(value: Option<i64>, default: i64, name: &str) -> i64 {
    match value {
        Some(value) if value > 0 => value,
        Some(value) => {
            warn!(target: "Config", "The {} should be positive; using {} instead of {}.",
                  name, default, value);
            default
        },
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::{Bottom, Config, Feedback, RoundRobin};
    use ErrorKind;

    #[test]
    fn parse() {
        let config = Config::parse(r#"
            [round-robin]
            quantum = 4

            [feedback]
            levels = 5
            quantum = 2
            bottom = "round-robin"
        "#).unwrap();

        assert_eq!(config.round_robin.quantum(), 4);
        assert_eq!(config.feedback.levels(), 5);
        assert_eq!(config.feedback.quantum(), 2);
        assert_eq!(config.feedback.bottom, Bottom::RoundRobin);
    }

    #[test]
    fn parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.round_robin.quantum(), 1);
        assert_eq!(config.feedback.levels(), 3);
        assert_eq!(config.feedback.quantum(), 1);
        assert_eq!(config.feedback.bottom, Bottom::Fifo);
    }

    #[test]
    fn parse_unknown() {
        let error = Config::parse("[round-robin]\nslice = 2\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn non_positive() {
        assert_eq!(RoundRobin::new(0).quantum(), 1);
        assert_eq!(RoundRobin::new(-7).quantum(), 1);
        assert_eq!(Feedback::new(0, -1).levels(), 3);
        assert_eq!(Feedback::new(0, -1).quantum(), 1);
        assert_eq!(Feedback::new(2, 3).levels(), 2);
    }

    #[test]
    fn set() {
        let mut config = Config::default();
        config.set_quantum(3);
        config.set_levels(4);
        assert_eq!(config.round_robin.quantum(), 3);
        assert_eq!(config.feedback.quantum(), 3);
        assert_eq!(config.feedback.levels(), 4);
    }
}
