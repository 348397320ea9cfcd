//! Workloads.
//!
//! A workload is a sequence of jobs, each given by three whitespace-separated
//! fields: a one-character name, an arrival time, and a length. For instance,
//!
//! ```text
//! A 0 3
//! B 2 6
//! C 4 4
//! ```
//!
//! Jobs are numbered in the order they appear.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use job::Job;
use {Result, Ticks};

/// Read jobs from a file.
pub fn open<T: AsRef<Path>>(path: T) -> Result<Vec<Job>> {
    let path = path.as_ref();
    let mut content = String::new();
    match File::open(path) {
        Ok(mut file) => {
            if let Err(error) = file.read_to_string(&mut content) {
                raise!(Input, "failed to read {:?} ({})", path, error);
            }
        },
        Err(error) => raise!(Input, "failed to open {:?} ({})", path, error),
    }
    let jobs = parse(&content)?;
    info!(target: "Workload", "Read {} jobs from {:?}.", jobs.len(), path);
    Ok(jobs)
}

/// Parse jobs.
pub fn parse(content: &str) -> Result<Vec<Job>> {
    let mut tokens = content.split_whitespace();
    let mut jobs = vec![];
    let mut names = HashSet::new();
    while let Some(name) = tokens.next() {
        let id = jobs.len();
        let number = id + 1;
        let mut chars = name.chars();
        let name = match (chars.next(), chars.next()) {
            (Some(name), None) => name,
            _ => raise!(Input, "the name of job {} should be a single character but got {:?}",
                        number, name),
        };
        if !names.insert(name) {
            raise!(Input, "the name of job {} ({}) is not unique", number, name);
        }
        let arrival = some!(tokens.next(), Input, "the arrival time of job {} is missing", number);
        let arrival = match arrival.parse::<i64>() {
            Ok(arrival) if arrival >= 0 => arrival as Ticks,
            _ => raise!(Input, "the arrival time of job {} should be a non-negative integer \
                                but got {:?}", number, arrival),
        };
        let length = some!(tokens.next(), Input, "the length of job {} is missing", number);
        let length = match length.parse::<i64>() {
            Ok(length) if length > 0 => length as Ticks,
            _ => raise!(Input, "the length of job {} should be a positive integer but got {:?}",
                        number, length),
        };
        jobs.push(Job::new(id, name, arrival, length));
    }
    Ok(jobs)
}
