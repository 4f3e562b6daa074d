// shuffled_numbers: acceptance tests for the generate-and-write pipeline
// by Ian Kluft
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use shuffled_numbers::{generate_with_source, run_with_output, RandomSource, DEFAULT_COUNT};
use std::{
    collections::HashSet,
    io::{self, Write},
    process::Command,
};

// run the default pipeline into memory and parse the lines back
fn run_once() -> Vec<u32> {
    let mut output = Vec::new();
    run_with_output(&mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| line.parse::<u32>().unwrap())
        .collect()
}

// sink that refuses every write, like a closed pipe
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct AlwaysZero;

impl RandomSource for AlwaysZero {
    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

#[test]
fn results_contain_all_integers_from_one_to_ten_thousand() {
    let results = run_once();
    assert_eq!(results.len(), DEFAULT_COUNT as usize);
    let mut sorted = results;
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=DEFAULT_COUNT).collect::<Vec<u32>>());
}

#[test]
fn results_contain_only_unique_integers() {
    let results = run_once();
    let unique: HashSet<u32> = results.iter().copied().collect();
    assert_eq!(unique.len(), results.len());
}

#[test]
fn results_differ_between_runs() {
    // three identical runs of 10000! orderings is astronomically unlikely
    let runs: Vec<Vec<u32>> = (0..3).map(|_| run_once()).collect();
    assert!(!(runs[0] == runs[1] && runs[1] == runs[2]));
}

#[test]
fn scripted_source_output_is_exact() {
    let mut output = Vec::new();
    generate_with_source(5, &mut AlwaysZero, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "2\n3\n4\n5\n1\n");
}

#[test]
fn sink_failure_propagates() {
    let err = generate_with_source(5, &mut AlwaysZero, &mut BrokenPipe).unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn binary_prints_permutation_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_shuffled_numbers"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let mut numbers: Vec<u32> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=DEFAULT_COUNT).collect::<Vec<u32>>());
}

#[test]
fn binary_rejects_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_shuffled_numbers"))
        .arg("500")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
