// shuffled_numbers: print the integers 1 to 10000 in random order, one per line (library)
// by Ian Kluft
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

pub mod shuffle;
pub mod swap;

use anyhow::{Context, Error, Result};
use clap::Command;
use rand::thread_rng;
use std::{
    ffi::OsString,
    fmt::Display,
    io::{self, BufWriter, Write},
};

pub use crate::shuffle::{shuffle, RandomSource};
pub use crate::swap::{SwapElements, SwapError, SwapIndex};

// constants
pub const DEFAULT_COUNT: u32 = 10_000;
const PROGRAM_NAME: &str = "shuffled_numbers";

// command-line interface: no options, only the --help and --version clap provides
fn command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the integers 1 to 10000 in random order, one per line")
}

// process command line, rejecting anything clap doesn't recognize
fn process_cli<I, T>(args: I) -> Result<(), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    command().try_get_matches_from(args)?;
    Ok(())
}

/// The integers 1 through `count` in ascending order.
pub fn ordered_sequence(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

/// Write each item on its own line, in order.
///
/// Performs no buffering or flushing of its own; errors from `output` are returned as-is.
pub fn write_lines<T, W>(items: &[T], output: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    for item in items {
        writeln!(output, "{}", item)?;
    }
    Ok(())
}

/// Build 1..=`count`, shuffle it with `random`, and write it to `output`.
pub fn generate_with_source<R, W>(count: u32, random: &mut R, output: &mut W) -> Result<(), Error>
where
    R: RandomSource + ?Sized,
    W: Write + ?Sized,
{
    let mut numbers = ordered_sequence(count);
    shuffle(&mut numbers, random).context("failed to shuffle sequence")?;
    write_lines(&numbers, output).context("failed to write shuffled sequence")?;
    Ok(())
}

/// Write a fresh random permutation of 1..=10000 to `output`.
pub fn run_with_output<W: Write + ?Sized>(output: &mut W) -> Result<(), Error> {
    let mut rng = thread_rng();
    generate_with_source(DEFAULT_COUNT, &mut rng, output)
}

// run: library side of command line called from main()
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // no arguments are consumed, but clap still answers --help/--version and rejects the rest
    process_cli(args)?;

    // buffer standard output, then flush so a closed pipe is reported
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_with_output(&mut writer)?;
    writer.flush().context("failed to flush standard output")?;

    // done
    Ok(())
}
