// shuffled_numbers: print the integers 1 to 10000 in random order, one per line
// by Ian Kluft
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::{env, process};

// mainline - build, shuffle and print the sequence
fn main() {
    if let Err(e) = shuffled_numbers::run(env::args_os()) {
        // let clap print help, version and usage errors with its own exit codes
        if let Some(cli_err) = e.downcast_ref::<clap::Error>() {
            cli_err.exit();
        }
        eprintln!("shuffled_numbers: {e:#}");
        process::exit(1);
    }
}
