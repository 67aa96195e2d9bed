#![allow(dead_code)]

mod ctype;
mod error;
mod machine;
mod report;

#[cfg(test)]
mod test;

#[macro_use]
extern crate static_assertions;

use std::io;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = report::write_report(&mut out) {
        eprintln!("{}", e);
    }
}
