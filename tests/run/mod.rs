#![allow(dead_code)]

use assert_cmd::Command;

lazy_static! {
    pub static ref REPORT: String = run(&[]);
}

/// Runs the reporter with `args` and returns its stdout.
pub fn run(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("ctype-sizes").unwrap();
    let assert = cmd.args(args).assert().success().stderr("");
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Sizes keyed by type name, in output order.
pub fn entries(report: &str) -> Vec<(String, usize)> {
    report
        .lines()
        .map(|line| {
            let body = line.strip_suffix(',').unwrap();
            let (name, size) = body.rsplit_once(':').unwrap();
            let name = name.strip_prefix('\'').unwrap().strip_suffix('\'').unwrap();
            (name.to_string(), size.parse().unwrap())
        })
        .collect()
}

pub fn size_for(report: &str, name: &str) -> usize {
    entries(report)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, s)| s)
        .unwrap()
}
