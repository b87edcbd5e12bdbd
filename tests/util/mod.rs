// Copyright 2026 Martin Pool

#![allow(dead_code)] // rustc doesn't understand they're used by multiple crates

//! Reusable utilities for `factorial` CLI tests.

use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("factorial");
}

/// Make a command to run the binary, without any `FACTORIAL_` settings
/// inherited from the environment running the tests.
pub fn run() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("FACTORIAL_"))
        .for_each(|k| {
            cmd.env_remove(k);
        });
    cmd
}
