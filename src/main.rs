mod cli;

use std::process;

use clap::Parser;

use anita::devenv;

fn main() {
    let _cli = cli::Cli::parse();

    match devenv::dev_install() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            process::exit(1);
        }
    }
}
