use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "anita-dev",
    version,
    about = "Editable-install the anita checkout into its own virtualenv",
    long_about = "Checks that the active python3 belongs to the anita virtualenv, then runs \
                  `pip install -e ~/anita` and exits with pip's exit code. Takes no arguments."
)]
pub struct Cli {}
