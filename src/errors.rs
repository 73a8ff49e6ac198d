use miette::Diagnostic;
use thiserror::Error;

/// Failures of the guarded dev-install flow.
#[derive(Error, Debug, Diagnostic)]
pub enum SetupError {
    #[error("active python3 is not the anita virtualenv: {0}")]
    #[diagnostic(
        code(anita::env::wrong_python),
        help("Activate the project virtualenv first: `source ~/anita/venv/bin/activate`.")
    )]
    WrongEnvironment(String),

    #[error("no python3 found on PATH")]
    #[diagnostic(
        code(anita::env::no_python),
        help("Install Python 3 or activate the anita virtualenv so `python3` resolves.")
    )]
    PythonNotFound,

    #[error("HOME is not set, cannot locate the anita checkout")]
    #[diagnostic(
        code(anita::env::no_home),
        help("Export HOME so the target directory `~/anita` can be resolved.")
    )]
    HomeNotSet,

    #[error("could not run pip")]
    #[diagnostic(
        code(anita::install::pip_unavailable),
        help("The virtualenv should provide pip; check `pip --version` inside it.")
    )]
    PipUnavailable(#[source] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(anita::system::io))]
    Io(#[from] std::io::Error),
}
