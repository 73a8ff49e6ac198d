//! A cooperative grab-bag of reusable helpers.
//!
//! Small, context-free building blocks: compact date codes and duration
//! formatting ([`dating`]), dense JSON rendering and path traversal ([`jj`]),
//! a stopwatch ([`timer`]), privacy-aware path display ([`pathfinder`]), and
//! assorted string and filesystem utilities ([`util`]).
//!
//! The crate also ships `anita-dev`, a parameterless binary that wires up a
//! development checkout: it refuses to run unless `python3` resolves into the
//! project virtualenv, then hands over to `pip install -e` and exits with
//! pip's exit code. See [`devenv`].

pub mod dating;
pub mod devenv;
pub mod errors;
pub mod jj;
pub mod logit;
pub mod pathfinder;
pub mod timer;
pub mod util;

pub use dating::{
    check_date, date62, from_sara_date, now_utc, number62, sara_date, sara_date_now,
    split_seconds, utcage,
};
pub use jj::{dumps, jpath, Jpath};
pub use pathfinder::safe;
pub use timer::Timer;
pub use util::{content_hash, hr, only_fields_like, render_as_ascii_table, shorten};
