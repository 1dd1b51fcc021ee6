//! The `surgery` launcher.
//!
//! Finds the bundled metadata engine built for this host and delegates the
//! whole invocation to it. The launcher parses no arguments of its own:
//! `surgery --help` is the engine's help.

pub mod launch;
pub mod logging;

pub use launch::run;
