//! Season statistics for a football club.
//!
//! A roster of players and a chronological list of played matches are loaded once into an
//! immutable [Season](season::Season), over which the [analytics] queries derive top scorers,
//! win/loss extremes, unbeaten runs, home/away performance and cumulative evolution curves.

pub mod analytics;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod file;
pub mod linker;
pub mod parse;
pub mod print;
pub mod report;
pub mod roster;
pub mod season;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
