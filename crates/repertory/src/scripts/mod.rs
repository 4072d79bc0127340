//! Script subcommands.
//!
//! Each script runs a fixed sequence of accessor calls against the store and
//! writes every result as a titled JSON block.

pub mod catalog;
pub mod repertoire;
