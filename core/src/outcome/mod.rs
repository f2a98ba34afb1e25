// leanpipe/src/outcome/mod.rs

//! Defines `Outcome<S, F>`, the railway-oriented result type, and the
//! combinators that compose it.

pub mod aggregate;
pub mod attempt;
pub mod combinators;
pub mod definition;

pub use definition::Outcome;
