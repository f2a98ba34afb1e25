// src/lib.rs

//! leanpipe: absence-safe values, railway-oriented results and lazy async
//! pipelines for Rust.
//!
//! The crate provides:
//!  - `Maybe<T>`, an optional value whose branching is centralised in `match_with`.
//!  - `Outcome<S, F>`, a success/failure result with `map`/`bind` short-circuiting
//!    and non-short-circuiting failure aggregation (`merge`, `aggregate`).
//!  - `Try`, the only boundary where panics and raised errors become failures.
//!  - `Pipeline<T>`, a deferred computation that runs only when flattened.
//!  - `SafePipeline<S, F>`, a pipeline of `Outcome`s that skips every stage
//!    after the first failure.

pub mod algebra;
pub mod attempt;
pub mod error;
pub mod maybe;
pub mod outcome;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::algebra::Monoid;
pub use crate::attempt::Try;
pub use crate::error::{Fault, LeanError, LeanResult};
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;

// Pipelines and the trait that forces either kind
pub use crate::pipeline::deferred::Deferred;
pub use crate::pipeline::thunk::Thunk;
pub use crate::pipeline::{Pipeline, SafePipeline};

/*
    Core Workflow:
    1. Build a graph: `Pipeline::with(..)` or `SafePipeline::with(..)` / `try_with(..)`,
       then chain `.select(..)`, `.select_outcome(..)`, `.select_many(..)`.
       Nothing runs yet.
    2. Force it once with `.flatten().await` (or `Deferred::force`).
    3. Inspect the `Outcome` with `match_with`, `either`, `handle`, or convert it
       with `into_result()`.
    4. For validation-style checks, collect `Outcome<S, Vec<E>>` values into
       `Outcome<Vec<S>, Vec<E>>` to keep every failure rather than the first.
*/
