// leanpipe/src/pipeline/mod.rs

//! Defines the lazy `Pipeline<T>`, its railway specialisation
//! `SafePipeline<S, F>`, and the helpers that move values between them.

pub mod compose;
pub mod deferred;
pub mod definition;
pub mod safe;
pub mod thunk;
pub mod traverse;

// Re-export the pipeline types
pub use definition::Pipeline;
pub use safe::SafePipeline;
