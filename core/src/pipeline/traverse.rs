// leanpipe/src/pipeline/traverse.rs

//! Moves values between `Outcome` and `Pipeline` layers.

use crate::outcome::Outcome;
use crate::pipeline::definition::Pipeline;

impl<S, F> Outcome<S, F>
where
  S: Clone + Send + Sync + 'static,
  F: Clone + Send + Sync + 'static,
{
  /// Lifts an already-known outcome into a pipeline.
  pub fn to_pipeline(self) -> Pipeline<Outcome<S, F>> {
    Pipeline::returning(self)
  }
}

impl<S, F> Outcome<Pipeline<Outcome<S, F>>, F>
where
  S: Send + 'static,
  F: Clone + Send + Sync + 'static,
{
  /// Swaps the layers: a failure becomes a pipeline yielding that failure, a
  /// success is the wrapped pipeline itself.
  pub fn flip_merge(self) -> Pipeline<Outcome<S, F>> {
    self.match_with(|pipeline| pipeline, failed_pipeline)
  }
}

impl<S, F> Pipeline<Outcome<Pipeline<S>, F>>
where
  S: Send + 'static,
  F: Clone + Send + Sync + 'static,
{
  /// Forces the outer pipeline and, on success, the inner one, producing a
  /// single pipeline of `Outcome<S, F>`.
  pub fn flip_merge(self) -> Pipeline<Outcome<S, F>> {
    self.select_many(|outcome| outcome.match_with(|inner| inner.select(Outcome::succeeded), failed_pipeline))
  }
}

fn failed_pipeline<S, F>(error: F) -> Pipeline<Outcome<S, F>>
where
  S: Send + 'static,
  F: Clone + Send + Sync + 'static,
{
  Pipeline::with(move || Outcome::failed(error.clone()))
}
