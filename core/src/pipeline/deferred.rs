// leanpipe/src/pipeline/deferred.rs

//! Defines the `Deferred` trait so callers can force either pipeline kind
//! without knowing which one they hold.

use crate::outcome::Outcome;
use crate::pipeline::definition::Pipeline;
use crate::pipeline::safe::SafePipeline;
use async_trait::async_trait;

/// A lazily evaluated computation that can be forced any number of times.
///
/// `force` is the trait-level counterpart of `flatten`; each call re-runs the
/// underlying computation.
#[async_trait]
pub trait Deferred: Send + Sync {
  type Output: Send;

  async fn force(&self) -> Self::Output;
}

#[async_trait]
impl<T: Send + 'static> Deferred for Pipeline<T> {
  type Output = T;

  async fn force(&self) -> T {
    self.flatten().await
  }
}

#[async_trait]
impl<S, F> Deferred for SafePipeline<S, F>
where
  S: Send + 'static,
  F: Send + 'static,
{
  type Output = Outcome<S, F>;

  async fn force(&self) -> Outcome<S, F> {
    self.flatten().await
  }
}
