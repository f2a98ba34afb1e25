// leanpipe/src/pipeline/definition.rs

//! Contains the `Pipeline<T>` struct, its constructors and `flatten`, the only
//! operation that runs the deferred computation.

use crate::pipeline::thunk::Thunk;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// A lazy, possibly asynchronous computation producing a `T`.
///
/// Building or chaining a pipeline never runs anything. Work happens only when
/// the future returned by [`Pipeline::flatten`] is awaited, and every call to
/// `flatten` runs the whole chain again; nothing is memoised.
pub struct Pipeline<T> {
  pub(crate) thunk: Thunk<T>,
}

impl<T> Clone for Pipeline<T> {
  fn clone(&self) -> Self {
    Self {
      thunk: Arc::clone(&self.thunk),
    }
  }
}

impl<T> std::fmt::Debug for Pipeline<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("output_type", &std::any::type_name::<T>())
      .finish()
  }
}

impl<T: Send + 'static> Pipeline<T> {
  /// Wraps an existing thunk.
  pub fn new(thunk: Thunk<T>) -> Self {
    Self { thunk }
  }

  /// Wraps a synchronous producer. `f` runs when the flattened future is polled.
  pub fn with<F>(f: F) -> Self
  where
    F: Fn() -> T + Send + Sync + 'static,
  {
    let f = Arc::new(f);
    let thunk: Thunk<T> = Arc::new(move || {
      let f = Arc::clone(&f);
      async move { f() }.boxed()
    });
    Self::new(thunk)
  }

  /// Wraps an asynchronous producer.
  pub fn with_async<F, Fut>(f: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
  {
    let thunk: Thunk<T> = Arc::new(move || f().boxed());
    Self::new(thunk)
  }

  /// Lifts a known value. Still lazy: each flatten yields a fresh clone.
  pub fn returning(value: T) -> Self
  where
    T: Clone + Sync,
  {
    Self::with(move || value.clone())
  }

  /// Forces the pipeline. The returned future is handed back as-is.
  pub fn flatten(&self) -> BoxFuture<'static, T> {
    event!(Level::TRACE, output_type = %std::any::type_name::<T>(), "Flattening pipeline.");
    (self.thunk)()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};

  #[test]
  fn construction_does_not_run_the_thunk() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let _pipeline = Pipeline::with(move || counter.fetch_add(1, Ordering::SeqCst));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn each_flatten_reruns_the_thunk() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let pipeline = Pipeline::with(move || counter.fetch_add(1, Ordering::SeqCst) + 1);

    assert_eq!(futures::executor::block_on(pipeline.flatten()), 1);
    assert_eq!(futures::executor::block_on(pipeline.flatten()), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn returning_yields_the_value_every_time() {
    let pipeline = Pipeline::returning("same".to_string());
    assert_eq!(futures::executor::block_on(pipeline.flatten()), "same");
    assert_eq!(futures::executor::block_on(pipeline.clone().flatten()), "same");
  }
}
