// leanpipe/src/pipeline/compose.rs

//! Chaining for `Pipeline<T>`. Every method here is pure graph construction:
//! the new pipeline's thunk captures the previous thunk and the stage function,
//! and nothing runs until the result is flattened.

use crate::pipeline::definition::Pipeline;
use crate::pipeline::thunk::Thunk;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;

impl<T: Send + 'static> Pipeline<T> {
  /// Forces this pipeline, then applies `f` to its value.
  pub fn select<U, F>(self, f: F) -> Pipeline<U>
  where
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
  {
    let source = self.thunk;
    let f = Arc::new(f);
    let thunk: Thunk<U> = Arc::new(move || {
      let source = Arc::clone(&source);
      let f = Arc::clone(&f);
      async move {
        let value = source().await;
        f(value)
      }
      .boxed()
    });
    Pipeline::new(thunk)
  }

  /// Forces this pipeline, then awaits `f` applied to its value.
  pub fn select_async<U, F, Fut>(self, f: F) -> Pipeline<U>
  where
    U: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = U> + Send + 'static,
  {
    let source = self.thunk;
    let f = Arc::new(f);
    let thunk: Thunk<U> = Arc::new(move || {
      let source = Arc::clone(&source);
      let f = Arc::clone(&f);
      async move {
        let value = source().await;
        f(value).await
      }
      .boxed()
    });
    Pipeline::new(thunk)
  }

  /// Forces this pipeline, builds the next pipeline from its value with `f`,
  /// then forces that one. Sequential composition, never parallel.
  pub fn select_many<U, F>(self, f: F) -> Pipeline<U>
  where
    U: Send + 'static,
    F: Fn(T) -> Pipeline<U> + Send + Sync + 'static,
  {
    self.select_async(move |value| f(value).flatten())
  }

  /// For-comprehension form: `select_many(|a| f(a).select(|b| select(a, b)))`.
  pub fn select_many_with<U, V, F, P>(self, f: F, select: P) -> Pipeline<V>
  where
    T: Clone + Sync,
    U: Send + 'static,
    V: Send + 'static,
    F: Fn(T) -> Pipeline<U> + Send + Sync + 'static,
    P: Fn(T, U) -> V + Send + Sync + 'static,
  {
    let select = Arc::new(select);
    self.select_many(move |a: T| {
      let select = Arc::clone(&select);
      let captured = a.clone();
      f(a).select(move |b| select(captured.clone(), b))
    })
  }
}
