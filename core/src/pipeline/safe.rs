// leanpipe/src/pipeline/safe.rs

//! Defines `SafePipeline<S, F>`: a lazy pipeline producing an `Outcome<S, F>`.
//!
//! The railway rule holds at flatten time. Once a stage resolves to a failure,
//! every later stage is skipped and its function is never called. The failure
//! reaches the end unchanged, only re-typed to the final success type.

use crate::attempt::Try;
use crate::error::Fault;
use crate::outcome::Outcome;
use crate::pipeline::definition::Pipeline;
use futures::future::BoxFuture;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

pub struct SafePipeline<S, F> {
  inner: Pipeline<Outcome<S, F>>,
}

impl<S, F> Clone for SafePipeline<S, F> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<S, F> std::fmt::Debug for SafePipeline<S, F> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SafePipeline")
      .field("success_type", &std::any::type_name::<S>())
      .field("failure_type", &std::any::type_name::<F>())
      .finish()
  }
}

fn note_skip<S, F>(outcome: Outcome<S, F>) -> Outcome<S, F> {
  outcome.tee_if_failure(|_| {
    event!(
      Level::DEBUG,
      failure_type = %std::any::type_name::<F>(),
      "Upstream stage failed, skipping downstream stage."
    )
  })
}

impl<S, F> SafePipeline<S, F>
where
  S: Send + 'static,
  F: Send + 'static,
{
  /// Wraps a synchronous producer of an `Outcome`.
  pub fn with<P>(producer: P) -> Self
  where
    P: Fn() -> Outcome<S, F> + Send + Sync + 'static,
  {
    Pipeline::with(producer).into()
  }

  /// Wraps an asynchronous producer of an `Outcome`.
  pub fn with_async<P, Fut>(producer: P) -> Self
  where
    P: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<S, F>> + Send + 'static,
  {
    Pipeline::with_async(producer).into()
  }

  pub fn returning(outcome: Outcome<S, F>) -> Self
  where
    S: Clone + Sync,
    F: Clone + Sync,
  {
    Pipeline::returning(outcome).into()
  }

  pub fn succeeded(value: S) -> Self
  where
    S: Clone + Sync,
  {
    Self::with(move || Outcome::succeeded(value.clone()))
  }

  pub fn failed(error: F) -> Self
  where
    F: Clone + Sync,
  {
    Self::with(move || Outcome::failed(error.clone()))
  }

  /// Forces the pipeline and yields its `Outcome`.
  pub fn flatten(&self) -> BoxFuture<'static, Outcome<S, F>> {
    self.inner.flatten()
  }

  pub fn into_pipeline(self) -> Pipeline<Outcome<S, F>> {
    self.inner
  }

  /// Maps the success value. Skipped on failure.
  pub fn select<U, M>(self, f: M) -> SafePipeline<U, F>
  where
    U: Send + 'static,
    M: Fn(S) -> U + Send + Sync + 'static,
  {
    self.inner.select(move |outcome| note_skip(outcome).map(&f)).into()
  }

  /// Maps the success value with an asynchronous function. Skipped on failure.
  pub fn select_async<U, M, Fut>(self, f: M) -> SafePipeline<U, F>
  where
    U: Send + 'static,
    M: Fn(S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = U> + Send + 'static,
  {
    let f = Arc::new(f);
    self
      .inner
      .select_async(move |outcome| {
        let f = Arc::clone(&f);
        async move { note_skip(outcome).map_async(|value| f(value)).await }
      })
      .into()
  }

  /// Binds the success value to a function returning an `Outcome`. Skipped on
  /// failure; a failure returned by `f` stops every later stage.
  pub fn select_outcome<U, B>(self, f: B) -> SafePipeline<U, F>
  where
    U: Send + 'static,
    B: Fn(S) -> Outcome<U, F> + Send + Sync + 'static,
  {
    self.inner.select(move |outcome| note_skip(outcome).bind(&f)).into()
  }

  pub fn select_outcome_async<U, B, Fut>(self, f: B) -> SafePipeline<U, F>
  where
    U: Send + 'static,
    B: Fn(S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<U, F>> + Send + 'static,
  {
    let f = Arc::new(f);
    self
      .inner
      .select_async(move |outcome| {
        let f = Arc::clone(&f);
        async move { note_skip(outcome).bind_async(|value| f(value)).await }
      })
      .into()
  }

  /// On success, forces the safe pipeline built by `f` and returns its outcome.
  /// On failure, `f` is never called.
  pub fn select_many<U, B>(self, f: B) -> SafePipeline<U, F>
  where
    U: Send + 'static,
    B: Fn(S) -> SafePipeline<U, F> + Send + Sync + 'static,
  {
    self.select_outcome_async(move |value| f(value).flatten())
  }

  /// For-comprehension form: `select_many(|a| f(a).select(|b| select(a, b)))`.
  pub fn select_many_with<U, V, B, P>(self, f: B, select: P) -> SafePipeline<V, F>
  where
    S: Clone + Sync,
    U: Send + 'static,
    V: Send + 'static,
    B: Fn(S) -> SafePipeline<U, F> + Send + Sync + 'static,
    P: Fn(S, U) -> V + Send + Sync + 'static,
  {
    let select = Arc::new(select);
    self.select_many(move |a: S| {
      let select = Arc::clone(&select);
      let captured = a.clone();
      f(a).select(move |b| select(captured.clone(), b))
    })
  }

  /// Transforms the failure channel. Success values and laziness are untouched.
  pub fn to_failure<F2, T>(self, transform: T) -> SafePipeline<S, F2>
  where
    F2: Send + 'static,
    T: Fn(F) -> F2 + Send + Sync + 'static,
  {
    self.inner.select(move |outcome| outcome.map_failure(&transform)).into()
  }

  /// Renders the failure with its `Display` implementation.
  pub fn to_string_failure(self) -> SafePipeline<S, String>
  where
    F: Display,
  {
    self.to_failure(|error| error.to_string())
  }
}

impl<S: Send + 'static> SafePipeline<S, Fault> {
  /// Wraps a producer in the `Try` guard: a panic becomes `Fault::Panicked`.
  pub fn try_with<P>(producer: P) -> Self
  where
    P: Fn() -> S + Send + Sync + 'static,
  {
    Self::with(move || Try::expression(&producer))
  }

  /// Wraps a fallible producer in the `Try` guard.
  pub fn try_with_fallible<P>(producer: P) -> Self
  where
    P: Fn() -> anyhow::Result<S> + Send + Sync + 'static,
  {
    Self::with(move || Try::fallible(&producer))
  }

  /// Wraps an asynchronous producer in the `Try` guard.
  pub fn try_with_async<P, Fut>(producer: P) -> Self
  where
    P: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = S> + Send + 'static,
  {
    let producer = Arc::new(producer);
    Self::with_async(move || {
      let producer = Arc::clone(&producer);
      async move { Try::expression_async(|| producer()).await }
    })
  }
}

impl<S, F> From<Pipeline<Outcome<S, F>>> for SafePipeline<S, F> {
  fn from(inner: Pipeline<Outcome<S, F>>) -> Self {
    Self { inner }
  }
}
