// leanpipe/src/outcome/combinators.rs

//! Railway combinators over `Outcome<S, F>`.
//!
//! A failure is never handed to a user function unless the combinator is
//! explicitly failure-aware (`either`, `either_fold`, `tee_if_failure`,
//! `handle`, `map_failure`). Everything else passes the failure through
//! unchanged, re-typed to the new success type.

use super::definition::Outcome;
use std::future::Future;

impl<S, F> Outcome<S, F> {
  /// Transforms the success value, leaving a failure untouched.
  pub fn map<U>(self, f: impl FnOnce(S) -> U) -> Outcome<U, F> {
    self.match_with(|value| Outcome::succeeded(f(value)), Outcome::failed)
  }

  pub async fn map_async<U, Fut>(self, f: impl FnOnce(S) -> Fut) -> Outcome<U, F>
  where
    Fut: Future<Output = U>,
  {
    match self.into_result() {
      Ok(value) => Outcome::succeeded(f(value).await),
      Err(error) => Outcome::failed(error),
    }
  }

  /// Transforms the failure, leaving a success untouched.
  pub fn map_failure<F2>(self, f: impl FnOnce(F) -> F2) -> Outcome<S, F2> {
    self.match_with(Outcome::succeeded, |error| Outcome::failed(f(error)))
  }

  /// On success, the result is whatever `f` returns (including its failure).
  /// On failure, the original error is propagated.
  pub fn bind<U>(self, f: impl FnOnce(S) -> Outcome<U, F>) -> Outcome<U, F> {
    self.match_with(f, Outcome::failed)
  }

  pub async fn bind_async<U, Fut>(self, f: impl FnOnce(S) -> Fut) -> Outcome<U, F>
  where
    Fut: Future<Output = Outcome<U, F>>,
  {
    match self.into_result() {
      Ok(value) => f(value).await,
      Err(error) => Outcome::failed(error),
    }
  }

  /// Maps the success with `if_fn` when `predicate` holds, `else_fn` otherwise.
  pub fn if_else_map<U>(
    self,
    predicate: impl FnOnce(&S) -> bool,
    if_fn: impl FnOnce(S) -> U,
    else_fn: impl FnOnce(S) -> U,
  ) -> Outcome<U, F> {
    self.map(|value| if predicate(&value) { if_fn(value) } else { else_fn(value) })
  }

  pub async fn if_else_map_async<U, IfFut, ElseFut>(
    self,
    predicate: impl FnOnce(&S) -> bool,
    if_fn: impl FnOnce(S) -> IfFut,
    else_fn: impl FnOnce(S) -> ElseFut,
  ) -> Outcome<U, F>
  where
    IfFut: Future<Output = U>,
    ElseFut: Future<Output = U>,
  {
    match self.into_result() {
      Ok(value) if predicate(&value) => Outcome::succeeded(if_fn(value).await),
      Ok(value) => Outcome::succeeded(else_fn(value).await),
      Err(error) => Outcome::failed(error),
    }
  }

  /// Binds the success with `if_fn` when `predicate` holds, `else_fn` otherwise.
  pub fn if_else_bind<U>(
    self,
    predicate: impl FnOnce(&S) -> bool,
    if_fn: impl FnOnce(S) -> Outcome<U, F>,
    else_fn: impl FnOnce(S) -> Outcome<U, F>,
  ) -> Outcome<U, F> {
    self.bind(|value| if predicate(&value) { if_fn(value) } else { else_fn(value) })
  }

  pub async fn if_else_bind_async<U, IfFut, ElseFut>(
    self,
    predicate: impl FnOnce(&S) -> bool,
    if_fn: impl FnOnce(S) -> IfFut,
    else_fn: impl FnOnce(S) -> ElseFut,
  ) -> Outcome<U, F>
  where
    IfFut: Future<Output = Outcome<U, F>>,
    ElseFut: Future<Output = Outcome<U, F>>,
  {
    match self.into_result() {
      Ok(value) if predicate(&value) => if_fn(value).await,
      Ok(value) => else_fn(value).await,
      Err(error) => Outcome::failed(error),
    }
  }

  /// Case analysis where each branch receives the whole `Outcome`, so it can
  /// still inspect which track it is on.
  pub fn either<S2, F2>(
    self,
    on_success: impl FnOnce(Self) -> Outcome<S2, F2>,
    on_failure: impl FnOnce(Self) -> Outcome<S2, F2>,
  ) -> Outcome<S2, F2> {
    self.either_fold(on_success, on_failure)
  }

  pub fn either_fold<U>(self, on_success: impl FnOnce(Self) -> U, on_failure: impl FnOnce(Self) -> U) -> U {
    if self.is_success() {
      on_success(self)
    } else {
      on_failure(self)
    }
  }

  /// Consumes the outcome, running exactly one of the handlers.
  pub fn handle(self, on_success: impl FnOnce(S), on_failure: impl FnOnce(F)) {
    self.match_with(on_success, on_failure)
  }

  pub async fn handle_async<SuccessFut, FailureFut>(
    self,
    on_success: impl FnOnce(S) -> SuccessFut,
    on_failure: impl FnOnce(F) -> FailureFut,
  ) where
    SuccessFut: Future<Output = ()>,
    FailureFut: Future<Output = ()>,
  {
    match self.into_result() {
      Ok(value) => on_success(value).await,
      Err(error) => on_failure(error).await,
    }
  }

  /// Observes the success value and returns `self` unchanged.
  pub fn tee(self, f: impl FnOnce(&S)) -> Self {
    if let Some(value) = self.success() {
      f(value);
    }
    self
  }

  /// Observes the failure and returns `self` unchanged.
  pub fn tee_if_failure(self, f: impl FnOnce(&F)) -> Self {
    if let Some(error) = self.failure() {
      f(error);
    }
    self
  }

  /// For-comprehension form: `bind(|a| f(a).map(|b| select(a, b)))`.
  pub fn select_many_with<U, V>(
    self,
    f: impl FnOnce(S) -> Outcome<U, F>,
    select: impl FnOnce(S, U) -> V,
  ) -> Outcome<V, F>
  where
    S: Clone,
  {
    self.bind(|a| f(a.clone()).map(|b| select(a, b)))
  }
}
