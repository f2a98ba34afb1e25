// leanpipe/src/outcome/attempt.rs

//! `Outcome` methods that run the success value through the `Try` boundary.
//!
//! The resulting failure channel is always `Fault`. An upstream failure is
//! never handed to the guarded function; it is converted with `Into<Fault>`.

use super::definition::Outcome;
use crate::attempt::Try;
use crate::error::Fault;
use std::future::Future;

impl<S, F: Into<Fault>> Outcome<S, F> {
  /// Maps the success value inside the guard.
  pub fn try_map<U>(self, f: impl FnOnce(S) -> U) -> Outcome<U, Fault> {
    self.map_failure(Into::<Fault>::into).bind(|value| Try::expression(|| f(value)))
  }

  /// Binds the success value inside the guard. A failure returned by `f` is kept
  /// as-is; a panic inside `f` becomes `Fault::Panicked`.
  pub fn try_bind<U>(self, f: impl FnOnce(S) -> Outcome<U, Fault>) -> Outcome<U, Fault> {
    self
      .map_failure(Into::<Fault>::into)
      .bind(|value| Try::expression(|| f(value)).bind(|inner| inner))
  }

  /// Runs a side effect on the success value inside the guard, reporting
  /// `true` when it completed.
  pub fn try_run(self, f: impl FnOnce(S)) -> Outcome<bool, Fault> {
    self.try_map(|value| {
      f(value);
      true
    })
  }

  pub async fn try_bind_async<U, Fut>(self, f: impl FnOnce(S) -> Fut) -> Outcome<U, Fault>
  where
    Fut: Future<Output = Outcome<U, Fault>>,
  {
    match self.into_result() {
      Ok(value) => Try::expression_async(|| f(value)).await.bind(|inner| inner),
      Err(error) => Outcome::failed(error.into()),
    }
  }
}
