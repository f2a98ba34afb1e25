// leanpipe/src/outcome/definition.rs

//! Contains the `Outcome<S, F>` type, its constructors and the two case-analysis
//! entry points (`match_with`, `as_ref`) every other combinator is built on.

use crate::error::{LeanError, LeanResult};
use std::fmt;
use tracing::{event, Level};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Track<S, F> {
  Success(S),
  Failure(F),
}

/// The railway-oriented result: a value on the success track or an error on
/// the failure track. Exactly one of the two is ever populated.
///
/// The variants are private. Callers branch with `match_with`, `either`,
/// `either_fold` or the combinators layered on top of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<S, F>(Track<S, F>);

impl<S, F> Outcome<S, F> {
  pub fn succeeded(value: S) -> Self {
    Outcome(Track::Success(value))
  }

  pub fn failed(error: F) -> Self {
    Outcome(Track::Failure(error))
  }

  /// Builds a success from a possibly absent value.
  ///
  /// An absent value is a contract violation and is reported as
  /// `LeanError::NullPayload` instead of constructing an `Outcome`.
  pub fn try_succeeded(value: Option<S>) -> LeanResult<Self> {
    match value {
      Some(v) => Ok(Self::succeeded(v)),
      None => {
        event!(Level::ERROR, "Attempted to build a success from an absent value.");
        Err(LeanError::NullPayload { slot: "success" })
      }
    }
  }

  /// Builds a failure from a possibly absent error. See [`Outcome::try_succeeded`].
  pub fn try_failed(error: Option<F>) -> LeanResult<Self> {
    match error {
      Some(e) => Ok(Self::failed(e)),
      None => {
        event!(Level::ERROR, "Attempted to build a failure from an absent error.");
        Err(LeanError::NullPayload { slot: "failure" })
      }
    }
  }

  /// Total case analysis over the unwrapped payload.
  pub fn match_with<U>(self, on_success: impl FnOnce(S) -> U, on_failure: impl FnOnce(F) -> U) -> U {
    match self.0 {
      Track::Success(value) => on_success(value),
      Track::Failure(error) => on_failure(error),
    }
  }

  /// Borrows both payloads, keeping the track.
  pub fn as_ref(&self) -> Outcome<&S, &F> {
    match &self.0 {
      Track::Success(value) => Outcome::succeeded(value),
      Track::Failure(error) => Outcome::failed(error),
    }
  }

  pub fn is_success(&self) -> bool {
    self.as_ref().match_with(|_| true, |_| false)
  }

  pub fn is_failure(&self) -> bool {
    !self.is_success()
  }

  pub fn success(&self) -> Option<&S> {
    self.as_ref().into_success()
  }

  pub fn failure(&self) -> Option<&F> {
    self.as_ref().into_failure()
  }

  pub fn into_success(self) -> Option<S> {
    self.match_with(Some, |_| None)
  }

  pub fn into_failure(self) -> Option<F> {
    self.match_with(|_| None, Some)
  }

  pub fn into_result(self) -> Result<S, F> {
    self.match_with(Ok, Err)
  }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
  fn from(result: Result<S, F>) -> Self {
    match result {
      Ok(value) => Outcome::succeeded(value),
      Err(error) => Outcome::failed(error),
    }
  }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
  fn from(outcome: Outcome<S, F>) -> Self {
    outcome.into_result()
  }
}

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for Outcome<S, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Track::Success(value) => f.debug_tuple("Success").field(value).finish(),
      Track::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
    }
  }
}
