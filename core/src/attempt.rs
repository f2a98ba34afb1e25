// leanpipe/src/attempt.rs

//! The `Try` boundary: the one place where an unexpected fault (a panic, or an
//! error returned by a fallible closure) is converted into `Outcome::failed`.
//!
//! Anywhere else in the crate a panic unwinds to the caller untouched.

use crate::error::Fault;
use crate::outcome::Outcome;
use futures::FutureExt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use tracing::{event, Level};

/// Namespace for the boundary adapters.
#[derive(Debug, Clone, Copy)]
pub struct Try;

impl Try {
  /// Runs `f`, turning a panic into `Fault::Panicked`.
  pub fn expression<T>(f: impl FnOnce() -> T) -> Outcome<T, Fault> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
      Ok(value) => Outcome::succeeded(value),
      Err(payload) => captured(Fault::from_panic(payload)),
    }
  }

  /// Runs a fallible `f`. Both a panic and a returned error become a failure.
  pub fn fallible<T>(f: impl FnOnce() -> anyhow::Result<T>) -> Outcome<T, Fault> {
    Try::expression(f).bind(|result| match result {
      Ok(value) => Outcome::succeeded(value),
      Err(source) => captured(Fault::from(source)),
    })
  }

  /// Asynchronous form of [`Try::expression`]. The factory call and every poll of
  /// the future it returns run inside the guard.
  pub async fn expression_async<T, Fut>(f: impl FnOnce() -> Fut) -> Outcome<T, Fault>
  where
    Fut: Future<Output = T>,
  {
    match AssertUnwindSafe(async move { f().await }).catch_unwind().await {
      Ok(value) => Outcome::succeeded(value),
      Err(payload) => captured(Fault::from_panic(payload)),
    }
  }

  /// Asynchronous form of [`Try::fallible`].
  pub async fn fallible_async<T, Fut>(f: impl FnOnce() -> Fut) -> Outcome<T, Fault>
  where
    Fut: Future<Output = anyhow::Result<T>>,
  {
    Try::expression_async(f).await.bind(|result| match result {
      Ok(value) => Outcome::succeeded(value),
      Err(source) => captured(Fault::from(source)),
    })
  }
}

fn captured<T>(fault: Fault) -> Outcome<T, Fault> {
  event!(Level::WARN, error = %fault, "Fault captured at Try boundary.");
  Outcome::failed(fault)
}
