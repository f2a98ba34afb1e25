// leanpipe/src/error.rs
use anyhow::Error as AnyhowError;
use std::any::Any;
use thiserror::Error;

/// Contract violations raised by the library itself.
///
/// These indicate a programming defect at the call site (for example handing an
/// absent payload to a constructor that requires one), not a business failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeanError {
  #[error("Invalid argument: the {slot} payload of an Outcome must be present")]
  NullPayload { slot: &'static str },
}

pub type LeanResult<T, E = LeanError> = std::result::Result<T, E>;

/// An unexpected fault captured at the `Try` boundary.
///
/// Outside of `Try` (and the pipeline constructors built on it) nothing in this
/// crate catches panics or converts errors into a `Fault`.
#[derive(Debug, Error)]
pub enum Fault {
  #[error("Computation panicked: {message}")]
  Panicked { message: String },

  #[error("Computation raised an error. Source: {source}")]
  Raised {
    #[source]
    source: AnyhowError,
  },

  #[error("Upstream failure: {0}")]
  Upstream(String),
}

impl Fault {
  /// Builds a `Fault` from the payload handed back by `catch_unwind`.
  pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
      (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
      s.clone()
    } else {
      "non-string panic payload".to_string()
    };
    Fault::Panicked { message }
  }

  pub fn is_panic(&self) -> bool {
    matches!(self, Fault::Panicked { .. })
  }
}

impl From<AnyhowError> for Fault {
  fn from(err: AnyhowError) -> Self {
    // Avoid Raised(Raised(..)) when a Fault was boxed into anyhow upstream.
    match err.downcast::<Fault>() {
      Ok(fault) => fault,
      Err(source) => Fault::Raised { source },
    }
  }
}

impl From<String> for Fault {
  fn from(message: String) -> Self {
    Fault::Upstream(message)
  }
}

impl From<&str> for Fault {
  fn from(message: &str) -> Self {
    Fault::Upstream(message.to_string())
  }
}

impl From<LeanError> for Fault {
  fn from(err: LeanError) -> Self {
    Fault::Raised { source: err.into() }
  }
}
