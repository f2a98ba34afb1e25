// leanpipe/src/maybe.rs

//! Defines `Maybe<T>`, an optional value whose variant is only observable
//! through `match_with`, `tee` and `tee_async`.
//!
//! Every other combinator is written on top of `match_with` so there is a single
//! place where the `Some` / `None` decision is made.

use std::fmt;
use std::future::Future;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Choice<T> {
  Some(T),
  None,
}

/// An optional value: either `Some(value)` or `None`.
///
/// A `Maybe` never wraps an absent value. Converting from an `Option<T>` that is
/// `None` yields `Maybe::none()`, which is how nullable inputs collapse.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Choice<T>);

impl<T> Maybe<T> {
  pub fn some(value: T) -> Self {
    Maybe(Choice::Some(value))
  }

  pub fn none() -> Self {
    Maybe(Choice::None)
  }

  /// Total case analysis. Calls `some_fn` with the wrapped value or `none_fn`
  /// when there is nothing, never both.
  pub fn match_with<U>(self, some_fn: impl FnOnce(T) -> U, none_fn: impl FnOnce() -> U) -> U {
    match self.0 {
      Choice::Some(value) => some_fn(value),
      Choice::None => none_fn(),
    }
  }

  /// Borrows the wrapped value, keeping the variant. The only other place the
  /// private representation is inspected besides `match_with`.
  pub fn as_ref(&self) -> Maybe<&T> {
    match &self.0 {
      Choice::Some(value) => Maybe::some(value),
      Choice::None => Maybe::none(),
    }
  }

  /// Runs exactly one of the two actions for its side effect.
  pub fn tee(&self, some_action: impl FnOnce(&T), none_action: impl FnOnce()) {
    self.as_ref().match_with(some_action, none_action)
  }

  /// Suspending form of [`Maybe::tee`]: awaits the chosen action before returning.
  pub async fn tee_async<'a, SomeFn, SomeFut, NoneFn, NoneFut>(&'a self, some_action: SomeFn, none_action: NoneFn)
  where
    SomeFn: FnOnce(&'a T) -> SomeFut,
    SomeFut: Future<Output = ()>,
    NoneFn: FnOnce() -> NoneFut,
    NoneFut: Future<Output = ()>,
  {
    match self.as_ref().into_option() {
      Some(value) => some_action(value).await,
      None => none_action().await,
    }
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    self.match_with(|value| Maybe::some(f(value)), Maybe::none)
  }

  /// Applies `f` and flattens one level. A `None` produced by `f` stays `None`.
  pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    self.match_with(f, Maybe::none)
  }

  /// Returns `seed` untouched on `None`, otherwise `fold_fn(seed, value)`.
  pub fn fold<U>(self, fold_fn: impl FnOnce(U, T) -> U, seed: U) -> U {
    match self.into_option() {
      Some(value) => fold_fn(seed, value),
      None => seed,
    }
  }

  /// Returns `seed` on `None`, otherwise `f(value)`.
  pub fn get_or_else<U>(self, f: impl FnOnce(T) -> U, seed: U) -> U {
    self.fold(|_, value| f(value), seed)
  }

  /// For-comprehension form: binds twice and re-wraps with `select`.
  pub fn select_many_with<U, V>(self, f: impl FnOnce(T) -> Maybe<U>, select: impl FnOnce(T, U) -> V) -> Maybe<V>
  where
    T: Clone,
  {
    self.bind(|a| f(a.clone()).map(|b| select(a, b)))
  }

  pub fn into_option(self) -> Option<T> {
    self.match_with(Some, || None)
  }

  /// Structural equality using a caller-supplied comparer instead of `PartialEq`.
  pub fn equals_by(&self, other: &Maybe<T>, comparer: impl Fn(&T, &T) -> bool) -> bool {
    match (self.as_ref().into_option(), other.as_ref().into_option()) {
      (Some(a), Some(b)) => comparer(a, b),
      (None, None) => true,
      _ => false,
    }
  }
}

impl<T> Default for Maybe<T> {
  fn default() -> Self {
    Maybe::none()
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => Maybe::some(v),
      None => Maybe::none(),
    }
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  fn from(value: Maybe<T>) -> Self {
    value.into_option()
  }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.as_ref().into_option() {
      Some(value) => write!(f, "Some ({value})"),
      None => f.write_str("None"),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.as_ref().into_option() {
      Some(value) => f.debug_tuple("Some").field(value).finish(),
      None => f.write_str("None"),
    }
  }
}
