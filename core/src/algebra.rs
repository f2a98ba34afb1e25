// leanpipe/src/algebra.rs

//! The `Monoid` constraint used by failure aggregation.
//!
//! `Outcome::merge` and `Outcome::aggregate` never short-circuit: every failure
//! in a sequence is kept. That only works when the failure type can be combined
//! associatively and has an empty value to stand in for a success operand.

use std::collections::VecDeque;

/// A type with an associative `combine` and an identity element `empty`.
///
/// Implementations must satisfy:
/// - `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - `Self::empty().combine(a) == a == a.combine(Self::empty())`
pub trait Monoid: Sized {
  fn empty() -> Self;

  fn combine(self, other: Self) -> Self;
}

impl<T> Monoid for Vec<T> {
  fn empty() -> Self {
    Vec::new()
  }

  fn combine(mut self, other: Self) -> Self {
    self.extend(other);
    self
  }
}

impl<T> Monoid for VecDeque<T> {
  fn empty() -> Self {
    VecDeque::new()
  }

  fn combine(mut self, other: Self) -> Self {
    self.extend(other);
    self
  }
}

impl Monoid for String {
  fn empty() -> Self {
    String::new()
  }

  fn combine(mut self, other: Self) -> Self {
    self.push_str(&other);
    self
  }
}
