// leanpipe/src/outcome/aggregate.rs

//! Failure aggregation. Unlike `bind`, these operations never short-circuit:
//! every failure in a sequence ends up in the final failure, in order.
//!
//! The failure type must be a [`Monoid`] so that a success operand can
//! contribute an empty failure when the two tracks are merged.

use super::definition::Outcome;
use crate::algebra::Monoid;
use tracing::{event, instrument, Level};

impl<S, F: Monoid> Outcome<S, F> {
  /// Whatever the outcome is, make it a failure. A success becomes the empty
  /// failure, which is the identity element when merging.
  pub fn to_failure(self) -> Self {
    Outcome::failed(self.failure_or_empty())
  }

  fn failure_or_empty(self) -> F {
    self.match_with(|_| F::empty(), |error| error)
  }
}

impl<S, F: Monoid> Outcome<Vec<S>, F> {
  /// Puts an accumulator and one more outcome together.
  ///
  /// Both successes append `next` to the accumulated values. Otherwise the two
  /// failures are combined, a success side contributing `F::empty()`.
  pub fn merge(self, next: Outcome<S, F>) -> Self {
    match (self.into_result(), next.into_result()) {
      (Ok(mut values), Ok(value)) => {
        values.push(value);
        Outcome::succeeded(values)
      }
      (accumulated, next) => {
        let failures = Outcome::from(accumulated)
          .failure_or_empty()
          .combine(Outcome::from(next).failure_or_empty());
        Outcome::failed(failures)
      }
    }
  }

  /// Merges two accumulators. Associative, with `Outcome::succeeded(vec![])`
  /// as the identity on the success track.
  pub fn concat(self, other: Self) -> Self {
    match (self.into_result(), other.into_result()) {
      (Ok(mut values), Ok(more)) => {
        values.extend(more);
        Outcome::succeeded(values)
      }
      (left, right) => Outcome::failed(
        Outcome::from(left)
          .failure_or_empty()
          .combine(Outcome::from(right).failure_or_empty()),
      ),
    }
  }

  /// Folds a sequence with [`Outcome::merge`], starting from an empty success.
  ///
  /// The result is a success only if every element succeeded; otherwise it is
  /// the concatenation of every failing element's failure, in input order.
  #[instrument(level = "debug", name = "aggregate", skip_all)]
  pub fn aggregate<I>(outcomes: I) -> Self
  where
    I: IntoIterator<Item = Outcome<S, F>>,
  {
    let mut total = 0usize;
    let mut failed = 0usize;
    let aggregated = outcomes
      .into_iter()
      .inspect(|outcome| {
        total += 1;
        if outcome.is_failure() {
          failed += 1;
        }
      })
      .fold(Self::succeeded(Vec::new()), |acc: Self, next| acc.merge(next));

    if failed > 0 {
      event!(Level::DEBUG, total, failed, "Aggregated outcomes contain failures.");
    }
    aggregated
  }
}

impl<S, F: Monoid> FromIterator<Outcome<S, F>> for Outcome<Vec<S>, F> {
  fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
    Outcome::aggregate(iter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type Checked<S> = Outcome<S, Vec<String>>;

  fn ok<S>(value: S) -> Checked<S> {
    Outcome::succeeded(value)
  }

  fn bad<S>(messages: &[&str]) -> Checked<S> {
    Outcome::failed(messages.iter().map(|m| m.to_string()).collect())
  }

  #[test]
  fn to_failure_turns_success_into_empty_failure() {
    assert_eq!(ok(1).to_failure(), bad::<i32>(&[]));
    assert_eq!(bad::<i32>(&["x"]).to_failure(), bad(&["x"]));
  }

  #[test]
  fn aggregate_all_successes() {
    assert_eq!(Outcome::aggregate(vec![ok(1), ok(2)]), ok(vec![1, 2]));
  }

  #[test]
  fn aggregate_keeps_every_failure_in_order() {
    let result = Outcome::aggregate(vec![ok(1), bad(&["e1"]), ok(3), bad(&["e2", "e3"])]);
    assert_eq!(result, bad(&["e1", "e2", "e3"]));
  }

  #[test]
  fn aggregate_of_nothing_is_empty_success() {
    let empty: Vec<Checked<i32>> = Vec::new();
    assert_eq!(Outcome::aggregate(empty), ok(Vec::new()));
  }

  #[test]
  fn collect_uses_aggregate() {
    let collected: Checked<Vec<&str>> = vec![ok("a"), bad(&["bad"])].into_iter().collect();
    assert_eq!(collected.failure(), Some(&vec!["bad".to_string()]));
  }

  #[test]
  fn merge_success_into_failed_accumulator_adds_nothing() {
    let merged = bad::<Vec<i32>>(&["early"]).merge(ok(5));
    assert_eq!(merged, bad(&["early"]));
  }

  #[test]
  fn concat_is_associative_with_empty_identity() {
    let a = ok(vec![1]);
    let b = bad::<Vec<i32>>(&["b"]);
    let c = bad::<Vec<i32>>(&["c"]);

    let left = a.clone().concat(b.clone()).concat(c.clone());
    let right = a.clone().concat(b.concat(c));
    assert_eq!(left, right);
    assert_eq!(left, bad(&["b", "c"]));

    assert_eq!(ok(Vec::new()).concat(a.clone()), a);
    assert_eq!(a.clone().concat(ok(Vec::new())), a);
  }

  #[test]
  fn aggregate_agrees_with_concat_of_chunks() {
    let items = vec![ok(1), bad(&["x"]), ok(2), bad(&["y"])];
    let whole = Outcome::aggregate(items.clone());
    let (head, tail) = items.split_at(2);
    let chunked = Outcome::aggregate(head.to_vec()).concat(Outcome::aggregate(tail.to_vec()));
    assert_eq!(whole, chunked);
  }

  #[test]
  fn string_failures_concatenate() {
    let joined: Outcome<Vec<i32>, String> =
      vec![Outcome::failed("a".to_string()), Outcome::succeeded(1), Outcome::failed("b".to_string())]
        .into_iter()
        .collect();
    assert_eq!(joined, Outcome::failed("ab".to_string()));
  }
}
