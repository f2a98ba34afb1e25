// tests/pipeline_execution_tests.rs
mod common; // Reference the common module

use common::*;
use leanpipe::{Deferred, Pipeline};
use serial_test::serial;
use std::time::Duration;

#[tokio::test]
#[serial]
async fn test_pipeline_selects_in_order() {
  setup_tracing();
  let result = Pipeline::with(|| 5).select(|n| n + 4).flatten().await;
  assert_eq!(result, 9);
}

#[tokio::test]
#[serial]
async fn test_construction_and_chaining_do_not_run_anything() {
  setup_tracing();
  reset_counters();

  let pipeline = Pipeline::with(|| counted_thunk(1))
    .select(counted_stage)
    .select(|n| n * 2);

  assert_eq!(thunk_calls(), 0);
  assert_eq!(stage_calls(), 0);

  assert_eq!(pipeline.flatten().await, 2);
  assert_eq!(thunk_calls(), 1);
  assert_eq!(stage_calls(), 1);
}

#[tokio::test]
#[serial]
async fn test_each_flatten_runs_the_thunk_again() {
  setup_tracing();
  reset_counters();

  let pipeline = Pipeline::with(|| counted_thunk(7)).select(counted_stage);
  for _ in 0..3 {
    assert_eq!(pipeline.flatten().await, 7);
  }
  assert_eq!(thunk_calls(), 3);
  assert_eq!(stage_calls(), 3);
}

#[tokio::test]
#[serial]
async fn test_flatten_without_await_does_no_work() {
  setup_tracing();
  reset_counters();

  let pipeline = Pipeline::with(|| counted_thunk(1));
  let pending = pipeline.flatten();
  assert_eq!(thunk_calls(), 0);
  drop(pending);
  assert_eq!(thunk_calls(), 0);
}

#[tokio::test]
async fn test_stages_run_sequentially_across_suspension_points() {
  setup_tracing();
  let log = StageLog::new();

  let first = log.clone();
  let second = log.clone();
  let pipeline = Pipeline::with_async(move || {
    let log = first.clone();
    async move {
      tokio::time::sleep(Duration::from_millis(5)).await;
      log.record("source");
      1
    }
  })
  .select_async(move |n| {
    let log = second.clone();
    async move {
      log.record("stage");
      n + 1
    }
  });

  assert_eq!(pipeline.flatten().await, 2);
  assert_eq!(log.entries(), vec!["source", "stage"]);
}

#[tokio::test]
async fn test_select_many_composes_inner_pipeline() {
  setup_tracing();
  let log = StageLog::new();
  let inner_log = log.clone();

  let pipeline = recording_source(&log, "outer", 3).select_many(move |n| recording_source(&inner_log, "inner", n * 10));

  assert_eq!(pipeline.flatten().await, 30);
  assert_eq!(log.entries(), vec!["outer", "inner"]);
}

#[tokio::test]
async fn test_left_identity_law() {
  let f = |x: i32| Pipeline::with(move || x * 3);
  let left = Pipeline::returning(4).select_many(f).flatten().await;
  let right = f(4).flatten().await;
  assert_eq!(left, right);
}

#[tokio::test]
async fn test_right_identity_law() {
  let m = Pipeline::with(|| "value".to_string());
  let bound = m.clone().select_many(Pipeline::returning).flatten().await;
  assert_eq!(bound, m.flatten().await);
}

#[tokio::test]
async fn test_associativity_law() {
  let f = |x: i32| Pipeline::with(move || x + 1);
  let g = |x: i32| Pipeline::with_async(move || async move { x * 2 });

  let left = Pipeline::returning(5).select_many(f).select_many(g).flatten().await;
  let right = Pipeline::returning(5)
    .select_many(move |x| f(x).select_many(g))
    .flatten()
    .await;
  assert_eq!(left, right);
  assert_eq!(left, 12);
}

#[tokio::test]
async fn test_select_many_with_projects_pairs() {
  let pipeline = Pipeline::returning(2).select_many_with(|a| Pipeline::with(move || a + 3), |a, b| format!("{a}+{b}"));
  assert_eq!(pipeline.flatten().await, "2+5");
}

#[tokio::test]
async fn test_deferred_forces_generically() {
  async fn force_twice<D: Deferred>(deferred: &D) -> (D::Output, D::Output) {
    (deferred.force().await, deferred.force().await)
  }

  let pipeline = Pipeline::returning(11).select(|n| n - 1);
  assert_eq!(force_twice(&pipeline).await, (10, 10));
}

#[tokio::test]
async fn test_pipeline_can_be_forced_from_spawned_task() {
  let pipeline = Pipeline::with(|| 20).select_async(|n| async move {
    tokio::task::yield_now().await;
    n + 1
  });
  let handle = tokio::spawn(pipeline.flatten());
  assert_eq!(handle.await.unwrap(), 21);
}
