// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use leanpipe::{Outcome, Pipeline, SafePipeline};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Lookup failed: {0}")]
  Lookup(String),
}

// --- Records which stages ran, in order ---
#[derive(Clone, Default)]
pub struct StageLog(Arc<Mutex<Vec<String>>>);

impl StageLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&self, stage: &str) {
    self.0.lock().push(stage.to_string());
  }

  pub fn entries(&self) -> Vec<String> {
    self.0.lock().clone()
  }
}

// --- Common Pipeline Creators ---
pub fn recording_source(log: &StageLog, stage: &'static str, value: i32) -> Pipeline<i32> {
  let log = log.clone();
  Pipeline::with(move || {
    log.record(stage);
    tracing::debug!(target: "test_stages", %stage, value, "source executed");
    value
  })
}

pub fn recording_safe_source(
  log: &StageLog,
  stage: &'static str,
  outcome: Outcome<i32, TestError>,
) -> SafePipeline<i32, TestError> {
  let log = log.clone();
  SafePipeline::with(move || {
    log.record(stage);
    outcome.clone()
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static THUNK_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static STAGE_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  THUNK_EXEC_COUNTER.store(0, Ordering::SeqCst);
  STAGE_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

pub fn thunk_calls() -> usize {
  THUNK_EXEC_COUNTER.load(Ordering::SeqCst)
}

pub fn stage_calls() -> usize {
  STAGE_EXEC_COUNTER.load(Ordering::SeqCst)
}

pub fn counted_thunk(value: i32) -> i32 {
  THUNK_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
  value
}

pub fn counted_stage(value: i32) -> i32 {
  STAGE_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
  value
}
