// leanpipe/src/pipeline/thunk.rs

//! Defines the `Thunk<T>` type held by every pipeline.

use futures::future::BoxFuture;
use std::sync::Arc;

/// A deferred computation: a zero-argument function producing a future of `T`.
///
/// A thunk is shared immutably between a pipeline and the pipelines chained
/// from it, so it is `Fn` (callable once per `flatten`) rather than `FnOnce`,
/// and must be `Send + Sync` so pipelines can be driven from any executor
/// thread. The returned future is `'static` and owns everything it needs.
pub type Thunk<T> = Arc<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>;
