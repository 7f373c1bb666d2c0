// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Background execution of requests.
//!
//! Every operation in the client libraries can be invoked in three ways:
//! - awaiting the request builder's `send()` runs the request on the
//!   caller's task,
//! - `send_deferred()` schedules the request on the client's [Executor] and
//!   returns a [Deferred] future with the outcome,
//! - `send_with_handler()` schedules the request on the client's [Executor]
//!   and invokes a handler with the outcome.
//!
//! By default the client uses a [TokioExecutor] bound to the runtime that
//! built the client. Applications can provide their own executor via
//! [ClientBuilder::with_executor][crate::client_builder::ClientBuilder::with_executor].

use crate::Result;
use crate::error::Error;
use futures::future::BoxFuture;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Schedules background work for a client.
///
/// # Example
/// ```
/// # use ctrlplane_gax::executor::Executor;
/// # use futures::future::BoxFuture;
/// #[derive(Debug)]
/// struct Spawner(tokio::runtime::Handle);
/// impl Executor for Spawner {
///     fn submit(&self, task: BoxFuture<'static, ()>) {
///         let _ = self.0.spawn(task);
///     }
/// }
/// ```
pub trait Executor: std::fmt::Debug + Send + Sync {
    /// Schedules `task` to run to completion.
    ///
    /// Implementations may drop the task, for example during shutdown. Any
    /// [Deferred] waiting on a dropped task resolves to an error.
    fn submit(&self, task: BoxFuture<'static, ()>);
}

/// A shareable [Executor].
pub type SharedExecutor = Arc<dyn Executor>;

/// An [Executor] spawning tasks on a Tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

impl TokioExecutor {
    /// Creates an executor spawning tasks on the runtime identified by `handle`.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Creates an executor for the current runtime.
    ///
    /// Fails if called outside the context of a Tokio runtime.
    pub fn try_current() -> std::result::Result<Self, tokio::runtime::TryCurrentError> {
        tokio::runtime::Handle::try_current().map(Self::new)
    }
}

impl Executor for TokioExecutor {
    fn submit(&self, task: BoxFuture<'static, ()>) {
        // Detached: the outcome is delivered through the task itself.
        let _ = self.handle.spawn(task);
    }
}

/// The pending outcome of a request scheduled on an [Executor].
///
/// # Example
/// ```
/// # use ctrlplane_gax::executor::{Deferred, TokioExecutor, SharedExecutor, internal};
/// # use std::sync::Arc;
/// # tokio_test::block_on(async {
/// let executor: SharedExecutor = Arc::new(TokioExecutor::try_current()?);
/// let deferred: Deferred<i32> = internal::defer(&executor, async { Ok(42) });
/// assert_eq!(deferred.await?, 42);
/// # anyhow::Ok(()) });
/// ```
#[derive(Debug)]
#[must_use = "the outcome is lost unless the deferred value is awaited"]
pub struct Deferred<T> {
    rx: oneshot::Receiver<Result<T>>,
}

impl<T> Future for Deferred<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(e)) => Poll::Ready(Err(Error::executor(e))),
        }
    }
}

/// Caller-supplied context for requests completed via a handler.
///
/// The context is passed back, unmodified, to the handler. Applications use
/// it to correlate handler invocations with the requests that started them.
///
/// # Example
/// ```
/// # use ctrlplane_gax::executor::AsyncCallerContext;
/// let context = AsyncCallerContext::new().set_uuid("my-request-id");
/// assert_eq!(context.uuid(), "my-request-id");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AsyncCallerContext {
    uuid: String,
}

impl AsyncCallerContext {
    /// Creates a context with a new random id.
    pub fn new() -> Self {
        Self {
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// The id of this context.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Changes the id of this context.
    pub fn set_uuid<T: Into<String>>(mut self, v: T) -> Self {
        self.uuid = v.into();
        self
    }
}

impl Default for AsyncCallerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! Implementation details used by the generated request builders.
    use super::*;

    /// Schedules `future` on `executor` and returns its pending outcome.
    pub fn defer<T, F>(executor: &SharedExecutor, future: F) -> Deferred<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        executor.submit(Box::pin(async move {
            // The receiver may be gone, nobody is waiting for the outcome then.
            let _ = tx.send(future.await);
        }));
        Deferred { rx }
    }

    /// The executor for clients created without a configuration.
    ///
    /// Returns a [TokioExecutor] for the current runtime. Outside a runtime
    /// the executor drops all tasks: any [Deferred] resolves to an error
    /// and handlers are never called.
    pub fn default_executor() -> SharedExecutor {
        match TokioExecutor::try_current() {
            Ok(e) => Arc::new(e),
            Err(_) => Arc::new(Unavailable),
        }
    }

    #[derive(Debug)]
    struct Unavailable;

    impl Executor for Unavailable {
        fn submit(&self, _task: BoxFuture<'static, ()>) {}
    }

    /// Schedules `future` on `executor` and calls `handler` with its outcome.
    pub fn submit<T, F, H>(executor: &SharedExecutor, future: F, handler: H)
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
        H: FnOnce(Result<T>) + Send + 'static,
    {
        executor.submit(Box::pin(async move {
            handler(future.await);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::sync::Mutex;

    static_assertions::assert_impl_all!(Deferred<String>: Send, Unpin);
    static_assertions::assert_impl_all!(AsyncCallerContext: Clone, Send, Sync);
    static_assertions::assert_impl_all!(TokioExecutor: Executor);

    #[derive(Debug, thiserror::Error)]
    #[error("test-only failure")]
    struct TestFailure;

    // An executor that drops every task.
    #[derive(Debug)]
    struct Dropping;
    impl Executor for Dropping {
        fn submit(&self, _task: BoxFuture<'static, ()>) {}
    }

    // An executor that records how many tasks it received.
    #[derive(Debug, Default)]
    struct Counting {
        count: Mutex<usize>,
        inner: Option<TokioExecutor>,
    }
    impl Executor for Counting {
        fn submit(&self, task: BoxFuture<'static, ()>) {
            *self.count.lock().unwrap() += 1;
            if let Some(inner) = &self.inner {
                inner.submit(task);
            }
        }
    }

    #[tokio::test]
    async fn defer_success() -> anyhow::Result<()> {
        let executor: SharedExecutor = Arc::new(TokioExecutor::try_current()?);
        let got = defer(&executor, async { Ok("done".to_string()) }).await?;
        assert_eq!(got, "done");
        Ok(())
    }

    #[tokio::test]
    async fn defer_error() -> anyhow::Result<()> {
        let executor: SharedExecutor = Arc::new(TokioExecutor::try_current()?);
        let got = defer::<String, _>(&executor, async { Err(Error::io(TestFailure)) }).await;
        assert!(matches!(&got, Err(e) if e.is_io()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn defer_dropped() {
        let executor: SharedExecutor = Arc::new(Dropping);
        let got = defer(&executor, async { Ok(42) }).await;
        assert!(matches!(&got, Err(e) if e.is_executor()), "{got:?}");
    }

    #[tokio::test]
    async fn submit_calls_handler() -> anyhow::Result<()> {
        let counting = Arc::new(Counting {
            count: Mutex::new(0),
            inner: Some(TokioExecutor::try_current()?),
        });
        let executor: SharedExecutor = counting.clone();
        let (tx, rx) = oneshot::channel();
        submit(&executor, async { Ok(7) }, move |outcome| {
            let _ = tx.send(outcome);
        });
        let got = rx.await?;
        assert!(matches!(got, Ok(7)), "{got:?}");
        assert_eq!(*counting.count.lock().unwrap(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn default_executor_in_runtime() -> anyhow::Result<()> {
        let executor = default_executor();
        let got = defer(&executor, async { Ok(42) }).await?;
        assert_eq!(got, 42);
        Ok(())
    }

    #[test]
    fn default_executor_outside_runtime() {
        let executor = default_executor();
        let got = tokio_test::block_on(defer(&executor, async { Ok(42) }));
        assert!(matches!(&got, Err(e) if e.is_executor()), "{got:?}");
    }

    #[test]
    fn tokio_executor_outside_runtime() {
        let got = TokioExecutor::try_current();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn caller_context() {
        let a = AsyncCallerContext::new();
        let b = AsyncCallerContext::default();
        assert_ne!(a.uuid(), b.uuid());
        assert!(uuid::Uuid::parse_str(a.uuid()).is_ok(), "{a:?}");

        let c = a.clone().set_uuid("custom");
        assert_eq!(c.uuid(), "custom");
        assert_ne!(a, c);
    }
}
