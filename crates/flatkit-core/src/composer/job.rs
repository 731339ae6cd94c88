//! Fragment jobs
//!
//! A job is whatever the composer will eventually flatten: fragments that
//! are already built, a deferred computation, or another composer.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

use super::FlatConfigComposer;
use crate::fragment::ConfigFragment;
use crate::result::Result;

/// One unit of scheduled work
pub enum FragmentJob {
    /// Fragments that are already available
    Ready(Vec<ConfigFragment>),
    /// Fragments produced by a deferred computation
    Deferred(BoxFuture<'static, Result<Vec<ConfigFragment>>>),
    /// A nested composer, flattened in place
    Nested(Box<FlatConfigComposer>),
}

impl FragmentJob {
    /// Wrap a future that yields fragments
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<Vec<ConfigFragment>>> + Send + 'static,
    {
        FragmentJob::Deferred(future.boxed())
    }

    /// Turn the job into a future over its fragments
    pub fn into_future(self) -> BoxFuture<'static, Result<Vec<ConfigFragment>>> {
        match self {
            FragmentJob::Ready(fragments) => futures::future::ready(Ok(fragments)).boxed(),
            FragmentJob::Deferred(future) => future,
            FragmentJob::Nested(composer) => async move {
                let resolved = composer.resolve_boxed().await?;
                Ok(resolved.to_vec())
            }
            .boxed(),
        }
    }
}

impl fmt::Debug for FragmentJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentJob::Ready(fragments) => f.debug_tuple("Ready").field(fragments).finish(),
            FragmentJob::Deferred(_) => f.write_str("Deferred(..)"),
            FragmentJob::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

impl From<ConfigFragment> for FragmentJob {
    fn from(fragment: ConfigFragment) -> Self {
        FragmentJob::Ready(vec![fragment])
    }
}

impl From<Vec<ConfigFragment>> for FragmentJob {
    fn from(fragments: Vec<ConfigFragment>) -> Self {
        FragmentJob::Ready(fragments)
    }
}

impl From<FlatConfigComposer> for FragmentJob {
    fn from(composer: FlatConfigComposer) -> Self {
        FragmentJob::Nested(Box::new(composer))
    }
}
