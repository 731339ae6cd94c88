//! Chainable, lazily resolved fragment list
//!
//! A [`FlatConfigComposer`] moves through three phases:
//!
//! - **Building**: jobs and operations are queued; nothing has run yet.
//! - **Resolving**: jobs are awaited (concurrently, but flattened in declared
//!   order), queued operations are applied, and plugins are renamed.
//! - **Resolved**: the flattened list is cached; every later resolution
//!   returns the same list.
//!
//! There is no way back to Building. Builder calls made after resolution are
//! logged and ignored.

mod job;
mod ops;
mod rename;

pub use job::FragmentJob;
pub use rename::PluginRenames;

use futures::future::{BoxFuture, try_join_all};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::FlatkitError;
use crate::fragment::ConfigFragment;
use crate::result::Result;
use ops::Operation;

/// Observable composer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    Building,
    Resolving,
    Resolved,
    Failed,
}

#[derive(Debug, Default)]
struct Pending {
    jobs: Vec<FragmentJob>,
    operations: Vec<Operation>,
    renames: Option<PluginRenames>,
}

#[derive(Debug)]
enum ComposerState {
    Building(Pending),
    Resolving,
    Resolved(Arc<[ConfigFragment]>),
    Failed(String),
}

/// Ordered, awaitable collection of flat-config fragments
#[derive(Debug)]
pub struct FlatConfigComposer {
    state: Mutex<ComposerState>,
}

impl Default for FlatConfigComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatConfigComposer {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ComposerState::Building(Pending::default())),
        }
    }

    /// Composer seeded with jobs, in order
    pub fn from_jobs<I>(jobs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FragmentJob>,
    {
        let mut composer = Self::new();
        if let Some(pending) = composer.pending_mut("from_jobs") {
            pending.jobs.extend(jobs.into_iter().map(Into::into));
        }
        composer
    }

    fn pending_mut(&mut self, operation: &str) -> Option<&mut Pending> {
        match self.state.get_mut() {
            ComposerState::Building(pending) => Some(pending),
            _ => {
                tracing::warn!("Ignoring '{}' on a composer that is no longer building", operation);
                None
            }
        }
    }

    /// Add fragments after everything queued so far
    pub fn append(mut self, job: impl Into<FragmentJob>) -> Self {
        if let Some(pending) = self.pending_mut("append") {
            pending.jobs.push(job.into());
        }
        self
    }

    /// Add several jobs after everything queued so far, keeping their order
    pub fn append_all<I>(mut self, jobs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FragmentJob>,
    {
        if let Some(pending) = self.pending_mut("append") {
            pending.jobs.extend(jobs.into_iter().map(Into::into));
        }
        self
    }

    /// Add fragments before everything queued so far
    pub fn prepend(mut self, job: impl Into<FragmentJob>) -> Self {
        if let Some(pending) = self.pending_mut("prepend") {
            pending.jobs.insert(0, job.into());
        }
        self
    }

    /// Insert fragments right after the fragment with this name
    pub fn insert_after(mut self, name: impl Into<String>, job: impl Into<FragmentJob>) -> Self {
        if let Some(pending) = self.pending_mut("insert_after") {
            pending.operations.push(Operation::InsertAfter {
                name: name.into(),
                job: job.into(),
            });
        }
        self
    }

    /// Insert fragments right before the fragment with this name
    pub fn insert_before(mut self, name: impl Into<String>, job: impl Into<FragmentJob>) -> Self {
        if let Some(pending) = self.pending_mut("insert_before") {
            pending.operations.push(Operation::InsertBefore {
                name: name.into(),
                job: job.into(),
            });
        }
        self
    }

    /// Merge a patch into the fragment with this name
    pub fn override_config(mut self, name: impl Into<String>, patch: ConfigFragment) -> Self {
        if let Some(pending) = self.pending_mut("override_config") {
            pending.operations.push(Operation::Override {
                name: name.into(),
                patch,
            });
        }
        self
    }

    /// Drop the fragment with this name
    pub fn remove(mut self, name: impl Into<String>) -> Self {
        if let Some(pending) = self.pending_mut("remove") {
            pending.operations.push(Operation::Remove { name: name.into() });
        }
        self
    }

    /// Drop these rules from every fragment
    pub fn remove_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(pending) = self.pending_mut("remove_rules") {
            pending.operations.push(Operation::RemoveRules {
                rules: rules.into_iter().map(Into::into).collect(),
            });
        }
        self
    }

    /// Rename plugin namespaces once, after everything else
    ///
    /// Repeated calls merge their tables.
    pub fn rename_plugins(mut self, renames: PluginRenames) -> Self {
        if let Some(pending) = self.pending_mut("rename_plugins") {
            match pending.renames.as_mut() {
                Some(existing) => existing.extend(renames),
                None => pending.renames = Some(renames),
            }
        }
        self
    }

    /// Current phase, without waiting on an in-flight resolution
    pub fn phase(&self) -> ComposerPhase {
        match self.state.try_lock() {
            Ok(state) => match &*state {
                ComposerState::Building(_) => ComposerPhase::Building,
                ComposerState::Resolving => ComposerPhase::Resolving,
                ComposerState::Resolved(_) => ComposerPhase::Resolved,
                ComposerState::Failed(_) => ComposerPhase::Failed,
            },
            Err(_) => ComposerPhase::Resolving,
        }
    }

    /// Resolve to the flattened, ordered fragment list
    ///
    /// The first call does the work; later calls return the cached list.
    /// A failing job aborts the whole resolution and no partial list is kept.
    pub async fn resolve(&self) -> Result<Arc<[ConfigFragment]>> {
        self.resolve_boxed().await
    }

    /// Resolve and return an owned copy of the list
    pub async fn to_configs(&self) -> Result<Vec<ConfigFragment>> {
        Ok(self.resolve().await?.to_vec())
    }

    pub(crate) fn resolve_boxed(&self) -> BoxFuture<'_, Result<Arc<[ConfigFragment]>>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;

            let pending = match std::mem::replace(&mut *state, ComposerState::Resolving) {
                ComposerState::Building(pending) => pending,
                ComposerState::Resolved(configs) => {
                    *state = ComposerState::Resolved(configs.clone());
                    return Ok(configs);
                }
                ComposerState::Failed(message) => {
                    *state = ComposerState::Failed(message.clone());
                    return Err(FlatkitError::ComposerFailed { message });
                }
                ComposerState::Resolving => {
                    let message = "an earlier resolution was abandoned midway".to_string();
                    *state = ComposerState::Failed(message.clone());
                    return Err(FlatkitError::ComposerFailed { message });
                }
            };

            match Self::flatten(pending).await {
                Ok(configs) => {
                    let configs: Arc<[ConfigFragment]> = configs.into();
                    tracing::info!("Resolved {} config fragments", configs.len());
                    *state = ComposerState::Resolved(configs.clone());
                    Ok(configs)
                }
                Err(err) => {
                    tracing::debug!("Composer resolution failed: {}", err);
                    *state = ComposerState::Failed(err.to_string());
                    Err(err)
                }
            }
        })
    }

    async fn flatten(pending: Pending) -> Result<Vec<ConfigFragment>> {
        let Pending {
            jobs,
            operations,
            renames,
        } = pending;

        tracing::debug!("Flattening {} fragment jobs", jobs.len());
        let resolved = try_join_all(jobs.into_iter().map(FragmentJob::into_future)).await?;
        let mut configs: Vec<ConfigFragment> = resolved.into_iter().flatten().collect();

        for operation in operations {
            operation.apply(&mut configs).await?;
        }

        match renames {
            Some(renames) if !renames.is_empty() => {
                renames.validate()?;
                Ok(renames.rename_fragments(&configs))
            }
            _ => Ok(configs),
        }
    }
}
