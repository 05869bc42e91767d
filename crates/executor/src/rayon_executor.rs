//! Rayon-based parallel executor.

use crate::traits::{Executor, ExecutorError};
use rayon::prelude::*;
use std::sync::Arc;

/// A parallel executor backed by rayon's work-stealing pool.
///
/// [`RayonExecutor::new`] uses the global pool; [`RayonExecutor::with_threads`]
/// builds a dedicated one. `collect` on an indexed parallel iterator keeps input
/// order, so results line up with their items.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// An executor with its own pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, ExecutorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("progbook-layout-{}", i))
            .build()
            .map_err(|e| ExecutorError::new(e.to_string()))?;
        Ok(Self {
            num_threads: pool.current_num_threads(),
            pool: Some(Arc::new(pool)),
        })
    }

    fn run<R: Send>(&self, job: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(job),
            None => job(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.run(|| items.into_par_iter().map(f).collect())
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.run(|| items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
