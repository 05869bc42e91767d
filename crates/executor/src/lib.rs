//! Executors for laying out independent timetable pages.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution on the calling thread
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//!
//! ## Usage
//!
//! ```ignore
//! use progbook_executor::{Executor, ExecutorImpl};
//!
//! let executor = ExecutorImpl::default();
//! let results = executor.execute_all(vec![1, 2, 3], |x| x * 2);
//! ```

mod traits;

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use traits::{Executor, ExecutorError, SyncExecutor};

/// A type-erased executor that wraps concrete executor implementations.
///
/// `Executor` has generic methods and cannot be a trait object, so the
/// pipeline holds this enum instead.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// The parallel executor when available and requested, else sequential.
    pub fn choose(parallel: bool) -> Self {
        #[cfg(feature = "rayon")]
        {
            if parallel {
                return ExecutorImpl::Rayon(RayonExecutor::new());
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        Self::choose(true)
    }
}
