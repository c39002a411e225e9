//! Load lifecycle shared by every data-backed page.
//!
//! A page spawns each read through [`LoadHandle::spawn`] and settles it into
//! a [`LoadState`]. Dropping the handle aborts the read, so a request that is
//! torn down (client gone, worker shutting down) never keeps a query alive,
//! and a cancelled handle discards whatever arrives late.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::rt::task::JoinHandle;
use tokio::task::AbortHandle;

use crate::source::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Displayable message of a failed load.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_loaded(self) -> Option<T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Cancels a pending load from anywhere; safe to call more than once.
#[derive(Clone)]
pub struct Canceller {
    cancelled: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl Canceller {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub struct LoadHandle<T> {
    label: &'static str,
    task: JoinHandle<Result<T, FetchError>>,
    cancelled: Arc<AtomicBool>,
}

impl<T: 'static> LoadHandle<T> {
    pub fn spawn<F>(label: &'static str, load: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + 'static,
    {
        Self {
            label,
            task: actix_web::rt::spawn(load),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn canceller(&self) -> Canceller {
        Canceller {
            cancelled: self.cancelled.clone(),
            abort: self.task.abort_handle(),
        }
    }

    /// State as seen by the page: `Loading` until settled, `Idle` once cancelled.
    pub fn state(&self) -> LoadState<()> {
        if self.cancelled.load(Ordering::SeqCst) {
            LoadState::Idle
        } else {
            LoadState::Loading
        }
    }

    /// Wait for the load. Failures are logged and become `Failed`; a
    /// cancelled load yields `Idle` even if its result already arrived.
    pub async fn settle(mut self) -> LoadState<T> {
        if self.cancelled.load(Ordering::SeqCst) {
            return LoadState::Idle;
        }
        let outcome = (&mut self.task).await;
        if self.cancelled.load(Ordering::SeqCst) {
            log::debug!("Discarding late {} result after cancellation", self.label);
            return LoadState::Idle;
        }
        match outcome {
            Ok(Ok(data)) => LoadState::Loaded(data),
            Ok(Err(e)) => {
                log::error!("{e}");
                LoadState::Failed(e.to_string())
            }
            Err(e) => {
                log::error!("Load of {} did not complete: {e}", self.label);
                LoadState::Failed(format!("loading {} was interrupted", self.label))
            }
        }
    }
}

impl<T> Drop for LoadHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
