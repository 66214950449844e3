//! Runs the pipeline on a dedicated thread so a host can give up on a
//! program that does not terminate.

use crate::{Conf, Outcome, err::*, run_typed};
use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

#[derive(Debug, Clone)]
pub struct Worker {
    pub stack_size: usize,
    pub timeout: Option<Duration>,
}

impl Worker {
    pub fn new(conf: &Conf) -> Self {
        Worker { stack_size: conf.stack_size(), timeout: conf.timeout() }
    }

    /// Run a whole program on a fresh worker.
    pub fn run(&self, source: String) -> Result<Outcome> {
        self.spawn(move || run_typed(&source))?
    }

    /// Run `job` on a fresh named thread and wait for its answer.
    ///
    /// On timeout the thread is left detached; nothing shared is left
    /// behind, so the host may exit to reclaim it.
    pub fn spawn<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new().name("tylam-worker".into()).stack_size(self.stack_size).spawn(
            move || {
                // the receiver may have timed out and gone away
                let _ = tx.send(job());
            },
        )?;
        match self.timeout {
            | Some(timeout) => rx.recv_timeout(timeout).map_err(|err| match err {
                | RecvTimeoutError::Timeout => {
                    log::warn!(
                        "worker exceeded {} ms; its thread keeps running until the process exits",
                        timeout.as_millis()
                    );
                    RunError::Timeout(timeout)
                }
                | RecvTimeoutError::Disconnected => RunError::WorkerDied,
            }),
            | None => rx.recv().map_err(|_| RunError::WorkerDied),
        }
    }
}
