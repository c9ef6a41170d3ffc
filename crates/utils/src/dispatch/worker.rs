//! The serial background worker loop

use super::main_queue::Job;
use crossbeam::channel::Receiver;
use plumb_core::Error;
use std::panic::{self, AssertUnwindSafe};

/// Run producers one at a time until every sender is dropped
pub(crate) fn run(worker_name: String, jobs: Receiver<Job>) {
    tracing::debug!(worker = %worker_name, "dispatch worker started");

    let mut completed: u64 = 0;
    for (seq, job) in jobs.iter().enumerate() {
        let _span = crate::tracing::handoff_span(&worker_name, seq as u64).entered();
        match panic::catch_unwind(AssertUnwindSafe(job)) {
            Ok(()) => completed += 1,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic payload".to_string());
                let error = Error::dispatch("produce", reason);
                tracing::error!(
                    worker = %worker_name,
                    kind = error.kind(),
                    error = %error,
                    "producer panicked; its consumer will not run"
                );
            }
        }
    }

    tracing::debug!(worker = %worker_name, completed, "dispatch worker stopped");
}
