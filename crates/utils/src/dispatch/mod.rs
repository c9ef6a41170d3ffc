//! Background-to-foreground handoff.
//!
//! A [`Dispatcher`] owns one serial background worker. [`Dispatcher::handoff`]
//! runs a producer on that worker and then queues a consumer, fed with the
//! producer's value, on the [`MainQueue`] returned alongside the dispatcher.
//! The host drains the main queue on whichever thread it treats as its
//! foreground context.
//!
//! The handoff is fire-and-forget: there is no return value, no error
//! channel, no cancellation and no backpressure. A producer that can fail
//! should return an [`Outcome`](plumb_core::Outcome).
//!
//! ```rust,no_run
//! use plumb_core::Outcome;
//! use plumb_utils::dispatch::{DispatchConfig, Dispatcher};
//! use std::time::Duration;
//!
//! # fn main() -> plumb_core::Result<()> {
//! let (dispatcher, mut main_queue) = Dispatcher::new(DispatchConfig::default())?;
//!
//! dispatcher.handoff(
//!     || Outcome::<u64>::Success((1..=20).product()),
//!     |factorial| factorial.for_each(|n| println!("20! = {n}")),
//! );
//!
//! main_queue.run_for(Duration::from_millis(100));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod main_queue;
mod worker;

pub use config::DispatchConfig;
pub use main_queue::{MainHandle, MainQueue};

use crossbeam::channel::{self, Sender};
use main_queue::Job;
use plumb_core::{Error, Result};
use std::thread::JoinHandle;
use std::time::Duration;

/// Owner of the serial background worker
pub struct Dispatcher {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
    main: MainHandle,
    config: DispatchConfig,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("running", &self.worker.is_some())
            .finish()
    }
}

impl Dispatcher {
    /// Spawn the background worker and create the main queue it reports to
    pub fn new(config: DispatchConfig) -> Result<(Self, MainQueue)> {
        config.validate()?;

        let (main, queue) = main_queue::channel();
        let (sender, receiver) = channel::unbounded::<Job>();

        let worker_name = config.worker_name.clone();
        let worker = std::thread::Builder::new()
            .name(config.worker_name.clone())
            .spawn(move || worker::run(worker_name, receiver))
            .map_err(|e| Error::io("spawn dispatch worker", e))?;

        tracing::debug!(worker = %config.worker_name, "dispatcher created");

        Ok((
            Self {
                sender: Some(sender),
                worker: Some(worker),
                main,
                config,
            },
            queue,
        ))
    }

    /// Run `producer` on the worker, then `consumer` on the main queue with
    /// the produced value
    pub fn handoff<P, C, R>(&self, producer: P, consumer: C)
    where
        P: FnOnce() -> R + Send + 'static,
        C: FnOnce(R) + Send + 'static,
        R: Send + 'static,
    {
        let main = self.main.clone();
        let job: Job = Box::new(move || {
            let value = producer();
            main.post(move || consumer(value));
        });
        self.submit(job);
    }

    /// Run `job` on the main queue once `delay` has elapsed
    pub fn delay<F>(&self, delay: Duration, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.main.after(delay, job);
    }

    /// A handle for queueing work directly on the main queue
    pub fn main_handle(&self) -> MainHandle {
        self.main.clone()
    }

    /// The configuration the worker was spawned with
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Stop accepting work, wait for queued producers, and join the worker
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn submit(&self, job: Job) {
        let Some(sender) = self.sender.as_ref() else {
            tracing::warn!("dispatcher is shut down, dropping producer");
            return;
        };
        if sender.send(job).is_err() {
            tracing::warn!(worker = %self.config.worker_name, "dispatch worker is gone, dropping producer");
        }
    }

    fn stop(&mut self) -> Result<()> {
        // Closing the channel ends the worker loop once the backlog drains.
        drop(self.sender.take());

        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| {
                Error::dispatch("join", format!("worker '{}' panicked", self.config.worker_name))
            }),
            None => Ok(()),
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if !self.config.join_on_drop {
            drop(self.sender.take());
            // Detach: the worker exits on its own after the backlog.
            drop(self.worker.take());
            tracing::debug!(worker = %self.config.worker_name, "dispatch worker detached");
            return;
        }
        if let Err(e) = self.stop() {
            tracing::error!(kind = e.kind(), error = %e, "dispatcher shutdown failed");
        }
    }
}
