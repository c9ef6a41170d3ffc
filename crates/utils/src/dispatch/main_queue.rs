//! Foreground queue drained by the host on its designated thread

use crossbeam::channel::{unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

enum MainJob {
    Now(Job),
    // `None` is a deadline past the end of the clock: never due.
    At(Option<Instant>, Job),
}

/// Cloneable sender for work that must run on the main queue
#[derive(Clone)]
pub struct MainHandle {
    sender: Sender<MainJob>,
}

impl std::fmt::Debug for MainHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainHandle")
            .field("queued", &self.sender.len())
            .finish()
    }
}

impl MainHandle {
    /// Queue `job` to run the next time the main queue is drained
    pub fn post<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.sender.send(MainJob::Now(Box::new(job))).is_err() {
            tracing::warn!("main queue is gone, dropping job");
        }
    }

    /// Queue `job` to run on the main queue once `delay` has elapsed
    ///
    /// A delay too large for the clock to represent is accepted; the job is
    /// held as a timer that never comes due.
    pub fn after<F>(&self, delay: Duration, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now().checked_add(delay);
        if deadline.is_none() {
            tracing::debug!(
                delay_ms = delay.as_millis() as u64,
                "delay exceeds the clock range, job will never run"
            );
        }
        if self.sender.send(MainJob::At(deadline, Box::new(job))).is_err() {
            tracing::warn!(
                delay_ms = delay.as_millis() as u64,
                "main queue is gone, dropping delayed job"
            );
        }
    }
}

struct Timer {
    deadline: Option<Instant>,
    seq: u64,
    job: Job,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the BinaryHeap pops the earliest deadline first; ties go to
// the timer queued first.
impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_deadlines(other.deadline, self.deadline).then_with(|| other.seq.cmp(&self.seq))
    }
}

// A missing deadline sorts after every real one.
fn compare_deadlines(a: Option<Instant>, b: Option<Instant>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// What one wait on the queue achieved
enum Step {
    Ran(usize),
    /// Every handle is gone and no timer can ever come due
    Closed,
}

/// The foreground execution context
///
/// Jobs only run inside [`run_pending`](Self::run_pending),
/// [`run_next`](Self::run_next) or [`run_for`](Self::run_for), on whichever
/// thread calls them. That thread is the "main" thread as far as consumers are
/// concerned.
pub struct MainQueue {
    receiver: Receiver<MainJob>,
    timers: BinaryHeap<Timer>,
    next_seq: u64,
}

/// Create a connected handle/queue pair
pub fn channel() -> (MainHandle, MainQueue) {
    let (sender, receiver) = unbounded();
    (
        MainHandle { sender },
        MainQueue {
            receiver,
            timers: BinaryHeap::new(),
            next_seq: 0,
        },
    )
}

impl MainQueue {
    /// Run every job that is ready now and return how many ran
    ///
    /// Immediate jobs run in arrival order, then due timers in deadline order.
    /// Jobs posted while draining wait for the next call.
    pub fn run_pending(&mut self) -> usize {
        let now = Instant::now();
        let mut ran = 0;

        for _ in 0..self.receiver.len() {
            match self.receiver.try_recv() {
                Ok(job) => ran += self.accept(job),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        while self
            .timers
            .peek()
            .is_some_and(|timer| timer.deadline.is_some_and(|deadline| deadline <= now))
        {
            if let Some(timer) = self.timers.pop() {
                Self::execute(timer.job);
                ran += 1;
            }
        }

        ran
    }

    /// Wait up to `timeout` for work to become ready, then run everything
    /// that is ready. Returns 0 if nothing became ready in time.
    ///
    /// A timeout too large for the clock (such as `Duration::MAX`) blocks
    /// until work arrives, or returns 0 once no more work can arrive.
    pub fn run_next(&mut self, timeout: Duration) -> usize {
        match self.step(Instant::now().checked_add(timeout)) {
            Step::Ran(ran) => ran,
            Step::Closed => 0,
        }
    }

    /// Keep running jobs until `duration` has elapsed and return how many ran
    ///
    /// With a duration too large for the clock this runs until every handle
    /// is dropped and no timer can come due.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        let deadline = Instant::now().checked_add(duration);
        let mut ran = 0;

        while deadline.map_or(true, |deadline| Instant::now() < deadline) {
            match self.step(deadline) {
                Step::Ran(count) => ran += count,
                Step::Closed => break,
            }
        }

        ran + self.run_pending()
    }

    /// Number of delayed jobs that have been received but are not yet due
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn step(&mut self, give_up: Option<Instant>) -> Step {
        let ran = self.run_pending();
        if ran > 0 {
            return Step::Ran(ran);
        }

        let next_timer = self.timers.peek().and_then(|timer| timer.deadline);
        let wake = earliest(give_up, next_timer);

        let received = match wake {
            Some(wake) => self.receiver.recv_deadline(wake),
            None => self
                .receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(job) => {
                let ran = self.accept(job);
                Step::Ran(ran + self.run_pending())
            }
            Err(RecvTimeoutError::Timeout) => Step::Ran(self.run_pending()),
            // Nothing new can arrive; only timers are left.
            Err(RecvTimeoutError::Disconnected) => match wake {
                Some(wake) => {
                    let now = Instant::now();
                    if wake > now {
                        std::thread::sleep(wake - now);
                    }
                    Step::Ran(self.run_pending())
                }
                None => Step::Closed,
            },
        }
    }

    fn accept(&mut self, job: MainJob) -> usize {
        match job {
            MainJob::Now(job) => {
                Self::execute(job);
                1
            }
            MainJob::At(deadline, job) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.timers.push(Timer { deadline, seq, job });
                0
            }
        }
    }

    fn execute(job: Job) {
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            tracing::error!("main queue job panicked");
        }
    }
}
