//! Runtime helpers for plumb
//!
//! This crate hosts the pieces that touch threads, clocks or the process
//! environment: the background-to-foreground [`dispatch`] handoff, tracing
//! setup, and small time and text helpers.

pub mod dispatch;
pub mod text;
pub mod time;
pub mod tracing;

pub use dispatch::{DispatchConfig, Dispatcher, MainHandle, MainQueue};
pub use text::{count_occurrences, words};
pub use time::TimeUnits;
