/// Constants used throughout the plumb codebase
// Environment variable names
pub const PLUMB_WORKER_NAME_VAR: &str = "PLUMB_WORKER_NAME";
pub const PLUMB_LOG_VAR: &str = "PLUMB_LOG";

// Dispatch defaults
pub const DEFAULT_WORKER_NAME: &str = "serial-worker";
