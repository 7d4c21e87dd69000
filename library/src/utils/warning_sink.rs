use log::warn;

/// Capability through which the import pass reports non-fatal problems.
/// Nothing sent here aborts the import.
pub trait WarningSink {
    fn warning(&self, message: &str);
}

/// Forwards import warnings to the `log` facade.
#[derive(Default)]
pub struct LogWarningSink;

impl WarningSink for LogWarningSink {
    fn warning(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Discards every warning. Stands in when the caller has no log to write to.
#[derive(Default)]
pub struct SilentWarningSink;

impl WarningSink for SilentWarningSink {
    fn warning(&self, _message: &str) {}
}
