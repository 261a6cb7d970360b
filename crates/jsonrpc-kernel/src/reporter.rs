//! Reporting of unexpected failures
//!
//! Protocol-visible failures ([`ResponseError`]) are expected client-facing
//! conditions and never reach the reporter. Everything else is reported
//! before being rendered as an internal error.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::error;

use crate::error::ResponseError;

/// How serious a reported failure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Critical => f.write_str("critical"),
        }
    }
}

/// Destination for reported failures
pub trait FailureReporter: Send + Sync {
    fn log(&self, severity: Severity, failure: &(dyn Error + 'static));
}

/// Reports failures as `tracing` error events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn log(&self, severity: Severity, failure: &(dyn Error + 'static)) {
        let mut sources = Vec::new();
        let mut current = failure.source();
        while let Some(source) = current {
            sources.push(source.to_string());
            current = source.source();
        }

        error!(
            severity = %severity,
            error = %failure,
            error.sources = ?sources,
            "JSON-RPC call failed"
        );
    }
}

type Filter = fn(&(dyn Error + 'static)) -> bool;

fn is_type<E: Error + 'static>(failure: &(dyn Error + 'static)) -> bool {
    failure.is::<E>()
}

/// A reporter plus the list of failure types it must stay silent about
#[derive(Clone)]
pub struct Reporter {
    sink: Arc<dyn FailureReporter>,
    dont_report: Vec<Filter>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(Arc::new(TracingReporter))
    }
}

impl Reporter {
    pub fn new(sink: Arc<dyn FailureReporter>) -> Self {
        Self {
            sink,
            dont_report: vec![is_type::<ResponseError> as Filter],
        }
    }

    /// Stop reporting failures of type `E`
    pub fn dont_report<E: Error + 'static>(mut self) -> Self {
        self.dont_report.push(is_type::<E>);
        self
    }

    pub fn should_report(&self, failure: &(dyn Error + 'static)) -> bool {
        !self.dont_report.iter().any(|filter| filter(failure))
    }

    /// Forward the failure to the sink unless it is on the don't-report list
    pub fn report(&self, severity: Severity, failure: &(dyn Error + 'static)) {
        if self.should_report(failure) {
            self.sink.log(severity, failure);
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("dont_report", &self.dont_report.len())
            .finish_non_exhaustive()
    }
}
