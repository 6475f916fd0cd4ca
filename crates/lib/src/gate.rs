//! Build completion gating.
//!
//! The completion notification fires for every build cycle, including the
//! incomplete intermediate states an incremental rebuild passes through.
//! Forwarding such a state would hand a broken bundle to the server, so the
//! gate skips it quietly and waits for a later cycle.

use std::fmt;

use tracing::debug;

use crate::compilation::{BuildFailure, BuildResult};

/// Why a cycle was not processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
  BuildFailed { message: String },
  CompilationErrors { count: usize },
  MissingDependencies { count: usize },
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SkipReason::BuildFailed { message } => write!(f, "compiler error: {}", message),
      SkipReason::CompilationErrors { count } => write!(f, "{} compilation error(s)", count),
      SkipReason::MissingDependencies { count } => write!(f, "{} missing dependencies", count),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
  Proceed,
  Skip(SkipReason),
}

impl GateDecision {
  pub fn should_proceed(&self) -> bool {
    matches!(self, GateDecision::Proceed)
  }
}

/// Decide whether a completed build is final and usable.
///
/// `fatal` is the error argument of the notification; a failure recorded on
/// the result itself is treated the same way. Checks run in order: fatal
/// failure, compilation errors, missing dependencies.
pub fn evaluate(fatal: Option<&BuildFailure>, result: &BuildResult) -> GateDecision {
  if let Some(failure) = fatal.or(result.error.as_ref()) {
    debug!(error = %failure, "compiler error");
    return GateDecision::Skip(SkipReason::BuildFailed {
      message: failure.message.clone(),
    });
  }

  if !result.compilation_errors.is_empty() {
    debug!(errors = ?result.compilation_errors, "compilation error");
    return GateDecision::Skip(SkipReason::CompilationErrors {
      count: result.compilation_errors.len(),
    });
  }

  if !result.missing_dependencies.is_empty() {
    debug!(
      missing = ?result.missing_dependencies,
      "aborting compilation; missing dependencies"
    );
    return GateDecision::Skip(SkipReason::MissingDependencies {
      count: result.missing_dependencies.len(),
    });
  }

  GateDecision::Proceed
}
