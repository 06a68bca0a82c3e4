//! Component health probe.
//!
//! `PrivateShareMiddleware::health()` answers "is this component usable right
//! now?". It is a pure, non-blocking query that touches no shared mutable
//! state. Subsystems that need to take part in the answer register a
//! [`ComponentCheck`]; with none registered the component is always available.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Result of a health probe.
///
/// Built fresh on every query and handed to the caller by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: bool,
}

impl HealthStatus {
    pub const fn available() -> Self {
        Self { status: true }
    }

    pub const fn unavailable() -> Self {
        Self { status: false }
    }

    pub fn is_available(&self) -> bool {
        self.status
    }
}

/// Failure reported by a component check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HealthError {
    #[error("Component unavailable: {component}: {reason}")]
    Unavailable { component: String, reason: String },
}

impl HealthError {
    pub fn unavailable(component: impl Into<String>, reason: impl Into<String>) -> Self {
        HealthError::Unavailable {
            component: component.into(),
            reason: reason.into(),
        }
    }
}

/// A subsystem that contributes to the component's health.
///
/// Implementations are called on every probe, from any number of threads at
/// once, so `check` must not block or perform I/O. Read a cached flag or
/// counter that the subsystem maintains elsewhere.
pub trait ComponentCheck: Send + Sync {
    fn name(&self) -> &str;

    fn check(&self) -> Result<(), HealthError>;
}

/// Per-check outcome included in a [`HealthReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregate status plus the outcome of every registered check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: bool,
    pub checks: Vec<CheckOutcome>,
}

impl HealthReport {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus {
            status: self.status,
        }
    }
}

/// The private share middleware component.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
#[derive(Clone, Default)]
pub struct PrivateShareMiddleware {
    checks: Vec<Arc<dyn ComponentCheck>>,
}

impl PrivateShareMiddleware {
    /// Creates a component with no registered checks.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PrivateShareMiddlewareBuilder {
        PrivateShareMiddlewareBuilder::default()
    }

    /// Reports whether the component is operational.
    ///
    /// Never fails. Returns `status: true` unless a registered check reports
    /// a failure.
    pub fn health(&self) -> HealthStatus {
        for check in &self.checks {
            if let Err(e) = check.check() {
                tracing::debug!(component = %check.name(), error = %e, "Health check failed");
                return HealthStatus::unavailable();
            }
        }
        HealthStatus::available()
    }

    /// Evaluates every check and returns the individual outcomes.
    pub fn report(&self) -> HealthReport {
        let checks: Vec<CheckOutcome> = self
            .checks
            .iter()
            .map(|check| match check.check() {
                Ok(()) => CheckOutcome {
                    name: check.name().to_string(),
                    healthy: true,
                    reason: None,
                },
                Err(e) => {
                    tracing::warn!(component = %check.name(), error = %e, "Health check failed");
                    CheckOutcome {
                        name: check.name().to_string(),
                        healthy: false,
                        reason: Some(e.to_string()),
                    }
                }
            })
            .collect();

        HealthReport {
            status: checks.iter().all(|c| c.healthy),
            checks,
        }
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }
}

impl fmt::Debug for PrivateShareMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateShareMiddleware")
            .field(
                "checks",
                &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[derive(Default)]
pub struct PrivateShareMiddlewareBuilder {
    checks: Vec<Arc<dyn ComponentCheck>>,
}

impl PrivateShareMiddlewareBuilder {
    pub fn with_check<C: ComponentCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn with_shared_check(mut self, check: Arc<dyn ComponentCheck>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn build(self) -> PrivateShareMiddleware {
        PrivateShareMiddleware {
            checks: self.checks,
        }
    }
}
