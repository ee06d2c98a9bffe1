//! The smoke runner: one mount attempt, one discriminated outcome.

use crate::component::Component;
use crate::mount::{DirectMounter, Mounter};
use crate::{snapshot, Error, HarnessConfig, Result};

/// Terminal outcome of a render attempt
#[derive(Debug, Clone)]
pub enum Outcome {
    Succeeded,
    RaisedError(Error),
}

/// Record of a single render attempt.
///
/// Created by one runner invocation and consumed immediately by the
/// assertion or report; it carries no identity beyond the target name.
#[derive(Debug, Clone)]
pub struct RenderAttempt {
    /// Type name of the component that was mounted
    pub target: String,
    pub outcome: Outcome,
    /// Serialized style output, captured only on success and only when
    /// enabled in config. Never inspected by the pass/fail decision.
    pub style_snapshot: Option<String>,
}

impl RenderAttempt {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded)
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.outcome {
            Outcome::Succeeded => None,
            Outcome::RaisedError(e) => Some(e),
        }
    }
}

/// Performs mount attempts through a mount collaborator
pub struct SmokeRunner<M = DirectMounter> {
    config: HarnessConfig,
    mounter: M,
}

impl SmokeRunner<DirectMounter> {
    /// Runner with the default direct mounter
    pub fn new(config: HarnessConfig) -> Self {
        let mounter = DirectMounter::new(config.catch_panics);
        Self { config, mounter }
    }
}

impl<M: Mounter> SmokeRunner<M> {
    /// Runner backed by a custom mount collaborator
    pub fn with_mounter(config: HarnessConfig, mounter: M) -> Self {
        Self { config, mounter }
    }

    /// Perform one mount attempt and record the outcome.
    ///
    /// This never raises itself: an error inside the collaborator lands in
    /// the `RaisedError` arm of the outcome. A single synchronous attempt,
    /// no retries, no timeout.
    pub fn attempt(&self, component: &dyn Component) -> RenderAttempt {
        let target = component.type_name().to_string();
        log::debug!("mounting {}", target);

        match self.mounter.mount(component) {
            Ok(mounted) => {
                let style_snapshot = if self.config.capture_styles {
                    Some(snapshot::serialize_styles(mounted.styles()))
                } else {
                    None
                };
                RenderAttempt {
                    target,
                    outcome: Outcome::Succeeded,
                    style_snapshot,
                }
            }
            Err(e) => {
                log::debug!("mount of {} raised: {}", target, e.message());
                RenderAttempt {
                    target,
                    outcome: Outcome::RaisedError(e),
                    style_snapshot: None,
                }
            }
        }
    }

    /// Assert that mounting the component raises nothing
    pub fn check(&self, component: &dyn Component) -> Result<()> {
        match self.attempt(component).outcome {
            Outcome::Succeeded => Ok(()),
            Outcome::RaisedError(e) => Err(e),
        }
    }

    /// Run a sequence of components, honoring `stop_on_failure`
    pub fn run_suite(&self, components: &[Box<dyn Component>]) -> Vec<RenderAttempt> {
        let mut attempts = Vec::with_capacity(components.len());
        for component in components {
            let attempt = self.attempt(component.as_ref());
            let failed = !attempt.succeeded();
            attempts.push(attempt);
            if failed && self.config.stop_on_failure {
                break;
            }
        }
        attempts
    }
}
