//! Mountcheck
//!
//! A smoke-test harness for UI components: mount a zero-configuration
//! component through a pluggable collaborator and assert that the attempt
//! raises nothing. A serialized style snapshot can be captured along the
//! way, but it never influences the verdict.
//!
//! # Example
//!
//! ```
//! use mountcheck::component::Placeholder;
//! use mountcheck::{HarnessConfig, SmokeRunner};
//!
//! let runner = SmokeRunner::new(HarnessConfig::default());
//! let attempt = runner.attempt(&Placeholder);
//! assert!(attempt.succeeded());
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod component;
pub mod mount;
pub mod report;
pub mod runner;
pub mod snapshot;

pub use mount::{DirectMounter, Mounted, Mounter};
pub use report::TestReport;
pub use runner::{Outcome, RenderAttempt, SmokeRunner};

/// Configuration for the smoke-test harness
///
/// The defaults are conservative: a panic inside a component is caught and
/// reported as a failure, and style output is captured on success.
///
/// # Examples
///
/// ```
/// let cfg = mountcheck::HarnessConfig::default();
/// assert!(cfg.catch_panics);
/// ```
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Capture a serialized style snapshot on successful mounts
    pub capture_styles: bool,
    /// Convert a panic during the mount attempt into a reported failure
    pub catch_panics: bool,
    /// Stop a suite run at the first failing component
    pub stop_on_failure: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            capture_styles: true,
            catch_panics: true,
            stop_on_failure: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert!(config.capture_styles);
        assert!(config.catch_panics);
        assert!(!config.stop_on_failure);
    }
}
