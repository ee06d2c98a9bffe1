//! The mount collaborator seam.
//!
//! The harness depends only on the raise/no-raise contract of `Mounter`.
//! `DirectMounter` is the default collaborator used when no external
//! renderer is plugged in: it invokes the component's render and, when panic
//! capture is enabled, maps a panic into an error instead of letting it
//! unwind through the test process.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::component::{Component, RenderOutput, StyleRule};
use crate::{Error, Result};

/// Handle to a successfully mounted component
#[derive(Debug, Clone)]
pub struct Mounted {
    /// Output representation produced by the component
    pub output: RenderOutput,
}

impl Mounted {
    pub fn styles(&self) -> &[StyleRule] {
        &self.output.styles
    }
}

/// A mount collaborator: takes a component descriptor and either returns a
/// handle to the mounted instance or raises an error.
pub trait Mounter {
    fn mount(&self, component: &dyn Component) -> Result<Mounted>;
}

/// Default collaborator backing `SmokeRunner::new`
pub struct DirectMounter {
    catch_panics: bool,
}

impl DirectMounter {
    pub fn new(catch_panics: bool) -> Self {
        Self { catch_panics }
    }
}

impl Default for DirectMounter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Mounter for DirectMounter {
    fn mount(&self, component: &dyn Component) -> Result<Mounted> {
        if !self.catch_panics {
            return component.render().map(|output| Mounted { output });
        }

        match panic::catch_unwind(AssertUnwindSafe(|| component.render())) {
            Ok(Ok(output)) => Ok(Mounted { output }),
            Ok(Err(e)) => Err(e),
            Err(payload) => Err(Error::render(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Placeholder;

    struct Panics;

    impl Component for Panics {
        fn type_name(&self) -> &str {
            "panics"
        }

        fn render(&self) -> Result<RenderOutput> {
            panic!("render exploded");
        }
    }

    struct Fails;

    impl Component for Fails {
        fn type_name(&self) -> &str {
            "fails"
        }

        fn render(&self) -> Result<RenderOutput> {
            Err(Error::render_with_stack("bad prop", "at render (fails:3:9)"))
        }
    }

    #[test]
    fn mounts_a_well_behaved_component() {
        let mounted = DirectMounter::default()
            .mount(&Placeholder)
            .expect("placeholder must mount");
        assert!(mounted.styles().is_empty());
    }

    #[test]
    fn panic_is_converted_into_an_error() {
        let err = DirectMounter::default().mount(&Panics).unwrap_err();
        assert_eq!(err.message(), "render exploded");
    }

    #[test]
    fn component_errors_pass_through_untouched() {
        let err = DirectMounter::default().mount(&Fails).unwrap_err();
        assert_eq!(err.message(), "bad prop");
        assert_eq!(err.stack(), Some("at render (fails:3:9)"));
    }
}
