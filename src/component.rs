//! Component descriptors and the minimal output representation they produce.
//!
//! The harness does not render anything itself. A `Component` hands back a
//! small node tree plus whatever style rules it declares, and the mount
//! collaborator decides what to do with them.

use crate::{Error, Result};

/// A zero-configuration UI component descriptor.
///
/// Implementations must be constructible without any required inputs; the
/// harness supplies none when mounting them. An `Err` from `render` models a
/// throw during construction/render and fails the smoke check.
pub trait Component {
    /// Component type name, used to label attempts and reports
    fn type_name(&self) -> &str;

    /// Produce the component's output representation
    fn render(&self) -> Result<RenderOutput>;
}

/// A single node in the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// A style rule attached to the output: selector plus declaration block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

/// Output representation handed back by a component render
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub root: Node,
    pub styles: Vec<StyleRule>,
}

impl RenderOutput {
    /// Output consisting of a single node with no children and no styles
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            root: Node::leaf(name),
            styles: Vec::new(),
        }
    }
}

/// A static placeholder with no children, a known-good mount target
pub struct Placeholder;

impl Component for Placeholder {
    fn type_name(&self) -> &str {
        "placeholder"
    }

    fn render(&self) -> Result<RenderOutput> {
        Ok(RenderOutput::empty("div"))
    }
}

/// A styled banner: one child node and a couple of style rules, so style
/// capture has something to serialize
pub struct Banner;

impl Component for Banner {
    fn type_name(&self) -> &str {
        "banner"
    }

    fn render(&self) -> Result<RenderOutput> {
        let mut root = Node::leaf("header");
        root.children.push(Node::leaf("h1"));
        Ok(RenderOutput {
            root,
            styles: vec![
                StyleRule {
                    selector: "header".to_string(),
                    declarations: vec![
                        ("display".to_string(), "flex".to_string()),
                        ("color".to_string(), "#333".to_string()),
                    ],
                },
                StyleRule {
                    selector: "h1".to_string(),
                    declarations: vec![("font-size".to_string(), "2rem".to_string())],
                },
            ],
        })
    }
}

/// A component that always raises during render, exercising the FAIL path
pub struct AlwaysFails;

impl Component for AlwaysFails {
    fn type_name(&self) -> &str {
        "always-fails"
    }

    fn render(&self) -> Result<RenderOutput> {
        Err(Error::render("missing required prop"))
    }
}

/// Names of all built-in components, in a stable order
pub const BUILTIN_NAMES: &[&str] = &["placeholder", "banner", "always-fails"];

/// Look up a built-in component by name (used by the CLI)
pub fn builtin(name: &str) -> Option<Box<dyn Component>> {
    match name {
        "placeholder" => Some(Box::new(Placeholder)),
        "banner" => Some(Box::new(Banner)),
        "always-fails" => Some(Box::new(AlwaysFails)),
        _ => None,
    }
}
