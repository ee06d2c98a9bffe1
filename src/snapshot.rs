//! Style snapshot serialization and the process-wide serializer/matcher
//! registry.
//!
//! Registration happens once per process and is idempotent: the first
//! serializer registered wins and later registrations are accepted no-ops,
//! so many test files can register the same serializer without stepping on
//! each other. Registration never changes the verdict of a smoke check.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use sha2::{Digest, Sha256};

use crate::component::StyleRule;
use crate::runner::RenderAttempt;

/// Formats captured style rules into a stable, human-readable text form
pub trait StyleSerializer: Send + Sync {
    fn serialize(&self, styles: &[StyleRule]) -> String;
}

static SERIALIZER: OnceLock<Box<dyn StyleSerializer>> = OnceLock::new();

/// Register the process-wide style serializer.
///
/// Returns `true` when this call installed the serializer, `false` when one
/// was already in place (the earlier registration is left untouched).
pub fn register_serializer(serializer: Box<dyn StyleSerializer>) -> bool {
    let installed = SERIALIZER.set(serializer).is_ok();
    if !installed {
        log::debug!("style serializer already registered, keeping the first one");
    }
    installed
}

/// Serialize style rules with the registered serializer, falling back to an
/// opaque sha256 digest when none has been registered.
pub fn serialize_styles(styles: &[StyleRule]) -> String {
    match SERIALIZER.get() {
        Some(s) => s.serialize(styles),
        None => digest_styles(styles),
    }
}

fn digest_styles(styles: &[StyleRule]) -> String {
    let mut hasher = Sha256::new();
    for rule in styles {
        hasher.update(rule.selector.as_bytes());
        for (property, value) in &rule.declarations {
            hasher.update(property.as_bytes());
            hasher.update(value.as_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

/// Human-readable serializer producing one CSS-like block per rule
pub struct TextSerializer;

impl StyleSerializer for TextSerializer {
    fn serialize(&self, styles: &[StyleRule]) -> String {
        let mut out = String::new();
        for rule in styles {
            out.push_str(&rule.selector);
            out.push_str(" {\n");
            for (property, value) in &rule.declarations {
                out.push_str("  ");
                out.push_str(property);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        }
        out
    }
}

/// An assertion extension applicable to a finished render attempt
pub trait Matcher: Send + Sync {
    /// Registry key for this matcher
    fn name(&self) -> &'static str;

    fn matches(&self, attempt: &RenderAttempt) -> bool;

    fn describe_failure(&self, attempt: &RenderAttempt) -> String;
}

type MatcherMap = HashMap<&'static str, Arc<dyn Matcher>>;

static MATCHERS: OnceLock<Mutex<MatcherMap>> = OnceLock::new();

fn matcher_registry() -> &'static Mutex<MatcherMap> {
    MATCHERS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Register a matcher extension.
///
/// Registering a name twice keeps the first entry and returns `false`.
pub fn register_matcher(matcher: Arc<dyn Matcher>) -> bool {
    if let Ok(mut map) = matcher_registry().lock() {
        if map.contains_key(matcher.name()) {
            return false;
        }
        map.insert(matcher.name(), matcher);
        return true;
    }
    false
}

/// Fetch a registered matcher by name
pub fn matcher(name: &str) -> Option<Arc<dyn Matcher>> {
    matcher_registry()
        .lock()
        .ok()
        .and_then(|map| map.get(name).cloned())
}

/// The assertion this harness is built around: the attempt raised nothing.
pub struct RendersWithoutError;

impl Matcher for RendersWithoutError {
    fn name(&self) -> &'static str {
        "renders-without-error"
    }

    fn matches(&self, attempt: &RenderAttempt) -> bool {
        attempt.error().is_none()
    }

    fn describe_failure(&self, attempt: &RenderAttempt) -> String {
        match attempt.error() {
            Some(e) => format!("{} raised: {}", attempt.target, e.message()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Outcome;

    fn rule(selector: &str, property: &str, value: &str) -> StyleRule {
        StyleRule {
            selector: selector.to_string(),
            declarations: vec![(property.to_string(), value.to_string())],
        }
    }

    #[test]
    fn digest_is_stable_and_opaque() {
        let styles = [rule("body", "color", "blue")];
        let a = digest_styles(&styles);
        let b = digest_styles(&styles);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_distinguishes_rules() {
        let a = digest_styles(&[rule("body", "color", "blue")]);
        let b = digest_styles(&[rule("body", "color", "red")]);
        assert_ne!(a, b);
    }

    #[test]
    fn text_serializer_is_human_readable() {
        let styles = [rule("header", "display", "flex")];
        let text = TextSerializer.serialize(&styles);
        assert_eq!(text, "header {\n  display: flex;\n}\n");
    }

    #[test]
    fn matcher_registration_is_idempotent() {
        let first = register_matcher(Arc::new(RendersWithoutError));
        let second = register_matcher(Arc::new(RendersWithoutError));
        // Another test may have registered first; re-registration must be a
        // no-op either way.
        assert!(!second || first);
        assert!(!register_matcher(Arc::new(RendersWithoutError)));
        assert!(matcher("renders-without-error").is_some());
    }

    #[test]
    fn renders_without_error_matches_success_only() {
        let ok = RenderAttempt {
            target: "placeholder".to_string(),
            outcome: Outcome::Succeeded,
            style_snapshot: None,
        };
        let failed = RenderAttempt {
            target: "broken".to_string(),
            outcome: Outcome::RaisedError(crate::Error::render("nope")),
            style_snapshot: None,
        };
        let m = RendersWithoutError;
        assert!(m.matches(&ok));
        assert!(!m.matches(&failed));
        assert_eq!(m.describe_failure(&failed), "broken raised: nope");
    }
}
