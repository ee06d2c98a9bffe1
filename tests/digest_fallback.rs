// Runs in its own test process: nothing here registers a serializer, so the
// captured snapshot must be the opaque digest fallback.

use mountcheck::component::Banner;
use mountcheck::{HarnessConfig, SmokeRunner};

#[test]
fn snapshot_is_an_opaque_digest_without_a_registered_serializer() {
    let runner = SmokeRunner::new(HarnessConfig::default());
    let attempt = runner.attempt(&Banner);
    assert!(attempt.succeeded());

    let snapshot = attempt.style_snapshot.expect("styles must be captured");
    assert_eq!(snapshot.len(), 64);
    assert!(snapshot.chars().all(|c| c.is_ascii_hexdigit()));

    // Same styles, same digest.
    let again = runner.attempt(&Banner);
    assert_eq!(again.style_snapshot.as_deref(), Some(snapshot.as_str()));
}
