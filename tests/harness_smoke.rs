use mountcheck::component::Placeholder;
use mountcheck::{HarnessConfig, SmokeRunner};

#[test]
fn smoke_mount_placeholder() {
    let runner = SmokeRunner::new(HarnessConfig::default());
    assert!(runner.check(&Placeholder).is_ok());
}
