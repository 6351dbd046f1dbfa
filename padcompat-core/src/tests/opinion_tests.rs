use super::*;

#[test]
fn confidence_is_clamped_on_construction() {
    let high = DetectionOpinion::new(SupportLevel::Full, 1.5, "Test");
    assert_eq!(high.confidence(), 1.0);
    let low = DetectionOpinion::new(SupportLevel::None, -0.3, "Test");
    assert_eq!(low.confidence(), 0.0);
    let nan = DetectionOpinion::new(SupportLevel::Partial, f64::NAN, "Test");
    assert_eq!(nan.confidence(), 0.0);
}

#[test]
fn in_range_confidence_is_kept() {
    let opinion = DetectionOpinion::new(SupportLevel::Partial, 0.4, "Test");
    assert_eq!(opinion.confidence(), 0.4);
    assert!(opinion.has_signal());
}

#[test]
fn no_signal_has_zero_confidence() {
    let opinion = DetectionOpinion::no_signal("Test");
    assert_eq!(opinion.level, SupportLevel::Unknown);
    assert!(!opinion.has_signal());
}
