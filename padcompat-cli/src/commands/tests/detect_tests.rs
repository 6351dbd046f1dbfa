use super::*;

#[test]
fn join_progress_reports_clean_exit() {
    assert!(join_progress(std::thread::spawn(|| {})));
}

#[test]
fn join_progress_reports_panicked_display() {
    let handle = std::thread::spawn(|| panic!("progress bar failed"));
    assert!(!join_progress(handle));
}
