use super::*;

#[test]
fn test_progress_bar_hidden_when_disabled() {
    let progress = LintProgress::new(100, false);
    progress.inc();
    progress.inc();
    progress.finish();
    assert_eq!(progress.position(), 2);
}

#[test]
fn test_progress_bar_visible_path_counts() {
    let progress = LintProgress::new_with_visibility(10, true);

    for _ in 0..10 {
        progress.inc();
    }

    assert_eq!(progress.position(), 10);
    progress.finish();
}

#[test]
fn test_progress_bar_clone_shares_counter() {
    let progress = LintProgress::hidden();
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
    progress.finish();
}
