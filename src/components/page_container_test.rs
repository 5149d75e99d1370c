use super::*;

#[test]
fn shell_spans_the_viewport_with_a_light_background() {
    assert!(PAGE_SHELL_CLASSES.contains("min-h-screen"));
    assert!(PAGE_SHELL_CLASSES.contains("bg-neutral-50"));
}
