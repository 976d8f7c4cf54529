#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_reports_nothing_written_without_a_document() {
    assert!(!apply(Theme::Dark));
    assert!(!apply(Theme::Light));
}
