// Unit tests for the static timeout profile table.

use crate::api::OperationCategory;

use std::time::Duration;

/// **VALUE**: Pins every category to its exact timeout value.
///
/// **WHY THIS MATTERS**: The timeout is the only cancellation mechanism a
/// call has. If an edit nudges one of these values, uploads start failing
/// under normal backend load or status checks stop failing fast.
///
/// **BUG THIS CATCHES**: Any accidental change to the table, including a
/// category falling back to some shared default.
#[test]
fn given_each_category_when_timeout_queried_then_matches_profile_table() {
    // GIVEN/WHEN/THEN: Each category maps to its fixed duration
    assert_eq!(
        OperationCategory::Default.timeout(),
        Duration::from_secs(10)
    );
    assert_eq!(OperationCategory::Upload.timeout(), Duration::from_secs(30));
    assert_eq!(
        OperationCategory::Question.timeout(),
        Duration::from_secs(60)
    );
    assert_eq!(
        OperationCategory::StatusCheck.timeout(),
        Duration::from_secs(5)
    );
}

#[test]
fn given_category_when_copied_then_compares_equal() {
    // GIVEN: A category value
    let category = OperationCategory::Question;

    // WHEN: Copying it
    let copy = category;

    // THEN: Copies compare equal and select the same timeout
    assert_eq!(category, copy);
    assert_eq!(category.timeout(), copy.timeout());
}
