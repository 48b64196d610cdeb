use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the file and a usable position.
///
/// **WHY THIS MATTERS**: Every registry error carries an `ErrorLocation`. If capture breaks,
/// a failed request can no longer be traced back to the operation that issued it.
///
/// **BUG THIS CATCHES**: Would catch if file path extraction or column capture breaks.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Capturing the current caller location
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` Display format.
///
/// **WHY THIS MATTERS**: Error messages end with this suffix; log scrapers and humans
/// rely on it being stable.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops brackets or fields.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/transport/executor.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Bracketed, colon separated
    assert_eq!(formatted, "[src/transport/executor.rs:42:7]");
}

/// **VALUE**: Verifies `#[track_caller]` propagation through `ErrorLocation::caller()`.
///
/// **WHY THIS MATTERS**: Error constructors in the client are `#[track_caller]` helpers.
/// If propagation breaks, every error points at the constructor instead of the call site.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[track_caller]` from `caller()`.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper that captures its caller
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::caller()
    }

    // WHEN: Capturing from two consecutive lines
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
