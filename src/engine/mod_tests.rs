use std::path::PathBuf;

use super::*;

#[test]
fn finding_display_with_location() {
    let finding = Finding {
        location: Some(Location {
            file: PathBuf::from("Sources/Main.swift"),
            line: 3,
            column: 7,
        }),
        category: "Spacing".to_string(),
        message: "remove trailing space".to_string(),
    };

    assert_eq!(
        finding.to_string(),
        "Sources/Main.swift:3:7: [Spacing] remove trailing space"
    );
}

#[test]
fn finding_display_without_location() {
    let finding = Finding {
        location: None,
        category: "error".to_string(),
        message: "unreadable".to_string(),
    };

    assert_eq!(finding.to_string(), "[error] unreadable");
}
