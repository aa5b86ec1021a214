use rancher_catalog::boundary::CatalogWarning;

// ============================================================================
// CatalogWarning Display Tests
// ============================================================================

#[test]
fn test_invalid_tag_regex_display() {
    let warning = CatalogWarning::InvalidTagRegex {
        pattern: "[0-9".to_string(),
        reason: "unclosed character class".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Failed to compile tag regex"),
        "Message should mention the regex failure, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("[0-9"),
        "Message should contain the pattern, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("unclosed character class"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_no_files_changed_display() {
    let display_msg = CatalogWarning::NoFilesChanged.to_string();
    assert!(
        display_msg.contains("No files changed"),
        "Message should contain 'No files changed', got: {}",
        display_msg
    );
}

#[test]
fn test_dry_run_display() {
    let display_msg = CatalogWarning::DryRun.to_string();
    assert!(
        display_msg.contains("skipping commit and push"),
        "Message should explain what is skipped, got: {}",
        display_msg
    );
}
