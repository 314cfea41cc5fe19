use release_bump::warning::BumpWarning;
use std::path::PathBuf;

// ============================================================================
// BumpWarning Display Tests
// ============================================================================

#[test]
fn test_malformed_part_argument_display() {
    let warning = BumpWarning::MalformedPartArgument {
        argument: "minor".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("'minor'"),
        "Message should quote the argument, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("bumping patch"),
        "Message should name the fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_unrecognized_part_display() {
    let warning = BumpWarning::UnrecognizedPart {
        argument: "--part=mnior".to_string(),
        value: "mnior".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Unrecognized version part 'mnior'"),
        "Message should name the bad value, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("--part=mnior"),
        "Message should contain the full argument, got: {}",
        display_msg
    );
}

#[test]
fn test_pattern_not_found_display() {
    let warning = BumpWarning::PatternNotFound {
        path: PathBuf::from("/repo/lerna.json"),
        pattern: "json".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("/repo/lerna.json"),
        "Message should contain the path, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("No json version"),
        "Message should contain the pattern kind, got: {}",
        display_msg
    );
}

#[test]
fn test_staging_warnings_display() {
    let failed = BumpWarning::StagingFailed {
        reason: "Staging failed: git add exited with code 128".to_string(),
    };
    assert!(failed.to_string().contains("Could not stage version files"));
    assert!(failed.to_string().contains("code 128"));

    let stderr = BumpWarning::StagingStderr {
        output: "warning: CRLF will be replaced by LF\n".to_string(),
    };
    assert_eq!(
        stderr.to_string(),
        "Git command error output: warning: CRLF will be replaced by LF"
    );
}
