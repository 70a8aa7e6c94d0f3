//! Integration Test: Sleep Prohibition
//!
//! **Policy**: The phrase cycler never sleeps on its own. All waiting goes
//! through the `Timer` in `cycler/core/src/timer.rs`, which is what lets the
//! animation run on a virtual clock in tests.
//! **Exceptions**: the timer module itself, frame rate limiting in the TUI
//! app loop, test code.

use architectural_enforcement::{find_sleep_violations, workspace_root, SleepPolicy};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let root = workspace_root();
    let mut violations = find_sleep_violations(
        &root.join("cycler/core/src"),
        &SleepPolicy {
            allowed_files: &["timer.rs"],
            frame_limited_files: &[],
        },
    );
    violations.extend(find_sleep_violations(
        &root.join("tui/src"),
        &SleepPolicy {
            allowed_files: &[],
            frame_limited_files: &["app.rs"],
        },
    ));

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }

        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - cycler/core/src/timer.rs (the deferred-execution facility)");
        eprintln!("  - Frame rate limiting in tui/src/app.rs");
        eprintln!("  - Test code (#[cfg(test)] modules)");
        eprintln!("\n❌ FORBIDDEN:");
        eprintln!("  - Sleeping inside the cycler instead of asking its Timer");
        eprintln!("  - Sleep as poor man's synchronization");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

/// The scan must actually see the sources it polices
#[test]
fn test_scanned_directories_exist() {
    let root = workspace_root();
    assert!(root.join("cycler/core/src/timer.rs").exists());
    assert!(root.join("tui/src/app.rs").exists());
}
