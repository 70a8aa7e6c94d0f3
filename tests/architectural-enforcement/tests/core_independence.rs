//! Integration Test: Core Independence
//!
//! **Policy**: `cycler-core` is headless. It must not depend on ratatui,
//! crossterm, or any other terminal crate, and its sources must not import
//! them. Surfaces depend on the core, never the other way round.

use std::fs;

use architectural_enforcement::{rust_files, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("cycler/core/Cargo.toml"))
        .expect("core manifest readable");

    for krate in UI_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "cycler-core must not depend on {krate}"
        );
    }
}

#[test]
fn test_core_sources_do_not_import_ui_crates() {
    let mut violations = Vec::new();
    for path in rust_files(&workspace_root().join("cycler/core/src")) {
        let content = fs::read_to_string(&path).expect("source readable");
        for (idx, line) in content.lines().enumerate() {
            let code = line.split("//").next().unwrap_or(line);
            if UI_CRATES.iter().any(|k| code.contains(&format!("{k}::"))) {
                violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "UI imports found in cycler-core:\n{}",
        violations.join("\n")
    );
}
