//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() calls in production code outside the deferred-execution
//!   facility and the TUI frame limiter
//! - The cycler core stays free of terminal/UI dependencies
//!
//! The scanning helpers live here so the detectors themselves can be unit
//! tested.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the workspace this package belongs to
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Where sleeping is tolerated within a scanned directory
pub struct SleepPolicy {
    /// Files (relative to the scanned directory) that may sleep freely
    pub allowed_files: &'static [&'static str],
    /// Files that may sleep only for frame rate limiting
    pub frame_limited_files: &'static [&'static str],
}

/// All `.rs` files under `dir`
#[must_use]
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Find sleep calls in production code under `dir`
#[must_use]
pub fn find_sleep_violations(dir: &Path, policy: &SleepPolicy) -> Vec<String> {
    let mut violations = Vec::new();

    for path in rust_files(dir) {
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        if policy.allowed_files.contains(&relative.as_str()) {
            continue;
        }
        let frame_limited = policy.frame_limited_files.contains(&relative.as_str());

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let lines: Vec<&str> = content.lines().collect();

        for line_number in sleep_lines(&lines) {
            if frame_limited && is_frame_limiting_context(&lines, line_number) {
                continue;
            }
            violations.push(format!(
                "{}:{} - {}",
                path.display(),
                line_number + 1,
                lines[line_number].trim()
            ));
        }
    }

    violations
}

/// Indices of production lines that call a sleep function
///
/// Everything from the first `#[cfg(test)]` onwards is test code.
#[must_use]
pub fn sleep_lines(lines: &[&str]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| {
            // Skip comments
            let code_part = line.split("//").next().unwrap_or(line);
            code_part.contains("::sleep(") || code_part.contains(".sleep(")
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if sleep is used for frame rate limiting (acceptable in TUI)
#[must_use]
pub fn is_frame_limiting_context(lines: &[&str], current_idx: usize) -> bool {
    // Look for frame_duration, frame rate, or FPS in nearby lines
    let context_range = current_idx.saturating_sub(10)..std::cmp::min(current_idx + 5, lines.len());

    lines[context_range].iter().any(|line| {
        let line = line.to_lowercase();
        line.contains("frame") || line.contains("fps") || line.contains("rate limit")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_violation_detection() {
        let code = vec![
            "fn bad_function() {",
            "    tokio::time::sleep(Duration::from_millis(10)).await;",
            "}",
        ];
        assert_eq!(sleep_lines(&code), vec![1]);
    }

    #[test]
    fn test_commented_sleep_ignored() {
        let code = vec!["// tokio::time::sleep(d).await;", "let x = 1; // .sleep(1)"];
        assert!(sleep_lines(&code).is_empty());
    }

    #[test]
    fn test_test_module_ignored() {
        let code = vec![
            "fn prod() {}",
            "#[cfg(test)]",
            "mod tests {",
            "    async fn t() { tokio::time::sleep(d).await; }",
            "}",
        ];
        assert!(sleep_lines(&code).is_empty());
    }

    #[test]
    fn test_frame_limiting_detection() {
        let code = vec![
            "async fn render_loop() {",
            "    let frame_duration = Duration::from_millis(33); // ~30 FPS",
            "    loop {",
            "        render();",
            "        tokio::time::sleep(frame_duration).await;",
            "    }",
            "}",
        ];
        assert!(is_frame_limiting_context(&code, 4));
    }

    #[test]
    fn test_polling_sleep_not_frame_limiting() {
        let code = vec![
            "async fn poll() {",
            "    loop {",
            "        check();",
            "        tokio::time::sleep(Duration::from_millis(10)).await;",
            "    }",
            "}",
        ];
        assert!(!is_frame_limiting_context(&code, 3));
    }

    #[test]
    fn test_workspace_root_contains_members() {
        let root = workspace_root();
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("cycler/core").exists());
    }
}
