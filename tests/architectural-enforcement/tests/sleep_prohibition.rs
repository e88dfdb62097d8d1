//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. The loop may only
//! suspend on the bounded input poll and on frame pacing.
//! **Exceptions**: Frame rate limiting in `tui/src/app.rs`, test code

use std::fs;
use std::path::Path;

use architectural_enforcement::rust_sources;

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_sleep_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }

        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - Frame rate limiting in the TUI frame loop (tokio::time::sleep)");
        eprintln!("  - Test code (#[test] or #[tokio::test] functions)");
        eprintln!("\n❌ FORBIDDEN:");
        eprintln!("  - Sleep in the simulation core");
        eprintln!("  - Sleep to 'wait' for key presses (use the timed input poll!)");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

#[test]
fn test_scanned_trees_exist() {
    // an empty scan would pass vacuously
    assert!(!rust_sources("core/src").is_empty());
    assert!(!rust_sources("tui/src").is_empty());
}

/// Find all sleep() calls in production code
fn find_sleep_violations() -> Vec<String> {
    let mut violations = Vec::new();

    check_directory(
        "tui/src",
        &mut violations,
        &SleepPolicy {
            allow_frame_limiting: true,
            allow_tests: true,
        },
    );

    check_directory(
        "core/src",
        &mut violations,
        &SleepPolicy {
            allow_frame_limiting: false,
            allow_tests: true,
        },
    );

    violations
}

struct SleepPolicy {
    allow_frame_limiting: bool,
    allow_tests: bool,
}

fn check_directory(dir: &str, violations: &mut Vec<String>, policy: &SleepPolicy) {
    for path in rust_sources(dir) {
        check_file(&path, violations, policy);
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>, policy: &SleepPolicy) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let lines: Vec<&str> = content.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;

        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        if code_part.contains("::sleep(") || code_part.contains(".sleep(") {
            if policy.allow_tests && is_in_test_function(&lines, idx) {
                continue;
            }

            // Frame limiting is only allowed in the TUI app loop
            if policy.allow_frame_limiting
                && path.ends_with("tui/src/app.rs")
                && is_frame_limiting_context(&lines, idx)
            {
                continue;
            }

            violations.push(format!(
                "{}:{} - {}",
                path.display(),
                line_number,
                line.trim()
            ));
        }
    }
}

/// Check if line is inside a test function
fn is_in_test_function(lines: &[&str], current_idx: usize) -> bool {
    // Scan backwards for #[test] or #[tokio::test]
    for i in (0..current_idx).rev() {
        let line = lines[i].trim();

        if line.starts_with("fn ") && !line.contains("test") {
            return false;
        }

        if line.starts_with("#[test]") || line.starts_with("#[tokio::test") {
            return true;
        }

        // Stop at module boundaries
        if line.starts_with("mod ") || line.starts_with("impl ") {
            return false;
        }
    }
    false
}

/// Check if sleep is used for frame rate limiting
fn is_frame_limiting_context(lines: &[&str], current_idx: usize) -> bool {
    let context_range = current_idx.saturating_sub(10)..std::cmp::min(current_idx + 5, lines.len());

    for i in context_range {
        let line = lines[i].to_lowercase();
        if line.contains("frame")
            || line.contains("fps")
            || line.contains("pacing")
            || line.contains("rate limit")
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_outside_test_detected() {
        let test_code = vec![
            "fn bad_function() {",
            "    tokio::time::sleep(Duration::from_millis(10)).await;",
            "}",
        ];

        assert!(
            !is_in_test_function(&test_code, 1),
            "Should detect this is not a test"
        );
    }

    #[test]
    fn test_sleep_inside_test_allowed() {
        let test_code = vec![
            "#[tokio::test]",
            "async fn test_waits() {",
            "    tokio::time::sleep(Duration::from_millis(10)).await;",
            "}",
        ];

        assert!(is_in_test_function(&test_code, 2));
    }

    #[test]
    fn test_frame_limiting_detection() {
        let test_code = vec![
            "while running {",
            "    let compute = tick();",
            "    // Frame rate limiting",
            "    let pacing = scheduler.pacing_delay(compute);",
            "    tokio::time::sleep(pacing).await;",
            "}",
        ];

        assert!(is_frame_limiting_context(&test_code, 4));
    }

    #[test]
    fn test_unrelated_sleep_not_frame_limiting() {
        let test_code = vec![
            "fn wait_for_key() {",
            "    loop {",
            "        std::thread::sleep(Duration::from_millis(5));",
            "    }",
            "}",
        ];

        assert!(!is_frame_limiting_context(&test_code, 2));
    }
}
