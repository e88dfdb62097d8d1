//! Integration Test: Headless Core
//!
//! **Policy**: `life-core` has zero terminal dependencies. Everything that
//! touches the terminal, the keyboard or the async runtime lives in
//! `life-tui`, so the simulation can be driven and tested without a TTY.

use std::fs;

use architectural_enforcement::{rust_sources, workspace_root};

/// Crates the core must never depend on or name
const FORBIDDEN: &[&str] = &["crossterm", "ratatui", "tokio", "futures", "clap"];

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("core/Cargo.toml"))
        .expect("core manifest should be readable");

    let violations: Vec<&str> = FORBIDDEN
        .iter()
        .copied()
        .filter(|name| {
            manifest
                .lines()
                .map(|line| line.split('#').next().unwrap_or(line).trim())
                .any(|line| line.starts_with(name))
        })
        .collect();

    assert!(
        violations.is_empty(),
        "life-core depends on terminal crates: {violations:?}"
    );
}

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let mut violations = Vec::new();

    for path in rust_sources("core/src") {
        let content = fs::read_to_string(&path).expect("core source should be readable");
        for (idx, line) in content.lines().enumerate() {
            let code_part = line.split("//").next().unwrap_or(line);
            for name in FORBIDDEN {
                if code_part.contains(&format!("{name}::")) {
                    violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "terminal crates used in life-core:\n{}",
        violations.join("\n")
    );
}
