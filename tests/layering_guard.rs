//! Layering guardrails to keep the vocabulary crate free of dependencies.
//!
//! `viper_core` holds the keyword/operator/punctuation registries and the character classifier; both the lexer and
//! the parser build on it, so it must not pull in any other crate. This test scans its `Cargo.toml` and fails if a
//! `[dependencies]` table lists anything.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/viper_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        panic!("`viper_core` must stay dependency-free, found: {line_no_comment}");
    }
}

#[test]
fn syntax_crate_depends_on_core() {
    let manifest = include_str!("../crates/viper_syntax/Cargo.toml");
    assert!(
        manifest.lines().any(|line| line.trim().starts_with("viper_core")),
        "`viper_syntax` must take its vocabulary from `viper_core`"
    );
}
