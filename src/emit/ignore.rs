//! `.eslintignore` rendering.

use globset::Glob;

/// One pattern per line.
pub fn render_ignore_file(patterns: &[String]) -> String {
    let mut text = patterns.join("\n");
    text.push('\n');
    text
}

/// Patterns that do not parse as globs, with the reason.
///
/// ESLint would silently never match them, so they are reported, not dropped.
pub fn invalid_patterns(patterns: &[String]) -> Vec<(String, globset::Error)> {
    patterns
        .iter()
        .filter_map(|pattern| Glob::new(pattern).err().map(|e| (pattern.clone(), e)))
        .collect()
}
