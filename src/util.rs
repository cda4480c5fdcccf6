//! Small shared helpers: widget ID sanitization, construction-time path
//! resolution, and human-readable time formatting for status tooltips.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Convert an arbitrary display name to a stable widget ID.
///
/// Lowercases the input, replaces whitespace and path separators (`/`, `\`)
/// with hyphens, then replaces every remaining character that is not
/// alphanumeric, a hyphen, or an underscore with a hyphen. The function is
/// pure; hosts recompute it to re-locate a widget by name.
///
/// `"Run Tests"` becomes `run-tests`, `"src/main.py"` becomes `src-main-py`.
pub fn sanitize_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '-'
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Resolve a path once, at widget construction time.
///
/// Relative paths are made absolute against the current working directory;
/// symlinks are resolved when the target exists. Paths that do not exist are
/// kept as-is (absolutized), so links can point at files a command has not
/// produced yet.
pub fn resolve_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    absolute.canonicalize().unwrap_or(absolute)
}

/// Format a duration for status tooltips: `"450ms"`, `"3.2s"`, `"2m 05s"`,
/// `"1h 02m"`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{}ms", duration.subsec_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format how long ago a timestamp was, relative to now: `"just now"`,
/// `"42s ago"`, `"5m ago"`, `"3h ago"`, `"2d ago"`.
pub fn format_time_ago(when: DateTime<Utc>) -> String {
    format_time_ago_at(when, Utc::now())
}

fn format_time_ago_at(when: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - when).num_seconds().max(0);
    if secs < 5 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_spaces() {
        assert_eq!(sanitize_id("Run Tests"), "run-tests");
    }

    #[test]
    fn test_sanitize_path_separators() {
        assert_eq!(sanitize_id("src/main.py"), "src-main-py");
        assert_eq!(sanitize_id("src\\file.py"), "src-file-py");
    }

    #[test]
    fn test_sanitize_special_characters() {
        assert_eq!(sanitize_id("Build Project!"), "build-project-");
    }

    #[test]
    fn test_sanitize_keeps_hyphens_and_underscores() {
        assert_eq!(sanitize_id("my_task-2"), "my_task-2");
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        assert_eq!(sanitize_id("Deploy (prod)"), sanitize_id("Deploy (prod)"));
    }

    #[test]
    fn test_resolve_path_makes_relative_absolute() {
        let resolved = resolve_path("some/missing/file.txt");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/missing/file.txt"));
    }

    #[test]
    fn test_resolve_path_keeps_absolute() {
        let resolved = resolve_path("/no/such/place.log");
        assert_eq!(resolved, PathBuf::from("/no/such/place.log"));
    }

    #[test]
    fn test_format_duration_ranges() {
        assert_eq!(format_duration(Duration::from_millis(450)), "450ms");
        assert_eq!(format_duration(Duration::from_millis(3200)), "3.2s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 05s");
        assert_eq!(format_duration(Duration::from_secs(3720)), "1h 02m");
    }

    #[test]
    fn test_format_time_ago_ranges() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid");
        let at = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(format_time_ago_at(at(2), now), "just now");
        assert_eq!(format_time_ago_at(at(42), now), "42s ago");
        assert_eq!(format_time_ago_at(at(300), now), "5m ago");
        assert_eq!(format_time_ago_at(at(7200), now), "2h ago");
        assert_eq!(format_time_ago_at(at(200_000), now), "2d ago");
    }

    #[test]
    fn test_format_time_ago_future_clamps_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid");
        let later = now + chrono::Duration::seconds(30);
        assert_eq!(format_time_ago_at(later, now), "just now");
    }
}
