use crate::checks::CheckResult;
use std::path::Path;

/// Presence of `path`. Absence is a failed check, not an error.
pub fn check(path: &Path, shown: &str, description: &str) -> CheckResult {
    if path.exists() {
        CheckResult::pass(description, format!("{description}: {shown}"))
    } else {
        CheckResult::fail(description, format!("{description}: {shown} - NOT FOUND"))
    }
}
