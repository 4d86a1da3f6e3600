use crate::checks::{missing, unreadable, CheckResult};
use crate::source;
use std::path::Path;

/// Every name in `required` must occur somewhere in the descriptor text. Case
/// sensitive substring containment; order and nesting are irrelevant.
pub fn check(
    path: &Path,
    shown: &str,
    description: &str,
    noun: &str,
    required: &[&str],
) -> CheckResult {
    let name = format!("{description} references");

    let content = match source::read_text(path) {
        Ok(c) => c,
        Err(err) => {
            let detail = unreadable(&err, format!("{description} not found: {shown}"));
            return CheckResult::fail(name, detail);
        }
    };

    let absent = missing(&content, required, |r| r.to_string());
    if absent.is_empty() {
        CheckResult::pass(name, format!("All required {noun} are referenced"))
    } else {
        CheckResult::fail(name, format!("Missing {noun}: {}", absent.join(", ")))
    }
}
