use crate::checks::{missing, unreadable, CheckResult};
use crate::source;
use std::path::Path;

/// Each element must appear as an opening-tag prefix (`<Name`) somewhere in the text.
pub fn check(path: &Path, shown: &str, description: &str, required: &[&str]) -> CheckResult {
    let name = format!("{description} elements");

    let content = match source::read_text(path) {
        Ok(c) => c,
        Err(err) => {
            let detail = unreadable(&err, format!("{description} not found: {shown}"));
            return CheckResult::fail(name, detail);
        }
    };

    let absent = missing(&content, required, |element| format!("<{element}"));
    if absent.is_empty() {
        CheckResult::pass(name, format!("{description} is properly configured"))
    } else {
        CheckResult::fail(
            name,
            format!("{description} missing elements: {}", absent.join(", ")),
        )
    }
}
