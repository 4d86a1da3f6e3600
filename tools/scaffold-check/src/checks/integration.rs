use crate::checks::{missing, unreadable, CheckResult};
use crate::source;
use std::path::Path;

/// All `markers` must occur literally in the host file. Any one alone is a failure.
pub fn check(
    path: &Path,
    shown: &str,
    description: &str,
    host: &str,
    markers: &[&str],
) -> CheckResult {
    let name = format!("{description} integration");

    let content = match source::read_text(path) {
        Ok(c) => c,
        Err(err) => {
            let detail = unreadable(
                &err,
                format!("{description} integration incomplete: {shown} not found"),
            );
            return CheckResult::fail(name, detail);
        }
    };

    if missing(&content, markers, |m| m.to_string()).is_empty() {
        CheckResult::pass(name, format!("{description} is properly integrated in {host}"))
    } else {
        CheckResult::fail(name, format!("{description} integration incomplete"))
    }
}
