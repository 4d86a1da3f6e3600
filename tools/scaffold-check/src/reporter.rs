use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::checklist::Section;
use crate::checks::CheckResult;

const RULE_WIDTH: usize = 60;

const PASS_ICON: &str = "\u{2705}";
const FAIL_ICON: &str = "\u{274c}";

const RECAP: &[&str] = &[
    "VSIX project with proper manifest and package configuration",
    "Core interfaces defined for services and components",
    "Dependency injection container set up for service management",
];

/// Styling applied to a span of output.
#[derive(Clone, Copy)]
enum Tone {
    Bold,
    Green,
    Red,
    Dimmed,
}

/// Render `text` in `tone` when `color` is on and stdout supports it.
fn styled(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Bold => text.if_supports_color(Stdout, |s| s.bold()).to_string(),
        Tone::Green => text.if_supports_color(Stdout, |s| s.green()).to_string(),
        Tone::Red => text.if_supports_color(Stdout, |s| s.red()).to_string(),
        Tone::Dimmed => text.if_supports_color(Stdout, |s| s.dimmed()).to_string(),
    }
}

pub fn print_header<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    writeln!(
        out,
        "\u{1f50d} {}",
        styled("Validating Visual Studio Extension Project Structure", Tone::Bold, color),
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn print_section<W: Write>(out: &mut W, section: &Section, color: bool) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        section.icon,
        styled(&format!("{}:", section.title), Tone::Bold, color),
    )
}

pub fn print_result<W: Write>(out: &mut W, result: &CheckResult, color: bool) -> io::Result<()> {
    if result.passed {
        writeln!(out, "{PASS_ICON} {}", styled(&result.detail, Tone::Green, color))
    } else {
        writeln!(out, "{FAIL_ICON} {}", styled(&result.detail, Tone::Red, color))
    }
}

/// Print the closing banner. Returns true if every check passed.
pub fn print_summary<W: Write>(
    out: &mut W,
    results: &[&CheckResult],
    color: bool,
) -> io::Result<bool> {
    let passed = results.iter().filter(|r| r.passed).count();
    let all_passed = passed == results.len();

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    let count = format!("{passed}/{} checks passed.", results.len());
    writeln!(out, "{}", styled(&count, Tone::Dimmed, color))?;

    if all_passed {
        writeln!(
            out,
            "\u{1f389} {}",
            styled("All validation checks PASSED!", Tone::Green, color),
        )?;
        writeln!(out, "{PASS_ICON} The project scaffold matches the expected structure:")?;
        for line in RECAP {
            writeln!(out, "   \u{2022} {line}")?;
        }
    } else {
        writeln!(
            out,
            "{FAIL_ICON} {}",
            styled("Some validation checks FAILED!", Tone::Red, color),
        )?;
        writeln!(out, "Please review the issues above and fix them.")?;
    }

    Ok(all_passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[CheckResult]) -> (bool, String) {
        let refs: Vec<&CheckResult> = results.iter().collect();
        let mut out = Vec::new();
        let ok = print_summary(&mut out, &refs, false).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_passing_returns_true() {
        let (ok, text) = render(&[
            CheckResult::pass("Project file", "Project file: a"),
            CheckResult::pass("Assembly info", "Assembly info: b"),
        ]);
        assert!(ok);
        assert!(text.contains("2/2 checks passed."));
        assert!(text.contains("All validation checks PASSED!"));
    }

    #[test]
    fn any_failure_returns_false() {
        let (ok, text) = render(&[
            CheckResult::pass("Project file", "Project file: a"),
            CheckResult::fail("Assembly info", "Assembly info: b - NOT FOUND"),
        ]);
        assert!(!ok);
        assert!(text.contains("1/2 checks passed."));
        assert!(text.contains("Some validation checks FAILED!"));
        assert!(text.contains("Please review the issues above and fix them."));
    }

    #[test]
    fn empty_results_returns_true() {
        let (ok, _) = render(&[]);
        assert!(ok);
    }

    #[test]
    fn result_line_carries_detail() {
        let mut out = Vec::new();
        let result = CheckResult::fail("x", "Missing NuGet packages: Beta");
        print_result(&mut out, &result, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(FAIL_ICON));
        assert!(text.contains("Missing NuGet packages: Beta"));
    }

    #[test]
    fn color_off_writes_plain_text() {
        assert_eq!(styled("clean", Tone::Red, false), "clean");

        let mut out = Vec::new();
        print_header(&mut out, false).unwrap();
        print_result(&mut out, &CheckResult::pass("x", "Assembly info: a"), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\x1b'));
    }
}
