pub mod checklist;
pub mod checks;
pub mod config;
pub mod reporter;
pub mod source;

use std::io::{self, Write};
use std::time::Instant;

use checks::CheckResult;
use config::ValidatorConfig;

pub struct SectionReport {
    pub title: &'static str,
    pub results: Vec<CheckResult>,
}

impl SectionReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Evaluate the whole checklist without printing anything.
pub fn run_all_checks(config: &ValidatorConfig) -> Vec<SectionReport> {
    checklist::sections(config)
        .into_iter()
        .map(|section| SectionReport {
            title: section.title,
            results: section.checks.iter().map(|c| c.run(config)).collect(),
        })
        .collect()
}

/// Run every check in order, printing each outcome as it completes.
/// Returns true only if all checks passed; earlier failures never skip later checks.
pub fn run<W: Write>(out: &mut W, config: &ValidatorConfig) -> io::Result<bool> {
    reporter::print_header(out, config.color)?;

    let mut reports = Vec::new();
    for section in checklist::sections(config) {
        reporter::print_section(out, &section, config.color)?;

        let mut results = Vec::new();
        for check in &section.checks {
            let start = Instant::now();
            let result = check.run(config);
            if config.timing {
                eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
            }
            reporter::print_result(out, &result, config.color)?;
            results.push(result);
        }

        reports.push(SectionReport { title: section.title, results });
    }

    let all: Vec<&CheckResult> = reports.iter().flat_map(|r| r.results.iter()).collect();
    reporter::print_summary(out, &all, config.color)
}
