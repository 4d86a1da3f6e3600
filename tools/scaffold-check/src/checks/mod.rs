pub mod exists;
pub mod integration;
pub mod interface;
pub mod manifest;
pub mod references;

use crate::config::ValidatorConfig;
use crate::source::SourceError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// What a check verifies about its target.
#[derive(Debug, Clone)]
pub enum Predicate {
    Exists,
    DeclaresInterface {
        name: &'static str,
    },
    References {
        noun: &'static str,
        required: &'static [&'static str],
    },
    ManifestElements {
        required: &'static [&'static str],
    },
    Markers {
        host: &'static str,
        markers: &'static [&'static str],
    },
}

/// One rule of the checklist. `target` is relative to the root dir.
#[derive(Debug, Clone)]
pub struct Check {
    pub description: String,
    pub target: PathBuf,
    pub predicate: Predicate,
}

impl Check {
    pub fn run(&self, config: &ValidatorConfig) -> CheckResult {
        let path = config.resolve(&self.target);
        let shown = self.target.display().to_string();
        match &self.predicate {
            Predicate::Exists => exists::check(&path, &shown, &self.description),
            Predicate::DeclaresInterface { name } => {
                interface::check(&path, &shown, &self.description, name)
            }
            Predicate::References { noun, required } => {
                references::check(&path, &shown, &self.description, noun, required)
            }
            Predicate::ManifestElements { required } => {
                manifest::check(&path, &shown, &self.description, required)
            }
            Predicate::Markers { host, markers } => {
                integration::check(&path, &shown, &self.description, host, markers)
            }
        }
    }
}

/// Turn a read failure into the failure detail for a check. `not_found` is the
/// kind-specific wording for an absent file.
pub(crate) fn unreadable(err: &SourceError, not_found: String) -> String {
    match err {
        SourceError::NotFound { .. } => not_found,
        SourceError::Read { .. } => err.to_string(),
    }
}

/// Names from `required` that do not occur in `content` under `needle`, in list order.
pub(crate) fn missing<'a, F>(content: &str, required: &[&'a str], needle: F) -> Vec<&'a str>
where
    F: Fn(&str) -> String,
{
    required
        .iter()
        .copied()
        .filter(|name| !content.contains(needle(*name).as_str()))
        .collect()
}
