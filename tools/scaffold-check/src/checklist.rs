use crate::checks::{Check, Predicate};
use crate::config::ValidatorConfig;

pub const PROJECT_FILE: &str = "AiderVSExtension.csproj";
pub const PACKAGE_FILE: &str = "AiderVSExtensionPackage.cs";
pub const MANIFEST_FILE: &str = "source.extension.vsixmanifest";

const CORE_FILES: &[(&str, &str)] = &[
    (PROJECT_FILE, "Project file"),
    (PACKAGE_FILE, "Main package class"),
    (MANIFEST_FILE, "VSIX manifest"),
    ("Properties/AssemblyInfo.cs", "Assembly info"),
    ("Services/ServiceContainer.cs", "Service container"),
];

pub const INTERFACES: &[&str] = &[
    "IAiderService",
    "IConfigurationService",
    "IFileContextService",
    "IAIModelManager",
    "ICompletionProvider",
    "IErrorHandler",
    "IMessageRenderer",
];

pub const REQUIRED_PACKAGES: &[&str] = &[
    "Microsoft.VisualStudio.SDK",
    "Microsoft.VSSDK.BuildTools",
    "Microsoft.VisualStudio.Shell.Framework",
    "LibGit2Sharp",
    "Newtonsoft.Json",
];

pub const REQUIRED_MANIFEST_ELEMENTS: &[&str] =
    &["DisplayName", "Description", "Identity", "Installation", "Assets"];

pub const INTEGRATION_MARKERS: &[&str] = &["ServiceContainer", "InitializeAsync"];

/// A titled group of checks, printed under its own header.
pub struct Section {
    pub icon: &'static str,
    pub title: &'static str,
    pub checks: Vec<Check>,
}

/// The fixed checklist, in run order.
pub fn sections(config: &ValidatorConfig) -> Vec<Section> {
    vec![
        Section {
            icon: "\u{1f4c1}",
            title: "Core Project Files",
            checks: CORE_FILES
                .iter()
                .map(|(file, description)| Check {
                    description: description.to_string(),
                    target: config.project_path(file),
                    predicate: Predicate::Exists,
                })
                .collect(),
        },
        Section {
            icon: "\u{1f50c}",
            title: "Interface Definitions",
            checks: INTERFACES
                .iter()
                .map(|&name| Check {
                    description: format!("Interface {name}"),
                    target: config.project_path(&format!("Interfaces/{name}.cs")),
                    predicate: Predicate::DeclaresInterface { name },
                })
                .collect(),
        },
        Section {
            icon: "\u{2699}\u{fe0f}",
            title: "Project Configuration",
            checks: vec![
                Check {
                    description: "Project file".to_string(),
                    target: config.project_path(PROJECT_FILE),
                    predicate: Predicate::References {
                        noun: "NuGet packages",
                        required: REQUIRED_PACKAGES,
                    },
                },
                Check {
                    description: "VSIX manifest".to_string(),
                    target: config.project_path(MANIFEST_FILE),
                    predicate: Predicate::ManifestElements {
                        required: REQUIRED_MANIFEST_ELEMENTS,
                    },
                },
            ],
        },
        Section {
            icon: "\u{1f3d7}\u{fe0f}",
            title: "Service Container Integration",
            checks: vec![Check {
                description: "Service container".to_string(),
                target: config.project_path(PACKAGE_FILE),
                predicate: Predicate::Markers {
                    host: "main package",
                    markers: INTEGRATION_MARKERS,
                },
            }],
        },
    ]
}
