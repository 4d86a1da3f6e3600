use crate::checks::{unreadable, CheckResult};
use crate::source;
use regex::Regex;
use std::path::Path;

/// Heuristic for "a public interface named `name` is declared". Plain text match,
/// so a declaration inside a comment still counts and `IFooBar` satisfies `IFoo`.
pub fn declares_interface(content: &str, name: &str) -> bool {
    let pattern = format!(r"public\s+interface\s+{}", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(content),
        Err(_) => false,
    }
}

pub fn check(path: &Path, shown: &str, description: &str, name: &str) -> CheckResult {
    let content = match source::read_text(path) {
        Ok(c) => c,
        Err(err) => {
            let detail = unreadable(&err, format!("{description}: File {shown} not found"));
            return CheckResult::fail(description, detail);
        }
    };

    if declares_interface(&content, name) {
        CheckResult::pass(description, format!("{description}: Properly defined"))
    } else {
        CheckResult::fail(description, format!("{description}: Not properly defined"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_across_arbitrary_whitespace() {
        let source = "namespace X {\n    public   interface\n\tIErrorHandler\n    {\n    }\n}\n";
        assert!(declares_interface(source, "IErrorHandler"));
    }

    #[test]
    fn rejects_internal_interface() {
        assert!(!declares_interface("internal interface IErrorHandler {}", "IErrorHandler"));
    }

    #[test]
    fn rejects_class_with_same_name() {
        assert!(!declares_interface("public class IErrorHandler {}", "IErrorHandler"));
    }

    #[test]
    fn accepts_declaration_inside_comment() {
        assert!(declares_interface("// public interface IFoo", "IFoo"));
    }

    #[test]
    fn accepts_longer_name_with_same_prefix() {
        assert!(declares_interface("public interface IFooBar {}", "IFoo"));
    }

    #[test]
    fn is_case_sensitive() {
        assert!(!declares_interface("Public Interface IFoo", "IFoo"));
    }

    #[test]
    fn existing_file_without_declaration_is_not_properly_defined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IFoo.cs");
        fs::write(&path, "public class Foo {}\n").unwrap();

        let result = check(&path, "IFoo.cs", "Interface IFoo", "IFoo");

        assert!(!result.passed);
        assert_eq!(result.detail, "Interface IFoo: Not properly defined");
    }

    #[test]
    fn declared_interface_is_properly_defined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IFoo.cs");
        fs::write(&path, "public interface IFoo\n{\n    void Run();\n}\n").unwrap();

        let result = check(&path, "IFoo.cs", "Interface IFoo", "IFoo");

        assert!(result.passed);
        assert_eq!(result.name, "Interface IFoo");
        assert_eq!(result.detail, "Interface IFoo: Properly defined");
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let result = check(
            &dir.path().join("IFoo.cs"),
            "Interfaces/IFoo.cs",
            "Interface IFoo",
            "IFoo",
        );

        assert!(!result.passed);
        assert_eq!(result.detail, "Interface IFoo: File Interfaces/IFoo.cs not found");
    }

    #[test]
    fn directory_in_place_of_file_could_not_be_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IFoo.cs");
        fs::create_dir(&path).unwrap();

        let result = check(&path, "Interfaces/IFoo.cs", "Interface IFoo", "IFoo");

        assert!(!result.passed);
        assert!(result.detail.contains("IFoo.cs could not be read:"));
    }
}
