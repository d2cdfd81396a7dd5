//! Project-level definitions shared by actions and the CLI wrappers.

use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Files the core tools write at project init; their presence marks a
/// directory as a function project.
pub const HOST_FILE: &str = "host.json";
pub const LOCAL_SETTINGS_FILE: &str = "local.settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectLanguage {
    #[value(name = "csharp")]
    CSharp,
    #[value(name = "javascript")]
    JavaScript,
    #[value(name = "typescript")]
    TypeScript,
    #[value(name = "python")]
    Python,
    #[value(name = "powershell")]
    PowerShell,
}

impl ProjectLanguage {
    /// Runtime identifier the core tools expect for `--worker-runtime`.
    pub fn worker_runtime(&self) -> &'static str {
        match self {
            ProjectLanguage::CSharp => "dotnet",
            ProjectLanguage::JavaScript | ProjectLanguage::TypeScript => "node",
            ProjectLanguage::Python => "python",
            ProjectLanguage::PowerShell => "powershell",
        }
    }

    /// Label shown in the language quick pick.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectLanguage::CSharp => "C#",
            ProjectLanguage::JavaScript => "JavaScript",
            ProjectLanguage::TypeScript => "TypeScript",
            ProjectLanguage::Python => "Python",
            ProjectLanguage::PowerShell => "PowerShell",
        }
    }

    pub fn all() -> &'static [ProjectLanguage] {
        &[
            ProjectLanguage::CSharp,
            ProjectLanguage::JavaScript,
            ProjectLanguage::TypeScript,
            ProjectLanguage::Python,
            ProjectLanguage::PowerShell,
        ]
    }
}

impl fmt::Display for ProjectLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `dir` already holds an initialized function project.
pub fn has_project_files(dir: &Path) -> bool {
    dir.join(HOST_FILE).is_file() && dir.join(LOCAL_SETTINGS_FILE).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn worker_runtime_mapping() {
        assert_eq!(ProjectLanguage::CSharp.worker_runtime(), "dotnet");
        assert_eq!(ProjectLanguage::JavaScript.worker_runtime(), "node");
        assert_eq!(ProjectLanguage::TypeScript.worker_runtime(), "node");
        assert_eq!(ProjectLanguage::Python.worker_runtime(), "python");
    }

    #[test]
    fn project_detection_requires_both_files() {
        let dir = TempDir::new().unwrap();
        assert!(!has_project_files(dir.path()));

        std::fs::write(dir.path().join(HOST_FILE), "{}").unwrap();
        assert!(!has_project_files(dir.path()));

        std::fs::write(dir.path().join(LOCAL_SETTINGS_FILE), "{}").unwrap();
        assert!(has_project_files(dir.path()));
    }
}
