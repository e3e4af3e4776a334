//! Dependency verification and installation.
//!
//! A fixed table of required Python packages is probed through the target
//! interpreter. Missing packages trigger at most one installer run against
//! the requirements manifest, followed by a single re-probe; there is no
//! retry loop beyond that.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::error::SetupError;

/// A required package and the module name used to probe for it.
#[derive(Debug, Clone, Copy)]
pub struct RequiredPackage {
    pub name: &'static str,
    pub probe: &'static str,
}

/// Packages the Office MCP services need at runtime.
pub const REQUIRED_PACKAGES: &[RequiredPackage] = &[
    RequiredPackage { name: "mcp", probe: "mcp" },
    RequiredPackage { name: "fastmcp", probe: "fastmcp" },
    RequiredPackage { name: "openpyxl", probe: "openpyxl" },
    RequiredPackage { name: "python-pptx", probe: "pptx" },
    RequiredPackage { name: "python-docx", probe: "docx" },
    RequiredPackage { name: "Pillow", probe: "PIL" },
    RequiredPackage { name: "msoffcrypto-tool", probe: "msoffcrypto" },
    RequiredPackage { name: "docx2pdf", probe: "docx2pdf" },
    RequiredPackage { name: "typer", probe: "typer" },
];

/// Seam between the dependency protocol and the actual interpreter.
pub trait PythonRuntime {
    /// Whether `import <module>` succeeds in the target interpreter.
    fn probe(&self, module: &str) -> Result<bool, std::io::Error>;

    /// Run the installer against a requirements manifest.
    /// `Ok(true)` means the installer exited successfully.
    fn install(&self, requirements: &Path) -> Result<bool, std::io::Error>;
}

/// The system Python interpreter, invoked as a subprocess.
pub struct SystemPython {
    interpreter: String,
}

impl SystemPython {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl PythonRuntime for SystemPython {
    fn probe(&self, module: &str) -> Result<bool, std::io::Error> {
        let status = Command::new(&self.interpreter)
            .arg("-c")
            .arg(format!("import {}", module))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.success())
    }

    fn install(&self, requirements: &Path) -> Result<bool, std::io::Error> {
        // Installer output goes straight to the terminal, matching pip's
        // own progress reporting.
        let status = Command::new(&self.interpreter)
            .args(["-m", "pip", "install", "-r"])
            .arg(requirements)
            .status()?;
        Ok(status.success())
    }
}

/// What happened to the installer during `ensure_dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    /// Nothing was missing, or installation was not requested.
    NotAttempted,
    /// The requirements manifest does not exist; installation skipped.
    SkippedNoManifest,
    /// The installer ran.
    Ran { success: bool },
}

/// Result of one probe / remediation pass.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DependencyReport {
    /// Package names importable at first probe.
    pub satisfied: Vec<String>,
    /// Package names missing at first probe.
    pub missing: Vec<String>,
    pub install: InstallOutcome,
    /// Package names still missing after remediation; equals `missing`
    /// when no installer ran.
    pub missing_after: Vec<String>,
}

impl DependencyReport {
    pub fn is_satisfied(&self) -> bool {
        self.missing_after.is_empty()
    }
}

fn probe_missing(runtime: &dyn PythonRuntime) -> Result<(Vec<String>, Vec<String>), SetupError> {
    let mut satisfied = Vec::new();
    let mut missing = Vec::new();
    for package in REQUIRED_PACKAGES {
        if runtime.probe(package.probe).map_err(SetupError::Probe)? {
            satisfied.push(package.name.to_string());
        } else {
            missing.push(package.name.to_string());
        }
    }
    Ok((satisfied, missing))
}

/// Probe all required packages and, when `attempt_install` is set and some
/// are missing, run the installer once and re-probe once.
pub fn ensure_dependencies(
    runtime: &dyn PythonRuntime,
    requirements: &Path,
    attempt_install: bool,
) -> Result<DependencyReport, SetupError> {
    let (satisfied, missing) = probe_missing(runtime)?;

    if missing.is_empty() || !attempt_install {
        return Ok(DependencyReport {
            satisfied,
            missing_after: missing.clone(),
            missing,
            install: InstallOutcome::NotAttempted,
        });
    }

    if !requirements.exists() {
        warn!(
            manifest = %requirements.display(),
            "Requirements manifest not found; skipping installation"
        );
        return Ok(DependencyReport {
            satisfied,
            missing_after: missing.clone(),
            missing,
            install: InstallOutcome::SkippedNoManifest,
        });
    }

    info!(
        manifest = %requirements.display(),
        missing = missing.len(),
        "Installing missing dependencies"
    );
    let success = runtime
        .install(requirements)
        .map_err(SetupError::Installer)?;

    let missing_after = if success {
        let (_, still_missing) = probe_missing(runtime)?;
        still_missing
    } else {
        missing.clone()
    };

    Ok(DependencyReport {
        satisfied,
        missing,
        install: InstallOutcome::Ran { success },
        missing_after,
    })
}
