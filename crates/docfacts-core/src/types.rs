use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Identity of one check. Variants are declared in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    VersionFacts,
    CompatibilityClaims,
    ExampleFormat,
    ReadmeContent,
    CompatibilityGuide,
}

impl CheckId {
    /// Every check, in the order a full run executes them.
    pub const ALL: [CheckId; 5] = [
        CheckId::VersionFacts,
        CheckId::CompatibilityClaims,
        CheckId::ExampleFormat,
        CheckId::ReadmeContent,
        CheckId::CompatibilityGuide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CheckId::VersionFacts => "version-facts",
            CheckId::CompatibilityClaims => "compatibility-claims",
            CheckId::ExampleFormat => "example-format",
            CheckId::ReadmeContent => "readme-content",
            CheckId::CompatibilityGuide => "compatibility-guide",
        }
    }

    /// Progress line printed before the check runs.
    pub fn title(self) -> &'static str {
        match self {
            CheckId::VersionFacts => "Testing CUDA version facts...",
            CheckId::CompatibilityClaims => "Testing PyTorch compatibility claims...",
            CheckId::ExampleFormat => "Testing documentation examples...",
            CheckId::ReadmeContent => "Testing README content...",
            CheckId::CompatibilityGuide => "Testing CUDA compatibility guide...",
        }
    }

    /// Confirmation line printed once the check passes.
    pub fn confirmation(self) -> &'static str {
        match self {
            CheckId::VersionFacts => "✓ CUDA version facts are correct",
            CheckId::CompatibilityClaims => "✓ PyTorch compatibility claims are correct",
            CheckId::ExampleFormat => "✓ Documentation examples are valid",
            CheckId::ReadmeContent => "✓ README contains required information",
            CheckId::CompatibilityGuide => "✓ CUDA compatibility guide is complete",
        }
    }

    pub fn from_name(name: &str) -> Option<CheckId> {
        CheckId::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{check}: {message}")]
    Assertion { check: CheckId, message: String },

    #[error("{check}: failed to read {}: {source}", .path.display())]
    Io {
        check: CheckId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    pub fn assertion(check: CheckId, message: impl Into<String>) -> Self {
        CheckError::Assertion {
            check,
            message: message.into(),
        }
    }

    pub fn check(&self) -> CheckId {
        match self {
            CheckError::Assertion { check, .. } | CheckError::Io { check, .. } => *check,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Assertion { .. } => FailureKind::Assertion,
            CheckError::Io { .. } => FailureKind::Io,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Assertion,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPass {
    pub check: CheckId,
    pub title: String,
    pub confirmation: String,
}

impl CheckPass {
    pub fn new(check: CheckId) -> Self {
        Self {
            check,
            title: check.title().to_string(),
            confirmation: check.confirmation().to_string(),
        }
    }
}

/// Serializable view of the [`CheckError`] that stopped a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    pub check: CheckId,
    pub kind: FailureKind,
    pub message: String,
    pub path: Option<String>,
    /// `std::io::ErrorKind` of an I/O failure, e.g. `NotFound`.
    pub io_kind: Option<String>,
}

impl From<&CheckError> for CheckFailure {
    fn from(err: &CheckError) -> Self {
        let (message, path, io_kind) = match err {
            CheckError::Assertion { message, .. } => (message.clone(), None, None),
            CheckError::Io { path, source, .. } => (
                source.to_string(),
                Some(path.display().to_string()),
                Some(format!("{:?}", source.kind())),
            ),
        };
        CheckFailure {
            check: err.check(),
            kind: err.kind(),
            message,
            path,
            io_kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error"
    pub passed: Vec<CheckPass>,
    pub failure: Option<CheckFailure>,
    pub summary: Vec<String>,
}

impl RunReport {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}
