//! The canonical fact sheet.
//!
//! CUDA 13.0 is a real release, but it is neither a 12.x release nor a CUDA
//! version that PyTorch 2.6.0 ships wheels for. Every check reads its
//! constants from here.

/// Relative path of the primary document.
pub const README_PATH: &str = "README.md";

/// Relative path of the CUDA compatibility guide.
pub const GUIDE_PATH: &str = "docs/CUDA_COMPATIBILITY.md";

/// CUDA 12.x releases covered by the documentation.
pub const CUDA_12_RELEASES: [f64; 5] = [12.0, 12.1, 12.2, 12.3, 12.4];

/// First CUDA major release after the 12.x line.
pub const CUDA_13_0: f64 = 13.0;

/// CUDA versions PyTorch 2.6.0 publishes wheels for.
pub const PYTORCH_SUPPORTED_CUDA: [&str; 2] = ["12.1", "12.4"];

/// Wheel filename used in the installation examples.
pub const EXAMPLE_WHEEL: &str =
    "mamba_ssm-2.2.4+cu12torch2.5cxx11abiFALSE-cp311-cp311-linux_x86_64.whl";

/// A literal phrase that must appear in a text, and the message reported
/// when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub needle: &'static str,
    pub message: &'static str,
}

const fn phrase(needle: &'static str, message: &'static str) -> Expectation {
    Expectation { needle, message }
}

/// Markers the example wheel filename must carry.
pub const WHEEL_MARKERS: &[Expectation] = &[
    phrase("cu12", "Should reference CUDA 12.x"),
    phrase("torch2.5", "Should reference PyTorch 2.5 (compatible with 2.6)"),
    phrase("cp311", "Should reference Python version"),
];

pub const README_PHRASES: &[Expectation] = &[
    phrase("PyTorch 2.6.0", "README should mention PyTorch version"),
    phrase("CUDA 12.1 and 12.4", "README should list supported CUDA versions"),
    phrase("torch2.5", "README should show torch2.5 wheel for compatibility"),
];

pub const GUIDE_PHRASES: &[Expectation] = &[
    phrase("CUDA 12.1", "Guide should mention CUDA 12.1"),
    phrase("CUDA 12.4", "Guide should mention CUDA 12.4"),
    phrase("CUDA 13.0", "Guide should clarify CUDA 13.0 support"),
    phrase("PyTorch 2.6.0", "Guide should mention PyTorch version"),
    phrase("Troubleshooting", "Guide should have troubleshooting section"),
];

/// Closing summary printed after a fully successful run.
pub const SUMMARY_LINES: [&str; 5] = [
    "CUDA 13.0 clarification: ✓ Documented that PyTorch 2.6.0 does not support it",
    "PyTorch 2.6.0 compatibility: ✓ Documented CUDA 12.1 and 12.4 support",
    "Installation instructions: ✓ Updated for torch 2.6.0",
    "Troubleshooting guide: ✓ Added comprehensive guide",
    "New documentation: ✓ Created CUDA_COMPATIBILITY.md",
];
