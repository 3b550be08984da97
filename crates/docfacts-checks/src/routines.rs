//! The five check routines.
//!
//! Each routine returns `Ok(())` when every assertion holds and the first
//! failed assertion otherwise. Only the two document checks touch the
//! filesystem.

use std::path::Path;

use docfacts_core::document::Document;
use docfacts_core::facts::{
    CUDA_12_RELEASES, CUDA_13_0, EXAMPLE_WHEEL, GUIDE_PATH, GUIDE_PHRASES,
    PYTORCH_SUPPORTED_CUDA, README_PATH, README_PHRASES, WHEEL_MARKERS,
};
use docfacts_core::types::{CheckError, CheckId};

use crate::assertions::{
    ensure, ensure_document_phrases, ensure_member, ensure_not_member, ensure_phrases,
};

/// CUDA 12.x release list membership.
pub fn version_facts() -> Result<(), CheckError> {
    let id = CheckId::VersionFacts;
    ensure_member(id, &CUDA_12_RELEASES, &12.1, "CUDA 12.1 should be a 12.x release")?;
    ensure_member(id, &CUDA_12_RELEASES, &12.4, "CUDA 12.4 should be a 12.x release")?;
    ensure_not_member(
        id,
        &CUDA_12_RELEASES,
        &CUDA_13_0,
        "CUDA 13.0 should not be in the list",
    )
}

/// CUDA versions PyTorch 2.6.0 is documented to support.
pub fn compatibility_claims() -> Result<(), CheckError> {
    let id = CheckId::CompatibilityClaims;
    ensure_member(id, &PYTORCH_SUPPORTED_CUDA, &"12.1", "CUDA 12.1 should be supported")?;
    ensure_member(id, &PYTORCH_SUPPORTED_CUDA, &"12.4", "CUDA 12.4 should be supported")?;
    ensure_not_member(
        id,
        &PYTORCH_SUPPORTED_CUDA,
        &"13.0",
        "CUDA 13.0 should not be supported by PyTorch 2.6.0",
    )
}

pub fn example_format() -> Result<(), CheckError> {
    ensure_phrases(CheckId::ExampleFormat, EXAMPLE_WHEEL, WHEEL_MARKERS)
}

/// Required phrases in `README.md`. A missing README surfaces as the raw
/// not-found I/O error.
pub fn readme_content(root: &Path) -> Result<(), CheckError> {
    let doc = Document::read(root, README_PATH, CheckId::ReadmeContent)?;
    ensure_document_phrases(CheckId::ReadmeContent, &doc, README_PHRASES)
}

/// Existence and required phrases of the compatibility guide. Existence is
/// asserted before the read so a missing guide reads as an assertion failure.
pub fn compatibility_guide(root: &Path) -> Result<(), CheckError> {
    let id = CheckId::CompatibilityGuide;
    ensure(
        id,
        Document::exists(root, GUIDE_PATH),
        "CUDA compatibility guide should exist",
    )?;
    let doc = Document::read(root, GUIDE_PATH, id)?;
    ensure_document_phrases(id, &doc, GUIDE_PHRASES)
}

/// Dispatch a check by identity.
pub fn run(id: CheckId, root: &Path) -> Result<(), CheckError> {
    match id {
        CheckId::VersionFacts => version_facts(),
        CheckId::CompatibilityClaims => compatibility_claims(),
        CheckId::ExampleFormat => example_format(),
        CheckId::ReadmeContent => readme_content(root),
        CheckId::CompatibilityGuide => compatibility_guide(root),
    }
}
