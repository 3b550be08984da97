//! Check routines for docfacts.
//!
//! Five independent checks run in a fixed order, stopping at the first failure:
//! - `version-facts`: CUDA 12.x release list membership
//! - `compatibility-claims`: CUDA versions supported by PyTorch 2.6.0
//! - `example-format`: markers in the example wheel filename
//! - `readme-content`: required phrases in `README.md`
//! - `compatibility-guide`: existence and phrases of `docs/CUDA_COMPATIBILITY.md`

pub mod assertions;
pub mod engine;
pub mod routines;
