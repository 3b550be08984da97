//! Core types, fact sheet, and configuration for docfacts.
//!
//! This crate provides the foundational pieces used across all docfacts crates:
//! - [`facts`]: The canonical CUDA / PyTorch fact sheet and required phrases
//! - [`document`]: Loading the README and compatibility guide as text blobs
//! - [`types`]: Check identities, run reports, and the [`CheckError`](types::CheckError) type
//! - [`config`]: Configuration loading from `docfacts.json`

pub mod config;
pub mod document;
pub mod facts;
pub mod types;
