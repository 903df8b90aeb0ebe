//! Metadata parsers for installed Python distributions
//!
//! This module provides:
//! - Requirement string parsing (`name (constraint); marker`)
//! - Package extraction from single-file records (`*.dist-info/METADATA`)
//! - Package extraction from split records (`*.egg-info/PKG-INFO` + `requires.txt`)

mod metadata;
mod requirement;

pub use metadata::{extract_single_record, extract_split_record, MetadataField};
pub use requirement::parse_requirement;
