//! Core domain models for pkgaudit
//!
//! This module contains the fundamental types used throughout the application:
//! - Constraint tokens and AND-joined constraint groups
//! - Declared dependencies and installed packages
//! - Conflict reports and the audit verdict

mod conflict;
mod constraint;
mod dependency;
mod package;

pub use conflict::{Attribution, AuditStatus, ConflictReport};
pub use constraint::{ConstraintGroup, ConstraintToken, Operator};
pub use dependency::Dependency;
pub use package::Package;
