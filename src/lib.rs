// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! hgvs-validate: grammar-driven validation of HGVS variant descriptions
//!
//! Descriptions are checked at the DNA, RNA or protein level for syntactic
//! well-formedness and a handful of semantic rules. Nothing is resolved
//! against a reference sequence.
//!
//! # Example
//!
//! ```
//! use hgvs_validate::{validate, validate_multi, MolecularLevel, ValidationError};
//!
//! let event = validate("p.Trp24Cys", MolecularLevel::Protein).unwrap();
//! assert_eq!(event.raw, "Trp24Cys");
//!
//! let events = validate_multi("c.[76A>T;83G>C]").unwrap();
//! assert_eq!(events.len(), 2);
//!
//! let err = validate_multi("p.[Trp24Cys;Trp24Cys]").unwrap_err();
//! assert!(matches!(err, ValidationError::DuplicateEvent { .. }));
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod error_handling;
pub mod hgvs;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod validator;

// Re-export commonly used types
pub use column::{validate_column, VariantColumn};
pub use config::ValidatorConfig;
pub use error::{ErrorCode, SemanticReason, ValidationError};
pub use hgvs::recognizer::{is_multi, validate, validate_expression, validate_multi, Recognizer};
pub use hgvs::variant::{EventKind, MolecularLevel, VariantEvent, VariantExpression};
pub use validator::Validator;

/// Result type alias for hgvs-validate operations
pub type Result<T> = std::result::Result<T, ValidationError>;
