// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking and validation engine for Brazilian registry identifiers
//
// Incremental input masking, check-digit validation and currency
// recovery for CPF, CNPJ (numeric and alphanumeric), CEP, phone
// numbers and money amounts. Pure string-in/string-out functions:
// no I/O, no retained state, safe to call from any thread.
//
// # Examples
//
// ```
// use brmask::{apply_mask, is_valid, parse_amount, MaskKind};
//
// assert_eq!(apply_mask("52998224725", MaskKind::Cpf), "529.982.247-25");
// assert!(is_valid("529.982.247-25", MaskKind::Cpf));
// assert_eq!(parse_amount("R$ 1.234,56"), 1234.56);
// ```

pub mod canonical;
pub mod currency;
pub mod document;
pub mod error;
pub mod kind;
pub mod mask;
pub mod validate;

#[cfg(feature = "python")]
mod python;

pub use canonical::canonicalize;
pub use currency::{format_amount, parse_amount};
pub use document::{mask_document, mask_json, FieldRules};
pub use error::Error;
pub use kind::MaskKind;
pub use mask::apply_mask;
pub use validate::{is_valid, is_valid_email};
