// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error type for the fallible outer surfaces

use thiserror::Error;

/// Errors from the configuration and document surfaces.
///
/// The masking/validation core itself is total and never returns these;
/// they only arise when parsing a kind name or masking a JSON document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown mask kind: {0}")]
    UnknownKind(String),

    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),
}
