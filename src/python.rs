// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Python bindings for the masking engine
//
// Kinds cross the boundary as snake_case strings ("cpf", "phone_auto",
// ...); an unknown name raises ValueError. Enabled by the `python`
// feature so the pure-Rust surface builds without an interpreter.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::document::FieldRules;
use crate::error::Error;
use crate::kind::MaskKind;

fn parse_kind(kind: &str) -> PyResult<MaskKind> {
    kind.parse()
        .map_err(|e: Error| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
#[pyo3(name = "canonicalize")]
fn canonicalize_py(raw: &str, kind: &str) -> PyResult<String> {
    Ok(crate::canonicalize(raw, parse_kind(kind)?))
}

#[pyfunction]
#[pyo3(name = "apply_mask")]
fn apply_mask_py(raw: &str, kind: &str) -> PyResult<String> {
    Ok(crate::apply_mask(raw, parse_kind(kind)?))
}

#[pyfunction]
#[pyo3(name = "is_valid")]
fn is_valid_py(raw: &str, kind: &str) -> PyResult<bool> {
    Ok(crate::is_valid(raw, parse_kind(kind)?))
}

#[pyfunction]
#[pyo3(name = "is_valid_email")]
fn is_valid_email_py(raw: &str) -> bool {
    crate::is_valid_email(raw)
}

#[pyfunction]
#[pyo3(name = "parse_amount")]
fn parse_amount_py(text: &str) -> f64 {
    crate::parse_amount(text)
}

#[pyfunction]
#[pyo3(name = "format_amount")]
fn format_amount_py(amount: f64) -> String {
    crate::format_amount(amount)
}

/// Document masker exposed to Python
///
/// # Example (Python)
/// ```python
/// from brmask import DocumentMaskerRust
///
/// masker = DocumentMaskerRust({"owner_cpf": "cpf", "phone": "phone_auto"})
/// masked = masker.mask_json('{"owner_cpf": "52998224725"}')
/// ```
#[pyclass]
pub struct DocumentMaskerRust {
    rules: FieldRules,
}

#[pymethods]
impl DocumentMaskerRust {
    #[new]
    fn new(fields: HashMap<String, String>) -> PyResult<Self> {
        let rules =
            FieldRules::from_names(&fields).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { rules })
    }

    /// Mask every configured field of a JSON document string.
    fn mask_json(&self, text: &str) -> PyResult<String> {
        crate::document::mask_json(text, &self.rules)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// Python module: brmask
#[pymodule]
fn brmask(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(canonicalize_py, m)?)?;
    m.add_function(wrap_pyfunction!(apply_mask_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_email_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_amount_py, m)?)?;
    m.add_function(wrap_pyfunction!(format_amount_py, m)?)?;
    m.add_class::<DocumentMaskerRust>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
