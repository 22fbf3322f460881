// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking over nested JSON payloads
//
// Form payloads arrive as arbitrarily nested objects and arrays; the
// caller names which fields hold which identifier kind and every string
// leaf under a configured key gets masked in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::kind::MaskKind;
use crate::mask::apply_mask;

/// Field-name to mask-kind mapping for document masking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldRules {
    #[serde(default)]
    pub fields: HashMap<String, MaskKind>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, kind: MaskKind) -> Self {
        self.fields.insert(name.into(), kind);
        self
    }

    /// Build rules from plain name pairs, e.g. from a bindings caller:
    /// `{"owner_cpf": "cpf", "phone": "phone_auto"}`.
    pub fn from_names(names: &HashMap<String, String>) -> Result<Self, Error> {
        let mut rules = Self::new();
        for (field, kind) in names {
            rules.fields.insert(field.clone(), kind.parse()?);
        }
        Ok(rules)
    }
}

/// Walk a JSON document and mask every configured string field.
///
/// Returns whether anything changed alongside the rewritten document,
/// so callers can skip re-serialization on the common no-op path.
pub fn mask_document(value: &Value, rules: &FieldRules) -> (bool, Value) {
    match value {
        Value::Object(map) => {
            let mut modified = false;
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                match (rules.fields.get(key), val) {
                    (Some(&kind), Value::String(s)) => {
                        let masked = apply_mask(s, kind);
                        if masked != *s {
                            modified = true;
                        }
                        out.insert(key.clone(), Value::String(masked));
                    }
                    _ => {
                        let (m, v) = mask_document(val, rules);
                        modified |= m;
                        out.insert(key.clone(), v);
                    }
                }
            }
            (modified, Value::Object(out))
        }
        Value::Array(items) => {
            let mut modified = false;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let (m, v) = mask_document(item, rules);
                modified |= m;
                out.push(v);
            }
            (modified, Value::Array(out))
        }
        other => (false, other.clone()),
    }
}

/// Parse, mask and re-serialize a JSON document in one step.
pub fn mask_json(text: &str, rules: &FieldRules) -> Result<String, Error> {
    let value: Value = serde_json::from_str(text)?;
    let (_, masked) = mask_document(&value, rules);
    Ok(serde_json::to_string(&masked)?)
}
