// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Mask kinds and their canonical-length caps

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Input kinds the engine can mask and validate.
///
/// Chosen by the caller per form field, never inferred from content.
/// The one exception is [`MaskKind::PhoneAuto`], which delegates to the
/// fixed or mobile layout by digit count on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    Cpf,
    Cnpj,
    CnpjAlphanumeric,
    PhoneFixed,
    PhoneMobile,
    PhoneAuto,
    Cep,
    CurrencyCents,
    CurrencyReais,
}

impl MaskKind {
    /// Stable snake_case name, the inverse of [`MaskKind::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskKind::Cpf => "cpf",
            MaskKind::Cnpj => "cnpj",
            MaskKind::CnpjAlphanumeric => "cnpj_alphanumeric",
            MaskKind::PhoneFixed => "phone_fixed",
            MaskKind::PhoneMobile => "phone_mobile",
            MaskKind::PhoneAuto => "phone_auto",
            MaskKind::Cep => "cep",
            MaskKind::CurrencyCents => "currency_cents",
            MaskKind::CurrencyReais => "currency_reais",
        }
    }

    /// Maximum canonical length; `None` for the unbounded currency kinds.
    pub fn max_canonical_len(&self) -> Option<usize> {
        match self {
            MaskKind::Cpf => Some(11),
            MaskKind::Cnpj | MaskKind::CnpjAlphanumeric => Some(14),
            MaskKind::PhoneFixed => Some(10),
            MaskKind::PhoneMobile | MaskKind::PhoneAuto => Some(11),
            MaskKind::Cep => Some(8),
            MaskKind::CurrencyCents | MaskKind::CurrencyReais => None,
        }
    }

    /// Whether canonical input keeps uppercase letters alongside digits.
    pub fn accepts_letters(&self) -> bool {
        matches!(self, MaskKind::CnpjAlphanumeric)
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, MaskKind::CurrencyCents | MaskKind::CurrencyReais)
    }
}

impl FromStr for MaskKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(MaskKind::Cpf),
            "cnpj" => Ok(MaskKind::Cnpj),
            "cnpj_alphanumeric" => Ok(MaskKind::CnpjAlphanumeric),
            "phone_fixed" => Ok(MaskKind::PhoneFixed),
            "phone_mobile" => Ok(MaskKind::PhoneMobile),
            "phone_auto" => Ok(MaskKind::PhoneAuto),
            "cep" => Ok(MaskKind::Cep),
            "currency_cents" => Ok(MaskKind::CurrencyCents),
            "currency_reais" => Ok(MaskKind::CurrencyReais),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}
