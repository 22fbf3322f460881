// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Check-digit validation for CPF and CNPJ, length rules for the rest

use once_cell::sync::Lazy;
use regex::Regex;

use crate::canonical::canonicalize;
use crate::kind::MaskKind;

// One '@', no whitespace, at least one '.' somewhere after the '@'.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

// Conceptual 13-slot weight window for CNPJ check digits; each pass
// uses the rightmost N weights for its N input values.
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a raw string against the rules for `kind`.
///
/// Canonicalizes first, so masked and unmasked inputs are equivalent.
/// Returns `false` (never an error) on anything malformed; callers that
/// need a "too short" message re-check the canonical length themselves.
pub fn is_valid(raw: &str, kind: MaskKind) -> bool {
    let canonical = canonicalize(raw, kind);
    match kind {
        MaskKind::Cpf => valid_cpf(&canonical),
        MaskKind::Cnpj | MaskKind::CnpjAlphanumeric => valid_cnpj(&canonical),
        MaskKind::Cep => canonical.len() == 8,
        // No official check-digit scheme exists for Brazilian phones.
        MaskKind::PhoneFixed | MaskKind::PhoneMobile | MaskKind::PhoneAuto => {
            matches!(canonical.len(), 10 | 11)
        }
        MaskKind::CurrencyCents | MaskKind::CurrencyReais => !canonical.is_empty(),
    }
}

/// Validate an email address: non-space run, one `@`, non-space run,
/// one `.`, non-space run.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL.is_match(raw)
}

fn valid_cpf(digits: &str) -> bool {
    if digits.len() != 11 {
        return false;
    }
    let d: Vec<u32> = digits.chars().map(|c| c as u32 - '0' as u32).collect();

    // "111.111.111-11" and friends satisfy the checksum but are not
    // issued; reject repeated-digit sequences outright.
    if d.iter().all(|&v| v == d[0]) {
        return false;
    }

    cpf_check_digit(&d[..9]) == d[9] && cpf_check_digit(&d[..10]) == d[10]
}

// Weight runs from len+1 down to 2; (sum * 10) % 11 with 10 mapped to 0.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &v)| v * (top - i as u32))
        .sum();
    let dv = (sum * 10) % 11;
    if dv == 10 {
        0
    } else {
        dv
    }
}

fn valid_cnpj(canonical: &str) -> bool {
    if canonical.len() != 14 {
        return false;
    }
    let chars: Vec<char> = canonical.chars().collect();

    // The check digits are numeric even in the alphanumeric variant.
    let (Some(dv1), Some(dv2)) = (chars[12].to_digit(10), chars[13].to_digit(10)) else {
        return false;
    };

    // Official mapping: code point minus 48. Digits keep their face
    // value and 'A'..'Z' become 17..42.
    let mut values: Vec<u32> = chars[..12].iter().map(|&c| c as u32 - 48).collect();

    if cnpj_check_digit(&values) != dv1 {
        return false;
    }
    values.push(dv1);
    cnpj_check_digit(&values) == dv2
}

fn cnpj_check_digit(values: &[u32]) -> u32 {
    let offset = CNPJ_WEIGHTS.len() - values.len();
    let sum: u32 = values
        .iter()
        .zip(&CNPJ_WEIGHTS[offset..])
        .map(|(&v, &w)| v * w)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_known_valid() {
        assert!(is_valid("529.982.247-25", MaskKind::Cpf));
        assert!(is_valid("52998224725", MaskKind::Cpf));
        assert!(is_valid("111.444.777-35", MaskKind::Cpf));
    }

    #[test]
    fn test_cpf_wrong_check_digit() {
        assert!(!is_valid("529.982.247-26", MaskKind::Cpf));
        assert!(!is_valid("529.982.248-25", MaskKind::Cpf));
    }

    #[test]
    fn test_cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid(&cpf, MaskKind::Cpf), "{cpf} should be invalid");
        }
    }

    #[test]
    fn test_cpf_too_short() {
        assert!(!is_valid("5299822472", MaskKind::Cpf));
        assert!(!is_valid("", MaskKind::Cpf));
    }

    #[test]
    fn test_cnpj_known_valid() {
        assert!(is_valid("11.222.333/0001-81", MaskKind::Cnpj));
        assert!(is_valid("11222333000181", MaskKind::Cnpj));
    }

    #[test]
    fn test_cnpj_wrong_check_digit() {
        assert!(!is_valid("11.222.333/0001-82", MaskKind::Cnpj));
        assert!(!is_valid("11.222.333/0001-71", MaskKind::Cnpj));
    }

    #[test]
    fn test_cnpj_alphanumeric_known_valid() {
        assert!(is_valid("12.ABC.345/01DE-35", MaskKind::CnpjAlphanumeric));
        assert!(is_valid("12abc34501de35", MaskKind::CnpjAlphanumeric));
    }

    #[test]
    fn test_cnpj_alphanumeric_base_edit_detected() {
        assert!(!is_valid("12.ABC.345/01DF-35", MaskKind::CnpjAlphanumeric));
        assert!(!is_valid("13.ABC.345/01DE-35", MaskKind::CnpjAlphanumeric));
        assert!(!is_valid("12.ABC.345/01DE-36", MaskKind::CnpjAlphanumeric));
    }

    #[test]
    fn test_cnpj_alphanumeric_letter_check_digit_rejected() {
        // 14 alphanumeric chars but a letter in a check-digit position.
        assert!(!is_valid("12.ABC.345/01DE-3A", MaskKind::CnpjAlphanumeric));
    }

    #[test]
    fn test_classic_cnpj_is_the_all_digit_special_case() {
        assert!(is_valid("11.222.333/0001-81", MaskKind::CnpjAlphanumeric));
    }

    #[test]
    fn test_cep_length_only() {
        assert!(is_valid("01310-100", MaskKind::Cep));
        assert!(!is_valid("0131010", MaskKind::Cep));
        assert!(!is_valid("", MaskKind::Cep));
    }

    #[test]
    fn test_phone_lengths() {
        assert!(is_valid("(11) 3456-7890", MaskKind::PhoneAuto));
        assert!(is_valid("(11) 98765-4321", MaskKind::PhoneAuto));
        assert!(is_valid("1134567890", MaskKind::PhoneFixed));
        assert!(!is_valid("113456789", MaskKind::PhoneAuto));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("john.doe@example.com.br"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }
}
