// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Progressive mask application
//
// Each identifier kind is a fill pattern over the canonical string:
// `#` consumes a digit, `@` consumes a digit or uppercase letter, any
// other character is a literal separator. Separators are emitted only
// once a later slot is filled, so a partially typed value renders as a
// plain prefix ("123" stays "123", "1234" becomes "123.4").

use crate::canonical::canonicalize;
use crate::kind::MaskKind;

const CPF_PATTERN: &str = "###.###.###-##";
const CNPJ_PATTERN: &str = "##.###.###/####-##";
// First 12 positions take letters, the check digits never do.
const CNPJ_ALPHANUMERIC_PATTERN: &str = "@@.@@@.@@@/@@@@-##";
const CEP_PATTERN: &str = "#####-###";
const PHONE_FIXED_PATTERN: &str = "(##) ####-####";
const PHONE_MOBILE_PATTERN: &str = "(##) #####-####";

/// Format a raw string as the display mask for `kind`.
///
/// Canonicalizes first, so feeding the output back in is a no-op:
/// `apply_mask(apply_mask(s, k), k) == apply_mask(s, k)`. Excess input
/// beyond the kind's cap is dropped silently; the caller is typing and
/// must never see an error.
pub fn apply_mask(raw: &str, kind: MaskKind) -> String {
    let canonical = canonicalize(raw, kind);
    match kind {
        MaskKind::Cpf => fill(CPF_PATTERN, &canonical),
        MaskKind::Cnpj => fill(CNPJ_PATTERN, &canonical),
        MaskKind::CnpjAlphanumeric => fill(CNPJ_ALPHANUMERIC_PATTERN, &canonical),
        MaskKind::Cep => fill(CEP_PATTERN, &canonical),
        MaskKind::PhoneFixed => fill(PHONE_FIXED_PATTERN, &canonical),
        MaskKind::PhoneMobile => fill(PHONE_MOBILE_PATTERN, &canonical),
        // Re-decided on every call, not sticky: deleting back to 10
        // digits snaps the layout back to the fixed-line shape.
        MaskKind::PhoneAuto => {
            if canonical.len() > 10 {
                fill(PHONE_MOBILE_PATTERN, &canonical)
            } else {
                fill(PHONE_FIXED_PATTERN, &canonical)
            }
        }
        MaskKind::CurrencyCents | MaskKind::CurrencyReais => mask_currency(&canonical),
    }
}

fn fill(pattern: &str, canonical: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut pending = String::new();
    let mut chars = canonical.chars().peekable();

    for slot in pattern.chars() {
        match slot {
            '#' | '@' => {
                let Some(&c) = chars.peek() else { break };
                let fits = if slot == '#' {
                    c.is_ascii_digit()
                } else {
                    c.is_ascii_alphanumeric()
                };
                // A letter reaching a digit-only slot ends the render;
                // the check digits of an alphanumeric CNPJ stay numeric.
                if !fits {
                    break;
                }
                chars.next();
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
            literal => pending.push(literal),
        }
    }

    out
}

/// Currency display: the last two canonical digits are always cents.
///
/// Empty canonical input renders empty, not "0,00": an untouched field
/// must not look filled in.
pub(crate) fn mask_currency(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let padded = format!("{:0>3}", digits);
    let (int_part, cents) = padded.split_at(padded.len() - 2);
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    format!("{},{}", group_thousands(int_part), cents)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
