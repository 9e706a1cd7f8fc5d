use crate::constants::{COMPANY_NAME_STRIPPED_CHARS, LEGAL_ENTITY_SUFFIXES, MAX_NOISE_TOKEN_LENGTH};

/// Canonicalizes a company name into a comparable, space-separated token form.
///
/// The steps run in a fixed order:
///
/// 1. Lower-case the name.
/// 2. Delete every `.`, `,` and `/`.
/// 3. Split on single spaces and drop tokens of two characters or fewer.
/// 4. Drop standalone legal-entity suffix tokens (`plc`, `ltd`, `llc`, `sca`, `kgaa`, `gmbh`).
/// 5. Trim surrounding whitespace.
///
/// Short real words (e.g. "AB", "Co") are lost in step 3 along with initials.
///
/// ### Example:
/// ```rust
/// use greenscreen::normalize_company_name;
///
/// assert_eq!(normalize_company_name("Acme GmbH"), "acme");
/// assert_eq!(normalize_company_name("J.P. Morgan & Co. PLC"), "morgan");
/// ```
pub fn normalize_company_name(name: &str) -> String {
    let lowercased = name.to_lowercase();

    let stripped: String = lowercased
        .chars()
        .filter(|c| !COMPANY_NAME_STRIPPED_CHARS.contains(c))
        .collect();

    stripped
        .split(' ')
        // Tokens are judged without surrounding tabs or newlines, which the final trim removes
        .filter(|token| token.trim().chars().count() > MAX_NOISE_TOKEN_LENGTH)
        .filter(|token| !LEGAL_ENTITY_SUFFIXES.contains(&token.trim()))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
