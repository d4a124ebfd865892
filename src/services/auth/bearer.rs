//! Pre-verification normalization of the raw authorizer field.
//!
//! Gateways hand us either a full `Authorization` header value
//! (`Bearer <jwt>`) or the bare token. Both must verify identically.

const SCHEME: &str = "Bearer";

/// Returns the token with an optional case-insensitive `Bearer` scheme removed.
///
/// `None` means there is nothing left to verify (empty or whitespace input).
pub fn normalize(raw: &str) -> Option<&str> {
    let value = raw.trim_start();
    let token = strip_scheme(value).unwrap_or(value).trim_end();

    (!token.is_empty()).then_some(token)
}

// Matches `^Bearer\s+`; the scheme alone (no separator) is left untouched.
fn strip_scheme(value: &str) -> Option<&str> {
    let (scheme, rest) = value.split_at_checked(SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn raw_token_is_returned_as_is() {
        assert_eq!(normalize("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn scheme_is_stripped_case_insensitively() {
        assert_eq!(normalize("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(normalize("bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(normalize("BEARER\tabc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(normalize("  Bearer    abc.def.ghi  "), Some("abc.def.ghi"));
    }

    #[test]
    fn scheme_without_separator_is_not_a_prefix() {
        assert_eq!(normalize("Bearerabc"), Some("Bearerabc"));
        assert_eq!(normalize("Bearer"), Some("Bearer"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("Bearer   "), None);
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(normalize("é"), Some("é"));
        assert_eq!(normalize("ベアラー token"), Some("ベアラー token"));
    }
}
