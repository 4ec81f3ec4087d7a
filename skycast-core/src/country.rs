//! Free-text country names to ISO 3166-1 alpha-2 codes.

/// Uppercase aliases and the code they stand for.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("UK", "GB"),
    ("UNITED KINGDOM", "GB"),
    ("GREAT BRITAIN", "GB"),
    ("ENGLAND", "GB"),
    ("SCOTLAND", "GB"),
    ("WALES", "GB"),
    ("NORTHERN IRELAND", "GB"),
    ("US", "US"),
    ("USA", "US"),
    ("UNITED STATES", "US"),
    ("AMERICA", "US"),
    ("CANADA", "CA"),
    ("FRANCE", "FR"),
    ("GERMANY", "DE"),
    ("ITALY", "IT"),
    ("SPAIN", "ES"),
    ("PORTUGAL", "PT"),
    ("NETHERLANDS", "NL"),
    ("HOLLAND", "NL"),
    ("BELGIUM", "BE"),
    ("SWITZERLAND", "CH"),
    ("AUSTRIA", "AT"),
    ("DENMARK", "DK"),
    ("SWEDEN", "SE"),
    ("NORWAY", "NO"),
    ("FINLAND", "FI"),
    ("IRELAND", "IE"),
    ("AUSTRALIA", "AU"),
    ("NEW ZEALAND", "NZ"),
    ("JAPAN", "JP"),
    ("CHINA", "CN"),
    ("INDIA", "IN"),
    ("RUSSIA", "RU"),
    ("BRAZIL", "BR"),
    ("MEXICO", "MX"),
    ("SOUTH AFRICA", "ZA"),
];

/// Map a country name or code to a 2-letter code.
///
/// Input is trimmed and uppercased. Anything that is already two characters
/// long is returned as-is without checking it against a code list. Unknown
/// names give an empty string, which callers treat as "no country filter".
pub fn resolve_country_code(country: &str) -> String {
    let normalized = country.trim().to_uppercase();

    if normalized.chars().count() == 2 {
        return normalized;
    }

    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_codes_pass_through_unvalidated() {
        assert_eq!(resolve_country_code("fr"), "FR");
        assert_eq!(resolve_country_code(" de "), "DE");
        assert_eq!(resolve_country_code("zz"), "ZZ");
    }

    #[test]
    fn aliases_are_case_and_whitespace_insensitive() {
        assert_eq!(resolve_country_code(" uk "), "GB");
        assert_eq!(resolve_country_code("UK"), "GB");
        assert_eq!(resolve_country_code("United Kingdom"), "GB");
        assert_eq!(resolve_country_code("scotland"), "GB");
        assert_eq!(resolve_country_code("Northern Ireland"), "GB");
        assert_eq!(resolve_country_code("america"), "US");
        assert_eq!(resolve_country_code("United States"), "US");
        assert_eq!(resolve_country_code("Holland"), "NL");
    }

    #[test]
    fn unknown_country_is_empty() {
        assert_eq!(resolve_country_code("Narnia"), "");
        assert_eq!(resolve_country_code(""), "");
        assert_eq!(resolve_country_code("   "), "");
    }

    #[test]
    fn table_aliases_are_uppercase_and_codes_two_letters() {
        for (alias, code) in COUNTRY_ALIASES {
            assert_eq!(*alias, alias.to_uppercase());
            assert_eq!(code.len(), 2);
        }
    }
}
