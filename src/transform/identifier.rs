//! Abbreviation expansion for generated identifiers.

/// Expansion table, applied in this exact order. The order is load-bearing:
/// `LOBID` must become `LineOfBusinessId`, which only works because the
/// `LOB` rule runs before the `ID` rule.
const REPLACEMENTS: [(&str, &str); 5] = [
    ("LOB", "LineOfBusiness"),
    ("ID", "Id"),
    ("Num", "Number"),
    ("Agt", "Agent"),
    ("Trans", "Transaction"),
];

/// Expand known abbreviations in a candidate identifier.
///
/// Replacements are global (every occurrence) and only ever applied to
/// code-facing names, never to values.
pub fn normalize(identifier: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(identifier.to_string(), |acc, (from, to)| {
            acc.replace(from, to)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_each_abbreviation() {
        assert_eq!(normalize("LOBCode"), "LineOfBusinessCode");
        assert_eq!(normalize("PolicyID"), "PolicyId");
        assert_eq!(normalize("AcctNum"), "AcctNumber");
        assert_eq!(normalize("AgtName"), "AgentName");
        assert_eq!(normalize("TransDate"), "TransactionDate");
    }

    #[test]
    fn rules_apply_left_to_right() {
        assert_eq!(normalize("LOBID"), "LineOfBusinessId");
    }

    #[test]
    fn replacements_are_global() {
        assert_eq!(normalize("IDID"), "IdId");
    }

    #[test]
    fn untouched_when_nothing_matches() {
        assert_eq!(normalize("PolicyHolder"), "PolicyHolder");
    }
}
