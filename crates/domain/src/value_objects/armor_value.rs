//! Armor value expressions such as `"14 + Dex modifier"` or `"2"`.

/// Parsed view of a gear `armorValue` string.
///
/// Only two facts are read from the free-form text: the first run of digits
/// (the base value) and whether a Dexterity marker appears anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorValue {
    base: Option<i32>,
    adds_dex: bool,
}

impl ArmorValue {
    pub fn parse(raw: &str) -> Self {
        Self {
            base: first_integer(raw),
            adds_dex: raw.to_lowercase().contains("dex"),
        }
    }

    /// First integer in the expression, if any.
    pub fn base(&self) -> Option<i32> {
        self.base
    }

    /// Base value, or `fallback` when the text has no digits.
    pub fn base_or(&self, fallback: i32) -> i32 {
        self.base.unwrap_or(fallback)
    }

    pub fn adds_dex(&self) -> bool {
        self.adds_dex
    }
}

/// First contiguous run of ASCII digits, read as an integer.
fn first_integer(raw: &str) -> Option<i32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    // Saturate absurdly long digit runs instead of failing
    Some(digits.parse::<i32>().unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_and_dex_marker() {
        let value = ArmorValue::parse("14 + Dex modifier");
        assert_eq!(value.base(), Some(14));
        assert!(value.adds_dex());
    }

    #[test]
    fn finds_first_number_anywhere() {
        assert_eq!(ArmorValue::parse("AC 16 (max 2)").base(), Some(16));
    }

    #[test]
    fn dex_marker_is_case_insensitive() {
        assert!(ArmorValue::parse("11 + DEX").adds_dex());
        assert!(!ArmorValue::parse("18").adds_dex());
    }

    #[test]
    fn no_digits_uses_fallback() {
        let value = ArmorValue::parse("sturdy");
        assert_eq!(value.base(), None);
        assert_eq!(value.base_or(10), 10);
        assert_eq!(value.base_or(0), 0);
    }
}
