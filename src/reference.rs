use std::sync::LazyLock;

use regex::Regex;

static BOOK_CHAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^:.\s]+)\s*[:.]\s*(\S+)\s*$").expect("book:chapter pattern compiles")
});

static SECTION_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("section range pattern compiles"));

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Splits `5:23` or `5.23` into book and chapter keys.
pub fn split_reference(raw: &str) -> Option<(String, String)> {
    let caps = BOOK_CHAPTER.captures(raw)?;
    Some((normalize_key(&caps[1]), normalize_key(&caps[2])))
}

/// Parses a `3-6` section range.
pub fn parse_range(raw: &str) -> Option<(u32, u32)> {
    let caps = SECTION_RANGE.captures(raw.trim())?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

/// Book files key their chapters by plain numbers, so `05` has to become `5`.
pub fn normalize_key(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<u32>() {
        Ok(n) => n.to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn to_roman(mut n: u32) -> String {
    let mut roman = String::new();
    for (value, numeral) in ROMAN_NUMERALS {
        while n >= value {
            roman.push_str(numeral);
            n -= value;
        }
    }
    roman
}

/// Roman numeral for numeric keys, the key itself otherwise.
pub fn key_to_roman(key: &str) -> String {
    key.parse::<u32>().map(to_roman).unwrap_or_else(|_| key.to_string())
}
