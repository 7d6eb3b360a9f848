use regex::Regex;

pub fn normalize_newlines(value: &str) -> String {
    value.replace("\r\n", "\n")
}

/// Todas las subcadenas deben aparecer (sensible a mayúsculas).
pub fn contains_all(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().all(|n| haystack.contains(n))
}

pub fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}
