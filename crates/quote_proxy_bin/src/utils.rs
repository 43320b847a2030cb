/// Trims the `symbol` query value; blank counts as missing.
pub fn normalize_symbol(symbol: Option<&str>) -> Option<String> {
    symbol
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
