use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for normalizing language codes - extracts the leading code prefix
pub static RE_LANGUAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z\-]*)").expect("Invalid regex pattern"));
