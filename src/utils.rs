// src/utils.rs

/// Last path segment of `filename`, accepting both `/` and `\` separators.
pub fn file_base_name(filename: &str) -> &str {
    filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename)
}
