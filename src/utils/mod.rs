use crate::error::AppError;

pub const MIN_LOCATION_LEN: usize = 2;
pub const MAX_LOCATION_LEN: usize = 100;

/// Title-cases a city name: `"new YORK"` becomes `"New York"`.
pub fn normalize_location(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn cache_key(location: &str) -> String {
    location.to_lowercase()
}

/// Checks a client-supplied location and returns its normalized form.
pub fn validate_location(raw: Option<&str>) -> Result<String, AppError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Location is required".into()));
    }

    let len = trimmed.chars().count();
    if len < MIN_LOCATION_LEN {
        return Err(AppError::BadRequest(format!(
            "Location must be at least {} characters",
            MIN_LOCATION_LEN
        )));
    }
    if len > MAX_LOCATION_LEN {
        return Err(AppError::BadRequest(format!(
            "Location must be at most {} characters",
            MAX_LOCATION_LEN
        )));
    }

    Ok(normalize_location(trimmed))
}
