//! Driver payload validation.
//!
//! Validation is pure: it never touches storage and reports every violation at once so
//! clients can fix a payload in a single round trip.

use crate::server::{
    error::driver::{DriverError, MIN_SEARCH_TERM_LEN},
    model::driver::DriverCandidate,
};

pub const MAX_FIRST_NAME_LEN: usize = 50;
pub const MAX_LAST_NAME_LEN: usize = 50;
pub const MAX_LICENSE_LEN: usize = 20;
pub const MAX_PHONE_LEN: usize = 15;

/// Checks a candidate driver against presence and length rules.
///
/// Each field is trimmed first. A missing or blank field yields its "required"
/// message; the length rule is only checked for present fields. Lengths are counted in
/// characters, not bytes.
///
/// # Arguments
/// - `candidate` - Unvalidated driver fields
///
/// # Returns
/// - Empty `Vec` - Candidate is valid
/// - Non-empty `Vec<String>` - One human-readable message per violation, in field order
pub fn validate(candidate: &DriverCandidate) -> Vec<String> {
    let rules = [
        (
            &candidate.first_name,
            MAX_FIRST_NAME_LEN,
            "El nombre es requerido",
            "El nombre debe tener máximo 50 caracteres",
        ),
        (
            &candidate.last_name,
            MAX_LAST_NAME_LEN,
            "El apellido es requerido",
            "El apellido debe tener máximo 50 caracteres",
        ),
        (
            &candidate.license,
            MAX_LICENSE_LEN,
            "La licencia es requerida",
            "La licencia debe tener máximo 20 caracteres",
        ),
        (
            &candidate.phone,
            MAX_PHONE_LEN,
            "El teléfono es requerido",
            "El teléfono debe tener máximo 15 caracteres",
        ),
    ];

    let mut errors = Vec::new();

    for (field, max_len, required, too_long) in rules {
        match field.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            None => errors.push(required.to_string()),
            Some(value) if value.chars().count() > max_len => errors.push(too_long.to_string()),
            Some(_) => {}
        }
    }

    errors
}

/// Canonical form of a license: trimmed and upper-cased.
pub fn normalize_license(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Trims a search term and rejects it when shorter than `MIN_SEARCH_TERM_LEN` characters.
///
/// # Returns
/// - `Ok(String)` - Trimmed term
/// - `Err(DriverError::InvalidSearchTerm)` - Term too short
pub fn validate_search_term(raw: &str) -> Result<String, DriverError> {
    let term = raw.trim();

    if term.chars().count() < MIN_SEARCH_TERM_LEN {
        return Err(DriverError::InvalidSearchTerm(raw.to_string()));
    }

    Ok(term.to_string())
}
