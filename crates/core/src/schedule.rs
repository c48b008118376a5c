//! Validation rules for schedule and stellar input.
//!
//! Pure functions, no I/O. Handlers call these before touching the
//! repository layer so that invalid input never produces a row.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a schedule title in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of a schedule remark in characters.
pub const MAX_REMARK_LENGTH: usize = 1_000;

/// Maximum length of a stellar name in characters.
pub const MAX_STELLAR_NAME_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a schedule title: non-empty after trimming, within length cap.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional remark: length cap only, empty is allowed.
pub fn validate_remark(remark: Option<&str>) -> Result<(), String> {
    if let Some(remark) = remark {
        if remark.chars().count() > MAX_REMARK_LENGTH {
            return Err(format!(
                "Remark must be at most {MAX_REMARK_LENGTH} characters"
            ));
        }
    }
    Ok(())
}

/// Validate a stellar name: non-empty after trimming, within length cap.
pub fn validate_stellar_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if name.chars().count() > MAX_STELLAR_NAME_LENGTH {
        return Err(format!(
            "Name must be at most {MAX_STELLAR_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}
