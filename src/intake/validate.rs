use chrono::NaiveDate;

pub(crate) const DATE_FORMAT_DETAIL: &str =
    "expected three hyphen-separated numeric components (YYYY-MM-DD)";
pub(crate) const DATE_CALENDAR_DETAIL: &str = "components do not form a real calendar date";

/// Failures raised while normalizing raw field input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("phone number {value:?} must reduce to exactly 10 digits")]
    InvalidPhone { value: String },
    #[error("email address {value:?} is missing an '@'")]
    InvalidEmail { value: String },
    #[error("date {value:?}: {detail}")]
    InvalidDate { value: String, detail: &'static str },
    #[error("unrecognized selector {value:?} for {expected}")]
    InvalidArgument { value: String, expected: &'static str },
}

/// A validation failure annotated with the record field it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for '{field}': {source}")]
pub struct FieldError {
    field: &'static str,
    source: ValidationError,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, source: ValidationError) -> Self {
        Self { field, source }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> &ValidationError {
        &self.source
    }
}

/// Reduce a raw phone string to a 10-digit national number.
///
/// A leading `0` is read as a `00`-style international prefix (the first
/// three characters are dropped), a leading `+` as a `+1` prefix (the first
/// two characters are dropped). Whatever remains must be exactly 10 ASCII
/// digits and is returned as an integer.
pub fn normalize_phone(raw: &str) -> Result<u64, ValidationError> {
    let national = if raw.starts_with('0') {
        strip_prefix_chars(raw, 3)
    } else if raw.starts_with('+') {
        strip_prefix_chars(raw, 2)
    } else {
        raw
    };

    if national.len() != 10 || !national.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone {
            value: raw.to_string(),
        });
    }

    national
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidPhone {
            value: raw.to_string(),
        })
}

/// Drop the first `count` characters, not bytes; prefix characters may be
/// multibyte and must never shift the split point.
fn strip_prefix_chars(raw: &str, count: usize) -> &str {
    match raw.char_indices().nth(count) {
        Some((offset, _)) => &raw[offset..],
        None => "",
    }
}

/// Accept any string containing at least one `@`, returned unchanged.
///
/// No structural validation beyond the `@` check; the intake form treats
/// everything else as the applicant's problem.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    if raw.contains('@') {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::InvalidEmail {
            value: raw.to_string(),
        })
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Wrong component count or non-numeric components and calendrically
/// impossible dates are the same error kind with different detail messages.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid_date(raw, DATE_FORMAT_DETAIL));
    }

    let (year, month, day) = match (
        parts[0].parse::<i32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(invalid_date(raw, DATE_FORMAT_DETAIL)),
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid_date(raw, DATE_CALENDAR_DETAIL))
}

fn invalid_date(raw: &str, detail: &'static str) -> ValidationError {
    ValidationError::InvalidDate {
        value: raw.to_string(),
        detail,
    }
}
