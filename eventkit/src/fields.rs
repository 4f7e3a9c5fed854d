//! Standard attendee fields and mapping of uploaded file headers onto them.
//!
//! DESIGN
//! ======
//! Uploaded registration exports use arbitrary column names. Headers are
//! normalized to lowercase alphanumerics and compared against each field's
//! key, label, and aliases. Each standard field is suggested at most once,
//! to the header that matches it best.

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A canonical attribute that uploaded columns can be mapped onto.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardField {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub aliases: &'static [&'static str],
}

const fn field(key: &'static str, label: &'static str, required: bool, aliases: &'static [&'static str]) -> StandardField {
    StandardField { key, label, required, aliases }
}

pub const STANDARD_FIELDS: &[StandardField] = &[
    field("first_name", "First Name", true, &["firstname", "given name", "forename", "fname"]),
    field("last_name", "Last Name", true, &["lastname", "surname", "family name", "lname"]),
    field("email", "Email", true, &["email address", "e-mail", "mail"]),
    field("phone", "Phone", false, &["phone number", "mobile", "telephone", "cell"]),
    field("company", "Company", false, &["organization", "organisation", "employer", "company name"]),
    field("job_title", "Job Title", false, &["title", "position", "designation", "role"]),
    field("country", "Country", false, &["nation", "country name"]),
    field("city", "City", false, &["town", "locality"]),
    field("badge_type", "Badge Type", false, &["ticket type", "pass type", "category"]),
    field("booth_number", "Booth Number", false, &["booth", "stand", "stand number"]),
];

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const PARTIAL_CONFIDENCE: f64 = 0.6;

/// Look up a standard field by key.
#[must_use]
pub fn standard_field(key: &str) -> Option<&'static StandardField> {
    STANDARD_FIELDS.iter().find(|f| f.key == key)
}

/// Suggested mapping for one uploaded header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSuggestion {
    pub header: String,
    pub suggested_field: Option<String>,
    pub confidence: f64,
}

/// One column-to-field assignment submitted by an event admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_header: String,
    pub standard_field: String,
}

/// Why a mapping submission was rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("mappings must not be empty")]
    Empty,
    #[error("source header must not be blank")]
    BlankHeader,
    #[error("unknown standard field: {0}")]
    UnknownField(String),
    #[error("standard field mapped more than once: {0}")]
    DuplicateField(String),
    #[error("required standard fields are unmapped: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Lowercase ASCII alphanumerics only.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}

/// Extract the header row from uploaded CSV text.
///
/// The first non-blank line is the header. Double-quoted cells may contain
/// commas and `""` escapes. Cells are trimmed; blank cells are dropped. A
/// leading UTF-8 BOM is ignored.
#[must_use]
pub fn parse_header_row(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(line) = text.lines().find(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells.into_iter().map(|c| c.trim().to_owned()).filter(|c| !c.is_empty()).collect()
}

fn match_confidence(header: &str, field: &StandardField) -> f64 {
    let header = normalize(header);
    if header.is_empty() {
        return 0.0;
    }
    let candidates =
        [field.key, field.label].into_iter().chain(field.aliases.iter().copied()).map(normalize);

    let mut best = 0.0;
    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if candidate == header {
            return EXACT_CONFIDENCE;
        }
        if candidate.contains(&header) || header.contains(&candidate) {
            best = PARTIAL_CONFIDENCE;
        }
    }
    best
}

/// Suggest a standard field for every header, in header order.
///
/// Matches are assigned greedily from the strongest down: higher confidence
/// first, then the earlier header, then catalog order. A header or field
/// that is already taken is skipped, so a field displaced from its best
/// header still lands on its next-best free one.
#[must_use]
pub fn suggest_mappings(headers: &[String]) -> Vec<HeaderSuggestion> {
    let mut candidates: Vec<(usize, usize, f64)> = Vec::new();
    for (header_idx, header) in headers.iter().enumerate() {
        for (field_idx, field) in STANDARD_FIELDS.iter().enumerate() {
            let score = match_confidence(header, field);
            if score > 0.0 {
                candidates.push((header_idx, field_idx, score));
            }
        }
    }
    candidates.sort_by(|a, b| b.2.total_cmp(&a.2).then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));

    let mut assigned: Vec<Option<(&'static str, f64)>> = vec![None; headers.len()];
    let mut used_fields = HashSet::new();
    for (header_idx, field_idx, score) in candidates {
        if assigned[header_idx].is_some() || !used_fields.insert(field_idx) {
            continue;
        }
        assigned[header_idx] = Some((STANDARD_FIELDS[field_idx].key, score));
    }

    headers
        .iter()
        .zip(assigned)
        .map(|(header, slot)| HeaderSuggestion {
            header: header.clone(),
            suggested_field: slot.map(|(key, _)| key.to_owned()),
            confidence: slot.map_or(0.0, |(_, score)| score),
        })
        .collect()
}

/// Validate a submitted mapping set.
///
/// # Errors
///
/// Returns a [`MappingError`] when the set is empty, a header is blank, a
/// target field is unknown or repeated, or a required field is unmapped.
pub fn validate_mappings(mappings: &[FieldMapping]) -> Result<(), MappingError> {
    if mappings.is_empty() {
        return Err(MappingError::Empty);
    }
    let mut seen = HashSet::new();
    for mapping in mappings {
        if mapping.source_header.trim().is_empty() {
            return Err(MappingError::BlankHeader);
        }
        let key = mapping.standard_field.trim();
        if standard_field(key).is_none() {
            return Err(MappingError::UnknownField(key.to_owned()));
        }
        if !seen.insert(key) {
            return Err(MappingError::DuplicateField(key.to_owned()));
        }
    }
    let missing: Vec<String> = STANDARD_FIELDS
        .iter()
        .filter(|f| f.required && !seen.contains(f.key))
        .map(|f| f.key.to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(MappingError::MissingRequired(missing));
    }
    Ok(())
}
