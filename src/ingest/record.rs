//! Parsing and validation of a single hop record

use super::{IngestConfig, RecordError};
use std::str::FromStr;

/// One `source, destination, hop time` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopRecord {
    pub source: String,
    pub destination: String,
    pub hop_time: u32,
}

impl HopRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, hop_time: u32) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            hop_time,
        }
    }

    /// Parse one line under the given rules
    ///
    /// The line must have exactly three delimited fields. Whitespace around
    /// the hop time is ignored; names are taken verbatim and must be
    /// non-empty, no longer than `max_name_len` characters, free of spaces
    /// and not the reserved word in any letter case. A blank line has no
    /// source field.
    ///
    /// Stricter than the legacy record format, which read a leading integer
    /// from the hop field and ignored anything after it, and accepted empty
    /// names: here `"7 junk"` and `"7<TAB>extra"` are `InvalidHopTime` and an
    /// empty name is `EmptyName`.
    pub fn parse(line: &str, config: &IngestConfig) -> Result<Self, RecordError> {
        if line.trim().is_empty() {
            return Err(RecordError::MissingField("source"));
        }
        let mut fields = line.splitn(3, config.delimiter);
        let source = fields.next().ok_or(RecordError::MissingField("source"))?;
        let destination = fields
            .next()
            .ok_or(RecordError::MissingField("destination"))?;
        let hop_field = fields.next().ok_or(RecordError::MissingField("hop time"))?;

        let hop_time = hop_field
            .trim()
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidHopTime(hop_field.to_string()))?;

        validate_name(source, "source", config)?;
        validate_name(destination, "destination", config)?;

        Ok(Self::new(source, destination, hop_time))
    }
}

impl FromStr for HopRecord {
    type Err = RecordError;

    /// Parse with the default rules
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line, &IngestConfig::default())
    }
}

fn validate_name(name: &str, field: &'static str, config: &IngestConfig) -> Result<(), RecordError> {
    if name.is_empty() {
        return Err(RecordError::EmptyName(field));
    }
    if name.chars().count() > config.max_name_len {
        return Err(RecordError::NameTooLong {
            name: name.to_string(),
            max: config.max_name_len,
        });
    }
    if name.eq_ignore_ascii_case(&config.reserved_word) {
        return Err(RecordError::ReservedName(name.to_string()));
    }
    if name.contains(' ') {
        return Err(RecordError::NameContainsSpace(name.to_string()));
    }
    Ok(())
}
