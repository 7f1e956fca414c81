//! Turning user-supplied text into a [`DnaSequence`].
//!
//! Raw text may start with a single FASTA header line (`>` up to the first newline)
//! and may contain anything else. [`clean`] is lenient and keeps only `A`, `T`, `G`, `C`;
//! [`validate`] is strict and reports what cleaning would have thrown away.
//! Analyses go through [`parse_strict`], which validates first and cleans second.

use log::debug;

use crate::{AnalysisError, DnaSequence, Nucleotide};

/// Text after the leading FASTA header line, if there is one.
pub fn strip_header(raw: &str) -> &str {
    if !raw.starts_with('>') {
        return raw;
    }
    match raw.find('\n') {
        Some(newline) => &raw[newline + 1..],
        None => "",
    }
}

/// Every `A`, `T`, `G`, `C` of `text` (case-insensitive), in order; everything else is dropped.
pub fn retain_bases(text: &str) -> DnaSequence {
    text.bytes()
        .filter_map(|b| Nucleotide::try_from(b).ok())
        .collect()
}

/// Strips the FASTA header, then keeps only the bases. Never fails.
pub fn clean(raw: &str) -> DnaSequence {
    retain_bases(strip_header(raw))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Empty,
    /// The distinct rejected characters, upper-cased, in first-seen order.
    ContainsInvalidChars(Vec<char>),
    Valid,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        *self == Self::Valid
    }

    pub fn into_result(self) -> Result<(), AnalysisError> {
        match self {
            Self::Empty => Err(AnalysisError::EmptySequence),
            Self::ContainsInvalidChars(chars) => Err(AnalysisError::InvalidCharacters(chars)),
            Self::Valid => Ok(()),
        }
    }
}

/// Classifies raw text before anything is stripped from it.
///
/// Every character after the header line other than `A`, `T`, `G`, `C` (either case)
/// is invalid, whitespace and line breaks included.
pub fn validate(raw: &str) -> ValidationOutcome {
    let body = strip_header(raw);
    if body.is_empty() {
        return ValidationOutcome::Empty;
    }

    let mut invalid: Vec<char> = Vec::new();
    for c in body.chars().map(|c| c.to_ascii_uppercase()) {
        if Nucleotide::try_from(c).is_err() && !invalid.contains(&c) {
            invalid.push(c);
        }
    }

    if invalid.is_empty() {
        ValidationOutcome::Valid
    } else {
        debug!("rejecting input: {} distinct invalid characters", invalid.len());
        ValidationOutcome::ContainsInvalidChars(invalid)
    }
}

/// Validates `raw`, then cleans it.
pub fn parse_strict(raw: &str) -> Result<DnaSequence, AnalysisError> {
    validate(raw).into_result()?;
    let dna = clean(raw);
    debug!("accepted {} bp sequence", dna.len());
    Ok(dna)
}
