use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("non-ascii byte: {:x?}", .0)]
    NonAsciiByte(u8),
    #[error("bad nucleotide: {:?}", .0)]
    BadNucleotide(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("position {position} is outside 1..={length}")]
    PositionOutOfRange { position: usize, length: usize },
    #[error("base {:?} is not one of A, T, G, C", .0)]
    InvalidBase(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No DNA sequence detected. Please enter A, T, G, C bases.")]
    EmptySequence,
    #[error(
        "Invalid characters detected ({}). Only A, T, G, C are allowed.",
        quote_chars(.0)
    )]
    InvalidCharacters(Vec<char>),
    #[error("Sequence too short for {operation}: {length} bp (minimum {minimum} bp).")]
    SequenceTooShort {
        operation: &'static str,
        length: usize,
        minimum: usize,
    },
    #[error("Invalid mutation request: {0}.")]
    InvalidMutationRequest(#[from] MutationError),
    #[error("Restriction enzyme recognition sequence contains no A, T, G, C bases.")]
    EmptyRecognitionSite,
    #[error("not a reading frame offset: {} (expected 0, 1 or 2)", .0)]
    InvalidFrame(usize),
}

fn quote_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters_message() {
        let err = AnalysisError::InvalidCharacters(vec!['N', 'x']);
        assert_eq!(
            err.to_string(),
            "Invalid characters detected ('N', 'x'). Only A, T, G, C are allowed."
        );
    }

    #[test]
    fn test_mutation_error_converts() {
        let err: AnalysisError = MutationError::InvalidBase('Q').into();
        assert_eq!(
            err.to_string(),
            "Invalid mutation request: base 'Q' is not one of A, T, G, C."
        );
    }
}
