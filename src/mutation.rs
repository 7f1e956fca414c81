use crate::errors::MutationError;
use crate::{AnalysisError, DnaSequence, Nucleotide};

/// A single-base substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    /// 1-based.
    pub position: usize,
    pub from: Nucleotide,
    pub to: Nucleotide,
}

impl Mutation {
    pub fn is_silent(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.from, self.position, self.to)
    }
}

impl DnaSequence {
    /// Replaces the base at 1-based `position` with `base` (case-insensitive).
    pub fn mutate(
        &self,
        position: usize,
        base: char,
    ) -> Result<(DnaSequence, Mutation), AnalysisError> {
        if position < 1 || position > self.len() {
            return Err(MutationError::PositionOutOfRange {
                position,
                length: self.len(),
            }
            .into());
        }
        let to = Nucleotide::try_from(base).map_err(|_| MutationError::InvalidBase(base))?;

        let mut dna = self.as_slice().to_vec();
        let from = std::mem::replace(&mut dna[position - 1], to);

        Ok((DnaSequence::new(dna), Mutation { position, from, to }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dna(dna: &str) -> DnaSequence {
        DnaSequence::from_str(dna).unwrap()
    }

    #[test]
    fn test_point_mutation() {
        let (mutated, mutation) = dna("ATGCAT").mutate(4, 'g').unwrap();
        assert_eq!(mutated.to_string(), "ATGGAT");
        assert_eq!(mutation.to_string(), "C4G");
        assert!(!mutation.is_silent());
    }

    #[test]
    fn test_mutate_ends() {
        let seq = dna("ATGC");
        assert_eq!(seq.mutate(1, 'C').unwrap().0.to_string(), "CTGC");
        assert_eq!(seq.mutate(4, 'A').unwrap().0.to_string(), "ATGA");
        assert!(seq.mutate(2, 'T').unwrap().1.is_silent());
    }

    #[test]
    fn test_position_out_of_range() {
        let seq = dna("ATGC");
        for position in [0, 5] {
            assert_eq!(
                seq.mutate(position, 'A'),
                Err(AnalysisError::InvalidMutationRequest(
                    MutationError::PositionOutOfRange {
                        position,
                        length: 4
                    }
                ))
            );
        }
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(
            dna("ATGC").mutate(1, 'N'),
            Err(AnalysisError::InvalidMutationRequest(
                MutationError::InvalidBase('N')
            ))
        );
    }
}
