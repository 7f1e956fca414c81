//! Naive PCR primer design from the ends of a template.

use crate::composition::BaseCounts;
use crate::{AnalysisConfig, AnalysisError, DnaSequence};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimerPair {
    /// The first bases of the template.
    pub forward: DnaSequence,
    /// Reverse complement of the last bases of the template.
    pub reverse: DnaSequence,
    /// GC% of the forward primer.
    pub gc_percent: f64,
    /// Wallace-rule Tm of the forward primer.
    pub melting_temp_c: f64,
}

/// Wallace rule, `2 * (A + T) + 4 * (G + C)` in °C.
///
/// Only a fair estimate below ~14 nt; longer primers are not corrected for.
pub fn wallace_tm(primer: &DnaSequence) -> f64 {
    let counts = BaseCounts::of(primer.as_slice());
    (2 * counts.at() + 4 * counts.gc()) as f64
}

pub fn design(seq: &DnaSequence, config: &AnalysisConfig) -> Result<PrimerPair, AnalysisError> {
    if seq.len() < config.min_primer_template {
        return Err(AnalysisError::SequenceTooShort {
            operation: "primer design",
            length: seq.len(),
            minimum: config.min_primer_template,
        });
    }

    let primer_length = config.primer_length.min(seq.len());
    let forward = seq.slice(0..primer_length);
    let reverse = seq
        .slice(seq.len() - primer_length..seq.len())
        .reverse_complement();

    Ok(PrimerPair {
        gc_percent: BaseCounts::of(forward.as_slice()).gc_percent(),
        melting_temp_c: wallace_tm(&forward),
        forward,
        reverse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dna(dna: &str) -> DnaSequence {
        DnaSequence::from_str(dna).unwrap()
    }

    #[test]
    fn test_twenty_nt_template() {
        let seq = dna("ATGCGTACGTTAGCCGATAA");
        let pair = design(&seq, &AnalysisConfig::default()).unwrap();
        assert_eq!(pair.forward.to_string(), "ATGCGTACGTTAGCCGAT");
        // last 18 are GCGTACGTTAGCCGATAA
        assert_eq!(pair.reverse.to_string(), "TTATCGGCTAACGTACGC");
        // forward: A=4 T=5 G=5 C=4
        assert_eq!(pair.melting_temp_c, 54.0);
        assert_eq!(pair.gc_percent, 50.0);
    }

    #[test]
    fn test_short_template_uses_whole_sequence() {
        let seq = dna("GGGGGAAAAA");
        let pair = design(&seq, &AnalysisConfig::default()).unwrap();
        assert_eq!(pair.forward, seq);
        assert_eq!(pair.reverse.to_string(), "TTTTTCCCCC");
        assert_eq!(pair.melting_temp_c, 30.0);
    }

    #[test]
    fn test_too_short() {
        let err = design(&dna("ATGCATGCA"), &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::SequenceTooShort {
                operation: "primer design",
                length: 9,
                minimum: 10
            }
        );
    }

    #[test]
    fn test_configured_length() {
        let config = AnalysisConfig {
            primer_length: 12,
            ..Default::default()
        };
        let pair = design(&dna("ATGCGTACGTTAGCCGATAA"), &config).unwrap();
        assert_eq!(pair.forward.len(), 12);
        assert_eq!(pair.reverse.len(), 12);
    }
}
