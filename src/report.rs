//! Plain-text reports, one per operation, plus the full analysis narrative.

use std::fmt;

use crate::codon_table::CodonTable;
use crate::composition::{base_counts, codon_usage, gc_percent};
use crate::digest::Digest;
use crate::mutation::Mutation;
use crate::orf::{self, Orf};
use crate::primer::PrimerPair;
use crate::{AnalysisConfig, AnalysisError, DnaSequence, Frame, ProteinSequence, Strand};

pub fn stats(seq: &DnaSequence) -> String {
    let counts = base_counts(seq);
    format!(
        "Sequence Length: {} bp\nA: {}\nT: {}\nG: {}\nC: {}",
        seq.len(),
        counts.a,
        counts.t,
        counts.g,
        counts.c
    )
}

pub fn gc_content(seq: &DnaSequence) -> String {
    format!("GC Content: {:.2}%", gc_percent(seq))
}

pub fn reverse_complement(seq: &DnaSequence) -> String {
    format!("Reverse Complement:\n{}", seq.reverse_complement())
}

pub fn transcription(seq: &DnaSequence) -> String {
    format!("RNA Sequence:\n{}", seq.transcribe())
}

pub fn translation(seq: &DnaSequence) -> String {
    format!(
        "RNA Sequence:\n{}\n\nProtein Sequence:\n{}",
        seq.transcribe(),
        seq.translate()
    )
}

/// Renders a multi-line report through a `Formatter`, so writers can use `?`.
fn render<F>(write: F) -> String
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    struct Render<F>(F);

    impl<F> fmt::Display for Render<F>
    where
        F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            (self.0)(f)
        }
    }

    Render(write).to_string()
}

pub fn six_frames(seq: &DnaSequence) -> String {
    render(|f| {
        for (strand, frame, protein) in seq.translate_six_frames() {
            if frame == Frame::Zero {
                if strand == Strand::Reverse {
                    f.write_str("\n\n")?;
                }
                write!(f, "{strand} Strand Frames:")?;
            }
            write!(f, "\n{}{}: {}", strand.sign(), frame.offset() + 1, protein)?;
        }
        Ok(())
    })
}

/// Every forward-strand ORF with its bases and translation.
pub fn orf_list(seq: &DnaSequence) -> String {
    let orfs = orf::find_forward(seq);
    if orfs.is_empty() {
        return "No ORFs detected in the sequence.".to_string();
    }

    render(|f| {
        for (i, orf) in orfs.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            let bases = orf.sequence(seq);
            writeln!(f, "ORF {}: {} (Length: {} bp)", i + 1, bases, orf.len())?;
            write!(f, "Protein: {}", bases.translate())?;
        }
        Ok(())
    })
}

fn write_longest_orf(f: &mut fmt::Formatter<'_>, best: &Orf, seq_len: usize) -> fmt::Result {
    writeln!(f, "Longest ORF Prediction:\n")?;
    writeln!(f, "Strand: {}", best.strand)?;
    writeln!(f, "Frame: {}{}", best.strand.sign(), best.frame.offset() + 1)?;
    writeln!(f, "Start Position: {}", best.start + 1)?;
    writeln!(f, "End Position: {}", best.end)?;
    writeln!(f, "Length: {} bp ({} codons)", best.len(), best.codon_count())?;
    if best.strand == Strand::Reverse {
        let span = best.forward_span(seq_len);
        writeln!(
            f,
            "Positions are on the reverse complement (forward strand {}-{}).",
            span.start + 1,
            span.end
        )?;
    }
    write!(
        f,
        "\nInterpretation: Sequence likely contains a protein-coding region."
    )
}

pub fn longest_orf(
    seq: &DnaSequence,
    config: &AnalysisConfig,
) -> Result<String, AnalysisError> {
    if seq.len() < config.min_orf_template {
        return Err(AnalysisError::SequenceTooShort {
            operation: "ORF detection",
            length: seq.len(),
            minimum: config.min_orf_template,
        });
    }

    Ok(match orf::scan_all_frames(seq) {
        Some(best) => render(|f| write_longest_orf(f, &best, seq.len())),
        None => "No ORFs detected in any frame.".to_string(),
    })
}

pub fn codon_usage_table(seq: &DnaSequence) -> String {
    let table = CodonTable::standard();
    render(|f| {
        writeln!(f, "Codon Usage Analysis:\n")?;
        for (codon, count) in codon_usage(seq).iter() {
            let residue = table.residue(codon);
            writeln!(f, "{} ({residue}): {count}", codon.to_rna_string())?;
        }
        write!(
            f,
            "\nInterpretation: Displays codon frequency, useful for studying codon bias \
             and gene expression efficiency."
        )
    })
}

pub fn primers(pair: &PrimerPair) -> String {
    format!(
        "Forward Primer: {}\nReverse Primer: {}\nGC Content: {:.2}%\nTm (approx): {:.0} °C",
        pair.forward, pair.reverse, pair.gc_percent, pair.melting_temp_c
    )
}

pub fn digestion(digest: Option<&Digest>) -> String {
    match digest {
        None => "No restriction sites found.".to_string(),
        Some(digest) => {
            let fragments: Vec<String> = digest.fragments.iter().map(|f| f.to_string()).collect();
            format!(
                "Cut Sites Found: {}\nFragment Sizes (bp): {}",
                digest.cut_sites.len(),
                fragments.join(" | ")
            )
        }
    }
}

pub fn mutation(
    original: &DnaSequence,
    mutated: &DnaSequence,
    mutation: &Mutation,
) -> String {
    format!("Original: {original}\n\nMutated:  {mutated}\n\nSubstitution: {mutation}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcBand {
    Low,
    Moderate,
    High,
}

impl GcBand {
    pub fn classify(gc_percent: f64, config: &AnalysisConfig) -> Self {
        if gc_percent < config.gc_low_threshold {
            Self::Low
        } else if gc_percent > config.gc_high_threshold {
            Self::High
        } else {
            Self::Moderate
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Self::Low => "Low GC content; may reduce thermal stability.",
            Self::Moderate => "Moderate GC content; suitable for standard PCR conditions.",
            Self::High => "High GC content; increased thermal stability expected.",
        }
    }
}

/// Length, GC content, forward frame 0 ORFs and the first ORF's protein.
#[derive(Debug, Clone, PartialEq)]
pub struct FullAnalysis {
    pub length: usize,
    pub gc_percent: f64,
    pub gc_band: GcBand,
    pub orfs: Vec<Orf>,
    pub first_orf_protein: Option<ProteinSequence>,
}

impl FullAnalysis {
    pub fn new(seq: &DnaSequence, config: &AnalysisConfig) -> Self {
        let gc_percent = gc_percent(seq);
        // banded on the value as printed
        let shown_gc = (gc_percent * 100.0).round() / 100.0;
        let orfs = orf::find_in_frame(seq, Frame::Zero, Strand::Forward);
        let first_orf_protein = orfs.first().map(|orf| orf.sequence(seq).translate());

        Self {
            length: seq.len(),
            gc_percent,
            gc_band: GcBand::classify(shown_gc, config),
            orfs,
            first_orf_protein,
        }
    }
}

impl fmt::Display for FullAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DNA Lab - Full Sequence Analysis Report")?;
        writeln!(f, "{}\n", "-".repeat(50))?;
        writeln!(f, "Sequence Length: {} bp\n", self.length)?;
        writeln!(f, "GC Content: {:.2}%", self.gc_percent)?;
        writeln!(f, "Interpretation: {}\n", self.gc_band.interpretation())?;

        if self.orfs.is_empty() {
            write!(f, "ORF Analysis: No valid open reading frames detected.")?;
        } else {
            writeln!(f, "ORF Analysis:")?;
            for (i, orf) in self.orfs.iter().enumerate() {
                writeln!(f, "  ORF {}: Length {} bp", i + 1, orf.len())?;
            }
        }

        if let Some(protein) = &self.first_orf_protein {
            writeln!(f, "\nPredicted Protein (from first ORF):")?;
            writeln!(f, "{protein}\n")?;
            write!(f, "Interpretation: Sequence likely encodes a protein-coding region.")?;
        }
        Ok(())
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
    fn test_gc_content() {
        assert_eq!(gc_content(&dna("GGCCATAT")), "GC Content: 50.00%");
        assert_eq!(gc_content(&dna("GAA")), "GC Content: 33.33%");
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            stats(&dna("AATGC")),
            "Sequence Length: 5 bp\nA: 2\nT: 1\nG: 1\nC: 1"
        );
    }

    #[test]
    fn test_translation() {
        assert_eq!(
            translation(&dna("ATGAAATAA")),
            "RNA Sequence:\nAUGAAAUAA\n\nProtein Sequence:\nMet-Lys"
        );
    }

    #[test]
    fn test_six_frames() {
        assert_eq!(
            six_frames(&dna("AAAGGGAAA")),
            "Forward Strand Frames:\n+1: Lys-Gly-Lys\n+2: Lys-Gly\n+3: Arg-Glu\n\n\
             Reverse Strand Frames:\n-1: Phe-Pro-Phe\n-2: Phe-Pro\n-3: Ser-Leu"
        );
    }

    #[test]
    fn test_orf_list() {
        assert_eq!(
            orf_list(&dna("ATGAAATAAGGGATGCCCTAGAAA")),
            "ORF 1: ATGAAATAA (Length: 9 bp)\nProtein: Met-Lys\n\n\
             ORF 2: ATGCCCTAG (Length: 9 bp)\nProtein: Met-Pro"
        );
        assert_eq!(orf_list(&dna("GGGG")), "No ORFs detected in the sequence.");
    }

    #[test]
    fn test_longest_orf_report() {
        let report = longest_orf(&dna("ATGAAATAAGGGATGCCCTAGAAA"), &AnalysisConfig::default())
            .unwrap();
        assert_eq!(
            report,
            "Longest ORF Prediction:\n\nStrand: Forward\nFrame: +1\nStart Position: 1\n\
             End Position: 9\nLength: 9 bp (3 codons)\n\n\
             Interpretation: Sequence likely contains a protein-coding region."
        );
    }

    #[test]
    fn test_longest_orf_reverse_mentions_forward_span() {
        let report = longest_orf(&dna("GGTTACATCC"), &AnalysisConfig::default()).unwrap();
        assert!(report.contains("Strand: Reverse\nFrame: -3\nStart Position: 3\nEnd Position: 8\n"));
        assert!(report.contains("(forward strand 3-8)"));
    }

    #[test]
    fn test_longest_orf_edge_cases() {
        let config = AnalysisConfig::default();
        assert_eq!(
            longest_orf(&dna("GGGG"), &config).unwrap(),
            "No ORFs detected in any frame."
        );
        assert!(matches!(
            longest_orf(&dna("AT"), &config),
            Err(AnalysisError::SequenceTooShort { minimum: 3, .. })
        ));
    }

    #[test]
    fn test_codon_usage_table() {
        let report = codon_usage_table(&dna("ATGATGTAA"));
        assert!(report.starts_with("Codon Usage Analysis:\n\nAUG (Met): 2\nUAA (Stop): 1\n\n"));
    }

    #[test]
    fn test_digestion() {
        let digest = Digest {
            cut_sites: vec![12, 52],
            fragments: vec![12, 40, 8],
        };
        assert_eq!(
            digestion(Some(&digest)),
            "Cut Sites Found: 2\nFragment Sizes (bp): 12 | 40 | 8"
        );
        assert_eq!(digestion(None), "No restriction sites found.");
    }

    #[test]
    fn test_gc_bands() {
        let config = AnalysisConfig::default();
        assert_eq!(GcBand::classify(39.99, &config), GcBand::Low);
        assert_eq!(GcBand::classify(40.0, &config), GcBand::Moderate);
        assert_eq!(GcBand::classify(60.0, &config), GcBand::Moderate);
        assert_eq!(GcBand::classify(60.01, &config), GcBand::High);
    }

    #[test]
    fn test_full_analysis() {
        let seq = dna("ATGAAATAAGGGATGCCCTAGAAA");
        let analysis = FullAnalysis::new(&seq, &AnalysisConfig::default());
        assert_eq!(analysis.length, 24);
        assert_eq!(analysis.gc_band, GcBand::Low);
        assert_eq!(analysis.orfs.len(), 2);

        let text = analysis.to_string();
        assert!(text.contains("Sequence Length: 24 bp\n\nGC Content: 37.50%\n"));
        assert!(text.contains("Interpretation: Low GC content; may reduce thermal stability."));
        assert!(text.contains("ORF Analysis:\n  ORF 1: Length 9 bp\n  ORF 2: Length 9 bp\n"));
        assert!(text.contains("Predicted Protein (from first ORF):\nMet-Lys\n"));
    }

    #[test]
    fn test_full_analysis_bands_the_printed_gc() {
        let config = AnalysisConfig::default();

        let seq = dna(&format!("{}{}", "G".repeat(9_999), "A".repeat(15_001)));
        let analysis = FullAnalysis::new(&seq, &config);
        assert!(analysis.gc_percent < 40.0);
        assert_eq!(analysis.gc_band, GcBand::Moderate);
        let text = analysis.to_string();
        assert!(text.contains("GC Content: 40.00%\nInterpretation: Moderate GC content"));

        let seq = dna(&format!("{}{}", "G".repeat(15_001), "A".repeat(9_999)));
        let analysis = FullAnalysis::new(&seq, &config);
        assert!(analysis.gc_percent > 60.0);
        assert_eq!(analysis.gc_band, GcBand::Moderate);
        assert!(analysis.to_string().contains("GC Content: 60.00%\n"));
    }

    #[test]
    fn test_full_analysis_without_orfs() {
        let seq = dna("GGGCCCGGGC");
        let analysis = FullAnalysis::new(&seq, &AnalysisConfig::default());
        assert_eq!(analysis.gc_band, GcBand::High);
        assert_eq!(analysis.first_orf_protein, None);
        assert!(analysis
            .to_string()
            .ends_with("ORF Analysis: No valid open reading frames detected."));
    }
}
