//! Raw text in, report text out.

use log::debug;

use crate::report::{self, FullAnalysis};
use crate::sanitize::parse_strict;
use crate::{digest, primer, AnalysisConfig, AnalysisError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Stats,
    GcContent,
    ReverseComplement,
    Transcribe,
    Translate,
    SixFrames,
    Orfs,
    LongestOrf,
    CodonUsage,
    Primers,
    Digest { site: String },
    /// `position` is 1-based.
    Mutate { position: usize, base: char },
    Full,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::GcContent => "gc",
            Self::ReverseComplement => "revcomp",
            Self::Transcribe => "transcribe",
            Self::Translate => "translate",
            Self::SixFrames => "frames",
            Self::Orfs => "orfs",
            Self::LongestOrf => "longest-orf",
            Self::CodonUsage => "codon-usage",
            Self::Primers => "primers",
            Self::Digest { .. } => "digest",
            Self::Mutate { .. } => "mutate",
            Self::Full => "report",
        }
    }
}

/// Validates and cleans `raw`, then renders the report for `operation`.
///
/// Input containing anything but bases and a leading FASTA header line, whitespace
/// included, is rejected rather than silently cleaned.
pub fn run(
    raw: &str,
    operation: &Operation,
    config: &AnalysisConfig,
) -> Result<String, AnalysisError> {
    let seq = parse_strict(raw)?;
    debug!("running {} on {} bp", operation.name(), seq.len());

    let text = match operation {
        Operation::Stats => report::stats(&seq),
        Operation::GcContent => report::gc_content(&seq),
        Operation::ReverseComplement => report::reverse_complement(&seq),
        Operation::Transcribe => report::transcription(&seq),
        Operation::Translate => report::translation(&seq),
        Operation::SixFrames => report::six_frames(&seq),
        Operation::Orfs => report::orf_list(&seq),
        Operation::LongestOrf => report::longest_orf(&seq, config)?,
        Operation::CodonUsage => report::codon_usage_table(&seq),
        Operation::Primers => report::primers(&primer::design(&seq, config)?),
        Operation::Digest { site } => report::digestion(digest::digest(&seq, site)?.as_ref()),
        Operation::Mutate { position, base } => {
            let (mutated, mutation) = seq.mutate(*position, *base)?;
            report::mutation(&seq, &mutated, &mutation)
        }
        Operation::Full => FullAnalysis::new(&seq, config).to_string(),
    };
    Ok(text)
}
