//! Open reading frame detection.
//!
//! An ORF runs from an `ATG` to the nearest in-frame stop codon (`TAA`, `TAG`, `TGA`),
//! stop included. Every in-frame `ATG` that has a stop after it starts its own ORF, so
//! nested starts sharing one stop are all reported.

use std::ops::Range;

use log::debug;

use crate::{AnalysisError, DnaSequence, Frame, Strand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    /// 0-based offset of the `A` of the start codon, in the coordinates of `strand`.
    pub start: usize,
    /// Exclusive offset just past the stop codon.
    pub end: usize,
    pub frame: Frame,
    /// For [`Strand::Reverse`], `start` and `end` index the reverse complement.
    pub strand: Strand,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in codons, stop codon included.
    pub fn codon_count(&self) -> usize {
        self.len() / 3
    }

    /// The span this ORF covers on the forward strand of a `seq_len` long sequence.
    pub fn forward_span(&self, seq_len: usize) -> Range<usize> {
        match self.strand {
            Strand::Forward => self.start..self.end,
            Strand::Reverse => seq_len - self.end..seq_len - self.start,
        }
    }

    /// The ORF's bases read 5' to 3' on its own strand, from the forward sequence `seq`.
    pub fn sequence(&self, seq: &DnaSequence) -> DnaSequence {
        let span = seq.slice(self.forward_span(seq.len()));
        match self.strand {
            Strand::Forward => span,
            Strand::Reverse => span.reverse_complement(),
        }
    }
}

/// All ORFs of one frame of `strand_seq`, ordered by start.
///
/// `strand_seq` is the strand being read; `strand` only labels the results.
pub fn find_in_frame(strand_seq: &DnaSequence, frame: Frame, strand: Strand) -> Vec<Orf> {
    let offset = frame.offset();
    let mut orfs = Vec::new();

    // walk codons from the back, remembering where the nearest stop ends
    let mut next_stop_end = None;
    for (k, codon) in strand_seq.codons(frame).enumerate().rev() {
        let start = offset + 3 * k;
        if codon.is_stop() {
            next_stop_end = Some(start + 3);
        } else if codon.is_start() {
            if let Some(end) = next_stop_end {
                orfs.push(Orf {
                    start,
                    end,
                    frame,
                    strand,
                });
            }
        }
    }

    orfs.reverse();
    orfs
}

/// ORFs of the three forward frames, ordered by start.
pub fn find_forward(seq: &DnaSequence) -> Vec<Orf> {
    let mut orfs: Vec<Orf> = Frame::ALL
        .into_iter()
        .flat_map(|frame| find_in_frame(seq, frame, Strand::Forward))
        .collect();
    orfs.sort_by_key(|orf| orf.start);
    orfs
}

/// ORFs of all six frames in scan order: forward frames 0, 1, 2, then reverse
/// complement frames 0, 1, 2, each ordered by start.
pub fn find_all_frames(seq: &DnaSequence) -> Vec<Orf> {
    let reverse = seq.reverse_complement();
    let mut orfs = Vec::new();
    for (strand, strand_seq) in [(Strand::Forward, seq), (Strand::Reverse, &reverse)] {
        for frame in Frame::ALL {
            orfs.extend(find_in_frame(strand_seq, frame, strand));
        }
    }
    debug!("found {} ORFs in {} bp", orfs.len(), seq.len());
    orfs
}

/// The first ORF of maximal length.
///
/// `Iterator::max_by_key` would keep the *last* maximum.
fn first_longest(orfs: impl IntoIterator<Item = Orf>) -> Option<Orf> {
    orfs.into_iter().fold(None, |best, orf| match best {
        Some(best) if best.len() >= orf.len() => Some(best),
        _ => Some(orf),
    })
}

/// Longest ORF of one forward frame; the earliest wins ties.
pub fn scan_frame(seq: &DnaSequence, frame: Frame) -> Option<Orf> {
    first_longest(find_in_frame(seq, frame, Strand::Forward))
}

/// [`scan_frame`] with the frame given as a raw offset, which must be 0, 1 or 2.
pub fn scan_frame_at(seq: &DnaSequence, offset: usize) -> Result<Option<Orf>, AnalysisError> {
    Ok(scan_frame(seq, Frame::try_from(offset)?))
}

/// Longest ORF over six frames; ties go to the first in scan order (forward 0, 1, 2,
/// then reverse 0, 1, 2) and, within a frame, to the earliest start.
pub fn scan_all_frames(seq: &DnaSequence) -> Option<Orf> {
    first_longest(find_all_frames(seq))
}

/// Amino-acid length (codons, stop included) of every ORF, in six-frame scan order.
pub fn length_profile(seq: &DnaSequence) -> Vec<usize> {
    find_all_frames(seq)
        .iter()
        .map(Orf::codon_count)
        .collect()
}
