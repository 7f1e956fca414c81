use crate::nucleotide::{Codon, CodonIdx};
use crate::{DnaSequence, Frame, Nucleotide};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl BaseCounts {
    pub fn of(dna: &[Nucleotide]) -> Self {
        let mut counts = Self::default();
        for &n in dna {
            match n {
                Nucleotide::A => counts.a += 1,
                Nucleotide::T => counts.t += 1,
                Nucleotide::G => counts.g += 1,
                Nucleotide::C => counts.c += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    pub fn at(&self) -> usize {
        self.a + self.t
    }

    /// Percentage of `G` and `C`; 0 for an empty sequence.
    pub fn gc_percent(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.gc() as f64 / total as f64,
        }
    }
}

pub fn base_counts(seq: &DnaSequence) -> BaseCounts {
    BaseCounts::of(seq.as_slice())
}

pub fn gc_percent(seq: &DnaSequence) -> f64 {
    base_counts(seq).gc_percent()
}

/// Codon occurrence counts over frame 0, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonUsage {
    counts: Vec<(Codon, usize)>,
    slots: [Option<usize>; CodonIdx::COUNT],
}

impl CodonUsage {
    pub fn of(seq: &DnaSequence) -> Self {
        let mut usage = Self {
            counts: Vec::new(),
            slots: [None; CodonIdx::COUNT],
        };
        for codon in seq.codons(Frame::Zero) {
            usage.record(codon);
        }
        usage
    }

    fn record(&mut self, codon: Codon) {
        let idx = usize::from(CodonIdx::from(codon));
        match self.slots[idx] {
            Some(slot) => self.counts[slot].1 += 1,
            None => {
                self.slots[idx] = Some(self.counts.len());
                self.counts.push((codon, 1));
            }
        }
    }

    pub fn count(&self, codon: Codon) -> usize {
        self.slots[usize::from(CodonIdx::from(codon))].map_or(0, |slot| self.counts[slot].1)
    }

    /// Distinct codons seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Complete codons counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Codon, usize)> + '_ {
        self.counts.iter().copied()
    }
}

pub fn codon_usage(seq: &DnaSequence) -> CodonUsage {
    CodonUsage::of(seq)
}
