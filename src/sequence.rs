use core::fmt;
use std::fmt::Write;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::codon_table::{CodonTable, Residue};
use crate::errors::{AnalysisError, TranslationError};
use crate::iter::NucleotideIter;
use crate::nucleotide::{Codon, Nucleotide};

/// A reading frame offset on one strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Frame {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Frame {
    pub const ALL: [Self; 3] = [Self::Zero, Self::One, Self::Two];

    pub fn offset(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Frame {
    type Error = AnalysisError;

    fn try_from(offset: usize) -> Result<Self, Self::Error> {
        match offset {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(AnalysisError::InvalidFrame(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    /// The reverse complement of the input.
    Reverse,
}

impl Strand {
    pub fn sign(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("Forward"),
            Self::Reverse => f.write_str("Reverse"),
        }
    }
}

/// Translated residues, ending before the first stop codon.
#[derive(Debug, Clone, Default, PartialEq, Eq, std::hash::Hash)]
pub struct ProteinSequence {
    residues: Vec<Residue>,
}

impl ProteinSequence {
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Three-letter codes joined by `-`, e.g. `Met-Lys`.
impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, residue) in self.residues.iter().enumerate() {
            if i > 0 {
                f.write_char('-')?;
            }
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

impl FromIterator<Codon> for ProteinSequence {
    fn from_iter<T: IntoIterator<Item = Codon>>(codons: T) -> Self {
        let table = CodonTable::standard();
        let residues = codons
            .into_iter()
            .map(|c| table.residue(c))
            .take_while(|r| !r.is_stop())
            .collect();
        Self { residues }
    }
}

/// A DNA sequence over `A`, `T`, `G`, `C`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct DnaSequence {
    dna: Vec<Nucleotide>,
}

impl DnaSequence {
    /// Construct a new DnaSequence from a Vec of nucleotides
    pub fn new(dna: Vec<Nucleotide>) -> Self {
        Self { dna }
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.dna
    }

    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Nucleotide> + ExactSizeIterator + '_ {
        self.dna.iter().copied()
    }

    /// The subsequence `range`, as an owned sequence.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Self {
        Self::new(self.dna[range].to_vec())
    }

    pub fn complement(&self) -> Self {
        Self::new(self.dna.iter().complement().collect())
    }

    /// Takes the reverse complement of a DNA sequence.
    pub fn reverse_complement(&self) -> Self {
        Self::new(self.dna.iter().reverse_complement().collect())
    }

    /// The RNA transcript: the same bases with `T` written as `U`.
    pub fn transcribe(&self) -> String {
        self.dna.iter().map(|n| n.to_rna_ascii() as char).collect()
    }

    /// Codons of `frame`, excluding a trailing partial codon.
    pub fn codons(
        &self,
        frame: Frame,
    ) -> impl DoubleEndedIterator<Item = Codon> + ExactSizeIterator + '_ {
        self.dna
            .get(frame.offset()..)
            .unwrap_or_default()
            .iter()
            .codons()
    }

    /// Translate from offset 0 up to, not including, the first stop codon.
    pub fn translate(&self) -> ProteinSequence {
        self.translate_frame(Frame::Zero)
    }

    /// Translate `frame` up to, not including, its first stop codon.
    pub fn translate_frame(&self, frame: Frame) -> ProteinSequence {
        self.codons(frame).collect()
    }

    /// Translate this DNA sequence in six frames: forward frames 0, 1, 2 followed
    /// by frames 0, 1, 2 of the reverse complement.
    ///
    /// Unlike the reading-frame iterators, frames too short to hold a codon are kept
    /// as empty proteins so each index always names the same frame.
    pub fn translate_six_frames(&self) -> SmallVec<[(Strand, Frame, ProteinSequence); 6]> {
        let reverse = self.reverse_complement();
        let mut result = SmallVec::with_capacity(6);

        for (strand, dna) in [(Strand::Forward, self), (Strand::Reverse, &reverse)] {
            for frame in Frame::ALL {
                result.push((strand, frame, dna.translate_frame(frame)));
            }
        }

        result
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &n in &self.dna {
            f.write_char(n.into())?;
        }
        Ok(())
    }
}

impl From<DnaSequence> for String {
    fn from(seq: DnaSequence) -> Self {
        seq.to_string()
    }
}

impl std::ops::Index<usize> for DnaSequence {
    type Output = Nucleotide;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dna[index]
    }
}

impl FromIterator<Nucleotide> for DnaSequence {
    fn from_iter<T: IntoIterator<Item = Nucleotide>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Strict parse: every byte other than space or tab must be a base.
impl TryFrom<&[u8]> for DnaSequence {
    type Error = TranslationError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(value.len());

        for &b in value {
            if b != b' ' && b != b'\t' {
                vec.push(Nucleotide::try_from(b)?);
            }
        }
        Ok(Self::new(vec))
    }
}

impl FromStr for DnaSequence {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}
