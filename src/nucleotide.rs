use std::fmt::{self, Write};

use crate::errors::TranslationError;

/// A DNA nucleotide.
///
/// Sorts in ATCG order, not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

const fn ascii_to_nucleotide_table() -> [Option<Nucleotide>; 256] {
    // 256 entries so any u8-cast-to-usize index is in bounds without a check
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', Nucleotide::A);
    insert!(b't', Nucleotide::T);
    insert!(b'c', Nucleotide::C);
    insert!(b'g', Nucleotide::G);

    pack_table
}

const ASCII_TO_NUCLEOTIDE: [Option<Nucleotide>; 256] = ascii_to_nucleotide_table();

impl Nucleotide {
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::C, Self::G];

    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }

    /// The base as it reads in a transcript: `T` becomes `U`.
    pub fn to_rna_ascii(self) -> u8 {
        match self {
            Self::T => b'U',
            other => other.to_ascii(),
        }
    }

    /// Parses an RNA base (`U` in place of `T`), case-insensitively.
    pub fn from_rna_ascii(u: u8) -> Option<Self> {
        match u {
            b'U' | b'u' => Some(Self::T),
            b'T' | b't' => None,
            _ => ASCII_TO_NUCLEOTIDE[u as usize],
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = TranslationError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(TranslationError::NonAsciiByte(u));
        }

        ASCII_TO_NUCLEOTIDE[u as usize].ok_or(TranslationError::BadNucleotide(u.into()))
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = TranslationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() {
            Self::try_from(c as u8)
        } else {
            Err(TranslationError::BadNucleotide(c))
        }
    }
}

impl From<Nucleotide> for u8 {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii()
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii() as char
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct Codon(pub [Nucleotide; 3]);

impl Codon {
    pub const START: Self = Self([Nucleotide::A, Nucleotide::T, Nucleotide::G]);
    pub const STOPS: [Self; 3] = [
        Self([Nucleotide::T, Nucleotide::A, Nucleotide::A]),
        Self([Nucleotide::T, Nucleotide::A, Nucleotide::G]),
        Self([Nucleotide::T, Nucleotide::G, Nucleotide::A]),
    ];

    pub fn is_start(&self) -> bool {
        *self == Self::START
    }

    pub fn is_stop(&self) -> bool {
        Self::STOPS.contains(self)
    }

    /// Returns an iterator of all 64 codons, in index order.
    pub fn all_codons() -> impl Iterator<Item = Self> {
        const N: [Nucleotide; 4] = Nucleotide::ALL;
        N.iter().flat_map(move |&a| {
            N.iter()
                .flat_map(move |&b| N.iter().map(move |&c| Codon([a, b, c])))
        })
    }

    /// The transcribed (U for T) spelling of this codon.
    pub fn to_rna_string(&self) -> String {
        self.0.iter().map(|n| n.to_rna_ascii() as char).collect()
    }
}

impl From<[Nucleotide; 3]> for Codon {
    fn from(value: [Nucleotide; 3]) -> Self {
        Self(value)
    }
}

impl TryFrom<[u8; 3]> for Codon {
    type Error = TranslationError;

    fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
        Ok(Self([
            Nucleotide::try_from(value[0])?,
            Nucleotide::try_from(value[1])?,
            Nucleotide::try_from(value[2])?,
        ]))
    }
}

impl From<Codon> for [Nucleotide; 3] {
    fn from(c: Codon) -> Self {
        c.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct CodonIdx(usize);

impl CodonIdx {
    pub const COUNT: usize = 64;

    /// Index of an RNA triplet such as `b"AUG"`; `None` if it is not exactly three RNA bases.
    pub fn from_rna(triplet: &[u8]) -> Option<Self> {
        match triplet {
            &[a, b, c] => Some(Self::from([
                Nucleotide::from_rna_ascii(a)?,
                Nucleotide::from_rna_ascii(b)?,
                Nucleotide::from_rna_ascii(c)?,
            ])),
            _ => None,
        }
    }
}

impl From<[Nucleotide; 3]> for CodonIdx {
    fn from(value: [Nucleotide; 3]) -> Self {
        Self((value[0] as usize) << 4 | (value[1] as usize) << 2 | (value[2] as usize))
    }
}

impl From<Codon> for CodonIdx {
    fn from(c: Codon) -> Self {
        c.0.into()
    }
}

impl From<CodonIdx> for usize {
    fn from(c: CodonIdx) -> Self {
        c.0
    }
}
