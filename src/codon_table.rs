//! The standard genetic code, keyed by RNA codon.

use std::fmt;

use lazy_static::lazy_static;

use crate::nucleotide::{Codon, CodonIdx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    pub const ALL: [Self; 20] = [
        Self::Ala,
        Self::Arg,
        Self::Asn,
        Self::Asp,
        Self::Cys,
        Self::Gln,
        Self::Glu,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Leu,
        Self::Lys,
        Self::Met,
        Self::Phe,
        Self::Pro,
        Self::Ser,
        Self::Thr,
        Self::Trp,
        Self::Tyr,
        Self::Val,
    ];

    pub fn three_letter(self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
        }
    }

    /// Case-insensitive lookup of a three-letter code.
    pub fn from_three_letter(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|aa| aa.three_letter().eq_ignore_ascii_case(code))
    }
}

/// What a codon decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
pub enum Residue {
    Amino(AminoAcid),
    Stop,
    /// Input that is not an RNA triplet.
    Unknown,
}

impl Residue {
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amino(aa) => f.write_str(aa.three_letter()),
            Self::Stop => f.write_str("Stop"),
            Self::Unknown => f.write_str("?"),
        }
    }
}

// via https://en.wikipedia.org/wiki/DNA_and_RNA_codon_tables
const STANDARD_CODE: &str = "
UUU Phe  UUC Phe  UUA Leu  UUG Leu
UCU Ser  UCC Ser  UCA Ser  UCG Ser
UAU Tyr  UAC Tyr  UAA Stop UAG Stop
UGU Cys  UGC Cys  UGA Stop UGG Trp
CUU Leu  CUC Leu  CUA Leu  CUG Leu
CCU Pro  CCC Pro  CCA Pro  CCG Pro
CAU His  CAC His  CAA Gln  CAG Gln
CGU Arg  CGC Arg  CGA Arg  CGG Arg
AUU Ile  AUC Ile  AUA Ile  AUG Met
ACU Thr  ACC Thr  ACA Thr  ACG Thr
AAU Asn  AAC Asn  AAA Lys  AAG Lys
AGU Ser  AGC Ser  AGA Arg  AGG Arg
GUU Val  GUC Val  GUA Val  GUG Val
GCU Ala  GCC Ala  GCA Ala  GCG Ala
GAU Asp  GAC Asp  GAA Glu  GAG Glu
GGU Gly  GGC Gly  GGA Gly  GGG Gly
";

lazy_static! {
    static ref STANDARD: CodonTable = CodonTable::from_listing(STANDARD_CODE);
}

/// A total mapping from the 64 codons to a [`Residue`].
#[derive(Debug, Clone)]
pub struct CodonTable {
    residues: [Residue; CodonIdx::COUNT],
}

impl CodonTable {
    /// The standard code, built once per process.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Parses whitespace-separated `CODON SYMBOL` pairs. Codons missing from the
    /// listing stay [`Residue::Unknown`].
    fn from_listing(listing: &str) -> Self {
        let mut residues = [Residue::Unknown; CodonIdx::COUNT];
        let mut tokens = listing.split_whitespace();

        while let (Some(codon), Some(symbol)) = (tokens.next(), tokens.next()) {
            let residue = if symbol.eq_ignore_ascii_case("stop") {
                Residue::Stop
            } else {
                match AminoAcid::from_three_letter(symbol) {
                    Some(aa) => Residue::Amino(aa),
                    None => continue,
                }
            };
            if let Some(idx) = CodonIdx::from_rna(codon.as_bytes()) {
                residues[usize::from(idx)] = residue;
            }
        }

        Self { residues }
    }

    pub fn residue(&self, codon: Codon) -> Residue {
        self.residues[usize::from(CodonIdx::from(codon))]
    }

    /// Looks up an RNA triplet such as `"AUG"` (case-insensitive). Anything that
    /// is not exactly three of `A`, `U`, `G`, `C` decodes to [`Residue::Unknown`].
    pub fn lookup_rna(&self, triplet: &str) -> Residue {
        match CodonIdx::from_rna(triplet.as_bytes()) {
            Some(idx) => self.residues[usize::from(idx)],
            None => Residue::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        let table = CodonTable::standard();
        for codon in Codon::all_codons() {
            assert_ne!(table.residue(codon), Residue::Unknown, "{codon} missing");
        }
    }

    #[test]
    fn test_exactly_three_stops() {
        let table = CodonTable::standard();
        let stops: Vec<_> = Codon::all_codons()
            .filter(|&c| table.residue(c).is_stop())
            .map(|c| c.to_rna_string())
            .collect();
        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);
        assert!(Codon::STOPS.iter().all(|&c| table.residue(c).is_stop()));
    }

    #[test]
    fn test_every_amino_acid_is_encoded() {
        let table = CodonTable::standard();
        for aa in AminoAcid::ALL {
            assert!(
                Codon::all_codons().any(|c| table.residue(c) == Residue::Amino(aa)),
                "{aa:?} has no codon"
            );
        }
    }

    #[test]
    fn test_lookup_rna() {
        let table = CodonTable::standard();
        assert_eq!(table.lookup_rna("AUG"), Residue::Amino(AminoAcid::Met));
        assert_eq!(table.lookup_rna("aug"), Residue::Amino(AminoAcid::Met));
        assert_eq!(table.lookup_rna("UGG"), Residue::Amino(AminoAcid::Trp));
        assert_eq!(table.lookup_rna("UAG"), Residue::Stop);
        assert_eq!(table.lookup_rna("ATG"), Residue::Unknown);
        assert_eq!(table.lookup_rna("AU"), Residue::Unknown);
        assert_eq!(table.lookup_rna(""), Residue::Unknown);
    }

    #[test]
    fn test_residue_display() {
        assert_eq!(Residue::Amino(AminoAcid::Lys).to_string(), "Lys");
        assert_eq!(Residue::Stop.to_string(), "Stop");
        assert_eq!(Residue::Unknown.to_string(), "?");
    }
}
