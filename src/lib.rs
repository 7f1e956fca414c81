mod errors;
pub use errors::*;

mod nucleotide;
pub use nucleotide::{Codon, CodonIdx, Nucleotide};

mod iter;
pub use iter::*;

pub mod codon_table;
pub use codon_table::{AminoAcid, CodonTable, Residue};

mod sequence;
pub use sequence::*;

mod config;
pub use config::AnalysisConfig;

pub mod analysis;
pub mod composition;
pub mod digest;
mod mutation;
pub use mutation::Mutation;
pub mod orf;
pub use orf::Orf;
pub mod primer;
pub mod report;
pub mod sanitize;

#[cfg(feature = "python-support")]
mod python_api;

#[cfg(feature = "python-support")]
pub use python_api::*;

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;

#[cfg(feature = "serde")]
mod serde_utils;
