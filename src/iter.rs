// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Codon, Nucleotide};

/// Helper trait to support iters regardless of whether their items are by-ref or by-value
pub trait ToNucleotide: Copy {
    fn to_nucleotide(self) -> Nucleotide;
}

impl ToNucleotide for Nucleotide {
    fn to_nucleotide(self) -> Nucleotide {
        self
    }
}

impl ToNucleotide for &Nucleotide {
    fn to_nucleotide(self) -> Nucleotide {
        *self
    }
}

/// Extension trait for nucleotide iterators
pub trait NucleotideIter: Iterator + Sized {
    /// Returns iterator of codons for the first reading frame of this nucleotide sequence.
    /// If the number of nucleotides isn't divisible by 3, excess nucleotides are silently
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnalab::{Codon, Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// let dna = [C, G, A, T, C, G, A, T];
    ///
    /// let expected_codons: [Codon; 2] = [
    ///     [C, G, A].into(),
    ///     [T, C, G].into(),
    /// ];
    /// assert!(dna.iter().codons().eq(expected_codons));
    /// ```
    fn codons(self) -> Codons<Self>;

    /// Returns iterator of complementary nucleotides.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnalab::{Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// let dna = [C, G, A, T];
    ///
    /// assert!(dna.iter().complement().eq([G, C, T, A]));
    /// ```
    fn complement(self) -> Complement<Self>;

    /// Returns iterator of reverse complement of contained nucleotides.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnalab::{Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// let dna = [C, G, A, T];
    ///
    /// assert!(dna.iter().reverse_complement().eq([A, T, C, G]));
    /// ```
    fn reverse_complement(self) -> Complement<std::iter::Rev<Self>>
    where
        Self: DoubleEndedIterator;

    /// Trims excess nucleotides off iterator end so it aligns with a codon boundary.
    fn trim_to_codon(&mut self)
    where
        Self: DoubleEndedIterator + ExactSizeIterator;
}

impl<N, I> NucleotideIter for I
where
    N: ToNucleotide,
    I: Iterator<Item = N>,
{
    fn codons(self) -> Codons<Self> {
        Codons(self)
    }

    fn complement(self) -> Complement<Self> {
        Complement(self)
    }

    fn reverse_complement(self) -> Complement<std::iter::Rev<Self>>
    where
        Self: DoubleEndedIterator,
    {
        self.rev().complement()
    }

    fn trim_to_codon(&mut self)
    where
        Self: DoubleEndedIterator + ExactSizeIterator,
    {
        for _ in 0..(self.len() % 3) {
            self.next_back();
        }
    }
}

/// Adapter yielding codons of the contained iterator.
///
/// This `struct` is created by the [`codons`](NucleotideIter::codons)
/// method on [`NucleotideIter`]. See its documentation for more.
#[derive(Clone, Debug)]
pub struct Codons<I>(I);

impl<N, I> Iterator for Codons<I>
where
    N: ToNucleotide,
    I: Iterator<Item = N>,
{
    type Item = Codon;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.0.next(), self.0.next(), self.0.next()) {
            (Some(n1), Some(n2), Some(n3)) => {
                Some([n1, n2, n3].map(|n| n.to_nucleotide()).into())
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.0.size_hint();
        (min / 3, max.map(|m| m / 3))
    }
}

impl<N, I> DoubleEndedIterator for Codons<I>
where
    N: ToNucleotide,
    I: DoubleEndedIterator<Item = N> + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.trim_to_codon();
        match (self.0.next_back(), self.0.next_back(), self.0.next_back()) {
            (Some(n3), Some(n2), Some(n1)) => {
                Some([n1, n2, n3].map(|n| n.to_nucleotide()).into())
            }
            _ => None,
        }
    }
}

impl<I> ExactSizeIterator for Codons<I>
where
    Self: Iterator,
    I: ExactSizeIterator,
{
    fn len(&self) -> usize {
        self.0.len() / 3
    }
}

/// Adapter yielding complementary nucleotide of the contained iterator.
///
/// This `struct` is created by the [`complement`](NucleotideIter::complement)
/// method on [`NucleotideIter`]. See its documentation for more.
#[derive(Clone, Debug)]
pub struct Complement<I>(I);

impl<N, I> Iterator for Complement<I>
where
    N: ToNucleotide,
    I: Iterator<Item = N>,
{
    type Item = Nucleotide;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|n| n.to_nucleotide().complement())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<N, I> DoubleEndedIterator for Complement<I>
where
    N: ToNucleotide,
    I: DoubleEndedIterator<Item = N>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|n| n.to_nucleotide().complement())
    }
}

impl<I> ExactSizeIterator for Complement<I>
where
    Self: Iterator,
    I: ExactSizeIterator,
{
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reverse_codons() {
        use Nucleotide::*;
        let dna = [A, A, T, T, C, C, G, G];
        let rev_codons: Vec<_> = dna.iter().codons().rev().collect();
        let expected: [Codon; 2] = [[T, C, C].into(), [A, A, T].into()];
        assert_eq!(rev_codons, expected);
    }

    #[test]
    fn test_enumerated_codons_from_the_back() {
        use Nucleotide::*;
        let dna = [A, T, G, A, A, A, T, A, A, G];
        let positions: Vec<_> = dna
            .iter()
            .codons()
            .enumerate()
            .rev()
            .map(|(k, codon)| (k, codon.to_string()))
            .collect();
        assert_eq!(
            positions,
            vec![
                (2, "TAA".to_string()),
                (1, "AAA".to_string()),
                (0, "ATG".to_string())
            ]
        );
    }
}
