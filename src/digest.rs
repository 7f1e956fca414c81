//! Restriction digestion at exact recognition-site matches.

use log::debug;

use crate::sanitize::retain_bases;
use crate::{AnalysisError, DnaSequence};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest {
    /// Start offset of every match, overlapping matches included, ascending.
    pub cut_sites: Vec<usize>,
    /// `cut_sites.len() + 1` lengths summing to the sequence length. The first is
    /// 0 when a site starts the sequence.
    pub fragments: Vec<usize>,
}

/// Cuts `seq` at the start of every occurrence of `site`.
///
/// `site` is sanitised like sequence input (upper-cased, non-base characters
/// dropped). Returns `Ok(None)` when it never occurs.
pub fn digest(seq: &DnaSequence, site: &str) -> Result<Option<Digest>, AnalysisError> {
    let site = retain_bases(site);
    if site.is_empty() {
        return Err(AnalysisError::EmptyRecognitionSite);
    }

    let cut_sites: Vec<usize> = seq
        .as_slice()
        .windows(site.len())
        .enumerate()
        .filter(|(_, window)| *window == site.as_slice())
        .map(|(i, _)| i)
        .collect();

    debug!("{} cut sites for {site} in {} bp", cut_sites.len(), seq.len());

    if cut_sites.is_empty() {
        return Ok(None);
    }

    let mut fragments = Vec::with_capacity(cut_sites.len() + 1);
    let mut previous = 0;
    for &cut in &cut_sites {
        fragments.push(cut - previous);
        previous = cut;
    }
    fragments.push(seq.len() - previous);

    Ok(Some(Digest {
        cut_sites,
        fragments,
    }))
}
