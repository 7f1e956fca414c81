/// Tunable thresholds for the analyses.
///
/// # Examples
///
/// ```rust
/// use dnalab::AnalysisConfig;
///
/// let config = AnalysisConfig {
///     primer_length: 20,
///     ..Default::default()
/// };
/// assert_eq!(config.min_primer_template, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Longest primer to design; shorter templates give primers of their own length.
    pub primer_length: usize,
    /// Shortest template accepted by primer design.
    pub min_primer_template: usize,
    /// Shortest sequence accepted by the longest-ORF report.
    pub min_orf_template: usize,
    /// GC% below this is reported as low.
    pub gc_low_threshold: f64,
    /// GC% above this is reported as high.
    pub gc_high_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            primer_length: 18,
            min_primer_template: 10,
            min_orf_template: 3,
            gc_low_threshold: 40.0,
            gc_high_threshold: 60.0,
        }
    }
}
