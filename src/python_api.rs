#![allow(clippy::borrow_deref_ref)]

use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{
    analysis::{self, Operation},
    errors::AnalysisError,
    orf, sanitize, AnalysisConfig,
};

impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn operation_from_name(name: &str) -> PyResult<Operation> {
    let operation = match name {
        "stats" => Operation::Stats,
        "gc" => Operation::GcContent,
        "revcomp" => Operation::ReverseComplement,
        "transcribe" => Operation::Transcribe,
        "translate" => Operation::Translate,
        "frames" => Operation::SixFrames,
        "orfs" => Operation::Orfs,
        "longest-orf" => Operation::LongestOrf,
        "codon-usage" => Operation::CodonUsage,
        "primers" => Operation::Primers,
        "report" => Operation::Full,
        _ => {
            return Err(PyValueError::new_err(format!(
                "unknown operation {name:?}"
            )))
        }
    };
    Ok(operation)
}

#[pyfunction]
fn _clean(raw: &str) -> String {
    sanitize::clean(raw).into()
}

#[pyfunction]
fn _reverse_complement(raw: &str) -> PyResult<String> {
    Ok(sanitize::parse_strict(raw)?.reverse_complement().into())
}

#[pyfunction]
fn _translate(raw: &str) -> PyResult<String> {
    Ok(sanitize::parse_strict(raw)?.translate().to_string())
}

/// Codon counts of every ORF in six-frame scan order, for plotting.
#[pyfunction]
fn _orf_length_profile(raw: &str) -> PyResult<Vec<usize>> {
    Ok(orf::length_profile(&sanitize::parse_strict(raw)?))
}

/// Longest ORF of one forward frame as `(start, end)`, 0-based and end-exclusive.
#[pyfunction]
fn _scan_frame(raw: &str, offset: usize) -> PyResult<Option<(usize, usize)>> {
    let seq = sanitize::parse_strict(raw)?;
    Ok(orf::scan_frame_at(&seq, offset)?.map(|orf| (orf.start, orf.end)))
}

#[pyfunction]
fn _run(raw: &str, operation: &str) -> PyResult<String> {
    let operation = operation_from_name(operation)?;
    Ok(analysis::run(raw, &operation, &AnalysisConfig::default())?)
}

#[pyfunction]
fn _digest(raw: &str, site: &str) -> PyResult<String> {
    let operation = Operation::Digest {
        site: site.to_string(),
    };
    Ok(analysis::run(raw, &operation, &AnalysisConfig::default())?)
}

#[pyfunction]
fn _mutate(raw: &str, position: usize, base: char) -> PyResult<String> {
    let operation = Operation::Mutate { position, base };
    Ok(analysis::run(raw, &operation, &AnalysisConfig::default())?)
}

#[pymodule]
fn dnalab(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(_clean, m)?)?;
    m.add_function(wrap_pyfunction!(_reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(_translate, m)?)?;
    m.add_function(wrap_pyfunction!(_orf_length_profile, m)?)?;
    m.add_function(wrap_pyfunction!(_scan_frame, m)?)?;
    m.add_function(wrap_pyfunction!(_run, m)?)?;
    m.add_function(wrap_pyfunction!(_digest, m)?)?;
    m.add_function(wrap_pyfunction!(_mutate, m)?)?;

    Ok(())
}
