//! # dnalab - DNA sequence analysis from the command line
//!
//! ```bash
//! # GC content of a FASTA file
//! dnalab gc -i gene.fasta
//!
//! # Full report from stdin into a file
//! cat gene.fasta | dnalab report -o report.txt
//!
//! # EcoRI digest
//! dnalab digest --site GAATTC -i plasmid.fasta
//!
//! # Substitute position 4 with G
//! dnalab mutate --position 4 --base G -i gene.fasta
//! ```
//!
//! Input may carry one FASTA header line and one trailing newline. A sequence
//! with anything else but `A`, `T`, `G`, `C` (spaces and inner line breaks
//! included) is rejected with a single `Error:` line and exit status 1.
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use dnalab::analysis::{self, Operation};
use dnalab::AnalysisConfig;
use log::{debug, error, info};

fn cli() -> Command {
    Command::new("dnalab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DNA sequence analysis")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .global(true)
                .help("Input sequence, raw or FASTA (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .global(true)
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("primer-length")
                .long("primer-length")
                .value_name("BASES")
                .value_parser(value_parser!(usize))
                .global(true)
                .help("Longest primer to design (default: 18)"),
        )
        .arg(
            Arg::new("gc-low")
                .long("gc-low")
                .value_name("PERCENT")
                .value_parser(value_parser!(f64))
                .global(true)
                .help("GC% below which content is reported as low (default: 40)"),
        )
        .arg(
            Arg::new("gc-high")
                .long("gc-high")
                .value_name("PERCENT")
                .value_parser(value_parser!(f64))
                .global(true)
                .help("GC% above which content is reported as high (default: 60)"),
        )
        .subcommand(Command::new("stats").about("Length and base composition"))
        .subcommand(Command::new("gc").about("GC content"))
        .subcommand(Command::new("revcomp").about("Reverse complement"))
        .subcommand(Command::new("transcribe").about("DNA to RNA transcription"))
        .subcommand(Command::new("translate").about("Translate frame 0 up to the first stop"))
        .subcommand(Command::new("frames").about("Translate all six reading frames"))
        .subcommand(Command::new("orfs").about("List ORFs of the three forward frames"))
        .subcommand(Command::new("longest-orf").about("Longest ORF over six frames"))
        .subcommand(Command::new("codon-usage").about("Codon counts of frame 0"))
        .subcommand(Command::new("primers").about("Design a forward/reverse primer pair"))
        .subcommand(
            Command::new("digest")
                .about("Cut at every occurrence of a recognition site")
                .arg(
                    Arg::new("site")
                        .short('s')
                        .long("site")
                        .value_name("SITE")
                        .required(true)
                        .help("Recognition site, e.g. GAATTC"),
                ),
        )
        .subcommand(
            Command::new("mutate")
                .about("Point substitution")
                .arg(
                    Arg::new("position")
                        .short('p')
                        .long("position")
                        .value_name("POS")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("1-based position to substitute"),
                )
                .arg(
                    Arg::new("base")
                        .short('b')
                        .long("base")
                        .value_name("BASE")
                        .value_parser(value_parser!(char))
                        .required(true)
                        .help("Replacement base: A, T, G or C"),
                ),
        )
        .subcommand(Command::new("report").about("Full analysis report"))
}

fn operation(name: &str, sub: &ArgMatches) -> Operation {
    match name {
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
        "digest" => Operation::Digest {
            site: sub.get_one::<String>("site").cloned().unwrap_or_default(),
        },
        "mutate" => Operation::Mutate {
            position: sub.get_one::<usize>("position").copied().unwrap_or_default(),
            base: sub.get_one::<char>("base").copied().unwrap_or_default(),
        },
        _ => Operation::Full,
    }
}

fn config(matches: &ArgMatches) -> AnalysisConfig {
    let defaults = AnalysisConfig::default();
    AnalysisConfig {
        primer_length: matches
            .get_one::<usize>("primer-length")
            .copied()
            .unwrap_or(defaults.primer_length),
        gc_low_threshold: matches
            .get_one::<f64>("gc-low")
            .copied()
            .unwrap_or(defaults.gc_low_threshold),
        gc_high_threshold: matches
            .get_one::<f64>("gc-high")
            .copied()
            .unwrap_or(defaults.gc_high_threshold),
        ..defaults
    }
}

/// Drops the line terminator a text file normally ends with.
fn trim_final_newline(raw: &mut String) {
    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
}

fn read_input(matches: &ArgMatches) -> io::Result<String> {
    let mut raw = String::new();
    match matches.get_one::<String>("input") {
        Some(path) => {
            File::open(path)?.read_to_string(&mut raw)?;
        }
        None => {
            io::stdin().read_to_string(&mut raw)?;
        }
    }
    trim_final_newline(&mut raw);
    Ok(raw)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let matches = cli().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        return Ok(ExitCode::FAILURE);
    };
    let operation = operation(name, sub);
    let config = config(sub);
    debug!("{config:?}");

    let raw = read_input(sub)?;
    info!("read {} bytes of input", raw.len());

    let mut writer: Box<dyn Write> = match sub.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let status = match analysis::run(&raw, &operation, &config) {
        Ok(report) => {
            writeln!(writer, "{report}")?;
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{} failed: {err}", operation.name());
            writeln!(writer, "Error: {err}")?;
            ExitCode::FAILURE
        }
    };
    writer.flush()?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_final_newline() {
        for (raw, expected) in [
            (">seq1\nATGC\n", ">seq1\nATGC"),
            ("ATGC\r\n", "ATGC"),
            ("ATGC", "ATGC"),
            ("ATGC\n\n", "ATGC\n"),
        ] {
            let mut raw = raw.to_string();
            trim_final_newline(&mut raw);
            assert_eq!(raw, expected);
        }
    }

    #[test]
    fn test_file_ending_in_newline_is_accepted() {
        let mut raw = "ATGC\n".to_string();
        trim_final_newline(&mut raw);
        let report = analysis::run(&raw, &Operation::GcContent, &AnalysisConfig::default());
        assert_eq!(report.unwrap(), "GC Content: 50.00%");
    }
}
