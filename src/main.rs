//! `census <records.tsv>`: loads a census file into an [`OSRBTree`], prints the tree
//! and names the 3rd woman and the 4th man in alphabetical order.

use std::env;
use std::error::Error as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use log::{LevelFilter, debug, error, info, warn};
use osrb_tree::record::{ParseRecordError, Record};
use osrb_tree::{Gender, OSRBTree, Rank, RankOutOfRange};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use thiserror::Error;

/// Environment variable holding the log level (`off` through `trace`).
const LOG_ENV: &str = "OSRB_TREE_LOG";

const QUERIES: [(&str, Gender, Rank); 2] = [
    ("3rd woman", Gender::Female, Rank(2)),
    ("4th man", Gender::Male, Rank(3)),
];

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: {program} <records.tsv>")]
    Usage { program: String },

    #[error("cannot open `{path}`")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read `{path}`")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("`{path}` line {line}: malformed record")]
    Record {
        path: String,
        line: usize,
        #[source]
        source: ParseRecordError,
    },

    #[error("no {label}")]
    Rank {
        label: &'static str,
        #[source]
        source: RankOutOfRange,
    },
}

impl CliError {
    fn code(&self) -> u8 {
        match self {
            CliError::Usage { .. } => 9,
            CliError::Open { .. } => 8,
            CliError::Read { .. } => 7,
            CliError::Record { .. } => 6,
            CliError::Rank { .. } => 5,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.code())
        }
    }
}

fn init_logging() {
    let configured = env::var(LOG_ENV).ok();
    let parsed = configured.as_deref().map(str::parse::<LevelFilter>);
    let level = match parsed {
        Some(Ok(level)) => level,
        _ => LevelFilter::Warn,
    };

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).ok();

    if let (Some(value), Some(Err(_))) = (&configured, &parsed) {
        warn!("ignoring {LOG_ENV}={value:?}: not a log level");
    }
}

fn report(err: &CliError) {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    error!("{message}");
}

fn run(mut args: impl Iterator<Item = String>) -> Result<(), CliError> {
    let program = args.next().unwrap_or_else(|| "census".to_owned());
    let (Some(path), None) = (args.next(), args.next()) else {
        return Err(CliError::Usage { program });
    };

    let file = File::open(&path).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
    })?;
    let tree = load(BufReader::new(file), &path)?;
    info!(
        "loaded {} records from `{path}`: {} men, {} women, height {}",
        tree.len(),
        tree.count(Gender::Male),
        tree.count(Gender::Female),
        tree.height()
    );

    print!("{}", tree.pretty());
    for line in answer(&tree)? {
        println!("{line}");
    }

    Ok(())
}

/// Builds the census tree from `reader`; `path` only labels errors.
fn load(reader: impl BufRead, path: &str) -> Result<OSRBTree<String, u64>, CliError> {
    let records = reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(path, index + 1, line).transpose())
        .collect::<Result<Vec<Record>, CliError>>()?;

    let mut tree = OSRBTree::with_capacity(records.len());
    tree.extend(records);
    Ok(tree)
}

// Blank lines yield `None`.
fn parse_line(path: &str, line: usize, read: io::Result<String>) -> Result<Option<Record>, CliError> {
    let text = read.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    if text.trim().is_empty() {
        return Ok(None);
    }

    let record: Record = text.parse().map_err(|source| CliError::Record {
        path: path.to_owned(),
        line,
        source,
    })?;
    debug!("line {line}: {} ({}, {})", record.name, record.gender, record.age);
    Ok(Some(record))
}

/// Runs the fixed queries, one `label: name` line each.
fn answer(tree: &OSRBTree<String, u64>) -> Result<Vec<String>, CliError> {
    QUERIES
        .into_iter()
        .map(|(label, gender, rank)| {
            tree.find_with_rank(gender, rank)
                .map(|person| format!("{label}: {}", person.key()))
                .map_err(|source| CliError::Rank { label, source })
        })
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEMO: &str = include_str!("../demos/census.tsv");

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|&arg| arg.to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn demo_census_names_mona_and_hank() {
        let tree = load(DEMO.as_bytes(), "census.tsv").unwrap();
        assert_eq!(tree.len(), 10);
        assert_eq!(answer(&tree).unwrap(), ["3rd woman: Mona", "4th man: Hank"]);
    }

    #[test]
    fn blank_lines_are_skipped_but_still_numbered() {
        let err = load(&b"Ann\tF\t1\n\nBen\tX\t2\n"[..], "people.tsv").unwrap_err();
        assert_eq!(err.code(), 6);
        assert!(
            matches!(
                &err,
                CliError::Record { line: 3, source: ParseRecordError::InvalidGender { found }, .. } if found == "X"
            ),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "`people.tsv` line 3: malformed record");
    }

    #[test]
    fn trailing_blank_lines_load_cleanly() {
        let tree = load(&b"Ann\tF\t1\n\n  \r\n"[..], "people.tsv").unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn too_few_women_is_a_rank_error() {
        let tree = load(&b"Ann\tF\t1\nBea\tF\t2\nAl\tM\t3\nBo\tM\t4\nCy\tM\t5\nDan\tM\t6\n"[..], "people.tsv").unwrap();
        let err = answer(&tree).unwrap_err();
        assert_eq!(err.code(), 5);
        assert!(
            matches!(
                &err,
                CliError::Rank { label: "3rd woman", source } if source.gender == Gender::Female && source.count == 2
            ),
            "{err:?}"
        );
    }

    #[test]
    fn unreadable_input_is_a_read_error() {
        let err = load(&b"Ann\tF\t1\n\xff\xfe\n"[..], "people.tsv").unwrap_err();
        assert_eq!(err.code(), 7);
        assert!(matches!(err, CliError::Read { .. }), "{err:?}");
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        for list in [&["census"][..], &["census", "a.tsv", "b.tsv"][..]] {
            let err = run(args(list)).unwrap_err();
            assert_eq!(err.code(), 9);
            assert_eq!(err.to_string(), "usage: census <records.tsv>");
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = run(args(&["census", "/nonexistent/census.tsv"])).unwrap_err();
        assert_eq!(err.code(), 8);
        assert!(matches!(err, CliError::Open { .. }), "{err:?}");
    }
}
