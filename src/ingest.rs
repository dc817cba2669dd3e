//! Reading `<x>,<y>,<class>` records into a [`Dataset`].
//!
//! Records that do not parse are dropped without a trace. Only a failure of the
//! underlying source is reported.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord, Terminator};

use crate::error::{Error, Result};
use crate::point::{Dataset, Label, Point};

/// Parses one line of text, or `None` if it is blank or malformed.
pub fn parse_record(line: &str) -> Option<Point> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split(',').collect();
    parse_fields(&fields)
}

// Only the outer edges of a record are trimmed; whitespace around a comma is malformed.
fn parse_fields(fields: &[&str]) -> Option<Point> {
    let [x, y, class] = fields else {
        return None;
    };
    let x = parse_real(x.trim_start())?;
    let y = parse_real(y)?;
    let class: i64 = class.trim_end().parse().ok()?;
    let class = Label::try_from(class).ok()?;
    Some(Point::new(x, y, class))
}

// Out-of-range literals such as `1e400` are malformed; only a spelled-out infinity may
// parse to one.
fn parse_real(field: &str) -> Option<f64> {
    let value: f64 = field.parse().ok()?;
    if value.is_infinite() {
        let word = field.trim_start_matches(['+', '-']);
        if !(word.eq_ignore_ascii_case("inf") || word.eq_ignore_ascii_case("infinity")) {
            return None;
        }
    }
    Some(value)
}

fn parse_csv_record(record: &StringRecord) -> Option<Point> {
    let fields: Vec<&str> = record.iter().collect();
    parse_fields(&fields)
}

/// Reads every well-formed record from `reader`.
///
/// Blank lines, lines without exactly three fields and lines whose fields fail to
/// parse are skipped. Only I/O errors from `reader` are returned.
pub fn read_points<R: Read>(reader: R) -> io::Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(reader);

    rdr.records()
        .filter_map(|result| match result {
            Ok(record) => parse_csv_record(&record).map(Ok),
            Err(err) => match err.into_kind() {
                ErrorKind::Io(err) => Some(Err(err)),
                _ => None,
            },
        })
        .collect()
}

/// Loads a dataset from a file on disk.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    read_points(file).map_err(read_error)
}
