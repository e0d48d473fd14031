//! Host list reading.
//!
//! Hosts come either from a named column of a CSV file (header row required)
//! or from a plain text file with one host per line. Values are trimmed and
//! blank entries are skipped, so the iterator only yields non-empty hosts in
//! file order. A leading UTF-8 byte-order mark is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::config::{InputFormat, UTF8_BOM};
use crate::error_handling::InputError;

/// Lazy iterator over the hosts of an input file.
///
/// The file is read as hosts are requested; a decoding error further down
/// the file surfaces only when that line is reached.
pub struct HostReader {
    path: PathBuf,
    source: HostSource,
}

enum HostSource {
    Plain(Lines<BufReader<File>>),
    Csv {
        records: csv::StringRecordsIntoIter<BufReader<File>>,
        index: usize,
    },
}

/// Opens `path` and prepares to read hosts in the given format.
///
/// # Errors
///
/// - `InputError::Io` if the file cannot be opened
/// - `InputError::Csv` if the CSV header cannot be decoded
/// - `InputError::MissingField` if the CSV header lacks the requested column
pub fn open_hosts(path: &Path, format: &InputFormat) -> Result<HostReader, InputError> {
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);
    if reader.fill_buf().map_err(io_error)?.starts_with(UTF8_BOM) {
        reader.consume(UTF8_BOM.len());
    }

    let source = match format {
        InputFormat::Plain => HostSource::Plain(reader.lines()),
        InputFormat::Csv { field } => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .flexible(true)
                .from_reader(reader);
            let index = csv_reader
                .headers()?
                .iter()
                .position(|header| header == field)
                .ok_or_else(|| InputError::MissingField {
                    field: field.clone(),
                    path: path.to_path_buf(),
                })?;
            HostSource::Csv {
                records: csv_reader.into_records(),
                index,
            }
        }
    };

    Ok(HostReader {
        path: path.to_path_buf(),
        source,
    })
}

impl Iterator for HostReader {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = match &mut self.source {
                HostSource::Plain(lines) => match lines.next()? {
                    Ok(line) => line,
                    Err(source) => {
                        return Some(Err(InputError::Io {
                            path: self.path.clone(),
                            source,
                        }))
                    }
                },
                HostSource::Csv { records, index } => match records.next()? {
                    Ok(record) => record.get(*index).unwrap_or_default().to_string(),
                    Err(e) => return Some(Err(InputError::Csv(e))),
                },
            };
            let host = candidate.trim();
            if !host.is_empty() {
                return Some(Ok(host.to_string()));
            }
        }
    }
}
