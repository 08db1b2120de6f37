//! Whole-file CSV reading and writing.
//!
//! The first record is always the header. Records are written with `\n` line endings.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::debug;

use crate::ExtrasError;

pub type Record = BTreeMap<String, String>;

/// Rows following the header, either as plain field lists or keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    Lists(Vec<Vec<String>>),
    Records(Vec<Record>),
}

impl Rows {
    pub fn len(&self) -> usize {
        match self {
            Rows::Lists(rows) => rows.len(),
            Rows::Records(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read a header and all rows from `source`. With `with_dict`, each row is keyed by the
/// header names.
///
/// Empty input yields an empty header and no rows. A row whose length differs from the
/// header is an error.
pub fn read<R: Read>(source: R, with_dict: bool) -> Result<(Vec<String>, Rows), ExtrasError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()?;
    debug!(columns = header.len(), rows = records.len(), "read csv");

    let rows = if with_dict {
        Rows::Records(
            records
                .iter()
                .map(|record| {
                    header
                        .iter()
                        .cloned()
                        .zip(record.iter().map(str::to_string))
                        .collect()
                })
                .collect(),
        )
    } else {
        Rows::Lists(
            records
                .iter()
                .map(|record| record.iter().map(str::to_string).collect())
                .collect(),
        )
    };

    Ok((header, rows))
}

pub fn read_path(
    path: impl AsRef<Path>,
    with_dict: bool,
) -> Result<(Vec<String>, Rows), ExtrasError> {
    read(File::open(path)?, with_dict)
}

fn writer<W: Write>(target: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(target)
}

/// Write `header` and then each row to `target`.
pub fn write<W, H, R, F>(header: &[H], rows: R, target: W) -> Result<(), ExtrasError>
where
    W: Write,
    H: AsRef<[u8]>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = writer(target);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write keyed rows in header order. Missing fields are written empty; a field not in the
/// header is an error.
pub fn write_records<W, H>(header: &[H], rows: &[Record], target: W) -> Result<(), ExtrasError>
where
    W: Write,
    H: AsRef<str>,
{
    let names: Vec<&str> = header.iter().map(AsRef::as_ref).collect();

    let mut writer = writer(target);
    writer.write_record(&names)?;
    for row in rows {
        if let Some(unknown) = row.keys().find(|key| !names.contains(&key.as_str())) {
            return Err(ExtrasError::UnknownField(unknown.clone()));
        }
        writer.write_record(
            names
                .iter()
                .map(|name| row.get(*name).map_or("", String::as_str)),
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_path<H, R, F>(header: &[H], rows: R, path: impl AsRef<Path>) -> Result<(), ExtrasError>
where
    H: AsRef<[u8]>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    write(header, rows, File::create(path)?)
}
