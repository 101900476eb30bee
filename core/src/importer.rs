//! Row importer — reads (name, email, phone) rows from a CSV source.
//!
//! RULE: fail fast at the file level, fail soft at the row level.
//! A missing or unreadable source aborts before any record is produced;
//! a row missing a required cell is skipped with a warning and the
//! batch continues.

use crate::error::{EtlError, EtlResult};
use crate::model::NewInvestor;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Treat the first row as a header and skip it. The default imports
    /// row 1 as data, matching the source files this replaces.
    pub has_header: bool,
}

/// Lazy, finite, non-restartable sequence of validated investor rows,
/// in source order. Obtain one with [`import_rows`].
pub struct RowImporter {
    records: csv::StringRecordsIntoIter<File>,
    path: String,
    row: u64, // 1-based row number in the source, for warnings
    skipped: u64,
    failed: bool,
}

/// Open `source_path` and return the record sequence.
pub fn import_rows<P: AsRef<Path>>(source_path: P, options: ImportOptions) -> EtlResult<RowImporter> {
    let path = source_path.as_ref();
    // flexible: a short row becomes a validation skip, not a hard error.
    let reader = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .flexible(true)
        .from_path(path)
        .map_err(|e| EtlError::SourceRead {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(RowImporter {
        records: reader.into_records(),
        path: path.display().to_string(),
        row: if options.has_header { 1 } else { 0 },
        skipped: 0,
        failed: false,
    })
}

impl RowImporter {
    /// Rows rejected by validation so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Iterator for RowImporter {
    type Item = EtlResult<NewInvestor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                // I/O or structural failure mid-file: surface it once
                // and end the sequence — the batch is not usable past
                // this point.
                Err(e) => {
                    self.failed = true;
                    return Some(Err(EtlError::SourceRead {
                        path: self.path.clone(),
                        source: e,
                    }));
                }
            };
            self.row += 1;

            let name = record.get(0).unwrap_or("");
            let email = record.get(1).unwrap_or("");
            let phone = record.get(2).unwrap_or("");

            match NewInvestor::new(name, email, phone) {
                Ok(investor) => return Some(Ok(investor)),
                Err(defect) => {
                    self.skipped += 1;
                    log::warn!("skipping row {} of {}: {defect}", self.row, self.path);
                }
            }
        }
    }
}
