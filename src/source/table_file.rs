use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::LinkingSource;
use crate::model::{ColumnNames, LinkRecord};

/// A CSV export of the linking table.
#[derive(Clone, Debug)]
pub struct TableFile {
    path: PathBuf,
    columns: ColumnNames,
}

impl TableFile {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnNames) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads records from CSV text with a header row.
    ///
    /// Empty cells, short rows and absent columns all leave the field unset.
    pub fn read_from<R: Read>(reader: R, columns: &ColumnNames) -> Result<Vec<LinkRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers().context("read csv header")?.clone();

        let central = locate_column(&headers, &columns.central_id);
        let channel = locate_column(&headers, &columns.channel_name);
        let channel_id = locate_column(&headers, &columns.channel_id);
        for (name, idx) in [
            (&columns.central_id, central),
            (&columns.channel_name, channel),
            (&columns.channel_id, channel_id),
        ] {
            if idx.is_none() {
                warn!(column = %name, "linking column not found in csv header");
            }
        }

        let mut out = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("read csv row {}", i + 1))?;
            out.push(LinkRecord {
                central_id: cell(&record, central),
                channel_name: cell(&record, channel),
                channel_id: cell(&record, channel_id),
            });
        }
        Ok(out)
    }
}

impl LinkingSource for TableFile {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<LinkRecord>> {
        let file =
            File::open(&self.path).with_context(|| format!("open {}", self.path.display()))?;
        let records = Self::read_from(BufReader::new(file), &self.columns)
            .with_context(|| format!("parse {}", self.path.display()))?;
        info!(path = %self.path.display(), rows = records.len(), "loaded linking table");
        Ok(records)
    }
}

fn locate_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    let clean = |h: &str| h.trim_start_matches('\u{feff}').trim().to_string();
    headers
        .iter()
        .position(|h| clean(h) == name)
        .or_else(|| {
            headers
                .iter()
                .position(|h| clean(h).eq_ignore_ascii_case(name.trim()))
        })
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../tests/source/table_file_tests.rs"]
mod tests;
