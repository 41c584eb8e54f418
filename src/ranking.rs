//! The ranking pipeline: read a tab-separated score table, drop malformed
//! rows, and order the records by score descending.

use crate::core::{Record, Score};
use crate::errors::{RankError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Header rows start with this prefix and never produce a record.
const HEADER_PREFIX: &str = "id";

/// Builds a descending ranking from a tab-separated score table.
///
/// The input path is explicit state; [`RankBuilder::build`] performs a
/// single pass with no side effects beyond the file read.
#[derive(Debug, Clone)]
pub struct RankBuilder {
    path: PathBuf,
}

impl RankBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole table and return its records ranked by score
    /// descending. Records with equal scores keep their input order.
    pub fn build(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(|source| RankError::FileAccess {
            path: self.path.clone(),
            source,
        })?;
        Ok(rank_content(&content))
    }
}

/// Rank a table already held in memory.
pub fn rank_content(content: &str) -> Vec<Record> {
    let mut total = 0usize;
    let mut records: Vec<Record> = Vec::new();
    for line in content.split('\n') {
        total += 1;
        if let Some(record) = parse_line(line) {
            records.push(record);
        }
    }
    debug!(
        "parsed {} records from {} lines ({} dropped)",
        records.len(),
        total,
        total - records.len()
    );

    // sort_by is stable, so ties keep their input order
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}

/// Classify one line of the table.
///
/// Header rows and lines without exactly two tab-separated fields produce
/// no record. The score field is parsed best-effort; see [`Score::parse`].
pub fn parse_line(line: &str) -> Option<Record> {
    if line.starts_with(HEADER_PREFIX) {
        return None;
    }

    let mut fields = line.split('\t');
    let id = fields.next()?;
    let score = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Some(Record {
        id: id.to_string(),
        score: Score::parse(score),
    })
}
