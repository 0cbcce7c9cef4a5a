//! CSV vocabulary loader.
//!
//! File format: a header row naming at least the `id` and
//! `katakana_name` columns (a `classification` column is picked up when
//! present), followed by one entry per line:
//!
//! ```text
//! id,katakana_name
//! 25,ピカチュウ
//! 59,ウインディ
//! ```
//!
//! Column order is free; the header decides. Blank lines are skipped.
//! Names that are not plain full-width katakana are loaded but logged,
//! since the engine expects a pre-normalized source.

use std::fs;
use std::path::Path;

use crate::kana::classify::is_katakana_name;

use super::entry::{EntryId, VocabEntry};
use super::VocabError;

const ID_COLUMN: &str = "id";
const NAME_COLUMN: &str = "katakana_name";
const CLASSIFICATION_COLUMN: &str = "classification";

/// Load vocabulary entries from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<VocabEntry>, VocabError> {
    let text = fs::read_to_string(path)?;
    parse_csv(&text)
}

/// Parse vocabulary entries from CSV text.
pub fn parse_csv(text: &str) -> Result<Vec<VocabEntry>, VocabError> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| VocabError::MissingColumn(ID_COLUMN.to_string()))?
        .trim_start_matches('\u{feff}');
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let id_col = find_column(&columns, ID_COLUMN)?;
    let name_col = find_column(&columns, NAME_COLUMN)?;
    let class_col = columns.iter().position(|c| *c == CLASSIFICATION_COLUMN);

    let mut entries = Vec::new();
    for (idx, line) in lines.enumerate() {
        let lineno = idx + 2; // 1-based, after the header
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let raw_id = field(&fields, id_col, lineno, ID_COLUMN)?;
        let id: u32 = raw_id.parse().map_err(|_| VocabError::Parse {
            line: lineno,
            msg: format!("invalid id: {raw_id:?}"),
        })?;

        let name = field(&fields, name_col, lineno, NAME_COLUMN)?;
        if name.is_empty() {
            return Err(VocabError::EmptyName(lineno));
        }
        if !is_katakana_name(name) {
            tracing::warn!(line = lineno, name, "name is not plain full-width katakana");
        }

        let mut entry = VocabEntry::new(EntryId::new(id), name);
        if let Some(col) = class_col {
            if let Some(class) = fields.get(col).filter(|c| !c.is_empty()) {
                entry = entry.with_classification(*class);
            }
        }
        entries.push(entry);
    }

    Ok(entries)
}

fn find_column(columns: &[&str], name: &str) -> Result<usize, VocabError> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| VocabError::MissingColumn(name.to_string()))
}

fn field<'a>(
    fields: &[&'a str],
    col: usize,
    lineno: usize,
    name: &str,
) -> Result<&'a str, VocabError> {
    fields.get(col).copied().ok_or_else(|| VocabError::Parse {
        line: lineno,
        msg: format!("missing {name} field"),
    })
}
