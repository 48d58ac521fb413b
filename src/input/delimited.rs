use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::input::gz::open_maybe_gz;
use crate::input::{InputError, RawTable};

pub fn read_raw(path: &Path) -> Result<RawTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(InputError::Parse(format!(
            "{} has no header row",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}
