use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;

use crate::model::format::is_gzip;
use crate::output::{Grid, OutputError, write_atomic};

/// CSV output; a `.csv.gz` path is gzip-compressed.
pub fn write_grid(grid: &Grid, path: &Path) -> Result<(), OutputError> {
    let gzip = is_gzip(path);
    write_atomic(path, |w| {
        if gzip {
            let mut encoder = GzEncoder::new(w, Compression::default());
            write_records(grid, &mut encoder)?;
            encoder.finish()?;
            Ok(())
        } else {
            write_records(grid, w)
        }
    })
}

fn write_records<W: Write>(grid: &Grid, w: W) -> Result<(), OutputError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(w);
    writer.write_record(&grid.headers)?;
    for row in &grid.rows {
        writer.write_record(row.iter().map(|c| c.to_text()))?;
    }
    writer.flush()?;
    Ok(())
}
