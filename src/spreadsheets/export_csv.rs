use csv::Writer;
use std::io::Write;
use std::path::Path;

use crate::domain::ListingRecord;
use crate::spreadsheets::ExportError;

pub fn write_listings_csv(path: &Path, records: &[ListingRecord]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_listings_to(file, records)
}

/// Header row has a blank first cell over the row-index column, which counts from 0.
pub fn write_listings_to<W: Write>(out: W, records: &[ListingRecord]) -> Result<(), ExportError> {
    let mut wtr = Writer::from_writer(out);

    let mut header = vec![""];
    header.extend(ListingRecord::COLUMNS);
    wtr.write_record(&header)?;

    for (i, record) in records.iter().enumerate() {
        let index = i.to_string();
        let mut row = vec![index.as_str()];
        row.extend(record.fields());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
