use rust_xlsxwriter::Workbook;
use std::path::Path;

use crate::domain::ListingRecord;
use crate::spreadsheets::ExportError;

pub fn export_listings_xlsx(path: &Path, records: &[ListingRecord]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Column 0 is the row index, left without a header
    for (col, header) in ListingRecord::COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, (col + 1) as u16, *header)
            .map_err(|e| {
                ExportError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, i as f64)
            .map_err(|e| ExportError::Xlsx(format!("Failed to write index: {}", e)))?;

        for (col, value) in record.fields().iter().enumerate() {
            worksheet
                .write_string(r, (col + 1) as u16, *value)
                .map_err(|e| {
                    ExportError::Xlsx(format!(
                        "Failed to write {}: {}",
                        ListingRecord::COLUMNS[col],
                        e
                    ))
                })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ExportError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    Ok(())
}
