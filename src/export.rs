use crate::errors::AppError;
use crate::models::{FlatRecord, MissSummary};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError};
use unicode_width::UnicodeWidthStr;

pub const REPORT_FILE_NAME: &str = "Tracker_Report.xlsx";

/// Build the two-sheet report workbook in memory: the flattened history on
/// sheet one and the miss summary on sheet two.
pub fn build_report(records: &[FlatRecord], misses: &[MissSummary]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Full History").map_err(to_app_error)?;
        let rows: Vec<[String; 3]> = records
            .iter()
            .map(|r| {
                [
                    r.date.clone(),
                    r.target.clone(),
                    r.status.as_str().to_string(),
                ]
            })
            .collect();
        write_text_sheet(sheet, &["Date", "Target", "Status"], &rows)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Missed Summary").map_err(to_app_error)?;
        write_headers(sheet, &["name", "count"])?;

        let mut name_width = UnicodeWidthStr::width("name");
        for (index, miss) in misses.iter().enumerate() {
            let row = (index + 1) as u32;
            sheet
                .write(row, 0, miss.name.as_str())
                .map_err(to_app_error)?;
            sheet
                .write(row, 1, miss.count as u32)
                .map_err(to_app_error)?;
            name_width = name_width.max(UnicodeWidthStr::width(miss.name.as_str()));
        }
        sheet
            .set_column_width(0, name_width as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save_to_buffer().map_err(to_app_error)
}

fn write_text_sheet(
    sheet: &mut Worksheet,
    headers: &[&str],
    rows: &[[String; 3]],
) -> Result<(), AppError> {
    write_headers(sheet, headers)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for (index, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet
                .write((index + 1) as u32, col as u16, value.as_str())
                .map_err(to_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (col, width) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), AppError> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F4858))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    sheet.set_freeze_panes(1, 0).ok();
    Ok(())
}

fn to_app_error(err: XlsxError) -> AppError {
    AppError::internal(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[test]
    fn report_builds_a_non_empty_workbook() {
        let records = vec![FlatRecord {
            date: "2024-01-01".to_string(),
            target: "Read".to_string(),
            status: Status::Done,
        }];
        let misses = vec![MissSummary {
            name: "Read".to_string(),
            count: 0,
        }];

        let bytes = build_report(&records, &misses).unwrap();
        // XLSX files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn report_handles_empty_inputs() {
        let bytes = build_report(&[], &[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
