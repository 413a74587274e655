use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use tracing::debug;

use crate::document::ContentRepresentation;
use crate::error::RenderError;
use crate::ui::document::{
    content::{RenderedDocument, SheetTable},
    viewer::strategies::spreadsheet::SpreadsheetViewStrategy,
};

impl SpreadsheetViewStrategy {
    pub(super) fn _parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        let mut workbook = Xlsx::new(Cursor::new(content.as_bytes()))
            .map_err(|e| RenderError::Spreadsheet(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| RenderError::Spreadsheet("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| RenderError::Spreadsheet(e.to_string()))?;

        let rows = range_rows(&range);
        debug!("Sheet '{}': {} rows", sheet_name, rows.len());

        Ok(RenderedDocument::Table(SheetTable { sheet_name, rows }))
    }
}

/// Cells of the used range as display strings. Blank rows and columns
/// outside it are not materialised.
fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::ui::document::viewer::strategies::ooxml::fixtures::package;

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Summary" sheetId="2" r:id="rId2"/><sheet name="Raw" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/></Relationships>"#;

    fn worksheet(rows: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
            rows
        )
    }

    /// Two sheets; `Summary` is defined first but stored as `sheet2.xml`.
    /// Summary holds a 2x2 grid: `Name | 1` / `Total | 2.5`.
    pub(crate) fn workbook() -> Vec<u8> {
        let summary = worksheet(
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Name</t></is></c><c r="B1"><v>1</v></c></row><row r="2"><c r="A2" t="inlineStr"><is><t>Total</t></is></c><c r="B2"><v>2.5</v></c></row>"#,
        );
        let raw = worksheet(r#"<row r="1"><c r="A1" t="inlineStr"><is><t>raw</t></is></c></row>"#);
        package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", raw.as_str()),
            ("xl/worksheets/sheet2.xml", summary.as_str()),
        ])
    }

    /// Single sheet whose cells sit at B2:C3.
    pub(crate) fn offset_workbook() -> Vec<u8> {
        let grid = worksheet(
            r#"<row r="2"><c r="B2"><v>1</v></c><c r="C2"><v>2</v></c></row><row r="3"><c r="B3"><v>3</v></c><c r="C3"><v>4</v></c></row>"#,
        );
        let blank = worksheet("");
        package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", blank.as_str()),
            ("xl/worksheets/sheet2.xml", grid.as_str()),
        ])
    }
}
