//! Small .xlsx workbooks written on the fly for loader and pipeline tests.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

pub enum Cell {
    Text(&'static str),
    Number(f64),
}

pub struct Sheet {
    pub name: &'static str,
    /// (1-based sheet row, cells from column A)
    pub rows: Vec<(u32, Vec<Cell>)>,
}

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// World Bank style export: a metadata sheet, then `Data` with three
/// metadata rows above the header. With `blank_first_row` the sheet's
/// first used row is row 2.
pub fn write_population_workbook(path: &Path, blank_first_row: bool) {
    let mut data_rows = Vec::new();
    if !blank_first_row {
        data_rows.push((
            1,
            vec![
                Cell::Text("Data Source"),
                Cell::Text("World Development Indicators"),
            ],
        ));
    }
    data_rows.push((
        2,
        vec![Cell::Text("Last Updated Date"), Cell::Text("2024-06-28")],
    ));
    data_rows.push((
        4,
        vec![
            Cell::Text("Country Name"),
            Cell::Text("Country Code"),
            Cell::Text("Indicator Name"),
            Cell::Text("Indicator Code"),
            Cell::Text("2019"),
            Cell::Number(2020.0),
        ],
    ));
    data_rows.push((
        5,
        vec![
            Cell::Text("Aruba"),
            Cell::Text("ABW"),
            Cell::Text("Population, total"),
            Cell::Text("SP.POP.TOTL"),
            Cell::Number(106_442.0),
            Cell::Number(106_766.0),
        ],
    ));
    data_rows.push((
        6,
        vec![
            Cell::Text("India"),
            Cell::Text("IND"),
            Cell::Text("Population, total"),
            Cell::Text("SP.POP.TOTL"),
            Cell::Number(1_383_112_050.0),
            Cell::Number(1_396_387_127.0),
        ],
    ));

    let sheets = [
        Sheet {
            name: "Metadata - Countries",
            rows: vec![
                (1, vec![Cell::Text("Country Code"), Cell::Text("Region")]),
                (2, vec![Cell::Text("IND"), Cell::Text("South Asia")]),
            ],
        },
        Sheet {
            name: "Data",
            rows: data_rows,
        },
    ];

    write_workbook(path, &sheets).unwrap();
}

pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> zip::result::ZipResult<()> {
    let mut strings: Vec<&'static str> = Vec::new();
    let sheet_xml: Vec<String> = sheets
        .iter()
        .map(|sheet| worksheet_xml(sheet, &mut strings))
        .collect();

    let mut zip = ZipWriter::new(File::create(path)?);
    let options = FileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types_xml(sheets.len()).as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{PKG_REL_NS}"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
        )
        .as_bytes(),
    )?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml(sheets).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(workbook_rels_xml(sheets.len()).as_bytes())?;

    zip.start_file("xl/sharedStrings.xml", options)?;
    zip.write_all(shared_strings_xml(&strings).as_bytes())?;

    for (i, xml) in sheet_xml.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        zip.write_all(xml.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

fn content_types_xml(sheet_count: usize) -> String {
    let overrides: String = (1..=sheet_count)
        .map(|i| {
            format!(
                r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>{overrides}</Types>"#
    )
}

fn workbook_xml(sheets: &[Sheet]) -> String {
    let entries: String = sheets
        .iter()
        .enumerate()
        .map(|(i, sheet)| {
            format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name),
                i + 1,
                i + 1
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{MAIN_NS}" xmlns:r="{REL_NS}"><sheets>{entries}</sheets></workbook>"#
    )
}

fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut rels: String = (1..=sheet_count)
        .map(|i| {
            format!(
                r#"<Relationship Id="rId{i}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{i}.xml"/>"#
            )
        })
        .collect();
    rels.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="{REL_NS}/sharedStrings" Target="sharedStrings.xml"/>"#,
        sheet_count + 1
    ));
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{PKG_REL_NS}">{rels}</Relationships>"#
    )
}

fn shared_strings_xml(strings: &[&str]) -> String {
    let items: String = strings
        .iter()
        .map(|s| format!("<si><t>{}</t></si>", escape(s)))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="{MAIN_NS}" count="{n}" uniqueCount="{n}">{items}</sst>"#,
        n = strings.len()
    )
}

fn worksheet_xml(sheet: &Sheet, strings: &mut Vec<&'static str>) -> String {
    let mut rows = String::new();
    for (row, cells) in &sheet.rows {
        rows.push_str(&format!(r#"<row r="{row}">"#));
        for (col, cell) in cells.iter().enumerate() {
            let reference = format!("{}{}", column_letter(col), row);
            match cell {
                Cell::Text(text) => {
                    let idx = match strings.iter().position(|s| s == text) {
                        Some(idx) => idx,
                        None => {
                            strings.push(*text);
                            strings.len() - 1
                        }
                    };
                    rows.push_str(&format!(r#"<c r="{reference}" t="s"><v>{idx}</v></c>"#));
                }
                Cell::Number(value) => {
                    rows.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#));
                }
            }
        }
        rows.push_str("</row>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{MAIN_NS}"><sheetData>{rows}</sheetData></worksheet>"#
    )
}

fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
