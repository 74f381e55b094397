// src/csv.rs
use std::error::Error;
use std::io::{Read, Write};

/* ---------------- Parsing ---------------- */

/// Parse comma-separated text into raw rows (header row included).
/// Ragged rows are kept as-is; blank lines are skipped.
pub fn parse_rows<R: Read>(input: R) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() == 1 && record[0].is_empty() { continue; }
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(rows)
}

/// Split parsed rows into (headers, body). Header cells are trimmed and a
/// leading UTF-8 BOM is dropped.
pub fn split_headers(mut rows: Vec<Vec<String>>) -> (Vec<String>, Vec<Vec<String>>) {
    if rows.is_empty() { return (Vec::new(), rows); }
    let headers = rows
        .remove(0)
        .into_iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    (headers, rows)
}

/* ---------------- Writing ---------------- */

/// Write a header row plus body rows. Quoting follows the csv crate's
/// "only when needed" policy, so plain text round-trips byte for byte.
pub fn write_rows<W: Write>(w: W, headers: &[String], rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
    let mut wtr = ::csv::WriterBuilder::new().flexible(true).from_writer(w);
    wtr.write_record(headers)?;
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize fixed-shape records; the header row comes from field names.
pub fn write_records<W: Write, T: serde::Serialize>(w: W, records: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = ::csv::Writer::from_writer(w);
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Deserialize fixed-shape records by header name; extra columns are ignored.
pub fn read_records<R: Read, T: serde::de::DeserializeOwned>(input: R) -> Result<Vec<T>, Box<dyn Error>> {
    let mut rdr = ::csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}
