//! # Persistence Codec
//!
//! Translates between the roster's CSV text and [`Driver`] records.
//!
//! ## Format
//!
//! ```text
//! Racing Number,Name,Team,Age,Nationality,Podiums,GP Entered,World Championships,Career Points,Current Season Points
//! 44,Lewis Hamilton,Ferrari,40,British,200,350,7,5000.0,120.0
//! ```
//!
//! Quoting follows RFC 4180 on both sides: a field holding a comma, a quote or
//! a line break is wrapped in double quotes and embedded quotes are doubled.
//!
//! ## Row Policy
//!
//! Reading locates columns by header name. A row is kept only if every field
//! is present and coerces to its type; otherwise the whole row is dropped and
//! the read moves on. Dropped rows are logged at debug level and never
//! reported to the caller. Only I/O failures of the underlying reader abort.
//!
//! Writing always emits the header in schema order and the rows ascending by
//! racing number.

use crate::error::Result;
use crate::model::Driver;
use crate::schema::Field;
use std::collections::HashMap;
use std::io::{Read, Write};
use tracing::{debug, warn};

pub fn decode<R: Read>(reader: R) -> Result<Vec<Driver>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(e) if e.is_io_error() => return Err(e.into()),
        Err(e) => {
            warn!(error = %e, "unreadable header row, no drivers loaded");
            return Ok(Vec::new());
        }
    };

    let mut columns: HashMap<Field, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        match Field::from_key(header.trim()) {
            Some(field) => {
                columns.entry(field).or_insert(i);
            }
            None => debug!(column = i, header, "ignoring unknown column"),
        }
    }

    let mut drivers = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line());
                debug!(?line, error = %e, "dropping undecodable row");
                continue;
            }
        };

        match Driver::from_raw(|field| columns.get(&field).and_then(|&i| record.get(i))) {
            Ok(driver) => drivers.push(driver),
            Err(reason) => {
                let line = record.position().map(|p| p.line());
                debug!(?line, %reason, "dropping malformed row");
            }
        }
    }

    Ok(drivers)
}

pub fn encode<W: Write>(writer: W, drivers: &[Driver]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Field::ALL.iter().map(|f| f.key()))?;

    let mut ordered: Vec<&Driver> = drivers.iter().collect();
    ordered.sort_by_key(|d| d.number);

    for driver in ordered {
        wtr.write_record(Field::ALL.iter().map(|f| driver.value(*f).to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}
