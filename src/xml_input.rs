//! Reader for aggregate timing XML files
//!
//! Expected layout:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <aggregates>
//!   <aggregate name="Thread.A" min="100.0" max="100.0" total="100.0" measurements="1"/>
//! </aggregates>
//! ```
//!
//! Only `aggregate` elements directly below the root are read. Elements nested
//! inside an `aggregate` describe child measurement points and are skipped.
//!
//! Files are decoded with the configured input encoding before parsing; the
//! `encoding` pseudo-attribute of the XML declaration is not consulted. A
//! leading byte order mark overrides the configured encoding.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::aggregate::Aggregate;
use crate::error::{ReportError, Result};
use crate::merge::Source;

const AGGREGATE_TAG: &[u8] = b"aggregate";

/// Encoding used when none is configured
pub const DEFAULT_INPUT_ENCODING: &str = "UTF-8";

/// Look up an encoding by its WHATWG label (`UTF-8`, `ISO-8859-1`, ...)
pub fn input_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        ReportError::InvalidConfiguration {
            setting: "input encoding",
            value: label.to_string(),
        }
    })
}

/// Read one timing file into a [`Source`] named after the file
pub fn read_source(path: &Path, encoding: &'static Encoding) -> Result<Source> {
    let bytes = fs::read(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (content, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(ReportError::Parse {
            path: path.to_path_buf(),
            message: format!("Content is not valid {}", encoding.name()),
        });
    }

    let aggregates = parse_aggregates(&content).map_err(|e| match e {
        ReportError::Parse { message, .. } => ReportError::Parse {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;
    debug!("Read {} aggregates from {}", aggregates.len(), path.display());

    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Source::new(id, aggregates))
}

/// Parse aggregate records from an XML document
///
/// Parse failures carry an empty path; [`read_source`] fills it in.
pub fn parse_aggregates(xml: &str) -> Result<Vec<Aggregate>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut aggregates = Vec::new();
    // Element nesting depth; the root element sits at depth 1
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == AGGREGATE_TAG {
                    aggregates.push(parse_aggregate(&e)?);
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 1 && e.name().as_ref() == AGGREGATE_TAG {
                    aggregates.push(parse_aggregate(&e)?);
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(parse_error(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(aggregates)
}

fn parse_error(message: String) -> ReportError {
    ReportError::Parse {
        path: Default::default(),
        message,
    }
}

/// Build an [`Aggregate`] from the attributes of one element
fn parse_aggregate(element: &BytesStart<'_>) -> Result<Aggregate> {
    let mut name = None;
    let mut min = None;
    let mut max = None;
    let mut total = None;
    let mut measurements = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| parse_error(format!("Malformed attribute: {}", e)))?;
        let value = attr
            .unescape_value()
            .map_err(|e| parse_error(format!("Malformed attribute value: {}", e)))?
            .into_owned();

        match attr.key.as_ref() {
            b"name" => name = Some(value),
            b"min" => min = Some(parse_duration("min", &value)?),
            b"max" => max = Some(parse_duration("max", &value)?),
            b"total" => total = Some(parse_duration("total", &value)?),
            b"measurements" => {
                let count = value.trim().parse::<u64>().map_err(|_| {
                    parse_error(format!("Invalid measurements count: '{}'", value))
                })?;
                measurements = Some(count);
            }
            // average is derived from total and measurements
            _ => {}
        }
    }

    let name = name.ok_or_else(|| parse_error("Aggregate without a name".to_string()))?;
    let missing = |field: &str| parse_error(format!("Aggregate '{}' has no {}", name, field));

    let min = min.ok_or_else(|| missing("min"))?;
    let max = max.ok_or_else(|| missing("max"))?;
    let total = total.ok_or_else(|| missing("total"))?;
    let measurements = measurements.ok_or_else(|| missing("measurements"))?;

    if measurements > 0 && min > max {
        return Err(parse_error(format!(
            "Aggregate '{}' has min {} above max {}",
            name, min, max
        )));
    }

    Aggregate::new(name, min, max, total, measurements)
}

fn parse_duration(field: &str, value: &str) -> Result<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| parse_error(format!("Invalid {} value: '{}'", field, value)))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(parse_error(format!(
            "{} must be a non-negative number, got '{}'",
            field, value
        )));
    }
    Ok(parsed)
}
