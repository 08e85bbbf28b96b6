use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

use crate::error::ForwardError;
use crate::form::FormFields;

/// Statistics forwarded to the points-prediction service.
///
/// Values are the raw form strings; nothing is parsed or range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    /// Opponent effective field goal percentage
    #[serde(rename = "OEFG")]
    pub oefg: String,
    /// Opponent free throw rate
    #[serde(rename = "OFTR")]
    pub oftr: String,
    /// Opponent offensive rebound rate
    #[serde(rename = "OREB")]
    pub oreb: String,
    #[serde(rename = "PACE")]
    pub pace: String,
    /// Projected minutes
    #[serde(rename = "MIN")]
    pub minutes: String,
}

impl PredictionRequest {
    /// Pull the five statistics out of a submitted form.
    pub fn from_form(form: &FormFields) -> Result<Self, ForwardError> {
        Ok(PredictionRequest {
            oefg: form.require("OEFG")?.to_string(),
            oftr: form.require("OFTR")?.to_string(),
            oreb: form.require("OREB")?.to_string(),
            pace: form.require("PACE")?.to_string(),
            minutes: form.require("minutes")?.to_string(),
        })
    }

    /// Build the outbound request body.
    ///
    /// The payload is encoded to JSON text and that text is encoded again as
    /// a JSON string, so the service receives a string literal rather than an
    /// object.
    pub fn encode_body(&self) -> Result<String, ForwardError> {
        let inner = to_python_json(self)?;
        Ok(to_python_json(&inner)?)
    }
}

/// Serialize `value` the way Python's `json.dumps` does with default options.
pub fn to_python_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PythonFormatter);
    value.serialize(&mut ser)?;
    // Output is pure ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `", "` / `": "` separators and `\uXXXX` escapes for anything outside
/// printable ASCII.
struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
