// src/bundle.rs

use std::{collections::BTreeMap, fmt, fs::File, io::BufWriter, io::Write, path::Path};

use serde::{Serialize, Serializer};
use serde_json::{ser::PrettyFormatter, Value};

use crate::error::WriteError;

/// Race distances queried for every skater, in query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    M500,
    M1000,
    M1500,
    M3000,
    M5000,
    M10000,
}

impl Distance {
    pub const ALL: [Distance; 6] = [
        Distance::M500,
        Distance::M1000,
        Distance::M1500,
        Distance::M3000,
        Distance::M5000,
        Distance::M10000,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Distance::M500 => "500m",
            Distance::M1000 => "1000m",
            Distance::M1500 => "1500m",
            Distance::M3000 => "3000m",
            Distance::M5000 => "5000m",
            Distance::M10000 => "10000m",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Everything fetched for one athlete. Keys of `distances` serialize in
/// [`Distance::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteResultBundle {
    pub skater_id: Option<u64>,
    pub family_name: String,
    pub given_name: String,
    pub sport: String,
    pub distances: BTreeMap<Distance, Value>,
}

/// Python-style truthiness: the results API answers "nothing" with these.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Render `bundles` as a JSON array indented by four spaces.
pub fn to_pretty_json(bundles: &[AthleteResultBundle]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, bundles)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_pretty<W: Write>(writer: W, bundles: &[AthleteResultBundle]) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    bundles.serialize(&mut ser)
}

pub fn write_bundles(
    bundles: &[AthleteResultBundle],
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    write_pretty(&mut out, bundles).map_err(|source| WriteError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush().map_err(io_err)?;
    Ok(())
}
