use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Layout mode for the bubble chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// All bubbles gather around one shared center.
    #[default]
    Grouped,
    /// Bubbles cluster around per-region targets, with region labels shown.
    Split,
}

impl Mode {
    /// Map a toolbar button id to a mode: `"region"` splits, anything else
    /// groups.
    pub fn from_button(id: &str) -> Self {
        if id == "region" { Mode::Split } else { Mode::Grouped }
    }
}

/// Row exactly as it appears in the source file (one country, one year).
///
/// `value` stays a string at this stage; conversion to [`Record`] validates it
/// and rejects rows where it is missing or non-numeric.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub country: String,
    pub region: String,
    pub year: i32,
    #[serde(default, deserialize_with = "value_as_string")]
    pub value: String,
    /// World Bank income group carried by the source data; informational only.
    #[serde(default)]
    pub group: Option<String>,
}

/// Accept the `value` field as either a string or a bare number (JSON written
/// by [`crate::storage::save_json`] carries numbers). Numbers are stringified
/// so all validation happens in one place, the [`Record`] conversion.
fn value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ValueVisitor)
}

/// Validated row used by the chart (one row = one bubble).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub country: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
    pub group: Option<String>,
}

impl TryFrom<RawRecord> for Record {
    type Error = ChartError;

    fn try_from(r: RawRecord) -> Result<Self, Self::Error> {
        let value = match r.value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                return Err(ChartError::InvalidValue {
                    id: r.id,
                    raw: r.value,
                });
            }
        };
        Ok(Record {
            id: r.id,
            country: r.country,
            region: r.region,
            year: r.year,
            value,
            group: r.group,
        })
    }
}

/// Visual entity for one record: a bubble plus its simulation state.
///
/// Positions are mutated in place by the tick update; velocities belong to
/// the force simulation and are not part of the public surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    /// Derived from `value` by an area-proportional scale.
    pub radius: f64,
    pub value: f64,
    /// Country name, shown in hover details.
    pub name: String,
    /// Category key: drives fill color and the split-mode target lookup.
    pub region: String,
    pub year: i32,
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    pub(crate) vx: f64,
    #[serde(skip)]
    pub(crate) vy: f64,
}

/// Immutable description of what to draw: which dataset, which year, which
/// layout mode. Passed into [`crate::Chart::render`] instead of living in
/// mutable globals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Dataset identifier (for the CLI: the input file it was loaded from).
    pub dataset: String,
    /// Restrict to one year; `None` keeps every row.
    pub year: Option<i32>,
    pub mode: Mode,
}

impl ChartRequest {
    pub fn new(dataset: impl Into<String>, year: Option<i32>, mode: Mode) -> Self {
        Self {
            dataset: dataset.into(),
            year,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, value: &str) -> RawRecord {
        RawRecord {
            id: id.into(),
            country: "Testland".into(),
            region: "Europe".into(),
            year: 2014,
            value: value.into(),
            group: None,
        }
    }

    #[test]
    fn numeric_values_convert() {
        let rec = Record::try_from(raw("1", " 42.5 ")).unwrap();
        assert_eq!(rec.value, 42.5);
    }

    #[test]
    fn missing_or_junk_values_are_rejected() {
        for bad in ["", "n/a", "NaN", "inf"] {
            let err = Record::try_from(raw("7", bad)).unwrap_err();
            assert!(matches!(err, ChartError::InvalidValue { ref id, .. } if id == "7"));
        }
    }

    #[test]
    fn value_field_accepts_numbers_and_strings() {
        let from_number: RawRecord = serde_json::from_str(
            r#"{"id":"1","country":"X","region":"Europe","year":2014,"value":610.3}"#,
        )
        .unwrap();
        assert_eq!(Record::try_from(from_number).unwrap().value, 610.3);

        let from_string: RawRecord = serde_json::from_str(
            r#"{"id":"2","country":"X","region":"Europe","year":2014,"value":"12.4","group":null}"#,
        )
        .unwrap();
        assert_eq!(Record::try_from(from_string).unwrap().value, 12.4);
    }

    #[test]
    fn button_ids_map_to_modes() {
        assert_eq!(Mode::from_button("region"), Mode::Split);
        assert_eq!(Mode::from_button("all"), Mode::Grouped);
        assert_eq!(Mode::from_button(""), Mode::Grouped);
    }
}
