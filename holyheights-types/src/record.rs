use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel the record feed uses for a missing value.
pub const MISSING: &str = "NA";

/// One row of a tabular feed, keyed by column header.
///
/// Values are kept verbatim; [`RawRow::field`] applies the missing-value
/// convention (`"NA"` or blank means absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(BTreeMap<String, String>);

impl RawRow {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// The verbatim cell value, if the column exists.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// The cell value, or `None` when the column is absent, blank, or `"NA"`.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.raw(column)
            .filter(|value| !value.is_empty() && *value != MISSING)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// External reference links for a building, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceLinks {
    /// Wikipedia article URL (`source1` in the feed)
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

/// A building as it stood at one sampled year.
///
/// The dataset is long-form: a building appears once per sampled year, and
/// only rows with a positive `height_at_year` describe a standing building.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub name: String,
    pub religion_origin: Option<String>,
    pub religion_current: Option<String>,
    pub religion_group: Option<String>,
    #[serde(rename = "type")]
    pub building_type: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub construction_start: Option<i32>,
    pub construction_end: Option<i32>,
    pub destruction_year: Option<i32>,
    /// The sampled year this row describes
    pub year: Option<i32>,
    /// Height in meters at `year`
    pub height_at_year: Option<f64>,
    pub height_m: Option<f64>,
    pub max_height: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Normalized scrub coordinate for `year`; non-uniformly spaced
    pub slider_pos: Option<f64>,
    pub tick_label: Option<String>,
    /// True when the feed marks the building destroyed as of `year`
    pub destruction_flag: bool,
    pub sources: SourceLinks,
}

impl BuildingRecord {
    /// Coerce a raw feed row into a record.
    ///
    /// Numeric columns use prefix parsing (`"1250.0"` is year 1250, `"80m"` is
    /// 80.0); anything unparseable becomes `None` rather than an error.
    pub fn from_row(row: &RawRow) -> Self {
        let text = |column: &str| row.field(column).map(str::to_string);
        let year = |column: &str| row.field(column).and_then(parse_int_prefix);
        let number = |column: &str| row.field(column).and_then(parse_float_prefix);

        Self {
            name: row.raw("name").unwrap_or_default().to_string(),
            religion_origin: text("religion_origin"),
            religion_current: text("religion_current"),
            religion_group: text("religion_group"),
            building_type: text("type"),
            country: text("country"),
            continent: text("continent"),
            construction_start: year("construction_start"),
            construction_end: year("construction_end"),
            destruction_year: year("destruction_year"),
            year: year("year"),
            height_at_year: number("height_at_year"),
            height_m: number("height_m"),
            max_height: number("max_height"),
            latitude: number("latitude"),
            longitude: number("longitude"),
            slider_pos: number("slider_pos").filter(|p| p.is_finite()),
            tick_label: text("tick_label"),
            destruction_flag: row.raw("destruction_flag") == Some("Yes"),
            sources: SourceLinks {
                primary: text("source1"),
                secondary: text("source2"),
                tertiary: text("source3"),
            },
        }
    }

    /// Height at the sampled year, when it is a finite positive number.
    pub fn standing_height(&self) -> Option<f64> {
        self.height_at_year.filter(|h| h.is_finite() && *h > 0.0)
    }

    pub fn is_standing(&self) -> bool {
        self.standing_height().is_some()
    }

    /// Geographic position (x = longitude, y = latitude), when both are finite.
    pub fn location(&self) -> Option<Point> {
        match (self.longitude, self.latitude) {
            (Some(lng), Some(lat)) if lng.is_finite() && lat.is_finite() => {
                Some(Point::new(lng, lat))
            }
            _ => None,
        }
    }
}

/// Parse the leading integer of `input`, ignoring any trailing text.
///
/// ```
/// use holyheights_types::record::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("1250.0"), Some(1250));
/// assert_eq!(parse_int_prefix(" -300 BCE"), Some(-300));
/// assert_eq!(parse_int_prefix("c. 1200"), None);
/// ```
pub fn parse_int_prefix(input: &str) -> Option<i32> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parse the longest leading decimal number of `input`.
///
/// ```
/// use holyheights_types::record::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("80"), Some(80.0));
/// assert_eq!(parse_float_prefix("0.25x"), Some(0.25));
/// assert_eq!(parse_float_prefix(".5"), Some(0.5));
/// assert_eq!(parse_float_prefix("NaN"), None);
/// ```
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_missing_values_become_none() {
        let record = BuildingRecord::from_row(&row(&[
            ("name", "Hagia Sophia"),
            ("religion_group", "NA"),
            ("continent", ""),
            ("year", "NA"),
            ("height_at_year", "NA"),
        ]));

        assert_eq!(record.name, "Hagia Sophia");
        assert!(record.religion_group.is_none());
        assert!(record.continent.is_none());
        assert!(record.year.is_none());
        assert!(!record.is_standing());
    }

    #[test]
    fn test_numeric_columns_use_prefix_parsing() {
        let record = BuildingRecord::from_row(&row(&[
            ("year", "1300.0"),
            ("height_at_year", "55.7"),
            ("slider_pos", "0.42"),
            ("construction_start", "-2560"),
        ]));

        assert_eq!(record.year, Some(1300));
        assert_eq!(record.height_at_year, Some(55.7));
        assert_eq!(record.slider_pos, Some(0.42));
        assert_eq!(record.construction_start, Some(-2560));
    }

    #[test]
    fn test_non_positive_height_is_not_standing() {
        let zero = BuildingRecord::from_row(&row(&[("height_at_year", "0")]));
        let negative = BuildingRecord::from_row(&row(&[("height_at_year", "-1")]));
        let garbage = BuildingRecord::from_row(&row(&[("height_at_year", "tall")]));

        assert!(!zero.is_standing());
        assert!(!negative.is_standing());
        assert!(!garbage.is_standing());
    }

    #[test]
    fn test_destruction_flag_requires_literal_yes() {
        let yes = BuildingRecord::from_row(&row(&[("destruction_flag", "Yes")]));
        let lower = BuildingRecord::from_row(&row(&[("destruction_flag", "yes")]));
        let no = BuildingRecord::from_row(&row(&[("destruction_flag", "No")]));

        assert!(yes.destruction_flag);
        assert!(!lower.destruction_flag);
        assert!(!no.destruction_flag);
    }

    #[test]
    fn test_location_needs_both_coordinates() {
        let full = BuildingRecord::from_row(&row(&[("latitude", "48.85"), ("longitude", "2.35")]));
        let partial = BuildingRecord::from_row(&row(&[("latitude", "48.85")]));

        let point = full.location().unwrap();
        assert_eq!(point.x(), 2.35);
        assert_eq!(point.y(), 48.85);
        assert!(partial.location().is_none());
    }

    #[test]
    fn test_float_prefix_handles_exponents_and_junk() {
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("abc"), None);
    }

    #[test]
    fn test_int_prefix_rejects_overflow() {
        assert_eq!(parse_int_prefix("99999999999"), None);
        assert_eq!(parse_int_prefix("+42"), Some(42));
    }
}
