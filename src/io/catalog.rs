//! Orbital-element catalogs stored as JSON, one field per line.
//!
//! ```json
//! [
//!   {
//!     "name": "Mars",
//!     "mass": 6.4171e23,
//!     "semiMajorAxis": 1.52371034,
//!     "eccentricity": 0.09339410,
//!     "orbitalInclination": 1.84969142,
//!     "longitudeOfAscendingNode": 49.55953891,
//!     "longitudeOfPerihelion": -23.94362959,
//!     "meanAnomaly": 19.39019754
//!   }
//! ]
//! ```
//!
//! Distances are in AU and angles in degrees, as in published element
//! tables. A record ends at its closing brace; fields of objects nested
//! inside a record are skipped.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::configuration::config::BodyConfig;
use crate::error::{SimError, SimResult};
use crate::io::json::field_from_json_line;
use crate::simulation::constants::M_SUN;

const FIELDS: [&str; 8] = [
    "name",
    "mass",
    "semiMajorAxis",
    "eccentricity",
    "orbitalInclination",
    "longitudeOfAscendingNode",
    "longitudeOfPerihelion",
    "meanAnomaly",
];

pub fn load_catalog(path: &Path) -> SimResult<Vec<BodyConfig>> {
    let text = std::fs::read_to_string(path)?;
    let bodies = parse_catalog(&text)?;
    debug!(path = %path.display(), count = bodies.len(), "loaded element catalog");
    Ok(bodies)
}

pub fn parse_catalog(text: &str) -> SimResult<Vec<BodyConfig>> {
    let mut bodies = Vec::new();
    let mut record: HashMap<String, String> = HashMap::new();
    // 1 inside a record, deeper inside objects nested in it
    let mut depth = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        if let Some((key, value)) = field_from_json_line(line) {
            if depth == 1 {
                record.insert(key, value);
            }
            continue;
        }
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && !record.is_empty() {
                        bodies.push(to_body(&record, lineno + 1)?);
                        record.clear();
                    }
                }
                _ => {}
            }
        }
    }
    if depth != 0 || !record.is_empty() {
        return Err(SimError::Catalog("unterminated record at end of catalog".to_string()));
    }
    Ok(bodies)
}

fn to_body(record: &HashMap<String, String>, lineno: usize) -> SimResult<BodyConfig> {
    let text = |key: &str| {
        record
            .get(key)
            .ok_or_else(|| SimError::Catalog(format!("record ending on line {lineno} is missing `{key}`")))
    };
    let number = |key: &str| -> SimResult<f64> {
        let raw = text(key)?;
        raw.parse()
            .map_err(|_| SimError::Catalog(format!("`{key}` on record ending line {lineno} is not a number: {raw}")))
    };

    for key in record.keys() {
        if !FIELDS.contains(&key.as_str()) {
            debug!(key = %key, lineno, "ignoring unknown catalog field");
        }
    }

    Ok(BodyConfig::Elements {
        name: text("name")?.clone(),
        m: number("mass")?,
        a: number("semiMajorAxis")?,
        e: number("eccentricity")?,
        i: number("orbitalInclination")?,
        long_node: number("longitudeOfAscendingNode")?,
        long_peri: number("longitudeOfPerihelion")?,
        mean_anomaly: number("meanAnomaly")?,
        central_mass: M_SUN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
  {
    "name": "Mars",
    "mass": 6.4171e23,
    "semiMajorAxis": 1.52371034,
    "eccentricity": 0.09339410,
    "orbitalInclination": 1.84969142,
    "longitudeOfAscendingNode": 49.55953891,
    "longitudeOfPerihelion": -23.94362959,
    "meanAnomaly": 19.39019754,
    "color": "red"
  },
  {
    "name": "Venus",
    "mass": 4.8675e24,
    "semiMajorAxis": 0.72333566,
    "eccentricity": 0.00677672,
    "orbitalInclination": 3.39467605,
    "longitudeOfAscendingNode": 76.67984255,
    "longitudeOfPerihelion": 131.60246718,
    "meanAnomaly": 50.11
  }
]"#;

    #[test]
    fn reads_every_record() {
        let bodies = parse_catalog(CATALOG).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].name(), "Mars");
        match &bodies[1] {
            BodyConfig::Elements { a, m, .. } => {
                assert_eq!(*a, 0.72333566);
                assert_eq!(*m, 4.8675e24);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_reported() {
        let text = "[\n {\n \"name\": \"X\",\n \"mass\": 1.0\n }\n]";
        let err = parse_catalog(text).unwrap_err();
        assert!(err.to_string().contains("semiMajorAxis"), "{err}");
    }

    #[test]
    fn nested_objects_stay_inside_their_record() {
        let text = CATALOG.replace(
            "    \"color\": \"red\"\n",
            "    \"orbit\": {\n      \"name\": \"inner\",\n      \"epoch\": 2000\n    },\n    \"color\": \"red\"\n",
        );
        assert!(text.contains("\"orbit\": {"));

        let bodies = parse_catalog(&text).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].name(), "Mars");
    }

    #[test]
    fn unterminated_record_is_reported() {
        let text = "[\n {\n \"name\": \"X\",\n \"mass\": 1.0\n";
        assert!(matches!(parse_catalog(text), Err(SimError::Catalog(_))));
    }

    #[test]
    fn non_numeric_field_is_reported() {
        let text = CATALOG.replace("0.09339410", "\"high\"");
        assert!(matches!(parse_catalog(&text), Err(SimError::Catalog(_))));
    }
}
