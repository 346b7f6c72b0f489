//! Human-readable summary of final body states.

use crate::simulation::constants::{M_PER_AU, M_PER_KM};
use crate::simulation::states::CelestialBody;

/// One block per body: position in AU, velocity in km/s, mass in kg
pub fn format_results(bodies: &[CelestialBody]) -> String {
    bodies.iter().map(format_body).collect()
}

fn format_body(b: &CelestialBody) -> String {
    let p = b.x / M_PER_AU;
    let v = b.v / M_PER_KM;
    format!(
        "{}\n  position (AU):   [{:>13.6}, {:>13.6}, {:>13.6}]\n  velocity (km/s): [{:>13.6}, {:>13.6}, {:>13.6}]\n  mass (kg):       {:.4e}\n",
        b.name, p.x, p.y, p.z, v.x, v.y, v.z, b.m
    )
}

pub fn print_results(bodies: &[CelestialBody]) {
    print!("{}", format_results(bodies));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Coord;

    #[test]
    fn converts_to_display_units() {
        let earth = CelestialBody::new(
            "Earth",
            5.9722e24,
            Coord::new(M_PER_AU, 0.0, 0.0),
            Coord::new(0.0, 29_780.0, 0.0),
        )
        .unwrap();

        let text = format_results(&[earth]);
        assert!(text.starts_with("Earth\n"));
        assert!(text.contains("1.000000"));
        assert!(text.contains("29.780000"));
        assert!(text.contains("5.9722e24"));
    }

    #[test]
    fn one_block_per_body() {
        let a = CelestialBody::new("A", 1.0, Coord::zeros(), Coord::zeros()).unwrap();
        let b = CelestialBody::new("B", 2.0, Coord::new(0.0, M_PER_AU, 0.0), Coord::zeros()).unwrap();

        let text = format_results(&[a, b]);
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(4), Some("B"));
        assert!(text.ends_with('\n'));
        assert_eq!(format_results(&[]), "");
    }
}
