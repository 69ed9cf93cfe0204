//! Device color gamuts.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::ChromaticityPoint;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// The triangle of chromaticities a light can reproduce, spanned by its
/// red, green and blue primaries.
///
/// Gamuts reported by the bridge are trusted as-is; [`ColorGamut::validate`]
/// is an explicit opt-in check for degenerate triangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChromaticityPoint>", into = "[ChromaticityPoint; 3]")]
pub struct ColorGamut {
    red: ChromaticityPoint,
    green: ChromaticityPoint,
    blue: ChromaticityPoint,
}

impl ColorGamut {
    /// The gamut to assume for lights that do not report one.
    pub const FULL: ColorGamut = ColorGamut {
        red: ChromaticityPoint::at(1.0, 0.0),
        green: ChromaticityPoint::at(0.0, 1.0),
        blue: ChromaticityPoint::at(0.0, 0.0),
    };

    /// Gamut A: LivingColors, Bloom, Iris and the first LightStrips.
    pub const A: ColorGamut = ColorGamut {
        red: ChromaticityPoint::at(0.704, 0.296),
        green: ChromaticityPoint::at(0.2151, 0.7106),
        blue: ChromaticityPoint::at(0.138, 0.08),
    };

    /// Gamut B: first generation Hue bulbs.
    pub const B: ColorGamut = ColorGamut {
        red: ChromaticityPoint::at(0.675, 0.322),
        green: ChromaticityPoint::at(0.4091, 0.518),
        blue: ChromaticityPoint::at(0.167, 0.04),
    };

    /// Gamut C: current Hue bulbs and LightStrip Plus.
    pub const C: ColorGamut = ColorGamut {
        red: ChromaticityPoint::at(0.692, 0.308),
        green: ChromaticityPoint::at(0.17, 0.7),
        blue: ChromaticityPoint::at(0.153, 0.048),
    };

    pub fn new(red: ChromaticityPoint, green: ChromaticityPoint, blue: ChromaticityPoint) -> Self {
        Self { red, green, blue }
    }

    /// Build a gamut from exactly three points in R, G, B order.
    pub fn from_points(points: &[ChromaticityPoint]) -> Result<Self> {
        match points {
            [red, green, blue] => Ok(Self::new(*red, *green, *blue)),
            _ => Err(Error::InvalidArgument(format!(
                "a gamut needs 3 points, got {}",
                points.len()
            ))),
        }
    }

    /// Look up one of the published gamuts by the bridge's `colorgamuttype` letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorGamut;
    ///
    /// assert_eq!(ColorGamut::from_gamut_type("C"), Some(ColorGamut::C));
    /// assert_eq!(ColorGamut::from_gamut_type("other"), None);
    /// ```
    pub fn from_gamut_type(gamut_type: &str) -> Option<Self> {
        match gamut_type {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    pub fn red(&self) -> ChromaticityPoint {
        self.red
    }

    pub fn green(&self) -> ChromaticityPoint {
        self.green
    }

    pub fn blue(&self) -> ChromaticityPoint {
        self.blue
    }

    /// Edges in projection order: R-G, G-B, B-R.
    fn edges(&self) -> [(ChromaticityPoint, ChromaticityPoint); 3] {
        [
            (self.red, self.green),
            (self.green, self.blue),
            (self.blue, self.red),
        ]
    }

    /// Fails with [`Error::DegenerateGeometry`] if any edge has zero length.
    pub fn validate(&self) -> Result<()> {
        for (start, end) in self.edges() {
            if start.distance_squared(&end) == 0.0 {
                return Err(Error::DegenerateGeometry {
                    x: start.x(),
                    y: start.y(),
                });
            }
        }
        Ok(())
    }

    /// Whether `point` lies inside the triangle or on its boundary.
    pub fn contains(&self, point: &ChromaticityPoint) -> bool {
        let d1 = sign(point, &self.red, &self.green);
        let d2 = sign(point, &self.green, &self.blue);
        let d3 = sign(point, &self.blue, &self.red);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }

    /// The reproducible chromaticity closest to `point`.
    ///
    /// Points inside the gamut come back unchanged. Anything else is
    /// projected onto the closest edge; on equal distances the earlier edge
    /// in R-G, G-B, B-R order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ChromaticityPoint, ColorGamut};
    ///
    /// let gamut = ColorGamut::default();
    /// let outside = ChromaticityPoint::new(1.0, 1.0).unwrap();
    /// let nearest = gamut.nearest_color(&outside);
    /// assert_eq!((nearest.x(), nearest.y()), (0.5, 0.5));
    /// ```
    pub fn nearest_color(&self, point: &ChromaticityPoint) -> ChromaticityPoint {
        if self.contains(point) {
            return *point;
        }

        let mut closest = *point;
        let mut lowest = f64::INFINITY;
        for (start, end) in self.edges() {
            let candidate = closest_point_on_segment(&start, &end, point);
            let distance = point.distance_squared(&candidate);
            if distance < lowest {
                lowest = distance;
                closest = candidate;
            }
        }

        debug!("projected {} onto gamut edge at {}", point, closest);
        closest
    }
}

impl Default for ColorGamut {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<Vec<ChromaticityPoint>> for ColorGamut {
    type Error = Error;

    fn try_from(points: Vec<ChromaticityPoint>) -> Result<Self> {
        Self::from_points(&points)
    }
}

impl From<ColorGamut> for [ChromaticityPoint; 3] {
    fn from(gamut: ColorGamut) -> Self {
        [gamut.red, gamut.green, gamut.blue]
    }
}

impl fmt::Display for ColorGamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R={}, G={}, B={}", self.red, self.green, self.blue)
    }
}

fn sign(p1: &ChromaticityPoint, p2: &ChromaticityPoint, p3: &ChromaticityPoint) -> f64 {
    (p1.x() - p3.x()) * (p2.y() - p3.y()) - (p2.x() - p3.x()) * (p1.y() - p3.y())
}

fn closest_point_on_segment(
    start: &ChromaticityPoint,
    end: &ChromaticityPoint,
    point: &ChromaticityPoint,
) -> ChromaticityPoint {
    let (abx, aby) = (end.x() - start.x(), end.y() - start.y());
    let (apx, apy) = (point.x() - start.x(), point.y() - start.y());

    let ab2 = abx * abx + aby * aby;
    if ab2 == 0.0 {
        debug!("degenerate gamut edge at {}, using its start point", start);
        return *start;
    }

    let t = ((apx * abx + apy * aby) / ab2).clamp(0.0, 1.0);
    ChromaticityPoint::at(start.x() + abx * t, start.y() + aby * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pt(x: f64, y: f64) -> ChromaticityPoint {
        ChromaticityPoint::new(x, y).unwrap()
    }

    #[test]
    fn test_default_is_full_triangle() {
        let gamut = ColorGamut::default();
        assert_eq!(gamut.red(), pt(1.0, 0.0));
        assert_eq!(gamut.green(), pt(0.0, 1.0));
        assert_eq!(gamut.blue(), pt(0.0, 0.0));
    }

    #[test]
    fn test_centroid_is_unchanged() {
        let gamut = ColorGamut::C;
        let centroid = pt(
            (0.692 + 0.17 + 0.153) / 3.0,
            (0.308 + 0.7 + 0.048) / 3.0,
        );
        assert!(gamut.contains(&centroid));
        assert_eq!(gamut.nearest_color(&centroid), centroid);
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let gamut = ColorGamut::default();
        assert!(gamut.contains(&pt(0.5, 0.5)));
        assert!(gamut.contains(&pt(1.0, 0.0)));
        assert!(gamut.contains(&pt(0.0, 0.3)));
        assert!(!gamut.contains(&pt(0.6, 0.6)));
    }

    #[test]
    fn test_projects_onto_each_edge() {
        let gamut = ColorGamut::default();

        // R-G hypotenuse
        assert_eq!(gamut.nearest_color(&pt(1.0, 1.0)), pt(0.5, 0.5));
        // G-B along the y axis
        assert_eq!(gamut.nearest_color(&pt(-0.5, 0.5)), pt(0.0, 0.5));
        // B-R along the x axis
        assert_eq!(gamut.nearest_color(&pt(0.5, -0.2)), pt(0.5, 0.0));
        // Beyond a vertex the projection clamps to the segment end
        assert_eq!(gamut.nearest_color(&pt(2.0, -1.0)), pt(1.0, 0.0));
    }

    #[test]
    fn test_projection_onto_gamut_c() {
        // A yellow-green beyond gamut C lands inside the R-G edge.
        let gamut = ColorGamut::C;
        let outside = pt(0.5, 0.6);
        assert!(!gamut.contains(&outside));
        let nearest = gamut.nearest_color(&outside);

        let (ax, ay) = (0.692, 0.308);
        let (bx, by) = (0.17 - ax, 0.7 - ay);
        let t = ((0.5 - ax) * bx + (0.6 - ay) * by) / (bx * bx + by * by);
        assert!(t > 0.0 && t < 1.0);
        assert_abs_diff_eq!(nearest.x(), ax + bx * t, epsilon = 1e-12);
        assert_abs_diff_eq!(nearest.y(), ay + by * t, epsilon = 1e-12);

        // Beyond the red primary the projection clamps to the vertex.
        let nearest = gamut.nearest_color(&pt(0.75, 0.3));
        assert_abs_diff_eq!(nearest.x(), 0.692, epsilon = 1e-12);
        assert_abs_diff_eq!(nearest.y(), 0.308, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_edge_does_not_divide_by_zero() {
        let gamut = ColorGamut::new(pt(0.3, 0.3), pt(0.3, 0.3), pt(0.6, 0.3));

        assert_eq!(
            gamut.validate(),
            Err(Error::DegenerateGeometry { x: 0.3, y: 0.3 })
        );

        let nearest = gamut.nearest_color(&pt(0.5, 0.5));
        assert_abs_diff_eq!(nearest.x(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(nearest.y(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_named_gamuts() {
        for gamut in [ColorGamut::FULL, ColorGamut::A, ColorGamut::B, ColorGamut::C] {
            assert!(gamut.validate().is_ok());
        }
    }

    #[test]
    fn test_from_points_arity() {
        assert!(ColorGamut::from_points(&[pt(0.1, 0.1), pt(0.2, 0.2)]).is_err());
        let gamut = ColorGamut::from_points(&[pt(0.7, 0.3), pt(0.2, 0.7), pt(0.15, 0.05)]).unwrap();
        assert_eq!(gamut.green(), pt(0.2, 0.7));
    }

    #[test]
    fn test_deserialize_bridge_gamut() {
        let gamut: ColorGamut =
            serde_json::from_str("[[0.6915,0.3083],[0.17,0.7],[0.1532,0.0475]]").unwrap();
        assert_eq!(gamut.red(), pt(0.6915, 0.3083));
        assert_eq!(gamut.blue(), pt(0.1532, 0.0475));

        assert!(serde_json::from_str::<ColorGamut>("[[0.6915,0.3083],[0.17,0.7]]").is_err());
    }
}
