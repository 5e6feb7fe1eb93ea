use crate::engine::error::EngineError;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static GEOMETRY_ALIASES: Map<&'static str, Geometry> = phf_map! {
    "plate" => Geometry::Slab,
    "slab" => Geometry::Slab,
    "cylinder" => Geometry::Cylinder,
    "sphere" => Geometry::Sphere,
};

/// The three one-dimensional bodies covered by the series solution.
///
/// Every stage that branches on geometry matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Geometry {
    /// Infinite plate of thickness `2·Lc`, cooled on both faces.
    Slab,
    /// Long cylinder of radius `Lc`.
    Cylinder,
    /// Sphere of radius `Lc`.
    Sphere,
}

impl Geometry {
    pub const ALL: [Geometry; 3] = [Geometry::Slab, Geometry::Cylinder, Geometry::Sphere];

    pub fn name(self) -> &'static str {
        match self {
            Geometry::Slab => "plate",
            Geometry::Cylinder => "cylinder",
            Geometry::Sphere => "sphere",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        GEOMETRY_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| EngineError::UnsupportedGeometry {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Geometry {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Geometry> for String {
    fn from(geometry: Geometry) -> Self {
        geometry.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("plate".parse::<Geometry>().unwrap(), Geometry::Slab);
        assert_eq!("cylinder".parse::<Geometry>().unwrap(), Geometry::Cylinder);
        assert_eq!("sphere".parse::<Geometry>().unwrap(), Geometry::Sphere);
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims_whitespace() {
        assert_eq!(" Plate ".parse::<Geometry>().unwrap(), Geometry::Slab);
        assert_eq!("CYLINDER".parse::<Geometry>().unwrap(), Geometry::Cylinder);
        assert_eq!("sPhErE".parse::<Geometry>().unwrap(), Geometry::Sphere);
    }

    #[test]
    fn slab_is_accepted_as_an_alias_for_plate() {
        assert_eq!("slab".parse::<Geometry>().unwrap(), Geometry::Slab);
    }

    #[test]
    fn unknown_geometry_is_rejected_with_the_given_name() {
        let err = "cube".parse::<Geometry>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnsupportedGeometry {
                name: "cube".to_string()
            }
        );
    }

    #[test]
    fn display_uses_canonical_names() {
        let names: Vec<String> = Geometry::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(names, vec!["plate", "cylinder", "sphere"]);
    }
}
