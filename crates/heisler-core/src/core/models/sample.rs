use super::geometry::Geometry;
use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};

/// A calculation request as it arrives from a transport layer.
///
/// Field names match the wire format. The geometry is kept as a raw string so
/// that an unknown tag is reported as [`EngineError::UnsupportedGeometry`]
/// rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvectionRequest {
    pub thickness: f64,
    #[serde(default)]
    pub thermal_diffusivity: Option<f64>,
    pub conductivity_coefficient: f64,
    pub convection_coefficient: f64,
    pub initial_temperature: f64,
    pub ambient_temperature: f64,
    pub density: f64,
    pub specific_heat: f64,
    pub distance: f64,
    pub time: f64,
    pub iterations: usize,
    #[serde(default)]
    pub biot: Option<f64>,
    pub geometry: String,
}

/// Validated thermophysical description of one body and one evaluation point.
///
/// Units are up to the caller but must be consistent (SI is assumed in the
/// documentation of derived quantities).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSample {
    /// Full thickness of the plate, or diameter of the cylinder/sphere.
    pub thickness: f64,
    /// `None` means "derive as k/(ρ·cp)".
    pub thermal_diffusivity: Option<f64>,
    pub conductivity_coefficient: f64,
    pub convection_coefficient: f64,
    pub initial_temperature: f64,
    pub ambient_temperature: f64,
    pub density: f64,
    pub specific_heat: f64,
    /// Distance from the center plane or axis.
    pub distance: f64,
    pub time: f64,
    /// Number of updates applied to each eigenvalue branch.
    pub iterations: usize,
    /// `None` means "derive as h·Lc/k".
    pub biot: Option<f64>,
    pub geometry: Geometry,
}

impl MaterialSample {
    pub fn builder(geometry: Geometry) -> MaterialSampleBuilder {
        MaterialSampleBuilder::new(geometry)
    }

    /// Returns a copy evaluated at a different time, re-validated.
    pub fn at_time(&self, time: f64) -> Result<Self, EngineError> {
        let sample = Self {
            time,
            ..self.clone()
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Returns a copy evaluated at a different distance, re-validated.
    pub fn at_distance(&self, distance: f64) -> Result<Self, EngineError> {
        let sample = Self {
            distance,
            ..self.clone()
        };
        sample.validate()?;
        Ok(sample)
    }

    fn validate(&self) -> Result<(), EngineError> {
        require_positive("thickness", self.thickness)?;
        require_positive("density", self.density)?;
        require_positive("specific_heat", self.specific_heat)?;
        require_positive("conductivity_coefficient", self.conductivity_coefficient)?;
        require_non_negative("time", self.time)?;
        require_non_negative("distance", self.distance)?;
        require_finite("convection_coefficient", self.convection_coefficient)?;
        require_finite("initial_temperature", self.initial_temperature)?;
        require_finite("ambient_temperature", self.ambient_temperature)?;

        if let Some(alpha) = self.thermal_diffusivity {
            require_non_negative("thermal_diffusivity", alpha)?;
        }
        if let Some(biot) = self.biot {
            require_finite("biot", biot)?;
        }
        if self.iterations == 0 {
            return Err(EngineError::InvalidInput {
                field: "iterations",
                value: 0.0,
                reason: "at least one iteration is required",
            });
        }
        Ok(())
    }
}

impl TryFrom<ConvectionRequest> for MaterialSample {
    type Error = EngineError;

    fn try_from(request: ConvectionRequest) -> Result<Self, Self::Error> {
        let geometry: Geometry = request.geometry.parse()?;
        let sample = Self {
            thickness: request.thickness,
            thermal_diffusivity: request.thermal_diffusivity,
            conductivity_coefficient: request.conductivity_coefficient,
            convection_coefficient: request.convection_coefficient,
            initial_temperature: request.initial_temperature,
            ambient_temperature: request.ambient_temperature,
            density: request.density,
            specific_heat: request.specific_heat,
            distance: request.distance,
            time: request.time,
            iterations: request.iterations,
            biot: request.biot,
            geometry,
        };
        sample.validate()?;
        Ok(sample)
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), EngineError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        })
    }
}

pub struct MaterialSampleBuilder {
    geometry: Geometry,
    thickness: Option<f64>,
    thermal_diffusivity: Option<f64>,
    conductivity_coefficient: Option<f64>,
    convection_coefficient: f64,
    initial_temperature: f64,
    ambient_temperature: f64,
    density: Option<f64>,
    specific_heat: Option<f64>,
    distance: f64,
    time: f64,
    iterations: usize,
    biot: Option<f64>,
}

impl MaterialSampleBuilder {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            thickness: None,
            thermal_diffusivity: None,
            conductivity_coefficient: None,
            convection_coefficient: 0.0,
            initial_temperature: 0.0,
            ambient_temperature: 0.0,
            density: None,
            specific_heat: None,
            distance: 0.0,
            time: 0.0,
            iterations: 100,
            biot: None,
        }
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }
    pub fn thermal_diffusivity(mut self, alpha: f64) -> Self {
        self.thermal_diffusivity = Some(alpha);
        self
    }
    pub fn conductivity_coefficient(mut self, k: f64) -> Self {
        self.conductivity_coefficient = Some(k);
        self
    }
    pub fn convection_coefficient(mut self, h: f64) -> Self {
        self.convection_coefficient = h;
        self
    }
    pub fn temperatures(mut self, initial: f64, ambient: f64) -> Self {
        self.initial_temperature = initial;
        self.ambient_temperature = ambient;
        self
    }
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }
    pub fn specific_heat(mut self, cp: f64) -> Self {
        self.specific_heat = Some(cp);
        self
    }
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
    pub fn time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    pub fn biot(mut self, biot: f64) -> Self {
        self.biot = Some(biot);
        self
    }

    pub fn build(self) -> Result<MaterialSample, EngineError> {
        let sample = MaterialSample {
            thickness: self.thickness.ok_or(EngineError::MissingInput("thickness"))?,
            thermal_diffusivity: self.thermal_diffusivity,
            conductivity_coefficient: self
                .conductivity_coefficient
                .ok_or(EngineError::MissingInput("conductivity_coefficient"))?,
            convection_coefficient: self.convection_coefficient,
            initial_temperature: self.initial_temperature,
            ambient_temperature: self.ambient_temperature,
            density: self.density.ok_or(EngineError::MissingInput("density"))?,
            specific_heat: self
                .specific_heat
                .ok_or(EngineError::MissingInput("specific_heat"))?,
            distance: self.distance,
            time: self.time,
            iterations: self.iterations,
            biot: self.biot,
            geometry: self.geometry,
        };
        sample.validate()?;
        Ok(sample)
    }
}
