//! Vehicle classes.

use std::fmt;

use lg_core::VehicleTypeId;

/// An RGB display colour with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// The simulator's `r,g,b` attribute form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Mobility class of a vehicle type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MobilityClass {
    /// Unconstrained car; the simulator's default class.
    Car,
    /// Car allowed to use accessibility-reserved spaces.
    Accessible,
    Pedestrian,
}

impl MobilityClass {
    /// The simulator `vClass` to write, if it differs from the default.
    pub fn sumo_vclass(self) -> Option<&'static str> {
        match self {
            MobilityClass::Car | MobilityClass::Accessible => None,
            MobilityClass::Pedestrian => Some("pedestrian"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleType {
    pub id:    VehicleTypeId,
    pub color: Rgb,
    pub class: MobilityClass,
}

impl VehicleType {
    pub fn new(id: &str, color: Rgb, class: MobilityClass) -> Self {
        Self { id: VehicleTypeId::new(id), color, class }
    }
}

/// The fixed set of vehicle types every scenario declares.
#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    types: Vec<VehicleType>,
}

impl Fleet {
    pub fn new(types: Vec<VehicleType>) -> Self {
        Self { types }
    }

    /// `car`, `disabled` (accessible) and `ped_pedestrian`.
    pub fn standard() -> Self {
        Self {
            types: vec![
                VehicleType::new("car", Rgb::new(0.7, 0.0, 0.0), MobilityClass::Car),
                VehicleType::new("disabled", Rgb::new(0.0, 0.0, 0.7), MobilityClass::Accessible),
                VehicleType::new("ped_pedestrian", Rgb::new(1.0, 0.2, 0.2), MobilityClass::Pedestrian),
            ],
        }
    }

    pub fn types(&self) -> &[VehicleType] {
        &self.types
    }

    pub fn get(&self, id: &VehicleTypeId) -> Option<&VehicleType> {
        self.types.iter().find(|t| &t.id == id)
    }

    /// The first type of the given class.
    pub fn by_class(&self, class: MobilityClass) -> Option<&VehicleType> {
        self.types.iter().find(|t| t.class == class)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}
