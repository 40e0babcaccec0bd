use serde::{Deserialize, Serialize};

/// Fixed catalog of the 22 vehicle components covered by an inspection.
/// Declaration order is the print order; `Ord` on the enum relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionElement {
    Bodywork,
    Windshield,
    FrontLights,
    RearLights,
    Mirrors,
    FrontTires,
    RearTires,
    SpareTire,
    Battery,
    EngineOil,
    CoolantLevel,
    BrakeFluid,
    Brakes,
    Suspension,
    Steering,
    Exhaust,
    Horn,
    Wipers,
    SeatBelts,
    Upholstery,
    DashboardIndicators,
    AirConditioning,
}

impl InspectionElement {
    pub const COUNT: usize = 22;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Bodywork,
            Self::Windshield,
            Self::FrontLights,
            Self::RearLights,
            Self::Mirrors,
            Self::FrontTires,
            Self::RearTires,
            Self::SpareTire,
            Self::Battery,
            Self::EngineOil,
            Self::CoolantLevel,
            Self::BrakeFluid,
            Self::Brakes,
            Self::Suspension,
            Self::Steering,
            Self::Exhaust,
            Self::Horn,
            Self::Wipers,
            Self::SeatBelts,
            Self::Upholstery,
            Self::DashboardIndicators,
            Self::AirConditioning,
        ]
    }

    /// Stable key used for string-keyed lookups (form fields, API payloads).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bodywork => "bodywork",
            Self::Windshield => "windshield",
            Self::FrontLights => "front_lights",
            Self::RearLights => "rear_lights",
            Self::Mirrors => "mirrors",
            Self::FrontTires => "front_tires",
            Self::RearTires => "rear_tires",
            Self::SpareTire => "spare_tire",
            Self::Battery => "battery",
            Self::EngineOil => "engine_oil",
            Self::CoolantLevel => "coolant_level",
            Self::BrakeFluid => "brake_fluid",
            Self::Brakes => "brakes",
            Self::Suspension => "suspension",
            Self::Steering => "steering",
            Self::Exhaust => "exhaust",
            Self::Horn => "horn",
            Self::Wipers => "wipers",
            Self::SeatBelts => "seat_belts",
            Self::Upholstery => "upholstery",
            Self::DashboardIndicators => "dashboard_indicators",
            Self::AirConditioning => "air_conditioning",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bodywork => "Bodywork & Paint",
            Self::Windshield => "Windshield",
            Self::FrontLights => "Front Lights",
            Self::RearLights => "Rear Lights",
            Self::Mirrors => "Mirrors",
            Self::FrontTires => "Front Tires",
            Self::RearTires => "Rear Tires",
            Self::SpareTire => "Spare Tire",
            Self::Battery => "Battery",
            Self::EngineOil => "Engine Oil Level",
            Self::CoolantLevel => "Coolant Level",
            Self::BrakeFluid => "Brake Fluid",
            Self::Brakes => "Brakes",
            Self::Suspension => "Suspension",
            Self::Steering => "Steering",
            Self::Exhaust => "Exhaust System",
            Self::Horn => "Horn",
            Self::Wipers => "Windshield Wipers",
            Self::SeatBelts => "Seat Belts",
            Self::Upholstery => "Interior Upholstery",
            Self::DashboardIndicators => "Dashboard Indicators",
            Self::AirConditioning => "Air Conditioning",
        }
    }

    /// Resolve a string key against the catalog.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|element| element.key() == name)
    }
}

/// Tri-state inspection rating plus the Unrated default every element starts
/// with. Unrated deliberately renders blank on reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Fair,
    Poor,
    #[default]
    Unrated,
}

impl Condition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unrated => "",
        }
    }
}
