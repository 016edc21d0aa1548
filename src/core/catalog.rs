//! # Catalog
//!
//! The fixed list of car body styles. Built once as a `static` table and
//! never mutated; every consumer borrows `&'static CarType`.
//!
//! A record is addressed by [`CarId`], its position in the table. That id is
//! the only payload that crosses from the list screen to the detail screen.

use serde::Serialize;
use std::fmt;

use crate::core::image::ImageRef;

/// One catalog record describing a car body style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarType {
    pub name: &'static str,
    pub image: ImageRef,
    /// Ordered. May contain empty strings as placeholders.
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

impl CarType {
    /// Stand-in for a record that could not be found.
    pub const PLACEHOLDER: CarType = CarType {
        name: "",
        image: ImageRef::DEFAULT,
        pros: &[],
        cons: &[],
    };
}

/// Position of a record in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub usize);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static CATALOG: [CarType; 9] = [
    CarType {
        name: "SUV",
        image: ImageRef::new("suv"),
        pros: &["Spacious interior", "More ground clearance"],
        cons: &["Less fuel efficient", "More expensive"],
    },
    CarType {
        name: "Sedan",
        image: ImageRef::new("sedan"),
        pros: &["More fuel efficient", "Cheaper"],
        cons: &["Relatively small", "Less powerful"],
    },
    CarType {
        name: "Van",
        image: ImageRef::new("van"),
        pros: &["Very spacious interior", ""],
        cons: &["Less fuel efficient", "More expensive to maintain"],
    },
    CarType {
        name: "Truck",
        image: ImageRef::new("truck"),
        pros: &["Towing Capabilities", "More powerful"],
        cons: &["Less fuel efficient", "Expensive to maintain"],
    },
    CarType {
        name: "Compact",
        image: ImageRef::new("compact"),
        pros: &["Fuel Efficient", "Budget friendly"],
        cons: &["Less room", "Less safety features"],
    },
    CarType {
        name: "Hatch back",
        image: ImageRef::new("hatchback"),
        pros: &["More Cargo room", "Fuel efficient"],
        cons: &["Less powerful"],
    },
    CarType {
        name: "Sport",
        image: ImageRef::new("sport"),
        pros: &["Aerodynamic", "More powerful"],
        cons: &["Less fuel efficient", "Expensive to maintain"],
    },
    CarType {
        name: "Off Roader",
        image: ImageRef::new("offroad"),
        pros: &["More ground clearance", "AWD"],
        cons: &["Less fuel efficient", "Expensive to maintain"],
    },
    CarType {
        name: "Mini Van",
        image: ImageRef::new("minivan"),
        pros: &["More room", "More powerful"],
        cons: &["Less fuel efficient", "Expensive to maintain"],
    },
];

/// All car types in display order.
pub fn list_car_types() -> &'static [CarType] {
    &CATALOG
}

pub fn car(id: CarId) -> Option<&'static CarType> {
    CATALOG.get(id.0)
}

/// Case-insensitive lookup by display name, ignoring surrounding whitespace.
pub fn find_by_name(name: &str) -> Option<CarId> {
    let wanted = name.trim();
    CATALOG
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(wanted))
        .map(CarId)
}

/// Ids of every record, in display order.
pub fn ids() -> impl Iterator<Item = CarId> {
    (0..CATALOG.len()).map(CarId)
}
