//! # Routes
//!
//! The two screens of the navigator and their textual names.
//!
//! ```text
//! carList                 → Route::List
//! carDetails/<id>         → Route::Detail(CarId(id))
//! ```
//!
//! Only the catalog id travels with a detail route. The detail screen looks
//! the record up again through [`DetailView::resolve`], so pros and cons are
//! never flattened into a string and split back apart.

use std::fmt;
use std::str::FromStr;

use crate::core::catalog::{self, CarId, CarType};

const LIST_ROUTE: &str = "carList";
const DETAIL_PREFIX: &str = "carDetails/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(CarId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str(LIST_ROUTE),
            Route::Detail(id) => write!(f, "{DETAIL_PREFIX}{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
    #[error("invalid car id in route: {0}")]
    InvalidId(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LIST_ROUTE {
            return Ok(Route::List);
        }
        match s.strip_prefix(DETAIL_PREFIX) {
            Some(id) => id
                .parse::<usize>()
                .map(|id| Route::Detail(CarId(id)))
                .map_err(|_| RouteError::InvalidId(id.to_string())),
            None => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

/// What the detail screen shows for one selection.
///
/// Fields are borrowed from the static catalog, so the lists are the
/// catalog's own slices: same length, same order, empty strings intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView {
    pub id: CarId,
    pub car: &'static CarType,
    /// False when the id had no record and the placeholder was substituted.
    pub found: bool,
}

impl DetailView {
    /// Look up `id`, substituting [`CarType::PLACEHOLDER`] if it is unknown.
    pub fn resolve(id: CarId) -> Self {
        match catalog::car(id) {
            Some(car) => Self {
                id,
                car,
                found: true,
            },
            None => {
                log::warn!("No car with id {id}, showing placeholder");
                Self {
                    id,
                    car: &CarType::PLACEHOLDER,
                    found: false,
                }
            }
        }
    }

    pub fn title(&self) -> &'static str {
        self.car.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::ImageRef;

    #[test]
    fn test_route_display() {
        assert_eq!(Route::List.to_string(), "carList");
        assert_eq!(Route::Detail(CarId(4)).to_string(), "carDetails/4");
    }

    #[test]
    fn test_route_parse() {
        assert_eq!("carList".parse::<Route>(), Ok(Route::List));
        assert_eq!("carDetails/8".parse::<Route>(), Ok(Route::Detail(CarId(8))));
    }

    #[test]
    fn test_route_parse_rejects_malformed_id() {
        assert_eq!(
            "carDetails/".parse::<Route>(),
            Err(RouteError::InvalidId(String::new()))
        );
        assert_eq!(
            "carDetails/Sedan".parse::<Route>(),
            Err(RouteError::InvalidId("Sedan".to_string()))
        );
        assert!(matches!(
            "settings".parse::<Route>(),
            Err(RouteError::Unknown(_))
        ));
    }

    #[test]
    fn test_resolve_known_id() {
        let view = DetailView::resolve(CarId(1));
        assert!(view.found);
        assert_eq!(view.title(), "Sedan");
        assert_eq!(view.car.pros, ["More fuel efficient", "Cheaper"]);
        assert_eq!(view.car.cons, ["Relatively small", "Less powerful"]);
    }

    #[test]
    fn test_resolve_unknown_id_uses_defaults() {
        let view = DetailView::resolve(CarId(42));
        assert!(!view.found);
        assert_eq!(view.title(), "");
        assert!(view.car.pros.is_empty());
        assert!(view.car.cons.is_empty());
        assert_eq!(view.car.image, ImageRef::DEFAULT);
    }
}
