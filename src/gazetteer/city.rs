//! City records

use crate::coordinate::GeoPoint;

/// One gazetteer entry
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    /// Key shown in suggestions and used for exact lookups: "Name, Country"
    pub fn search_key(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// The city's location as a jump target
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}
