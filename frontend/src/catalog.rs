//! Static storefront content
//!
//! The turf list and locations are fixed display data; no endpoint serves them.

use chrono::NaiveDate;

/// A turf card on the home screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turf {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// Already formatted for display
    pub price: &'static str,
    pub rating: f32,
    pub image: &'static str,
}

impl Turf {
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

pub const FEATURED_TURFS: [Turf; 4] = [
    Turf {
        id: 1,
        name: "Green Field Sports Complex",
        location: "Downtown Area",
        price: "₹500/hour",
        rating: 4.5,
        image: "🏟️",
    },
    Turf {
        id: 2,
        name: "Stars Cricket Academy",
        location: "North Zone",
        price: "₹600/hour",
        rating: 4.8,
        image: "⚽",
    },
    Turf {
        id: 3,
        name: "Elite Turf Arena",
        location: "South End",
        price: "₹450/hour",
        rating: 4.2,
        image: "🏟️",
    },
    Turf {
        id: 4,
        name: "Pro Cricket Ground",
        location: "East Valley",
        price: "₹700/hour",
        rating: 4.9,
        image: "⚽",
    },
];

pub const ALL_LOCATIONS: &str = "All Locations";

pub const LOCATIONS: [&str; 6] = [
    ALL_LOCATIONS,
    "Downtown Area",
    "North Zone",
    "South End",
    "East Valley",
    "West Side",
];

/// The slot widget always lists this day.
pub fn slot_listing_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 2, 15)
}

/// Scroll targets in the home header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Home,
    Turfs,
    About,
}

impl HomeSection {
    /// Element id of the section
    pub fn anchor(self) -> &'static str {
        match self {
            HomeSection::Home => "home",
            HomeSection::Turfs => "turfs",
            HomeSection::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeSection::Home => "Home",
            HomeSection::Turfs => "Turfs",
            HomeSection::About => "About Us",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turf_ids_are_unique_and_locations_known() {
        let mut ids: Vec<u32> = FEATURED_TURFS.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), FEATURED_TURFS.len());
        for turf in FEATURED_TURFS {
            assert!(LOCATIONS.contains(&turf.location), "{}", turf.location);
        }
    }

    #[test]
    fn rating_keeps_one_decimal() {
        assert_eq!(FEATURED_TURFS[0].rating_label(), "4.5");
        assert_eq!(FEATURED_TURFS[3].rating_label(), "4.9");
    }

    #[test]
    fn slot_date_is_fixed() {
        assert_eq!(
            slot_listing_date().map(|d| d.to_string()).as_deref(),
            Some("2026-02-15")
        );
    }
}
