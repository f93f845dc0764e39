//! Price and deposit rules, in Toman.

use crate::booking::details::{BookingDetails, Experience};

pub const PRICE_ONE_HOUR: u64 = 5_000_000;
pub const PRICE_TWO_HOURS: u64 = 8_000_000;
pub const PRICE_FIVE_HOURS: u64 = 15_000_000;
pub const TWO_WAY_SURCHARGE: u64 = 2_000_000;
pub const TRAVEL_SURCHARGE: u64 = 8_000_000;
pub const DEPOSIT_LOCAL: u64 = 1_000_000;
pub const DEPOSIT_TRAVEL: u64 = 3_000_000;

const HOME_CITY: &str = "مشهد";

pub fn total_price(details: &BookingDetails) -> u64 {
    let mut total = match details.duration_hours {
        1 => PRICE_ONE_HOUR,
        2 => PRICE_TWO_HOURS,
        5 => PRICE_FIVE_HOURS,
        _ => 0,
    };

    if details.experience == Experience::TwoWay {
        total += TWO_WAY_SURCHARGE;
    }

    if details.city != HOME_CITY {
        total += TRAVEL_SURCHARGE;
    }

    total
}

pub fn deposit(city: &str) -> u64 {
    if city == HOME_CITY {
        DEPOSIT_LOCAL
    } else {
        DEPOSIT_TRAVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::jalaali::GregorianDate;

    fn details(experience: Experience, hours: u8, city: &str) -> BookingDetails {
        BookingDetails {
            experience,
            duration_hours: hours,
            date: GregorianDate::new(2025, 10, 2),
            time: "14:00".to_string(),
            name: "سارا".to_string(),
            phone: "09151234567".to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn base_prices_by_duration() {
        assert_eq!(total_price(&details(Experience::OneWay, 1, "مشهد")), 5_000_000);
        assert_eq!(total_price(&details(Experience::OneWay, 2, "مشهد")), 8_000_000);
        assert_eq!(
            total_price(&details(Experience::OneWay, 5, "مشهد")),
            15_000_000
        );
    }

    #[test]
    fn two_way_adds_surcharge() {
        assert_eq!(total_price(&details(Experience::TwoWay, 1, "مشهد")), 7_000_000);
    }

    #[test]
    fn other_cities_add_travel_surcharge() {
        assert_eq!(
            total_price(&details(Experience::OneWay, 1, "تهران")),
            13_000_000
        );
        assert_eq!(
            total_price(&details(Experience::TwoWay, 5, "تهران")),
            25_000_000
        );
    }

    #[test]
    fn deposit_depends_on_city() {
        assert_eq!(deposit("مشهد"), 1_000_000);
        assert_eq!(deposit("تهران"), 3_000_000);
    }
}
