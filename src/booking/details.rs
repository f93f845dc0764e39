use crate::calendar::jalaali::{self, GregorianDate, to_jalaali};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    OneWay,
    TwoWay,
}

impl Experience {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "one-way" => Some(Experience::OneWay),
            "two-way" => Some(Experience::TwoWay),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Experience::OneWay => "تجربه یک‌طرفه فانتزی",
            Experience::TwoWay => "تجربه دوطرفه فانتزی",
        }
    }
}

pub fn duration_label(hours: u8) -> &'static str {
    match hours {
        1 => "یک ساعت",
        2 => "دو ساعت",
        5 => "پنج ساعت",
        _ => "",
    }
}

/// Everything the wizard collects, assembled once all steps submit.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetails {
    pub experience: Experience,
    pub duration_hours: u8,
    pub date: GregorianDate,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub city: String,
}

impl BookingDetails {
    /// Builds the details from the submitted form values, keyed by input id.
    /// Returns `None` when a value is missing or unparseable, which cannot
    /// happen through the wizard since every step validates before advancing.
    pub fn from_values(values: &IndexMap<String, String>) -> Option<Self> {
        let get = |key: &str| values.get(key).filter(|v| !v.is_empty());

        let experience = Experience::from_value(get("experience")?)?;
        let duration_hours = get("duration")?.parse().ok()?;
        let date = parse_date(get("date")?)?;

        Some(Self {
            experience,
            duration_hours,
            date,
            time: get("time")?.clone(),
            name: get("name")?.clone(),
            phone: get("phone")?.clone(),
            city: get("city")?.clone(),
        })
    }

    /// The date rendered as `{day} {month name} {year}` in the Jalaali
    /// calendar, as shown on the trigger and in the operator notification.
    pub fn formatted_date(&self) -> String {
        jalaali::format_jalaali(to_jalaali(self.date))
    }
}

fn parse_date(value: &str) -> Option<GregorianDate> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some(GregorianDate::new(year, month, day))
}

/// Renders a number with Persian digits and thousands separators, matching
/// the fa-IR formatting of the original notification.
pub fn persian_number(value: u64) -> String {
    const DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
    let ascii = value.to_string();
    let mut out = String::new();
    let len = ascii.len();
    for (i, byte) in ascii.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('٬');
        }
        out.push(DIGITS[(byte - b'0') as usize]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_values() -> IndexMap<String, String> {
        let mut values = IndexMap::new();
        for (k, v) in [
            ("age_gate", "yes"),
            ("experience", "two-way"),
            ("duration", "2"),
            ("date", "2025-10-02"),
            ("time", "14:00"),
            ("name", "سارا احمدی"),
            ("phone", "09151234567"),
            ("city", "مشهد"),
        ] {
            values.insert(k.to_string(), v.to_string());
        }
        values
    }

    #[test]
    fn assembles_from_form_values() {
        let details = BookingDetails::from_values(&sample_values()).unwrap();
        assert_eq!(details.experience, Experience::TwoWay);
        assert_eq!(details.duration_hours, 2);
        assert_eq!(details.date, GregorianDate::new(2025, 10, 2));
        assert_eq!(details.time, "14:00");
        assert_eq!(details.city, "مشهد");
    }

    #[test]
    fn missing_value_yields_none() {
        let mut values = sample_values();
        values.shift_remove("phone");
        assert!(BookingDetails::from_values(&values).is_none());

        let mut values = sample_values();
        values.insert("date".to_string(), "not-a-date".to_string());
        assert!(BookingDetails::from_values(&values).is_none());
    }

    #[test]
    fn formatted_date_is_jalaali() {
        let details = BookingDetails::from_values(&sample_values()).unwrap();
        assert_eq!(details.formatted_date(), "10 مهر 1404");
    }

    #[test]
    fn persian_number_grouping() {
        assert_eq!(persian_number(5_000_000), "۵٬۰۰۰٬۰۰۰");
        assert_eq!(persian_number(100), "۱۰۰");
        assert_eq!(persian_number(0), "۰");
    }
}
