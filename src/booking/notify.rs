//! Operator notification, posted as JSON to the webhook named by the
//! `NOBAT_NOTIFY_URL` environment variable.

use crate::booking::details::{BookingDetails, duration_label, persian_number};
use serde_json::{Value, json};
use std::time::Duration;

pub const NOTIFY_URL_ENV: &str = "NOBAT_NOTIFY_URL";

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub fn payload(details: &BookingDetails, total: u64, deposit: u64) -> Value {
    json!({
        "subject": format!("رزرو جدید - {}", details.name),
        "customer_name": details.name,
        "customer_phone": details.phone,
        "customer_city": details.city,
        "experience_type": details.experience.title(),
        "duration": duration_label(details.duration_hours),
        "booking_date": details.formatted_date(),
        "booking_date_gregorian": details.date.to_string(),
        "booking_time": details.time,
        "total_price": persian_number(total),
        "deposit": persian_number(deposit),
    })
}

/// Sends the notification when an endpoint is configured. Returns `Ok(false)`
/// when no endpoint is set; a failed POST is an error for the caller to
/// report, never a crash — the booking summary has already been shown.
pub fn send(details: &BookingDetails, total: u64, deposit: u64) -> Result<bool, String> {
    let Ok(url) = std::env::var(NOTIFY_URL_ENV) else {
        return Ok(false);
    };

    let body = payload(details, total, deposit);
    ureq::post(&url)
        .timeout(SEND_TIMEOUT)
        .send_json(body)
        .map_err(|err| format!("ارسال اعلان ناموفق بود: {err}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::details::Experience;
    use crate::calendar::jalaali::GregorianDate;

    fn sample() -> BookingDetails {
        BookingDetails {
            experience: Experience::TwoWay,
            duration_hours: 2,
            date: GregorianDate::new(2025, 10, 2),
            time: "14:00".to_string(),
            name: "سارا احمدی".to_string(),
            phone: "09151234567".to_string(),
            city: "تهران".to_string(),
        }
    }

    #[test]
    fn payload_carries_all_template_params() {
        let details = sample();
        let total = crate::booking::pricing::total_price(&details);
        let deposit = crate::booking::pricing::deposit(&details.city);
        let value = payload(&details, total, deposit);

        assert_eq!(value["customer_name"], "سارا احمدی");
        assert_eq!(value["experience_type"], "تجربه دوطرفه فانتزی");
        assert_eq!(value["duration"], "دو ساعت");
        assert_eq!(value["booking_date"], "10 مهر 1404");
        assert_eq!(value["booking_date_gregorian"], "2025-10-02");
        assert_eq!(value["booking_time"], "14:00");
        // 8M base + 2M two-way + 8M travel.
        assert_eq!(value["total_price"], "۱۸٬۰۰۰٬۰۰۰");
        assert_eq!(value["deposit"], "۳٬۰۰۰٬۰۰۰");
        assert_eq!(value["subject"], "رزرو جدید - سارا احمدی");
    }
}
