//! Jalaali (Persian solar hijri) calendar arithmetic.
//!
//! Conversions follow the published break-table algorithm of jalaali.js: the
//! Jalaali leap pattern runs on an irregular 33-year cycle, so leap status and
//! the Gregorian date of each Farvardin 1st are derived from a table of cycle
//! break years rather than a naive 4-year rule. All division is truncating to
//! match the reference arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proleptic Gregorian calendar date. Used at every external boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Persian solar hijri date. Months 1-6 have 31 days, 7-11 have 30, month 12
/// has 29 or 30 depending on leap status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct JalaaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn to_jalaali(self) -> JalaaliDate {
        to_jalaali(self)
    }

    /// Civil date for a count of days since the Unix epoch. Lets `main`
    /// derive "today" from the system clock once; nothing else reads time.
    pub fn from_unix_days(days: i64) -> Self {
        d2g(days as i32 + UNIX_EPOCH_JDN)
    }
}

impl JalaaliDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn to_gregorian(self) -> GregorianDate {
        to_gregorian(self)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Saturday-first weekday abbreviations: ش ی د س چ پ ج.
pub const WEEKDAY_ABBREVS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

const UNIX_EPOCH_JDN: i32 = 2_440_588;

/// Jalaali years in which the length of the 33-year leap cycle changes.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Renders a Jalaali date as `{day} {month name} {year}`.
pub fn format_jalaali(j: JalaaliDate) -> String {
    format!("{} {} {}", j.day, month_name(j.month), j.year)
}

pub fn to_jalaali(g: GregorianDate) -> JalaaliDate {
    d2j(g2d(g.year, g.month as i32, g.day as i32))
}

pub fn to_gregorian(j: JalaaliDate) -> GregorianDate {
    d2g(j2d(j.year, j.month as i32, j.day as i32))
}

pub fn is_leap_year(jy: i32) -> bool {
    jal_cal(jy).leap == 0
}

pub fn days_in_month(jy: i32, jm: u8) -> u8 {
    if jm <= 6 {
        31
    } else if jm <= 11 {
        30
    } else if is_leap_year(jy) {
        30
    } else {
        29
    }
}

/// Julian day number of a Gregorian date.
pub fn julian_day_number(g: GregorianDate) -> i32 {
    g2d(g.year, g.month as i32, g.day as i32)
}

/// Weekday with the week starting on Saturday: 0 = شنبه .. 6 = جمعه.
pub fn saturday_based_weekday(g: GregorianDate) -> u8 {
    ((julian_day_number(g) % 7 + 2) % 7) as u8
}

pub fn add_days(g: GregorianDate, days: i32) -> GregorianDate {
    d2g(julian_day_number(g) + days)
}

struct JalCal {
    /// Years since the last leap year; 0 means `jy` itself is a leap year.
    leap: i32,
    /// Gregorian year of the start of the Jalaali year.
    gy: i32,
    /// Gregorian March day of Farvardin 1st.
    march: i32,
}

fn jal_cal(jy: i32) -> JalCal {
    debug_assert!(
        jy >= BREAKS[0] && jy < BREAKS[BREAKS.len() - 1],
        "Jalaali year {jy} outside the break table"
    );

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    JalCal { leap, gy, march }
}

fn j2d(jy: i32, jm: i32, jd: i32) -> i32 {
    let r = jal_cal(jy);
    g2d(r.gy, 3, r.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd - 1
}

fn d2j(jdn: i32) -> JalaaliDate {
    let gy = d2g(jdn).year;
    let mut jy = gy - 621;
    let r = jal_cal(jy);
    let jdn1f = g2d(gy, 3, r.march);

    let mut k = jdn - jdn1f;
    if k >= 0 {
        if k <= 185 {
            return JalaaliDate::new(jy, (1 + k / 31) as u8, (k % 31 + 1) as u8);
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }

    JalaaliDate::new(jy, (7 + k / 30) as u8, (k % 30 + 1) as u8)
}

fn g2d(gy: i32, gm: i32, gd: i32) -> i32 {
    let mut d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d = d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752;
    d
}

fn d2g(jdn: i32) -> GregorianDate {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    GregorianDate::new(gy, gm as u8, gd as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_in_gregorian_month(gy: i32, gm: u8) -> u8 {
        match gm {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if (gy % 4 == 0 && gy % 100 != 0) || gy % 400 == 0 {
                    29
                } else {
                    28
                }
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn nowruz_anchor() {
        assert_eq!(
            to_jalaali(GregorianDate::new(2025, 3, 21)),
            JalaaliDate::new(1404, 1, 1)
        );
        assert_eq!(
            to_gregorian(JalaaliDate::new(1404, 1, 1)),
            GregorianDate::new(2025, 3, 21)
        );
    }

    #[test]
    fn nowruz_across_gregorian_leap_cycle() {
        // Farvardin 1st drifts by one Gregorian day over the leap cycle.
        assert_eq!(
            to_gregorian(JalaaliDate::new(1402, 1, 1)),
            GregorianDate::new(2023, 3, 21)
        );
        assert_eq!(
            to_gregorian(JalaaliDate::new(1403, 1, 1)),
            GregorianDate::new(2024, 3, 20)
        );
        assert_eq!(
            to_gregorian(JalaaliDate::new(1405, 1, 1)),
            GregorianDate::new(2026, 3, 21)
        );
    }

    #[test]
    fn leap_years_follow_the_33_year_cycle() {
        for y in [1399, 1403, 1408] {
            assert!(is_leap_year(y), "{y} should be leap");
        }
        for y in [1400, 1401, 1402, 1404, 1405, 1406, 1407] {
            assert!(!is_leap_year(y), "{y} should not be leap");
        }
    }

    #[test]
    fn month_lengths() {
        for y in 1398..=1410 {
            for m in 1..=6 {
                assert_eq!(days_in_month(y, m), 31);
            }
            for m in 7..=11 {
                assert_eq!(days_in_month(y, m), 30);
            }
            let esfand = days_in_month(y, 12);
            assert_eq!(esfand == 30, is_leap_year(y));
            assert!(esfand == 29 || esfand == 30);
        }
    }

    #[test]
    fn esfand_30_exists_only_in_leap_years() {
        assert_eq!(
            to_gregorian(JalaaliDate::new(1403, 12, 30)),
            GregorianDate::new(2025, 3, 20)
        );
        // The day after 1402/12/29 is Nowruz, not a 30th.
        let after = julian_day_number(to_gregorian(JalaaliDate::new(1402, 12, 29))) + 1;
        assert_eq!(d2j(after), JalaaliDate::new(1403, 1, 1));
    }

    #[test]
    fn gregorian_round_trip_2023_to_2035() {
        for gy in 2023..=2035 {
            for gm in 1..=12u8 {
                for gd in 1..=days_in_gregorian_month(gy, gm) {
                    let g = GregorianDate::new(gy, gm, gd);
                    assert_eq!(to_gregorian(to_jalaali(g)), g, "round trip failed for {g}");
                }
            }
        }
    }

    #[test]
    fn jalaali_round_trip_1402_to_1414() {
        for jy in 1402..=1414 {
            for jm in 1..=12u8 {
                for jd in 1..=days_in_month(jy, jm) {
                    let j = JalaaliDate::new(jy, jm, jd);
                    assert_eq!(
                        to_jalaali(to_gregorian(j)),
                        j,
                        "round trip failed for {jy}/{jm}/{jd}"
                    );
                }
            }
        }
    }

    #[test]
    fn weekdays_start_on_saturday() {
        // 2025-03-22 was a Saturday, 2025-03-21 a Friday.
        assert_eq!(saturday_based_weekday(GregorianDate::new(2025, 3, 22)), 0);
        assert_eq!(saturday_based_weekday(GregorianDate::new(2025, 3, 21)), 6);
        // Unix epoch, 1970-01-01, was a Thursday.
        assert_eq!(saturday_based_weekday(GregorianDate::from_unix_days(0)), 5);
    }

    #[test]
    fn from_unix_days_matches_known_dates() {
        assert_eq!(
            GregorianDate::from_unix_days(0),
            GregorianDate::new(1970, 1, 1)
        );
        assert_eq!(
            GregorianDate::from_unix_days(20168),
            GregorianDate::new(2025, 3, 21)
        );
    }

    #[test]
    fn add_days_crosses_month_and_year_ends() {
        assert_eq!(
            add_days(GregorianDate::new(2025, 3, 31), 1),
            GregorianDate::new(2025, 4, 1)
        );
        assert_eq!(
            add_days(GregorianDate::new(2024, 12, 31), 1),
            GregorianDate::new(2025, 1, 1)
        );
        assert_eq!(
            add_days(GregorianDate::new(2024, 2, 28), 1),
            GregorianDate::new(2024, 2, 29)
        );
        assert_eq!(
            add_days(GregorianDate::new(2025, 1, 1), -1),
            GregorianDate::new(2024, 12, 31)
        );
    }

    #[test]
    fn dates_order_lexicographically() {
        assert!(JalaaliDate::new(1404, 1, 1) < JalaaliDate::new(1404, 1, 2));
        assert!(JalaaliDate::new(1403, 12, 30) < JalaaliDate::new(1404, 1, 1));
        assert!(GregorianDate::new(2025, 3, 21) < GregorianDate::new(2025, 3, 22));
    }

    #[test]
    fn formats_day_month_name_year() {
        assert_eq!(format_jalaali(JalaaliDate::new(1404, 7, 10)), "10 مهر 1404");
        assert_eq!(
            format_jalaali(JalaaliDate::new(1404, 1, 1)),
            "1 فروردین 1404"
        );
    }
}
