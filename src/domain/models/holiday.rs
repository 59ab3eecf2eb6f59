//! Public holiday model.
//!
//! Holidays are display decoration on the schedule grid; they never
//! change assignment logic (EFT adjustment happens upstream).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A public holiday on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
}

/// Date-keyed holiday lookup.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    by_date: HashMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Build a calendar from fetched holidays. Later duplicates for the
    /// same date win; upstream data has at most one per date per country.
    pub fn from_holidays(holidays: Vec<Holiday>) -> Self {
        let by_date = holidays.into_iter().map(|h| (h.date, h)).collect();
        Self { by_date }
    }

    /// An empty calendar: no holidays known.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.by_date.get(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let cal = HolidayCalendar::from_holidays(vec![Holiday {
            date,
            name: "Christmas Day".to_string(),
            country_code: "AU".to_string(),
        }]);
        assert_eq!(cal.holiday_on(date).map(|h| h.name.as_str()), Some("Christmas Day"));
        assert!(cal
            .holiday_on(NaiveDate::from_ymd_opt(2025, 12, 26).unwrap())
            .is_none());
    }
}
