use chrono::NaiveDate;
use serde_json::Value;

use crate::models::domain::parse_stored_date;

/// A single condition on one document field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-insensitive substring match on a string field
    Contains(String),
    /// Calendar-date equality on a date field
    Equals(NaiveDate),
    /// Inclusive calendar-date range on a date field
    Between(NaiveDate, NaiveDate),
}

impl Condition {
    /// Check a single field value against this condition
    pub fn matches(&self, value: &Value) -> bool {
        let Some(raw) = value.as_str() else {
            return false;
        };

        match self {
            Condition::Contains(needle) => raw.to_lowercase().contains(&needle.to_lowercase()),
            Condition::Equals(date) => parse_stored_date(raw) == Some(*date),
            Condition::Between(from, to) => {
                parse_stored_date(raw).is_some_and(|d| *from <= d && d <= *to)
            }
        }
    }
}

/// Conjunction of field conditions, evaluated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<(String, Condition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(mut self, field: &str, needle: impl Into<String>) -> Self {
        self.clauses.push((field.to_string(), Condition::Contains(needle.into())));
        self
    }

    pub fn equals(mut self, field: &str, date: NaiveDate) -> Self {
        self.clauses.push((field.to_string(), Condition::Equals(date)));
        self
    }

    pub fn between(mut self, field: &str, from: NaiveDate, to: NaiveDate) -> Self {
        self.clauses.push((field.to_string(), Condition::Between(from, to)));
        self
    }

    pub fn clauses(&self) -> &[(String, Condition)] {
        &self.clauses
    }

    /// Check whether a JSON document satisfies every clause
    ///
    /// Missing fields never match.
    pub fn matches(&self, document: &Value) -> bool {
        self.clauses.iter().all(|(field, condition)| {
            document
                .get(field)
                .is_some_and(|value| condition.matches(value))
        })
    }
}

/// Filter for one flight leg: `from` → `to` on exactly `date`
pub fn flight_leg_filter(from: &str, to: &str, date: NaiveDate) -> Filter {
    Filter::new()
        .contains("srccity", from)
        .contains("destcity", to)
        .equals("date", date)
}

/// Filter for hotel nights in `city` between check-in and check-out, inclusive
pub fn hotel_stay_filter(city: &str, check_in: NaiveDate, check_out: NaiveDate) -> Filter {
    Filter::new()
        .contains("city", city)
        .between("date", check_in, check_out)
}
