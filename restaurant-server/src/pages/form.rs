//! `/book/` form input
//!
//! Fields arrive as raw strings so that a bad value can be shown back to
//! the visitor next to its error instead of failing the whole request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{BookingCreate, DEFAULT_RESERVATION_SLOT};

use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub reservation_date: String,
    #[serde(default)]
    pub reservation_slot: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            reservation_date: String::new(),
            reservation_slot: DEFAULT_RESERVATION_SLOT.to_string(),
        }
    }
}

/// One message per invalid field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl BookingForm {
    /// The date, if the visitor typed a valid one
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.reservation_date.trim(), "%Y-%m-%d").ok()
    }

    /// Check every field and build the insert payload. A blank slot becomes 10.
    pub fn validate(&self) -> Result<BookingCreate, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = self.first_name.trim().to_string();
        if let Err(e) = validate_required_text(&first_name, "first_name", MAX_NAME_LEN) {
            errors.push(FieldError::new("first_name", e.message));
        }

        let date = self.date();
        if date.is_none() {
            errors.push(FieldError::new(
                "reservation_date",
                "Enter a valid date (YYYY-MM-DD).",
            ));
        }

        let slot_raw = self.reservation_slot.trim();
        let slot = if slot_raw.is_empty() {
            Some(DEFAULT_RESERVATION_SLOT)
        } else {
            slot_raw.parse::<i16>().ok()
        };
        if slot.is_none() {
            errors.push(FieldError::new("reservation_slot", "Enter a whole number."));
        }

        match (date, slot) {
            (Some(reservation_date), Some(reservation_slot)) if errors.is_empty() => {
                Ok(BookingCreate {
                    first_name,
                    reservation_date,
                    reservation_slot,
                })
            }
            _ => Err(errors),
        }
    }
}
