//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slot used when a booking does not name one
pub const DEFAULT_RESERVATION_SLOT: i16 = 10;

fn default_slot() -> i16 {
    DEFAULT_RESERVATION_SLOT
}

/// Booking entity (a table reservation for one date and hour slot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    /// Holds the guest's full display name
    pub first_name: String,
    pub reservation_date: NaiveDate,
    /// Hour of day
    pub reservation_slot: i16,
}

/// Create booking payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub first_name: String,
    pub reservation_date: NaiveDate,
    #[serde(default = "default_slot")]
    pub reservation_slot: i16,
}

/// Full replace payload (PUT)
///
/// Name and date are required; an omitted slot keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReplace {
    pub first_name: String,
    pub reservation_date: NaiveDate,
    #[serde(default)]
    pub reservation_slot: Option<i16>,
}

impl BookingReplace {
    pub fn apply_to(self, current: &Booking) -> BookingCreate {
        BookingCreate {
            first_name: self.first_name,
            reservation_date: self.reservation_date,
            reservation_slot: self.reservation_slot.unwrap_or(current.reservation_slot),
        }
    }
}

/// Partial update payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub first_name: Option<String>,
    pub reservation_date: Option<NaiveDate>,
    pub reservation_slot: Option<i16>,
}

impl BookingUpdate {
    /// Overlay the present fields onto `current`, producing a full payload
    pub fn apply_to(self, current: &Booking) -> BookingCreate {
        BookingCreate {
            first_name: self
                .first_name
                .unwrap_or_else(|| current.first_name.clone()),
            reservation_date: self.reservation_date.unwrap_or(current.reservation_date),
            reservation_slot: self.reservation_slot.unwrap_or(current.reservation_slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_defaults_to_ten() {
        let b: BookingCreate =
            serde_json::from_str(r#"{"first_name":"Ann Lee","reservation_date":"2024-12-25"}"#)
                .unwrap();
        assert_eq!(b.reservation_slot, 10);
    }

    #[test]
    fn test_date_is_iso_on_the_wire() {
        let b = Booking {
            id: 7,
            first_name: "John Smith".into(),
            reservation_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            reservation_slot: 18,
        };
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["reservation_date"], "2024-12-25");
        assert_eq!(json["reservation_slot"], 18);
    }

    #[test]
    fn test_replace_keeps_slot_when_omitted() {
        let current = Booking {
            id: 1,
            first_name: "A".into(),
            reservation_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            reservation_slot: 18,
        };
        let put: BookingReplace =
            serde_json::from_str(r#"{"first_name":"B","reservation_date":"2024-12-26"}"#).unwrap();
        let merged = put.apply_to(&current);
        assert_eq!(merged.first_name, "B");
        assert_eq!(merged.reservation_slot, 18);

        // 日期在 PUT 中必填
        assert!(serde_json::from_str::<BookingReplace>(r#"{"first_name":"B"}"#).is_err());
    }

    #[test]
    fn test_out_of_range_slot_rejected() {
        let r: Result<BookingCreate, _> = serde_json::from_str(
            r#"{"first_name":"A","reservation_date":"2024-12-25","reservation_slot":40000}"#,
        );
        assert!(r.is_err());
    }
}
