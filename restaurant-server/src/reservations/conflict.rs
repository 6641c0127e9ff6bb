//! Slot conflict rule
//!
//! Two bookings conflict only when date and slot are both identical.

use chrono::NaiveDate;
use shared::models::Booking;

/// True if any booking in `existing` already holds `(date, slot)`
pub fn is_slot_taken(existing: &[Booking], date: NaiveDate, slot: i16) -> bool {
    existing
        .iter()
        .any(|b| b.reservation_date == date && b.reservation_slot == slot)
}

/// Occupied slots on `date`, ascending and deduplicated
pub fn taken_slots(existing: &[Booking], date: NaiveDate) -> Vec<i16> {
    let mut slots: Vec<i16> = existing
        .iter()
        .filter(|b| b.reservation_date == date)
        .map(|b| b.reservation_slot)
        .collect();
    slots.sort_unstable();
    slots.dedup();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    fn booking(id: i64, day: u32, slot: i16) -> Booking {
        Booking {
            id,
            first_name: format!("Guest {id}"),
            reservation_date: date(day),
            reservation_slot: slot,
        }
    }

    #[test]
    fn test_empty_store_has_no_conflicts() {
        assert!(!is_slot_taken(&[], date(25), 18));
    }

    #[test]
    fn test_exact_match_conflicts() {
        let existing = [booking(1, 25, 18)];
        assert!(is_slot_taken(&existing, date(25), 18));
    }

    #[test]
    fn test_adjacent_slot_is_free() {
        let existing = [booking(1, 25, 18)];
        assert!(!is_slot_taken(&existing, date(25), 19));
        assert!(!is_slot_taken(&existing, date(25), 17));
    }

    #[test]
    fn test_same_slot_other_day_is_free() {
        let existing = [booking(1, 25, 18)];
        assert!(!is_slot_taken(&existing, date(26), 18));
    }

    #[test]
    fn test_taken_slots_sorted_and_unique() {
        let existing = [
            booking(1, 25, 20),
            booking(2, 25, 18),
            booking(3, 26, 12),
            booking(4, 25, 20),
        ];
        assert_eq!(taken_slots(&existing, date(25)), vec![18, 20]);
        assert_eq!(taken_slots(&existing, date(26)), vec![12]);
        assert!(taken_slots(&existing, date(27)).is_empty());
    }
}
