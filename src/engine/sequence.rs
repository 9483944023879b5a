//! Sequencing and guardian assignment.
//!
//! Non-infants get seats `1..=K` in row order. Each infant is then attached to
//! one adult, picked from a preference list: women before men, and within each
//! group older before younger (ties keep row order). Every adult takes at most
//! one infant while unclaimed adults remain; once all are taken the top
//! preference absorbs the extra infants. With no adults at all an infant is
//! attached to seat [`FALLBACK_GUARDIAN`], whether or not it exists.

use std::cmp::Reverse;

use crate::{Assignment, Category, Gender, ParsedPassenger};

pub const FALLBACK_GUARDIAN: u32 = 1;

pub(crate) fn assign(passengers: &mut [ParsedPassenger]) {
    let mut next = 0;
    for passenger in passengers.iter_mut().filter(|p| !p.category.is_infant()) {
        next += 1;
        passenger.assignment = Assignment::Seat(next);
    }

    let preference = guardian_preference(passengers);
    let mut claimed = vec![false; preference.len()];

    for infant in passengers.iter_mut().filter(|p| p.category.is_infant()) {
        let guardian = match claimed.iter().position(|taken| !taken) {
            Some(idx) => {
                claimed[idx] = true;
                preference[idx]
            }
            None => preference.first().copied().unwrap_or(FALLBACK_GUARDIAN),
        };
        infant.assignment = Assignment::Lap { guardian };
    }
}

/// Seats of all adults, best guardian first.
fn guardian_preference(passengers: &[ParsedPassenger]) -> Vec<u32> {
    let mut adults: Vec<&ParsedPassenger> = passengers.iter().filter(|p| p.category == Category::Adult).collect();
    adults.sort_by_key(|p| (p.gender != Gender::Female, Reverse(p.age)));
    adults.into_iter().filter_map(|p| p.assignment.seat()).collect()
}
