//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::models::NormalizedListEntry;

/// Print summary information about a loaded list
pub fn print_list_summary(label: &str, entries: &[NormalizedListEntry], elapsed: std::time::Duration) {
    println!("{label}: {} household cards in {elapsed:?}", entries.len());
    println!(
        "Total members: {}",
        entries.iter().map(|entry| entry.members.len()).sum::<usize>()
    );
}

/// Print one row per entry
pub fn print_entries<'a>(entries: impl IntoIterator<Item = &'a NormalizedListEntry>) {
    for entry in entries {
        println!(
            "  {} | {:<28} | {:<20} | {}",
            entry.registry_number, entry.head_of_household_name, entry.location.village, entry.ring_zone
        );
    }
}

/// Print household counts per ring zone
pub fn print_ring_summary(summary: &[(String, usize)]) {
    println!("Ring distribution:");
    for (zone, count) in summary {
        println!("  {count:>4}  {zone}");
    }
}
