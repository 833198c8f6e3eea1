//! Search, listing, and circulation services over in-memory records

pub mod circulation;
pub mod listing;
pub mod search;
