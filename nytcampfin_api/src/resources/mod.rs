//! Per-resource facades. Each borrows a [`Client`](crate::Client) and maps
//! named methods onto one path template and unwrap policy.
//!
//! Every template starts with the cycle slot. Methods accept
//! [`Options`](crate::Options) for the cycle and the pagination offset.
//! None of them walk pages: callers advance `offset` themselves.

use chrono::NaiveDate;

mod candidates;
pub use self::candidates::Candidates;

mod committees;
pub use self::committees::Committees;

mod filings;
pub use self::filings::Filings;

mod independent_expenditures;
pub use self::independent_expenditures::IndependentExpenditures;

mod late_contributions;
pub use self::late_contributions::LateContributions;

mod president;
pub use self::president::President;

/// Zero-padded year, month and day slots for date-scoped templates.
fn date_parts(date: NaiveDate) -> [String; 3] {
    [
        date.format("%Y").to_string(),
        date.format("%m").to_string(),
        date.format("%d").to_string(),
    ]
}
