//! Built-in point-value tables.
//!
//! Two scoring regimes ship with the tool; both can be replaced by a
//! `name,points` CSV via `--values`. Name matching is exact and
//! case-sensitive, including the quirks of the source data (for example
//! "Pat cummins" with a lowercase c).

use super::ValueTable;

fn table_from(entries: &[(&str, i64)]) -> ValueTable {
    entries
        .iter()
        .map(|(name, points)| (name.to_string(), *points))
        .collect()
}

/// Value table for the base batch variant.
pub fn base_value_table() -> ValueTable {
    table_from(&[
        ("Shreyas Iyer", 25),
        ("Phil Salt", 20),
        ("Travis Head", 28),
        ("Abhishek Sharma", 18),
        ("Nicolas Pooran", 22),
        ("Quinton Decock", 24),
        ("Yashasvi Jaiswal", 26),
        ("Sai sudarshan", 16),
        ("Sanju Samson", 20),
        ("Rishabh Pant", 30),
        ("Harshit Rana", 12),
        ("Arshdeep Singh", 18),
        ("Deepak Chahar", 16),
        ("Ravi Bishnoi", 15),
        ("Digvesh Rathi", 10),
        ("Yash Dayal", 14),
        ("Pat cummins", 35),
        ("Prasidh Krishna", 18),
        ("Kuldeep Yadav", 22),
        ("Noor Ahmed", 12),
        ("Hardik Pandya", 32),
        ("Axar Patel", 32),
        ("Krunal Pandya", 20),
        ("Ravindra Jadeja", 28),
        ("Marcus Stoinis", 24),
    ])
}

/// Value table for the timed (timestamp tie-break) batch variant.
pub fn timed_value_table() -> ValueTable {
    table_from(&[
        ("Shreyas Iyer", 45),
        ("Phil Salt", 41),
        ("Travis Head", 42),
        ("Abhishek Sharma", 43),
        ("Nicolas Pooran", 47),
        ("Quinton Decock", 32),
        ("Yashasvi Jaiswal", 46),
        ("Sai Sudarshan", 48),
        ("Sanju Samson", 40),
        ("Rishabh Pant", 35),
        ("Harshit Rana", 37),
        ("Arshdeep Singh", 43),
        ("Deepak Chahar", 32),
        ("Ravi Bishnoi", 25),
        ("Bhuvneshwar Kumar", 34),
        ("Yash Dayal", 30),
        ("Pat cummins", 39),
        ("Mohammad Siraj", 35),
        ("Kuldeep Yadav", 41),
        ("Noor Ahmed", 45),
        ("Hardik Pandya", 35),
        ("Axar Patel", 39),
        ("Krunal Pandya", 38),
        ("Ravindra Jadeja", 43),
        ("Marcus Stoinis", 41),
    ])
}
