//! Resident fixtures.
//!
//! # Example
//!
//! ```
//! use rotaforge_test::roster;
//!
//! let residents = roster();
//! assert_eq!(residents.len(), 8);
//! assert_eq!(residents.iter().filter(|r| r.is_rising_chief()).count(), 2);
//! ```

use rotaforge_core::Resident;

/// Eight residents: two second-years, two rising chiefs, two fellowship
/// applicants and two unflagged third-years.
///
/// Returned in deliberately unsorted order.
pub fn roster() -> Vec<Resident> {
    vec![
        Resident::new("Priya", "Natarajan", 3),
        Resident::new("Owen", "Baker", 2),
        Resident::new("Lena", "Fischer", 3).rising_chief(),
        Resident::new("Marco", "Alvarez", 3).fellowship_applicant(),
        Resident::new("Hana", "Sato", 2),
        Resident::new("Dev", "Kapoor", 3).rising_chief(),
        Resident::new("Ruth", "Okoye", 3)
            .fellowship_applicant()
            .with_specialty("cardiology"),
        Resident::new("Tom", "Whitfield", 3),
    ]
}

/// Two unflagged third-years.
pub fn two_seniors() -> Vec<Resident> {
    vec![
        Resident::new("Ana", "Ruiz", 3),
        Resident::new("Ben", "Okafor", 3),
    ]
}
