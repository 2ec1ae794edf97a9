//! Service fixtures.

use rotaforge_core::{CountRange, Service};

/// Three core inpatient firms needing four seniors per block in total.
///
/// ```
/// use rotaforge_test::firm_services;
///
/// let services = firm_services();
/// let per_block: u32 = services.iter().map(|s| s.min_seniors_per_block()).sum();
/// assert_eq!(per_block, 4);
/// ```
pub fn firm_services() -> Vec<Service> {
    vec![
        Service::new("1-Firm")
            .core()
            .difficult()
            .with_priority(1)
            .with_senior_staffing(CountRange::exactly(2))
            .with_senior_quota(CountRange::new(2, 3))
            .with_intern_staffing(CountRange::new(2, 3)),
        Service::new("2-Firm")
            .core()
            .with_priority(2)
            .with_senior_staffing(CountRange::exactly(1))
            .with_senior_quota(CountRange::new(1, 2)),
        Service::new("3-Firm")
            .core()
            .with_priority(3)
            .with_senior_staffing(CountRange::exactly(1))
            .with_senior_quota(CountRange::new(1, 2)),
    ]
}
