//! Tests for scheduler construction and input validation.

use super::*;
use rotaforge_core::CountRange;
use rotaforge_test::{firm_services, roster, short_year_config, two_seniors};

fn scheduler() -> Scheduler {
    Scheduler::new(firm_services(), roster(), short_year_config()).unwrap()
}

#[test]
fn test_residents_are_sorted() {
    let scheduler = scheduler();
    let names: Vec<_> = scheduler
        .residents()
        .iter()
        .map(|r| r.last_name().to_string())
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Alvarez");
}

#[test]
fn test_resident_index_follows_sorted_order() {
    let residents = roster();
    let tom = residents[7].id();
    let scheduler = Scheduler::new(firm_services(), residents, short_year_config()).unwrap();

    let index = scheduler.resident_index(tom).unwrap();
    assert_eq!(scheduler.residents()[index].last_name(), "Whitfield");
    assert_eq!(index, 7);
}

#[test]
fn test_nothing_readable_before_create() {
    let scheduler = scheduler();
    assert!(scheduler.schedule().is_none());
    assert!(scheduler.service_schedule().is_none());
    assert!(scheduler.last_stats().is_none());
}

#[test]
fn test_rejects_invalid_config() {
    let config = short_year_config().with_num_years(1);
    let err = Scheduler::new(firm_services(), roster(), config).unwrap_err();
    assert!(matches!(err, RotaForgeError::Config(_)));
}

#[test]
fn test_rejects_malformed_service() {
    let mut services = firm_services();
    services.push(Service::new("Broken").with_senior_staffing(CountRange::new(3, 1)));

    let err = Scheduler::new(services, roster(), short_year_config()).unwrap_err();
    assert!(matches!(err, RotaForgeError::InvalidInput(ref msg) if msg.contains("Broken")));
}

#[test]
fn test_rejects_resident_year_outside_program() {
    for year in [0, 4] {
        let mut residents = two_seniors();
        residents.push(Resident::new("Ida", "Moss", year));

        let err = Scheduler::new(firm_services(), residents, short_year_config()).unwrap_err();
        assert!(matches!(err, RotaForgeError::InvalidInput(_)));
    }
}

#[test]
fn test_rejects_history_for_unknown_resident() {
    let stranger = Resident::new("Zed", "Quinn", 3);
    let history = ServiceHistory::new().with_count(stranger.id(), 0, 1);
    let mut scheduler = scheduler();

    let err = scheduler.create(Some(&history), false, false).unwrap_err();
    assert!(matches!(err, RotaForgeError::UnknownResident(id) if id == stranger.id()));
    assert!(scheduler.schedule().is_none());
}

#[test]
fn test_rejects_history_with_service_out_of_range() {
    let residents = roster();
    let history = ServiceHistory::new().with_count(residents[0].id(), 3, 1);
    let mut scheduler = Scheduler::new(firm_services(), residents, short_year_config()).unwrap();

    let err = scheduler.solve(Some(&history)).unwrap_err();
    assert!(matches!(
        err,
        RotaForgeError::ServiceIndexOutOfRange {
            index: 3,
            service_count: 3
        }
    ));
}

#[test]
fn test_failed_search_clears_previous_schedule() {
    let residents = roster();
    let mut history = ServiceHistory::new();
    for resident in &residents {
        for service in 0..3 {
            history.set_count(resident.id(), service, 3);
        }
    }
    let mut scheduler = Scheduler::new(firm_services(), residents, short_year_config()).unwrap();

    assert!(scheduler.create(None, false, false).unwrap().is_some());
    assert!(scheduler.schedule().is_some());

    assert!(scheduler.create(Some(&history), false, false).unwrap().is_none());
    assert!(scheduler.schedule().is_none());
    assert!(scheduler.service_schedule().is_none());
    assert!(scheduler.last_stats().is_some());
}

#[test]
fn test_cloned_schedulers_search_independently() {
    let residents = roster();
    let mut exhausted = ServiceHistory::new();
    for resident in &residents {
        exhausted.set_count(resident.id(), 0, 3);
        exhausted.set_count(resident.id(), 1, 2);
        exhausted.set_count(resident.id(), 2, 2);
    }
    let config = short_year_config().with_random_seed(17);
    let mut original = Scheduler::new(firm_services(), residents, config).unwrap();
    let mut copy = original.clone();

    let first = original.create(None, true, false).unwrap();
    let second = copy.create(None, true, false).unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);

    assert!(copy.create(Some(&exhausted), true, false).unwrap().is_none());
    assert!(copy.schedule().is_none());
    assert_eq!(
        original.schedule(),
        first.as_ref().map(|schedule| schedule.resident_view())
    );
}
