//! Tests for the residency rules.

use super::*;
use rotaforge_config::StaffingTarget;
use rotaforge_core::CountRange;
use rotaforge_test::{firm_services, roster};

const BLOCKS: usize = 13;

// roster(): 0 third-year, 1 second-year, 2 rising chief, 3 fellowship applicant.
const SENIOR: ResidentIndex = 0;
const SECOND_YEAR_RESIDENT: ResidentIndex = 1;
const CHIEF: ResidentIndex = 2;
const APPLICANT: ResidentIndex = 3;

const CORE: ServiceIndex = 1;
const ELECTIVE: ServiceIndex = 3;

fn services() -> Vec<Service> {
    let mut services = firm_services();
    services.push(
        Service::new("Clinic")
            .with_senior_staffing(CountRange::new(0, 2))
            .with_senior_quota(CountRange::new(0, 4))
            .with_earliest_pgy2_block(3),
    );
    services
}

struct Fixture {
    services: Vec<Service>,
    residents: Vec<Resident>,
    config: RuleConfig,
    state: ScheduleState,
}

impl Fixture {
    fn new(config: RuleConfig) -> Self {
        let services = services();
        let residents = roster();
        let state = ScheduleState::new(&services, &residents, BLOCKS, 3, StaffingTarget::Minimum);
        Self {
            services,
            residents,
            config,
            state,
        }
    }

    fn rules(&self) -> RuleBook<'_> {
        RuleBook::new(&self.services, &self.residents, BLOCKS, &self.config)
    }
}

#[test]
fn test_quota_reached_at_maximum() {
    let mut fx = Fixture::new(RuleConfig::default());
    fx.state.seed_count(SENIOR, CORE, 1);
    assert!(!fx
        .rules()
        .is_violated(Rule::QuotaReached, &fx.state, 0, SENIOR, CORE));

    fx.state.seed_count(SENIOR, CORE, 2);
    assert!(fx
        .rules()
        .is_violated(Rule::QuotaReached, &fx.state, 0, SENIOR, CORE));
}

#[test]
fn test_quota_reached_above_maximum() {
    let mut fx = Fixture::new(RuleConfig::default());
    fx.state.seed_count(SENIOR, CORE, 5);
    assert_eq!(
        fx.rules().first_violation(&fx.state, 0, SENIOR, CORE),
        Some(Rule::QuotaReached)
    );
}

#[test]
fn test_too_early_for_second_year() {
    let fx = Fixture::new(RuleConfig::default());
    let rules = fx.rules();
    let rule = Rule::TooEarlyForSecondYear;

    // Earliest block 3 is 1-indexed: blocks 0 and 1 are too early.
    assert!(rules.is_violated(rule, &fx.state, 0, SECOND_YEAR_RESIDENT, ELECTIVE));
    assert!(rules.is_violated(rule, &fx.state, 1, SECOND_YEAR_RESIDENT, ELECTIVE));
    assert!(!rules.is_violated(rule, &fx.state, 2, SECOND_YEAR_RESIDENT, ELECTIVE));
    assert!(!rules.is_violated(rule, &fx.state, 0, SENIOR, ELECTIVE));
    assert!(!rules.is_violated(rule, &fx.state, 0, SECOND_YEAR_RESIDENT, CORE));
}

#[test]
fn test_fellowship_blackout() {
    let fx = Fixture::new(RuleConfig::default());
    let rules = fx.rules();
    let rule = Rule::FellowshipBlackout;

    assert!(rules.is_violated(rule, &fx.state, 3, APPLICANT, CORE));
    assert!(rules.is_violated(rule, &fx.state, 4, APPLICANT, CORE));
    assert!(!rules.is_violated(rule, &fx.state, 5, APPLICANT, CORE));
    assert!(!rules.is_violated(rule, &fx.state, 3, APPLICANT, ELECTIVE));
    assert!(!rules.is_violated(rule, &fx.state, 3, SENIOR, CORE));
}

#[test]
fn test_rising_chief_last_block() {
    let fx = Fixture::new(RuleConfig::default());
    let rules = fx.rules();

    for service in 0..fx.services.len() {
        assert_eq!(
            rules.first_violation(&fx.state, BLOCKS - 1, CHIEF, service),
            Some(Rule::RisingChiefLastBlock)
        );
    }
    assert!(!rules.violates_any(&fx.state, BLOCKS - 2, CHIEF, CORE));
}

#[test]
fn test_late_year_core_blackout() {
    let fx = Fixture::new(RuleConfig::default());
    let rules = fx.rules();
    let rule = Rule::LateYearCoreBlackout;

    assert!(rules.is_violated(rule, &fx.state, 12, SENIOR, CORE));
    assert!(!rules.is_violated(rule, &fx.state, 12, SENIOR, ELECTIVE));
    assert!(!rules.is_violated(rule, &fx.state, 11, SENIOR, CORE));
    assert!(!rules.is_violated(rule, &fx.state, 12, SECOND_YEAR_RESIDENT, CORE));
}

#[test]
fn test_late_year_blackout_is_configurable() {
    let config = RuleConfig {
        late_year_blackout_block: 10,
        late_year_blackout_year: 2,
        ..RuleConfig::default()
    };
    let fx = Fixture::new(config);
    let rules = fx.rules();
    let rule = Rule::LateYearCoreBlackout;

    assert!(rules.is_violated(rule, &fx.state, 10, SECOND_YEAR_RESIDENT, CORE));
    assert!(!rules.is_violated(rule, &fx.state, 12, SENIOR, CORE));
}

#[test]
fn test_unrestricted_pair_passes_every_rule() {
    let fx = Fixture::new(RuleConfig::default());
    let rules = fx.rules();

    assert_eq!(rules.first_violation(&fx.state, 6, SENIOR, CORE), None);
    assert!(Rule::ALL
        .iter()
        .all(|&rule| !rules.is_violated(rule, &fx.state, 6, SENIOR, CORE)));
}

#[test]
fn test_rule_display() {
    assert_eq!(Rule::QuotaReached.to_string(), "quota_reached");
    assert_eq!(
        format!("{}", Rule::LateYearCoreBlackout),
        "late_year_core_blackout"
    );
    assert_eq!(Rule::ALL.len(), 5);
}
