//! Property tests for the salary calculation.

use std::sync::OnceLock;

use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use salary_engine::calculation::{
    BILLINGS_FACTOR_CEILING, BILLINGS_FACTOR_FLOOR, HIGH_PERFORMER_BILLINGS_FACTOR,
    billings_factor, billings_threshold, compute, estimate, round_half_up,
};
use salary_engine::config::{ConfigLoader, RateTable};
use salary_engine::error::EngineError;
use salary_engine::models::{CalculationInput, MetricType};

const REGIONS: [&str; 7] = [
    "Amsterdam",
    "Australia",
    "Dubai",
    "Hong Kong",
    "Singapore",
    "United Kingdom",
    "United States",
];

const SCORED_ROLES: [&str; 7] = [
    "180 Recruiter",
    "Account Manager",
    "360 Senior/Principal Recruiter",
    "Business Development Manager",
    "Team Leader",
    "Manager",
    "Director",
];

const SECTORS: [&str; 9] = [
    "Tech",
    "Technology",
    "Finance",
    "Legal",
    "Healthcare",
    "Construction",
    "Education",
    "Retail",
    "Other",
];

fn table() -> &'static RateTable {
    static TABLE: OnceLock<RateTable> = OnceLock::new();
    TABLE.get_or_init(|| ConfigLoader::builtin().unwrap().into_rate_table())
}

fn metric_type() -> impl Strategy<Value = MetricType> {
    prop_oneof![Just(MetricType::Placements), Just(MetricType::Billings)]
}

#[allow(clippy::too_many_arguments)]
fn scored_input(
    region: &str,
    role: &str,
    years: f64,
    sector: &str,
    fit: i64,
    metric: MetricType,
    billings: u64,
    has_clients: bool,
) -> CalculationInput {
    let mut input = CalculationInput::new(region, role)
        .with_years_of_experience(years)
        .with_sector_focus(sector)
        .with_specialization_fit(fit)
        .with_has_clients(has_clients);
    if metric == MetricType::Billings {
        input = input.with_billings(Decimal::from(billings));
    }
    input
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn repeated_calls_are_identical(
        region in prop::sample::select(REGIONS.to_vec()),
        role in prop::sample::select(SCORED_ROLES.to_vec()),
        years in 0.0_f64..60.0,
        sector in prop::sample::select(SECTORS.to_vec()),
        fit in 1_i64..=5,
        metric in metric_type(),
        billings in 0_u64..10_000_000,
        has_clients in any::<bool>()
    ) {
        let input = scored_input(region, role, years, sector, fit, metric, billings, has_clients);
        let first = estimate(&input, table()).unwrap();
        let second = estimate(&input, table()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn entry_level_pays_band_minimum(
        region in prop::sample::select(REGIONS.to_vec()),
        years in proptest::option::of(-10.0_f64..100.0),
        sector in proptest::option::of("[A-Za-z ]{0,12}"),
        fit in proptest::option::of(-5_i64..20),
        billings in proptest::option::of(0_u64..50_000_000),
        has_clients in proptest::option::of(any::<bool>())
    ) {
        let input = CalculationInput {
            region: region.to_string(),
            role: "Trainee Recruiter".to_string(),
            years_of_experience: years,
            sector_focus: sector,
            specialization_fit: fit,
            metric_type: if billings.is_some() {
                MetricType::Billings
            } else {
                MetricType::Placements
            },
            annual_billings: billings.map(Decimal::from),
            has_clients,
        };

        let entry = table().rate_for(region, "Trainee Recruiter").unwrap();
        let result = compute(&input, table()).unwrap();
        prop_assert_eq!(result.amount, entry.min);
        prop_assert_eq!(result.currency_label, entry.currency_label);
    }

    #[test]
    fn amount_stays_within_dynamic_bounds(
        region in prop::sample::select(REGIONS.to_vec()),
        role in prop::sample::select(SCORED_ROLES.to_vec()),
        years in 0.0_f64..60.0,
        sector in prop::sample::select(SECTORS.to_vec()),
        fit in 1_i64..=5,
        metric in metric_type(),
        billings in 0_u64..10_000_000,
        has_clients in any::<bool>()
    ) {
        let input = scored_input(region, role, years, sector, fit, metric, billings, has_clients);
        let entry = table().rate_for(region, role).unwrap();
        let min = entry.min.to_string().parse::<f64>().unwrap();
        let max = entry.max.to_string().parse::<f64>().unwrap();

        let amount = compute(&input, table()).unwrap().amount;
        let floor = Decimal::from(round_half_up(min * 0.8) as i64);
        prop_assert!(amount >= floor, "{} below floor {}", amount, floor);
        prop_assert!(amount <= Decimal::from(round_half_up(max * 1.3) as i64));

        let threshold = billings_threshold(role, table()).unwrap();
        if billings_factor(metric, billings as f64, threshold) <= HIGH_PERFORMER_BILLINGS_FACTOR {
            prop_assert!(amount <= Decimal::from(round_half_up(max * 1.2) as i64));
        }
    }

    #[test]
    fn more_experience_never_pays_less(
        region in prop::sample::select(REGIONS.to_vec()),
        role in prop::sample::select(SCORED_ROLES.to_vec()),
        years in 0.0_f64..50.0,
        extra in 0.0_f64..20.0,
        sector in prop::sample::select(SECTORS.to_vec()),
        fit in 1_i64..=5,
        metric in metric_type(),
        billings in 0_u64..10_000_000,
        has_clients in any::<bool>()
    ) {
        let junior = scored_input(region, role, years, sector, fit, metric, billings, has_clients);
        let senior =
            scored_input(region, role, years + extra, sector, fit, metric, billings, has_clients);

        let junior_amount = compute(&junior, table()).unwrap().amount;
        let senior_amount = compute(&senior, table()).unwrap().amount;
        prop_assert!(senior_amount >= junior_amount);
    }

    #[test]
    fn billings_factor_is_clamped(
        metric in metric_type(),
        billings in 0.0_f64..1.0e9,
        threshold in 1.0_f64..1.0e7
    ) {
        let factor = billings_factor(metric, billings, threshold);
        prop_assert!((BILLINGS_FACTOR_FLOOR..=BILLINGS_FACTOR_CEILING).contains(&factor));
    }

    #[test]
    fn unknown_region_is_rejected(
        region in "[A-Z][a-z]{2,12}",
        role in prop::sample::select(SCORED_ROLES.to_vec())
    ) {
        prop_assume!(!table().has_region(&region));
        let input = CalculationInput::new(region, role)
            .with_years_of_experience(5.0)
            .with_sector_focus("Tech");

        let rejected = matches!(
            compute(&input, table()),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "region"
        );
        prop_assert!(rejected);
    }

    #[test]
    fn unknown_role_is_rejected(
        region in prop::sample::select(REGIONS.to_vec()),
        role in "[a-z]{3,10} [a-z]{3,10}"
    ) {
        let input = CalculationInput::new(region, role)
            .with_years_of_experience(5.0)
            .with_sector_focus("Tech");

        let rejected = matches!(
            compute(&input, table()),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "role"
        );
        prop_assert!(rejected);
    }
}

#[test]
fn zero_billings_on_billings_track_keeps_factor_at_one() {
    for role in SCORED_ROLES {
        let input = scored_input("Dubai", role, 9.0, "Legal", 3, MetricType::Billings, 0, false);
        let estimate = estimate(&input, table()).unwrap();
        let steps = &estimate.audit_trace.steps;

        let billings = steps.iter().find(|s| s.rule_id == "billings_factor").unwrap();
        let initial = steps.iter().find(|s| s.rule_id == "initial_base").unwrap();
        assert_eq!(billings.output["billings_factor"], 1.0);
        assert_eq!(initial.output["missing_billings_adjusted"], true);
    }
}
