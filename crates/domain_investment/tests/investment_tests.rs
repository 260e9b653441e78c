//! Tests for per-type field policy, submission validation, and summaries

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::OwnerId;
use domain_investment::{
    aggregate, card_summary, resolve_policy, validate_form, validate_submission, FieldPolicy,
    FieldRequirement, FormValues, InvestmentError, InvestmentField, InvestmentRecord, InvestmentType,
    SubmissionPayload, ValidationError,
};

use InvestmentField::*;

fn record(form: FormValues) -> InvestmentRecord {
    InvestmentRecord::from_submission(OwnerId::from("owner@example.com"), validate_form(&form).unwrap())
}

fn fd(invested: &str) -> FormValues {
    FormValues::new(Some(InvestmentType::Fd))
        .with(Symbol, "FD-001")
        .with(TotalAmountInvested, invested)
        .with(StartDate, "2024-01-01")
        .with(EndDate, "2025-01-01")
        .with(InterestRate, "7.5")
}

// ============================================================================
// Policy Tests
// ============================================================================

mod policy_tests {
    use super::*;

    #[test]
    fn test_stock_policy() {
        let policy = resolve_policy(InvestmentType::Stock);
        assert_eq!(policy.required_fields(), vec![Type, Symbol, Units, StartDate]);
        assert_eq!(
            policy.disabled_fields(),
            vec![BuyPrice, CurrentPrice, InterestRate, TotalAmountInvested, CurrentValue]
        );
        assert_eq!(policy.optional_fields(), vec![EndDate]);
    }

    #[test]
    fn test_etf_and_mutual_fund_share_rules() {
        let etf = resolve_policy(InvestmentType::Etf);
        let mf = resolve_policy(InvestmentType::MutualFund);
        for field in InvestmentField::ALL {
            assert_eq!(etf.requirement(field), mf.requirement(field), "{field}");
        }
        assert!(etf.is_required(BuyPrice));
        assert!(etf.is_required(InterestRate));
        assert!(etf.is_optional(EndDate));
    }

    #[test]
    fn test_fd_policy() {
        let policy = resolve_policy(InvestmentType::Fd);
        assert_eq!(
            policy.required_fields(),
            vec![Type, Symbol, StartDate, EndDate, InterestRate, TotalAmountInvested]
        );
        assert_eq!(policy.disabled_fields(), vec![Units, BuyPrice, CurrentPrice, CurrentValue]);
    }

    #[test]
    fn test_bond_policy() {
        let policy = resolve_policy(InvestmentType::Bond);
        assert!(policy.is_required(BuyPrice));
        assert!(policy.is_required(EndDate));
        assert!(policy.is_disabled(TotalAmountInvested));
    }

    #[test]
    fn test_current_price_and_value_always_disabled() {
        for ty in InvestmentType::ALL {
            let policy = resolve_policy(ty);
            assert!(policy.is_disabled(CurrentPrice), "{ty}");
            assert!(policy.is_disabled(CurrentValue), "{ty}");
        }
    }

    #[test]
    fn test_no_selection_is_unrestricted() {
        assert_eq!(FieldPolicy::for_selection(None), FieldPolicy::unrestricted());
        assert!(FieldPolicy::unrestricted().disabled_fields().is_empty());
    }

    fn any_type() -> impl Strategy<Value = InvestmentType> {
        prop::sample::select(InvestmentType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_lists_partition_every_field(ty in any_type()) {
            let policy = resolve_policy(ty);
            let mut seen = policy.required_fields();
            seen.extend(policy.disabled_fields());
            seen.extend(policy.optional_fields());
            seen.sort();
            prop_assert_eq!(seen, InvestmentField::ALL.to_vec());
        }

        #[test]
        fn prop_resolution_is_idempotent(ty in any_type()) {
            prop_assert_eq!(resolve_policy(ty), resolve_policy(ty));
            prop_assert_eq!(resolve_policy(ty).requirement(Type), FieldRequirement::Required);
        }
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_stock_drops_disabled_buy_price() {
        let form = FormValues::new(Some(InvestmentType::Stock))
            .with(Symbol, "AAPL")
            .with(Units, "10")
            .with(StartDate, "2024-03-01")
            .with(BuyPrice, "150");

        let payload = validate_submission(Some(InvestmentType::Stock), &form).unwrap();
        assert_eq!(payload.symbol.as_deref(), Some("AAPL"));
        assert_eq!(payload.units, Some(dec!(10)));
        assert_eq!(payload.buy_price, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("buyPrice").is_none());
    }

    #[test]
    fn test_stock_missing_symbol() {
        let form = FormValues::new(Some(InvestmentType::Stock))
            .with(Units, "10")
            .with(StartDate, "2024-03-01");

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.missing_fields(), vec![Symbol]);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let form = FormValues::new(Some(InvestmentType::Stock))
            .with(Symbol, "   ")
            .with(Units, "10")
            .with(StartDate, "2024-03-01");

        assert!(validate_form(&form)
            .unwrap_err()
            .contains(&ValidationError::MissingRequiredField(Symbol)));
    }

    #[test]
    fn test_fd_end_before_start() {
        let form = fd("10000").with(StartDate, "2024-06-01").with(EndDate, "2024-01-01");
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidDateRange));
    }

    #[test]
    fn test_fd_payload_has_exactly_its_fields() {
        let form = fd("10000").with(Units, "3").with(CurrentValue, "12000");
        let payload = validate_form(&form).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["endDate", "interestRate", "startDate", "symbol", "totalAmountInvested", "type"]
        );
        assert_eq!(json["type"], "FD");
    }

    #[test]
    fn test_fd_keeps_two_decimal_amount() {
        let form = fd("15000.00").with(Units, "3").with(BuyPrice, "100");
        let payload = validate_form(&form).unwrap();

        assert_eq!(payload.total_amount_invested, Some(dec!(15000.00)));
        assert_eq!(payload.interest_rate, Some(dec!(7.5)));
        assert_eq!(payload.total_amount_invested.unwrap().to_string(), "15000.00");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["totalAmountInvested"], 15000.0);
        assert_eq!(json["interestRate"], 7.5);
        assert_eq!(json["symbol"], "FD-001");
        for absent in ["units", "buyPrice", "currentPrice", "currentValue"] {
            assert!(json.get(absent).is_none(), "{absent} should be dropped");
        }
    }

    #[test]
    fn test_same_day_dates_are_valid() {
        let form = fd("10000").with(EndDate, "2024-01-01");
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_invalid_number_and_date_are_both_reported() {
        let form = fd("ten thousand").with(StartDate, "01/02/2024");
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidNumber(TotalAmountInvested)));
        assert!(errors.contains(&ValidationError::InvalidDate(StartDate)));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let errors = validate_form(&fd("-5")).unwrap_err();
        assert!(errors.contains(&ValidationError::NegativeValue(TotalAmountInvested)));
    }

    #[test]
    fn test_negative_interest_rate_is_allowed() {
        let payload = validate_form(&fd("100").with(InterestRate, "-0.5")).unwrap();
        assert_eq!(payload.interest_rate, Some(dec!(-0.5)));
    }

    #[test]
    fn test_zero_is_a_value() {
        let payload = validate_form(&fd("0")).unwrap();
        assert_eq!(payload.total_amount_invested, Some(Decimal::ZERO));
    }

    #[test]
    fn test_optional_end_date_left_blank_is_omitted() {
        let form = FormValues::new(Some(InvestmentType::Etf))
            .with(Symbol, "NIFTYBEES")
            .with(Units, "4")
            .with(StartDate, "2023-05-10")
            .with(InterestRate, "0")
            .with(BuyPrice, "210.5")
            .with(EndDate, "");
        let payload = validate_form(&form).unwrap();
        assert_eq!(payload.end_date, None);
        assert!(!payload.has(EndDate));
    }

    #[test]
    fn test_payload_accepts_dashboard_json() {
        let payload: SubmissionPayload = serde_json::from_value(serde_json::json!({
            "type": "BOND",
            "symbol": "GOI",
            "units": 2,
            "buyPrice": 1000,
            "startDate": "2024-01-01",
            "endDate": "2030-01-01",
            "interestRate": 7.1
        }))
        .unwrap();
        assert_eq!(payload.present_fields().len(), 7);
    }
}

// ============================================================================
// Summary Tests
// ============================================================================

mod summary_tests {
    use super::*;

    fn with_value(form: FormValues, current: Decimal) -> InvestmentRecord {
        let mut record = record(form);
        record.current_value = Some(current);
        record
    }

    #[test]
    fn test_card_gain() {
        let card = card_summary(&with_value(fd("10000"), dec!(12000))).unwrap();
        assert_eq!(card.gain_loss, dec!(2000));
        assert_eq!(card.gain_loss_percent, dec!(20));
        assert!(card.is_positive);
    }

    #[test]
    fn test_card_loss() {
        let card = card_summary(&with_value(fd("10000"), dec!(9000))).unwrap();
        assert_eq!(card.gain_loss, dec!(-1000));
        assert_eq!(card.gain_loss_percent, dec!(-10));
        assert!(!card.is_positive);
    }

    #[test]
    fn test_card_with_nothing_invested() {
        let card = card_summary(&with_value(fd("0"), dec!(500))).unwrap();
        assert_eq!(card.gain_loss, dec!(500));
        assert_eq!(card.gain_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn test_card_missing_values_count_as_zero() {
        let stock = record(
            FormValues::new(Some(InvestmentType::Stock))
                .with(Symbol, "AAPL")
                .with(Units, "1")
                .with(StartDate, "2024-01-01"),
        );
        let card = card_summary(&stock).unwrap();
        assert_eq!(card.gain_loss, Decimal::ZERO);
        assert!(card.is_positive);
    }

    #[test]
    fn test_aggregate_gains_and_losses_cancel() {
        let records = vec![
            with_value(fd("1000"), dec!(1200)),
            with_value(fd("2000"), dec!(1800)),
        ];
        let summary = aggregate(&records).unwrap();
        assert_eq!(summary.total_invested, dec!(3000));
        assert_eq!(summary.current_value, dec!(3000));
        assert_eq!(summary.total_gain_loss, Decimal::ZERO);
        assert_eq!(summary.gain_loss_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_mixed_portfolio() {
        let records = vec![
            with_value(fd("1000"), dec!(1500)),
            with_value(fd("3000"), dec!(2500)),
        ];
        let summary = aggregate(&records).unwrap();
        assert_eq!(summary.total_gain_loss, Decimal::ZERO);

        let gaining = aggregate(records.iter().take(1)).unwrap();
        assert_eq!(gaining.gain_loss_percentage, dec!(50));
    }

    #[test]
    fn test_aggregate_past_decimal_range_is_an_error() {
        let huge = "60000000000000000000000000000";
        let records = vec![record(fd(huge)), record(fd(huge))];

        let result = aggregate(&records);
        assert!(matches!(result, Err(InvestmentError::Overflow(_))));
    }

    #[test]
    fn test_card_percentage_past_decimal_range_is_an_error() {
        let result = card_summary(&with_value(fd("0.0000000000000000000000000001"), dec!(1)));
        assert!(matches!(result, Err(InvestmentError::Overflow(_))));
    }

    proptest! {
        #[test]
        fn prop_aggregate_gain_is_difference(invested in 0u32..1_000_000, current in 0u32..1_000_000) {
            let records = vec![with_value(fd(&invested.to_string()), Decimal::from(current))];
            let summary = aggregate(&records).unwrap();
            prop_assert_eq!(summary.total_gain_loss, summary.current_value - summary.total_invested);
            if invested == 0 {
                prop_assert_eq!(summary.gain_loss_percentage, Decimal::ZERO);
            }
        }
    }
}
