//! Tests for the application state wiring the domain services together

use rust_decimal_macros::dec;

use domain_investment::{card_summary, InvestmentField, InvestmentType};
use interface_api::{config::ApiConfig, AppState};
use test_utils::{
    assert_decimal_approx_eq, assert_summary_consistent, AuthFixtures, CashflowFixtures,
    DateFixtures, TestInvestmentBuilder,
};

fn state() -> AppState {
    AppState::in_memory(ApiConfig::default())
}

// ============================================================================
// Investment Service Tests
// ============================================================================

mod investment_service_tests {
    use super::*;

    #[tokio::test]
    async fn test_fd_keeps_its_dates() {
        let state = state();
        let form = TestInvestmentBuilder::new(InvestmentType::Fd).build_form();

        let record = state.investments.create(&AuthFixtures::owner(), &form).await.unwrap();

        assert_eq!(record.start_date, Some(DateFixtures::start()));
        assert_eq!(record.end_date, Some(DateFixtures::maturity()));
        assert_eq!(record.holding_period().and_then(|p| p.days()), Some(366));
    }

    #[tokio::test]
    async fn test_missing_symbol_is_rejected() {
        let form = TestInvestmentBuilder::new(InvestmentType::Stock)
            .without(InvestmentField::Symbol)
            .build_form();

        let err = state().investments.create(&AuthFixtures::owner(), &form).await.unwrap_err();
        assert!(err.to_string().contains("symbol"));
    }

    #[tokio::test]
    async fn test_no_type_selected_is_rejected() {
        let form = TestInvestmentBuilder::new(InvestmentType::Bond)
            .with_type(None)
            .build_form();

        assert!(state().investments.create(&AuthFixtures::owner(), &form).await.is_err());
    }

    #[tokio::test]
    async fn test_summary_over_several_deposits() {
        let state = state();
        let owner = AuthFixtures::owner();
        for amount in [dec!(10000), dec!(5000)] {
            let form = TestInvestmentBuilder::new(InvestmentType::Fd)
                .with_invested(amount)
                .build_form();
            state.investments.create(&owner, &form).await.unwrap();
        }

        let summary = state.investments.summary(&owner).await.unwrap();
        assert_eq!(summary.total_invested, dec!(15000));
        assert_decimal_approx_eq(summary.gain_loss_percentage, dec!(-100), dec!(0.0001));
        assert_summary_consistent(&summary);

        let other = state.investments.summary(&AuthFixtures::other_owner()).await.unwrap();
        assert_eq!(other.total_invested, dec!(0));
        assert_summary_consistent(&other);
    }

    #[test]
    fn test_card_summary_for_built_record() {
        let record = TestInvestmentBuilder::new(InvestmentType::Fd)
            .with_owner(AuthFixtures::other_owner())
            .with_invested(dec!(10000))
            .with_current_value(dec!(12000))
            .build_record();

        let card = card_summary(&record).unwrap();
        assert_eq!(card.gain_loss, dec!(2000));
        assert_decimal_approx_eq(card.gain_loss_percent, dec!(20), dec!(0.0001));
        assert!(card.is_positive);
        assert_eq!(record.owner_id, AuthFixtures::other_owner());
    }
}

// ============================================================================
// Cashflow Service Tests
// ============================================================================

mod cashflow_service_tests {
    use super::*;

    #[tokio::test]
    async fn test_expenses_listed_per_owner() {
        let state = state();
        let owner = AuthFixtures::owner();
        state.expenses.create(&owner, CashflowFixtures::groceries()).await.unwrap();
        state.expenses.create(&owner, CashflowFixtures::rent()).await.unwrap();

        let mine = state.expenses.list(&owner, Default::default()).await.unwrap();
        let theirs = state
            .expenses
            .list(&AuthFixtures::other_owner(), Default::default())
            .await
            .unwrap();

        assert_eq!(mine.total_elements, 2);
        assert_eq!(theirs.total_elements, 0);
    }

    #[tokio::test]
    async fn test_monthly_income() {
        let state = state();
        let income = state
            .incomes
            .create(&AuthFixtures::owner(), CashflowFixtures::salary_2024())
            .await
            .unwrap();

        assert_eq!(income.monthly(), dec!(150000));
    }
}
