//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than bare `assert!`.

use rust_decimal::Decimal;

use domain_investment::{
    resolve_policy, InvestmentField, PortfolioSummary, SubmissionPayload,
};

/// Asserts that two decimals are equal within a tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a payload carries every Required field and no Disabled one
pub fn assert_payload_conforms(payload: &SubmissionPayload) {
    let policy = resolve_policy(payload.investment_type);
    for field in InvestmentField::ALL {
        if policy.is_required(field) {
            assert!(
                payload.has(field),
                "{} payload is missing required field {}",
                payload.investment_type,
                field
            );
        }
        if policy.is_disabled(field) {
            assert!(
                !payload.has(field),
                "{} payload carries disabled field {}",
                payload.investment_type,
                field
            );
        }
    }
}

/// Asserts the arithmetic relations between a summary's figures
pub fn assert_summary_consistent(summary: &PortfolioSummary) {
    assert_eq!(
        summary.total_gain_loss,
        summary.current_value - summary.total_invested,
        "gain/loss is not current value minus invested: {:?}",
        summary
    );
    if summary.total_invested.is_zero() {
        assert!(
            summary.gain_loss_percentage.is_zero(),
            "percentage must be zero when nothing is invested: {:?}",
            summary
        );
    }
}
