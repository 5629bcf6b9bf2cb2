use crate::core::rounding::{round2, round4};
use crate::domain::model::{CreditPolicy, PriceEstimate, SavingsResult};
use crate::utils::error::CalcError;

/// Emission saved by choosing `emission` over `baseline`. The percentage is
/// computed from the rounded `saved_kg` and is `None` unless the baseline is
/// positive. A negative saving is a valid answer, not an error.
pub fn savings(emission: f64, baseline: f64) -> Result<SavingsResult, CalcError> {
    if !emission.is_finite() {
        return Err(CalcError::NonFinite {
            field: "emission",
            value: emission,
        });
    }
    if !baseline.is_finite() {
        return Err(CalcError::NonFinite {
            field: "baseline",
            value: baseline,
        });
    }

    let saved_kg = round2(baseline - emission);
    let percentage = if baseline > 0.0 {
        Some(round2(saved_kg / baseline * 100.0))
    } else {
        None
    };
    Ok(SavingsResult {
        saved_kg,
        percentage,
    })
}

/// Converts emission mass into carbon credits and prices them against the
/// configured per-credit range.
#[derive(Debug, Clone, Copy)]
pub struct CreditCalculator<'a> {
    policy: &'a CreditPolicy,
}

impl<'a> CreditCalculator<'a> {
    pub fn new(policy: &'a CreditPolicy) -> Self {
        Self { policy }
    }

    /// Credit quantity for an emission mass, rounded to 4 decimals. Credit
    /// quantities are typically small fractions, hence the finer rounding.
    pub fn credits(&self, emission_kg: f64) -> Result<f64, CalcError> {
        if !emission_kg.is_finite() {
            return Err(CalcError::NonFinite {
                field: "emission_kg",
                value: emission_kg,
            });
        }
        if emission_kg < 0.0 {
            return Err(CalcError::Negative {
                field: "emission_kg",
                value: emission_kg,
            });
        }
        Ok(round4(emission_kg / self.policy.kg_per_credit))
    }

    /// Price range for a credit quantity. `min` and `max` are rounded first
    /// and `average` is taken over the rounded values; reordering these
    /// steps changes the output on some inputs.
    pub fn estimate_price(&self, credits: f64) -> Result<PriceEstimate, CalcError> {
        if !credits.is_finite() {
            return Err(CalcError::NonFinite {
                field: "credits",
                value: credits,
            });
        }
        if credits < 0.0 {
            return Err(CalcError::Negative {
                field: "credits",
                value: credits,
            });
        }

        let min = round2(credits * self.policy.price_min_per_credit);
        let max = round2(credits * self.policy.price_max_per_credit);
        let average = round2((min + max) / 2.0);
        Ok(PriceEstimate { min, max, average })
    }
}
