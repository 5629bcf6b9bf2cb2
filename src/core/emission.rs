use crate::core::rounding::round2;
use crate::domain::model::EmissionFactor;
use crate::utils::error::CalcError;

/// Computes trip emissions from the per-kilometer factor table. Pure: the
/// factor table is borrowed and read-only.
#[derive(Debug, Clone, Copy)]
pub struct EmissionCalculator<'a> {
    factors: &'a [EmissionFactor],
}

impl<'a> EmissionCalculator<'a> {
    pub fn new(factors: &'a [EmissionFactor]) -> Self {
        Self { factors }
    }

    pub fn factor(&self, mode: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.mode == mode)
            .map(|f| f.kg_per_km)
    }

    /// Total kg of CO2 for a trip, rounded to 2 decimals.
    pub fn emission(&self, distance_km: f64, mode: &str) -> Result<f64, CalcError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(CalcError::InvalidDistance { value: distance_km });
        }
        let factor = self.factor(mode).ok_or_else(|| CalcError::UnknownMode {
            mode: mode.to_string(),
        })?;
        Ok(round2(distance_km * factor))
    }
}
