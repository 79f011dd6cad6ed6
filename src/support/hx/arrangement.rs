//! Flow arrangements.

use super::{
    CapacitanceRate, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Cross-flow exchanger with neither stream mixed.
///
/// Uses the common approximation
/// `ε = 1 - exp((NTU^0.22 / C_r) · (exp(-C_r · NTU^0.78) - 1))`,
/// which is how simple finned water coils are rated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlowUnmixed;

impl EffectivenessRelation for CrossFlowUnmixed {
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness {
        effectiveness_via(ntu, capacitance_rates, |ntu, c_r| {
            1. - ((ntu.powf(0.22) / c_r) * ((-c_r * ntu.powf(0.78)).exp() - 1.)).exp()
        })
    }
}
