use uom::si::f64::{Power, ThermalConductance, ThermodynamicTemperature};

use crate::support::{constraint::ConstraintResult, units::TemperatureDifference};

use super::{CapacitanceRate, Effectiveness, EffectivenessRelation, Ntu};

/// A stream entering the exchanger.
#[derive(Debug, Clone, Copy)]
pub struct StreamInlet {
    pub capacitance_rate: CapacitanceRate,
    pub temperature: ThermodynamicTemperature,
}

impl StreamInlet {
    #[must_use]
    pub fn new(capacitance_rate: CapacitanceRate, temperature: ThermodynamicTemperature) -> Self {
        Self {
            capacitance_rate,
            temperature,
        }
    }
}

/// Heat exchanged between two streams.
#[derive(Debug, Clone, Copy)]
pub struct Exchange {
    pub effectiveness: Effectiveness,

    /// Heat gained by the first stream; negative when it is the hot stream.
    pub heat_to_first: Power,

    /// Outlet temperatures, in input order.
    pub outlet_temperatures: [ThermodynamicTemperature; 2],
}

/// Resolves the exchange for a known conductance and inlet pair.
///
/// # Errors
///
/// Returns `Err` if the conductance is negative.
pub fn exchange(
    arrangement: &impl EffectivenessRelation,
    ua: ThermalConductance,
    inlets: [StreamInlet; 2],
) -> ConstraintResult<Exchange> {
    let [first, second] = inlets;
    let rates = [first.capacitance_rate, second.capacitance_rate];
    let c_min = first.capacitance_rate.min(second.capacitance_rate);

    let effectiveness = arrangement.effectiveness(Ntu::from_conductance(ua, rates)?, rates);
    let heat_to_first: Power =
        *effectiveness * (*c_min * second.temperature.minus(first.temperature));

    Ok(Exchange {
        effectiveness,
        heat_to_first,
        outlet_temperatures: [
            first.temperature + heat_to_first / *first.capacitance_rate,
            second.temperature - heat_to_first / *second.capacitance_rate,
        ],
    })
}
