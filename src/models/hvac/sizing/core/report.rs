//! Coil selection reporting.

use uom::si::f64::{Power, ThermalConductance};

use super::{Branch, CapacitySizing, ComponentId, DesignAirState, UaSizing};

/// Write-only sink for resolved coil sizes.
pub trait SizingReport {
    fn coil_capacity(&mut self, report: &CapacityReport);
    fn coil_ua(&mut self, report: &UaReport);
}

/// Discards reports.
impl SizingReport for () {
    fn coil_capacity(&mut self, _report: &CapacityReport) {}
    fn coil_ua(&mut self, _report: &UaReport) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapacityReport {
    pub component: ComponentId,
    pub capacity: Power,
    pub auto_sized: bool,
    pub branch: Branch,
    pub design_air: Option<DesignAirState>,
    pub fan_heat: Power,
    pub modifier_factor: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl CapacityReport {
    pub(crate) fn new(component: &ComponentId, auto_sized: bool, result: &CapacitySizing) -> Self {
        Self {
            component: component.clone(),
            capacity: result.value,
            auto_sized,
            branch: result.branch,
            design_air: result.details.design_air,
            fan_heat: result.details.fan_heat.heat,
            modifier_factor: result.details.modifier_factor,
            min_ratio: result.details.min_ratio(),
            max_ratio: result.details.max_ratio(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UaReport {
    pub component: ComponentId,
    pub ua: ThermalConductance,
    pub auto_sized: bool,
    pub branch: Branch,
    pub design_load: Power,
}

impl UaReport {
    pub(crate) fn new(
        component: &ComponentId,
        auto_sized: bool,
        design_load: Power,
        result: &UaSizing,
    ) -> Self {
        Self {
            component: component.clone(),
            ua: result.value,
            auto_sized,
            branch: result.branch,
            design_load,
        }
    }
}

/// Records every report in call order.
#[derive(Debug, Clone, Default)]
pub struct CoilSelectionLog {
    pub capacities: Vec<CapacityReport>,
    pub uas: Vec<UaReport>,
}

impl CoilSelectionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty() && self.uas.is_empty()
    }

    pub fn clear(&mut self) {
        self.capacities.clear();
        self.uas.clear();
    }
}

impl SizingReport for CoilSelectionLog {
    fn coil_capacity(&mut self, report: &CapacityReport) {
        self.capacities.push(report.clone());
    }

    fn coil_ua(&mut self, report: &UaReport) {
        self.uas.push(report.clone());
    }
}

impl<R: SizingReport + ?Sized> SizingReport for &mut R {
    fn coil_capacity(&mut self, report: &CapacityReport) {
        (**self).coil_capacity(report);
    }

    fn coil_ua(&mut self, report: &UaReport) {
        (**self).coil_ua(report);
    }
}
