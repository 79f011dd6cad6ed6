use std::convert::Infallible;

use twine_core::Model;

use super::core::{
    CapacityReport, CapacityRequest, CapacitySizing, CoilSelectionLog, RunState, SizingReport,
    UaReport, UaRequest, UaSizing,
};

/// Runs the coil sizers for one sizing pass.
///
/// Every call is recorded in the run-level [`RunState`] and forwarded to the
/// report sink. The flags only ever get set during a pass; call
/// [`clear_state`](Self::clear_state) before the next one.
#[derive(Debug)]
pub struct SizingEngine<Cap, Ua, R = CoilSelectionLog> {
    capacity: Cap,
    ua: Ua,
    report: R,
    run: RunState,
}

impl<Cap, Ua, R> SizingEngine<Cap, Ua, R>
where
    Cap: Model<Input = CapacityRequest, Output = CapacitySizing, Error = Infallible>,
    Ua: Model<Input = UaRequest, Output = UaSizing, Error = Infallible>,
    R: SizingReport,
{
    #[must_use]
    pub fn new(capacity: Cap, ua: Ua, report: R) -> Self {
        Self {
            capacity,
            ua,
            report,
            run: RunState::default(),
        }
    }

    pub fn size_cooling_capacity(&mut self, request: &CapacityRequest) -> CapacitySizing {
        let Ok(result) = self.capacity.call(request);
        self.run.record(result.error.as_ref());
        self.report.coil_capacity(&CapacityReport::new(
            &request.component,
            request.auto_sized,
            &result,
        ));
        result
    }

    pub fn size_heating_coil_ua(&mut self, request: &UaRequest) -> UaSizing {
        let Ok(result) = self.ua.call(request);
        self.run.record(result.error.as_ref());
        self.report.coil_ua(&UaReport::new(
            &request.component,
            request.auto_sized,
            request.inputs.design_load,
            &result,
        ));
        result
    }

    /// Errors seen since the last [`clear_state`](Self::clear_state).
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Starts a new run.
    pub fn clear_state(&mut self) {
        self.run = RunState::default();
    }

    #[must_use]
    pub fn report(&self) -> &R {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut R {
        &mut self.report
    }
}
