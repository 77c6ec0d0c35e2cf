//! Initialization sequence bookkeeping.
//!
//! Every step runs even after an earlier one failed; the report keeps each
//! outcome so callers can see how far the chip got.

use crate::error::Error;

/// Steps of `init`, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// CNTL2.SRST.
    SoftReset,
    /// Write the configured output resolution.
    SetResolution,
    /// Read the fuse ROM sensitivity adjustment.
    Calibrate,
    /// Run the built-in self-test.
    SelfTest,
    /// Write the configured output resolution again.
    ReassertResolution,
    /// Compare WIA with the expected device ID.
    VerifyDevice,
    /// Enter the configured run mode.
    EnterRunMode,
}

impl InitStep {
    /// All steps in execution order.
    pub const ALL: [Self; 7] = [
        Self::SoftReset,
        Self::SetResolution,
        Self::Calibrate,
        Self::SelfTest,
        Self::ReassertResolution,
        Self::VerifyDevice,
        Self::EnterRunMode,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of every initialization step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitReport {
    results: [Result<(), Error>; InitStep::ALL.len()],
}

impl InitReport {
    pub(crate) const fn new() -> Self {
        Self {
            results: [Ok(()); InitStep::ALL.len()],
        }
    }

    pub(crate) fn record(&mut self, step: InitStep, result: Result<(), Error>) {
        self.results[step.index()] = result;
    }

    /// Result of a single step.
    pub fn step(&self, step: InitStep) -> Result<(), Error> {
        self.results[step.index()]
    }

    /// Whether every step succeeded.
    pub fn is_ok(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }

    /// Steps that failed, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (InitStep, Error)> + '_ {
        InitStep::ALL
            .iter()
            .zip(self.results.iter())
            .filter_map(|(step, result)| result.err().map(|err| (*step, err)))
    }

    /// First failure, or `Ok` if the whole sequence succeeded.
    pub fn result(&self) -> Result<(), Error> {
        match self.failures().next() {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_ok() {
        let report = InitReport::new();
        assert!(report.is_ok());
        assert_eq!(report.result(), Ok(()));
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn result_is_first_failure_in_step_order() {
        let mut report = InitReport::new();
        report.record(InitStep::VerifyDevice, Err(Error::WrongDevice));
        report.record(InitStep::SelfTest, Err(Error::SelfTestFailed));

        assert!(!report.is_ok());
        assert_eq!(report.result(), Err(Error::SelfTestFailed));
        assert_eq!(report.step(InitStep::VerifyDevice), Err(Error::WrongDevice));
        assert_eq!(report.step(InitStep::Calibrate), Ok(()));
        assert_eq!(report.failures().count(), 2);
    }
}
