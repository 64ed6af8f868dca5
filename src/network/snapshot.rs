use std::fmt;

use serde::Serialize;

use crate::loss::MseLoss;

/// Read-only view of the state a driver reports after each step.
///
/// Borrows the network immutably, so it cannot outlive or mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub input: &'a [f64],
    pub output_activation: &'a [f64],
    pub output_error: &'a [f64],
}

impl Snapshot<'_> {
    pub fn mean_squared_error(&self) -> f64 {
        MseLoss::loss(self.output_error)
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inputs:")?;
        for x in self.input {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        for (k, y) in self.output_activation.iter().enumerate() {
            writeln!(f, "Output {}: {y}", k + 1)?;
        }
        writeln!(f)?;
        for (k, e) in self.output_error.iter().enumerate() {
            writeln!(f, "Error {}: {e}", k + 1)?;
        }
        Ok(())
    }
}
