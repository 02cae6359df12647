// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by chart construction.
//!
//! A fault aborts the whole render: no partial scene is produced. Degenerate domains, empty
//! input and palette exhaustion are not errors; they have well-defined geometry.

use core::fmt;

use thiserror::Error;

/// A numeric record field that is validated before layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// The marginal abatement cost (`marginal_Abatement_Cost` on the wire).
    MarginalAbatementCost,
    /// The abatement capacity (`abatement_Capacity` on the wire).
    AbatementCapacity,
}

impl RecordField {
    /// Returns the host-facing field name.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::MarginalAbatementCost => "marginal_Abatement_Cost",
            Self::AbatementCapacity => "abatement_Capacity",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// What is wrong with a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldProblem {
    /// The field was absent from the input row.
    Missing,
    /// The field is `NaN` or infinite.
    NonFinite,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is missing"),
            Self::NonFinite => f.write_str("is not a finite number"),
        }
    }
}

/// Errors returned when laying out a chart.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    /// A record has a missing or non-finite numeric field.
    #[error("record {index}: field `{field}` {problem}")]
    MalformedRecord {
        /// Position of the record in the caller's input (before sorting).
        index: usize,
        /// The offending field.
        field: RecordField,
        /// What is wrong with it.
        problem: FieldProblem,
    },
    /// The drawing surface size is not a positive finite size.
    #[error("invalid drawing surface size {width}x{height}")]
    InvalidSize {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
}
