// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input records.
//!
//! [`Record`] is the validated row used by layout. [`RawRecord`] mirrors the host's row shape,
//! including its field names, and keeps the numeric fields optional so a missing value can be
//! reported as a [`ChartError::MalformedRecord`] rather than a deserialization failure.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{ChartError, FieldProblem, RecordField};

/// One abatement alternative.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Category used for coloring and the legend.
    pub category: String,
    /// Cost per unit of abatement; may be negative.
    pub marginal_abatement_cost: f64,
    /// Achievable abatement; drives bar width.
    pub abatement_capacity: f64,
    /// Label drawn next to the bar.
    pub abatement_alternative: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        category: impl Into<String>,
        marginal_abatement_cost: f64,
        abatement_capacity: f64,
        abatement_alternative: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            marginal_abatement_cost,
            abatement_capacity,
            abatement_alternative: abatement_alternative.into(),
        }
    }

    /// Checks that both numeric fields are finite.
    ///
    /// `index` is the record's position in the caller's input and is only used for reporting.
    pub fn validate(&self, index: usize) -> Result<(), ChartError> {
        check_finite(
            index,
            RecordField::MarginalAbatementCost,
            self.marginal_abatement_cost,
        )?;
        check_finite(index, RecordField::AbatementCapacity, self.abatement_capacity)
    }
}

fn check_finite(index: usize, field: RecordField, value: f64) -> Result<(), ChartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::MalformedRecord {
            index,
            field,
            problem: FieldProblem::NonFinite,
        })
    }
}

/// A row as supplied by the host's data transform stage.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RawRecord {
    /// Category name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Marginal abatement cost.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "marginal_Abatement_Cost", default)
    )]
    pub marginal_abatement_cost: Option<f64>,
    /// Abatement capacity.
    #[cfg_attr(feature = "serde", serde(rename = "abatement_Capacity", default))]
    pub abatement_capacity: Option<f64>,
    /// Alternative label.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "abatement_Alternative", default)
    )]
    pub abatement_alternative: String,
}

impl RawRecord {
    /// Converts into a validated [`Record`].
    pub fn into_record(self, index: usize) -> Result<Record, ChartError> {
        let missing = |field| ChartError::MalformedRecord {
            index,
            field,
            problem: FieldProblem::Missing,
        };
        let cost = self
            .marginal_abatement_cost
            .ok_or_else(|| missing(RecordField::MarginalAbatementCost))?;
        let capacity = self
            .abatement_capacity
            .ok_or_else(|| missing(RecordField::AbatementCapacity))?;
        let record = Record::new(
            self.category,
            cost,
            capacity,
            self.abatement_alternative,
        );
        record.validate(index)?;
        Ok(record)
    }
}

/// Converts host rows into records, stopping at the first malformed row.
pub fn records_from_raw(
    rows: impl IntoIterator<Item = RawRecord>,
) -> Result<Vec<Record>, ChartError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_record(index))
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn raw(cost: Option<f64>, capacity: Option<f64>) -> RawRecord {
        RawRecord {
            category: "Energy".into(),
            marginal_abatement_cost: cost,
            abatement_capacity: capacity,
            abatement_alternative: "Solar PV".into(),
        }
    }

    #[test]
    fn missing_cost_is_reported_with_index() {
        let rows = vec![raw(Some(1.0), Some(2.0)), raw(None, Some(2.0))];
        let err = records_from_raw(rows).unwrap_err();
        assert_eq!(
            err,
            ChartError::MalformedRecord {
                index: 1,
                field: RecordField::MarginalAbatementCost,
                problem: FieldProblem::Missing,
            }
        );
    }

    #[test]
    fn nan_capacity_is_non_finite() {
        let err = raw(Some(1.0), Some(f64::NAN)).into_record(0).unwrap_err();
        assert_eq!(
            err,
            ChartError::MalformedRecord {
                index: 0,
                field: RecordField::AbatementCapacity,
                problem: FieldProblem::NonFinite,
            }
        );
    }

    #[test]
    fn infinite_cost_fails_validation() {
        let r = Record::new("A", f64::NEG_INFINITY, 1.0, "x");
        assert!(r.validate(7).is_err());
    }

    #[test]
    fn valid_rows_convert_in_order() {
        let rows = vec![raw(Some(-3.0), Some(10.0)), raw(Some(4.0), Some(0.0))];
        let records = records_from_raw(rows).expect("valid rows");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].marginal_abatement_cost, -3.0);
        assert_eq!(records[1].abatement_capacity, 0.0);
    }
}
