// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data preparation: ordering, category colors and aggregate totals.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use hashbrown::HashMap;
use peniko::Color;

use crate::palette::Palette;
use crate::record::Record;

/// A category and its assigned color.
#[derive(Clone, Debug)]
pub struct CategoryColor {
    /// Category name.
    pub category: String,
    /// Assigned fill color.
    pub color: Color,
}

/// Records ordered for layout plus the derived category table.
#[derive(Clone, Debug)]
pub struct PreparedData {
    /// Records sorted ascending by cost; ties keep their input order.
    pub sorted: Vec<Record>,
    /// Distinct categories in first-seen order within `sorted`.
    pub categories: Vec<CategoryColor>,
    /// Sum of all abatement capacities.
    pub total_capacity: f64,
    index: HashMap<String, usize>,
}

impl PreparedData {
    /// Prepares `records` for layout.
    ///
    /// The input slice is not reordered; a sorted copy is kept instead.
    pub fn new(records: &[Record], palette: &Palette) -> Self {
        let mut sorted = records.to_vec();
        // `sort_by` is stable. Costs compare numerically, so `0.0` and `-0.0` tie and keep
        // their input order; unordered (NaN) pairs also tie.
        sorted.sort_by(|a, b| {
            a.marginal_abatement_cost
                .partial_cmp(&b.marginal_abatement_cost)
                .unwrap_or(Ordering::Equal)
        });

        let mut index = HashMap::new();
        let mut categories = Vec::new();
        for r in &sorted {
            if index.contains_key(&r.category) {
                continue;
            }
            let position = categories.len();
            index.insert(r.category.clone(), position);
            categories.push(CategoryColor {
                category: r.category.clone(),
                color: palette.color(position),
            });
        }

        if categories.len() > palette.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                categories = categories.len(),
                palette = palette.len(),
                "more categories than palette colors; applying exhaustion policy"
            );
        }

        let total_capacity = sorted.iter().map(|r| r.abatement_capacity).sum();

        Self {
            sorted,
            categories,
            total_capacity,
            index,
        }
    }

    /// Returns `(min, max)` of the marginal abatement cost, or `None` for empty input.
    pub fn cost_extent(&self) -> Option<(f64, f64)> {
        let first = self.sorted.first()?.marginal_abatement_cost;
        let last = self.sorted.last()?.marginal_abatement_cost;
        Some((first, last))
    }

    /// Returns the color assigned to `category`.
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.index
            .get(category)
            .and_then(|&i| self.categories.get(i))
            .map(|c| c.color)
    }
}
