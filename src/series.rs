//! Series module - Named measurement sequences and their derived node axis

use crate::error::{ChartError, Result};

/// Node count of the smallest cluster in a scaling run.
pub const NODE_AXIS_START: u32 = 12;
/// Nodes added between consecutive runs.
pub const NODE_AXIS_STEP: u32 = 2;

// ============================================================================
// UNIT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Milliseconds,
    RequestsPerSecond,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Milliseconds => "ms",
            Unit::RequestsPerSecond => "req/s",
        }
    }
}

// ============================================================================
// NODE AXIS - x values derived from a series length
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAxis {
    values: Vec<u32>,
}

impl NodeAxis {
    /// Axis for a series of `len` measurements: `12, 14, 16, ...`.
    pub fn for_len(len: usize) -> Self {
        let values = (0..len as u32)
            .map(|i| NODE_AXIS_START + NODE_AXIS_STEP * i)
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<u32> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.values.last().copied()
    }
}

// ============================================================================
// SERIES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub unit: Unit,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, unit: Unit, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Panel caption, e.g. `Latency(ms)`.
    pub fn title(&self) -> String {
        format!("{}({})", self.name, self.unit.suffix())
    }

    pub fn node_axis(&self) -> NodeAxis {
        NodeAxis::for_len(self.values.len())
    }

    /// Pairs each value with its node count, dropping non-finite values.
    pub fn points(&self, axis: &NodeAxis) -> Result<Vec<(f64, f64)>> {
        self.check_axis(axis)?;

        Ok(axis
            .values()
            .iter()
            .zip(self.values.iter())
            .filter(|(_, y)| y.is_finite())
            .map(|(&x, &y)| (x as f64, y))
            .collect())
    }

    /// Splits the plotted line into runs of consecutive finite values, so a
    /// non-finite value leaves a gap instead of being bridged.
    pub fn segments(&self, axis: &NodeAxis) -> Result<Vec<Vec<(f64, f64)>>> {
        self.check_axis(axis)?;

        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in axis.values().iter().zip(self.values.iter()) {
            if y.is_finite() {
                current.push((x as f64, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        Ok(segments)
    }

    fn check_axis(&self, axis: &NodeAxis) -> Result<()> {
        if axis.len() != self.values.len() {
            return Err(ChartError::MismatchedLength {
                series: self.name.clone(),
                values: self.values.len(),
                axis: axis.len(),
            });
        }
        Ok(())
    }

    /// Smallest and largest finite value, or `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(ChartError::EmptySeries {
                series: self.name.clone(),
            });
        }
        Ok(())
    }
}
