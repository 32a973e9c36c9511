//! Per-element scalar-pair field with an explicit valid/missing state.
//!
//! The field holds exactly one [`ElementState`] per mesh element, so "has a
//! value" and "is missing" can never disagree. Entries only move from
//! `Missing` to `Valid`; a valid value is never overwritten or removed.

use std::collections::BTreeMap;

use crate::mesh_error::MeshFillError;
use crate::topology::point::ElementId;

/// The pair of scalars carried by an element (e.g. temperature and
/// heat-transfer coefficient).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldValue {
    pub first: f64,
    pub second: f64,
}

impl FieldValue {
    #[inline]
    pub const fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// Sentinel written for elements that never received a value.
    pub const NAN: FieldValue = FieldValue::new(f64::NAN, f64::NAN);
}

impl From<(f64, f64)> for FieldValue {
    fn from((first, second): (f64, f64)) -> Self {
        Self { first, second }
    }
}

/// Known or unknown value of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementState {
    Valid(FieldValue),
    Missing,
}

impl ElementState {
    #[inline]
    pub fn value(self) -> Option<FieldValue> {
        match self {
            ElementState::Valid(v) => Some(v),
            ElementState::Missing => None,
        }
    }

    #[inline]
    pub fn is_missing(self) -> bool {
        matches!(self, ElementState::Missing)
    }
}

/// Arithmetic mean of a field over a set of elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldAverage {
    /// Number of valid elements that contributed.
    pub count: usize,
    pub first: f64,
    pub second: f64,
}

/// Valid/missing partition of every element of a mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementField {
    states: BTreeMap<ElementId, ElementState>,
}

impl ElementField {
    /// Every element starts `Missing`.
    pub fn missing(elements: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            states: elements
                .into_iter()
                .map(|id| (id, ElementState::Missing))
                .collect(),
        }
    }

    /// Start from `elements`, marking those present in `results` valid.
    ///
    /// Results for ids outside `elements` are dropped.
    pub fn from_results<I>(elements: impl IntoIterator<Item = ElementId>, results: I) -> Self
    where
        I: IntoIterator<Item = (ElementId, FieldValue)>,
    {
        let mut field = Self::missing(elements);
        let mut dropped = 0usize;
        for (id, value) in results {
            match field.states.get_mut(&id) {
                Some(state) => *state = ElementState::Valid(value),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::debug!("dropped {dropped} result rows for elements outside the mesh");
        }
        field
    }

    #[inline]
    pub fn state(&self, id: ElementId) -> Option<ElementState> {
        self.states.get(&id).copied()
    }

    /// Value of a valid element; `None` for missing or unknown ids.
    #[inline]
    pub fn value(&self, id: ElementId) -> Option<FieldValue> {
        self.state(id).and_then(ElementState::value)
    }

    /// Value of an element, or [`FieldValue::NAN`] if it has none.
    pub fn value_or_nan(&self, id: ElementId) -> FieldValue {
        self.value(id).unwrap_or(FieldValue::NAN)
    }

    #[inline]
    pub fn is_missing(&self, id: ElementId) -> bool {
        self.state(id).is_some_and(ElementState::is_missing)
    }

    #[inline]
    pub fn is_valid(&self, id: ElementId) -> bool {
        self.value(id).is_some()
    }

    /// Assign a value to a missing element.
    ///
    /// Returns `Ok(false)` and leaves the field untouched if the element is
    /// already valid.
    pub fn try_fill(&mut self, id: ElementId, value: FieldValue) -> Result<bool, MeshFillError> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(MeshFillError::UnknownElement(id))?;
        match state {
            ElementState::Missing => {
                *state = ElementState::Valid(value);
                Ok(true)
            }
            ElementState::Valid(_) => Ok(false),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.states.values().filter(|s| !s.is_missing()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.states.values().filter(|s| s.is_missing()).count()
    }

    /// All entries in ascending element id.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, ElementState)> + '_ {
        self.states.iter().map(|(&id, &state)| (id, state))
    }

    pub fn valid(&self) -> impl Iterator<Item = (ElementId, FieldValue)> + '_ {
        self.iter().filter_map(|(id, s)| s.value().map(|v| (id, v)))
    }

    pub fn missing_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.iter().filter(|(_, s)| s.is_missing()).map(|(id, _)| id)
    }

    /// Known values only, for handing to an export collaborator.
    pub fn to_results(&self) -> BTreeMap<ElementId, FieldValue> {
        self.valid().collect()
    }

    /// Mean of both scalars over the valid elements among `ids`.
    ///
    /// Missing and unknown ids are skipped; duplicates in `ids` count once.
    /// Returns `None` if no listed element holds a value.
    pub fn average_over(&self, ids: impl IntoIterator<Item = ElementId>) -> Option<FieldAverage> {
        let mut seen = std::collections::BTreeSet::new();
        let (mut count, mut first, mut second) = (0usize, 0.0, 0.0);
        for id in ids {
            if !seen.insert(id) {
                continue;
            }
            if let Some(v) = self.value(id) {
                count += 1;
                first += v.first;
                second += v.second;
            }
        }
        (count > 0).then(|| FieldAverage {
            count,
            first: first / count as f64,
            second: second / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(i: u64) -> ElementId {
        ElementId::new(i)
    }

    fn sample() -> ElementField {
        ElementField::from_results(
            [el(1), el(2), el(3)],
            [
                (el(1), FieldValue::new(10.0, 1.0e5)),
                (el(9), FieldValue::new(-1.0, -1.0)),
            ],
        )
    }

    #[test]
    fn results_outside_mesh_are_dropped() {
        let field = sample();
        assert_eq!(field.len(), 3);
        assert_eq!(field.valid_count(), 1);
        assert_eq!(field.missing_count(), 2);
        assert_eq!(field.state(el(9)), None);
        assert_eq!(field.missing_ids().collect::<Vec<_>>(), vec![el(2), el(3)]);
    }

    #[test]
    fn fill_never_overwrites() {
        let mut field = sample();
        assert_eq!(field.try_fill(el(2), FieldValue::new(1.0, 2.0)), Ok(true));
        assert_eq!(field.try_fill(el(2), FieldValue::new(3.0, 4.0)), Ok(false));
        assert_eq!(field.value(el(2)), Some(FieldValue::new(1.0, 2.0)));
        assert_eq!(field.try_fill(el(1), FieldValue::new(0.0, 0.0)), Ok(false));
        assert_eq!(field.value(el(1)), Some(FieldValue::new(10.0, 1.0e5)));
        assert_eq!(
            field.try_fill(el(42), FieldValue::new(0.0, 0.0)),
            Err(MeshFillError::UnknownElement(el(42)))
        );
    }

    #[test]
    fn nan_sentinel_for_missing() {
        let field = sample();
        let v = field.value_or_nan(el(3));
        assert!(v.first.is_nan() && v.second.is_nan());
        assert_eq!(field.to_results().len(), 1);
    }

    #[test]
    fn average_skips_missing_and_duplicates() {
        let mut field = sample();
        field.try_fill(el(2), FieldValue::new(20.0, 3.0e5)).unwrap();
        let avg = field
            .average_over([el(1), el(2), el(2), el(3), el(77)])
            .unwrap();
        assert_eq!(avg.count, 2);
        assert_eq!(avg.first, 15.0);
        assert_eq!(avg.second, 2.0e5);
        assert_eq!(field.average_over([el(3)]), None);
    }
}
