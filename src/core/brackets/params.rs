//! The parameter collection and its three-way merge.
//!
//! `Parameters` is semantically a mapping from unique name to description,
//! exposed as an ordered sequence. The serialized form is always sorted
//! ascending by name so stored bytes are deterministic regardless of
//! insertion order.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParameterError, Result};

/// A named placeholder with a free-form description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Parameter {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// An ordered, name-keyed collection of parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Projection to a `name -> description` map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|p| (p.name.clone(), p.description.clone()))
            .collect()
    }

    /// Parameter names in their current (possibly unsorted) order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }

    /// Look up a description by name.
    ///
    /// # Errors
    ///
    /// Fails with `ParameterNotFound` when the name is absent.
    pub fn description(&self, name: &str) -> Result<&str> {
        self.get(name)
            .map(|p| p.description.as_str())
            .ok_or_else(|| ParameterError::ParameterNotFound(name.to_string()).into())
    }

    /// Upsert: overwrite the description when `name` exists, append
    /// otherwise. The collection is re-sorted by name afterwards.
    pub fn replace(&mut self, name: &str, description: &str) {
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(p) => p.description = description.to_string(),
            None => self.0.push(Parameter::new(name, description)),
        }
        self.0.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Reconcile this collection (the "priority" side, freshly re-parsed
    /// from an edited template) against `before` (the parameters prior to
    /// the edit) and `updated` (the stored parameters the user last saw).
    ///
    /// For each name present here:
    /// - new in the edit: a longer `updated` description wins over ours;
    /// - changed on both sides: the longer description wins, ties keep ours;
    /// - changed only in `updated`: take it;
    /// - otherwise: keep ours.
    ///
    /// "Longer" compares byte length. Names are never added or removed;
    /// this collection stays the source of truth for which parameters exist.
    pub fn three_way_merge(&mut self, before: &Parameters, updated: &Parameters) {
        let before = before.to_map();
        let updated = updated.to_map();

        for p in &mut self.0 {
            let b = before.get(&p.name);
            let u = updated.get(&p.name);

            match b {
                None => {
                    if let Some(u) = u {
                        if u.len() > p.description.len() {
                            p.description = u.clone();
                        }
                    }
                }
                Some(b) => {
                    let priority_changed = p.description != *b;
                    let updated_changed = u.is_some_and(|u| u != b);

                    if priority_changed && updated_changed {
                        let u = u.unwrap_or(b);
                        if u.len() > p.description.len() {
                            p.description = u.clone();
                        }
                    } else if updated_changed {
                        if let Some(u) = u {
                            p.description = u.clone();
                        }
                    }
                }
            }
        }
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(params: Vec<Parameter>) -> Self {
        Self(params)
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a JSON array sorted ascending by name.
impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted.serialize(serializer)
    }
}

/// Tolerates any input order and re-sorts by name.
impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut params = Vec::<Parameter>::deserialize(deserializer)?;
        params.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self(params))
    }
}
