//! Activity classes and the ID/index translation used for label encoding.
//!
//! Annotation files refer to classes by stable, sparse IDs (`100`, `8100`, ...).
//! Training code needs dense positions `0..N-1` in declaration order. An
//! [`ActSet`] owns one complete taxonomy and translates between the two.

use crate::error::{OpenPackError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ---------------------------------------------------------------------------
// ActClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActClass {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_ignore: bool,
}

impl ActClass {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_ignore: false,
        }
    }

    /// A class excluded from scoring and training (null, unknown, errors).
    pub fn ignored(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_ignore: true,
        }
    }
}

// ---------------------------------------------------------------------------
// IgnoreSelection
// ---------------------------------------------------------------------------

/// Result of an ignore-class query.
///
/// Most taxonomies carry a single ignore class, so `One` gives direct access
/// to it. Anything else, including no ignore class at all, is `Many`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IgnoreSelection<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Copy> IgnoreSelection<T> {
    fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            IgnoreSelection::One(values.remove(0))
        } else {
            IgnoreSelection::Many(values)
        }
    }

    /// The value when exactly one ignore class exists.
    pub fn single(&self) -> Option<T> {
        match self {
            IgnoreSelection::One(v) => Some(*v),
            IgnoreSelection::Many(_) => None,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        match self {
            IgnoreSelection::One(v) => vec![*v],
            IgnoreSelection::Many(vs) => vs.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IgnoreSelection::Many(vs) if vs.is_empty())
    }
}

// ---------------------------------------------------------------------------
// ClassTuple
// ---------------------------------------------------------------------------

/// Output of [`ActSet::to_tuple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassTuple<'a> {
    Descriptors(&'a [ActClass]),
    Pairs(Vec<(u32, &'a str)>),
}

// ---------------------------------------------------------------------------
// ActSet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ActSet {
    classes: Vec<ActClass>,
    #[serde(skip)]
    index_of: HashMap<u32, usize>,
}

impl ActSet {
    /// Build a set from classes in declaration order. IDs must be unique.
    pub fn new(classes: Vec<ActClass>) -> Result<Self> {
        let mut index_of = HashMap::with_capacity(classes.len());
        for (i, cls) in classes.iter().enumerate() {
            if index_of.insert(cls.id, i).is_some() {
                return Err(OpenPackError::DuplicateClassId(cls.id));
            }
        }
        Ok(Self { classes, index_of })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActClass> {
        self.classes.iter()
    }

    pub fn classes(&self) -> &[ActClass] {
        &self.classes
    }

    /// `(id, name)` pairs in declaration order.
    pub fn to_pairs(&self) -> Vec<(u32, &str)> {
        self.classes
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect()
    }

    /// Descriptors when `keep_descriptor` is set, `(id, name)` pairs otherwise.
    pub fn to_tuple(&self, keep_descriptor: bool) -> ClassTuple<'_> {
        if keep_descriptor {
            ClassTuple::Descriptors(&self.classes)
        } else {
            ClassTuple::Pairs(self.to_pairs())
        }
    }

    pub fn get_ids(&self) -> Vec<u32> {
        self.classes.iter().map(|c| c.id).collect()
    }

    pub fn get(&self, id: u32) -> Option<&ActClass> {
        self.position(id).map(|i| &self.classes[i])
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    pub fn by_index(&self, index: usize) -> Option<&ActClass> {
        self.classes.get(index)
    }

    pub fn get_ignore_index(&self) -> IgnoreSelection<usize> {
        let index = self
            .classes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_ignore)
            .map(|(i, _)| i)
            .collect();
        IgnoreSelection::from_vec(index)
    }

    pub fn get_ignore_id(&self) -> IgnoreSelection<u32> {
        let ids = self
            .classes
            .iter()
            .filter(|c| c.is_ignore)
            .map(|c| c.id)
            .collect();
        IgnoreSelection::from_vec(ids)
    }

    /// Translate class IDs into positional indices.
    ///
    /// Every input must belong to this set. Otherwise nothing is translated and
    /// the error lists each unknown ID once, in ascending order.
    pub fn convert_id_to_index(&self, ids: &[u32]) -> Result<Vec<usize>> {
        tracing::debug!(
            classes = self.len(),
            inputs = ids.len(),
            "convert activity IDs into index"
        );

        let unknown: BTreeSet<u32> = ids
            .iter()
            .copied()
            .filter(|id| !self.index_of.contains_key(id))
            .collect();
        if !unknown.is_empty() {
            return Err(OpenPackError::UnknownClassIds(unknown.into_iter().collect()));
        }

        Ok(ids.iter().map(|id| self.index_of[id]).collect())
    }

    /// Translate positional indices into class IDs. Same failure policy as
    /// [`ActSet::convert_id_to_index`].
    pub fn convert_index_to_id(&self, index: &[usize]) -> Result<Vec<u32>> {
        tracing::debug!(
            classes = self.len(),
            inputs = index.len(),
            "convert activity index into IDs"
        );

        let unknown: BTreeSet<usize> = index
            .iter()
            .copied()
            .filter(|&i| i >= self.classes.len())
            .collect();
        if !unknown.is_empty() {
            return Err(OpenPackError::UnknownClassIndices(
                unknown.into_iter().collect(),
            ));
        }

        Ok(index.iter().map(|&i| self.classes[i].id).collect())
    }
}

impl PartialEq for ActSet {
    fn eq(&self, other: &Self) -> bool {
        self.classes == other.classes
    }
}

impl Eq for ActSet {}

impl<'a> IntoIterator for &'a ActSet {
    type Item = &'a ActClass;
    type IntoIter = std::slice::Iter<'a, ActClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for ActSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            classes: Vec<ActClass>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ActSet::new(raw.classes).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
