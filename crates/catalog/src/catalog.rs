//! The injected, immutable feature registry.

use std::collections::HashMap;

use commerceadmin_core::{DomainError, DomainResult};

use crate::feature::{Feature, FeatureId};

/// Registry of every application feature, keyed by feature id.
///
/// Constructed once (typically at process start from
/// [`Catalog::standard`]) and passed by reference to consumers. Iteration
/// order is declaration order, which keeps grouped UI rendering stable.
#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<Feature>,
    index: HashMap<FeatureId, usize>,
}

impl Catalog {
    /// Build a catalog from feature declarations.
    ///
    /// Fails with [`DomainError::Integrity`] on a duplicate feature id.
    pub fn build(features: impl IntoIterator<Item = Feature>) -> DomainResult<Self> {
        let features: Vec<Feature> = features.into_iter().collect();
        let mut index = HashMap::with_capacity(features.len());
        for (position, feature) in features.iter().enumerate() {
            if index.insert(feature.id().clone(), position).is_some() {
                return Err(DomainError::integrity(format!(
                    "duplicate feature id '{}' in catalog",
                    feature.id()
                )));
            }
        }
        Ok(Self { features, index })
    }

    /// The production feature registry (see `standard.rs`).
    pub fn standard() -> Self {
        Self::build(crate::standard::standard_features())
            .expect("standard catalog feature ids are unique")
    }

    pub fn get(&self, id: &FeatureId) -> Option<&Feature> {
        self.index.get(id).map(|&position| &self.features[position])
    }

    /// Look up a feature by id, failing with [`DomainError::NotFound`] when
    /// absent. A miss here is a programming error in the caller.
    pub fn lookup(&self, id: &FeatureId) -> DomainResult<&Feature> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("feature '{id}'")))
    }

    /// Every feature, in declaration order.
    pub fn all(&self) -> &[Feature] {
        &self.features
    }

    /// Features grouped by classification tag.
    ///
    /// Groups appear in first-declaration order; features within a group keep
    /// declaration order.
    pub fn by_group(&self) -> Vec<(&str, Vec<&Feature>)> {
        let mut groups: Vec<(&str, Vec<&Feature>)> = Vec::new();
        for feature in &self.features {
            match groups.iter_mut().find(|(label, _)| *label == feature.group()) {
                Some((_, members)) => members.push(feature),
                None => groups.push((feature.group(), vec![feature])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
