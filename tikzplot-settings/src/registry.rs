//! Ordered setting registry

use crate::descriptor::{Category, Placement, SettingDescriptor, SettingInfo};
use std::collections::HashMap;
use tikzplot_core::{PlotError, PlotResult};

/// Ordered catalog of setting descriptors
///
/// Registration order is the emission order of inline fragments.
#[derive(Debug, Clone, Default)]
pub struct SettingRegistry {
    descriptors: Vec<SettingDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor
    ///
    /// A second descriptor with an existing id replaces the first in place,
    /// keeping its position.
    pub fn with_setting(mut self, descriptor: SettingDescriptor) -> Self {
        match self.index.get(descriptor.id) {
            Some(&slot) => self.descriptors[slot] = descriptor,
            None => {
                self.index.insert(descriptor.id, self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&SettingDescriptor> {
        self.index.get(id).map(|&slot| &self.descriptors[slot])
    }

    /// Look up a descriptor, failing with a suggestion for unknown ids
    pub fn require(&self, id: &str) -> PlotResult<&SettingDescriptor> {
        self.get(id).ok_or_else(|| {
            let similar = self.find_similar(id);
            let err = PlotError::unknown_setting(id);
            match similar.first() {
                Some(best) => err.with_suggestion(format!("Did you mean '{}'?", best)),
                None => err,
            }
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.descriptors.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| d.id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn leading(&self) -> Option<&SettingDescriptor> {
        self.descriptors.iter().find(|d| d.placement == Placement::Leading)
    }

    pub fn trailing(&self) -> Option<&SettingDescriptor> {
        self.descriptors.iter().find(|d| d.placement == Placement::Trailing)
    }

    /// Listing of descriptors, optionally restricted to one category
    pub fn catalog(&self, category: Option<Category>) -> Vec<SettingInfo> {
        self.descriptors
            .iter()
            .filter(|d| category.map_or(true, |c| d.category == c))
            .map(SettingDescriptor::info)
            .collect()
    }

    pub fn help(&self, id: &str) -> PlotResult<SettingInfo> {
        self.require(id).map(SettingDescriptor::info)
    }

    /// Registered ids resembling `id`, best match first
    pub fn find_similar(&self, id: &str) -> Vec<&'static str> {
        let query = id.to_lowercase();
        let mut matches: Vec<(&'static str, usize)> = self
            .descriptors
            .iter()
            .filter_map(|d| {
                let score = Self::similarity_score(&query, &d.id.to_lowercase());
                (score > 0).then_some((d.id, score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(id, _)| id).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;
        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        // Only a handful of shared letters is noise
        if score < 8 {
            0
        } else {
            score
        }
    }
}
