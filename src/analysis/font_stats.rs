//! Font size statistics for heading detection.

use std::collections::HashMap;

use crate::model::TextFragment;

/// A size must exceed the body size by more than this to form a heading tier.
pub const HEADING_TIER_MARGIN: f32 = 1.0;

/// Occurrence count of each exact font size.
///
/// Sizes are kept in the order they were first seen, which makes the
/// body-size tie-break independent of hashing.
#[derive(Debug, Clone, Default)]
pub struct FontSizeDistribution {
    counts: Vec<(f32, usize)>,
    index: HashMap<u32, usize>,
}

impl FontSizeDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font size observation.
    pub fn add_size(&mut self, size: f32) {
        match self.index.get(&size.to_bits()) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(size.to_bits(), self.counts.len());
                self.counts.push((size, 1));
            }
        }
    }

    /// How often a size occurred.
    pub fn count(&self, size: f32) -> usize {
        self.index
            .get(&size.to_bits())
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no sizes were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct sizes with counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// The most frequent size. On a tie the size seen first wins.
    pub fn mode(&self) -> Option<f32> {
        let mut best: Option<(f32, usize)> = None;
        for &(size, count) in &self.counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((size, count));
            }
        }
        best.map(|(size, _)| size)
    }
}

impl<'a> FromIterator<&'a TextFragment> for FontSizeDistribution {
    fn from_iter<I: IntoIterator<Item = &'a TextFragment>>(iter: I) -> Self {
        let mut dist = Self::new();
        for fragment in iter {
            dist.add_size(fragment.font_size);
        }
        dist
    }
}

/// Body size and heading tiers for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontStatistics {
    /// Body text font size (most common)
    pub body_size: f32,
    /// Distinct sizes above `body_size + HEADING_TIER_MARGIN`, largest first
    pub heading_sizes: Vec<f32>,
}

impl FontStatistics {
    /// Analyze every fragment of a document in one pass.
    pub fn from_fragments<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a TextFragment>,
    {
        Self::from_distribution(&fragments.into_iter().collect())
    }

    /// Calculate body size and heading sizes.
    ///
    /// An empty distribution yields a body size of 0 and no tiers.
    pub fn from_distribution(dist: &FontSizeDistribution) -> Self {
        let Some(body_size) = dist.mode() else {
            return Self::default();
        };

        let mut heading_sizes: Vec<f32> = dist
            .iter()
            .map(|(size, _)| size)
            .filter(|size| *size > body_size + HEADING_TIER_MARGIN)
            .collect();
        heading_sizes.sort_by(|a, b| b.total_cmp(a));

        log::debug!(
            "font statistics: body size {}, heading tiers {:?}",
            body_size,
            heading_sizes
        );

        Self {
            body_size,
            heading_sizes,
        }
    }

    /// Check if a size is exactly one of the heading tiers.
    pub fn is_heading_size(&self, size: f32) -> bool {
        self.heading_sizes.iter().any(|s| *s == size)
    }
}
