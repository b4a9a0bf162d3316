//! Font profile builder.
//!
//! Surveys every font size in the document, groups near-identical sizes
//! into epsilon-tolerant classes, and derives the H1/H2/H3 thresholds
//! positionally from the classes above body text.

use std::collections::BTreeMap;

use crate::model::{HeadingLevel, TextSpan};

/// One epsilon-tolerant font size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeClass {
    /// Representative size: the largest raw size observed in the class
    pub size: f32,
    /// Total span count in the class
    pub count: usize,
    /// Last page the class appears on
    pub last_page: u32,
}

/// Font size survey of one document.
///
/// Invariant: whenever assigned, `h1 >= h2 >= h3`, and every threshold is
/// a size actually observed in the document.
#[derive(Debug, Clone)]
pub struct FontProfile {
    /// All size classes, largest first
    pub classes: Vec<SizeClass>,
    /// Body text size (most frequent class)
    pub body_size: Option<f32>,
    /// Display size demoted from threshold candidacy (title page type)
    pub title_size: Option<f32>,
    /// H1 threshold
    pub h1: Option<f32>,
    /// H2 threshold
    pub h2: Option<f32>,
    /// H3 threshold
    pub h3: Option<f32>,
    epsilon: f32,
}

impl FontProfile {
    /// Survey the span sequence and derive thresholds.
    pub fn build(spans: &[TextSpan], epsilon: f32) -> Self {
        // key -> (representative size, count, last page)
        let mut buckets: BTreeMap<i32, (f32, usize, u32)> = BTreeMap::new();
        for span in spans {
            let entry = buckets
                .entry(size_key(span.font_size, epsilon))
                .or_insert((span.font_size, 0, span.page));
            entry.0 = entry.0.max(span.font_size);
            entry.1 += 1;
            entry.2 = entry.2.max(span.page);
        }

        let classes: Vec<SizeClass> = buckets
            .values()
            .rev()
            .map(|&(size, count, last_page)| SizeClass {
                size,
                count,
                last_page,
            })
            .collect();

        let mut profile = Self {
            classes,
            body_size: None,
            title_size: None,
            h1: None,
            h2: None,
            h3: None,
            epsilon,
        };

        if profile.classes.is_empty() {
            return profile;
        }

        // Body class: highest span count; ties go to the smaller size.
        let mut body = &profile.classes[0];
        for class in &profile.classes[1..] {
            if class.count >= body.count {
                body = class;
            }
        }
        let body_key = size_key(body.size, epsilon);
        profile.body_size = Some(body.size);

        // Candidate classes sit strictly above body text, largest first.
        let mut candidates: Vec<SizeClass> = profile
            .classes
            .iter()
            .filter(|c| size_key(c.size, epsilon) > body_key)
            .copied()
            .collect();

        // A largest class confined to page 1 is title-page display type,
        // not a recurring heading level.
        if let Some(first) = candidates.first() {
            if first.last_page <= 1 {
                profile.title_size = Some(first.size);
                candidates.remove(0);
            }
        }

        profile.h1 = candidates.first().map(|c| c.size);
        profile.h2 = candidates.get(1).map(|c| c.size);
        profile.h3 = candidates.get(2).map(|c| c.size);
        profile
    }

    /// Map a font size to its heading level, evaluated H1 to H3 so a size
    /// can never match two levels.
    pub fn level_for(&self, font_size: f32) -> Option<HeadingLevel> {
        let key = size_key(font_size, self.epsilon);

        for (threshold, level) in [
            (self.h1, HeadingLevel::H1),
            (self.h2, HeadingLevel::H2),
            (self.h3, HeadingLevel::H3),
        ] {
            if let Some(size) = threshold {
                if size_key(size, self.epsilon) == key {
                    return Some(level);
                }
            }
        }

        None
    }

    /// Whether any heading level is assignable.
    pub fn has_thresholds(&self) -> bool {
        self.h1.is_some()
    }
}

/// Epsilon-tolerant size class key.
pub(crate) fn size_key(size: f32, epsilon: f32) -> i32 {
    (size / epsilon).round() as i32
}
