//! Image placement planning.
//!
//! The first image always leads the article as the hero; the rest are
//! spread through the body at a spacing derived from the paragraph count.
//! Consecutive portrait/square images are paired side by side; everything
//! else sits centered. Capacity limits belong to the extraction
//! collaborator — no image is ever dropped here.

use serde::Serialize;

use crate::content::ExtractedImage;

/// Minimum paragraph gap between planned figure positions.
pub const MIN_IMAGE_SPACING: usize = 3;

/// How a planned figure sits in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Full width, before all body content. At most one, always the first
    /// image.
    Hero,
    /// A single centered figure between paragraphs.
    Centered,
    /// One half of a side-by-side pair of non-landscape images.
    Paired,
}

impl PlacementKind {
    /// CSS class token for this placement.
    pub fn as_class(&self) -> &'static str {
        match self {
            PlacementKind::Hero => "hero",
            PlacementKind::Centered => "centered",
            PlacementKind::Paired => "paired",
        }
    }
}

/// A planned position for one image.
///
/// Placements reference images by index into the analyzed content's image
/// list rather than copying the (potentially large) encoded payload. Paired
/// placements point at each other through `pair_with` indices into the
/// placement list itself; both members of a pair are present in the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePlacement {
    /// Index of the image in the source image sequence.
    pub image_index: usize,
    /// Placement type.
    pub kind: PlacementKind,
    /// Target paragraph index, clamped to the valid range. Placement is
    /// advisory; the renderer may still reflow.
    pub paragraph_index: usize,
    /// For paired placements, the placement-list index of the partner.
    pub pair_with: Option<usize>,
}

/// Plans a placement for every image.
///
/// - An empty image list yields an empty plan.
/// - Image 0 becomes the hero at paragraph 0, unconditionally.
/// - The rest land at `counter * spacing`, clamped to the last paragraph,
///   where `spacing = max(3, paragraph_count / (image_count + 1))` once
///   there is more than one image and at least one paragraph.
/// - Two consecutive non-landscape images pair up at the same position;
///   the counter advances once per decision, pair or single, so positions
///   are monotonically non-decreasing.
///
/// # Example
///
/// ```rust
/// use folio_core::{ExtractedImage, PlacementKind, plan_image_placements};
///
/// let images = vec![ExtractedImage { width: 1200, height: 800, ..Default::default() }];
/// let plan = plan_image_placements(&images, 12);
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan[0].kind, PlacementKind::Hero);
/// assert_eq!(plan[0].paragraph_index, 0);
/// ```
pub fn plan_image_placements(images: &[ExtractedImage], paragraph_count: usize) -> Vec<ImagePlacement> {
    if images.is_empty() {
        return Vec::new();
    }

    let spacing = if paragraph_count > 0 && images.len() > 1 {
        MIN_IMAGE_SPACING.max(paragraph_count / (images.len() + 1))
    } else {
        MIN_IMAGE_SPACING
    };

    let mut placements = Vec::with_capacity(images.len());
    placements.push(ImagePlacement {
        image_index: 0,
        kind: PlacementKind::Hero,
        paragraph_index: 0,
        pair_with: None,
    });

    let last_paragraph = paragraph_count.saturating_sub(1);
    let mut image_index = 1;
    let mut position_counter = 1;

    while image_index < images.len() {
        let position = (position_counter * spacing).min(last_paragraph);

        let portrait = !images[image_index].is_landscape();
        let next_is_portrait = image_index + 1 < images.len() && !images[image_index + 1].is_landscape();

        if portrait && next_is_portrait {
            let lead = placements.len();
            placements.push(ImagePlacement {
                image_index,
                kind: PlacementKind::Paired,
                paragraph_index: position,
                pair_with: Some(lead + 1),
            });
            placements.push(ImagePlacement {
                image_index: image_index + 1,
                kind: PlacementKind::Paired,
                paragraph_index: position,
                pair_with: Some(lead),
            });
            image_index += 2;
        } else {
            placements.push(ImagePlacement {
                image_index,
                kind: PlacementKind::Centered,
                paragraph_index: position,
                pair_with: None,
            });
            image_index += 1;
        }

        position_counter += 1;
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape() -> ExtractedImage {
        ExtractedImage { width: 1200, height: 800, ..Default::default() }
    }

    fn portrait() -> ExtractedImage {
        ExtractedImage { width: 600, height: 900, ..Default::default() }
    }

    #[test]
    fn test_empty_images_empty_plan() {
        assert!(plan_image_placements(&[], 20).is_empty());
    }

    #[test]
    fn test_single_image_is_hero() {
        let plan = plan_image_placements(&[landscape()], 10);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].kind, PlacementKind::Hero);
        assert_eq!(plan[0].paragraph_index, 0);
        assert_eq!(plan[0].image_index, 0);
    }

    #[test]
    fn test_portrait_first_image_is_still_hero() {
        let plan = plan_image_placements(&[portrait(), landscape()], 10);
        assert_eq!(plan[0].kind, PlacementKind::Hero);
    }

    #[test]
    fn test_all_landscape_never_pairs() {
        let images = vec![landscape(); 5];
        let plan = plan_image_placements(&images, 20);

        assert_eq!(plan.len(), 5);
        assert_eq!(plan[0].kind, PlacementKind::Hero);
        for placement in &plan[1..] {
            assert_eq!(placement.kind, PlacementKind::Centered);
            assert_eq!(placement.pair_with, None);
        }

        // spacing = max(3, 20 / 6) = 3
        let positions: Vec<usize> = plan[1..].iter().map(|p| p.paragraph_index).collect();
        assert_eq!(positions, vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_consecutive_portraits_pair() {
        let images = vec![landscape(), portrait(), portrait()];
        let plan = plan_image_placements(&images, 30);

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[1].kind, PlacementKind::Paired);
        assert_eq!(plan[2].kind, PlacementKind::Paired);
        assert_eq!(plan[1].pair_with, Some(2));
        assert_eq!(plan[2].pair_with, Some(1));
        assert_eq!(plan[1].paragraph_index, plan[2].paragraph_index);
    }

    #[test]
    fn test_lone_portrait_stays_centered() {
        let images = vec![landscape(), portrait(), landscape()];
        let plan = plan_image_placements(&images, 30);

        assert_eq!(plan[1].kind, PlacementKind::Centered);
        assert_eq!(plan[2].kind, PlacementKind::Centered);
    }

    #[test]
    fn test_pair_counts_as_one_position() {
        // hero, pair, single: the single lands one spacing step after the pair
        let images = vec![landscape(), portrait(), portrait(), landscape()];
        let plan = plan_image_placements(&images, 40);

        // spacing = max(3, 40 / 5) = 8
        assert_eq!(plan[1].paragraph_index, 8);
        assert_eq!(plan[2].paragraph_index, 8);
        assert_eq!(plan[3].paragraph_index, 16);
    }

    #[test]
    fn test_positions_clamped_to_last_paragraph() {
        let images = vec![landscape(); 6];
        let plan = plan_image_placements(&images, 4);

        for placement in &plan {
            assert!(placement.paragraph_index < 4);
        }
        assert_eq!(plan.last().unwrap().paragraph_index, 3);
    }

    #[test]
    fn test_zero_paragraphs_clamps_to_zero() {
        let images = vec![landscape(), landscape()];
        let plan = plan_image_placements(&images, 0);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].paragraph_index, 0);
    }

    #[test]
    fn test_positions_monotonic() {
        let images = vec![landscape(), portrait(), landscape(), portrait(), portrait(), landscape()];
        let plan = plan_image_placements(&images, 25);

        let positions: Vec<usize> = plan.iter().map(|p| p.paragraph_index).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_no_image_dropped() {
        let images = vec![portrait(); 7];
        let plan = plan_image_placements(&images, 50);

        let mut seen: Vec<usize> = plan.iter().map(|p| p.image_index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }
}
