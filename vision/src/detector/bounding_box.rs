//! Bounding boxes and non-maximum suppression.

use opencv::core::Rect;

/// Axis-aligned box in integer pixel coordinates, corners inclusive
/// of (x1, y1) and exclusive of (x2, y2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).max(0)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.width(), self.height())
    }

    /// Intersection-over-union ratio with another box.
    pub fn iou(&self, other: &Self) -> f32 {
        let union = self.union_area(other);
        if union <= 0.0 {
            return 0.0;
        }
        self.intersection_area(other) / union
    }

    fn area(&self) -> f32 {
        (self.width() * self.height()) as f32
    }

    fn intersection_area(&self, other: &Self) -> f32 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        ((x2 - x1).max(0) * (y2 - y1).max(0)) as f32
    }

    fn union_area(&self, other: &Self) -> f32 {
        self.area() + other.area() - self.intersection_area(other)
    }
}

/// A detection candidate before class labels are attached.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub bbox: BoundingBox,
    pub confidence: f32,
    pub class_id: usize,
}

/// Greedy non-maximum suppression: keep the highest-confidence
/// candidate, discard everything overlapping it beyond
/// `iou_threshold`, repeat.
pub(crate) fn non_maximum_suppression(
    mut candidates: Vec<Candidate>,
    iou_threshold: f32,
) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let overlaps = kept
            .iter()
            .any(|k| k.bbox.iou(&candidate.bbox) > iou_threshold);
        if !overlaps {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(x1: i32, y1: i32, x2: i32, y2: i32, confidence: f32) -> Candidate {
        Candidate {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            confidence,
            class_id: 0,
        }
    }

    #[test]
    fn test_iou_identical_boxes() {
        let a = BoundingBox::new(0, 0, 10, 10);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_disjoint_boxes() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(20, 20, 30, 30);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_half_overlap() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(5, 0, 15, 10);
        // intersection 50, union 150
        assert!((a.iou(&b) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_box_has_zero_iou() {
        let a = BoundingBox::new(5, 5, 5, 5);
        let b = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_nms_keeps_highest_confidence() {
        let kept = non_maximum_suppression(
            vec![
                candidate(0, 0, 10, 10, 0.6),
                candidate(1, 1, 11, 11, 0.9),
                candidate(100, 100, 110, 110, 0.5),
            ],
            0.45,
        );

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].confidence, 0.9);
        assert_eq!(kept[1].bbox, BoundingBox::new(100, 100, 110, 110));
    }

    #[test]
    fn test_nms_keeps_non_overlapping() {
        let kept = non_maximum_suppression(
            vec![candidate(0, 0, 10, 10, 0.7), candidate(50, 50, 60, 60, 0.8)],
            0.45,
        );
        assert_eq!(kept.len(), 2);
    }
}
