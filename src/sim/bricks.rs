//! Brick grid
//!
//! The grid is laid out once per game and never resized. Destroyed bricks keep
//! their slot (status flag, not removal) so grid indices stay stable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::BrickLayout;

/// Brick status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// A single brick slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, assigned at layout time
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Open-interval point test: a point on an edge is outside
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.pos.x
            && p.x < self.pos.x + self.size.x
            && p.y > self.pos.y
            && p.y < self.pos.y + self.size.y
    }
}

/// Fixed-size grid of brick slots, stored row by row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a fully populated grid
    pub fn new(layout: &BrickLayout) -> Self {
        let size = Vec2::new(layout.width, layout.height);
        let mut bricks = Vec::with_capacity(layout.count());
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let x = col as f32 * (layout.width + layout.padding) + layout.offset_left;
                let y = row as f32 * (layout.height + layout.padding) + layout.offset_top;
                bricks.push(Brick {
                    pos: Vec2::new(x, y),
                    size,
                    status: BrickStatus::Alive,
                });
            }
        }

        Self {
            rows: layout.rows,
            columns: layout.columns,
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total slots (alive or destroyed)
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Slot at (row, column)
    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row < self.rows && col < self.columns {
            self.bricks.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// All slots in scan order (top row first, left to right)
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    /// Index of the first alive brick containing `p`, in scan order
    pub fn first_hit(&self, p: Vec2) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.is_alive() && b.contains_point(p))
    }

    /// Mark a slot destroyed. Returns false if it was already destroyed.
    pub fn destroy(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if brick.is_alive() => {
                brick.status = BrickStatus::Destroyed;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_positions() {
        let grid = BrickGrid::new(&BrickLayout::default());
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.alive_count(), 15);

        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.pos, Vec2::new(30.0, 30.0));

        // Column spacing is width + padding, row spacing is height + padding
        let last = grid.get(2, 4).unwrap();
        assert_eq!(last.pos, Vec2::new(30.0 + 4.0 * 85.0, 30.0 + 2.0 * 30.0));

        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_point_test_is_open_interval() {
        let grid = BrickGrid::new(&BrickLayout::default());
        let brick = grid.get(0, 0).unwrap();

        assert!(brick.contains_point(Vec2::new(31.0, 31.0)));
        assert!(!brick.contains_point(Vec2::new(30.0, 40.0)));
        assert!(!brick.contains_point(Vec2::new(105.0, 40.0)));
        assert!(!brick.contains_point(Vec2::new(60.0, 50.0)));
    }

    #[test]
    fn test_first_hit_skips_destroyed() {
        let mut grid = BrickGrid::new(&BrickLayout::default());
        let p = Vec2::new(60.0, 40.0);
        assert_eq!(grid.first_hit(p), Some(0));

        assert!(grid.destroy(0));
        assert!(!grid.destroy(0));
        assert_eq!(grid.first_hit(p), None);
        assert_eq!(grid.alive_count(), 14);
        // Slot is kept
        assert_eq!(grid.len(), 15);
    }

    #[test]
    fn test_first_hit_uses_scan_order() {
        // Overlapping bricks: negative padding stacks neighbours on top of each other
        let layout = BrickLayout {
            rows: 2,
            columns: 2,
            padding: -40.0,
            ..BrickLayout::default()
        };
        let grid = BrickGrid::new(&layout);
        // Inside both top-row slots
        let p = Vec2::new(70.0, 31.0);
        assert!(grid.iter().filter(|b| b.contains_point(p)).count() > 1);
        assert_eq!(grid.first_hit(p), Some(0));
    }
}
