use log::debug;

use super::common::ShapeId;
use super::{Shape, ShapeType};
use crate::error::{ShapeError, ShapeResult};

/// Ordered group of child shapes; later children paint on top.
///
/// A group has no color or position of its own: every whole-group operation
/// is applied to each child in list order. Children are owned exclusively,
/// they are moved in by [`Shape::add`] and moved out by [`Shape::remove`].
/// Cloning copies the whole subtree under fresh ids.
#[derive(Debug, Default)]
pub struct CompositeShape {
    id: ShapeId,
    children: Vec<ShapeType>,
}

impl CompositeShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[ShapeType] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get_child_mut(&mut self, index: usize) -> ShapeResult<&mut ShapeType> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(ShapeError::IndexOutOfRange { index, len })
    }

    /// True if a shape with `id` is this group or anywhere below it
    pub fn contains_id(&self, id: ShapeId) -> bool {
        self.id == id || self.children.iter().any(|child| child.contains_id(id))
    }
}

impl Clone for CompositeShape {
    fn clone(&self) -> Self {
        Self {
            id: ShapeId::new(),
            children: self.children.clone(),
        }
    }
}

impl PartialEq for CompositeShape {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Shape for CompositeShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "Group"
    }

    fn set_color(&mut self, r: i32, g: i32, b: i32) {
        for child in &mut self.children {
            child.set_color(r, g, b);
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    fn rotate(&mut self, angle: f32) {
        // Each child turns about its own reference point
        for child in &mut self.children {
            child.rotate(angle);
        }
    }

    fn set_rounded_edge(&mut self, round: f32) {
        for child in &mut self.children {
            child.set_rounded_edge(round);
        }
    }

    fn add(&mut self, child: ShapeType) -> ShapeResult<()> {
        if child.group_ids_include(self.id) {
            return Err(ShapeError::CycleDetected);
        }
        debug!("Group {}: adding {} {}", self.id, child.kind_name(), child.id());
        self.children.push(child);
        Ok(())
    }

    fn remove(&mut self, child: ShapeId) -> ShapeResult<Option<ShapeType>> {
        let removed = self
            .children
            .iter()
            .position(|c| c.id() == child)
            .map(|index| self.children.remove(index));
        if removed.is_none() {
            debug!("Group {}: {} is not a child, nothing removed", self.id, child);
        }
        Ok(removed)
    }

    fn get_child(&self, index: usize) -> ShapeResult<&ShapeType> {
        self.children.get(index).ok_or(ShapeError::IndexOutOfRange {
            index,
            len: self.children.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::factory;
    use egui::{Color32, Pos2};

    #[test]
    fn add_appends_in_order() {
        let mut group = CompositeShape::new();
        let first = factory::create_rectangle(Pos2::ZERO, 10, 10, Color32::BLUE).unwrap();
        let second = factory::create_polygon(Pos2::ZERO, 5, 10, Color32::RED).unwrap();
        let (first_id, second_id) = (first.id(), second.id());

        group.add(first).unwrap();
        group.add(second).unwrap();

        assert_eq!(group.get_child(0).unwrap().id(), first_id);
        assert_eq!(group.get_child(1).unwrap().id(), second_id);
    }

    #[test]
    fn adding_a_group_with_its_own_id_is_a_cycle() {
        let mut group = CompositeShape::new();
        let alias = CompositeShape {
            id: group.id,
            children: Vec::new(),
        };
        assert_eq!(group.add(ShapeType::Group(alias)), Err(ShapeError::CycleDetected));
        assert!(group.is_empty());
    }

    #[test]
    fn clone_copies_subtree_under_new_ids() {
        let leaf = factory::create_rectangle(Pos2::ZERO, 4, 4, Color32::BLUE).unwrap();
        let leaf_id = leaf.id();
        let mut group = CompositeShape::new();
        group.add(leaf).unwrap();

        let copy = group.clone();
        assert_ne!(copy.id(), group.id());
        assert!(!copy.contains_id(leaf_id));
        assert_eq!(copy, group);

        group.add(ShapeType::Group(copy)).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn contains_id_walks_nested_groups() {
        let leaf = factory::create_rectangle(Pos2::ZERO, 1, 1, Color32::BLUE).unwrap();
        let leaf_id = leaf.id();
        let mut inner = CompositeShape::new();
        inner.add(leaf).unwrap();
        let mut outer = CompositeShape::new();
        outer.add(ShapeType::Group(inner)).unwrap();

        assert!(outer.contains_id(leaf_id));
        assert!(!outer.contains_id(ShapeId::new()));
    }
}
