//! Scene store for managing canvas elements.
//!
//! The layout engines are free functions over `&[Element]`; this store is the
//! owner that applies the patches they return.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::align::{align, AlignMode, Patches};
use crate::geometry::Rect;
use crate::guides::{Guide, GuideConfig};
use crate::selection::elements_in_selection;
use crate::{CanvasError, CanvasResult, Element, ElementId};

/// Size of the design canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// A scene containing all canvas elements in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas dimensions.
    #[serde(default)]
    pub canvas: CanvasSize,
    /// All elements, in insertion order.
    #[serde(default)]
    elements: Vec<Element>,
    /// Currently selected element IDs.
    #[serde(skip)]
    selected: Vec<ElementId>,
}

impl Scene {
    /// Create a new empty scene with the given canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            canvas: CanvasSize { width, height },
            elements: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// Build a scene from existing elements.
    #[must_use]
    pub fn with_elements(canvas: CanvasSize, elements: Vec<Element>) -> Self {
        Self {
            canvas,
            elements,
            selected: Vec::new(),
        }
    }

    /// Add an element to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if an element with the same id already exists.
    pub fn add_element(&mut self, element: Element) -> CanvasResult<ElementId> {
        if self.get_element(&element.id).is_some() {
            return Err(CanvasError::InvalidOperation(format!(
                "duplicate element id {}",
                element.id
            )));
        }
        let id = element.id.clone();
        self.elements.push(element);
        Ok(id)
    }

    /// Remove an element from the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn remove_element(&mut self, id: &ElementId) -> CanvasResult<Element> {
        self.selected.retain(|eid| eid != id);
        let index = self
            .elements
            .iter()
            .position(|e| e.id == *id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.to_string()))?;
        Ok(self.elements.remove(index))
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get_element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// All elements, in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements in paint order (ascending z-index, ties in insertion order).
    #[must_use]
    pub fn paint_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.z_index);
        ordered
    }

    /// Find the topmost element at the given canvas coordinates.
    #[must_use]
    pub fn element_at(&self, x: f64, y: f64) -> Option<&ElementId> {
        self.paint_order()
            .into_iter()
            .rev()
            .find(|e| e.contains_point(x, y))
            .map(|e| &e.id)
    }

    /// Select an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn select(&mut self, id: &ElementId) -> CanvasResult<()> {
        if self.get_element(id).is_none() {
            return Err(CanvasError::ElementNotFound(id.to_string()));
        }
        if !self.selected.contains(id) {
            self.selected.push(id.clone());
        }
        Ok(())
    }

    /// Replace the selection with the given ids, ignoring unknown ones.
    pub fn set_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.selected.clear();
        for id in ids {
            if self.get_element(&id).is_some() && !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Deselect all elements.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Currently selected ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[ElementId] {
        &self.selected
    }

    /// Currently selected ids as a set.
    #[must_use]
    pub fn selected_ids(&self) -> HashSet<ElementId> {
        self.selected.iter().cloned().collect()
    }

    /// Replace the selection with everything under `rect` and return it.
    pub fn select_in_rect(&mut self, rect: &Rect) -> Vec<ElementId> {
        let hits = elements_in_selection(&self.elements, rect);
        self.set_selection(hits.iter().cloned());
        hits
    }

    /// Align or distribute the current selection and apply the result.
    ///
    /// Returns the patches that were applied.
    pub fn align_selected(&mut self, mode: AlignMode) -> Patches {
        let patches = align(&self.elements, &self.selected_ids(), mode);
        self.apply_patches(&patches);
        patches
    }

    /// Guides for dragging `active_id`.
    #[must_use]
    pub fn guides(&self, active_id: &ElementId, config: &GuideConfig) -> Vec<Guide> {
        config.guides(&self.elements, Some(active_id), true)
    }

    /// Apply position patches. Ids that are not in the scene are skipped.
    ///
    /// Returns the number of elements updated.
    pub fn apply_patches(&mut self, patches: &Patches) -> usize {
        let mut applied = 0;
        for (id, patch) in patches {
            match self.elements.iter_mut().find(|e| e.id == *id) {
                Some(element) => {
                    *element = patch.apply_to(element);
                    applied += 1;
                }
                None => tracing::debug!("Skipping patch for missing element {id}"),
            }
        }
        applied
    }

    /// Get the number of elements in the scene.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string_pretty(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(CanvasError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::ElementPatch;
    use crate::ElementType;

    fn block(id: &str, x: f64, y: f64) -> Element {
        Element::new(ElementType::Container)
            .with_id(id)
            .with_position(x, y)
            .with_size(100.0, 50.0)
    }

    #[test]
    fn test_scene_add_remove() {
        let mut scene = Scene::new(800.0, 600.0);
        assert!(scene.is_empty());

        let id = scene.add_element(block("a", 0.0, 0.0)).expect("add");
        assert_eq!(scene.element_count(), 1);
        assert!(scene.get_element(&id).is_some());
        assert!(scene.add_element(block("a", 5.0, 5.0)).is_err());

        scene.remove_element(&id).expect("should remove");
        assert!(scene.is_empty());
        assert!(scene.remove_element(&id).is_err());
    }

    #[test]
    fn test_element_at_prefers_top_z() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_element(block("low", 0.0, 0.0).with_z_index(1)).expect("add");
        scene.add_element(block("high", 10.0, 10.0).with_z_index(5)).expect("add");

        assert_eq!(scene.element_at(20.0, 20.0), Some(&ElementId::from("high")));
        assert_eq!(scene.element_at(5.0, 5.0), Some(&ElementId::from("low")));
        assert!(scene.element_at(500.0, 500.0).is_none());
    }

    #[test]
    fn test_select_in_rect_then_align() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_element(block("a", 0.0, 0.0)).expect("add");
        scene.add_element(block("b", 200.0, 0.0)).expect("add");
        scene.add_element(block("far", 0.0, 500.0)).expect("add");

        let hits = scene.select_in_rect(&Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(hits.len(), 2);

        let patches = scene.align_selected(AlignMode::CenterH);
        assert_eq!(patches.len(), 2);
        for id in ["a", "b"] {
            let element = scene.get_element(&ElementId::from(id)).expect("element");
            assert!((element.x - 100.0).abs() < f64::EPSILON);
        }
        let far = scene.get_element(&ElementId::from("far")).expect("far");
        assert!(far.x.abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_patches_skips_missing() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_element(block("a", 0.0, 0.0)).expect("add");

        let mut patches = Patches::new();
        patches.insert(ElementId::from("a"), ElementPatch { x: Some(7.0), y: Some(8.0) });
        patches.insert(ElementId::from("ghost"), ElementPatch { x: Some(1.0), y: None });

        assert_eq!(scene.apply_patches(&patches), 1);
        let a = scene.get_element(&ElementId::from("a")).expect("a");
        assert!((a.x - 7.0).abs() < f64::EPSILON);
        assert!((a.y - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_selection_ignores_unknown() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_element(block("a", 0.0, 0.0)).expect("add");
        scene.set_selection([ElementId::from("a"), ElementId::from("nope"), ElementId::from("a")]);
        assert_eq!(scene.selection(), &[ElementId::from("a")]);
        assert!(scene.select(&ElementId::from("nope")).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut scene = Scene::new(1024.0, 768.0);
        scene.add_element(block("z", 0.0, 0.0)).expect("add");
        scene.add_element(block("a", 1.0, 1.0)).expect("add");

        let json = scene.to_json().expect("json");
        let restored = Scene::from_json(&json).expect("scene");
        let ids: Vec<&str> = restored.elements().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert!((restored.canvas.width - 1024.0).abs() < f64::EPSILON);
    }
}
