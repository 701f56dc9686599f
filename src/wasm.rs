use crate::bounds::BoundingBox;
use crate::octree::{NodeId, Octree};
use crate::vector::Vector3f;
use wasm_bindgen::prelude::*;

/// WASM wrapper for the [`NodeId`] removal handle.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct NodeHandle {
    inner: NodeId,
}

/// WASM wrapper for a 3D octree with `i32` element ids.
///
/// The generic payload of [`Octree`] does not cross the JS boundary, so the
/// binding stores plain integer ids; callers keep the id-to-object mapping
/// on the JavaScript side.
#[wasm_bindgen]
pub struct Octree3D {
    inner: Octree<i32>,
}

#[wasm_bindgen]
impl Octree3D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Octree3D {
        Octree3D {
            inner: Octree::new(
                Vector3f::new(min_x, min_y, min_z),
                Vector3f::new(max_x, max_y, max_z),
            ),
        }
    }

    /// Inserts an element id at the given point. Returns `undefined` when
    /// the point lies outside the octree bounds.
    pub fn add(&mut self, element: i32, x: f64, y: f64, z: f64) -> Option<NodeHandle> {
        self.inner
            .add(element, Vector3f::new(x, y, z))
            .map(|inner| NodeHandle { inner })
    }

    #[wasm_bindgen(js_name = elementsAt)]
    pub fn elements_at(&self, x: f64, y: f64, z: f64) -> Vec<i32> {
        self.inner.elements_at(Vector3f::new(x, y, z)).to_vec()
    }

    #[wasm_bindgen(js_name = elementsIn)]
    pub fn elements_in(&self, min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Vec<i32> {
        let query = BoundingBox::new(
            Vector3f::new(min_x, min_y, min_z),
            Vector3f::new(max_x, max_y, max_z),
        );
        self.inner.elements_in(&query).into_iter().copied().collect()
    }

    pub fn remove(&mut self, element: i32) -> bool {
        self.inner.remove(&element)
    }

    #[wasm_bindgen(js_name = removeUsing)]
    pub fn remove_using(&mut self, element: i32, handle: &NodeHandle) -> bool {
        self.inner.remove_using(&element, handle.inner)
    }

    pub fn clear(&mut self) -> bool {
        self.inner.clear()
    }

    #[wasm_bindgen(js_name = countElements)]
    pub fn count_elements(&self) -> usize {
        self.inner.count_elements()
    }

    #[wasm_bindgen(js_name = debugString)]
    pub fn debug_string(&self) -> String {
        self.inner.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_wrapper_roundtrip() {
        let mut tree = Octree3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);

        let handle = tree.add(42, 1.0, 2.0, 3.0).expect("in bounds");
        assert!(tree.add(43, 20.0, 2.0, 3.0).is_none(), "out of bounds");

        assert_eq!(tree.elements_at(1.0, 2.0, 3.0), vec![42]);
        assert_eq!(tree.elements_in(0.0, 0.0, 0.0, 10.0, 10.0, 10.0), vec![42]);
        assert_eq!(tree.count_elements(), 1);

        assert!(tree.remove_using(42, &handle));
        assert!(!tree.remove(42));
        assert_eq!(tree.count_elements(), 0);
    }
}
