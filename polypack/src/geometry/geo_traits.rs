use crate::geometry::Translation;
use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can be modified by a [`Translation`].
pub trait Transformable: Clone {
    /// Applies a translation to `self`.
    fn transform(&mut self, t: &Translation) -> &mut Self;

    /// Applies a translation to a clone.
    fn transform_clone(&self, t: &Translation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// Trait for types that can be modified based on a reference object with a [`Translation`] applied.
///
/// Useful when repeatedly moving a single shape without having to reallocate new memory each time.
pub trait TransformableFrom: Transformable {
    /// Applies a translation on the reference object and stores the result in `self`.
    fn transform_from(&mut self, reference: &Self, t: &Translation) -> &mut Self;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
