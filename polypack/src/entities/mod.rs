mod canvas;
mod item;
mod layout;
mod placed_polygon;

#[doc(inline)]
pub use canvas::Canvas;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_polygon::PlacedPolygon;
