// Host page model: named target regions, the HTML document they live in,
// and the data-independent behaviours attached to every written page.

pub mod behaviors;
pub mod host;
pub mod regions;

pub use host::HostDocument;
pub use regions::{Display, Region, RegionMap, RenderTarget};
