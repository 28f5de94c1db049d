//! Treemap visualization component.
//!
//! Renders a hierarchical sales document as a squarified treemap in SVG with:
//! - Tiles sized by value and colored by category
//! - Multi-line tile labels split at capitalized words
//! - A grid-packed category legend under the chart
//! - A hover tooltip showing name, category and value
//!
//! # Example
//!
//! ```ignore
//! use sales_treemap::components::treemap::{SalesNode, TooltipState, TreemapChart, TreemapTooltip};
//!
//! let data = RwSignal::new(None::<SalesNode>);
//! let tooltip = RwSignal::new(TooltipState::default());
//!
//! view! {
//!     <div id="tree-map"><TreemapChart data=data tooltip=tooltip /></div>
//!     <TreemapTooltip tooltip=tooltip />
//! }
//! ```

mod component;
pub mod config;
pub mod hierarchy;
pub mod layout;
pub mod legend;
pub mod render;
mod state;
pub mod theme;
mod types;

pub use component::{TreemapChart, TreemapTooltip};
pub use config::TreemapConfig;
pub use hierarchy::{Hierarchy, HierarchyNode, Rect};
pub use layout::{Tiling, TreemapLayout};
pub use render::{Scene, Tile};
pub use state::TooltipState;
pub use theme::Theme;
pub use types::{SalesNode, SalesValue};
