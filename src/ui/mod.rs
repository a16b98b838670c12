//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready types computed from state
//! - [`renderer`]: frame assembly
//! - [`components`]: individual parts of the frame
//! - [`helpers`]: cursor movement, highlighting, wrapping, boxes
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DetailsBody, DetailsView, DisplayItem, EmptyState, FavoriteRow, FavoritesView, FooterInfo,
    HeaderInfo, OverlayView, SearchBarInfo, UIViewModel,
};
