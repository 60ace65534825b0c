//! # Trellis
//!
//! A retained-mode widget tree. Elements live in an arena and are addressed
//! by [`ElementId`]; containers own their children as an ordered list of
//! handles, and each child keeps a non-owning handle back to its parent, so
//! there are no reference cycles anywhere in the model.
//!
//! The [`Ui`] context owns the tree plus the hover/focus/press singletons,
//! translates raw input samples into typed [`Event`]s and runs the
//! capture → target → bubble pipeline over the ancestor chain:
//!
//! ```rust
//! use trellis::*;
//!
//! let mut ui = Ui::new(800.0, 600.0);
//! let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
//!
//! let clicks2 = clicks.clone();
//! let button = widget::Button::new("Save")
//!     .on_click(move |_| clicks2.set(clicks2.get() + 1))
//!     .spawn(&mut ui);
//! ui.set_bounds(button, 20.0, 20.0, 100.0, 30.0);
//! ui.add_child(ui.root(), button).unwrap();
//!
//! ui.pointer_button(30.0, 30.0, PointerButton::Primary, true);
//! ui.pointer_button(30.0, 30.0, PointerButton::Primary, false);
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! Per frame the embedding application feeds input, then calls
//! [`Ui::update`] with the frame delta and [`Ui::render`] with any
//! [`Renderer`] implementation; [`Scene`] records the draw list and is what
//! the tests inspect. Dirty flags bubble to the root on every mutation so a
//! scheduler can skip repainting entirely when nothing changed.

pub mod color;
pub mod context;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use color::*;
pub use context::*;
pub use element::{Element, ElementId, Handler, ListenerId};
pub use error::*;
pub use event::*;
pub use geometry::*;
pub use layout::*;
pub use render::*;
pub use style::*;
