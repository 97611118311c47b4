//! **costgrid-core**: weighted cost grids and the geometry used to address them.
//!
//! This crate provides the foundational types shared by the *costgrid*
//! workspace: grid coordinates ([`Position`], [`Offset`], [`Rect`]) and the
//! immutable [`CostGrid`] cost map that searches run over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, ParsePositionError};
pub use geom::{Offset, Position, Rect};
pub use grid::CostGrid;
