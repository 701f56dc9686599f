//! # octothree
//!
//! `octothree` is a Rust library implementing an adaptive 3D point octree,
//! designed to be used in Rust as well as compiled to WebAssembly (WASM).
//! It stores arbitrary payload values keyed by an exact 3D coordinate and
//! retrieves them fast at a point or within an axis-aligned region.
//!
//! ## Features
//!
//! - **Adaptive subdivision**: a region splits into eight octants only when
//!   two distinct points collide in the same leaf; coincident points
//!   accumulate on one leaf without growing the tree.
//! - **Fast removal handles**: [`Octree::add`] returns an opaque [`NodeId`]
//!   that scopes a later removal to one subtree instead of a full search.
//! - **WASM-first**: built with `wasm-bindgen`; see [`Octree3D`] for the
//!   JavaScript/TypeScript surface.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Octree`] struct; geometry comes from
//! [`Vector3f`] and [`BoundingBox`].

mod bounds;
mod octree;
mod vector;
mod wasm;

pub use bounds::BoundingBox;
pub use octree::NodeId;
pub use octree::Octree;
pub use vector::Vector3f;
pub use wasm::NodeHandle;
pub use wasm::Octree3D;
