//! `lg-output` — artifact serialisation for the lotgen scenario generator.
//!
//! Generators produce plain in-memory models; this crate turns them into
//! simulator input files.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`document`] | `Element`, `Document`, `XmlWriter` — generic XML writer   |
//! | [`render`]   | `render_nodes`, `render_edges`, `render_additional`, …    |
//! | [`csv`]      | `spaces_csv` — per-space inventory                        |
//! | [`writer`]   | `ScenarioWriter` trait, `DirWriter`, `MemoryWriter`       |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lg_output::{render_nodes, DirWriter, ScenarioWriter};
//!
//! let mut w = DirWriter::new(Path::new("./out"))?;
//! w.write_document("parking.nod.xml", &render_nodes(&topology))?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod document;
pub mod error;
pub mod render;
pub mod writer;


pub use document::{Document, Element, XmlWriter};
pub use error::{OutputError, OutputResult};
pub use render::{render_additional, render_edges, render_nodes, render_routes, SpaceRendering};
pub use writer::{DirWriter, MemoryWriter, ScenarioWriter};
