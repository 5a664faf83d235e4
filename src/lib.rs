//! Procedurally drawn app icons for the Silas Learns Chinese iPhone app.
//!
//! [`icon_gen::generate_icons`] renders the whole AppIcon set; the drawing
//! primitives live in [`draw`].

pub mod contents_json;
pub mod draw;
pub mod icon_gen;
