//! Document export formats.

pub mod json;
pub mod obj;
pub mod raw;

pub use json::export_json;
pub use obj::export_obj;
pub use raw::{export_raw, RawMeshData};
