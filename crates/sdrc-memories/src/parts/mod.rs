//! Per-vendor timing tables
//!
//! Values are taken from vendor datasheets and the reference init code for
//! AM/DM37x boards. Table order is fastest clock first.

pub mod hynix;
pub mod micron;
pub mod numonyx;

pub use hynix::H9DH4GH4JJAPER;
pub use micron::MT29CXGXXMAXAPXXX;
pub use numonyx::{M65KX001AM, M65KX002AM};

use crate::MemoryPart;

/// Every part in the tables.
pub const ALL_PARTS: &[&MemoryPart] = &[
    &M65KX001AM,
    &M65KX002AM,
    &MT29CXGXXMAXAPXXX,
    &H9DH4GH4JJAPER,
];
