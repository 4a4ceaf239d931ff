//! LPDDR SDRAM timing tables
//!
//! Datasheet AC timings for the mobile DDR parts commonly stacked on AM/DM37x
//! boards, one [`TimingRecord`](sdrc::TimingRecord) per supported SDRC clock
//! rate, ready to feed into [`sdrc::Calculator`].
//!
//! # Example
//!
//! ```
//! use sdrc::Calculator;
//! use sdrc_memories::find_part;
//!
//! let part = find_part("m65kx002am").unwrap();
//! let timing = part.at_mhz(200).unwrap();
//! let sdrc = Calculator::new(timing.record).unwrap();
//! assert_eq!(sdrc.actim_ctrla().get(), 0xe2e1_c4c6);
//! ```
//!
//! # Units
//!
//! Some datasheets give `tWTR` and `tCKE` in clock cycles. The tables store
//! them as `n * tCK` nanoseconds so the calculator's `ceil(t / tCK)` yields
//! `n` again.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod memory_part;
pub mod parts;

pub use memory_part::{DeviceTiming, MemoryPart};
pub use parts::ALL_PARTS;

/// Look a part up by name, ignoring ASCII case.
pub fn find_part(name: &str) -> Option<&'static MemoryPart> {
    ALL_PARTS
        .iter()
        .copied()
        .find(|part| part.name.eq_ignore_ascii_case(name))
}

/// Every `(part, timing)` pair in the tables, parts in [`ALL_PARTS`] order.
pub fn entries() -> impl Iterator<Item = (&'static MemoryPart, &'static DeviceTiming)> {
    ALL_PARTS
        .iter()
        .copied()
        .flat_map(|part| part.timings.iter().map(move |timing| (part, timing)))
}
