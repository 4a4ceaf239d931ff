//! SDRC AC timing register calculator
//!
//! Converts the AC timing parameters of a low-power DDR SDRAM part (in
//! nanoseconds, as printed in the vendor datasheet) into whole clock cycles
//! for a given SDRC clock period, and packs the cycle counts into the four
//! SDRC configuration registers of the AM/DM37x SDRAM controller.
//!
//! # Pipeline
//!
//! ```text
//! TimingRecord (ns, datasheet)
//!         ↓  ceil(T / tCK), tDAL = ceil(tWR/tCK) + ceil(tRP/tCK)
//! ClockCycleRecord (cycles)
//!         ↓  (value & mask) << shift, per field
//! RegisterSet { ACTIM_CTRLA, ACTIM_CTRLB, RFR_CTRL, MR }
//! ```
//!
//! Every conversion rounds **up**: rounding a minimum delay down would make
//! the controller violate the datasheet.
//!
//! # Overflow policy
//!
//! A cycle count that does not fit its register field is rejected with
//! [`SdrcError::FieldOverflow`] by default ([`OverflowPolicy::Strict`]).
//! [`OverflowPolicy::Truncate`] masks the count into the field instead, which
//! reproduces what the vendor init scripts do but can program a delay shorter
//! than required.
//!
//! The memory-configuration register (`SDRC_MCFG`) is not computed.
//!
//! # Features
//!
//! - `std`: implement `std` integrations (the crate is `no_std` otherwise)
//! - `defmt`: derive `defmt::Format` on all public types
//! - `tracing`: emit `tracing` events from the calculator
//! - `serde`: `Serialize`/`Deserialize` for records and register sets
//!
//! # Example
//!
//! ```
//! use sdrc::{Calculator, TimingRecord};
//!
//! let record = TimingRecord {
//!     t_ck: 5.0,
//!     t_rfc: 140.0, t_rc: 55.0, t_ras: 40.0, t_rp: 15.0, t_rcd: 16.2,
//!     t_rrd: 10.0, t_wr: 15.0, t_wtr: 10.0, t_cke: 10.0,
//!     t_xp: 2.9, t_xsr: 200.0,
//!     arcv: 1510.0, are: 1,
//!     wbst: 0, casl: 3, bl: 2,
//! };
//!
//! let sdrc = Calculator::new(record)?;
//! assert_eq!(sdrc.cycles().t_rcd, 4); // 16.2 ns rounds up to 4 cycles
//! assert_eq!(sdrc.actim_ctrla().get(), 0xe2e1_c4c6);
//! assert_eq!(format!("{}", sdrc.mr()), "0x32");
//! # Ok::<(), sdrc::SdrcError>(())
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Pedantic lints suppressed for this register crate:
#![allow(clippy::doc_markdown)] // register and field names in doc comments
#![allow(clippy::must_use_candidate)] // pure accessors, callers decide
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod cycles;
pub mod error;
pub mod field;
pub mod register;
pub mod timing;

pub use calculator::{Calculator, OverflowPolicy};
pub use cycles::{ceil_cycles, ns_to_cycles, ClockCycleRecord};
pub use error::SdrcError;
pub use field::{BitField, Field};
pub use register::{Register, RegisterSet, RegisterValue};
pub use timing::{TimingKey, TimingRecord};
