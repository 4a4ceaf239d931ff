//! Nanosecond to clock-cycle conversion
//!
//! One rounding rule applies everywhere: round **up**. A datasheet timing is a
//! minimum; rounding it down would shorten the delay below what the part
//! needs.

use core::fmt;

use crate::field::Field;
use crate::timing::TimingRecord;

/// Round a non-negative quantity up to whole cycles.
///
/// `3.0` stays `3`, `3.0001` becomes `4`. Values beyond `u32::MAX` saturate;
/// NaN maps to `0`. Callers validate inputs first, so neither case reaches a
/// register.
pub fn ceil_cycles(value: f64) -> u32 {
    // Float-to-int `as` casts saturate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cycles = libm::ceil(value) as u32;
    cycles
}

/// Convert a nanosecond timing to clock cycles at period `t_ck_ns`.
///
/// Formula: `cycles = ceil(ns / tCK)`.
pub fn ns_to_cycles(ns: f64, t_ck_ns: f64) -> u32 {
    ceil_cycles(ns / t_ck_ns)
}

/// A timing record converted to SDRC clock cycles.
///
/// Derived once from a [`TimingRecord`]; the mode fields (`are`, `wbst`,
/// `casl`, `bl`) are copied unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockCycleRecord {
    /// `ceil(tRFC / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRFC"))]
    pub t_rfc: u32,
    /// `ceil(tRC / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRC"))]
    pub t_rc: u32,
    /// `ceil(tRAS / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRAS"))]
    pub t_ras: u32,
    /// `ceil(tRP / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRP"))]
    pub t_rp: u32,
    /// `ceil(tRCD / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRCD"))]
    pub t_rcd: u32,
    /// `ceil(tRRD / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tRRD"))]
    pub t_rrd: u32,
    /// `ceil(tWR / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tWR"))]
    pub t_wr: u32,
    /// `ceil(tWR / tCK) + ceil(tRP / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tDAL"))]
    pub t_dal: u32,
    /// `ceil(tWTR / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tWTR"))]
    pub t_wtr: u32,
    /// `ceil(tCKE / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tCKE"))]
    pub t_cke: u32,
    /// `ceil(tXP)`
    #[cfg_attr(feature = "serde", serde(rename = "tXP"))]
    pub t_xp: u32,
    /// `ceil(tXSR / tCK)`
    #[cfg_attr(feature = "serde", serde(rename = "tXSR"))]
    pub t_xsr: u32,
    /// `ceil(arcv)`
    pub arcv: u32,
    /// Autorefresh enable, unchanged.
    pub are: u8,
    /// Write burst disable, unchanged.
    pub wbst: u8,
    /// CAS latency, unchanged.
    pub casl: u8,
    /// Burst length code, unchanged.
    pub bl: u8,
}

impl ClockCycleRecord {
    /// Convert `record` to cycle counts.
    ///
    /// `record` should have passed [`TimingRecord::validate`]; invalid input
    /// yields saturated counts rather than an error.
    pub fn from_record(record: &TimingRecord) -> Self {
        let t_ck = record.t_ck;
        let t_wr = ns_to_cycles(record.t_wr, t_ck);
        let t_rp = ns_to_cycles(record.t_rp, t_ck);

        Self {
            t_rfc: ns_to_cycles(record.t_rfc, t_ck),
            t_rc: ns_to_cycles(record.t_rc, t_ck),
            t_ras: ns_to_cycles(record.t_ras, t_ck),
            t_rp,
            t_rcd: ns_to_cycles(record.t_rcd, t_ck),
            t_rrd: ns_to_cycles(record.t_rrd, t_ck),
            t_wr,
            // Each term is rounded on its own, then summed. This can differ
            // from ceil((tWR + tRP) / tCK) and must not be "simplified".
            t_dal: t_wr.saturating_add(t_rp),
            t_wtr: ns_to_cycles(record.t_wtr, t_ck),
            t_cke: ns_to_cycles(record.t_cke, t_ck),
            t_xp: ceil_cycles(record.t_xp),
            t_xsr: ns_to_cycles(record.t_xsr, t_ck),
            arcv: ceil_cycles(record.arcv),
            are: record.are,
            wbst: record.wbst,
            casl: record.casl,
            bl: record.bl,
        }
    }

    /// Value that goes into register field `field`.
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::TRfc => self.t_rfc,
            Field::TRc => self.t_rc,
            Field::TRas => self.t_ras,
            Field::TRp => self.t_rp,
            Field::TRcd => self.t_rcd,
            Field::TRrd => self.t_rrd,
            Field::TWr => self.t_wr,
            Field::TDal => self.t_dal,
            Field::TWtr => self.t_wtr,
            Field::TCke => self.t_cke,
            Field::TXp => self.t_xp,
            Field::TXsr => self.t_xsr,
            Field::Arcv => self.arcv,
            Field::Are => u32::from(self.are),
            Field::Wbst => u32::from(self.wbst),
            Field::Casl => u32::from(self.casl),
            Field::Bl => u32::from(self.bl),
        }
    }
}

impl fmt::Display for ClockCycleRecord {
    /// `tRFC=28 tRC=11 ... bl=2`, one entry per register field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", field.name(), self.get(field))?;
        }
        Ok(())
    }
}
