//! Memory part description types

use sdrc::TimingRecord;

/// One SDRAM part (or family sharing the same AC timings).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemoryPart {
    /// Part name as used on the command line (e.g. `"M65Kx002AM"`).
    pub name: &'static str,

    /// Manufacturer.
    pub vendor: &'static str,

    /// Ordering codes and densities covered by this entry.
    pub summary: &'static str,

    /// Timings per SDRC clock rate, fastest first.
    pub timings: &'static [DeviceTiming],
}

impl MemoryPart {
    /// Timing record for an SDRC clock of `freq_mhz`, if the table has one.
    pub fn at_mhz(&self, freq_mhz: u32) -> Option<&'static DeviceTiming> {
        self.timings.iter().find(|t| t.freq_mhz == freq_mhz)
    }

    /// Clock rates the table covers, in table order.
    pub fn frequencies(&self) -> impl Iterator<Item = u32> + 'static {
        self.timings.iter().map(|t| t.freq_mhz)
    }
}

/// Timings of a part at one nominal SDRC clock rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceTiming {
    /// Nominal clock in MHz (the exact period is `record.t_ck`).
    pub freq_mhz: u32,

    /// Datasheet timings at this clock.
    pub record: TimingRecord,
}
