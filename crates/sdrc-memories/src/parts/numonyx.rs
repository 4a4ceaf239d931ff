//! Numonyx LPDDR parts
//!
//! Datasheets are available from Numonyx distributors.

use sdrc::TimingRecord;

use crate::{DeviceTiming, MemoryPart};

/// Numonyx M65Kx002AM, 2 Gb
///
/// - M65G002AM: 4 banks x 8 Mbit x 16
/// - M65D002AM: 4 banks x 8 Mbit x 32
///
/// `tWTR` and `tCKE` are 2 cycles at every rate (1 cycle tWTR at 133 MHz).
pub const M65KX002AM: MemoryPart = MemoryPart {
    name: "M65Kx002AM",
    vendor: "Numonyx",
    summary: "M65G002AM 2Gb (4 banks x 8Mbits x 16), M65D002AM 2Gb (4 banks x 8Mbits x 32)",
    timings: &[
        DeviceTiming {
            freq_mhz: 200,
            record: TimingRecord {
                t_ck: 5.0,
                t_rfc: 140.0,
                t_rc: 55.0,
                t_ras: 40.0,
                t_rp: 15.0,
                t_rcd: 16.2,
                t_rrd: 10.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.0,
                t_cke: 2.0 * 5.0,
                t_xp: 2.0 + 0.9,
                t_xsr: 200.0,
                arcv: (7.8 / 0.005) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 166,
            record: TimingRecord {
                t_ck: 6.06,
                t_rfc: 140.0,
                t_rc: 60.0,
                t_ras: 42.0,
                t_rp: 18.0,
                t_rcd: 22.5,
                t_rrd: 12.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 6.06,
                t_cke: 2.0 * 6.06,
                t_xp: 1.0 + 1.1,
                t_xsr: 200.0,
                arcv: (7.8 / 0.00606) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 133,
            record: TimingRecord {
                t_ck: 7.5,
                t_rfc: 140.0,
                t_rc: 75.0,
                t_ras: 45.0,
                t_rp: 22.5,
                t_rcd: 30.0,
                t_rrd: 15.0,
                t_wr: 15.0,
                t_wtr: 7.5,
                t_cke: 2.0 * 7.5,
                t_xp: 1.0 + 1.3,
                t_xsr: 200.0,
                arcv: (7.8 / 0.0075) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
    ],
};

/// Numonyx M65Kx001AM, 1 Gb
///
/// - M65G001AM: 4 banks x 8 Mbit x 16
/// - M65D001AM: 4 banks x 8 Mbit x 32
pub const M65KX001AM: MemoryPart = MemoryPart {
    name: "M65Kx001AM",
    vendor: "Numonyx",
    summary: "M65G001AM 1Gb (4 banks x 8Mbits x 16), M65D001AM 1Gb (4 banks x 8Mbits x 32)",
    timings: &[
        DeviceTiming {
            freq_mhz: 200,
            record: TimingRecord {
                t_ck: 5.0,
                t_rfc: 140.0,
                t_rc: 55.0,
                t_ras: 40.0,
                t_rp: 15.0,
                t_rcd: 15.0,
                t_rrd: 10.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.0,
                t_cke: 2.0 * 5.0,
                t_xp: 2.0 + 0.9,
                t_xsr: 200.0,
                arcv: (7.8 / 0.005) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 166,
            record: TimingRecord {
                t_ck: 6.06,
                t_rfc: 140.0,
                t_rc: 60.0,
                t_ras: 42.0,
                t_rp: 18.0,
                t_rcd: 22.5,
                t_rrd: 12.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 6.06,
                t_cke: 2.0 * 6.06,
                t_xp: 1.0 + 1.1,
                t_xsr: 200.0,
                arcv: (7.8 / 0.00606) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 133,
            record: TimingRecord {
                t_ck: 7.5,
                t_rfc: 140.0,
                t_rc: 75.0,
                t_ras: 45.0,
                t_rp: 22.5,
                t_rcd: 30.0,
                t_rrd: 15.0,
                t_wr: 15.0,
                t_wtr: 7.5,
                t_cke: 2.0 * 7.5,
                t_xp: 1.0 + 1.3,
                t_xsr: 200.0,
                // Published with the 166 MHz clock period. At 7.5 ns this
                // stretches the refresh interval to about 9.3 us.
                arcv: (7.8 / 0.00606) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
    ],
};
