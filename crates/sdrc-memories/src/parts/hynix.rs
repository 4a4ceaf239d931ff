//! Hynix LPDDR parts

use sdrc::TimingRecord;

use crate::{DeviceTiming, MemoryPart};

/// Hynix H9DH4GH4JJAPER series
///
/// `tRC` is listed as `tRAS + tRP`. Every rate keeps the 200 MHz refresh
/// counter.
pub const H9DH4GH4JJAPER: MemoryPart = MemoryPart {
    name: "H9DH4GH4JJAPER",
    vendor: "Hynix",
    summary: "H9DH4GH4JJAPER series",
    timings: &[
        DeviceTiming {
            freq_mhz: 200,
            record: TimingRecord {
                t_ck: 5.0,
                t_rfc: 90.0,
                t_rc: 40.0 + 15.0,
                t_ras: 40.0,
                t_rp: 15.0,
                t_rcd: 15.0,
                t_rrd: 10.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.0,
                t_cke: 5.0,
                t_xp: 1.0,
                t_xsr: 140.0,
                arcv: (7.8 / 0.005) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 185,
            record: TimingRecord {
                t_ck: 5.4,
                t_rfc: 90.0,
                t_rc: 42.0 + 16.2,
                t_ras: 42.0,
                t_rp: 16.2,
                t_rcd: 16.2,
                t_rrd: 10.8,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.4,
                t_cke: 5.4,
                t_xp: 1.0,
                t_xsr: 140.0,
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
                t_rfc: 90.0,
                t_rc: 42.0 + 18.0,
                t_ras: 42.0,
                t_rp: 18.0,
                t_rcd: 18.0,
                t_rrd: 12.0,
                t_wr: 15.0,
                t_wtr: 6.06,
                t_cke: 6.06,
                t_xp: 1.0,
                t_xsr: 140.0,
                arcv: (7.8 / 0.005) - 50.0,
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
                t_rfc: 90.0,
                t_rc: 45.0 + 22.5,
                t_ras: 45.0,
                t_rp: 22.5,
                t_rcd: 22.5,
                t_rrd: 15.0,
                t_wr: 15.0,
                t_wtr: 7.5,
                t_cke: 7.5,
                t_xp: 1.0,
                t_xsr: 140.0,
                arcv: (7.8 / 0.005) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
        DeviceTiming {
            freq_mhz: 100,
            record: TimingRecord {
                t_ck: 10.0,
                t_rfc: 90.0,
                t_rc: 50.0 + 30.0,
                t_ras: 50.0,
                t_rp: 30.0,
                t_rcd: 30.0,
                t_rrd: 15.0,
                t_wr: 15.0,
                t_wtr: 10.0,
                t_cke: 10.0,
                t_xp: 1.0,
                t_xsr: 140.0,
                arcv: (7.8 / 0.005) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
    ],
};
