//! Micron LPDDR parts

use sdrc::TimingRecord;

use crate::{DeviceTiming, MemoryPart};

/// Micron MT29CxGxxMAxAPxxx NAND/LPDDR package-on-package family
pub const MT29CXGXXMAXAPXXX: MemoryPart = MemoryPart {
    name: "MT29CxGxxMAxAPxxx",
    vendor: "Micron",
    summary: "MT29C4G48MAYAPAKQ-5 IT, MT29C4G48MAZAPAKQ-5 IT, MT29C4G48MAZAPAKQ-6 IT, \
              MT29C4G96MAZAPCJG-5 IT, MT29C4G96MAZAPCJG-6 IT, MT29C8G96MAZAPDJV-5 IT, \
              MT29C8G96MAZAPDJV-6 IT",
    timings: &[
        DeviceTiming {
            freq_mhz: 200,
            record: TimingRecord {
                t_ck: 5.0,
                t_rfc: 72.0,
                t_rc: 55.0,
                t_ras: 40.0,
                t_rp: 15.0,
                t_rcd: 15.0,
                t_rrd: 10.0,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.0,
                t_cke: 5.0,
                t_xp: 2.0,
                t_xsr: 112.5,
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
                t_rfc: 72.0,
                t_rc: 58.2,
                t_ras: 42.0,
                t_rp: 16.2,
                t_rcd: 16.2,
                t_rrd: 10.8,
                t_wr: 15.0,
                t_wtr: 2.0 * 5.4,
                t_cke: 5.4,
                t_xp: 2.0,
                t_xsr: 112.5,
                arcv: (7.8 / 0.0054) - 50.0,
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
                t_rfc: 72.0,
                t_rc: 60.0,
                t_ras: 42.0,
                t_rp: 18.0,
                t_rcd: 18.0,
                t_rrd: 12.0,
                t_wr: 15.0,
                t_wtr: 6.06,
                t_cke: 6.06,
                t_xp: 1.0,
                t_xsr: 112.5,
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
                t_rfc: 72.0,
                t_rc: 67.5,
                t_ras: 45.0,
                t_rp: 22.5,
                t_rcd: 22.5,
                t_rrd: 15.0,
                t_wr: 15.0,
                t_wtr: 7.5,
                t_cke: 7.5,
                t_xp: 1.0,
                t_xsr: 112.5,
                arcv: (7.8 / 0.0075) - 50.0,
                are: 1,
                wbst: 0,
                casl: 3,
                bl: 2,
            },
        },
    ],
};
