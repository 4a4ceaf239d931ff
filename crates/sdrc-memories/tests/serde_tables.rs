//! JSON shape of the timing tables (requires `--features serde`).
#![cfg(feature = "serde")]

// Test files index, unwrap and do arithmetic freely; allow at file level.
#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use sdrc_memories::{find_part, ALL_PARTS};
use serde_json::Value;

fn tables() -> Value {
    serde_json::to_value(ALL_PARTS).unwrap()
}

#[test]
fn every_part_serializes_with_its_name_and_vendor() {
    let json = tables();
    let parts = json.as_array().unwrap();
    assert_eq!(parts.len(), ALL_PARTS.len());
    for (value, part) in parts.iter().zip(ALL_PARTS) {
        assert_eq!(value["name"], part.name);
        assert_eq!(value["vendor"], part.vendor);
        assert_eq!(value["summary"], part.summary);
    }
}

#[test]
fn every_timing_keeps_its_clock_and_period() {
    let json = tables();
    for (value, part) in json.as_array().unwrap().iter().zip(ALL_PARTS) {
        let timings = value["timings"].as_array().unwrap();
        assert_eq!(timings.len(), part.timings.len(), "{}", part.name);
        for (t, timing) in timings.iter().zip(part.timings) {
            assert_eq!(t["freq_mhz"].as_u64(), Some(u64::from(timing.freq_mhz)));
            assert_eq!(t["record"]["tCK"].as_f64(), Some(timing.record.t_ck));
        }
    }
}

#[test]
fn records_use_datasheet_key_names() {
    let part = find_part("M65Kx002AM").unwrap();
    let json = serde_json::to_value(part).unwrap();
    let record = &json["timings"][0]["record"];
    assert_eq!(json["timings"][0]["freq_mhz"].as_u64(), Some(200));
    assert_eq!(record["tCK"].as_f64(), Some(5.0));
    assert_eq!(record["tRFC"].as_f64(), Some(140.0));
    assert_eq!(record["tRCD"].as_f64(), Some(16.2));
    assert_eq!(record["casl"].as_u64(), Some(3));
    assert!(record.get("t_ck").is_none());
}

#[test]
fn record_round_trips_through_json() {
    let timing = find_part("H9DH4GH4JJAPER").unwrap().at_mhz(166).unwrap();
    let text = serde_json::to_string(&timing.record).unwrap();
    let back: sdrc::TimingRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(back, timing.record);
}
