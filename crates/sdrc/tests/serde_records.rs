//! JSON shape of records and register sets (requires `--features serde`).
#![cfg(feature = "serde")]

// Test files index, unwrap and do arithmetic freely; allow at file level.
#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use sdrc::{Calculator, TimingRecord};

const M65KX002AM_200MHZ: &str = r#"{
    "tCK": 5.0, "tRFC": 140.0, "tRC": 55.0, "tRAS": 40.0, "tRP": 15.0,
    "tRCD": 16.2, "tRRD": 10.0, "tWR": 15.0, "tWTR": 10.0, "tCKE": 10.0,
    "tXP": 2.9, "tXSR": 200.0, "arcv": 1510.0,
    "are": 1, "wbst": 0, "casl": 3, "bl": 2
}"#;

#[test]
fn record_deserializes_from_datasheet_keys() {
    let record: TimingRecord = serde_json::from_str(M65KX002AM_200MHZ).unwrap();
    assert_eq!(record.t_rcd, 16.2);
    assert_eq!(record.casl, 3);
    let sdrc = Calculator::new(record).unwrap();
    assert_eq!(sdrc.actim_ctrla().get(), 0xe2e1_c4c6);
}

#[test]
fn record_without_a_key_fails_to_deserialize() {
    let err = serde_json::from_str::<TimingRecord>(r#"{"tCK": 5.0}"#).unwrap_err();
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn register_set_serializes_as_plain_integers() {
    let record: TimingRecord = serde_json::from_str(M65KX002AM_200MHZ).unwrap();
    let sdrc = Calculator::new(record).unwrap();
    let json = serde_json::to_value(sdrc.registers()).unwrap();
    assert_eq!(json["actim_ctrla"], 0xe2e1_c4c6_u32);
    assert_eq!(json["mr"], 0x32);
}

#[test]
fn cycle_record_uses_datasheet_keys() {
    let record: TimingRecord = serde_json::from_str(M65KX002AM_200MHZ).unwrap();
    let sdrc = Calculator::new(record).unwrap();
    let json = serde_json::to_value(sdrc.cycles()).unwrap();
    assert_eq!(json["tRFC"], 28);
    assert_eq!(json["tDAL"], 6);
    assert_eq!(json["arcv"], 1510);
}
