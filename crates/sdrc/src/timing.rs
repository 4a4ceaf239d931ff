//! Datasheet timing records
//!
//! A [`TimingRecord`] holds the AC parameters of one SDRAM part at one SDRC
//! clock rate, in the units the datasheet uses (nanoseconds for time-domain
//! values). Names follow standard JEDEC LPDDR1 terminology:
//!
//! | Key    | Meaning                                                   |
//! |--------|-----------------------------------------------------------|
//! | `tCK`  | SDRC clock period                                         |
//! | `tRFC` | AUTO REFRESH to ACTIVE / AUTO REFRESH command period      |
//! | `tRC`  | ACTIVE to ACTIVE command period (row cycle time)          |
//! | `tRAS` | ACTIVE to PRECHARGE command period                        |
//! | `tRP`  | PRECHARGE command period (row precharge time)             |
//! | `tRCD` | ACTIVE to READ or WRITE delay (row-to-column delay)       |
//! | `tRRD` | ACTIVE bank A to ACTIVE bank B delay                      |
//! | `tWR`  | WRITE recovery time (also known as tDPL)                  |
//! | `tWTR` | Internal write to read command delay (also known as tCDLR)|
//! | `tCKE` | CKE minimum pulse width                                   |
//! | `tXP`  | Exit power-down to next valid command delay               |
//! | `tXSR` | Self-refresh exit to next valid command delay             |
//! | `arcv` | Autorefresh counter seed, `(tREFI / tCK) - 50`            |
//! | `are`  | Autorefresh enable / burst mode (0–3)                     |
//! | `wbst` | Write burst disable (0 or 1)                              |
//! | `casl` | CAS latency in clock periods (1–5)                        |
//! | `bl`   | Burst length code (1 = BL2 SDR, 2 = BL4 DDR, 3 = BL8)     |
//!
//! `tXP` and `arcv` are given pre-scaled by the tables that feed this crate
//! and are only rounded up, never divided by `tCK`.

use core::fmt;

use crate::error::SdrcError;

/// Name of one parameter in a timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingKey {
    /// `tCK`
    TCk,
    /// `tRFC`
    TRfc,
    /// `tRC`
    TRc,
    /// `tRAS`
    TRas,
    /// `tRP`
    TRp,
    /// `tRCD`
    TRcd,
    /// `tRRD`
    TRrd,
    /// `tWR`
    TWr,
    /// `tWTR`
    TWtr,
    /// `tCKE`
    TCke,
    /// `tXP`
    TXp,
    /// `tXSR`
    TXsr,
    /// `arcv`
    Arcv,
    /// `are`
    Are,
    /// `wbst`
    Wbst,
    /// `casl`
    Casl,
    /// `bl`
    Bl,
}

impl TimingKey {
    /// Every key a record must carry, in datasheet order.
    pub const ALL: [TimingKey; 17] = [
        TimingKey::TCk,
        TimingKey::TRfc,
        TimingKey::TRc,
        TimingKey::TRas,
        TimingKey::TRp,
        TimingKey::TRcd,
        TimingKey::TRrd,
        TimingKey::TWr,
        TimingKey::TWtr,
        TimingKey::TCke,
        TimingKey::TXp,
        TimingKey::TXsr,
        TimingKey::Arcv,
        TimingKey::Are,
        TimingKey::Wbst,
        TimingKey::Casl,
        TimingKey::Bl,
    ];

    /// Key as spelled in datasheets and keyed records (e.g. `"tRFC"`).
    pub const fn name(self) -> &'static str {
        match self {
            TimingKey::TCk => "tCK",
            TimingKey::TRfc => "tRFC",
            TimingKey::TRc => "tRC",
            TimingKey::TRas => "tRAS",
            TimingKey::TRp => "tRP",
            TimingKey::TRcd => "tRCD",
            TimingKey::TRrd => "tRRD",
            TimingKey::TWr => "tWR",
            TimingKey::TWtr => "tWTR",
            TimingKey::TCke => "tCKE",
            TimingKey::TXp => "tXP",
            TimingKey::TXsr => "tXSR",
            TimingKey::Arcv => "arcv",
            TimingKey::Are => "are",
            TimingKey::Wbst => "wbst",
            TimingKey::Casl => "casl",
            TimingKey::Bl => "bl",
        }
    }

    /// Look a key up by its datasheet spelling. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// `true` for the mode fields that pass through without time scaling.
    pub const fn is_dimensionless(self) -> bool {
        matches!(
            self,
            TimingKey::Are | TimingKey::Wbst | TimingKey::Casl | TimingKey::Bl
        )
    }

    /// Position of this key in [`TimingKey::ALL`].
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// AC timing parameters of one SDRAM part at one SDRC clock rate.
///
/// Time-domain fields are in nanoseconds. Construct directly when the values
/// are known at compile time, or through [`TimingRecord::from_pairs`] when
/// they arrive as a key/value mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingRecord {
    /// Clock period (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tCK"))]
    pub t_ck: f64,
    /// AUTO REFRESH command period (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRFC"))]
    pub t_rfc: f64,
    /// Row cycle time (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRC"))]
    pub t_rc: f64,
    /// ACTIVE to PRECHARGE (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRAS"))]
    pub t_ras: f64,
    /// Row precharge time (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRP"))]
    pub t_rp: f64,
    /// Row-to-column delay (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRCD"))]
    pub t_rcd: f64,
    /// Bank-to-bank ACTIVE delay (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tRRD"))]
    pub t_rrd: f64,
    /// Write recovery time (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tWR"))]
    pub t_wr: f64,
    /// Internal write to read delay (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tWTR"))]
    pub t_wtr: f64,
    /// CKE minimum pulse width (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tCKE"))]
    pub t_cke: f64,
    /// Exit power-down delay, already in clock periods.
    #[cfg_attr(feature = "serde", serde(rename = "tXP"))]
    pub t_xp: f64,
    /// Self-refresh exit delay (ns).
    #[cfg_attr(feature = "serde", serde(rename = "tXSR"))]
    pub t_xsr: f64,
    /// Autorefresh counter seed, already in clock periods.
    pub arcv: f64,
    /// Autorefresh enable / burst mode.
    pub are: u8,
    /// Write burst disable.
    pub wbst: u8,
    /// CAS latency.
    pub casl: u8,
    /// Burst length code.
    pub bl: u8,
}

impl TimingRecord {
    /// Build a record from `(key, value)` pairs, e.g. a parsed config map.
    ///
    /// Every key in [`TimingKey::ALL`] must be present. Unknown keys are
    /// ignored; when a key repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// - [`SdrcError::MissingParameter`] naming the first absent key
    /// - [`SdrcError::InvalidParameter`] if a dimensionless field is not a
    ///   non-negative integer that fits `u8`
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SdrcError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut slots: [Option<f64>; TimingKey::ALL.len()] = [None; TimingKey::ALL.len()];
        for (name, value) in pairs {
            match TimingKey::from_name(name) {
                Some(key) => {
                    if let Some(slot) = slots.get_mut(key.index()) {
                        *slot = Some(value);
                    }
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(key = name, "ignoring unknown timing parameter");
                }
            }
        }

        let take = |key: TimingKey| -> Result<f64, SdrcError> {
            slots
                .get(key.index())
                .copied()
                .flatten()
                .ok_or(SdrcError::MissingParameter { key })
        };

        // Check presence of every key before interpreting any value, so a
        // missing key is always reported as missing.
        for key in TimingKey::ALL {
            take(key)?;
        }

        Ok(Self {
            t_ck: take(TimingKey::TCk)?,
            t_rfc: take(TimingKey::TRfc)?,
            t_rc: take(TimingKey::TRc)?,
            t_ras: take(TimingKey::TRas)?,
            t_rp: take(TimingKey::TRp)?,
            t_rcd: take(TimingKey::TRcd)?,
            t_rrd: take(TimingKey::TRrd)?,
            t_wr: take(TimingKey::TWr)?,
            t_wtr: take(TimingKey::TWtr)?,
            t_cke: take(TimingKey::TCke)?,
            t_xp: take(TimingKey::TXp)?,
            t_xsr: take(TimingKey::TXsr)?,
            arcv: take(TimingKey::Arcv)?,
            are: dimensionless(TimingKey::Are, take(TimingKey::Are)?)?,
            wbst: dimensionless(TimingKey::Wbst, take(TimingKey::Wbst)?)?,
            casl: dimensionless(TimingKey::Casl, take(TimingKey::Casl)?)?,
            bl: dimensionless(TimingKey::Bl, take(TimingKey::Bl)?)?,
        })
    }

    /// Value of one parameter, widened to `f64`.
    pub fn get(&self, key: TimingKey) -> f64 {
        match key {
            TimingKey::TCk => self.t_ck,
            TimingKey::TRfc => self.t_rfc,
            TimingKey::TRc => self.t_rc,
            TimingKey::TRas => self.t_ras,
            TimingKey::TRp => self.t_rp,
            TimingKey::TRcd => self.t_rcd,
            TimingKey::TRrd => self.t_rrd,
            TimingKey::TWr => self.t_wr,
            TimingKey::TWtr => self.t_wtr,
            TimingKey::TCke => self.t_cke,
            TimingKey::TXp => self.t_xp,
            TimingKey::TXsr => self.t_xsr,
            TimingKey::Arcv => self.arcv,
            TimingKey::Are => f64::from(self.are),
            TimingKey::Wbst => f64::from(self.wbst),
            TimingKey::Casl => f64::from(self.casl),
            TimingKey::Bl => f64::from(self.bl),
        }
    }

    /// All parameters as `(key, value)` pairs in [`TimingKey::ALL`] order.
    pub fn pairs(&self) -> impl Iterator<Item = (TimingKey, f64)> + '_ {
        TimingKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Check that the record can be converted to cycle counts.
    ///
    /// This is a domain check only (finite, non-negative); datasheet limits
    /// are not enforced.
    ///
    /// # Errors
    ///
    /// - [`SdrcError::InvalidClock`] if `tCK` is not finite and positive
    /// - [`SdrcError::InvalidParameter`] for a negative or non-finite value
    pub fn validate(&self) -> Result<(), SdrcError> {
        if !self.t_ck.is_finite() || self.t_ck <= 0.0 {
            return Err(SdrcError::InvalidClock { t_ck: self.t_ck });
        }
        for (key, value) in self.pairs() {
            if key == TimingKey::TCk || key.is_dimensionless() {
                continue;
            }
            if !value.is_finite() || value < 0.0 {
                return Err(SdrcError::InvalidParameter { key, value });
            }
        }
        Ok(())
    }
}

/// Narrow a keyed dimensionless value to `u8`.
fn dimensionless(key: TimingKey, value: f64) -> Result<u8, SdrcError> {
    let integral = value.is_finite() && libm::trunc(value) == value;
    if !integral || !(0.0..=f64::from(u8::MAX)).contains(&value) {
        return Err(SdrcError::InvalidParameter { key, value });
    }
    // Range and integrality checked above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u8)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PAIRS: [(&str, f64); 17] = [
        ("tCK", 5.0),
        ("tRFC", 140.0),
        ("tRC", 55.0),
        ("tRAS", 40.0),
        ("tRP", 15.0),
        ("tRCD", 16.2),
        ("tRRD", 10.0),
        ("tWR", 15.0),
        ("tWTR", 10.0),
        ("tCKE", 10.0),
        ("tXP", 2.9),
        ("tXSR", 200.0),
        ("arcv", 1510.0),
        ("are", 1.0),
        ("wbst", 0.0),
        ("casl", 3.0),
        ("bl", 2.0),
    ];

    #[test]
    fn key_names_round_trip() {
        for key in TimingKey::ALL {
            assert_eq!(TimingKey::from_name(key.name()), Some(key));
        }
        assert_eq!(TimingKey::from_name("trfc"), None);
    }

    #[test]
    fn key_index_matches_position_in_all() {
        for (i, key) in TimingKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn from_pairs_fills_every_field() {
        let record = TimingRecord::from_pairs(PAIRS).unwrap();
        assert_eq!(record.t_ck, 5.0);
        assert_eq!(record.t_rcd, 16.2);
        assert_eq!(record.t_xp, 2.9);
        assert_eq!(record.arcv, 1510.0);
        assert_eq!((record.are, record.wbst, record.casl, record.bl), (1, 0, 3, 2));
    }

    #[test]
    fn from_pairs_reports_missing_key() {
        let pairs = PAIRS.into_iter().filter(|(k, _)| *k != "tWTR");
        assert_eq!(
            TimingRecord::from_pairs(pairs),
            Err(SdrcError::MissingParameter {
                key: TimingKey::TWtr
            })
        );
    }

    #[test]
    fn from_pairs_ignores_unknown_keys_and_last_value_wins() {
        let extra = [("tMRD", 2.0), ("tRCD", 30.0)];
        let record = TimingRecord::from_pairs(PAIRS.into_iter().chain(extra)).unwrap();
        assert_eq!(record.t_rcd, 30.0);
    }

    #[test]
    fn from_pairs_rejects_fractional_mode_field() {
        let pairs = PAIRS
            .into_iter()
            .map(|(k, v)| if k == "casl" { (k, 2.5) } else { (k, v) });
        assert_eq!(
            TimingRecord::from_pairs(pairs),
            Err(SdrcError::InvalidParameter {
                key: TimingKey::Casl,
                value: 2.5
            })
        );
    }

    #[test]
    fn validate_rejects_non_positive_clock() {
        let mut record = TimingRecord::from_pairs(PAIRS).unwrap();
        record.t_ck = 0.0;
        assert_eq!(
            record.validate(),
            Err(SdrcError::InvalidClock { t_ck: 0.0 })
        );
    }

    #[test]
    fn validate_rejects_negative_timing() {
        let mut record = TimingRecord::from_pairs(PAIRS).unwrap();
        record.t_rrd = -1.0;
        assert_eq!(
            record.validate(),
            Err(SdrcError::InvalidParameter {
                key: TimingKey::TRrd,
                value: -1.0
            })
        );
    }

    #[test]
    fn pairs_round_trip_through_from_pairs() {
        let record = TimingRecord::from_pairs(PAIRS).unwrap();
        let rebuilt =
            TimingRecord::from_pairs(record.pairs().map(|(k, v)| (k.name(), v))).unwrap();
        assert_eq!(rebuilt, record);
    }
}
