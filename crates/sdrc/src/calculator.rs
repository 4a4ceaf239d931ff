//! SDRC register calculator
//!
//! [`Calculator`] takes one [`TimingRecord`], converts it to clock cycles and
//! packs the four SDRC timing registers. All work happens in the
//! constructor; afterwards the calculator is a read-only view and every query
//! is a plain field read.

use core::fmt;

use crate::cycles::ClockCycleRecord;
use crate::error::SdrcError;
use crate::register::{Register, RegisterSet, RegisterValue};
use crate::timing::TimingRecord;

/// What to do with a cycle count that is wider than its register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Fail construction with [`SdrcError::FieldOverflow`].
    #[default]
    Strict,
    /// Mask the count into the field, dropping high bits.
    ///
    /// Matches the vendor init scripts. A truncated `tRFC` programs a
    /// refresh period shorter than the part requires.
    Truncate,
}

/// Register calculator for one SDRAM part at one clock rate.
///
/// ```
/// use sdrc::{Calculator, SdrcError, TimingKey};
///
/// let err = Calculator::from_pairs([("tCK", 5.0)]).unwrap_err();
/// assert_eq!(err, SdrcError::MissingParameter { key: TimingKey::TRfc });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calculator {
    record: TimingRecord,
    cycles: ClockCycleRecord,
    registers: RegisterSet,
    policy: OverflowPolicy,
}

impl Calculator {
    /// Build a calculator with [`OverflowPolicy::Strict`].
    ///
    /// # Errors
    ///
    /// - [`SdrcError::InvalidClock`] if `tCK` is not finite and positive
    /// - [`SdrcError::InvalidParameter`] for negative or non-finite timings
    /// - [`SdrcError::FieldOverflow`] if a cycle count does not fit its field
    pub fn new(record: TimingRecord) -> Result<Self, SdrcError> {
        Self::with_policy(record, OverflowPolicy::Strict)
    }

    /// Build a calculator with an explicit overflow policy.
    ///
    /// # Errors
    ///
    /// As [`Calculator::new`]; [`SdrcError::FieldOverflow`] is only returned
    /// under [`OverflowPolicy::Strict`].
    pub fn with_policy(record: TimingRecord, policy: OverflowPolicy) -> Result<Self, SdrcError> {
        record.validate()?;
        let cycles = ClockCycleRecord::from_record(&record);

        let pack = |register: Register| -> Result<RegisterValue, SdrcError> {
            match policy {
                OverflowPolicy::Strict => register.pack(&cycles),
                OverflowPolicy::Truncate => {
                    #[cfg(feature = "tracing")]
                    for field in register.overflowing_fields(&cycles) {
                        tracing::warn!(
                            register = register.name(),
                            field = field.name(),
                            cycles = cycles.get(field),
                            max = field.bits().max(),
                            "cycle count truncated to fit register field"
                        );
                    }
                    Ok(register.pack_truncating(&cycles))
                }
            }
        };

        let registers = RegisterSet {
            actim_ctrla: pack(Register::ActimCtrlA)?,
            actim_ctrlb: pack(Register::ActimCtrlB)?,
            rfr_ctrl: pack(Register::RfrCtrl)?,
            mr: pack(Register::Mr)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            t_ck = record.t_ck,
            actim_ctrla = registers.actim_ctrla.get(),
            actim_ctrlb = registers.actim_ctrlb.get(),
            rfr_ctrl = registers.rfr_ctrl.get(),
            mr = registers.mr.get(),
            "SDRC registers computed"
        );

        Ok(Self {
            record,
            cycles,
            registers,
            policy,
        })
    }

    /// Build a strict calculator from `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// [`SdrcError::MissingParameter`] naming an absent key, plus every
    /// error of [`TimingRecord::from_pairs`] and [`Calculator::new`].
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SdrcError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self::new(TimingRecord::from_pairs(pairs)?)
    }

    /// The record this calculator was built from.
    pub fn record(&self) -> &TimingRecord {
        &self.record
    }

    /// SDRC clock period in nanoseconds.
    pub fn clock_period_ns(&self) -> f64 {
        self.record.t_ck
    }

    /// Overflow policy used at construction.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Timing parameters in clock cycles.
    pub fn cycles(&self) -> &ClockCycleRecord {
        &self.cycles
    }

    /// All four register values.
    pub fn registers(&self) -> RegisterSet {
        self.registers
    }

    /// Value of `register`.
    pub fn register(&self, register: Register) -> RegisterValue {
        self.registers.get(register)
    }

    /// Value to program into `SDRC_ACTIM_CTRLA_p`.
    pub fn actim_ctrla(&self) -> RegisterValue {
        self.registers.actim_ctrla
    }

    /// Value to program into `SDRC_ACTIM_CTRLB_p`.
    pub fn actim_ctrlb(&self) -> RegisterValue {
        self.registers.actim_ctrlb
    }

    /// Value to program into `SDRC_RFR_CTRL_p`.
    pub fn rfr_ctrl(&self) -> RegisterValue {
        self.registers.rfr_ctrl
    }

    /// Value to program into `SDRC_MR_p`.
    pub fn mr(&self) -> RegisterValue {
        self.registers.mr
    }
}

impl fmt::Display for Calculator {
    /// Diagnostic dump: clock period, the four registers, the cycle record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tCK : {} ns", self.record.t_ck)?;
        writeln!(f, "actim ctrla : {}", self.registers.actim_ctrla)?;
        writeln!(f, "actim ctrlb : {}", self.registers.actim_ctrlb)?;
        writeln!(f, "rfr_ctrl : {}", self.registers.rfr_ctrl)?;
        writeln!(f, "mr : {}", self.registers.mr)?;
        write!(f, "timings : {}", self.cycles)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn record() -> TimingRecord {
        TimingRecord {
            t_ck: 5.0,
            t_rfc: 140.0,
            t_rc: 55.0,
            t_ras: 40.0,
            t_rp: 15.0,
            t_rcd: 16.2,
            t_rrd: 10.0,
            t_wr: 15.0,
            t_wtr: 10.0,
            t_cke: 10.0,
            t_xp: 2.9,
            t_xsr: 200.0,
            arcv: 1510.0,
            are: 1,
            wbst: 0,
            casl: 3,
            bl: 2,
        }
    }

    #[test]
    fn computes_all_four_registers() {
        let sdrc = Calculator::new(record()).unwrap();
        assert_eq!(sdrc.actim_ctrla().get(), 0xe2e1_c4c6);
        assert_eq!(sdrc.actim_ctrlb().get(), 0x0002_2328);
        assert_eq!(sdrc.rfr_ctrl().get(), 0x0005_e601);
        assert_eq!(sdrc.mr().get(), 0x0000_0032);
        assert_eq!(sdrc.clock_period_ns(), 5.0);
    }

    #[test]
    fn register_lookup_matches_named_accessors() {
        let sdrc = Calculator::new(record()).unwrap();
        assert_eq!(sdrc.register(Register::ActimCtrlA), sdrc.actim_ctrla());
        assert_eq!(sdrc.register(Register::ActimCtrlB), sdrc.actim_ctrlb());
        assert_eq!(sdrc.register(Register::RfrCtrl), sdrc.rfr_ctrl());
        assert_eq!(sdrc.register(Register::Mr), sdrc.mr());
    }

    #[test]
    fn rejects_zero_clock() {
        let bad = TimingRecord {
            t_ck: 0.0,
            ..record()
        };
        assert_eq!(
            Calculator::new(bad),
            Err(SdrcError::InvalidClock { t_ck: 0.0 })
        );
    }

    #[test]
    fn rejects_nan_clock() {
        let bad = TimingRecord {
            t_ck: f64::NAN,
            ..record()
        };
        assert!(matches!(
            Calculator::new(bad),
            Err(SdrcError::InvalidClock { .. })
        ));
    }

    #[test]
    fn strict_policy_rejects_trfc_overflow() {
        // 200 ns / 5 ns = 40 cycles, TRFC holds 31
        let wide = TimingRecord {
            t_rfc: 200.0,
            ..record()
        };
        assert_eq!(
            Calculator::new(wide),
            Err(SdrcError::FieldOverflow {
                register: Register::ActimCtrlA,
                field: "tRFC",
                cycles: 40,
                max: 31,
            })
        );
    }

    #[test]
    fn truncate_policy_masks_trfc_overflow() {
        let wide = TimingRecord {
            t_rfc: 200.0,
            ..record()
        };
        let sdrc = Calculator::with_policy(wide, OverflowPolicy::Truncate).unwrap();
        assert_eq!(sdrc.cycles().t_rfc, 40);
        // 40 & 0x1f = 8
        assert_eq!(sdrc.actim_ctrla().field(Field::TRfc), 8);
        assert_eq!(sdrc.actim_ctrla().get(), 0x42e1_c4c6);
        assert_eq!(sdrc.policy(), OverflowPolicy::Truncate);
    }

    #[test]
    fn truncate_policy_masks_every_overflowing_field() {
        // tRFC 200 ns -> 40 cycles, tRC 165 ns -> 33 cycles; both fields hold 31
        let wide = TimingRecord {
            t_rfc: 200.0,
            t_rc: 165.0,
            ..record()
        };
        let sdrc = Calculator::with_policy(wide, OverflowPolicy::Truncate).unwrap();
        let overflowing: Vec<Field> = Register::ActimCtrlA
            .overflowing_fields(sdrc.cycles())
            .collect();
        assert_eq!(overflowing, [Field::TRfc, Field::TRc]);
        assert_eq!(sdrc.actim_ctrla().field(Field::TRfc), 8);
        assert_eq!(sdrc.actim_ctrla().field(Field::TRc), 1);
    }

    #[test]
    fn display_dumps_clock_registers_and_cycles() {
        let text = Calculator::new(record()).unwrap().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("tCK : 5 ns"));
        assert_eq!(lines.next(), Some("actim ctrla : 0xe2e1c4c6"));
        assert_eq!(lines.next(), Some("actim ctrlb : 0x22328"));
        assert_eq!(lines.next(), Some("rfr_ctrl : 0x5e601"));
        assert_eq!(lines.next(), Some("mr : 0x32"));
        assert!(lines.next().is_some_and(|l| l.starts_with("timings : tRFC=28")));
        assert_eq!(lines.next(), None);
    }
}
