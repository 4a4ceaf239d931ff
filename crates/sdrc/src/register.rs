//! SDRC register values
//!
//! [`RegisterValue`] is the integer that gets written to silicon. Hex text
//! is only produced by its `Display`/`LowerHex` impls.

use core::fmt;

use crate::cycles::ClockCycleRecord;
use crate::error::SdrcError;
use crate::field::Field;

/// One of the four SDRC timing registers computed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// `SDRC_ACTIM_CTRLA_p`: row/refresh AC timings.
    ActimCtrlA,
    /// `SDRC_ACTIM_CTRLB_p`: write-to-read, CKE, power-down and self-refresh timings.
    ActimCtrlB,
    /// `SDRC_RFR_CTRL_p`: autorefresh counter and enable.
    RfrCtrl,
    /// `SDRC_MR_p`: mode register (CAS latency, burst length).
    Mr,
}

impl Register {
    /// All four registers, in programming order.
    pub const ALL: [Register; 4] = [
        Register::ActimCtrlA,
        Register::ActimCtrlB,
        Register::RfrCtrl,
        Register::Mr,
    ];

    /// Short register name (`"ACTIM_CTRLA"`).
    pub const fn name(self) -> &'static str {
        match self {
            Register::ActimCtrlA => "ACTIM_CTRLA",
            Register::ActimCtrlB => "ACTIM_CTRLB",
            Register::RfrCtrl => "RFR_CTRL",
            Register::Mr => "MR",
        }
    }

    /// Fields packed into this register, most significant first.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Register::ActimCtrlA => &[
                Field::TRfc,
                Field::TRc,
                Field::TRas,
                Field::TRp,
                Field::TRcd,
                Field::TRrd,
                Field::TWr,
                Field::TDal,
            ],
            Register::ActimCtrlB => &[Field::TWtr, Field::TCke, Field::TXp, Field::TXsr],
            Register::RfrCtrl => &[Field::Arcv, Field::Are],
            Register::Mr => &[Field::Wbst, Field::Casl, Field::Bl],
        }
    }

    /// Pack `cycles` into this register, rejecting counts that do not fit.
    ///
    /// # Errors
    ///
    /// [`SdrcError::FieldOverflow`] for the first field (most significant
    /// first) whose count exceeds its width.
    pub fn pack(self, cycles: &ClockCycleRecord) -> Result<RegisterValue, SdrcError> {
        for &field in self.fields() {
            let value = cycles.get(field);
            let bits = field.bits();
            if !bits.fits(value) {
                return Err(SdrcError::FieldOverflow {
                    register: self,
                    field: field.name(),
                    cycles: value,
                    max: bits.max(),
                });
            }
        }
        Ok(self.pack_truncating(cycles))
    }

    /// Fields of this register whose count in `cycles` exceeds the field width.
    pub fn overflowing_fields(
        self,
        cycles: &ClockCycleRecord,
    ) -> impl Iterator<Item = Field> + '_ {
        self.fields()
            .iter()
            .copied()
            .filter(move |field| !field.bits().fits(cycles.get(*field)))
    }

    /// Pack `cycles` into this register, masking counts into their fields.
    ///
    /// Each field contributes `(value & mask) << shift`; bits that do not
    /// fit are silently dropped.
    pub fn pack_truncating(self, cycles: &ClockCycleRecord) -> RegisterValue {
        let raw = self
            .fields()
            .iter()
            .fold(0u32, |acc, &field| acc | field.bits().place(cycles.get(field)));
        RegisterValue(raw)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw 32-bit value of one SDRC register.
///
/// Formats as `0x…` hex (no zero padding) with `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct RegisterValue(u32);

impl RegisterValue {
    /// Wrap a raw register value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value to write to the register.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Decode one field. Returns the masked field content regardless of
    /// which register `field` belongs to.
    pub const fn field(self, field: Field) -> u32 {
        field.bits().extract(self.0)
    }
}

impl From<RegisterValue> for u32 {
    fn from(value: RegisterValue) -> Self {
        value.0
    }
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// The four computed register values of one timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterSet {
    /// `SDRC_ACTIM_CTRLA_p`
    pub actim_ctrla: RegisterValue,
    /// `SDRC_ACTIM_CTRLB_p`
    pub actim_ctrlb: RegisterValue,
    /// `SDRC_RFR_CTRL_p`
    pub rfr_ctrl: RegisterValue,
    /// `SDRC_MR_p`
    pub mr: RegisterValue,
}

impl RegisterSet {
    /// Value of `register`.
    pub const fn get(&self, register: Register) -> RegisterValue {
        match register {
            Register::ActimCtrlA => self.actim_ctrla,
            Register::ActimCtrlB => self.actim_ctrlb,
            Register::RfrCtrl => self.rfr_ctrl,
            Register::Mr => self.mr,
        }
    }
}
