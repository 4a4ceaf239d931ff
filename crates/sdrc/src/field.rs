//! SDRC register bit-field layout
//!
//! Field positions from the AM/DM37x TRM, SDRC chapter (per chip-select
//! registers `SDRC_ACTIM_CTRLA_p`, `SDRC_ACTIM_CTRLB_p`, `SDRC_RFR_CTRL_p`,
//! `SDRC_MR_p`).
//!
//! ```text
//! ACTIM_CTRLA  31   27 26   22 21  18 17 15 14 12 11  9 8   6 5 4    0
//!              | tRFC | tRC  | tRAS | tRP | tRCD| tRRD| tWR |-| tDAL |
//! ACTIM_CTRLB  17 16 15 14 12 11 10  8 7          0
//!              |tWTR|-| tCKE|-| tXP | tXSR       |
//! RFR_CTRL     23                 8 7      2 1  0
//!              |       arcv       |   -    | are|
//! MR           9      8 7 6  4 3 2  0
//!              |wbst| - |-|casl|-| bl|
//! ```

use core::fmt;

use crate::register::Register;

/// Position and width of one field inside a 32-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Bit index of the field's least significant bit.
    pub shift: u32,
    /// Field width in bits (1..=31).
    pub width: u32,
}

impl BitField {
    /// Field mask before shifting (`0x1f` for a 5-bit field).
    #[allow(clippy::arithmetic_side_effects)] // width is 1..=31 for every SDRC field
    pub const fn mask(self) -> u32 {
        (1 << self.width) - 1
    }

    /// Largest cycle count the field can encode.
    pub const fn max(self) -> u32 {
        self.mask()
    }

    /// Bit index of the field's most significant bit.
    #[allow(clippy::arithmetic_side_effects)] // shift + width <= 32
    pub const fn msb(self) -> u32 {
        self.shift + self.width - 1
    }

    /// `true` if `value` fits without losing bits.
    pub const fn fits(self, value: u32) -> bool {
        value <= self.max()
    }

    /// `(value & mask) << shift`. High bits that do not fit are dropped.
    pub const fn place(self, value: u32) -> u32 {
        (value & self.mask()) << self.shift
    }

    /// Read the field back out of a register value.
    pub const fn extract(self, register: u32) -> u32 {
        (register >> self.shift) & self.mask()
    }
}

/// A named field of one of the four SDRC timing registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// ACTIM_CTRLA TRFC[31:27]
    TRfc,
    /// ACTIM_CTRLA TRC[26:22]
    TRc,
    /// ACTIM_CTRLA TRAS[21:18]
    TRas,
    /// ACTIM_CTRLA TRP[17:15]
    TRp,
    /// ACTIM_CTRLA TRCD[14:12]
    TRcd,
    /// ACTIM_CTRLA TRRD[11:9]
    TRrd,
    /// ACTIM_CTRLA TWR[8:6]
    TWr,
    /// ACTIM_CTRLA TDAL[4:0], packed with a 4-bit mask
    TDal,
    /// ACTIM_CTRLB TWTR[17:16]
    TWtr,
    /// ACTIM_CTRLB TCKE[14:12]
    TCke,
    /// ACTIM_CTRLB TXP[10:8]
    TXp,
    /// ACTIM_CTRLB TXSR[7:0]
    TXsr,
    /// RFR_CTRL ARCV[23:8]
    Arcv,
    /// RFR_CTRL ARE[1:0]
    Are,
    /// MR WBST[9]
    Wbst,
    /// MR CASL[6:4]
    Casl,
    /// MR BL[2:0]
    Bl,
}

impl Field {
    /// Every field, grouped by register in [`Register::ALL`] order.
    pub const ALL: [Field; 17] = [
        Field::TRfc,
        Field::TRc,
        Field::TRas,
        Field::TRp,
        Field::TRcd,
        Field::TRrd,
        Field::TWr,
        Field::TDal,
        Field::TWtr,
        Field::TCke,
        Field::TXp,
        Field::TXsr,
        Field::Arcv,
        Field::Are,
        Field::Wbst,
        Field::Casl,
        Field::Bl,
    ];

    /// Field name as used in timing records (`"tRFC"`, `"arcv"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Field::TRfc => "tRFC",
            Field::TRc => "tRC",
            Field::TRas => "tRAS",
            Field::TRp => "tRP",
            Field::TRcd => "tRCD",
            Field::TRrd => "tRRD",
            Field::TWr => "tWR",
            Field::TDal => "tDAL",
            Field::TWtr => "tWTR",
            Field::TCke => "tCKE",
            Field::TXp => "tXP",
            Field::TXsr => "tXSR",
            Field::Arcv => "arcv",
            Field::Are => "are",
            Field::Wbst => "wbst",
            Field::Casl => "casl",
            Field::Bl => "bl",
        }
    }

    /// Register that holds this field.
    pub const fn register(self) -> Register {
        match self {
            Field::TRfc
            | Field::TRc
            | Field::TRas
            | Field::TRp
            | Field::TRcd
            | Field::TRrd
            | Field::TWr
            | Field::TDal => Register::ActimCtrlA,
            Field::TWtr | Field::TCke | Field::TXp | Field::TXsr => Register::ActimCtrlB,
            Field::Arcv | Field::Are => Register::RfrCtrl,
            Field::Wbst | Field::Casl | Field::Bl => Register::Mr,
        }
    }

    /// Bit position and width inside [`Field::register`].
    pub const fn bits(self) -> BitField {
        let (shift, width) = match self {
            Field::TRfc => (27, 5),
            Field::TRc => (22, 5),
            Field::TRas => (18, 4),
            Field::TRp => (15, 3),
            Field::TRcd => (12, 3),
            Field::TRrd => (9, 3),
            Field::TWr => (6, 3),
            // Bits 4:0 are reserved for TDAL but the mask is 4 bits wide.
            Field::TDal => (0, 4),
            Field::TWtr => (16, 2),
            Field::TCke => (12, 3),
            Field::TXp => (8, 3),
            Field::TXsr => (0, 8),
            Field::Arcv => (8, 16),
            Field::Are => (0, 2),
            Field::Wbst => (9, 1),
            Field::Casl => (4, 3),
            Field::Bl => (0, 3),
        };
        BitField { shift, width }
    }

    /// One-line description from the TRM.
    pub const fn description(self) -> &'static str {
        match self {
            Field::TRfc => "AUTO REFRESH to ACTIVE / AUTO REFRESH command period",
            Field::TRc => "ACTIVE to ACTIVE command period (row cycle time)",
            Field::TRas => "ACTIVE to PRECHARGE command period",
            Field::TRp => "PRECHARGE command period (row precharge time)",
            Field::TRcd => "ACTIVE to READ or WRITE delay (row-to-column delay)",
            Field::TRrd => "ACTIVE bank A to ACTIVE bank B delay",
            Field::TWr => "WRITE recovery time (tDPL)",
            Field::TDal => "Auto precharge write recovery + precharge time",
            Field::TWtr => "Internal write to read command delay (tCDLR)",
            Field::TCke => "CKE minimum pulse width",
            Field::TXp => "Exit power-down to next valid command delay",
            Field::TXsr => "Self-refresh exit to next valid command delay",
            Field::Arcv => "Autorefresh counter value, (tREFI / tCK) - 50",
            Field::Are => "Autorefresh enable (0 off, 1/2/3 = burst of 1/4/8)",
            Field::Wbst => "Write burst disable (must be 0)",
            Field::Casl => "CAS latency in clock periods",
            Field::Bl => "Burst length (1 = 2 SDR, 2 = 4 DDR, 3 = 8 unsupported)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
