//! Calculator construction errors
//!
//! Every error is raised while a [`Calculator`](crate::Calculator) is being
//! built. A calculator that exists is fully valid; none of its queries fail.

use crate::register::Register;
use crate::timing::TimingKey;

/// Error returned when a timing record cannot be turned into register values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdrcError {
    /// A required timing parameter was absent from a keyed record.
    #[error("missing timing parameter `{key}`")]
    MissingParameter {
        /// The absent key.
        key: TimingKey,
    },

    /// The clock period is zero, negative, NaN or infinite.
    #[error("invalid clock period tCK = {t_ck} ns (must be finite and greater than 0)")]
    InvalidClock {
        /// The rejected clock period in nanoseconds.
        t_ck: f64,
    },

    /// A parameter value cannot be converted to a cycle count.
    ///
    /// Time-domain values and `arcv` must be finite and non-negative;
    /// dimensionless fields (`are`, `wbst`, `casl`, `bl`) must be
    /// non-negative integers no larger than 255.
    #[error("invalid value {value} for timing parameter `{key}`")]
    InvalidParameter {
        /// The offending key.
        key: TimingKey,
        /// The value as supplied.
        value: f64,
    },

    /// A cycle count is wider than the register field it is packed into.
    ///
    /// Only raised under [`OverflowPolicy::Strict`](crate::OverflowPolicy::Strict).
    #[error("{register}.{field} needs {cycles} cycles but the field holds at most {max}")]
    FieldOverflow {
        /// Register holding the field.
        register: Register,
        /// Field name as printed in the TRM (e.g. `"tRFC"`).
        field: &'static str,
        /// The computed cycle count.
        cycles: u32,
        /// Largest value the field can encode.
        max: u32,
    },
}
