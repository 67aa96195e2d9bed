use std::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint,
    c_ulong, c_ulonglong, c_ushort,
};
use std::mem::size_of;

use crate::ctype::{CType, PadRequest};

pub const CHAR_SIZE: usize = size_of::<c_char>();
pub const SCHAR_SIZE: usize = size_of::<c_schar>();
pub const UCHAR_SIZE: usize = size_of::<c_uchar>();
pub const SHORT_SIZE: usize = size_of::<c_short>();
pub const USHORT_SIZE: usize = size_of::<c_ushort>();
pub const INT_SIZE: usize = size_of::<c_int>();
pub const UINT_SIZE: usize = size_of::<c_uint>();
pub const LONG_SIZE: usize = size_of::<c_long>();
pub const ULONG_SIZE: usize = size_of::<c_ulong>();
pub const LLONG_SIZE: usize = size_of::<c_longlong>();
pub const ULLONG_SIZE: usize = size_of::<c_ulonglong>();
pub const FLOAT_SIZE: usize = size_of::<c_float>();
pub const DOUBLE_SIZE: usize = size_of::<c_double>();
pub const BOOL_SIZE: usize = size_of::<bool>();
pub const ENUM_SIZE: usize = size_of::<PadRequest>();
pub const PTR_SIZE: usize = size_of::<*const ()>();

const_assert!(CHAR_SIZE == 1);
const_assert!(SCHAR_SIZE == CHAR_SIZE);
const_assert!(UCHAR_SIZE == CHAR_SIZE);

const_assert!(SHORT_SIZE >= 2);
const_assert!(INT_SIZE >= 2);
const_assert!(LONG_SIZE >= 4);
const_assert!(LLONG_SIZE >= 8);

const_assert!(SHORT_SIZE <= INT_SIZE);
const_assert!(INT_SIZE <= LONG_SIZE);
const_assert!(LONG_SIZE <= LLONG_SIZE);

const_assert!(USHORT_SIZE == SHORT_SIZE);
const_assert!(UINT_SIZE == INT_SIZE);
const_assert!(ULONG_SIZE == LONG_SIZE);
const_assert!(ULLONG_SIZE == LLONG_SIZE);

const_assert!(FLOAT_SIZE <= DOUBLE_SIZE);

const_assert!(BOOL_SIZE >= 1);
const_assert!(BOOL_SIZE <= INT_SIZE);
const_assert!(ENUM_SIZE >= 1);

/// Width convention for `int`, `long` and pointers on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataModel {
    /// 32-bit int, long and pointer.
    Ilp32,
    /// 64-bit long and pointer. Most 64-bit unixes.
    Lp64,
    /// 32-bit long, 64-bit pointer. 64-bit Windows.
    Llp64,
    Other,
}

impl DataModel {
    pub const fn detect() -> Self {
        match (INT_SIZE, LONG_SIZE, PTR_SIZE) {
            (4, 4, 4) => DataModel::Ilp32,
            (4, 8, 8) => DataModel::Lp64,
            (4, 4, 8) => DataModel::Llp64,
            _ => DataModel::Other,
        }
    }

    /**
     * Sizes a hosted C toolchain for this data model reports, in the order of `CType::ALL`.
     *
     * Enumerations are assumed to be int-sized, which doesn't hold for targets
     * built with short enums (e.g. bare-metal ARM).
     */
    pub fn expected_sizes(self) -> Option<[usize; CType::COUNT]> {
        let long = match self {
            DataModel::Ilp32 | DataModel::Llp64 => 4,
            DataModel::Lp64 => 8,
            DataModel::Other => return None,
        };
        #[rustfmt::skip]
        let sizes = [
            1, 1, 1,
            2, 2, 2,
            4, 4, 4,
            long, long, long,
            8, 8, 8,
            4, 8,
            1,
            4,
        ];
        Some(sizes)
    }
}

impl std::fmt::Display for DataModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataModel::Ilp32 => write!(f, "ILP32"),
            DataModel::Lp64 => write!(f, "LP64"),
            DataModel::Llp64 => write!(f, "LLP64"),
            DataModel::Other => write!(f, "unknown data model"),
        }
    }
}
