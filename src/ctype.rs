use crate::machine::*;
use std::fmt::Formatter;

/// Types whose sizes are reported, in report order.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    Char, SChar, UChar,
    Short, UShort, SShort,
    Int, UInt, SInt,
    Long, ULong, SLong,
    LLong, ULLong, SLLong,
    Float, Double,
    Bool,
    Enum,
}

/// The enumeration measured for the `enum` entry.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadRequest {
    Refresh = 1,
    Up,
    Down,
    Left,
    Right,
    Exit,
}

const_assert!(PadRequest::Refresh as u32 == 1);
const_assert!(PadRequest::Exit as u32 == 6);

impl CType {
    pub const COUNT: usize = 19;

    #[rustfmt::skip]
    pub const ALL: [CType; Self::COUNT] = [
        CType::Char, CType::SChar, CType::UChar,
        CType::Short, CType::UShort, CType::SShort,
        CType::Int, CType::UInt, CType::SInt,
        CType::Long, CType::ULong, CType::SLong,
        CType::LLong, CType::ULLong, CType::SLLong,
        CType::Float, CType::Double,
        CType::Bool,
        CType::Enum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CType::Char => "char",
            CType::SChar => "signed char",
            CType::UChar => "unsigned char",
            CType::Short => "short",
            CType::UShort => "unsigned short",
            CType::SShort => "signed short",
            CType::Int => "int",
            CType::UInt => "unsigned int",
            CType::SInt => "signed int",
            CType::Long => "long",
            CType::ULong => "unsigned long",
            CType::SLong => "signed long",
            CType::LLong => "long long",
            CType::ULLong => "unsigned long long",
            CType::SLLong => "signed long long",
            CType::Float => "float",
            CType::Double => "double",
            CType::Bool => "_Bool",
            CType::Enum => "enum",
        }
    }

    /// Size in bytes on the compilation target.
    pub fn size(self) -> usize {
        match self {
            CType::Char => CHAR_SIZE,
            CType::SChar => SCHAR_SIZE,
            CType::UChar => UCHAR_SIZE,
            CType::Short | CType::SShort => SHORT_SIZE,
            CType::UShort => USHORT_SIZE,
            CType::Int | CType::SInt => INT_SIZE,
            CType::UInt => UINT_SIZE,
            CType::Long | CType::SLong => LONG_SIZE,
            CType::ULong => ULONG_SIZE,
            CType::LLong | CType::SLLong => LLONG_SIZE,
            CType::ULLong => ULLONG_SIZE,
            CType::Float => FLOAT_SIZE,
            CType::Double => DOUBLE_SIZE,
            CType::Bool => BOOL_SIZE,
            CType::Enum => ENUM_SIZE,
        }
    }

    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            CType::UChar | CType::UShort | CType::UInt | CType::ULong | CType::ULLong
        )
    }
}

impl std::fmt::Display for CType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
