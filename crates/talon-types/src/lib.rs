//! Architectural vocabulary shared between the decode front end and anything
//! that consumes decoded instructions (interpreters, tracers, test harnesses).
//!
//! Nothing in this crate touches instruction bytes; it only defines the value
//! types the decoder reports its results in.

use bitflags::bitflags;
use core::fmt;

/// Architectural upper bound on the encoded length of one instruction.
///
/// Decoders clamp their input window to this many bytes; anything longer
/// raises #GP on real hardware before decode completes.
pub const MAX_INSN_LEN: usize = 15;

/// CPU operating mode from the decoder's point of view.
///
/// The decoder only cares about the default operand/address sizes and which
/// opcode map variant applies, so 16-bit protected mode, real mode and vm86
/// all collapse into [`Mode::Bits16`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Bits16,
    Bits32,
    Bits64,
}

impl Mode {
    /// True for long mode, where REX/RIP-relative/forced-64-bit rules apply.
    #[must_use]
    pub fn is_long(self) -> bool {
        matches!(self, Mode::Bits64)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Bits16 => "16-bit",
            Mode::Bits32 => "32-bit",
            Mode::Bits64 => "64-bit",
        };
        f.write_str(s)
    }
}

/// Effective operand size of a decoded instruction.
///
/// The discriminants are the canonical 2-bit matcher encoding (16 -> 0,
/// 32 -> 1, 64 -> 3); code 2 is unused by the architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum OpSize {
    Bits16 = 0,
    Bits32 = 1,
    Bits64 = 3,
}

impl OpSize {
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            OpSize::Bits16 => 2,
            OpSize::Bits32 => 4,
            OpSize::Bits64 => 8,
        }
    }

    /// True when the operand size is at least 32 bits.
    #[must_use]
    pub fn at_least_32(self) -> bool {
        !matches!(self, OpSize::Bits16)
    }
}

/// Effective address size of a decoded instruction, same 2-bit encoding as
/// [`OpSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AddrSize {
    Bits16 = 0,
    Bits32 = 1,
    Bits64 = 3,
}

impl AddrSize {
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            AddrSize::Bits16 => 2,
            AddrSize::Bits32 => 4,
            AddrSize::Bits64 => 8,
        }
    }

    /// True when the address size is at least 32 bits (VSIB requires this).
    #[must_use]
    pub fn at_least_32(self) -> bool {
        !matches!(self, AddrSize::Bits16)
    }
}

/// Segment registers in their architectural encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegReg {
    Es = 0,
    Cs = 1,
    Ss = 2,
    Ds = 3,
    Fs = 4,
    Gs = 5,
}

impl SegReg {
    #[must_use]
    pub fn from_index(index: u8) -> Option<SegReg> {
        match index {
            0 => Some(SegReg::Es),
            1 => Some(SegReg::Cs),
            2 => Some(SegReg::Ss),
            3 => Some(SegReg::Ds),
            4 => Some(SegReg::Fs),
            5 => Some(SegReg::Gs),
            _ => None,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SegReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegReg::Es => "es",
            SegReg::Cs => "cs",
            SegReg::Ss => "ss",
            SegReg::Ds => "ds",
            SegReg::Fs => "fs",
            SegReg::Gs => "gs",
        };
        f.write_str(s)
    }
}

/// General-purpose register indices in ModRM/REX numbering.
///
/// The decoder reports plain indices; whether an index names AL, AX, EAX or
/// RAX is decided by the operand class of the matched opcode.
pub mod gpr {
    pub const RAX: u8 = 0;
    pub const RCX: u8 = 1;
    pub const RDX: u8 = 2;
    pub const RBX: u8 = 3;
    pub const RSP: u8 = 4;
    pub const RBP: u8 = 5;
    pub const RSI: u8 = 6;
    pub const RDI: u8 = 7;
    pub const R8: u8 = 8;
    pub const R9: u8 = 9;
    pub const R10: u8 = 10;
    pub const R11: u8 = 11;
    pub const R12: u8 = 12;
    pub const R13: u8 = 13;
    pub const R14: u8 = 14;
    pub const R15: u8 = 15;

    // 16-bit addressing spells the same numbers differently.
    pub const BX: u8 = RBX;
    pub const BP: u8 = RBP;
    pub const SI: u8 = RSI;
    pub const DI: u8 = RDI;
}

/// Vector length of a VEX/EVEX/XOP instruction, counted in 128-bit lanes.
///
/// EVEX rounding control can momentarily produce the out-of-range value 8;
/// the decoder rejects any length above [`vl::VL512`] after table matching.
pub mod vl {
    pub const NONE: u32 = 0;
    pub const VL128: u32 = 1;
    pub const VL256: u32 = 2;
    pub const VL512: u32 = 4;
}

bitflags! {
    /// Feature bits that shape the decode tables.
    ///
    /// A `TableSet` built from a given mask decodes exactly the ISA surface
    /// that mask describes: absent features either free their encodings for
    /// the legacy meaning (LES/LDS/BOUND/POP, BSF/BSR) or make them invalid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CpuFeatures: u32 {
        /// VEX-encoded AVX/AVX2, including the scalar BMI groups.
        const AVX = 1 << 0;
        /// EVEX-encoded AVX-512, with opmasks and compressed disp8.
        const AVX512 = 1 << 1;
        /// AMD XOP map (0x8F with map id 8..10).
        const XOP = 1 << 2;
        /// AMD 3DNow! (0F 0F with trailing selector byte).
        const D3NOW = 1 << 3;
        /// TZCNT; without it F3 0F BC falls back to BSF.
        const BMI1 = 1 << 4;
        /// LZCNT; without it F3 0F BD falls back to BSR.
        const LZCNT = 1 << 5;
        /// Shadow stacks / indirect branch tracking opcodes and the 3E
        /// no-track hint.
        const CET = 1 << 6;
        /// AMD's LOCK MOV CR0 alias for CR8 access.
        const ALT_MOV_CR8 = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_codes_match_matcher_encoding() {
        assert_eq!(OpSize::Bits16.code(), 0);
        assert_eq!(OpSize::Bits32.code(), 1);
        assert_eq!(OpSize::Bits64.code(), 3);
        assert_eq!(AddrSize::Bits16.code(), 0);
        assert_eq!(AddrSize::Bits32.code(), 1);
        assert_eq!(AddrSize::Bits64.code(), 3);
    }

    #[test]
    fn seg_reg_round_trips() {
        for idx in 0..6 {
            let seg = SegReg::from_index(idx).unwrap();
            assert_eq!(seg.index(), idx);
        }
        assert_eq!(SegReg::from_index(6), None);
        assert_eq!(SegReg::Ss.to_string(), "ss");
    }

    #[test]
    fn vector_lengths_count_lanes() {
        assert_eq!(vl::VL128 * 16, 16);
        assert_eq!(vl::VL256 * 16, 32);
        assert_eq!(vl::VL512 * 16, 64);
    }

    #[test]
    fn feature_masks_compose() {
        let f = CpuFeatures::AVX | CpuFeatures::AVX512;
        assert!(f.contains(CpuFeatures::AVX));
        assert!(!f.contains(CpuFeatures::XOP));
    }
}
