//! The decoded instruction record.

use talon_types::{AddrSize, Mode, OpSize, SegReg};

use crate::ids::IaOpcode;
use crate::IllegalEncoding;

/// Base register of a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemBase {
    Gpr(u8),
    /// RIP-relative addressing (64-bit mode, mod=00 rm=101).
    Rip,
}

/// Index register of a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemIndex {
    Gpr(u8),
    /// Vector index from a vsib byte; gathers and scatters only.
    Vec(u8),
}

/// Memory reference assembled from modrm/sib/displacement.
///
/// The displacement is kept sign-extended; with a 16-bit address size only
/// its low 16 bits are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemRef {
    pub base: Option<MemBase>,
    pub index: Option<MemIndex>,
    pub scale: u8,
    pub disp: i32,
}

impl MemRef {
    pub const NONE: MemRef = MemRef {
        base: None,
        index: None,
        scale: 1,
        disp: 0,
    };
}

/// One resolved source operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcReg {
    None,
    /// Register number within the file named by the operand kind.
    Reg(u8),
    /// The slot reads or writes [`Inst::mem`].
    Mem,
    /// Same, through the vector memory path (maskable under EVEX).
    VecMem,
}

/// Repeat prefix state, recorded even when the prefix was consumed as an
/// opcode selector (string ops look at it, everything else ignores it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rep {
    None,
    /// F3.
    Repe,
    /// F2.
    Repne,
}

/// A fully decoded instruction.
///
/// `id` is [`IaOpcode::Error`] for byte sequences that consumed a known
/// length but do not encode anything; `fault` then says why. Fields past
/// the prefix state are only meaningful when the instruction form uses
/// them (`vl` and the mask fields stay zero outside EVEX, `x87_word`
/// outside the D8..DF escapes, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inst {
    pub id: IaOpcode,
    /// Total encoded length in bytes.
    pub len: u8,
    pub fault: Option<IllegalEncoding>,
    pub mode: Mode,
    pub osize: OpSize,
    pub asize: AddrSize,
    /// Effective data segment after overrides and base-register defaults.
    pub seg: SegReg,
    pub seg_override: Option<SegReg>,
    pub lock: bool,
    pub rep: Rep,
    /// A rex prefix was seen (changes which 8-bit registers 4..7 name).
    pub rex: bool,
    /// notrack (3E) was in effect for an indirect call/jump.
    pub notrack: bool,
    /// modrm.mod was 11 (register form), or the form has no modrm byte.
    pub modc0: bool,
    pub srcs: [SrcReg; 4],
    pub mem: MemRef,
    pub imm: u64,
    /// Secondary immediate (enter, far pointer selector).
    pub imm2: u16,
    /// 128-bit lane count of the vector length; zero for scalar forms.
    pub vl: u32,
    pub vex_w: bool,
    /// Opmask register number; zero means unmasked.
    pub opmask: u8,
    pub zero_masking: bool,
    /// Embedded rounding control (valid when `evex_b` is set on a
    /// register form).
    pub rc: u8,
    pub evex_b: bool,
    /// Low eleven bits of (opcode << 8) | modrm for the x87 escapes.
    pub x87_word: u16,
}

impl Inst {
    #[must_use]
    pub fn new(mode: Mode) -> Inst {
        Inst {
            id: IaOpcode::Error,
            len: 0,
            fault: None,
            mode,
            osize: OpSize::Bits16,
            asize: AddrSize::Bits16,
            seg: SegReg::Ds,
            seg_override: None,
            lock: false,
            rep: Rep::None,
            rex: false,
            notrack: false,
            modc0: true,
            srcs: [SrcReg::None; 4],
            mem: MemRef::NONE,
            imm: 0,
            imm2: 0,
            vl: 0,
            vex_w: false,
            opmask: 0,
            zero_masking: false,
            rc: 0,
            evex_b: false,
            x87_word: 0,
        }
    }

    /// The memory operand exists (some source resolved to `Mem`/`VecMem`).
    #[must_use]
    pub fn is_mem(&self) -> bool {
        !self.modc0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_instruction_is_an_error_of_length_zero() {
        let inst = Inst::new(Mode::Bits32);
        assert_eq!(inst.id, IaOpcode::Error);
        assert_eq!(inst.len, 0);
        assert!(inst.fault.is_none());
        assert!(inst.modc0);
        assert_eq!(inst.mem, MemRef::NONE);
    }
}
