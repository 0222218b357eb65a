//! Opcode descriptor groups and the decode-mask matcher.
//!
//! Every dispatch table entry points at a group: an ordered slice of
//! [`OpcodeEntry`] rows. A row constrains any subset of the decode-mask
//! fields through its `mask` and names the instruction id selected when the
//! constrained bits match. The final row of a group is terminal; reaching it
//! ends the walk and yields its id whether or not it matches, so groups whose
//! last real form is itself conditional append an unconstrained error row.
//!
//! Decode-mask layout (bit offsets):
//!
//! ```text
//! 22 20 18 17 16 15 14 13 12 11 10  9  8  7  4  0
//! OS AS SSE L  C0 64 VEX EVX XOP [VL]  W  K0 EQ RRR NNN
//! ```
//!
//! Operand and address size use the 2-bit codes 16 -> 0, 32 -> 1, 64 -> 3, so
//! a single mask bit can express "16/32" (high bit clear) or "32/64" (low bit
//! set). The encoding-class bits 12..=14 and the LOCK bit 17 are part of the
//! layout but never set in a computed mask: encoding selection happens by
//! table namespace and the LOCK rule is enforced structurally at finalize.

use crate::ids::IaOpcode;

pub const NNN_OFF: u32 = 0;
pub const RRR_OFF: u32 = 4;
pub const SRC_EQ_DST_OFF: u32 = 7;
pub const MASK_K0_OFF: u32 = 8;
pub const VEX_W_OFF: u32 = 9;
pub const VL_OFF: u32 = 10;
pub const VL_512_OFF: u32 = 11;
pub const XOP_OFF: u32 = 12;
pub const EVEX_OFF: u32 = 13;
pub const VEX_OFF: u32 = 14;
pub const IS64_OFF: u32 = 15;
pub const MODC0_OFF: u32 = 16;
pub const LOCK_OFF: u32 = 17;
pub const SSE_OFF: u32 = 18;
pub const SSE_F2_F3_OFF: u32 = 19;
pub const AS32_OFF: u32 = 20;
pub const AS64_OFF: u32 = 21;
pub const OS32_OFF: u32 = 22;
pub const OS64_OFF: u32 = 23;

/// A partial constraint on the decode mask: `bits` must hold wherever `mask`
/// is set. Rows are built by `and`-ing these together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pat {
    pub bits: u32,
    pub mask: u32,
}

impl Pat {
    pub const fn and(self, other: Pat) -> Pat {
        Pat {
            bits: self.bits | other.bits,
            mask: self.mask | other.mask,
        }
    }
}

const fn pat(value: u32, mask: u32, off: u32) -> Pat {
    Pat {
        bits: value << off,
        mask: mask << off,
    }
}

/// Unconstrained pattern; matches every decode mask.
pub const ANY: Pat = pat(0, 0, 0);

pub const OS16: Pat = pat(0, 3, OS32_OFF);
pub const OS32: Pat = pat(1, 3, OS32_OFF);
pub const OS64: Pat = pat(3, 3, OS32_OFF);
pub const OS16_32: Pat = pat(0, 1, OS64_OFF);
pub const OS32_64: Pat = pat(1, 1, OS32_OFF);

pub const AS16: Pat = pat(0, 3, AS32_OFF);
pub const AS32: Pat = pat(1, 3, AS32_OFF);
pub const AS64: Pat = pat(3, 3, AS32_OFF);
pub const AS16_32: Pat = pat(0, 1, AS64_OFF);
pub const AS32_64: Pat = pat(1, 1, AS32_OFF);

pub const IS32: Pat = pat(0, 1, IS64_OFF);
pub const IS64: Pat = pat(1, 1, IS64_OFF);

pub const SSE_NONE: Pat = pat(0, 3, SSE_OFF);
pub const SSE_66: Pat = pat(1, 3, SSE_OFF);
pub const SSE_F3: Pat = pat(2, 3, SSE_OFF);
pub const SSE_F2: Pat = pat(3, 3, SSE_OFF);
/// No REP prefix; a bare 66 is still allowed (osize picks the form).
pub const NO_F2_F3: Pat = pat(0, 1, SSE_F2_F3_OFF);

const LOCK_NOT_ALLOWED: Pat = pat(0, 1, LOCK_OFF);

pub const MOD_REG: Pat = pat(1, 1, MODC0_OFF);
pub const MOD_MEM: Pat = pat(0, 1, MODC0_OFF);

// Encoding-class bits: reserved in the layout, selection is by table.
pub const VEX_ENC: Pat = pat(1, 1, VEX_OFF);
pub const EVEX_ENC: Pat = pat(1, 1, EVEX_OFF);
pub const XOP_ENC: Pat = pat(1, 1, XOP_OFF);

pub const VL128: Pat = pat(0, 3, VL_OFF);
pub const VL256: Pat = pat(1, 3, VL_OFF);
pub const VL512: Pat = pat(3, 3, VL_OFF);
pub const VL256_512: Pat = pat(1, 1, VL_OFF);
pub const VL128_256: Pat = pat(0, 1, VL_512_OFF);
pub const VEX_L0: Pat = VL128;

pub const W0: Pat = pat(0, 1, VEX_W_OFF);
pub const W1: Pat = pat(1, 1, VEX_W_OFF);

/// Row only valid with opmask k0 (i.e. no masking).
pub const MASK_K0: Pat = pat(1, 1, MASK_K0_OFF);
/// Row only valid with a real opmask selected.
pub const MASK_REQUIRED: Pat = pat(0, 1, MASK_K0_OFF);

/// Register form whose nnn and rm fields name the same register; lets the
/// tables give `xchg eax, eax` its NOP identity.
pub const SRC_EQ_DST: Pat = MOD_REG.and(pat(1, 1, SRC_EQ_DST_OFF));

pub const NNN0: Pat = pat(0, 7, NNN_OFF);
pub const NNN1: Pat = pat(1, 7, NNN_OFF);
pub const NNN2: Pat = pat(2, 7, NNN_OFF);
pub const NNN3: Pat = pat(3, 7, NNN_OFF);
pub const NNN4: Pat = pat(4, 7, NNN_OFF);
pub const NNN5: Pat = pat(5, 7, NNN_OFF);
pub const NNN6: Pat = pat(6, 7, NNN_OFF);
pub const NNN7: Pat = pat(7, 7, NNN_OFF);

pub const RRR0: Pat = pat(0, 7, RRR_OFF);
pub const RRR1: Pat = pat(1, 7, RRR_OFF);
pub const RRR2: Pat = pat(2, 7, RRR_OFF);
pub const RRR3: Pat = pat(3, 7, RRR_OFF);
pub const RRR4: Pat = pat(4, 7, RRR_OFF);
pub const RRR5: Pat = pat(5, 7, RRR_OFF);
pub const RRR6: Pat = pat(6, 7, RRR_OFF);
pub const RRR7: Pat = pat(7, 7, RRR_OFF);

/// One row of an opcode group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Required values of the constrained decode-mask bits, pre-masked.
    pub bits: u32,
    /// Which decode-mask bits this row constrains.
    pub mask: u32,
    pub id: IaOpcode,
    /// Terminal row: the walk stops here and yields `id` unconditionally.
    pub last: bool,
}

impl OpcodeEntry {
    #[must_use]
    pub fn matches(&self, decmask: u32) -> bool {
        (decmask & self.mask) == self.bits
    }
}

const fn entry(pat: Pat, id: IaOpcode, last: bool) -> OpcodeEntry {
    OpcodeEntry {
        bits: pat.bits & pat.mask,
        mask: pat.mask,
        id,
        last,
    }
}

/// Non-terminal row; rejects a LOCK prefix.
pub const fn op(pat: Pat, id: IaOpcode) -> OpcodeEntry {
    entry(pat.and(LOCK_NOT_ALLOWED), id, false)
}

/// Terminal row; rejects a LOCK prefix.
pub const fn last(pat: Pat, id: IaOpcode) -> OpcodeEntry {
    entry(pat.and(LOCK_NOT_ALLOWED), id, true)
}

/// Non-terminal row for a form that may carry LOCK (finalize still requires
/// a memory destination).
pub const fn op_lockable(pat: Pat, id: IaOpcode) -> OpcodeEntry {
    entry(pat, id, false)
}

/// Terminal lockable row.
pub const fn last_lockable(pat: Pat, id: IaOpcode) -> OpcodeEntry {
    entry(pat, id, true)
}

/// An ordered descriptor group; the final row must be terminal.
pub type OpcodeGroup = &'static [OpcodeEntry];

static ERR_ROWS: [OpcodeEntry; 1] = [last(ANY, IaOpcode::Error)];
/// Single-row group every invalid encoding resolves through.
pub static ERR: OpcodeGroup = &ERR_ROWS;

/// Walk `group` against `decmask`.
///
/// Returns the id of the first matching row, or the terminal row's id when
/// the walk reaches it without a match. Groups that need "no match means
/// undefined" end with an unconstrained error row.
#[must_use]
pub fn find_opcode(group: OpcodeGroup, decmask: u32) -> IaOpcode {
    for entry in group {
        if entry.last || entry.matches(decmask) {
            return entry.id;
        }
    }
    IaOpcode::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_row_wins() {
        let group: OpcodeGroup = const {
            &[
                op(SSE_NONE, IaOpcode::Andps_VpsWps),
                last(SSE_66, IaOpcode::Andpd_VpdWpd),
            ]
        };
        let none = (0 << SSE_OFF) | (1 << OS32_OFF);
        let p66 = (1 << SSE_OFF) | (1 << OS32_OFF);
        assert_eq!(find_opcode(group, none), IaOpcode::Andps_VpsWps);
        assert_eq!(find_opcode(group, p66), IaOpcode::Andpd_VpdWpd);
    }

    #[test]
    fn terminal_row_yields_even_without_match() {
        let group: OpcodeGroup = const {
            &[
                op(OS16, IaOpcode::Mov_EwGw),
                last(OS32, IaOpcode::Mov_Op32_EdGd),
            ]
        };
        // A 64-bit osize matches neither constraint; the terminal row still
        // answers so the walk always ends inside the group.
        let os64 = 3 << OS32_OFF;
        assert_eq!(find_opcode(group, os64), IaOpcode::Mov_Op32_EdGd);
    }

    #[test]
    fn explicit_error_terminal_rejects_leftovers() {
        let group: OpcodeGroup = const {
            &[
                op(SSE_NONE, IaOpcode::Punpcklbw_PqQd),
                op(SSE_66, IaOpcode::Punpcklbw_VdqWdq),
                last(ANY, IaOpcode::Error),
            ]
        };
        let f3 = 2 << SSE_OFF;
        assert_eq!(find_opcode(group, f3), IaOpcode::Error);
    }

    #[test]
    fn lock_bit_rejected_unless_lockable() {
        let plain: OpcodeGroup = const { &[last(ANY, IaOpcode::Mov_Op32_GdEd)] };
        let lockable: OpcodeGroup = const { &[last_lockable(ANY, IaOpcode::Add_EdGd)] };
        let locked = 1 << LOCK_OFF;
        assert_eq!(find_opcode(plain, locked), IaOpcode::Mov_Op32_GdEd);
        assert_eq!(find_opcode(lockable, locked), IaOpcode::Add_EdGd);
        // The non-lockable row only fails the *match*; as a terminal it still
        // yields. A non-terminal non-lockable row falls through instead.
        let two_row: OpcodeGroup = const {
            &[
                op(ANY, IaOpcode::Mov_Op32_GdEd),
                last(ANY, IaOpcode::Error),
            ]
        };
        assert_eq!(find_opcode(two_row, locked), IaOpcode::Error);
        assert_eq!(find_opcode(two_row, 0), IaOpcode::Mov_Op32_GdEd);
    }

    #[test]
    fn src_eq_dst_implies_register_form() {
        assert_eq!(SRC_EQ_DST.mask & (1 << MODC0_OFF), 1 << MODC0_OFF);
        assert_eq!(SRC_EQ_DST.bits & (1 << MODC0_OFF), 1 << MODC0_OFF);
    }

    #[test]
    fn size_pair_patterns_cover_both_codes() {
        // "16 or 32" leaves the low size bit free and pins the high bit.
        for code in [0u32, 1] {
            assert_eq!(code << OS32_OFF & OS16_32.mask, OS16_32.bits);
        }
        assert_ne!((3u32 << OS32_OFF) & OS16_32.mask, OS16_32.bits);
        // "32 or 64" pins the low bit.
        for code in [1u32, 3] {
            assert_eq!((code << OS32_OFF) & OS32_64.mask, OS32_64.bits);
        }
        assert_ne!(0 & OS32_64.mask, OS32_64.bits);
    }
}
