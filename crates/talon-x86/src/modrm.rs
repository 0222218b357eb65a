//! modrm/sib parsing and effective-address assembly.
//!
//! The three address sizes decode differently enough that each gets its own
//! path: 16-bit addressing picks base and index from fixed register pairs,
//! 32-bit brings in the sib byte, and 64-bit adds rex extensions plus
//! rip-relative addressing. All paths leave the default data segment for
//! the chosen base register in [`Inst::seg`]; prefix overrides are applied
//! after dispatch.

use talon_types::{gpr, AddrSize, SegReg};

use crate::insn::{Inst, MemBase, MemIndex, MemRef};
use crate::reader::Reader;
use crate::Truncated;

/// The fields of a parsed modrm byte, before register numbers are folded
/// into operand slots.
///
/// `mod_bits` stays unshifted (00/40/80/C0). `sib_index` is the raw index
/// field when a sib byte was present, kept separately from the effective
/// address because vsib forms address with it even when it reads 4 ("no
/// index" everywhere else).
#[derive(Debug, Clone, Copy)]
pub struct ModrmView {
    pub modrm: u8,
    pub mod_bits: u8,
    pub nnn: u8,
    pub rm: u8,
    pub sib_index: Option<u8>,
}

/// Parse a modrm byte in 16/32-bit mode and decode its memory form.
pub fn parse_modrm32(rd: &mut Reader<'_>, inst: &mut Inst) -> Result<ModrmView, Truncated> {
    let b2 = rd.u8()?;

    let mut view = ModrmView {
        modrm: b2,
        mod_bits: b2 & 0xc0,
        nnn: (b2 >> 3) & 0x7,
        rm: b2 & 0x7,
        sib_index: None,
    };

    if view.mod_bits == 0xc0 {
        inst.modc0 = true;
    } else {
        view.sib_index = decode_ea32(rd, inst, view.mod_bits, view.rm)?;
    }

    Ok(view)
}

/// Parse a modrm byte in 64-bit mode, folding the rex extensions into the
/// register fields.
pub fn parse_modrm64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    rex: u8,
) -> Result<ModrmView, Truncated> {
    let rex_r = (rex & 0x4) << 1;
    let rex_x = (rex & 0x2) << 2;
    let rex_b = (rex & 0x1) << 3;

    let b2 = rd.u8()?;

    let mut view = ModrmView {
        modrm: b2,
        mod_bits: b2 & 0xc0,
        nnn: ((b2 >> 3) & 0x7) | rex_r,
        rm: (b2 & 0x7) | rex_b,
        sib_index: None,
    };

    if view.mod_bits == 0xc0 {
        inst.modc0 = true;
    } else {
        view.sib_index = decode_ea64(rd, inst, view.mod_bits, view.rm, rex_x)?;
    }

    Ok(view)
}

const BASE16: [u8; 8] = [
    gpr::BX,
    gpr::BX,
    gpr::BP,
    gpr::BP,
    gpr::SI,
    gpr::DI,
    gpr::BP,
    gpr::BX,
];

const INDEX16: [Option<u8>; 8] = [
    Some(gpr::SI),
    Some(gpr::DI),
    Some(gpr::SI),
    Some(gpr::DI),
    None,
    None,
    None,
    None,
];

const SEG_MOD00_RM16: [SegReg; 8] = [
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ss,
    SegReg::Ss,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
];

const SEG_MOD01OR10_RM16: [SegReg; 8] = [
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ss,
    SegReg::Ss,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ss,
    SegReg::Ds,
];

const SEG_MOD0_BASE32: [SegReg; 8] = [
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ss,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
];

const SEG_MOD1OR2_BASE32: [SegReg; 8] = [
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ds,
    SegReg::Ss,
    SegReg::Ss,
    SegReg::Ds,
    SegReg::Ds,
];

fn seg64_mod1or2(base: u8) -> SegReg {
    // Only rsp and rbp pull in the stack segment; r12/r13 stay with ds.
    if base == 4 || base == 5 {
        SegReg::Ss
    } else {
        SegReg::Ds
    }
}

/// Decode a 16/32-bit memory operand. mod=11 is handled by the caller.
/// Returns the raw sib index field when a sib byte was consumed.
pub fn decode_ea32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    mod_bits: u8,
    rm: u8,
) -> Result<Option<u8>, Truncated> {
    inst.modc0 = false;
    inst.mem = MemRef::NONE;

    let mut seg = SegReg::Ds;
    let mut sib_index = None;

    if inst.asize == AddrSize::Bits32 {
        if rm != 4 {
            inst.mem.base = Some(MemBase::Gpr(rm));
            if mod_bits == 0x00 {
                if rm == 5 {
                    inst.mem.base = None;
                    inst.mem.disp = rd.u32()? as i32;
                }
            } else {
                seg = SEG_MOD1OR2_BASE32[rm as usize];
                inst.mem.disp = fetch_disp8_or_32(rd, mod_bits)?;
            }
        } else {
            let sib = rd.u8()?;
            let base = sib & 0x7;
            let index = (sib >> 3) & 0x7;

            inst.mem.scale = 1 << (sib >> 6);
            inst.mem.base = Some(MemBase::Gpr(base));
            sib_index = Some(index);
            if index != 4 {
                inst.mem.index = Some(MemIndex::Gpr(index));
            }

            if mod_bits == 0x00 {
                seg = SEG_MOD0_BASE32[base as usize];
                if base == 5 {
                    inst.mem.base = None;
                    inst.mem.disp = rd.u32()? as i32;
                }
            } else {
                seg = SEG_MOD1OR2_BASE32[base as usize];
                inst.mem.disp = fetch_disp8_or_32(rd, mod_bits)?;
            }
        }
    } else {
        inst.mem.base = Some(MemBase::Gpr(BASE16[rm as usize]));
        inst.mem.index = INDEX16[rm as usize].map(MemIndex::Gpr);

        if mod_bits == 0x00 {
            seg = SEG_MOD00_RM16[rm as usize];
            if rm == 6 {
                inst.mem.base = None;
                inst.mem.disp = rd.u16()? as i16 as i32;
            }
        } else {
            seg = SEG_MOD01OR10_RM16[rm as usize];
            inst.mem.disp = if mod_bits == 0x40 {
                rd.u8()? as i8 as i32
            } else {
                rd.u16()? as i16 as i32
            };
        }
    }

    inst.seg = seg;
    Ok(sib_index)
}

/// Decode a 64-bit memory operand. `rm` carries rex.b in bit 3; `rex_x`
/// arrives pre-shifted to bit 3 for the sib index.
pub fn decode_ea64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    mod_bits: u8,
    rm: u8,
    rex_x: u8,
) -> Result<Option<u8>, Truncated> {
    inst.modc0 = false;
    inst.mem = MemRef::NONE;

    let mut seg = SegReg::Ds;
    let mut sib_index = None;

    if (rm & 0x7) != 4 {
        inst.mem.base = Some(MemBase::Gpr(rm));
        if mod_bits == 0x00 {
            // rex.b does not opt out of rip-relative addressing.
            if (rm & 0x7) == 5 {
                inst.mem.base = Some(MemBase::Rip);
                inst.mem.disp = rd.u32()? as i32;
            }
        } else {
            seg = seg64_mod1or2(rm);
            inst.mem.disp = fetch_disp8_or_32(rd, mod_bits)?;
        }
    } else {
        let sib = rd.u8()?;
        let base = (sib & 0x7) | ((rm) & 0x8);
        let index = ((sib >> 3) & 0x7) | rex_x;

        inst.mem.scale = 1 << (sib >> 6);
        inst.mem.base = Some(MemBase::Gpr(base));
        sib_index = Some(index);
        if index != 4 {
            inst.mem.index = Some(MemIndex::Gpr(index));
        }

        if mod_bits == 0x00 {
            if base == 4 {
                seg = SegReg::Ss;
            }
            if (base & 0x7) == 5 {
                inst.mem.base = None;
                inst.mem.disp = rd.u32()? as i32;
            }
        } else {
            seg = seg64_mod1or2(base);
            inst.mem.disp = fetch_disp8_or_32(rd, mod_bits)?;
        }
    }

    inst.seg = seg;
    Ok(sib_index)
}

fn fetch_disp8_or_32(rd: &mut Reader<'_>, mod_bits: u8) -> Result<i32, Truncated> {
    if mod_bits == 0x40 {
        Ok(rd.u8()? as i8 as i32)
    } else {
        Ok(rd.u32()? as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_types::Mode;

    fn inst32() -> Inst {
        let mut inst = Inst::new(Mode::Bits32);
        inst.asize = AddrSize::Bits32;
        inst
    }

    #[test]
    fn register_form_skips_the_ea() {
        let mut rd = Reader::new(&[0xC3]);
        let mut inst = inst32();
        let view = parse_modrm32(&mut rd, &mut inst).unwrap();
        assert!(inst.modc0);
        assert_eq!(view.nnn, 0);
        assert_eq!(view.rm, 3);
        assert_eq!(inst.mem, MemRef::NONE);
    }

    #[test]
    fn disp32_without_base() {
        let mut rd = Reader::new(&[0x05, 0x78, 0x56, 0x34, 0x12]);
        let mut inst = inst32();
        parse_modrm32(&mut rd, &mut inst).unwrap();
        assert!(!inst.modc0);
        assert_eq!(inst.mem.base, None);
        assert_eq!(inst.mem.disp, 0x1234_5678);
        assert_eq!(inst.seg, SegReg::Ds);
    }

    #[test]
    fn sib_with_esp_base_defaults_to_ss() {
        // [esp+8]
        let mut rd = Reader::new(&[0x44, 0x24, 0x08]);
        let mut inst = inst32();
        let view = parse_modrm32(&mut rd, &mut inst).unwrap();
        assert_eq!(inst.mem.base, Some(MemBase::Gpr(4)));
        assert_eq!(inst.mem.index, None);
        assert_eq!(view.sib_index, Some(4));
        assert_eq!(inst.mem.disp, 8);
        assert_eq!(inst.seg, SegReg::Ss);
    }

    #[test]
    fn sib_scaled_index_without_base() {
        // [ecx*4+disp32]
        let mut rd = Reader::new(&[0x04, 0x8D, 0, 0, 0, 0x80]);
        let mut inst = inst32();
        parse_modrm32(&mut rd, &mut inst).unwrap();
        assert_eq!(inst.mem.base, None);
        assert_eq!(inst.mem.index, Some(MemIndex::Gpr(1)));
        assert_eq!(inst.mem.scale, 4);
        assert_eq!(inst.mem.disp, -0x8000_0000);
    }

    #[test]
    fn sixteen_bit_pairs_and_segments() {
        // [bp+si] picks ss even without a displacement
        let mut rd = Reader::new(&[0x02]);
        let mut inst = inst32();
        inst.asize = AddrSize::Bits16;
        parse_modrm32(&mut rd, &mut inst).unwrap();
        assert_eq!(inst.mem.base, Some(MemBase::Gpr(gpr::BP)));
        assert_eq!(inst.mem.index, Some(MemIndex::Gpr(gpr::SI)));
        assert_eq!(inst.seg, SegReg::Ss);

        // [disp16]
        let mut rd = Reader::new(&[0x06, 0x00, 0x80]);
        let mut inst = inst32();
        inst.asize = AddrSize::Bits16;
        parse_modrm32(&mut rd, &mut inst).unwrap();
        assert_eq!(inst.mem.base, None);
        assert_eq!(inst.mem.disp, -0x8000);
        assert_eq!(inst.seg, SegReg::Ds);
    }

    #[test]
    fn rip_relative_ignores_rex_b() {
        let mut inst = Inst::new(Mode::Bits64);
        inst.asize = AddrSize::Bits64;
        let mut rd = Reader::new(&[0x05, 0x10, 0x00, 0x00, 0x00]);
        let view = parse_modrm64(&mut rd, &mut inst, 0x41).unwrap();
        assert_eq!(view.rm, 13);
        assert_eq!(inst.mem.base, Some(MemBase::Rip));
        assert_eq!(inst.mem.disp, 0x10);
    }

    #[test]
    fn rex_x_turns_index_four_into_r12() {
        let mut inst = Inst::new(Mode::Bits64);
        inst.asize = AddrSize::Bits64;
        // sib base=rax index=(4|rex.x)=r12 scale=2
        let mut rd = Reader::new(&[0x04, 0x60]);
        let view = parse_modrm64(&mut rd, &mut inst, 0x42).unwrap();
        assert_eq!(inst.mem.index, Some(MemIndex::Gpr(12)));
        assert_eq!(view.sib_index, Some(12));
        assert_eq!(inst.mem.scale, 2);
    }

    #[test]
    fn sib_base_r13_mod0_still_drops_the_base() {
        let mut inst = Inst::new(Mode::Bits64);
        inst.asize = AddrSize::Bits64;
        // rex.b, sib base=5 -> disp32 with no base even though r13 is named
        let mut rd = Reader::new(&[0x04, 0x0D, 0x44, 0x33, 0x22, 0x11]);
        parse_modrm64(&mut rd, &mut inst, 0x41).unwrap();
        assert_eq!(inst.mem.base, None);
        assert_eq!(inst.mem.index, Some(MemIndex::Gpr(1)));
        assert_eq!(inst.mem.disp, 0x1122_3344);
    }

    #[test]
    fn truncated_displacement_reports_cleanly() {
        let mut rd = Reader::new(&[0x80, 0x01]);
        let mut inst = inst32();
        assert!(parse_modrm32(&mut rd, &mut inst).is_err());
    }
}
