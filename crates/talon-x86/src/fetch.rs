//! The fetch loop: prefix scan, opcode dispatch and finalize.
//!
//! One pass per instruction. The loop eats legacy prefixes while they
//! keep arriving, folds 0F/0F38/0F3A escapes into a flat 0..0x400 opcode
//! index, then hands off to the strategy recorded in the dispatch map for
//! that index. Finalize stamps the length, applies the surviving segment
//! override and enforces the LOCK rule; it is the single place the error
//! sentinel picks up a generic cause when no earlier step recorded one.

use talon_types::{AddrSize, CpuFeatures, Mode, OpSize, SegReg, MAX_INSN_LEN};

use crate::ids::IaOpcode;
use crate::imm::fetch_immediate;
use crate::insn::{Inst, Rep, SrcReg};
use crate::matcher::{
    find_opcode, OpcodeGroup, AS32_OFF, IS64_OFF, MODC0_OFF, NNN_OFF, OS32_OFF, RRR_OFF,
    SRC_EQ_DST_OFF, SSE_OFF,
};
use crate::modrm::{parse_modrm32, parse_modrm64};
use crate::operands::assign_legacy;
use crate::reader::Reader;
use crate::tables::{DecodeEntry, TableSet, X87Table, TDNOW};
use crate::{evex, vex, xop, IllegalEncoding, Truncated};

impl TableSet {
    /// Decode one instruction from the start of `bytes`.
    ///
    /// The window is clamped to [`MAX_INSN_LEN`] bytes first, so a
    /// [`Truncated`] result with at least that many bytes supplied means
    /// the instruction overruns the architectural length limit rather
    /// than the buffer.
    pub fn decode(&self, mode: Mode, bytes: &[u8]) -> Result<Inst, Truncated> {
        let limit = bytes.len().min(MAX_INSN_LEN);
        let mut rd = Reader::new(&bytes[..limit]);
        let mut inst = Inst::new(mode);
        match mode {
            Mode::Bits64 => fetch64(&mut rd, &mut inst, self)?,
            Mode::Bits16 | Mode::Bits32 => fetch32(&mut rd, &mut inst, self)?,
        }
        Ok(inst)
    }
}

fn fetch32(rd: &mut Reader<'_>, inst: &mut Inst, tables: &TableSet) -> Result<(), Truncated> {
    let is_32 = inst.mode != Mode::Bits16;
    let mut os_32 = is_32;
    let mut as_32 = is_32;
    let mut sse_prefix = 0u32;
    let mut seg_override: Option<SegReg> = None;
    let mut cet_ds_hint = false;
    let mut lock = false;

    let mut b1;
    loop {
        b1 = rd.u8()? as u32;
        // The no-track hint latches even though 3E also reparses below as
        // a plain ds override.
        if b1 == 0x3E {
            cet_ds_hint = true;
        }
        match b1 {
            0x0F => {
                b1 = 0x100 | rd.u8()? as u32;
                break;
            }
            0x66 => {
                os_32 = !is_32;
                if sse_prefix == 0 {
                    sse_prefix = 1;
                }
            }
            0x67 => as_32 = !is_32,
            0xF2 | 0xF3 => {
                sse_prefix = (b1 & 0x3) ^ 1;
                inst.rep = if b1 == 0xF3 { Rep::Repe } else { Rep::Repne };
            }
            0x26 | 0x2E | 0x36 | 0x3E => {
                seg_override = SegReg::from_index(((b1 >> 3) & 0x3) as u8);
            }
            0x64 | 0x65 => {
                seg_override = SegReg::from_index((b1 & 0xF) as u8);
            }
            0xF0 => lock = true,
            _ => break,
        }
    }

    if b1 == 0x138 || b1 == 0x13A {
        b1 = if b1 == 0x138 { 0x200 } else { 0x300 } | rd.u8()? as u32;
    }

    inst.osize = if os_32 { OpSize::Bits32 } else { OpSize::Bits16 };
    inst.asize = if as_32 {
        AddrSize::Bits32
    } else {
        AddrSize::Bits16
    };
    inst.notrack = cet_ds_hint;

    let ia = dispatch32(rd, inst, tables, b1, sse_prefix)?;

    finalize(inst, tables, rd.consumed(), ia, seg_override, lock);
    Ok(())
}

fn fetch64(rd: &mut Reader<'_>, inst: &mut Inst, tables: &TableSet) -> Result<(), Truncated> {
    let mut os_32 = true;
    let mut os_64 = false;
    let mut as_64 = true;
    let mut sse_prefix = 0u32;
    let mut seg_override: Option<SegReg> = None;
    let mut cet_ds_hint = false;
    let mut lock = false;
    let mut rex_prefix = 0u8;

    let mut b1;
    loop {
        b1 = rd.u8()? as u32;
        if b1 == 0x3E {
            cet_ds_hint = true;
        }
        match b1 {
            0x0F => {
                // The escape keeps an immediately preceding rex alive.
                b1 = 0x100 | rd.u8()? as u32;
                break;
            }
            0x40..=0x4F => rex_prefix = b1 as u8,
            0x66 => {
                rex_prefix = 0;
                os_32 = false;
                if sse_prefix == 0 {
                    sse_prefix = 1;
                }
            }
            0x67 => {
                rex_prefix = 0;
                as_64 = false;
            }
            0xF2 | 0xF3 => {
                rex_prefix = 0;
                sse_prefix = (b1 & 0x3) ^ 1;
                inst.rep = if b1 == 0xF3 { Rep::Repe } else { Rep::Repne };
            }
            0x26 | 0x2E | 0x36 | 0x3E => {
                // cs/ds/es/ss overrides decode here but mean nothing.
                rex_prefix = 0;
            }
            0x64 | 0x65 => {
                rex_prefix = 0;
                seg_override = SegReg::from_index((b1 & 0xF) as u8);
            }
            0xF0 => {
                rex_prefix = 0;
                lock = true;
            }
            _ => break,
        }
    }

    if b1 == 0x138 || b1 == 0x13A {
        b1 = if b1 == 0x138 { 0x200 } else { 0x300 } | rd.u8()? as u32;
    }

    if rex_prefix != 0 {
        inst.rex = true;
        if rex_prefix & 0x8 != 0 {
            os_64 = true;
        }
    }
    inst.osize = if os_64 {
        OpSize::Bits64
    } else if os_32 {
        OpSize::Bits32
    } else {
        OpSize::Bits16
    };
    inst.asize = if as_64 {
        AddrSize::Bits64
    } else {
        AddrSize::Bits32
    };
    inst.notrack = cet_ds_hint;

    let ia = dispatch64(rd, inst, tables, b1, sse_prefix, rex_prefix)?;

    finalize(inst, tables, rd.consumed(), ia, seg_override, lock);
    Ok(())
}

fn dispatch32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    b1: u32,
    sse_prefix: u32,
) -> Result<IaOpcode, Truncated> {
    match tables.entry32(b1 as usize) {
        DecodeEntry::Invalid => Ok(IaOpcode::Error),
        DecodeEntry::Simple(group) => Ok(group[0].id),
        DecodeEntry::Plain(group) => plain32(rd, inst, b1, sse_prefix, group),
        DecodeEntry::Modrm(group) => modrm32(rd, inst, sse_prefix, group),
        DecodeEntry::MovCrDr(group) => creg32(rd, inst, sse_prefix, group),
        DecodeEntry::FpEscape(table) => fp_escape32(rd, inst, b1, table),
        DecodeEntry::ThreeDNow => tdnow32(rd, inst),
        DecodeEntry::NopPause(_) => Ok(if sse_prefix == 2 {
            IaOpcode::Pause
        } else {
            IaOpcode::Nop
        }),
        DecodeEntry::Vex(fallback) => vex::vex32(rd, inst, tables, b1, sse_prefix, fallback),
        DecodeEntry::Evex(fallback) => evex::evex32(rd, inst, tables, sse_prefix, fallback),
        DecodeEntry::Xop(fallback) => xop::xop32(rd, inst, tables, sse_prefix, fallback),
    }
}

fn dispatch64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    b1: u32,
    sse_prefix: u32,
    rex_prefix: u8,
) -> Result<IaOpcode, Truncated> {
    match tables.entry64(b1 as usize) {
        DecodeEntry::Invalid => Ok(IaOpcode::Error),
        DecodeEntry::Simple(group) => Ok(group[0].id),
        DecodeEntry::Plain(group) => plain64(rd, inst, b1, sse_prefix, rex_prefix, group),
        DecodeEntry::Modrm(group) => modrm64(rd, inst, sse_prefix, rex_prefix, group),
        DecodeEntry::MovCrDr(group) => creg64(rd, inst, sse_prefix, rex_prefix, group),
        DecodeEntry::FpEscape(table) => fp_escape64(rd, inst, b1, rex_prefix, table),
        DecodeEntry::ThreeDNow => tdnow64(rd, inst, rex_prefix),
        DecodeEntry::NopPause(group) => {
            if rex_prefix & 0x1 != 0 {
                // rex.b reaches past the nop identity: 41 90 really is
                // xchg r8d, eax.
                plain64(rd, inst, b1, sse_prefix, rex_prefix, group)
            } else if sse_prefix == 2 {
                Ok(IaOpcode::Pause)
            } else {
                Ok(IaOpcode::Nop)
            }
        }
        DecodeEntry::Vex(_) => vex::vex64(rd, inst, tables, b1, sse_prefix, rex_prefix),
        DecodeEntry::Evex(_) => evex::evex64(rd, inst, tables, sse_prefix, rex_prefix),
        DecodeEntry::Xop(fallback) => {
            xop::xop64(rd, inst, tables, sse_prefix, rex_prefix, fallback)
        }
    }
}

fn plain32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    b1: u32,
    sse_prefix: u32,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let nnn = ((b1 >> 3) & 0x7) as u8;
    let rm = (b1 & 0x7) as u8;

    // No modrm byte, so the register fields never reach the decode mask;
    // forms here select on sizes and prefixes only.
    let mut decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | (1 << MODC0_OFF);
    if nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let ia = find_opcode(group, decmask);
    fetch_immediate(rd, inst, ia, false)?;
    assign_legacy(inst, ia, nnn, rm);
    Ok(ia)
}

fn plain64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    b1: u32,
    sse_prefix: u32,
    rex_prefix: u8,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let rex_b = (rex_prefix & 0x1) << 3;
    let nnn = ((b1 >> 3) & 0x7) as u8;
    let rm = (b1 & 0x7) as u8 | rex_b;

    let mut decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | (1 << MODC0_OFF)
        | ((nnn as u32) << NNN_OFF)
        | (((rm & 0x7) as u32) << RRR_OFF);
    if nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let ia = find_opcode(group, decmask);
    fetch_immediate(rd, inst, ia, true)?;
    assign_legacy(inst, ia, nnn, rm);
    Ok(ia)
}

pub(crate) fn modrm32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    sse_prefix: u32,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm32(rd, inst)?;

    let mut decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | ((view.nnn as u32) << NNN_OFF)
        | ((view.rm as u32) << RRR_OFF);
    if inst.modc0 && view.nnn == view.rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let ia = find_opcode(group, decmask);
    fetch_immediate(rd, inst, ia, false)?;
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

pub(crate) fn modrm64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    sse_prefix: u32,
    rex_prefix: u8,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm64(rd, inst, rex_prefix)?;

    let mut decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | (((view.nnn & 0x7) as u32) << NNN_OFF)
        | (((view.rm & 0x7) as u32) << RRR_OFF);
    if inst.modc0 && view.nnn == view.rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let ia = find_opcode(group, decmask);
    fetch_immediate(rd, inst, ia, true)?;
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

fn creg32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    sse_prefix: u32,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let b2 = rd.u8()?;
    // mod bits are ignored; the operand is a register whatever they say.
    let nnn = (b2 >> 3) & 0x7;
    let rm = b2 & 0x7;

    let decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | (1 << MODC0_OFF)
        | ((nnn as u32) << NNN_OFF)
        | ((rm as u32) << RRR_OFF);

    let ia = find_opcode(group, decmask);
    assign_legacy(inst, ia, nnn, rm);
    Ok(ia)
}

fn creg64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    sse_prefix: u32,
    rex_prefix: u8,
    group: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    let rex_r = (rex_prefix & 0x4) << 1;
    let rex_b = (rex_prefix & 0x1) << 3;

    let b2 = rd.u8()?;
    let nnn = ((b2 >> 3) & 0x7) | rex_r;
    let rm = (b2 & 0x7) | rex_b;

    // rex.r reaches cr8; the masked field still matches the cr0 row and
    // the full register number flows into the operand below.
    let decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | (1 << MODC0_OFF)
        | (((nnn & 0x7) as u32) << NNN_OFF)
        | (((rm & 0x7) as u32) << RRR_OFF);

    let ia = find_opcode(group, decmask);
    assign_legacy(inst, ia, nnn, rm);
    Ok(ia)
}

fn fp_escape32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    b1: u32,
    table: &X87Table,
) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm32(rd, inst)?;
    inst.x87_word = (((b1 as u16) << 8) | view.modrm as u16) & 0x7FF;

    let ia = if inst.modc0 {
        table[(view.modrm & 0x3F) as usize + 8]
    } else {
        table[view.nnn as usize]
    };
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

fn fp_escape64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    b1: u32,
    rex_prefix: u8,
    table: &X87Table,
) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm64(rd, inst, rex_prefix)?;
    inst.x87_word = (((b1 as u16) << 8) | view.modrm as u16) & 0x7FF;

    let ia = if inst.modc0 {
        table[(view.modrm & 0x3F) as usize + 8]
    } else {
        table[(view.nnn & 0x7) as usize]
    };
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

fn tdnow32(rd: &mut Reader<'_>, inst: &mut Inst) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm32(rd, inst)?;
    // The opcode byte trails the operands; it rides in the immediate slot.
    inst.imm = rd.u8()? as u64;
    let ia = TDNOW[inst.imm as usize];
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

fn tdnow64(rd: &mut Reader<'_>, inst: &mut Inst, rex_prefix: u8) -> Result<IaOpcode, Truncated> {
    let view = parse_modrm64(rd, inst, rex_prefix)?;
    inst.imm = rd.u8()? as u64;
    let ia = TDNOW[inst.imm as usize];
    assign_legacy(inst, ia, view.nnn, view.rm);
    Ok(ia)
}

fn finalize(
    inst: &mut Inst,
    tables: &TableSet,
    consumed: usize,
    ia: IaOpcode,
    seg_override: Option<SegReg>,
    lock: bool,
) {
    let mut id = ia;
    inst.len = consumed as u8;

    inst.seg_override = seg_override;
    if let Some(seg) = seg_override {
        // In long mode only fs and gs still move the base; the others
        // decode but are ignored.
        if !inst.mode.is_long() || seg == SegReg::Fs || seg == SegReg::Gs {
            inst.seg = seg;
        }
    }

    if lock {
        inst.lock = true;
        let alt_cr8 = tables.features().contains(CpuFeatures::ALT_MOV_CR8);
        if inst.modc0 || !id.lockable() {
            match id {
                // F0 0F 22 /0 is the pre-APIC spelling of a cr8 access.
                IaOpcode::Mov_CR0Rd | IaOpcode::Mov_CR0Rq if alt_cr8 => {
                    inst.srcs[0] = SrcReg::Reg(8);
                }
                IaOpcode::Mov_RdCR0 | IaOpcode::Mov_RqCR0 if alt_cr8 => {
                    inst.srcs[1] = SrcReg::Reg(8);
                }
                _ => {
                    if id != IaOpcode::Error {
                        inst.fault = Some(IllegalEncoding::LockPrefix);
                    }
                    id = IaOpcode::Error;
                }
            }
        }
    }

    if id == IaOpcode::Error && inst.fault.is_none() {
        inst.fault = Some(IllegalEncoding::Opcode);
    }
    inst.id = id;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> TableSet {
        TableSet::new(CpuFeatures::all())
    }

    fn decode32(bytes: &[u8]) -> Inst {
        tables().decode(Mode::Bits32, bytes).unwrap()
    }

    fn decode64(bytes: &[u8]) -> Inst {
        tables().decode(Mode::Bits64, bytes).unwrap()
    }

    #[test]
    fn bare_nop() {
        let inst = decode32(&[0x90]);
        assert_eq!(inst.id, IaOpcode::Nop);
        assert_eq!(inst.len, 1);

        let inst = decode64(&[0x90]);
        assert_eq!(inst.id, IaOpcode::Nop);
    }

    #[test]
    fn rep_turns_nop_into_pause() {
        let inst = decode32(&[0xF3, 0x90]);
        assert_eq!(inst.id, IaOpcode::Pause);
        assert_eq!(inst.len, 2);
        assert_eq!(inst.rep, Rep::Repe);

        // f2 is not the pause spelling
        let inst = decode64(&[0xF2, 0x90]);
        assert_eq!(inst.id, IaOpcode::Nop);
    }

    #[test]
    fn rex_b_reaches_past_the_nop_identity() {
        let inst = decode64(&[0x41, 0x90]);
        assert_eq!(inst.id, IaOpcode::Xchg_ERXEAX);
        assert_eq!(inst.srcs[0], SrcReg::Reg(8));
        assert_eq!(inst.len, 2);

        // rex.w alone keeps it a nop
        let inst = decode64(&[0x48, 0x90]);
        assert_eq!(inst.id, IaOpcode::Nop);
    }

    #[test]
    fn operand_size_prefix_flips_both_ways() {
        let inst = decode32(&[0x66, 0x01, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Add_EwGw);
        assert_eq!(inst.osize, OpSize::Bits16);

        let t = tables();
        let inst = t.decode(Mode::Bits16, &[0x66, 0x01, 0xC0]).unwrap();
        assert_eq!(inst.id, IaOpcode::Add_EdGd);
        assert_eq!(inst.osize, OpSize::Bits32);
    }

    #[test]
    fn rex_w_promotes_operand_size() {
        let inst = decode64(&[0x48, 0x01, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Add_EqGq);
        assert_eq!(inst.len, 3);
        assert!(inst.rex);
    }

    #[test]
    fn prefix_after_rex_cancels_it() {
        let inst = decode64(&[0x40, 0x66, 0x01, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Add_EwGw);
        assert!(!inst.rex);

        // the other order keeps rex.w alive and it outranks 66
        let inst = decode64(&[0x66, 0x48, 0x01, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Add_EqGq);
        assert!(inst.rex);
    }

    #[test]
    fn lock_requires_a_lockable_memory_form() {
        let inst = decode32(&[0xF0, 0x90]);
        assert_eq!(inst.id, IaOpcode::Error);
        assert_eq!(inst.fault, Some(IllegalEncoding::LockPrefix));
        assert_eq!(inst.len, 2);

        let inst = decode32(&[0xF0, 0x01, 0x00]);
        assert_eq!(inst.id, IaOpcode::Add_EdGd);
        assert!(inst.lock);
        assert_eq!(inst.fault, None);

        // register destination rejects even a lockable opcode
        let inst = decode32(&[0xF0, 0x01, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Error);
        assert_eq!(inst.fault, Some(IllegalEncoding::LockPrefix));
    }

    #[test]
    fn locked_cr0_access_becomes_cr8() {
        let inst = decode64(&[0xF0, 0x0F, 0x22, 0xC0]);
        assert_eq!(inst.id, IaOpcode::Mov_CR0Rq);
        assert_eq!(inst.srcs[0], SrcReg::Reg(8));
        assert_eq!(inst.srcs[1], SrcReg::Reg(0));
        assert!(inst.lock);
        assert_eq!(inst.fault, None);

        // the read direction patches the other slot
        let inst = decode32(&[0xF0, 0x0F, 0x20, 0xD9]);
        assert_eq!(inst.id, IaOpcode::Error);
        let inst = decode32(&[0xF0, 0x0F, 0x20, 0xC1]);
        assert_eq!(inst.id, IaOpcode::Mov_RdCR0);
        assert_eq!(inst.srcs[0], SrcReg::Reg(1));
        assert_eq!(inst.srcs[1], SrcReg::Reg(8));

        // without the alternate-cr8 feature the lock stays illegal
        let plain = TableSet::new(CpuFeatures::empty());
        let inst = plain.decode(Mode::Bits64, &[0xF0, 0x0F, 0x22, 0xC0]).unwrap();
        assert_eq!(inst.id, IaOpcode::Error);
        assert_eq!(inst.fault, Some(IllegalEncoding::LockPrefix));
        assert_eq!(inst.len, 4);
    }

    #[test]
    fn segment_overrides_apply_by_mode() {
        let inst = decode32(&[0x65, 0x8B, 0x00]);
        assert_eq!(inst.id, IaOpcode::Mov_Op32_GdEd);
        assert_eq!(inst.seg, SegReg::Gs);
        assert_eq!(inst.seg_override, Some(SegReg::Gs));

        let inst = decode64(&[0x65, 0x8B, 0x00]);
        assert_eq!(inst.id, IaOpcode::Mov_Op64_GdEd);
        assert_eq!(inst.seg, SegReg::Gs);

        // cs/ds/es/ss overrides do not even record in long mode
        let inst = decode64(&[0x2E, 0x8B, 0x00]);
        assert_eq!(inst.seg, SegReg::Ds);
        assert_eq!(inst.seg_override, None);
        assert_eq!(inst.len, 3);
    }

    #[test]
    fn ds_override_latches_the_notrack_hint() {
        let inst = decode32(&[0x3E, 0x8B, 0x00]);
        assert!(inst.notrack);
        assert_eq!(inst.seg_override, Some(SegReg::Ds));

        let inst = decode32(&[0x8B, 0x00]);
        assert!(!inst.notrack);
    }

    #[test]
    fn three_byte_escape_reaches_the_38_map() {
        let inst = decode32(&[0x0F, 0x38, 0x00, 0xC1]);
        assert_eq!(inst.id, IaOpcode::Pshufb_PqQq);
        assert_eq!(inst.len, 4);

        let inst = decode32(&[0x66, 0x0F, 0x38, 0x00, 0xC1]);
        assert_eq!(inst.id, IaOpcode::Pshufb_VdqWdq);
    }

    #[test]
    fn truncation_at_every_stage() {
        let t = tables();
        assert_eq!(t.decode(Mode::Bits32, &[]), Err(Truncated));
        assert_eq!(t.decode(Mode::Bits32, &[0x66]), Err(Truncated));
        assert_eq!(t.decode(Mode::Bits32, &[0x01]), Err(Truncated));
        assert_eq!(t.decode(Mode::Bits32, &[0x0F]), Err(Truncated));
        assert_eq!(t.decode(Mode::Bits32, &[0x0F, 0x38]), Err(Truncated));
    }

    #[test]
    fn window_clamps_at_fifteen_bytes() {
        let mut bytes = [0x66u8; 16];
        bytes[15] = 0x90;
        assert_eq!(tables().decode(Mode::Bits32, &bytes), Err(Truncated));

        // one prefix fewer and the opcode fits exactly
        let mut bytes = [0x66u8; 15];
        bytes[14] = 0x90;
        let inst = decode32(&bytes);
        assert_eq!(inst.id, IaOpcode::Nop);
        assert_eq!(inst.len, 15);
    }

    #[test]
    fn unknown_opcode_reports_a_generic_cause() {
        // 0F 04 has never been assigned
        let inst = decode32(&[0x0F, 0x04]);
        assert_eq!(inst.id, IaOpcode::Error);
        assert_eq!(inst.fault, Some(IllegalEncoding::Opcode));
        assert_eq!(inst.len, 2);
    }
}
