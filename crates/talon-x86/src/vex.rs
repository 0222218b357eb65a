//! VEX-prefix decode, the C4/C5 escapes.
//!
//! The two-byte form (C5) carries only vvvv/L/pp over an implied 0F map;
//! the three-byte form (C4) adds the map selector, W and the inverted X/B
//! extensions. Outside 64-bit mode the escape byte doubles as LES/LDS when
//! the byte after it has mod != 11, so the caller's legacy group rides
//! along as a fallback.

use talon_types::{vl, OpSize};

use crate::fetch;
use crate::ids::IaOpcode;
use crate::insn::Inst;
use crate::matcher::{
    find_opcode, OpcodeGroup, AS32_OFF, IS64_OFF, MODC0_OFF, NNN_OFF, OS32_OFF, RRR_OFF,
    SRC_EQ_DST_OFF, SSE_OFF, VEX_W_OFF, VL_OFF,
};
use crate::modrm::{decode_ea64, parse_modrm32};
use crate::operands::assign_avx;
use crate::reader::Reader;
use crate::tables::TableSet;
use crate::{IllegalEncoding, Truncated};

/// Map-relative indexes that carry a trailing immediate byte: the shift
/// and compare/insert slots of map 1, and the whole of map 3. Driven by
/// the index rather than the matched id so the instruction length comes
/// out right even when no row matched.
pub(crate) fn trailing_ib(idx: usize) -> bool {
    (0x70..=0x73).contains(&idx) || (0xC2..=0xC6).contains(&idx) || idx >= 0x200
}

pub(crate) fn vex32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    b1: u32,
    sse_prefix: u32,
    fallback: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    if (rd.peek()? & 0xC0) != 0xC0 {
        return fetch::modrm32(rd, inst, sse_prefix, fallback);
    }

    if sse_prefix != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }

    let mut vex = rd.u8()?;
    let mut vex_w = false;
    let mut opcext = 1u32;
    if b1 == 0xC4 {
        opcext = (vex & 0x1F) as u32;
        vex = rd.u8()?;
        vex_w = (vex & 0x80) != 0;
    }

    let vvv = 15 - ((vex >> 3) & 0xF);
    let vex_l = ((vex >> 2) & 0x1) as u32;
    inst.vl = vl::VL128 + vex_l;
    inst.vex_w = vex_w;
    let sse_prefix = (vex & 0x3) as u32;

    let opcode = rd.u8()? as u32 + 256 * opcext;
    if !(0x100..0x400).contains(&opcode) {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }
    let has_modrm = opcode != 0x177; // vzeroupper/vzeroall take none
    let idx = (opcode - 0x100) as usize;

    let (nnn, rm, sib_index) = if has_modrm {
        let view = parse_modrm32(rd, inst)?;
        (view.nnn, view.rm, view.sib_index)
    } else {
        (((b1 >> 3) & 0x7) as u8, (b1 & 0x7) as u8, None)
    };

    let mut decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | ((nnn as u32) << NNN_OFF)
        | ((rm as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | (vex_l << VL_OFF);
    if inst.modc0 && nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let mut ia = find_opcode(tables.vex_group(idx), decmask);

    if trailing_ib(idx) {
        inst.imm = rd.u8()? as u64;
    }

    if let Err(err) = assign_avx(inst, ia, false, nnn, rm, vvv, vex_w, sib_index, false, false) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }
    Ok(ia)
}

pub(crate) fn vex64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    b1: u32,
    sse_prefix: u32,
    rex_prefix: u8,
) -> Result<IaOpcode, Truncated> {
    // In long mode C4/C5 are unconditionally VEX; only earlier prefix
    // state can disqualify them.
    if sse_prefix != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }
    if rex_prefix != 0 {
        inst.fault = Some(IllegalEncoding::RexPrefix);
        return Ok(IaOpcode::Error);
    }

    let mut vex = rd.u8()?;
    let rex_r = ((vex >> 4) & 0x8) ^ 0x8;
    let mut rex_x = 0u8;
    let mut rex_b = 0u8;
    let mut vex_w = false;
    let mut opcext = 1u32;
    if b1 == 0xC4 {
        rex_x = ((vex >> 3) & 0x8) ^ 0x8;
        rex_b = ((vex >> 2) & 0x8) ^ 0x8;
        opcext = (vex & 0x1F) as u32;
        vex = rd.u8()?;
        if (vex & 0x80) != 0 {
            vex_w = true;
            inst.osize = OpSize::Bits64;
        }
    }

    let vvv = 15 - ((vex >> 3) & 0xF);
    let vex_l = ((vex >> 2) & 0x1) as u32;
    inst.vl = vl::VL128 + vex_l;
    inst.vex_w = vex_w;
    let sse_prefix = (vex & 0x3) as u32;

    let opcode = rd.u8()? as u32 + 256 * opcext;
    if !(0x100..0x400).contains(&opcode) {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }
    let has_modrm = opcode != 0x177;
    let idx = (opcode - 0x100) as usize;

    let mut sib_index = None;
    let (nnn, rm);
    if has_modrm {
        let b2 = rd.u8()?;
        let mod_bits = b2 & 0xC0;
        nnn = ((b2 >> 3) & 0x7) | rex_r;
        rm = (b2 & 0x7) | rex_b;
        if mod_bits != 0xC0 {
            sib_index = decode_ea64(rd, inst, mod_bits, rm, rex_x)?;
        }
    } else {
        nnn = ((b1 >> 3) & 0x7) as u8;
        rm = (b1 & 0x7) as u8 | rex_b;
    }

    let mut decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | (((nnn & 0x7) as u32) << NNN_OFF)
        | (((rm & 0x7) as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | (vex_l << VL_OFF);
    if inst.modc0 && nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let mut ia = find_opcode(tables.vex_group(idx), decmask);

    if trailing_ib(idx) {
        inst.imm = rd.u8()? as u64;
    }

    if let Err(err) = assign_avx(inst, ia, true, nnn, rm, vvv, vex_w, sib_index, false, false) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }
    Ok(ia)
}
