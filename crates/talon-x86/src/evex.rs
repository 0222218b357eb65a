//! EVEX-prefix decode, the 62 escape.
//!
//! The three payload bytes plus the opcode arrive as one little-endian
//! dword, so the field extractions below index into that dword rather
//! than into individual bytes. Outside 64-bit mode the byte after 62
//! disambiguates against BOUND the same way C4/C5 disambiguate against
//! LES/LDS.

use talon_types::{vl, OpSize};

use crate::fetch;
use crate::ids::IaOpcode;
use crate::insn::Inst;
use crate::matcher::{
    find_opcode, OpcodeGroup, AS32_OFF, IS64_OFF, MASK_K0_OFF, MODC0_OFF, NNN_OFF, OS32_OFF,
    RRR_OFF, SRC_EQ_DST_OFF, SSE_OFF, VEX_W_OFF, VL_OFF,
};
use crate::modrm::{decode_ea64, parse_modrm32};
use crate::operands::assign_avx;
use crate::reader::Reader;
use crate::tables::TableSet;
use crate::vex::trailing_ib;
use crate::{IllegalEncoding, Truncated};

pub(crate) fn evex32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
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

    // p0, p1, p2 and the opcode byte in one read.
    let evex = rd.u32()?;
    if (evex & 0x0C) != 0 || (evex & 0x400) == 0 {
        inst.fault = Some(IllegalEncoding::EvexReservedBits);
        return Ok(IaOpcode::Error);
    }
    let map = evex & 0x3;
    if map == 0 {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }

    let sse_prefix = (evex >> 8) & 0x3;

    let vvv = (15 - ((evex >> 11) & 0xF)) as u8;
    if vvv >= 8 {
        // vvvv bit 3 must read as zero outside long mode.
        inst.fault = Some(IllegalEncoding::Vvvv);
        return Ok(IaOpcode::Error);
    }
    let vex_w = ((evex >> 15) & 0x1) != 0;

    let opmask = ((evex >> 16) & 0x7) as u8;
    inst.opmask = opmask;
    if ((evex >> 19) & 0x1) == 0 {
        // Same for the v' extension, stored inverted.
        inst.fault = Some(IllegalEncoding::Vvvv);
        return Ok(IaOpcode::Error);
    }
    inst.evex_b = ((evex >> 20) & 0x1) != 0;
    let vl_rc = ((evex >> 21) & 0x3) as u8;
    inst.rc = vl_rc;
    inst.vl = 1 << vl_rc;
    inst.vex_w = vex_w;
    inst.zero_masking = ((evex >> 23) & 0x1) != 0;
    if inst.zero_masking && opmask == 0 {
        inst.fault = Some(IllegalEncoding::ZeroMaskingNoKmask);
        return Ok(IaOpcode::Error);
    }

    let idx = ((evex >> 24) + 256 * (map - 1)) as usize;

    let view = parse_modrm32(rd, inst)?;
    let displ8 = view.mod_bits == 0x40;

    // The broadcast bit on a register form selects rounding control
    // instead, which always operates at full width.
    if inst.modc0 && inst.evex_b {
        inst.vl = vl::VL512;
    }

    let mut decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | ((view.nnn as u32) << NNN_OFF)
        | ((view.rm as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | ((inst.vl - 1) << VL_OFF);
    if inst.modc0 && view.nnn == view.rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }
    if opmask == 0 {
        decmask |= 1 << MASK_K0_OFF;
    }

    let mut ia = find_opcode(tables.evex_group(idx), decmask);

    if trailing_ib(idx) {
        inst.imm = rd.u8()? as u64;
    }

    if let Err(err) = assign_avx(
        inst,
        ia,
        false,
        view.nnn,
        view.rm,
        vvv,
        vex_w,
        view.sib_index,
        true,
        displ8,
    ) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }

    // A rounding-control request above the top length only surfaces here,
    // after the operands are in place so the length is still right.
    if inst.vl > vl::VL512 {
        if inst.fault.is_none() {
            inst.fault = Some(IllegalEncoding::VectorLength);
        }
        ia = IaOpcode::Error;
    }
    Ok(ia)
}

pub(crate) fn evex64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    sse_prefix: u32,
    rex_prefix: u8,
) -> Result<IaOpcode, Truncated> {
    if sse_prefix != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }
    if rex_prefix != 0 {
        inst.fault = Some(IllegalEncoding::RexPrefix);
        return Ok(IaOpcode::Error);
    }

    let evex = rd.u32()?;
    if (evex & 0x0C) != 0 || (evex & 0x400) == 0 {
        inst.fault = Some(IllegalEncoding::EvexReservedBits);
        return Ok(IaOpcode::Error);
    }
    let map = evex & 0x3;
    if map == 0 {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }

    // r and r' stack into one extension for the reg field; x doubles as
    // the fourth b bit for register operands.
    let rex_r = ((((evex >> 4) & 0x8) ^ 0x8) | ((evex & 0x10) ^ 0x10)) as u8;
    let rex_x = (((evex >> 3) & 0x8) ^ 0x8) as u8;
    let rex_b = ((((evex >> 2) & 0x8) ^ 0x8) as u8) | (rex_x << 1);

    let sse_prefix = (evex >> 8) & 0x3;

    let mut vvv = (15 - ((evex >> 11) & 0xF)) as u8;
    vvv |= (((evex >> 15) & 0x10) ^ 0x10) as u8;
    let vex_w = ((evex >> 15) & 0x1) != 0;
    if vex_w {
        inst.osize = OpSize::Bits64;
    }

    let opmask = ((evex >> 16) & 0x7) as u8;
    inst.opmask = opmask;
    inst.evex_b = ((evex >> 20) & 0x1) != 0;
    let vl_rc = ((evex >> 21) & 0x3) as u8;
    inst.rc = vl_rc;
    inst.vl = 1 << vl_rc;
    inst.vex_w = vex_w;
    inst.zero_masking = ((evex >> 23) & 0x1) != 0;
    if inst.zero_masking && opmask == 0 {
        inst.fault = Some(IllegalEncoding::ZeroMaskingNoKmask);
        return Ok(IaOpcode::Error);
    }

    let idx = ((evex >> 24) + 256 * (map - 1)) as usize;

    let b2 = rd.u8()?;
    let mod_bits = b2 & 0xC0;
    let nnn = ((b2 >> 3) & 0x7) | rex_r;
    let rm = (b2 & 0x7) | rex_b;
    let mut sib_index = None;
    let mut displ8 = false;
    if mod_bits != 0xC0 {
        // The effective address only sees four base bits; the x-derived
        // fifth bit numbers registers, never memory.
        sib_index = decode_ea64(rd, inst, mod_bits, rm & 0xF, rex_x)?;
        displ8 = mod_bits == 0x40;
    }

    if inst.modc0 && inst.evex_b {
        inst.vl = vl::VL512;
    }

    let mut decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | (sse_prefix << SSE_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | (((nnn & 0x7) as u32) << NNN_OFF)
        | (((rm & 0x7) as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | ((inst.vl - 1) << VL_OFF);
    if inst.modc0 && nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }
    if opmask == 0 {
        decmask |= 1 << MASK_K0_OFF;
    }

    let mut ia = find_opcode(tables.evex_group(idx), decmask);

    if trailing_ib(idx) {
        inst.imm = rd.u8()? as u64;
    }

    if let Err(err) = assign_avx(inst, ia, true, nnn, rm, vvv, vex_w, sib_index, true, displ8) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }

    if inst.vl > vl::VL512 {
        if inst.fault.is_none() {
            inst.fault = Some(IllegalEncoding::VectorLength);
        }
        ia = IaOpcode::Error;
    }
    Ok(ia)
}
