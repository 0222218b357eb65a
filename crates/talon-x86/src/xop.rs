//! XOP-prefix decode, the AMD 8F escape.
//!
//! Shaped like three-byte VEX with two differences: the map selector
//! starts at 8 and the pp field must read zero, the tables pick forms
//! without legacy-prefix namespaces. A selector below 8 means the byte
//! sequence is POP Ev after all, which is why the low bits of the second
//! byte take part in the prefix check.

use talon_types::{vl, OpSize};

use crate::fetch;
use crate::ids::IaOpcode;
use crate::imm::fetch_immediate;
use crate::insn::Inst;
use crate::matcher::{
    find_opcode, OpcodeGroup, AS32_OFF, IS64_OFF, MODC0_OFF, NNN_OFF, OS32_OFF, RRR_OFF,
    SRC_EQ_DST_OFF, VEX_W_OFF, VL_OFF,
};
use crate::modrm::{decode_ea64, parse_modrm32};
use crate::operands::assign_avx;
use crate::reader::Reader;
use crate::tables::TableSet;
use crate::{IllegalEncoding, Truncated};

pub(crate) fn xop32(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    sse_prefix: u32,
    fallback: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    if (rd.peek()? & 0xC8) != 0xC8 {
        return fetch::modrm32(rd, inst, sse_prefix, fallback);
    }

    if sse_prefix != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }

    let vex = rd.u8()?;
    let opcext = ((vex & 0x1F) as u32).wrapping_sub(8);
    if opcext >= 3 {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }

    let vex = rd.u8()?;
    let vex_w = (vex & 0x80) != 0;
    let vvv = 15 - ((vex >> 3) & 0xF);
    let vex_l = ((vex >> 2) & 0x1) as u32;
    inst.vl = vl::VL128 + vex_l;
    inst.vex_w = vex_w;
    if (vex & 0x3) != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }

    let idx = (rd.u8()? as u32 + 256 * opcext) as usize;

    let view = parse_modrm32(rd, inst)?;

    let mut decmask = (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | ((view.nnn as u32) << NNN_OFF)
        | ((view.rm as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | (vex_l << VL_OFF);
    if inst.modc0 && view.nnn == view.rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let mut ia = find_opcode(tables.xop_group(idx), decmask);

    fetch_immediate(rd, inst, ia, false)?;

    if let Err(err) = assign_avx(
        inst,
        ia,
        false,
        view.nnn,
        view.rm,
        vvv,
        vex_w,
        view.sib_index,
        false,
        false,
    ) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }
    Ok(ia)
}

pub(crate) fn xop64(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    tables: &TableSet,
    sse_prefix: u32,
    rex_prefix: u8,
    fallback: OpcodeGroup,
) -> Result<IaOpcode, Truncated> {
    if (rd.peek()? & 0x08) != 0x08 {
        return fetch::modrm64(rd, inst, sse_prefix, rex_prefix, fallback);
    }

    if sse_prefix != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }
    if rex_prefix != 0 {
        inst.fault = Some(IllegalEncoding::RexPrefix);
        return Ok(IaOpcode::Error);
    }

    let vex = rd.u8()?;
    let rex_r = ((vex >> 4) & 0x8) ^ 0x8;
    let rex_x = ((vex >> 3) & 0x8) ^ 0x8;
    let rex_b = ((vex >> 2) & 0x8) ^ 0x8;
    let opcext = ((vex & 0x1F) as u32).wrapping_sub(8);
    if opcext >= 3 {
        inst.fault = Some(IllegalEncoding::OpcodeMap);
        return Ok(IaOpcode::Error);
    }

    let vex = rd.u8()?;
    let mut vex_w = false;
    if (vex & 0x80) != 0 {
        vex_w = true;
        inst.osize = OpSize::Bits64;
    }
    let vvv = 15 - ((vex >> 3) & 0xF);
    let vex_l = ((vex >> 2) & 0x1) as u32;
    inst.vl = vl::VL128 + vex_l;
    inst.vex_w = vex_w;
    if (vex & 0x3) != 0 {
        inst.fault = Some(IllegalEncoding::SsePrefix);
        return Ok(IaOpcode::Error);
    }

    let idx = (rd.u8()? as u32 + 256 * opcext) as usize;

    let b2 = rd.u8()?;
    let mod_bits = b2 & 0xC0;
    let nnn = ((b2 >> 3) & 0x7) | rex_r;
    let rm = (b2 & 0x7) | rex_b;
    let mut sib_index = None;
    if mod_bits != 0xC0 {
        sib_index = decode_ea64(rd, inst, mod_bits, rm, rex_x)?;
    }

    let mut decmask = (1 << IS64_OFF)
        | (inst.osize.code() << OS32_OFF)
        | (inst.asize.code() << AS32_OFF)
        | ((inst.modc0 as u32) << MODC0_OFF)
        | (((nnn & 0x7) as u32) << NNN_OFF)
        | (((rm & 0x7) as u32) << RRR_OFF)
        | ((vex_w as u32) << VEX_W_OFF)
        | (vex_l << VL_OFF);
    if inst.modc0 && nnn == rm {
        decmask |= 1 << SRC_EQ_DST_OFF;
    }

    let mut ia = find_opcode(tables.xop_group(idx), decmask);

    fetch_immediate(rd, inst, ia, true)?;

    if let Err(err) = assign_avx(inst, ia, true, nnn, rm, vvv, vex_w, sib_index, false, false) {
        inst.fault = Some(err);
        ia = IaOpcode::Error;
    }
    Ok(ia)
}
