//! VEX, EVEX and XOP form selection and the encoding checks that ride
//! along with them.

use talon_types::{vl, CpuFeatures, Mode};
use talon_x86::{IaOpcode, IllegalEncoding, Inst, MemBase, MemIndex, SrcReg, TableSet};

fn tables() -> TableSet {
    TableSet::new(CpuFeatures::all())
}

fn decode32(bytes: &[u8]) -> Inst {
    tables().decode(Mode::Bits32, bytes).expect("decode")
}

#[test]
fn vex_length_bit_selects_the_form() {
    // C4 E1 78 10 C1 => vmovups xmm0, xmm1
    let inst = decode32(&[0xC4, 0xE1, 0x78, 0x10, 0xC1]);
    assert_eq!(inst.id, IaOpcode::Vmovups_VpsWps);
    assert_eq!(inst.vl, vl::VL128);

    // C5 FC 11 C8 => vmovups ymm0, ymm1 (store direction)
    let inst = decode32(&[0xC5, 0xFC, 0x11, 0xC8]);
    assert_eq!(inst.id, IaOpcode::V256_Vmovups_WpsVps);
    assert_eq!(inst.vl, vl::VL256);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));
    assert_eq!(inst.len, 4);
}

#[test]
fn xop_w_bit_swaps_the_rotate_operands() {
    // 8F E9 50 90 C8 => vprotb xmm1, xmm0, xmm5
    let inst = decode32(&[0x8F, 0xE9, 0x50, 0x90, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Vprotb_VdqWdqHdq);
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));
    assert_eq!(inst.srcs[2], SrcReg::Reg(5));

    // same bytes with W set read the sources the other way around
    let inst = decode32(&[0x8F, 0xE9, 0xD0, 0x90, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Vprotb_VdqHdqWdq);
    assert_eq!(inst.srcs[1], SrcReg::Reg(5));
    assert_eq!(inst.srcs[2], SrcReg::Reg(0));
}

#[test]
fn xop_map_8_carries_a_trailing_immediate() {
    // 8F E8 78 C0 C1 07 => vprotb xmm0, xmm1, 7
    let inst = decode32(&[0x8F, 0xE8, 0x78, 0xC0, 0xC1, 0x07]);
    assert_eq!(inst.id, IaOpcode::Vprotb_VdqWdqIb);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));
    assert_eq!(inst.imm, 7);
    assert_eq!(inst.len, 6);
}

#[test]
fn xop_rejects_legacy_prefix_bits_and_bad_maps() {
    // pp bits inside the xop payload must be zero
    let inst = decode32(&[0x8F, 0xE9, 0x79, 0x90, 0xC0]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::SsePrefix));
    assert_eq!(inst.len, 3);

    // map selector 11 is past the three defined maps
    let inst = decode32(&[0x8F, 0xCB, 0x50]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::OpcodeMap));
    assert_eq!(inst.len, 2);
}

#[test]
fn vex_map_selector_bounds() {
    let inst = decode32(&[0xC4, 0xE0, 0x78, 0x10, 0xC1]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::OpcodeMap));
    assert_eq!(inst.len, 4);

    let inst = decode32(&[0xC4, 0xE4, 0x78, 0x10, 0xC1]);
    assert_eq!(inst.fault, Some(IllegalEncoding::OpcodeMap));
    assert_eq!(inst.len, 4);
}

#[test]
fn unused_vvvv_must_read_zero() {
    // vzeroupper with a nonzero vvvv field
    let inst = decode32(&[0xC5, 0xF0, 0x77]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::Vvvv));
    assert_eq!(inst.len, 3);
}

#[test]
fn evex_masking_selects_the_kmask_form() {
    // 62 F1 6C CA 58 CB => vaddps zmm1{k2}{z}, zmm2, zmm3
    let inst = decode32(&[0x62, 0xF1, 0x6C, 0xCA, 0x58, 0xCB]);
    assert_eq!(inst.id, IaOpcode::V512_Vaddps_VpsHpsWps_Kmask);
    assert_eq!(inst.opmask, 2);
    assert!(inst.zero_masking);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.srcs[1], SrcReg::Reg(2));
    assert_eq!(inst.srcs[2], SrcReg::Reg(3));
    assert_eq!(inst.len, 6);

    // zeroing with k0 has nothing to zero by
    let inst = decode32(&[0x62, 0xF1, 0x7C, 0xC8, 0x58, 0xCB]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::ZeroMaskingNoKmask));
    assert_eq!(inst.len, 5);
}

#[test]
fn evex_broadcast_bit_on_registers_is_rounding_control() {
    // 62 F1 7C 78 58 C0 => vaddps zmm0, zmm0, zmm0, {rz-sae}
    let inst = decode32(&[0x62, 0xF1, 0x7C, 0x78, 0x58, 0xC0]);
    assert_eq!(inst.id, IaOpcode::V512_Vaddps_VpsHpsWps);
    assert!(inst.evex_b);
    assert_eq!(inst.rc, 3);
    assert_eq!(inst.vl, vl::VL512);
    assert_eq!(inst.len, 6);

    // without the b bit the same L'L pattern is an illegal length
    let inst = decode32(&[0x62, 0xF1, 0x7C, 0x68, 0x58, 0xC0]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::VectorLength));
    assert_eq!(inst.len, 6);
}

#[test]
fn evex_compressed_displacement_scales_by_tuple() {
    // 62 F1 7C 48 58 4C 24 01 => vaddps zmm1, zmm0, [esp + 64]
    let inst = decode32(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x4C, 0x24, 0x01]);
    assert_eq!(inst.id, IaOpcode::V512_Vaddps_VpsHpsWps);
    assert_eq!(inst.mem.base, Some(MemBase::Gpr(4)));
    assert_eq!(inst.mem.disp, 64);
    assert_eq!(inst.len, 8);

    // a scalar dword tuple scales by four instead
    let inst = decode32(&[0x62, 0xF1, 0x7E, 0x08, 0x10, 0x40, 0x01]);
    assert_eq!(inst.id, IaOpcode::V512_Vmovss_VssWss);
    assert_eq!(inst.mem.disp, 4);
    assert_eq!(inst.len, 7);
}

#[test]
fn evex_movss_splits_on_the_mod_bits() {
    // register form is the three-operand merge
    let inst = decode32(&[0x62, 0xF1, 0x7E, 0x08, 0x10, 0xC1]);
    assert_eq!(inst.id, IaOpcode::V512_Vmovss_VssHpsWss);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));
    assert_eq!(inst.srcs[2], SrcReg::Reg(1));
    assert_eq!(inst.len, 6);
}

#[test]
fn evex_gather_needs_a_mask_and_a_vsib() {
    // 62 F2 7D 4A 90 0C 90 => vpgatherdd zmm1{k2}, [eax + zmm2*4]
    let inst = decode32(&[0x62, 0xF2, 0x7D, 0x4A, 0x90, 0x0C, 0x90]);
    assert_eq!(inst.id, IaOpcode::V512_Vgatherdd_VdqVSib);
    assert_eq!(inst.opmask, 2);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.srcs[1], SrcReg::VecMem);
    assert_eq!(inst.mem.base, Some(MemBase::Gpr(0)));
    assert_eq!(inst.mem.index, Some(MemIndex::Vec(2)));
    assert_eq!(inst.mem.scale, 4);
    assert_eq!(inst.len, 7);

    // k0 means no completion mask, which gathers cannot run without
    let inst = decode32(&[0x62, 0xF2, 0x7D, 0x48, 0x90, 0x0C, 0x90]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::Opcode));
    assert_eq!(inst.len, 7);

    // a plain base register form has no index to gather over
    let inst = decode32(&[0x62, 0xF2, 0x7D, 0x4A, 0x90, 0x08]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::VsibIndex));
    assert_eq!(inst.len, 6);
}

#[test]
fn vex_gather_reads_the_mask_from_vvvv() {
    // C4 E2 61 90 0C 90 => vpgatherdd xmm1, [eax + xmm2*4], xmm3
    let inst = decode32(&[0xC4, 0xE2, 0x61, 0x90, 0x0C, 0x90]);
    assert_eq!(inst.id, IaOpcode::Vgatherdd_VdqHdq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.srcs[1], SrcReg::VecMem);
    assert_eq!(inst.srcs[2], SrcReg::Reg(3));
    assert_eq!(inst.mem.index, Some(MemIndex::Vec(2)));
    assert_eq!(inst.len, 6);
}

#[test]
fn evex_reserved_bit_patterns_fault() {
    // p0 bits 2..3 must be zero
    let inst = decode32(&[0x62, 0xF5, 0x7C, 0x48, 0x58, 0xC0]);
    assert_eq!(inst.fault, Some(IllegalEncoding::EvexReservedBits));
    assert_eq!(inst.len, 5);

    // p1 bit 2 must be one
    let inst = decode32(&[0x62, 0xF1, 0x78, 0x48, 0x58, 0xC0]);
    assert_eq!(inst.fault, Some(IllegalEncoding::EvexReservedBits));
    assert_eq!(inst.len, 5);

    // vvvv bit 3 and v' read as register bits only in long mode
    let inst = decode32(&[0x62, 0xF1, 0x3C, 0x48, 0x58, 0xC0]);
    assert_eq!(inst.fault, Some(IllegalEncoding::Vvvv));
    assert_eq!(inst.len, 5);

    let inst = decode32(&[0x62, 0xF1, 0x7C, 0x40, 0x58, 0xC0]);
    assert_eq!(inst.fault, Some(IllegalEncoding::Vvvv));
    assert_eq!(inst.len, 5);
}

#[test]
fn evex_register_bits_extend_in_long_mode() {
    // 62 51 7C 48 58 D4 => vaddps zmm10, zmm0, zmm12
    let inst = tables()
        .decode(Mode::Bits64, &[0x62, 0x51, 0x7C, 0x48, 0x58, 0xD4])
        .expect("decode");
    assert_eq!(inst.id, IaOpcode::V512_Vaddps_VpsHpsWps);
    assert_eq!(inst.srcs[0], SrcReg::Reg(10));
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));
    assert_eq!(inst.srcs[2], SrcReg::Reg(12));
    assert_eq!(inst.len, 6);
}
