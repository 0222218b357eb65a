use talon_types::{AddrSize, CpuFeatures, Mode, OpSize, SegReg};
use talon_x86::{IaOpcode, IllegalEncoding, Inst, Rep, SrcReg, TableSet};

fn tables() -> TableSet {
    TableSet::new(CpuFeatures::all())
}

fn tables_without(features: CpuFeatures) -> TableSet {
    TableSet::new(CpuFeatures::all().difference(features))
}

fn decode32(bytes: &[u8]) -> Inst {
    tables().decode(Mode::Bits32, bytes).expect("decode")
}

fn decode64(bytes: &[u8]) -> Inst {
    tables().decode(Mode::Bits64, bytes).expect("decode")
}

#[test]
fn legacy_prefixes_are_recorded() {
    // F0 83 00 01 => lock add dword ptr [eax], 1
    let inst = decode32(&[0xF0, 0x83, 0x00, 0x01]);
    assert_eq!(inst.id, IaOpcode::Add_EdsIb);
    assert!(inst.lock);
    assert_eq!(inst.fault, None);
    assert_eq!(inst.rep, Rep::None);
    assert_eq!(inst.imm, 1);
    assert_eq!(inst.len, 4);

    // F3 A4 => rep movsb
    let inst = decode32(&[0xF3, 0xA4]);
    assert_eq!(inst.id, IaOpcode::RepMovsb_YbXb);
    assert_eq!(inst.rep, Rep::Repe);

    let inst = decode32(&[0xF2, 0xA4]);
    assert_eq!(inst.rep, Rep::Repne);
}

#[test]
fn segment_and_size_overrides_combine() {
    // 64 66 67 8B 04 25 00 00 00 00
    // fs override + operand-size + address-size + mov ax, [disp32]
    let inst = decode64(&[0x64, 0x66, 0x67, 0x8B, 0x04, 0x25, 0, 0, 0, 0]);
    assert_eq!(inst.id, IaOpcode::Mov_GwEw);
    assert_eq!(inst.seg, SegReg::Fs);
    assert_eq!(inst.osize, OpSize::Bits16);
    assert_eq!(inst.asize, AddrSize::Bits32);
    assert_eq!(inst.srcs[1], SrcReg::Mem);
    assert_eq!(inst.len, 10);

    // 65 67 8B 04 => mov eax, gs:[si], a 16-bit address form inside 32-bit code
    let inst = decode32(&[0x65, 0x67, 0x8B, 0x04]);
    assert_eq!(inst.id, IaOpcode::Mov_Op32_GdEd);
    assert_eq!(inst.seg, SegReg::Gs);
    assert_eq!(inst.asize, AddrSize::Bits16);
    assert_eq!(inst.len, 4);
}

#[test]
fn rex_bits_reach_the_modrm_fields() {
    // 4C 8B D0 => mov r10, rax
    let inst = decode64(&[0x4C, 0x8B, 0xD0]);
    assert_eq!(inst.id, IaOpcode::Mov_GqEq);
    assert!(inst.rex);
    assert_eq!(inst.osize, OpSize::Bits64);
    assert_eq!(inst.srcs[0], SrcReg::Reg(10));
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));
    assert_eq!(inst.len, 3);
}

#[test]
fn vex_escapes_split_from_les_lds_on_the_mod_bits() {
    // C5 F8 77 => vzeroupper
    let inst = decode32(&[0xC5, 0xF8, 0x77]);
    assert_eq!(inst.id, IaOpcode::Vzeroupper);
    assert_eq!(inst.fault, None);
    assert_eq!(inst.len, 3);

    // C4 E1 78 10 C1 => vmovups xmm0, xmm1
    let inst = decode32(&[0xC4, 0xE1, 0x78, 0x10, 0xC1]);
    assert_eq!(inst.id, IaOpcode::Vmovups_VpsWps);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));
    assert_eq!(inst.len, 5);

    // C5 with mod != 11 after it is plain LDS outside long mode
    let inst = decode32(&[0xC5, 0x06, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Lds_GdMp);
    assert_eq!(inst.srcs[1], SrcReg::Mem);
    assert_eq!(inst.mem.disp, 0x12345678);
    assert_eq!(inst.len, 6);

    // same lead byte in long mode stays vex
    let inst = decode64(&[0xC5, 0xF8, 0x77]);
    assert_eq!(inst.id, IaOpcode::Vzeroupper);
    assert_eq!(inst.len, 3);
}

#[test]
fn evex_escape_splits_from_bound() {
    // 62 F1 7C 48 58 C0 => vaddps zmm0, zmm0, zmm0
    let inst = decode32(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0]);
    assert_eq!(inst.id, IaOpcode::V512_Vaddps_VpsHpsWps);
    assert_eq!(inst.fault, None);
    assert_eq!(inst.vl, talon_types::vl::VL512);
    assert_eq!(inst.len, 6);

    // 62 00 => bound eax, [eax]
    let inst = decode32(&[0x62, 0x00]);
    assert_eq!(inst.id, IaOpcode::Bound_GdMa);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Mem);
    assert_eq!(inst.len, 2);

    // long mode has no bound to fall back to; a malformed payload faults
    let inst = decode64(&[0x62, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::EvexReservedBits));
    assert_eq!(inst.len, 5);
}

#[test]
fn xop_escape_splits_from_pop() {
    // 8F E9 50 90 C8 => vprotb xmm1, xmm0, xmm5
    let inst = decode32(&[0x8F, 0xE9, 0x50, 0x90, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Vprotb_VdqWdqHdq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));
    assert_eq!(inst.srcs[2], SrcReg::Reg(5));
    assert_eq!(inst.len, 5);

    // 8F 00 => pop dword ptr [eax]
    let inst = decode32(&[0x8F, 0x00]);
    assert_eq!(inst.id, IaOpcode::Pop_Ed);
    assert_eq!(inst.srcs[0], SrcReg::Mem);
    assert_eq!(inst.len, 2);

    // 8F C0 => pop rax; stack width defaults to 64 in long mode
    let inst = decode64(&[0x8F, 0xC0]);
    assert_eq!(inst.id, IaOpcode::Pop_Eq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.len, 2);

    // the reg field of a fallback pop must still be /0
    let inst = decode32(&[0x8F, 0x48, 0x01]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::Opcode));
    assert_eq!(inst.len, 3);
}

#[test]
fn stale_prefixes_disqualify_the_avx_escapes() {
    // an earlier 66/F2/F3 keeps its legacy meaning and poisons the escape
    let inst = decode32(&[0x66, 0xC5, 0xF8, 0x77]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::SsePrefix));
    assert_eq!(inst.len, 2);

    let inst = decode32(&[0xF3, 0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0]);
    assert_eq!(inst.fault, Some(IllegalEncoding::SsePrefix));
    assert_eq!(inst.len, 2);

    let inst = decode32(&[0x66, 0x8F, 0xE8, 0x78, 0xC0, 0xC1, 0x07]);
    assert_eq!(inst.fault, Some(IllegalEncoding::SsePrefix));
    assert_eq!(inst.len, 2);

    // rex in front of vex is likewise rejected
    let inst = decode64(&[0x48, 0xC4, 0xE1, 0xF8, 0x10, 0xC1]);
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::RexPrefix));
    assert_eq!(inst.len, 2);
}

#[test]
fn feature_gates_restore_the_legacy_meaning() {
    let no_avx = tables_without(CpuFeatures::AVX);
    // C5 F8 => lds with mod=11, which has no memory operand to load
    let inst = no_avx.decode(Mode::Bits32, &[0xC5, 0xF8, 0x77]).expect("decode");
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.fault, Some(IllegalEncoding::Opcode));
    assert_eq!(inst.len, 2);
    // and in long mode c5 simply does not exist without avx
    let inst = no_avx.decode(Mode::Bits64, &[0xC5, 0xF8, 0x77]).expect("decode");
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.len, 1);

    let no_xop = tables_without(CpuFeatures::XOP);
    let inst = no_xop
        .decode(Mode::Bits32, &[0x8F, 0xE8, 0x78, 0xC0, 0xC1, 0x07])
        .expect("decode");
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.len, 2);

    let no_avx512 = tables_without(CpuFeatures::AVX512);
    let inst = no_avx512
        .decode(Mode::Bits32, &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0])
        .expect("decode");
    assert_eq!(inst.id, IaOpcode::Error);
    assert_eq!(inst.len, 2);
}
