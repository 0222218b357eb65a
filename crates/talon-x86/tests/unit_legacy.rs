//! Legacy one- and two-byte map coverage at the public API level.

use talon_types::{CpuFeatures, Mode};
use talon_x86::{IaOpcode, Inst, Rep, SrcReg, TableSet};

fn tables() -> TableSet {
    TableSet::new(CpuFeatures::all())
}

fn decode32(bytes: &[u8]) -> Inst {
    tables().decode(Mode::Bits32, bytes).expect("decode")
}

fn decode64(bytes: &[u8]) -> Inst {
    tables().decode(Mode::Bits64, bytes).expect("decode")
}

#[test]
fn accumulator_immediate_forms_follow_operand_size() {
    // 05 id => add eax, imm32
    let inst = decode32(&[0x05, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Add_EAXId);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 5);

    let inst = decode32(&[0x66, 0x05, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Add_AXIw);
    assert_eq!(inst.imm, 0x1234);
    assert_eq!(inst.len, 4);

    // rex.w keeps the 32-bit immediate
    let inst = decode64(&[0x48, 0x05, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Add_RAXId);
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 6);
}

#[test]
fn register_in_the_opcode_byte_takes_rex_b() {
    // 49 B8 iq => mov r8, imm64
    let inst = decode64(&[0x49, 0xB8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(inst.id, IaOpcode::Mov_RRXIq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(8));
    assert_eq!(inst.imm, 0x1122334455667788);
    assert_eq!(inst.len, 10);

    // B9 id => mov ecx, imm32
    let inst = decode32(&[0xB9, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Mov_EdId);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 5);
}

#[test]
fn group_f7_splits_on_the_reg_field() {
    let inst = decode32(&[0xF7, 0xD8]);
    assert_eq!(inst.id, IaOpcode::Neg_Ed);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));

    let inst = decode32(&[0xF7, 0xE1]);
    assert_eq!(inst.id, IaOpcode::Mul_EAXEd);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));

    // the /0 test form carries a full immediate
    let inst = decode32(&[0xF7, 0xC1, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(inst.id, IaOpcode::Test_EdId);
    assert_eq!(inst.imm, 0x01020304);
    assert_eq!(inst.len, 6);

    let inst = decode32(&[0xF7, 0x10]);
    assert_eq!(inst.id, IaOpcode::Not_Ed);
    assert_eq!(inst.srcs[0], SrcReg::Mem);
    assert_eq!(inst.len, 2);
}

#[test]
fn moffs_width_follows_the_address_size() {
    let inst = decode32(&[0xA1, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Mov_EAXOd);
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 5);

    let inst = decode32(&[0x67, 0xA1, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Mov_EAXOd);
    assert_eq!(inst.imm, 0x1234);
    assert_eq!(inst.len, 4);

    // long mode defaults to a 64-bit moffs
    let inst = decode64(&[0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(inst.id, IaOpcode::Mov_EAXOq);
    assert_eq!(inst.imm, 0x1122334455667788);
    assert_eq!(inst.len, 9);

    let inst = decode64(&[0x67, 0xA1, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Mov_EAXOq);
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 6);

    let inst = decode64(&[0x48, 0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(inst.id, IaOpcode::Mov_RAXOq);
    assert_eq!(inst.len, 10);
}

#[test]
fn x87_escapes_split_register_and_memory_forms() {
    // D8 C1 => fadd st0, st1
    let inst = decode32(&[0xD8, 0xC1]);
    assert_eq!(inst.id, IaOpcode::Fadd_St0Stj);
    assert!(inst.modc0);
    assert_eq!(inst.x87_word, 0x0C1);
    assert_eq!(inst.len, 2);

    // D8 /0 => fadd dword ptr [disp32]
    let inst = decode32(&[0xD8, 0x05, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Fadd_SingleReal);
    assert!(!inst.modc0);
    assert_eq!(inst.mem.disp, 0x12345678);
    assert_eq!(inst.x87_word, 0x005);
    assert_eq!(inst.len, 6);

    // D9 D0 => fnop
    let inst = decode32(&[0xD9, 0xD0]);
    assert_eq!(inst.id, IaOpcode::Fnop);
    assert_eq!(inst.len, 2);
}

#[test]
fn amd_3dnow_suffix_byte_selects_the_opcode() {
    // 0F 0F C1 B4 => pfmul mm0, mm1
    let inst = decode32(&[0x0F, 0x0F, 0xC1, 0xB4]);
    assert_eq!(inst.id, IaOpcode::Pfmul_PqQq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));
    assert_eq!(inst.len, 4);

    // memory form keeps the suffix after the effective address
    let inst = decode32(&[0x0F, 0x0F, 0x01, 0xB4]);
    assert_eq!(inst.id, IaOpcode::Pfmul_PqQq);
    assert_eq!(inst.srcs[1], SrcReg::Mem);
    assert_eq!(inst.len, 4);
}

#[test]
fn opcode_63_changes_meaning_with_the_mode() {
    let inst = decode32(&[0x63, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Arpl_EwGw);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));

    // movsxd without rex.w moves 32 bits
    let inst = decode64(&[0x63, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Mov_Op64_GdEd);
    assert_eq!(inst.srcs[0], SrcReg::Reg(1));
    assert_eq!(inst.srcs[1], SrcReg::Reg(0));

    let inst = decode64(&[0x48, 0x63, 0xC8]);
    assert_eq!(inst.id, IaOpcode::Movsxd_GqEd);
    assert_eq!(inst.len, 3);
}

#[test]
fn syscall_exists_per_mode() {
    let inst = decode64(&[0x0F, 0x05]);
    assert_eq!(inst.id, IaOpcode::Syscall);
    assert_eq!(inst.len, 2);

    let inst = decode32(&[0x0F, 0x05]);
    assert_eq!(inst.id, IaOpcode::SyscallLegacy);
    assert_eq!(inst.len, 2);
}

#[test]
fn near_branches_carry_a_dword_displacement() {
    let inst = decode32(&[0x0F, 0x80, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Jo_Jd);
    assert_eq!(inst.imm, 0x12345678);
    assert_eq!(inst.len, 6);

    // still rel32 in long mode, applied at 64 bits
    let inst = decode64(&[0x0F, 0x80, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Jo_Jq);
    assert_eq!(inst.len, 6);

    let inst = decode64(&[0xE8, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(inst.id, IaOpcode::Call_Jq);
    assert_eq!(inst.len, 5);
}

#[test]
fn bsf_becomes_tzcnt_only_with_the_feature() {
    let bytes = [0xF3, 0x0F, 0xBC, 0xC1];

    let inst = decode32(&bytes);
    assert_eq!(inst.id, IaOpcode::Tzcnt_GdEd);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.srcs[1], SrcReg::Reg(1));

    // without bmi1 the F3 is an ordinary rep that bsf ignores
    let plain = TableSet::new(CpuFeatures::empty());
    let inst = plain.decode(Mode::Bits32, &bytes).expect("decode");
    assert_eq!(inst.id, IaOpcode::Bsf_GdEd);
    assert_eq!(inst.rep, Rep::Repe);
}

#[test]
fn int_takes_an_immediate_vector() {
    let inst = decode32(&[0xCD, 0x03]);
    assert_eq!(inst.id, IaOpcode::Int_Ib);
    assert_eq!(inst.imm, 3);
    assert_eq!(inst.len, 2);
}

#[test]
fn push_width_tracks_mode_and_prefixes() {
    let inst = decode64(&[0x50]);
    assert_eq!(inst.id, IaOpcode::Push_Eq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(0));
    assert_eq!(inst.len, 1);

    let inst = decode64(&[0x41, 0x50]);
    assert_eq!(inst.id, IaOpcode::Push_Eq);
    assert_eq!(inst.srcs[0], SrcReg::Reg(8));

    let inst = decode64(&[0x66, 0x50]);
    assert_eq!(inst.id, IaOpcode::Push_Ew);

    let inst = decode32(&[0x50]);
    assert_eq!(inst.id, IaOpcode::Push_Ed);
}
