//! Source-operand assignment: folding modrm/vvv/immediate register fields
//! into the instruction's source slots.

use talon_types::{vl, AddrSize};

use crate::ids::{IaOpcode, OperandKind, SrcRole};
use crate::insn::{Inst, MemIndex, SrcReg};
use crate::IllegalEncoding;

/// Resolve sources for a non-VEX instruction. Never faults: the legacy
/// metadata only uses modrm-derived and implicit origins.
pub fn assign_legacy(inst: &mut Inst, id: IaOpcode, nnn: u8, rm: u8) {
    for (n, spec) in id.srcs().iter().enumerate() {
        match spec.role {
            SrcRole::None | SrcRole::Imm | SrcRole::Branch | SrcRole::Implicit => {}
            SrcRole::Acc => inst.srcs[n] = SrcReg::Reg(0),
            SrcRole::Nnn => inst.srcs[n] = SrcReg::Reg(nnn),
            SrcRole::Rm => {
                inst.srcs[n] = if inst.modc0 {
                    SrcReg::Reg(rm)
                } else if spec.kind == OperandKind::VmmReg {
                    SrcReg::VecMem
                } else {
                    SrcReg::Mem
                };
            }
            SrcRole::VecRm => {
                inst.srcs[n] = if inst.modc0 {
                    SrcReg::Reg(rm)
                } else {
                    SrcReg::VecMem
                };
            }
            // vvv/vib/vsib origins only appear in vex/evex/xop metadata
            SrcRole::Vvv | SrcRole::Vib | SrcRole::Vsib => {}
        }
    }
}

/// Resolve sources for a VEX/EVEX/XOP instruction.
///
/// Performs the encoding checks that need the operand metadata: opmask
/// register range, zero-masking restrictions, vsib legality, and the
/// rule that vvvv must read as zero when the instruction has no vvvv
/// operand. On EVEX forms with a compressed 8-bit displacement the
/// displacement is scaled here, once the memory tuple is known.
#[allow(clippy::too_many_arguments)]
pub fn assign_avx(
    inst: &mut Inst,
    id: IaOpcode,
    is_64: bool,
    nnn: u8,
    rm: u8,
    vvv: u8,
    vex_w: bool,
    sib_index: Option<u8>,
    had_evex: bool,
    displ8: bool,
) -> Result<(), IllegalEncoding> {
    let mut use_vvv = false;
    let mut displ8_scale = 1u32;
    let mut rm = rm;

    for (n, spec) in id.srcs().iter().enumerate() {
        let mut mem_src = false;

        match spec.role {
            SrcRole::None | SrcRole::Imm | SrcRole::Branch | SrcRole::Implicit => {}
            SrcRole::Acc => inst.srcs[n] = SrcReg::Reg(0),
            SrcRole::Nnn => {
                inst.srcs[n] = SrcReg::Reg(nnn);
                if spec.kind == OperandKind::KmaskReg {
                    if nnn >= 8 {
                        return Err(IllegalEncoding::KmaskRegister);
                    }
                    if inst.zero_masking {
                        return Err(IllegalEncoding::ZeroMaskingKmask);
                    }
                }
            }
            SrcRole::Rm => {
                if inst.modc0 {
                    if spec.kind == OperandKind::KmaskReg {
                        rm &= 0x7;
                        if inst.zero_masking {
                            return Err(IllegalEncoding::ZeroMaskingKmask);
                        }
                    }
                    inst.srcs[n] = SrcReg::Reg(rm);
                } else {
                    mem_src = true;
                    inst.srcs[n] = if spec.kind == OperandKind::VmmReg {
                        SrcReg::VecMem
                    } else {
                        SrcReg::Mem
                    };
                }
            }
            SrcRole::VecRm => {
                if inst.modc0 {
                    inst.srcs[n] = SrcReg::Reg(rm);
                } else {
                    inst.srcs[n] = SrcReg::VecMem;
                    mem_src = true;
                    // zero masking cannot apply to a memory destination
                    if n == 0 && inst.zero_masking {
                        return Err(IllegalEncoding::ZeroMaskingMemory);
                    }
                }
            }
            SrcRole::Vvv => {
                inst.srcs[n] = SrcReg::Reg(vvv);
                use_vvv = true;
                if spec.kind == OperandKind::KmaskReg {
                    if vvv >= 8 {
                        return Err(IllegalEncoding::KmaskRegister);
                    }
                    if inst.zero_masking {
                        return Err(IllegalEncoding::ZeroMaskingKmask);
                    }
                }
            }
            SrcRole::Vib => {
                let ib = inst.imm as u8;
                let reg = if is_64 {
                    if had_evex {
                        ((ib << 1) & 0x10) | (ib >> 4)
                    } else {
                        ib >> 4
                    }
                } else {
                    (ib >> 4) & 0x7
                };
                inst.srcs[n] = SrcReg::Reg(reg);
            }
            SrcRole::Vsib => {
                if inst.asize == AddrSize::Bits16 {
                    return Err(IllegalEncoding::VsibAddressSize);
                }
                let Some(idx) = sib_index else {
                    return Err(IllegalEncoding::VsibIndex);
                };
                inst.mem.index = Some(MemIndex::Vec(idx | (vvv & 0x10)));
                // zero masking cannot apply to gather/scatter
                if inst.zero_masking {
                    return Err(IllegalEncoding::ZeroMaskingVsib);
                }
                inst.srcs[n] = SrcReg::VecMem;
                mem_src = true;
            }
        }

        if had_evex && displ8 && mem_src {
            displ8_scale = evex_displ8_compression(inst, id, spec.role, spec.kind, vex_w);
        }
    }

    if displ8_scale > 1 {
        if inst.asize == AddrSize::Bits16 {
            let d16 = (inst.mem.disp as u16).wrapping_mul(displ8_scale as u16);
            inst.mem.disp = d16 as i16 as i32;
        } else {
            inst.mem.disp = (inst.mem.disp as u32).wrapping_mul(displ8_scale) as i32;
        }
    }

    if !use_vvv && vvv != 0 {
        return Err(IllegalEncoding::Vvvv);
    }

    Ok(())
}

/// Scale factor for an EVEX compressed 8-bit displacement, from the
/// memory tuple of the operand that referenced memory.
fn evex_displ8_compression(
    inst: &Inst,
    id: IaOpcode,
    role: SrcRole,
    kind: OperandKind,
    vex_w: bool,
) -> u32 {
    if role == SrcRole::Rm {
        return match kind {
            OperandKind::Gpr64 => 8,
            OperandKind::Gpr32 => 4,
            OperandKind::Gpr16 => 2,
            _ => 1,
        };
    }

    // vmovddup reads a qword at VL128 despite its full-vector tuple
    if (id == IaOpcode::V512_Vmovddup_VpdWpd || id == IaOpcode::V512_Vmovddup_VpdWpd_Kmask)
        && inst.vl == vl::VL128
    {
        return 8;
    }

    let len = if inst.vl == vl::NONE { vl::VL128 } else { inst.vl };
    let w = vex_w as u32;

    match kind {
        OperandKind::TupleFull => {
            if inst.evex_b {
                4 << w
            } else {
                16 * len
            }
        }
        OperandKind::TupleByte => 1,
        OperandKind::TupleWord => 2,
        OperandKind::TupleDword => 4,
        OperandKind::TupleQword => 8,
        OperandKind::TupleScalar => 4 << w,
        OperandKind::TupleHalf => {
            if inst.evex_b {
                4 << w
            } else {
                8 * len
            }
        }
        OperandKind::TupleQuarter => 4 * len,
        OperandKind::TupleEighth => 2 * len,
        OperandKind::TupleVec128 => 16,
        OperandKind::TupleVec256 => 32,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_types::Mode;

    #[test]
    fn register_form_takes_rm_directly() {
        let mut inst = Inst::new(Mode::Bits32);
        inst.modc0 = true;
        assign_legacy(&mut inst, IaOpcode::Add_EdGd, 2, 5);
        assert_eq!(inst.srcs[0], SrcReg::Reg(5));
        assert_eq!(inst.srcs[1], SrcReg::Reg(2));
        assert_eq!(inst.srcs[2], SrcReg::None);
    }

    #[test]
    fn memory_form_routes_through_the_scratch_slot() {
        let mut inst = Inst::new(Mode::Bits32);
        inst.modc0 = false;
        assign_legacy(&mut inst, IaOpcode::Add_EdGd, 2, 5);
        assert_eq!(inst.srcs[0], SrcReg::Mem);
        assert_eq!(inst.srcs[1], SrcReg::Reg(2));

        let mut inst = Inst::new(Mode::Bits32);
        inst.modc0 = false;
        assign_legacy(&mut inst, IaOpcode::Andps_VpsWps, 1, 0);
        assert_eq!(inst.srcs[1], SrcReg::VecMem);
    }

    #[test]
    fn stray_vvvv_faults_when_unused() {
        let mut inst = Inst::new(Mode::Bits32);
        inst.modc0 = true;
        let err = assign_avx(
            &mut inst,
            IaOpcode::Vmovups_VpsWps,
            false,
            1,
            2,
            3,
            false,
            None,
            false,
            false,
        );
        assert_eq!(err, Err(IllegalEncoding::Vvvv));
    }

    #[test]
    fn zero_masking_to_memory_faults() {
        let mut inst = Inst::new(Mode::Bits32);
        inst.modc0 = false;
        inst.zero_masking = true;
        inst.opmask = 1;
        let err = assign_avx(
            &mut inst,
            IaOpcode::V512_Vmovups_WpsVps_Kmask,
            false,
            1,
            0,
            0,
            false,
            None,
            true,
            false,
        );
        assert_eq!(err, Err(IllegalEncoding::ZeroMaskingMemory));
    }

    #[test]
    fn vsib_demands_a_sib_index() {
        let mut inst = Inst::new(Mode::Bits32);
        inst.asize = AddrSize::Bits32;
        inst.modc0 = false;
        let err = assign_avx(
            &mut inst,
            IaOpcode::Vgatherdps_VpsHps,
            false,
            1,
            4,
            2,
            false,
            None,
            false,
            false,
        );
        assert_eq!(err, Err(IllegalEncoding::VsibIndex));

        let mut inst = Inst::new(Mode::Bits32);
        inst.asize = AddrSize::Bits32;
        inst.modc0 = false;
        assign_avx(
            &mut inst,
            IaOpcode::Vgatherdps_VpsHps,
            false,
            1,
            4,
            2,
            false,
            Some(6),
            false,
            false,
        )
        .unwrap();
        assert_eq!(inst.mem.index, Some(MemIndex::Vec(6)));
        assert_eq!(inst.srcs[1], SrcReg::VecMem);
    }

    #[test]
    fn compressed_displacement_scales_by_the_tuple() {
        // full-vector tuple at VL512 multiplies disp8 by 64
        let mut inst = Inst::new(Mode::Bits32);
        inst.asize = AddrSize::Bits32;
        inst.modc0 = false;
        inst.vl = vl::VL512;
        inst.mem.disp = 2;
        assign_avx(
            &mut inst,
            IaOpcode::V512_Vmovups_VpsWps,
            false,
            1,
            0,
            0,
            false,
            None,
            true,
            true,
        )
        .unwrap();
        assert_eq!(inst.mem.disp, 128);

        // broadcast reads one element instead
        let mut inst = Inst::new(Mode::Bits32);
        inst.asize = AddrSize::Bits32;
        inst.modc0 = false;
        inst.vl = vl::VL512;
        inst.evex_b = true;
        inst.mem.disp = -1;
        assign_avx(
            &mut inst,
            IaOpcode::V512_Vaddps_VpsHpsWps,
            false,
            1,
            0,
            3,
            false,
            None,
            true,
            true,
        )
        .unwrap();
        assert_eq!(inst.mem.disp, -4);
    }
}
