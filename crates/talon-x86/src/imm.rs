//! Immediate fetching, driven by the operand metadata of the matched
//! instruction.

use talon_types::{AddrSize, OpSize};

use crate::ids::{IaOpcode, OperandKind, SrcRole};
use crate::insn::Inst;
use crate::reader::Reader;
use crate::Truncated;

/// Fetch whatever trailing immediate bytes `id` calls for.
///
/// Branch displacements are immediates here; they only differ in how the
/// execution stage applies them. Sign-extending forms widen at fetch time
/// so consumers can read [`Inst::imm`] at the operand width directly.
pub fn fetch_immediate(
    rd: &mut Reader<'_>,
    inst: &mut Inst,
    id: IaOpcode,
    is_64: bool,
) -> Result<(), Truncated> {
    for spec in id.srcs() {
        match spec.role {
            SrcRole::Imm | SrcRole::Branch => match spec.kind {
                OperandKind::Imm1 => inst.imm = 1,
                OperandKind::ImmB => inst.imm = rd.u8()? as u64,
                OperandKind::ImmBsW => inst.imm = rd.u8()? as i8 as i16 as u16 as u64,
                OperandKind::ImmBsD => inst.imm = rd.u8()? as i8 as i32 as u32 as u64,
                OperandKind::ImmB2 => inst.imm2 = rd.u8()? as u16,
                OperandKind::ImmW => inst.imm = rd.u16()? as u64,
                OperandKind::ImmD => inst.imm = rd.u32()? as u64,
                OperandKind::ImmQ => inst.imm = rd.u64()?,
                OperandKind::DirectPtr => {
                    // offset at the operand size, then a 16-bit selector
                    inst.imm = if inst.osize == OpSize::Bits16 {
                        rd.u16()? as u64
                    } else {
                        rd.u32()? as u64
                    };
                    inst.imm2 = rd.u16()?;
                }
                OperandKind::MoffsB
                | OperandKind::MoffsW
                | OperandKind::MoffsD
                | OperandKind::MoffsQ => {
                    // the moffs address width follows the address size,
                    // which long mode caps at 32 or 64
                    inst.imm = if is_64 {
                        if inst.asize == AddrSize::Bits64 {
                            rd.u64()?
                        } else {
                            rd.u32()? as u64
                        }
                    } else if inst.asize == AddrSize::Bits32 {
                        rd.u32()? as u64
                    } else {
                        rd.u16()? as u64
                    };
                }
                _ => {}
            },
            SrcRole::Vib => {
                inst.imm = rd.u8()? as u64;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_types::Mode;

    fn run(id: IaOpcode, bytes: &[u8], osize: OpSize, asize: AddrSize, is_64: bool) -> Inst {
        let mut rd = Reader::new(bytes);
        let mut inst = Inst::new(if is_64 { Mode::Bits64 } else { Mode::Bits32 });
        inst.osize = osize;
        inst.asize = asize;
        fetch_immediate(&mut rd, &mut inst, id, is_64).unwrap();
        inst
    }

    #[test]
    fn sign_extended_byte_widens_at_fetch() {
        let inst = run(
            IaOpcode::Add_EdsIb,
            &[0xF0],
            OpSize::Bits32,
            AddrSize::Bits32,
            false,
        );
        assert_eq!(inst.imm, 0xFFFF_FFF0);
    }

    #[test]
    fn enter_takes_two_immediates() {
        let inst = run(
            IaOpcode::Enter_Op32_IwIb,
            &[0x20, 0x00, 0x03],
            OpSize::Bits32,
            AddrSize::Bits32,
            false,
        );
        assert_eq!(inst.imm, 0x20);
        assert_eq!(inst.imm2, 0x03);
    }

    #[test]
    fn far_pointer_splits_offset_and_selector() {
        let inst = run(
            IaOpcode::Jmpf_Ap,
            &[0x34, 0x12, 0x08, 0x00],
            OpSize::Bits16,
            AddrSize::Bits16,
            false,
        );
        assert_eq!(inst.imm, 0x1234);
        assert_eq!(inst.imm2, 0x0008);
    }

    #[test]
    fn moffs_width_follows_the_address_size() {
        let inst = run(
            IaOpcode::Mov_ALOd,
            &[0x44, 0x33, 0x22, 0x11],
            OpSize::Bits32,
            AddrSize::Bits32,
            false,
        );
        assert_eq!(inst.imm, 0x1122_3344);

        let inst = run(
            IaOpcode::Mov_ALOq,
            &[1, 2, 3, 4, 5, 6, 7, 8],
            OpSize::Bits32,
            AddrSize::Bits64,
            true,
        );
        assert_eq!(inst.imm, 0x0807_0605_0403_0201);
    }

    #[test]
    fn shift_by_one_fabricates_the_immediate() {
        let inst = run(
            IaOpcode::Shl_EdI1,
            &[],
            OpSize::Bits32,
            AddrSize::Bits32,
            false,
        );
        assert_eq!(inst.imm, 1);
    }

    #[test]
    fn truncation_surfaces_as_an_error() {
        let mut rd = Reader::new(&[0x12]);
        let mut inst = Inst::new(Mode::Bits32);
        inst.osize = OpSize::Bits32;
        assert!(fetch_immediate(&mut rd, &mut inst, IaOpcode::Add_EdId, false).is_err());
    }
}
