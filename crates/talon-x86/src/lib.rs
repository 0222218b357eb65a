//! Instruction fetch-decode front end for x86 and x86-64.
//!
//! The pipeline turns a byte window into one [`Inst`] record: prefix scan,
//! opcode dispatch, ModRM/SIB resolution, table matching against per-opcode
//! descriptor groups, immediate fetch and operand-role assignment. It never
//! executes anything and never allocates on the decode path.
//!
//! Entry points live on [`TableSet`], which is built once from a
//! [`CpuFeatures`] mask and owns the feature-specialized dispatch maps:
//!
//! ```
//! use talon_types::{CpuFeatures, Mode};
//! use talon_x86::TableSet;
//!
//! let tables = TableSet::new(CpuFeatures::empty());
//! let inst = tables.decode(Mode::Bits64, &[0x48, 0x01, 0xC0]).unwrap();
//! assert_eq!(inst.len, 3); // add rax, rax
//! ```
//!
//! Running out of bytes is the only failure reported through `Result`: it is
//! the recoverable "fetch more and retry" condition. Every structural
//! problem (bad encoding, illegal prefix combination, #UD opcode) still
//! produces an `Ok` record carrying the error sentinel id and the precise
//! [`IllegalEncoding`] cause, so callers always learn how many bytes the
//! instruction consumed.

use thiserror::Error;

pub mod ids;
pub mod imm;
pub mod insn;
pub mod matcher;
pub mod modrm;
pub mod operands;
pub mod reader;
pub mod tables;

mod evex;
mod fetch;
mod vex;
mod xop;

pub use ids::{IaOpcode, OpcodeInfo};
pub use insn::{Inst, MemBase, MemIndex, MemRef, Rep, SrcReg};
pub use matcher::{find_opcode, OpcodeEntry, OpcodeGroup};
pub use tables::TableSet;

/// The byte window ended before the instruction did.
///
/// Nothing about the bytes seen so far is wrong; the caller should widen the
/// window (up to the 15-byte limit) and decode again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("instruction truncated by end of fetch window")]
pub struct Truncated;

/// Why a structurally complete instruction is undefined.
///
/// Recorded on the returned [`Inst`] next to the error sentinel id; decode
/// itself still succeeds so the consumed length stays observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalEncoding {
    #[error("no opcode matches the decoded fields")]
    Opcode,
    #[error("LOCK prefix on a non-lockable form")]
    LockPrefix,
    #[error("vvvv must be zero for this opcode")]
    Vvvv,
    #[error("legacy 66/F2/F3 prefix before a VEX/EVEX/XOP prefix")]
    SsePrefix,
    #[error("REX prefix before a VEX/EVEX/XOP prefix")]
    RexPrefix,
    #[error("reserved opcode map selector")]
    OpcodeMap,
    #[error("reserved EVEX bits set")]
    EvexReservedBits,
    #[error("vector length above 512 bits")]
    VectorLength,
    #[error("VSIB addressing requires a 32- or 64-bit address size")]
    VsibAddressSize,
    #[error("VSIB addressing without an index register")]
    VsibIndex,
    #[error("opmask register index above 7")]
    KmaskRegister,
    #[error("zero-masking with an opmask source or destination")]
    ZeroMaskingKmask,
    #[error("zero-masking with a gather/scatter operand")]
    ZeroMaskingVsib,
    #[error("zero-masking with a memory destination")]
    ZeroMaskingMemory,
    #[error("zero-masking without an opmask register")]
    ZeroMaskingNoKmask,
}
