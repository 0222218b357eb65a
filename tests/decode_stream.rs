//! End-to-end decode of multi-instruction byte streams through the
//! published crate surface.

use talon_types::{CpuFeatures, Mode, SegReg};
use talon_x86::{IaOpcode, TableSet};

fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let mut stream = Vec::new();
    for part in parts {
        stream.extend_from_slice(part);
    }
    stream
}

#[test]
fn long_mode_stream_decodes_back_to_back() {
    let program: &[&[u8]] = &[
        &[0x48, 0x01, 0xC0],                                       // add rax, rax
        &[0x41, 0x50],                                             // push r8
        &[0x49, 0xB8, 1, 2, 3, 4, 5, 6, 7, 8],                     // mov r8, imm64
        &[0xF3, 0x90],                                             // pause
        &[0x65, 0x8B, 0x00],                                       // mov eax, gs:[rax]
        &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0],                     // vaddps zmm0, zmm0, zmm0
        &[0xC5, 0xF8, 0x77],                                       // vzeroupper
        &[0x0F, 0x05],                                             // syscall
    ];
    let stream = concat(program);
    let tables = TableSet::new(CpuFeatures::all());

    let mut ids = Vec::new();
    let mut offset = 0;
    while offset < stream.len() {
        let inst = tables
            .decode(Mode::Bits64, &stream[offset..])
            .expect("decode");
        assert_eq!(inst.fault, None, "offset {offset}");
        ids.push(inst.id);
        offset += inst.len as usize;
    }

    assert_eq!(offset, stream.len());
    assert_eq!(
        ids,
        vec![
            IaOpcode::Add_EqGq,
            IaOpcode::Push_Eq,
            IaOpcode::Mov_RRXIq,
            IaOpcode::Pause,
            IaOpcode::Mov_Op64_GdEd,
            IaOpcode::V512_Vaddps_VpsHpsWps,
            IaOpcode::Vzeroupper,
            IaOpcode::Syscall,
        ]
    );
}

#[test]
fn stream_lengths_agree_with_the_reference_decoder() {
    let stream = concat(&[
        &[0x48, 0x01, 0xC0],
        &[0x41, 0x50],
        &[0x49, 0xB8, 1, 2, 3, 4, 5, 6, 7, 8],
        &[0xF3, 0x90],
        &[0x65, 0x8B, 0x00],
        &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0],
        &[0xC5, 0xF8, 0x77],
        &[0x0F, 0x05],
    ]);
    let tables = TableSet::new(CpuFeatures::all());

    let mut offset = 0;
    while offset < stream.len() {
        let inst = tables
            .decode(Mode::Bits64, &stream[offset..])
            .expect("decode");

        let mut decoder = iced_x86::Decoder::with_ip(
            64,
            &stream[offset..],
            offset as u64,
            iced_x86::DecoderOptions::NONE,
        );
        let reference = decoder.decode();
        assert!(!reference.is_invalid(), "offset {offset}");
        assert_eq!(inst.len as usize, reference.len(), "offset {offset}");

        offset += inst.len as usize;
    }
    assert_eq!(offset, stream.len());
}

#[test]
fn sixteen_bit_stream_decodes_back_to_back() {
    let stream = concat(&[
        &[0x66, 0x01, 0xC0], // add eax, eax
        &[0x01, 0xC0],       // add ax, ax
        &[0xCD, 0x03],       // int 3
    ]);
    let tables = TableSet::new(CpuFeatures::all());

    let mut ids = Vec::new();
    let mut offset = 0;
    while offset < stream.len() {
        let inst = tables
            .decode(Mode::Bits16, &stream[offset..])
            .expect("decode");
        assert_eq!(inst.fault, None, "offset {offset}");
        ids.push(inst.id);
        offset += inst.len as usize;
    }

    assert_eq!(
        ids,
        vec![IaOpcode::Add_EdGd, IaOpcode::Add_EwGw, IaOpcode::Int_Ib]
    );
}

#[test]
fn segment_state_survives_the_crate_boundary() {
    let tables = TableSet::new(CpuFeatures::all());
    let inst = tables
        .decode(Mode::Bits64, &[0x65, 0x8B, 0x00])
        .expect("decode");
    assert_eq!(inst.seg, SegReg::Gs);
    assert_eq!(inst.seg_override, Some(SegReg::Gs));
}

#[test]
fn every_single_byte_input_is_handled() {
    let tables = TableSet::new(CpuFeatures::all());
    for b in 0u8..=255 {
        for mode in [Mode::Bits16, Mode::Bits32, Mode::Bits64] {
            if let Ok(inst) = tables.decode(mode, &[b]) {
                assert_eq!(inst.len, 1, "byte {b:#04x} mode {mode:?}");
            }
        }
    }
}
