//! Length and validity agreement against the iced-x86 reference decoder.
//!
//! The corpus is curated rather than random: iced carries ISA extensions
//! these tables do not, so arbitrary byte strings are expected to
//! disagree and would only test the corpus generator.

use iced_x86::{Decoder, DecoderOptions};
use talon_types::{CpuFeatures, Mode};
use talon_x86::{IaOpcode, TableSet};

fn bitness(mode: Mode) -> u32 {
    match mode {
        Mode::Bits16 => 16,
        Mode::Bits32 => 32,
        Mode::Bits64 => 64,
    }
}

fn iced_decode(mode: Mode, bytes: &[u8]) -> iced_x86::Instruction {
    let mut decoder = Decoder::with_ip(bitness(mode), bytes, 0, DecoderOptions::NONE);
    decoder.decode()
}

/// Byte strings both decoders accept.
const VALID: &[(Mode, &[u8])] = &[
    (Mode::Bits64, &[0x48, 0x01, 0xC0]),
    (Mode::Bits64, &[0x41, 0x90]),
    (Mode::Bits64, &[0x48, 0x90]),
    (Mode::Bits64, &[0xF0, 0x01, 0x00]),
    (Mode::Bits32, &[0x66, 0x01, 0xC0]),
    (Mode::Bits32, &[0x05, 0x78, 0x56, 0x34, 0x12]),
    (Mode::Bits64, &[0x49, 0xB8, 1, 2, 3, 4, 5, 6, 7, 8]),
    (Mode::Bits32, &[0xF3, 0xA4]),
    (Mode::Bits32, &[0xF7, 0xD8]),
    (Mode::Bits32, &[0xD8, 0xC1]),
    (Mode::Bits64, &[0xD9, 0xD0]),
    (Mode::Bits32, &[0xA1, 0x78, 0x56, 0x34, 0x12]),
    (Mode::Bits64, &[0xA1, 1, 2, 3, 4, 5, 6, 7, 8]),
    (Mode::Bits64, &[0x65, 0x8B, 0x00]),
    (Mode::Bits64, &[0x63, 0xC8]),
    (Mode::Bits64, &[0x0F, 0xBC, 0xC1]),
    (Mode::Bits64, &[0x0F, 0x05]),
    (Mode::Bits32, &[0x0F, 0x80, 0x78, 0x56, 0x34, 0x12]),
    (Mode::Bits16, &[0x01, 0xC0]),
    (Mode::Bits16, &[0x66, 0x01, 0xC0]),
    (Mode::Bits32, &[0x8F, 0xC0]),
    (Mode::Bits64, &[0x8F, 0xC0]),
    (Mode::Bits32, &[0xC5, 0xF8, 0x77]),
    (Mode::Bits32, &[0xC4, 0xE1, 0x78, 0x10, 0xC1]),
    (Mode::Bits64, &[0xC5, 0xFC, 0x11, 0xC8]),
    (Mode::Bits32, &[0xC5, 0x06, 0x78, 0x56, 0x34, 0x12]),
    (Mode::Bits32, &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0]),
    (Mode::Bits64, &[0x62, 0x51, 0x7C, 0x48, 0x58, 0xD4]),
    (Mode::Bits32, &[0x8F, 0xE8, 0x78, 0xC0, 0xC1, 0x07]),
];

/// Byte strings both decoders reject.
const INVALID: &[(Mode, &[u8])] = &[
    (Mode::Bits64, &[0xF0, 0x90]),
    (Mode::Bits32, &[0x0F, 0x04]),
    (Mode::Bits64, &[0x62, 0x00, 0x00, 0x00, 0x00]),
    (Mode::Bits32, &[0xC5, 0xF0, 0x77]),
    (Mode::Bits64, &[0x66, 0xC5, 0xF8, 0x77]),
];

#[test]
fn curated_corpus_lengths_agree() {
    let tables = TableSet::new(CpuFeatures::all());
    for &(mode, bytes) in VALID {
        let inst = tables.decode(mode, bytes).expect("decode");
        assert_ne!(
            inst.id,
            IaOpcode::Error,
            "rejected valid bytes mode={mode:?} bytes={bytes:02x?} fault={:?}",
            inst.fault
        );
        assert_eq!(inst.fault, None, "mode={mode:?} bytes={bytes:02x?}");

        let reference = iced_decode(mode, bytes);
        assert!(
            !reference.is_invalid(),
            "reference rejected corpus entry mode={mode:?} bytes={bytes:02x?}"
        );
        assert_eq!(
            inst.len as usize,
            reference.len(),
            "length mismatch mode={mode:?} bytes={bytes:02x?} id={:?}",
            inst.id
        );
    }
}

#[test]
fn curated_corpus_rejections_agree() {
    let tables = TableSet::new(CpuFeatures::all());
    for &(mode, bytes) in INVALID {
        let inst = tables.decode(mode, bytes).expect("decode");
        assert_eq!(
            inst.id,
            IaOpcode::Error,
            "accepted bad bytes mode={mode:?} bytes={bytes:02x?}"
        );
        assert!(inst.fault.is_some(), "mode={mode:?} bytes={bytes:02x?}");

        let reference = iced_decode(mode, bytes);
        assert!(
            reference.is_invalid(),
            "reference accepted bad bytes mode={mode:?} bytes={bytes:02x?}"
        );
    }
}
