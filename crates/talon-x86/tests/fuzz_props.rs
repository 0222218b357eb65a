#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use talon_types::{CpuFeatures, Mode, MAX_INSN_LEN};
use talon_x86::TableSet;

mod common;
use common::XorShift64;

fn decode_inputs() -> impl Strategy<Value = (Mode, Vec<u8>)> {
    let mode = prop_oneof![Just(Mode::Bits16), Just(Mode::Bits32), Just(Mode::Bits64)];
    (mode, proptest::collection::vec(any::<u8>(), 1..=18))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 4096,
        .. ProptestConfig::default()
    })]

    #[test]
    fn decode_is_total_and_self_delimiting((mode, bytes) in decode_inputs()) {
        let tables = TableSet::new(CpuFeatures::all());

        if let Ok(inst) = tables.decode(mode, &bytes) {
            let len = inst.len as usize;
            prop_assert!(len >= 1, "len={} mode={:?} bytes={:02x?}", len, mode, bytes);
            prop_assert!(
                len <= bytes.len().min(MAX_INSN_LEN),
                "len={} mode={:?} bytes={:02x?}",
                len,
                mode,
                bytes
            );

            // decoding exactly the consumed bytes reproduces the instruction
            let again = tables
                .decode(mode, &bytes[..len])
                .expect("prefix of a decoded instruction decodes");
            prop_assert_eq!(&inst, &again, "mode={:?} bytes={:02x?}", mode, bytes);
        }
    }

    #[test]
    fn trailing_bytes_never_change_a_decoded_instruction(
        (mode, bytes) in decode_inputs(),
        junk in proptest::collection::vec(any::<u8>(), 1..=8),
    ) {
        let tables = TableSet::new(CpuFeatures::all());

        if let Ok(inst) = tables.decode(mode, &bytes) {
            let mut extended = bytes.clone();
            extended.extend_from_slice(&junk);
            let again = tables
                .decode(mode, &extended)
                .expect("extended buffer still decodes");
            prop_assert_eq!(&inst, &again, "mode={:?} bytes={:02x?} junk={:02x?}", mode, bytes, junk);
        }
    }
}

#[test]
fn random_sweep_stays_in_bounds() {
    let tables = TableSet::new(CpuFeatures::all());
    let mut rng = XorShift64(0x9E3779B97F4A7C15);
    let mut buf = [0u8; MAX_INSN_LEN];

    for _ in 0..65_536 {
        rng.fill(&mut buf);
        for mode in [Mode::Bits16, Mode::Bits32, Mode::Bits64] {
            if let Ok(inst) = tables.decode(mode, &buf) {
                assert!(
                    (1..=MAX_INSN_LEN).contains(&(inst.len as usize)),
                    "len={} mode={:?} bytes={:02x?}",
                    inst.len,
                    mode,
                    buf
                );
            }
        }
    }
}
