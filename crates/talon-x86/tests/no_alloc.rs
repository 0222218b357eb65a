#![cfg(not(target_arch = "wasm32"))]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use talon_types::{CpuFeatures, Mode};
use talon_x86::{IaOpcode, TableSet};

struct CountingAlloc;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    // libtest runs each `#[test]` in its own thread, and the harness may
    // allocate concurrently on other threads (result reporting, output capture,
    // etc.). We only want to count allocations performed by the decoder on the
    // current test thread.
    static COUNT_ALLOC: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && COUNT_ALLOC.with(|c| c.get()) {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

#[test]
fn decode_does_not_allocate_per_instruction() {
    let tables = TableSet::new(CpuFeatures::all());
    let legacy = [0x48, 0x01, 0xC0]; // add rax, rax
    let evex = [0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC0]; // vaddps zmm0, zmm0, zmm0

    // Warm-up: allow any one-time allocations (e.g., lazy init in the
    // runtime) to happen before we begin counting.
    let _ = tables.decode(Mode::Bits64, &legacy).expect("warmup decode");

    ALLOCATIONS.store(0, Ordering::Relaxed);
    COUNT_ALLOC.with(|c| c.set(true));

    for _ in 0..10_000 {
        let inst = tables.decode(Mode::Bits64, &legacy).expect("decode");
        assert_eq!(inst.id, IaOpcode::Add_EqGq);
        assert_eq!(inst.len, 3);

        let inst = tables.decode(Mode::Bits64, &evex).expect("decode");
        assert_eq!(inst.len, 6);
    }

    COUNT_ALLOC.with(|c| c.set(false));

    assert_eq!(
        ALLOCATIONS.load(Ordering::Relaxed),
        0,
        "decoder allocated during hot-path decode"
    );
}
