use islice::{ASlice, allocator::{alloc::Global, debug::Counting}};

use std::cell::Cell;

thread_local! { static LIVE : Cell<usize> = const { Cell::new(0) }; }

/// Panics when cloned with `value == 13`.
struct Probe { value: u32 }
impl Probe { fn new(value: u32) -> Self { LIVE.with(|l| l.set(l.get() + 1)); Self { value } } }
impl Drop for Probe { fn drop(&mut self) { LIVE.with(|l| l.set(l.get() - 1)) } }
impl Clone for Probe {
    fn clone(&self) -> Self {
        if self.value == 13 { panic!("probe {} refuses to be cloned", self.value) }
        Self::new(self.value)
    }
}

fn live() -> usize { LIVE.with(|l| l.get()) }

fn main() {
    let counting = Counting::new(Global);

    let parsed = ASlice::<u32, _>::try_from_fallible_iter_in(["1", "2", "three", "4"].map(str::parse::<u32>), &counting);
    match parsed {
        Ok(s)       => println!("parsed {} values", s.len()),
        Err(err)    => println!("parse failed: {err}"),
    }
    println!("outstanding allocations: {}", counting.outstanding());

    let sources = [Probe::new(1), Probe::new(2), Probe::new(13), Probe::new(4)];
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| ASlice::<Probe, _>::try_from_slice_in(&sources, &counting)));
    println!("clone panicked: {}", r.is_err());
    println!("live probes: {} (sources only)", live());
    println!("outstanding allocations: {}", counting.outstanding());
    assert_eq!(live(), sources.len());
    assert_eq!(counting.outstanding(), 0);
}
