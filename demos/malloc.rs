use islice::{aslice, ASlice, allocator::c::Malloc};
use core::mem::MaybeUninit;

fn main() {
    let empty = ASlice::<u32, Malloc>::new();
    assert_eq!(empty.capacity(), 0);

    let mut s = ASlice::<u32, Malloc>::with_capacity(32);
    for (i, slot) in s.spare_capacity_mut().iter_mut().enumerate() { *slot = MaybeUninit::new(i as u32); }
    // SAFETY: ✔️ all 32 slots were just written
    unsafe { s.set_len(32) };
    assert_eq!(s[31], 31);

    let zeroed = ASlice::<f32, Malloc>::new_zeroed(4);
    zeroed.print();

    let names = aslice![in Malloc; String::from("alpha"), String::from("beta")].expect("out of memory");
    names.print();
}
