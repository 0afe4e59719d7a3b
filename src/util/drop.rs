//! Instrumented element types for testing construction and destruction paths.
#![cfg(test)]

use alloc::vec::Vec;

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;



std::thread_local! {
    static TESTER_COUNTS    : [Cell<usize>; 256] = [(); 256].map(|_| Cell::new(0));
    static CLONES_UNTIL_PANIC : Cell<Option<usize>> = const { Cell::new(None) };
    static DROP_ORDER       : RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Counts live instances per `data` value (thread local, so parallel tests don't interfere.)
///
/// Cloning can be rigged to panic via [`Tester::panic_after_clones`].
#[derive(Debug)] pub struct Tester {
    data: u8,
    _phantom: PhantomData<*const ()>,
}

impl Tester {
    pub fn new(data: u8) -> Self { TESTER_COUNTS.with(|tc| tc[data as usize].set(tc[data as usize].get() + 1)); Self { data, _phantom: PhantomData } }
    pub fn get(&self) -> u8 { self.data }
    pub fn counts() -> [usize; 256] { TESTER_COUNTS.with(|tc| tc.clone().map(|c| c.get())) }
    pub fn live() -> usize { Self::counts().iter().sum() }

    /// `data` of every `Tester` dropped on this thread since the last call, oldest first.
    pub fn take_drop_order() -> Vec<u8> { DROP_ORDER.with(|d| core::mem::take(&mut *d.borrow_mut())) }

    /// The next `n` clones succeed, the one after panics.  `None` disarms.
    pub fn panic_after_clones(n: Option<usize>) { CLONES_UNTIL_PANIC.with(|c| c.set(n)) }
}

impl core::ops::Deref for Tester {
    type Target = u8;
    fn deref(&self) -> &u8 { &self.data }
}

impl Drop for Tester {
    fn drop(&mut self) {
        DROP_ORDER.with(|d| d.borrow_mut().push(self.data));
        let data = self.data as usize;
        TESTER_COUNTS.with(|tc| tc[data].set(tc[data].get().checked_sub(1).expect("count went negative, a util::drop::Tester was presumably dropped multiple times")))
    }
}

impl Clone for Tester {
    fn clone(&self) -> Self {
        CLONES_UNTIL_PANIC.with(|c| match c.get() {
            Some(0) => { c.set(None); panic!("Tester::clone rigged to panic") },
            Some(n) => c.set(Some(n-1)),
            None    => {},
        });
        Self::new(self.data)
    }
}

impl Default for Tester {
    fn default() -> Self { Self::new(0) }
}



/// Can be moved (and taken from, leaving `0` behind), but not cloned.
#[derive(Debug, Default, PartialEq, Eq)] pub struct MoveOnly(pub u32);

impl MoveOnly {
    pub fn is_moved_from(&self) -> bool { self.0 == 0 }
    pub fn take(&mut self) -> Self { core::mem::take(self) }
}



/// Cloneable, and counts how many clones were made of it.
#[derive(Debug)] pub struct CloneOnly {
    pub value:  u32,
    clones:     Cell<usize>,
}

impl CloneOnly {
    pub fn new(value: u32) -> Self { Self { value, clones: Cell::new(0) } }
    pub fn clones(&self) -> usize { self.clones.get() }
}

impl Clone for CloneOnly {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self::new(self.value)
    }
}
