use islice::{aslice, ASlice, allocator::alloc::Global};

fn main() {
    println!("capacity without elements:");
    let a = ASlice::<i32, Global>::with_capacity(5);
    println!("  len={} capacity={}", a.len(), a.capacity());
    for i in 0 .. a.capacity() {
        if let Err(err) = a.get(i) { println!("  get({i}): {err}") }
    }

    println!("from values:");
    let b : ASlice<i32, Global> = aslice![1, 2, 3, 4, 5].expect("out of memory");
    b.print();

    println!("move only:");
    let mut sources = [Some(Box::new(1)), Some(Box::new(2)), Some(Box::new(3))];
    let c = ASlice::<Box<i32>, Global>::from_iter(sources.iter_mut().map(|s| s.take().expect("source already moved")));
    println!("  sources afterwards: {sources:?}");
    c.print();

    println!("subslice(1, 4):");
    let d = b.subslice(1, 4).expect("in range");
    d.print();

    println!("subslice(2, 2):");
    match b.subslice(2, 2) {
        Ok(v)       => v.print(),
        Err(err)    => println!("  {err}"),
    }
}
