#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use bytering::{OverflowError, RingBuffer};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Write(Vec<u8>),
    Read(u16),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u16,
    ops: Vec<Op>,
}

/// Drive the ring and a `VecDeque` model with the same operations and panic
/// on the first disagreement.
fn ring(input: Input) {
    let capacity = usize::from(input.capacity);
    let Ok(mut ring) = RingBuffer::new(capacity) else {
        assert_eq!(capacity, 0);
        return;
    };
    let mut model = VecDeque::<u8>::new();

    for op in input.ops {
        match op {
            Op::Write(data) => {
                let free = capacity - 1 - model.len();
                match ring.write(&data) {
                    Ok(n) => {
                        assert!(data.len() <= free);
                        assert_eq!(n, data.len());
                        model.extend(&data);
                    }
                    Err(err) => {
                        assert_eq!(
                            err,
                            OverflowError {
                                requested: data.len(),
                                available: free,
                            }
                        );
                    }
                }
            }
            Op::Read(n) => {
                let mut buf = vec![0u8; usize::from(n)];
                let expected: Vec<u8> = model.drain(..buf.len().min(model.len())).collect();
                let got = ring.read(&mut buf);
                assert_eq!(&buf[..got], &expected[..]);
            }
            Op::Clear => {
                ring.clear();
                model.clear();
            }
        }

        assert_eq!(ring.len(), model.len());
        let (front, back) = ring.as_slices();
        assert!(front.iter().chain(back).eq(model.iter()));
    }
}

fuzz_target!(|input: Input| ring(input));
