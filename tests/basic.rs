use bytefifo::{ByteFifo, FifoSettings, Heap, InitError, MAX_CAPACITY};

#[test]
fn serial_rx_roundtrip() {
    let mut rx = [0u8; 16];
    let mut fifo = ByteFifo::new(&mut rx[..], 16).expect("fifo");

    // an interrupt handler would do this one byte at a time
    for &b in b"AT+OK\r\n" {
        if !fifo.is_full() {
            fifo.write(b);
        }
    }
    assert_eq!(fifo.fill_count(), 7);
    assert_eq!(fifo.free_space(), 9);

    let mut line = Vec::new();
    while !fifo.is_empty() {
        let b = fifo.read();
        if b == b'\n' {
            break;
        }
        line.push(b);
    }
    assert_eq!(&line, b"AT+OK\r");
    assert!(fifo.is_empty());
}

#[test]
fn storage_tail_beyond_capacity_is_untouched() {
    let mut mem = [0xAAu8; 12];
    {
        let mut fifo = ByteFifo::new(&mut mem[..], 8).expect("fifo");
        for i in 0..1000u32 {
            fifo.write(i as u8);
            if fifo.fill_count() > 5 {
                fifo.read();
            }
        }
        fifo.reset();
        assert!(fifo.is_empty());
    }
    assert_eq!(&mem[8..], &[0xAA; 4]);
}

#[test]
fn heap_allocated_control_block() {
    let mut fifo = ByteFifo::allocate(FifoSettings {
        allocator: Heap,
        storage: vec![0u8; 64],
        capacity: 32,
    })
    .expect("allocate");

    for b in 0..32u8 {
        fifo.write(b);
    }
    assert!(fifo.is_full());
    assert_eq!(fifo.peek(31), 31);

    let storage = fifo.into_storage();
    assert_eq!(storage.len(), 64);
    assert_eq!(&storage[..4], &[0, 1, 2, 3]);
}

#[test]
fn both_constructors_share_diagnostics() {
    assert_eq!(
        ByteFifo::new([0u8; 8], 6).unwrap_err(),
        InitError::InvalidArguments
    );
    let allocated = ByteFifo::allocate(FifoSettings {
        allocator: Heap,
        storage: [0u8; 8],
        capacity: 6,
    });
    assert_eq!(allocated.unwrap_err(), InitError::InvalidArguments);
}

#[test]
fn static_slot_without_heap() {
    let mut slot: Option<ByteFifo<[u8; 8]>> = None;
    let fifo = ByteFifo::allocate(FifoSettings {
        allocator: &mut slot,
        storage: [0u8; 8],
        capacity: 8,
    })
    .expect("allocate");
    fifo.write(42);
    assert_eq!(fifo.try_read(), Some(42));
    assert_eq!(fifo.try_read(), None);
}

#[test]
fn largest_capacity_accepted() {
    let fifo = ByteFifo::new(vec![0u8; MAX_CAPACITY as usize], MAX_CAPACITY).expect("fifo");
    assert_eq!(fifo.capacity(), MAX_CAPACITY);
    assert_eq!(fifo.free_space(), MAX_CAPACITY);
}
