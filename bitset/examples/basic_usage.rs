use bitset::{BitSet, BitSetError, byte_len};

fn main() {
    println!("=== BitSet Examples ===\n");

    // Example 1: Single-bit flags
    let _ = example_flags();

    // Example 2: Packing a value across byte boundaries
    let _ = example_bit_packing();

    // Example 3: Growing a buffer with zeroed tails
    let _ = example_resize();
}

fn example_flags() -> Result<(), BitSetError> {
    println!("Example 1: Tracking free slots in a pool");

    let slots = 20;
    let mut free = BitSet::zeroed(slots)?;

    // Mark every slot free, then claim a few.
    for i in 0..slots {
        free.set(i, true);
    }
    free.set(3, false);
    free.set(11, false);
    free.set(12, false);

    let free_count = (0..slots).filter(|&i| free.get(i)).count();
    println!("  {} of {} slots free", free_count, slots);
    println!("  Slot 3 free: {}", free.get(3));
    println!("  Slot 4 free: {}", free.get(4));

    // Release everything between 10 and 15 in one call.
    free.clear_range(10, 15);
    println!("  Cleared bits [10, 15), slot 11 free: {}", free.get(11));
    println!();

    Ok(())
}

fn example_bit_packing() -> Result<(), BitSetError> {
    println!("Example 2: Writing a 12-bit field at an odd bit offset");

    let mut bits = BitSet::zeroed(32)?;

    // A 12-bit sensor reading, low byte first.
    let reading: u16 = 0xB66;
    let src = reading.to_le_bytes();

    bits.write_bits(5, &src, 12);

    let mut out = [0u8; 2];
    bits.read_bits(5, &mut out, 12);
    let restored = u16::from_le_bytes(out);

    println!("  Wrote  0x{:03X} at bit 5", reading);
    println!("  Buffer bytes: {:02X?}", bits.as_bytes());
    println!("  Read back:    0x{:03X}", restored);
    println!();

    Ok(())
}

fn example_resize() -> Result<(), BitSetError> {
    println!("Example 3: Growing and shrinking");

    let mut bits = BitSet::zeroed(10)?;
    bits.set(7, true);
    println!(
        "  Start: {} bits in {} bytes",
        bits.len(),
        bits.byte_count()
    );

    let delta = bits.resize_zeroed(100)?;
    println!(
        "  Grew to {} bits ({} bytes, delta {})",
        bits.len(),
        bits.byte_count(),
        delta
    );
    println!("  Bit 7 survived: {}", bits.get(7));
    println!("  Bit 99 is zero: {}", !bits.get(99));

    let delta = bits.resize(4)?;
    println!(
        "  Shrank to {} bits ({} bytes, delta {})",
        bits.len(),
        bits.byte_count(),
        delta
    );
    println!("  byte_len(100) = {}", byte_len(100));

    Ok(())
}
