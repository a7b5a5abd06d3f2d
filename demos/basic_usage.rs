// demos/basic_usage.rs
//! Basic usage of the buffer operations

use bufops::prelude::*;

fn main() -> Result<()> {
    println!("=== Unsigned Accessors ===\n");

    let mut buf = Buffer::allocate(16);

    put_unsigned(&mut buf, 0xFF)?;
    put_unsigned_short(&mut buf, 0xFFFF)?;
    put_unsigned_int(&mut buf, 0xFFFF_FFFF)?;

    println!("Buffer position: {}", buf.position());
    println!("Buffer limit: {}", buf.limit());

    buf.flip();
    println!("Read u8: {}", get_unsigned(&mut buf)?);
    println!("Read u16: {}", get_unsigned_short(&mut buf)?);
    println!("Read u32: {}", get_unsigned_int(&mut buf)?);

    println!("\n=== Truncating Writes ===\n");

    let mut small = Buffer::allocate(2);
    put_unsigned_short_at(&mut small, 0, 0x0001_2345)?;
    println!("Wrote 0x12345 as a short: {:02X?}", small.as_slice());

    println!("\n=== Absolute Bulk Copies ===\n");

    let mut frame = Buffer::allocate(8);
    put_range(&mut frame, b"--hello--", 2, 1, 5)?;
    println!("Frame: {:?}", String::from_utf8_lossy(frame.as_slice()));

    let mut word = [0u8; 5];
    get(&frame, &mut word, 1)?;
    println!("Copied back: {:?}", String::from_utf8_lossy(&word));
    println!("Cursor still at: {}", frame.position());

    println!("\n=== Little-Endian Buffer ===\n");

    let mut le = Buffer::allocate(4).with_order(ByteOrder::LittleEndian);
    put_unsigned_int(&mut le, 0xDEAD_BEEF)?;
    println!("Bytes: {:02X?}", le.as_slice());

    println!("\n=== Bounds Checking ===\n");

    match get_unsigned_int_at(&frame, 6) {
        Ok(v) => println!("Unexpected value: {}", v),
        Err(e) => println!("Rejected: {}", e),
    }

    frame.burn();
    println!("Burned frame: {:?}", frame.as_slice());

    Ok(())
}
