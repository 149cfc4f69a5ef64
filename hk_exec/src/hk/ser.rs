//! Downlink packet serialisation
//!
//! The packet is `NUM_PARAMS` records in ascending parameter order, each one
//! being the value as a big endian u32 followed by the validity byte (`0x01`
//! or `0x00`). There is no header, timestamp, length or checksum. Ground
//! decoders depend on this layout.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use byteorder::{BigEndian, ByteOrder};

use super::{HkError, TelemetryTable, HK_ENTRY_SIZE, HK_PACKET_SIZE};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Pack the table into the start of `buffer`.
///
/// Returns the number of bytes written, always `HK_PACKET_SIZE`. If the buffer
/// is too small nothing is written.
pub fn serialize(table: &TelemetryTable, buffer: &mut [u8]) -> Result<usize, HkError> {
    if buffer.len() < HK_PACKET_SIZE {
        return Err(HkError::BufferTooSmall {
            required: HK_PACKET_SIZE,
            available: buffer.len()
        });
    }

    for (record, entry) in buffer[..HK_PACKET_SIZE]
        .chunks_exact_mut(HK_ENTRY_SIZE)
        .zip(table.entries().iter())
    {
        BigEndian::write_u32(&mut record[0..4], entry.value);
        record[4] = entry.valid as u8;
    }

    Ok(HK_PACKET_SIZE)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hk::ParamId;

    #[test]
    fn test_packs_multiple_params() -> Result<(), HkError> {
        let mut table = TelemetryTable::new();
        let mut buffer = [0xAAu8; HK_PACKET_SIZE];

        // 3700 = 0x00000E74, 25 = 0x00000019
        table.update(ParamId::BattVoltage, 3700, 100)?;
        table.update(ParamId::BattTemp, 25, 100)?;

        assert_eq!(serialize(&table, &mut buffer)?, HK_PACKET_SIZE);

        assert_eq!(buffer[0..5], [0x00u8, 0x00, 0x0E, 0x74, 0x01]);
        assert_eq!(buffer[5..10], [0x00u8, 0x00, 0x00, 0x19, 0x01]);

        // Untouched parameters are zero and invalid
        assert!(buffer[10..].iter().all(|b| *b == 0));

        Ok(())
    }

    #[test]
    fn test_byte_order_and_position() -> Result<(), HkError> {
        let mut table = TelemetryTable::new();
        table.update(ParamId::CpuLoad, 0x1234_5678, 1)?;

        let mut buffer = vec![0u8; HK_PACKET_SIZE + 3];
        assert_eq!(serialize(&table, &mut buffer)?, HK_PACKET_SIZE);

        assert_eq!(buffer[20..25], [0x12u8, 0x34, 0x56, 0x78, 0x01]);

        // Bytes past the packet are not touched
        assert_eq!(buffer[HK_PACKET_SIZE..], [0u8; 3]);

        Ok(())
    }

    #[test]
    fn test_buffer_too_small_writes_nothing() {
        let mut table = TelemetryTable::new();
        table.update(ParamId::BattVoltage, 3700, 100).unwrap();

        let mut buffer = [0xAAu8; HK_PACKET_SIZE - 1];
        assert_eq!(
            serialize(&table, &mut buffer),
            Err(HkError::BufferTooSmall {
                required: HK_PACKET_SIZE,
                available: HK_PACKET_SIZE - 1
            })
        );
        assert!(buffer.iter().all(|b| *b == 0xAA));

        assert!(serialize(&table, &mut []).is_err());
    }

    #[test]
    fn test_timestamps_not_packed() -> Result<(), HkError> {
        let mut a = TelemetryTable::new();
        let mut b = TelemetryTable::new();
        a.update(ParamId::Altitude, 408, 1)?;
        b.update(ParamId::Altitude, 408, 9999)?;

        let mut buf_a = [0u8; HK_PACKET_SIZE];
        let mut buf_b = [0u8; HK_PACKET_SIZE];
        serialize(&a, &mut buf_a)?;
        serialize(&b, &mut buf_b)?;

        assert_eq!(buf_a, buf_b);

        Ok(())
    }
}
