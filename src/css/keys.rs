// css/keys.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Implements the record types for key material fetched from the drive. Once
// a bus key has been agreed during authentication, the drive obfuscates the
// disc key block and title keys it reports by XORing them with the bus key;
// these records undo that and hand the payloads to the ciphers.

use crate::css::{crypto, CSSError, KEY_SIZE};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

/// Size in bytes of the drive's disc key report.
pub const DISC_KEY_RESPONSE_SIZE: usize = 2052;
/// Size in bytes of the drive's title key report.
pub const TITLE_KEY_RESPONSE_SIZE: usize = 12;

#[derive(Debug)]
/// The disc key block reported by the drive, with the bus key obfuscation
/// removed. Holds the 409 encrypted 5-byte slots the recovery trial runs
/// against.
pub struct DiscKeyRecord {
    pub data_length: u16,
    reserved: [u8; 2],
    pub key_data: [u8; 2048],
}

#[derive(Debug)]
/// One title key reported by the drive, with the bus key obfuscation
/// removed. The key is still encrypted under the disc key.
pub struct TitleKeyRecord {
    pub data_length: u16,
    reserved1: [u8; 2],
    pub cmi: u8,
    pub key: [u8; 5],
    reserved2: [u8; 2],
}

// Undo the drive's bus key obfuscation: each payload byte is XORed with the
// bus key cycled back to front.
fn unscramble(payload: &mut [u8], bus_key: &[u8; 5]) {
    for (i, byte) in payload.iter_mut().enumerate() {
        *byte ^= bus_key[4 - (i % KEY_SIZE)];
    }
}

/// Creates a DiscKeyRecord from a raw 2052-byte READ DISC KEY response and
/// the session bus key.
pub fn decode_disc_key(response: &[u8], bus_key: &[u8; 5]) -> Result<DiscKeyRecord, CSSError> {
    if response.len() != DISC_KEY_RESPONSE_SIZE {
        return Err(CSSError::InvalidSize {
            size: response.len(),
            expected: DISC_KEY_RESPONSE_SIZE,
        });
    }
    let mut buf = Cursor::new(response);
    let data_length = buf.read_u16::<BigEndian>()?;
    let mut reserved = [0u8; 2];
    buf.read_exact(&mut reserved)?;
    let mut key_data = [0u8; 2048];
    buf.read_exact(&mut key_data)?;
    unscramble(&mut key_data, bus_key);
    Ok(DiscKeyRecord {
        data_length,
        reserved,
        key_data,
    })
}

/// Creates a TitleKeyRecord from a raw 12-byte REPORT KEY title key response
/// and the session bus key.
pub fn decode_title_key(response: &[u8], bus_key: &[u8; 5]) -> Result<TitleKeyRecord, CSSError> {
    if response.len() != TITLE_KEY_RESPONSE_SIZE {
        return Err(CSSError::InvalidSize {
            size: response.len(),
            expected: TITLE_KEY_RESPONSE_SIZE,
        });
    }
    let mut buf = Cursor::new(response);
    let data_length = buf.read_u16::<BigEndian>()?;
    let mut reserved1 = [0u8; 2];
    buf.read_exact(&mut reserved1)?;
    let cmi = buf.read_u8()?;
    let mut key = [0u8; 5];
    buf.read_exact(&mut key)?;
    let mut reserved2 = [0u8; 2];
    buf.read_exact(&mut reserved2)?;
    unscramble(&mut key, bus_key);
    Ok(TitleKeyRecord {
        data_length,
        reserved1,
        cmi,
        key,
        reserved2,
    })
}

impl DiscKeyRecord {
    /// Recovers the disc key from the key block by trial against the known
    /// player keys.
    pub fn recover_key(&self) -> Result<[u8; 5], CSSError> {
        crypto::decrypt_disc_key(&self.key_data)
            .ok_or_else(|| CSSError::KeyNotFound(hex::encode(&self.key_data[..KEY_SIZE])))
    }

    /// Dumps the record back into the raw response form, re-applying the bus
    /// key obfuscation. The XOR scheme is its own inverse.
    pub fn to_bytes(&self, bus_key: &[u8; 5]) -> Result<Vec<u8>, std::io::Error> {
        let mut buf: Vec<u8> = Vec::new();
        buf.write_u16::<BigEndian>(self.data_length)?;
        buf.write_all(&self.reserved)?;
        let mut key_data = self.key_data;
        unscramble(&mut key_data, bus_key);
        buf.write_all(&key_data)?;
        Ok(buf)
    }
}

impl TitleKeyRecord {
    /// Gets whether the title this key belongs to is scrambled at all.
    pub fn is_encrypted(&self) -> bool {
        self.cmi & 0x80 != 0
    }

    /// Decrypts the title key using the recovered disc key.
    pub fn dec_title_key(&self, disc_key: &[u8; 5]) -> [u8; 5] {
        crypto::decrypt_title_key(0xff, disc_key, &self.key)
    }

    /// Dumps the record back into the raw response form, re-applying the bus
    /// key obfuscation.
    pub fn to_bytes(&self, bus_key: &[u8; 5]) -> Result<Vec<u8>, std::io::Error> {
        let mut buf: Vec<u8> = Vec::new();
        buf.write_u16::<BigEndian>(self.data_length)?;
        buf.write_all(&self.reserved1)?;
        buf.write_u8(self.cmi)?;
        let mut key = self.key;
        unscramble(&mut key, bus_key);
        buf.write_all(&key)?;
        buf.write_all(&self.reserved2)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // The XOR scheme is its own inverse, so the encoder is the decoder's
    // unscramble run over the plain payload.
    fn encode_disc_key_response(payload: &[u8; 2048], bus_key: &[u8; 5]) -> Vec<u8> {
        let mut response = vec![0x08, 0x00, 0x00, 0x00];
        let mut scrambled = *payload;
        unscramble(&mut scrambled, bus_key);
        response.extend_from_slice(&scrambled);
        response
    }

    #[test]
    fn test_decode_disc_key_unscrambles_payload() {
        let bus_key = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut response = vec![0x08, 0x00, 0xaa, 0xbb];
        response.extend_from_slice(&[0u8; 2048]);
        let record = decode_disc_key(&response, &bus_key).unwrap();
        assert_eq!(record.data_length, 0x0800);
        for (i, byte) in record.key_data.iter().enumerate() {
            assert_eq!(*byte, bus_key[4 - (i % 5)]);
        }
        assert_eq!(&record.key_data[..5], &[0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_decode_disc_key_round_trips() {
        let bus_key = [0xde, 0xad, 0xbe, 0xef, 0x42];
        let mut payload = [0u8; 2048];
        for (i, byte) in payload.iter_mut().enumerate() {
            *byte = (i.wrapping_mul(31).wrapping_add(7)) as u8;
        }
        let response = encode_disc_key_response(&payload, &bus_key);
        let record = decode_disc_key(&response, &bus_key).unwrap();
        assert_eq!(record.key_data, payload);
        assert_eq!(record.to_bytes(&bus_key).unwrap(), response);
    }

    #[test]
    fn test_title_key_record_to_bytes_round_trips() {
        let bus_key = [0x11, 0x22, 0x33, 0x44, 0x55];
        let mut response = vec![0x00, 0x08, 0x00, 0x00, 0x80];
        for (i, byte) in [0x9f, 0x38, 0x6b, 0xd0, 0x4c].iter().enumerate() {
            response.push(byte ^ bus_key[4 - (i % 5)]);
        }
        response.extend_from_slice(&[0x00, 0x00]);
        let record = decode_title_key(&response, &bus_key).unwrap();
        assert_eq!(record.to_bytes(&bus_key).unwrap(), response);
    }

    #[test]
    fn test_decode_disc_key_rejects_bad_size() {
        let bus_key = [0u8; 5];
        assert!(matches!(
            decode_disc_key(&[0u8; 2048], &bus_key),
            Err(CSSError::InvalidSize { size: 2048, expected: 2052 })
        ));
    }

    #[test]
    fn test_disc_key_record_key_not_found() {
        let record = DiscKeyRecord {
            data_length: 0x0800,
            reserved: [0, 0],
            key_data: [0u8; 2048],
        };
        assert!(matches!(record.recover_key(), Err(CSSError::KeyNotFound(_))));
    }

    #[test]
    fn test_decode_title_key() {
        let bus_key = [0x01, 0x02, 0x03, 0x04, 0x05];
        let key = [0x9f, 0x38, 0x6b, 0xd0, 0x4c];
        let mut response = vec![0x00, 0x08, 0x00, 0x00, 0xc0];
        for (i, byte) in key.iter().enumerate() {
            response.push(byte ^ bus_key[4 - (i % 5)]);
        }
        response.extend_from_slice(&[0x00, 0x00]);
        let record = decode_title_key(&response, &bus_key).unwrap();
        assert_eq!(record.data_length, 0x0008);
        assert_eq!(record.cmi, 0xc0);
        assert!(record.is_encrypted());
        assert_eq!(record.key, key);
    }

    #[test]
    fn test_decode_title_key_rejects_bad_size() {
        let bus_key = [0u8; 5];
        assert!(matches!(
            decode_title_key(&[0u8; 8], &bus_key),
            Err(CSSError::InvalidSize { size: 8, expected: 12 })
        ));
    }

    #[test]
    fn test_title_key_record_decrypts_through_disc_key() {
        let disc_key = [0x51, 0x67, 0x67, 0xc5, 0xe0];
        let record = TitleKeyRecord {
            data_length: 0x0008,
            reserved1: [0, 0],
            cmi: 0x80,
            key: [0x0a, 0x1b, 0x2c, 0x3d, 0x4e],
            reserved2: [0, 0],
        };
        assert_eq!(
            record.dec_title_key(&disc_key),
            crypto::decrypt_key(0xff, &disc_key, &record.key)
        );
    }
}
