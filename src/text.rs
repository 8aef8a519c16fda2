//! Text codec for literal Unicode injection
//!
//! Input text is decoded to UTF-32 codepoints and re-encoded as the UTF-16
//! units the native injection APIs consume (`KEYEVENTF_UNICODE` on Windows).
//! Decoding is best-effort: malformed bytes are skipped one at a time, never
//! reported as an error, because injection callers have no use for a partial
//! failure mid-string.

/// Decode UTF-8 bytes to codepoints, skipping malformed input one byte at a
/// time (invalid lead bytes, invalid continuation bytes, truncated tails).
pub fn decode_utf8(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let (len, init) = match b {
            0x00..=0x7F => (1, b as u32),
            0xC0..=0xDF => (2, (b & 0x1F) as u32),
            0xE0..=0xEF => (3, (b & 0x0F) as u32),
            0xF0..=0xF7 => (4, (b & 0x07) as u32),
            // Stray continuation byte or invalid lead (0xF8..)
            _ => {
                i += 1;
                continue;
            }
        };
        if i + len > bytes.len() {
            i += 1;
            continue;
        }
        let mut cp = init;
        let mut valid = true;
        for j in 1..len {
            let c = bytes[i + j];
            if c & 0xC0 != 0x80 {
                valid = false;
                break;
            }
            cp = (cp << 6) | (c & 0x3F) as u32;
        }
        if !valid || cp > 0x10FFFF || (0xD800..=0xDFFF).contains(&cp) {
            i += 1;
            continue;
        }
        out.push(cp);
        i += len;
    }
    out
}

/// Encode codepoints as UTF-16 units. Codepoints above the BMP become a
/// surrogate pair; surrogate-range and out-of-range input is skipped.
pub fn encode_utf16(codepoints: &[u32]) -> Vec<u16> {
    let mut out = Vec::with_capacity(codepoints.len());
    for &cp in codepoints {
        if (0xD800..=0xDFFF).contains(&cp) || cp > 0x10FFFF {
            continue;
        }
        if cp <= 0xFFFF {
            out.push(cp as u16);
        } else {
            let v = cp - 0x10000;
            out.push(0xD800 | (v >> 10) as u16);
            out.push(0xDC00 | (v & 0x3FF) as u16);
        }
    }
    out
}

/// UTF-8 straight to UTF-16 units, best-effort.
pub fn utf8_to_utf16(bytes: &[u8]) -> Vec<u16> {
    encode_utf16(&decode_utf8(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode_utf8(b"abc"), vec!['a' as u32, 'b' as u32, 'c' as u32]);
    }

    #[test]
    fn test_decode_multibyte() {
        // é (2 bytes), € (3 bytes), 😀 (4 bytes)
        let s = "é€😀";
        let cps: Vec<u32> = s.chars().map(|c| c as u32).collect();
        assert_eq!(decode_utf8(s.as_bytes()), cps);
    }

    #[test]
    fn test_decode_skips_malformed_one_byte_at_a_time() {
        // Stray continuation byte between valid characters
        assert_eq!(decode_utf8(b"a\x80b"), vec!['a' as u32, 'b' as u32]);
        // Lead byte with an invalid continuation: lead skipped, the
        // non-continuation byte is then decoded on its own
        assert_eq!(decode_utf8(b"\xC3\x28"), vec!['(' as u32]);
        // Truncated sequence at end of input
        assert_eq!(decode_utf8(b"ab\xE2\x82"), vec!['a' as u32, 'b' as u32]);
        // Invalid lead 0xFF
        assert_eq!(decode_utf8(b"\xFFx"), vec!['x' as u32]);
    }

    #[test]
    fn test_decode_rejects_surrogate_encodings() {
        // CESU-8 style encoded surrogate (ED A0 80 = U+D800)
        assert_eq!(decode_utf8(b"\xED\xA0\x80z"), vec!['z' as u32]);
    }

    #[test]
    fn test_encode_bmp_passthrough() {
        assert_eq!(encode_utf16(&[0x41, 0x20AC]), vec![0x41, 0x20AC]);
    }

    #[test]
    fn test_encode_surrogate_pair() {
        // U+1F600 => D83D DE00
        assert_eq!(encode_utf16(&[0x1F600]), vec![0xD83D, 0xDE00]);
    }

    #[test]
    fn test_encode_skips_invalid() {
        assert_eq!(encode_utf16(&[0xD800, 0x110000, 0x61]), vec![0x61]);
    }

    #[test]
    fn test_utf16_roundtrip() {
        let s = "Hello, wörld! 😀🎹 \u{10FFFF}";
        let units = utf8_to_utf16(s.as_bytes());
        let decoded: String = char::decode_utf16(units.iter().copied())
            .map(|r| r.expect("valid units"))
            .collect();
        assert_eq!(decoded, s);
    }
}
