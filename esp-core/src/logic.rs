//! Pure Business Logic Functions
//!
//! Farb-Dekodierung ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Wert einer einzelnen Hex-Ziffer (Groß-/Kleinschreibung egal)
fn hex_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'a'..=b'f' => Some(u32::from(byte - b'a' + 10)),
        b'A'..=b'F' => Some(u32::from(byte - b'A' + 10)),
        _ => None,
    }
}

/// Parst den Anfang von `input` als Basis-16-Zahl (permissiv)
///
/// Gelesen wird ab dem ersten Byte bis zur ersten Nicht-Hex-Ziffer,
/// einem NUL-Byte oder dem Ende. Leerzeichen, Vorzeichen und `0x`
/// zählen als Nicht-Hex-Ziffer. Ohne führende Ziffer ist das Ergebnis 0.
///
/// # Beispiele
///
/// ```
/// # use esp_core::parse_hex_prefix;
/// assert_eq!(parse_hex_prefix(b"FF"), 0xFF);
/// assert_eq!(parse_hex_prefix(b"12zz"), 0x12);
/// assert_eq!(parse_hex_prefix(b"ZZZZZZ"), 0);
/// ```
pub fn parse_hex_prefix(input: &[u8]) -> u32 {
    input
        .iter()
        .map_while(|&byte| hex_digit(byte))
        .fold(0u32, |value, digit| value.wrapping_mul(16).wrapping_add(digit))
}

/// Zerlegt einen 24-Bit-Farbwert in seine Kanäle
///
/// R = Bits 16-23, G = Bits 8-15, B = Bits 0-7. Höhere Bits werden ignoriert.
pub fn split_rgb(value: u32) -> RGB8 {
    RGB8 {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Dekodiert ein Farb-Token (`RRGGBB`) zu einer RGB-Farbe
///
/// Ungültige Eingaben ergeben still Schwarz.
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::decode_color;
/// assert_eq!(decode_color(b"FF0000"), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(decode_color(b"ZZZZZZ"), RGB8 { r: 0, g: 0, b: 0 });
/// ```
pub fn decode_color(token: &[u8]) -> RGB8 {
    split_rgb(parse_hex_prefix(token))
}

/// Skaliert eine Farbe mit globaler Helligkeit (0-255)
///
/// `level = 255` lässt die Farbe unverändert.
pub fn scale_brightness(color: RGB8, level: u8) -> RGB8 {
    let scale = |c: u8| ((u16::from(c) * (u16::from(level) + 1)) >> 8) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_primary_colors() {
        assert_eq!(decode_color(b"FF0000"), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(decode_color(b"00FF00"), RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(decode_color(b"0000FF"), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_decode_grey() {
        assert_eq!(
            decode_color(b"808080"),
            RGB8 {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_decode_lowercase() {
        assert_eq!(
            decode_color(b"ff8000"),
            RGB8 {
                r: 255,
                g: 128,
                b: 0
            }
        );
    }

    #[test]
    fn test_decode_invalid_is_black() {
        assert_eq!(decode_color(b"ZZZZZZ"), RGB8::default());
        assert_eq!(decode_color(b""), RGB8::default());
    }

    #[test]
    fn test_decode_short_prefix() {
        assert_eq!(decode_color(b"FF"), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_parse_stops_at_first_non_hex() {
        assert_eq!(parse_hex_prefix(b"12G456"), 0x12);
        assert_eq!(parse_hex_prefix(b"AB\0CD"), 0xAB);
    }

    #[test]
    fn test_leading_whitespace_is_black() {
        assert_eq!(decode_color(b" FFFFF"), RGB8::default());
        assert_eq!(decode_color(b"\tABCDE"), RGB8::default());
        assert_eq!(parse_hex_prefix(b"\r\nA"), 0);
    }

    #[test]
    fn test_hex_marker_stops_at_x() {
        assert_eq!(parse_hex_prefix(b"0xFF00"), 0);
        assert_eq!(decode_color(b"0XabCD"), RGB8::default());
    }

    #[test]
    fn test_leading_sign_is_black() {
        assert_eq!(decode_color(b"-00001"), RGB8::default());
        assert_eq!(decode_color(b"+FF000"), RGB8::default());
        assert_eq!(parse_hex_prefix(b"-"), 0);
    }

    #[test]
    fn test_digits_after_leading_digit_are_kept() {
        assert_eq!(parse_hex_prefix(b"1-2345"), 0x1);
        assert_eq!(parse_hex_prefix(b"A BCDE"), 0xA);
    }

    #[test]
    fn test_split_rgb_ignores_high_byte() {
        assert_eq!(split_rgb(0xAB12_3456), RGB8 { r: 0x12, g: 0x34, b: 0x56 });
    }

    #[test]
    fn test_scale_brightness_full_is_identity() {
        let color = RGB8 { r: 255, g: 128, b: 1 };
        assert_eq!(scale_brightness(color, 255), color);
    }

    #[test]
    fn test_scale_brightness_off() {
        let color = RGB8 { r: 255, g: 255, b: 255 };
        assert_eq!(scale_brightness(color, 0), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_scale_brightness_half() {
        let color = RGB8 { r: 200, g: 100, b: 0 };
        assert_eq!(scale_brightness(color, 127), RGB8 { r: 100, g: 50, b: 0 });
    }
}
