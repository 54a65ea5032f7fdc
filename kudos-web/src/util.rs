use std::str::FromStr;

use kudos_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        chrono_tz::Tz::from_str(&get_timezone())
            .expect("host js timezone is not in chrono-tz database")
    };
}

/// Renders a server timestamp in the browser's timezone
pub fn format_time(t: Time) -> String {
    t.with_timezone(&*LOCAL_TZ)
        .format("%b %e, %Y %H:%M")
        .to_string()
}

/// Converts the UTF-16 caret position reported by the DOM into a byte offset
/// usable with the mention detector
pub fn utf16_to_byte_offset(s: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (i, c) in s.char_indices() {
        if units >= utf16 {
            return i;
        }
        units += c.len_utf16();
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_offsets_map_to_byte_offsets() {
        assert_eq!(utf16_to_byte_offset("abc", 2), 2);
        // 'é' is 1 utf-16 unit but 2 utf-8 bytes
        assert_eq!(utf16_to_byte_offset("é@a", 1), 2);
        assert_eq!(utf16_to_byte_offset("é@a", 2), 3);
        // '😀' is 2 utf-16 units and 4 utf-8 bytes
        assert_eq!(utf16_to_byte_offset("😀x", 2), 4);
        assert_eq!(utf16_to_byte_offset("abc", 17), 3);
    }
}
