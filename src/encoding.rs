/*!
 * Text decoding with an ordered encoding fallback chain
 *
 * File contents are decoded strictly (no replacement characters) against
 * each encoding in turn; the first encoding that accepts the whole byte
 * sequence wins.
 */

use encoding_rs::{Encoding, GBK_INIT, UTF_8_INIT};

/// Encodings tried in order when decoding file contents
pub static ENCODING_CHAIN: [&Encoding; 2] = [&UTF_8_INIT, &GBK_INIT];

/// Decode a byte buffer into text using the fallback chain
///
/// Returns the decoded text together with the name of the encoding that
/// accepted it, or `None` when every encoding in the chain rejects the
/// input.
pub fn decode_text(bytes: &[u8]) -> Option<(String, &'static str)> {
    for encoding in ENCODING_CHAIN {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return Some((text.into_owned(), encoding.name()));
        }
    }

    None
}

/// Names of the encodings in the chain, in fallback order
pub fn encoding_names() -> Vec<&'static str> {
    ENCODING_CHAIN.iter().map(|e| e.name()).collect()
}
