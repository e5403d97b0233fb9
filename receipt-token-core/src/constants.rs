//! Constants and limits for the receipt token format

/// Query parameter carrying the token in a shareable link
pub const RECEIPT_QUERY_PARAM: &str = "receipt";

/// Number of positional values in the current compact array layout
pub const FIELD_COUNT: usize = 9;

/// Number of positional values written by encoders that predate `recipientName`
pub const LEGACY_FIELD_COUNT: usize = 8;

/// Upper bound on the inflated JSON text accepted by the decoder (64 KiB)
///
/// A full receipt inflates to a few hundred bytes; anything near this limit
/// is a compression bomb or garbage.
pub const MAX_INFLATED_LEN: usize = 64 * 1024;

/// Key prefix under which parking profiles live in the key-value store
pub const PROFILE_KEY_PREFIX: &str = "parking_profile:";

/// Currency mark used when rendering yen amounts
pub const YEN_SIGN: char = '¥';

/// Date layout used by the form input (`2024-04-03`)
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date layout printed on the receipt (`2024/04/03`)
pub const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";
