//! Property-based tests using proptest

use proptest::prelude::*;
use receipt_token_core::{
    decode,
    encoder::encode_values,
    encode,
    schema::{to_positional, Field},
    share::{receipt_from_url, share_url, token_from_url},
    ReceiptData,
};

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z0-9 -]{0,24}",
        "[ぁ-んァ-ン一-龥0-9]{0,16}",
        any::<String>(),
    ]
}

fn receipt() -> impl Strategy<Value = ReceiptData> {
    (
        (text(), text(), text(), text()),
        (any::<i64>(), any::<i64>()),
        (text(), text(), text()),
    )
        .prop_map(
            |(
                (company_name, parking_lot_name, phone_number, registration_number),
                (parking_fee, discount),
                (receipt_date, management_number, recipient_name),
            )| ReceiptData {
                company_name,
                parking_lot_name,
                phone_number,
                registration_number,
                parking_fee,
                discount,
                receipt_date,
                management_number,
                recipient_name,
            },
        )
}

proptest! {
    #[test]
    fn prop_round_trip_encode_decode(receipt in receipt()) {
        let token = encode(&receipt).unwrap();
        prop_assert_eq!(decode(&token).unwrap(), receipt);
    }

    #[test]
    fn prop_token_is_url_safe(receipt in receipt()) {
        let token = encode(&receipt).unwrap();
        prop_assert!(!token.is_empty());
        prop_assert!(token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn prop_reencode_is_stable(receipt in receipt()) {
        let first = encode(&receipt).unwrap();
        let decoded = decode(&first).unwrap();
        let second = encode(&decoded).unwrap();
        prop_assert_eq!(decode(&second).unwrap(), receipt);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_truncated_layout_decodes_with_defaults(
        receipt in receipt(),
        keep in 0usize..=Field::ALL.len()
    ) {
        let values = to_positional(&receipt);
        let token = encode_values(&values[..keep]).unwrap();
        let decoded = decode(&token).unwrap();

        let full = to_positional(&decoded);
        let blank = to_positional(&ReceiptData::default());
        for (i, field) in Field::ALL.iter().enumerate() {
            let expected = if i < keep { &values[i] } else { &blank[i] };
            prop_assert_eq!(&full[i], expected, "position {} ({})", i, field.name());
        }
    }

    #[test]
    fn prop_share_link_round_trip(receipt in receipt()) {
        let url = share_url("https://receipts.example.com/view?lang=ja", &receipt).unwrap();
        prop_assert_eq!(token_from_url(url.as_str()), Some(encode(&receipt).unwrap()));
        prop_assert_eq!(receipt_from_url(url.as_str()).unwrap(), receipt);
    }

    #[test]
    fn prop_decode_never_panics(token in ".{0,256}") {
        // Should never panic, even on random text
        let result = decode(&token);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_decode_url_alphabet_never_panics(token in "[A-Za-z0-9_-]{0,512}") {
        let _ = decode(&token);
    }
}
