//! Core types for parking receipts

use crate::constants::{DISPLAY_DATE_FORMAT, INPUT_DATE_FORMAT, YEN_SIGN};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Receipt fields edited in the form and embedded in tokens
///
/// Field order here matches the positional order of the compact array, see
/// [`crate::schema::Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptData {
    /// Operating company printed at the top of the receipt
    pub company_name: String,

    /// Parking lot name
    pub parking_lot_name: String,

    /// Contact phone number, free text
    pub phone_number: String,

    /// Qualified invoice registration number (e.g. `T9011001025282`)
    pub registration_number: String,

    /// Parking fee in yen
    pub parking_fee: i64,

    /// Discount in yen
    pub discount: i64,

    /// Receipt date as entered (`YYYY-MM-DD`)
    pub receipt_date: String,

    /// Management number
    pub management_number: String,

    /// Addressee, empty when the receipt is not addressed
    pub recipient_name: String,
}

impl ReceiptData {
    /// The form's initial contents
    pub fn sample() -> Self {
        Self {
            company_name: "株式会社ランディット".to_string(),
            parking_lot_name: "綾瀬第2駐車場".to_string(),
            phone_number: "0120511441".to_string(),
            registration_number: "T9011001025282".to_string(),
            parking_fee: 1000,
            discount: 100,
            receipt_date: "2024-04-03".to_string(),
            management_number: "20240403001".to_string(),
            recipient_name: String::new(),
        }
    }

    /// Amount charged: fee minus discount
    ///
    /// Never stored. Negative when the discount exceeds the fee.
    pub fn total(&self) -> i64 {
        self.parking_fee.saturating_sub(self.discount)
    }

    /// Whether the receipt is addressed to someone
    pub fn has_recipient(&self) -> bool {
        !self.recipient_name.trim().is_empty()
    }

    /// Values as they appear on the printed receipt
    pub fn display(&self) -> ReceiptDisplay {
        ReceiptDisplay {
            receipt_date: format_receipt_date(&self.receipt_date),
            parking_fee: format_yen(self.parking_fee),
            discount: format_yen(self.discount),
            total: format_yen(self.total()),
            recipient_name: self
                .has_recipient()
                .then(|| self.recipient_name.clone()),
        }
    }
}

/// Display-ready values derived from a [`ReceiptData`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDisplay {
    /// Date in `YYYY/MM/DD`
    pub receipt_date: String,
    /// Fee with yen sign and grouping
    pub parking_fee: String,
    /// Discount with yen sign and grouping
    pub discount: String,
    /// Derived total with yen sign and grouping
    pub total: String,
    /// Addressee, omitted when blank
    pub recipient_name: Option<String>,
}

/// Reformat a `YYYY-MM-DD` date as `YYYY/MM/DD`
///
/// Empty input stays empty. Input that does not parse is returned as is.
pub fn format_receipt_date(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date, INPUT_DATE_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Render a yen amount with a leading `¥` and comma grouping
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    grouped.push(YEN_SIGN);
    if amount < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_fee_minus_discount() {
        let receipt = ReceiptData::sample();
        assert_eq!(receipt.total(), 900);

        let over = ReceiptData {
            parking_fee: 100,
            discount: 300,
            ..ReceiptData::default()
        };
        assert_eq!(over.total(), -200);
    }

    #[test]
    fn test_total_saturates() {
        let receipt = ReceiptData {
            parking_fee: i64::MIN,
            discount: 1,
            ..ReceiptData::default()
        };
        assert_eq!(receipt.total(), i64::MIN);
    }

    #[test]
    fn test_format_receipt_date() {
        assert_eq!(format_receipt_date("2024-04-03"), "2024/04/03");
        assert_eq!(format_receipt_date(""), "");
        assert_eq!(format_receipt_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(900), "¥900");
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(format_yen(1_234_567), "¥1,234,567");
        assert_eq!(format_yen(-50), "¥-50");
        assert_eq!(format_yen(-12_000), "¥-12,000");
    }

    #[test]
    fn test_display_values() {
        let display = ReceiptData::sample().display();
        assert_eq!(display.receipt_date, "2024/04/03");
        assert_eq!(display.parking_fee, "¥1,000");
        assert_eq!(display.discount, "¥100");
        assert_eq!(display.total, "¥900");
        assert_eq!(display.recipient_name, None);
    }

    #[test]
    fn test_serde_uses_camel_case_and_defaults() {
        let json = r#"{"companyName":"A","parkingFee":500}"#;
        let receipt: ReceiptData = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.company_name, "A");
        assert_eq!(receipt.parking_fee, 500);
        assert_eq!(receipt.recipient_name, "");

        let out = serde_json::to_value(&receipt).unwrap();
        assert!(out.get("parkingLotName").is_some());
    }
}
