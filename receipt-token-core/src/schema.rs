//! Positional array schema
//!
//! A receipt travels as a JSON array whose positions identify the fields.
//! Names are never transmitted, so the order in [`Field::ALL`] is part of the
//! wire format: fields may only ever be appended.
//!
//! Arrays shorter than [`FIELD_COUNT`] come from older encoders and decode
//! with defaults for the missing tail. Arrays longer than [`FIELD_COUNT`]
//! come from newer encoders; the extra positions are ignored.

use crate::constants::FIELD_COUNT;
use crate::error::DecodeError;
use crate::types::ReceiptData;
use serde_json::Value;

/// Value category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, defaults to `""`
    Text,
    /// Integer yen amount, defaults to `0`
    Number,
}

/// A receipt field, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Position 0
    CompanyName,
    /// Position 1
    ParkingLotName,
    /// Position 2
    PhoneNumber,
    /// Position 3
    RegistrationNumber,
    /// Position 4
    ParkingFee,
    /// Position 5
    Discount,
    /// Position 6
    ReceiptDate,
    /// Position 7
    ManagementNumber,
    /// Position 8, added after the first links were issued
    RecipientName,
}

impl Field {
    /// All fields in positional order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::CompanyName,
        Field::ParkingLotName,
        Field::PhoneNumber,
        Field::RegistrationNumber,
        Field::ParkingFee,
        Field::Discount,
        Field::ReceiptDate,
        Field::ManagementNumber,
        Field::RecipientName,
    ];

    /// Position of this field in the compact array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field name as used in the JSON record form
    pub const fn name(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::ParkingLotName => "parkingLotName",
            Field::PhoneNumber => "phoneNumber",
            Field::RegistrationNumber => "registrationNumber",
            Field::ParkingFee => "parkingFee",
            Field::Discount => "discount",
            Field::ReceiptDate => "receiptDate",
            Field::ManagementNumber => "managementNumber",
            Field::RecipientName => "recipientName",
        }
    }

    /// Value category
    pub const fn kind(self) -> FieldKind {
        match self {
            Field::ParkingFee | Field::Discount => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }
}

/// Project a receipt into its positional array
///
/// Every position is filled: text fields become strings and amounts become
/// integers, never `null`.
pub fn to_positional(receipt: &ReceiptData) -> Vec<Value> {
    Field::ALL
        .iter()
        .map(|field| match field {
            Field::CompanyName => Value::from(receipt.company_name.as_str()),
            Field::ParkingLotName => Value::from(receipt.parking_lot_name.as_str()),
            Field::PhoneNumber => Value::from(receipt.phone_number.as_str()),
            Field::RegistrationNumber => Value::from(receipt.registration_number.as_str()),
            Field::ParkingFee => Value::from(receipt.parking_fee),
            Field::Discount => Value::from(receipt.discount),
            Field::ReceiptDate => Value::from(receipt.receipt_date.as_str()),
            Field::ManagementNumber => Value::from(receipt.management_number.as_str()),
            Field::RecipientName => Value::from(receipt.recipient_name.as_str()),
        })
        .collect()
}

/// Rebuild a receipt from a positional array
///
/// Missing positions and `null` take the field default.
pub fn from_positional(values: &[Value]) -> Result<ReceiptData, DecodeError> {
    let text = |field: Field| text_value(field, slot(values, field));
    let number = |field: Field| number_value(field, slot(values, field));

    Ok(ReceiptData {
        company_name: text(Field::CompanyName)?,
        parking_lot_name: text(Field::ParkingLotName)?,
        phone_number: text(Field::PhoneNumber)?,
        registration_number: text(Field::RegistrationNumber)?,
        parking_fee: number(Field::ParkingFee)?,
        discount: number(Field::Discount)?,
        receipt_date: text(Field::ReceiptDate)?,
        management_number: text(Field::ManagementNumber)?,
        recipient_name: text(Field::RecipientName)?,
    })
}

fn slot(values: &[Value], field: Field) -> &Value {
    values.get(field.index()).unwrap_or(&Value::Null)
}

fn text_value(field: Field, value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(_) | Value::Bool(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(invalid(field, "expected text")),
    }
}

fn number_value(field: Field, value: &Value) -> Result<i64, DecodeError> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(invalid(field, "expected an integer amount")),
            }
        }
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(field, &e.to_string())),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(invalid(field, "expected an integer amount"))
        }
    }
}

fn invalid(field: Field, reason: &str) -> DecodeError {
    DecodeError::InvalidField {
        index: field.index(),
        field: field.name(),
        reason: reason.to_string(),
    }
}
