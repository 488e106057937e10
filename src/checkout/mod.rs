//! Shipping address validation for checkout.
//!
//! The checkout flow hands a cart snapshot and a shipping address to an
//! external payment provider; creating that payment session is out of this
//! crate's hands. What lives here is the address model and the form
//! validation that gates the handoff.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field of the shipping address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    FullName,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Country,
}

impl AddressField {
    /// Form field name, as the rendering layer knows it.
    pub fn name(&self) -> &'static str {
        match self {
            AddressField::FullName => "fullName",
            AddressField::Email => "email",
            AddressField::Phone => "phone",
            AddressField::Address => "address",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Zip => "zip",
            AddressField::Country => "country",
        }
    }
}

/// A single failed validation rule, paired with its form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: AddressField,
    /// User-facing message.
    pub message: &'static str,
}

/// The full set of validation failures for an address.
///
/// All rules are checked; the rendering layer highlights every offending
/// field at once rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shipping address: {}", .errors.iter().map(|e| e.message).collect::<Vec<_>>().join("; "))]
pub struct InvalidAddress {
    /// Failures in form-field order.
    pub errors: Vec<FieldError>,
}

/// A shipping address, part of the payload handed to the checkout provider.
///
/// # Examples
///
/// ```
/// use storefront_core::checkout::ShippingAddress;
///
/// let address = ShippingAddress {
///     full_name: "Ada Lovelace".into(),
///     email: "ada@example.com".into(),
///     phone: "415-555-0123".into(),
///     address: "1 Analytical Way".into(),
///     city: "San Francisco".into(),
///     state: "CA".into(),
///     zip: "94110".into(),
///     country: "US".into(),
/// };
/// assert!(address.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Recipient's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// ZIP code, `DDDDD` or `DDDDD-DDDD`.
    pub zip: String,
    /// Country code.
    pub country: String,
}

impl ShippingAddress {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), InvalidAddress> {
        let mut errors = Vec::new();

        if self.full_name.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: AddressField::FullName,
                message: "Full name is required",
            });
        }
        if !self.email.contains('@') {
            errors.push(FieldError {
                field: AddressField::Email,
                message: "Valid email is required",
            });
        }
        if self.phone.trim().chars().count() < 10 {
            errors.push(FieldError {
                field: AddressField::Phone,
                message: "Valid phone number is required",
            });
        }
        if self.address.trim().chars().count() < 5 {
            errors.push(FieldError {
                field: AddressField::Address,
                message: "Street address is required",
            });
        }
        if self.city.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: AddressField::City,
                message: "City is required",
            });
        }
        if self.state.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: AddressField::State,
                message: "State is required",
            });
        }
        if !is_valid_zip(&self.zip) {
            errors.push(FieldError {
                field: AddressField::Zip,
                message: "Valid ZIP code is required",
            });
        }
        if self.country.is_empty() {
            errors.push(FieldError {
                field: AddressField::Country,
                message: "Country is required",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidAddress { errors })
        }
    }
}

/// `DDDDD` or `DDDDD-DDDD`.
fn is_valid_zip(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}
