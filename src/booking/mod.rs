//! Booking hand-off from date selection to checkout.

pub mod checkout;
pub mod request;

pub use checkout::{
    validate_payment, BookingConfirmation, CheckoutRejection, PaymentDetails, PaymentMethod,
};
pub use request::BookingRequest;
