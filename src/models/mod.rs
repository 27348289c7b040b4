pub mod payment;

pub use payment::{NewPayment, Payment, PaymentId};
