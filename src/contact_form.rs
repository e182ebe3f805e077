//! Client side of the contact flow: the form state machine, the HTTP
//! client it submits through, and the WhatsApp deep link offered next to it.
mod controller;
mod direct_channel;
mod dispatcher_client;

pub use controller::{ContactFields, ContactForm, Field, FormStatus, SUBMIT_FAILED_MESSAGE};
pub use direct_channel::DirectChannel;
pub use dispatcher_client::{DispatcherClient, DispatcherClientError};
