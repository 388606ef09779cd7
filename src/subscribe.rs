mod debounce;
#[cfg(feature = "hydrate")]
mod dom;
mod form;
mod response;
mod script;
mod validate;

pub use debounce::{Ticket, DEBOUNCE_MS};
#[cfg(feature = "hydrate")]
pub use dom::DocumentHost;
pub use form::{Phase, SubscribeError, SubscribeForm, SubscribeOutcome, Validation};
pub use response::{
    poll_outcome, ResponseNode, ResponseSource, ERROR_RESPONSE_ID, POLL_INTERVAL_MS,
    SUCCESS_RESPONSE_ID,
};
pub use script::{ensure_loaded, MergeField, ScriptHost, MERGE_FIELDS, VALIDATE_SCRIPT_SRC};
pub use validate::is_acceptable_email;
