use super::form::SubscribeOutcome;

pub const POLL_INTERVAL_MS: u64 = 500;

pub const SUCCESS_RESPONSE_ID: &str = "mce-success-response";
pub const ERROR_RESPONSE_ID: &str = "mce-error-response";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseNode {
    pub visible: bool,
    pub text: String,
}

impl ResponseNode {
    fn message(&self) -> Option<&str> {
        let text = self.text.trim();
        (self.visible && !text.is_empty()).then_some(text)
    }
}

/// Where the provider script writes its verdict. It posts through a hidden
/// frame, so the page is the only completion channel.
pub trait ResponseSource {
    fn read(&self, id: &str) -> Option<ResponseNode>;
}

/// One poll. When both elements carry text, success wins.
pub fn poll_outcome<P: ResponseSource + ?Sized>(source: &P) -> Option<SubscribeOutcome> {
    if source
        .read(SUCCESS_RESPONSE_ID)
        .is_some_and(|node| node.message().is_some())
    {
        return Some(SubscribeOutcome::Success);
    }
    let node = source.read(ERROR_RESPONSE_ID)?;
    node.message()
        .map(|msg| SubscribeOutcome::Rejected(msg.to_string()))
}

/// The message stays on the page after reporting, so only a change in what
/// the page shows is a new outcome. Each accepted submission re-arms it.
#[derive(Debug, Clone, Default)]
pub struct OutcomeEdge {
    last: Option<SubscribeOutcome>,
}

impl OutcomeEdge {
    pub fn is_new(&self, observed: &Option<SubscribeOutcome>) -> bool {
        *observed != self.last
    }

    pub fn observe(&mut self, observed: Option<SubscribeOutcome>) -> Option<SubscribeOutcome> {
        if !self.is_new(&observed) {
            return None;
        }
        self.last = observed.clone();
        observed
    }

    pub fn rearm(&mut self) {
        self.last = None;
    }
}
