//! Wizard state machine
//!
//! The single-flow workflow from landing page to sent mail, expressed as a
//! pure `(state, event) -> state` function. Rendering and the actual external
//! calls live in other layers; this module only encodes which transitions are
//! legal and which data each state carries.
//!
//! Undefined (state, event) pairs are no-ops: the machine returns the current
//! state unchanged rather than failing.

use crate::entities::Draft;

/// The states of the wizard, carrying the data visible in each step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Initial landing page
    Landing,
    /// Recipient/topic form, optionally showing an inline error from a
    /// failed draft generation
    Compose {
        /// Inline error from the last failed submission, if any
        error: Option<String>,
    },
    /// Generated draft shown for review and editing
    Preview {
        /// The current editable draft
        draft: Draft,
    },
    /// A send call is outstanding; inputs are disabled
    Sending {
        /// The draft handed to the sender
        draft: Draft,
    },
    /// The message was delivered
    Success {
        /// The draft that was delivered
        draft: Draft,
    },
    /// The send call failed
    Error {
        /// The draft to replay on retry
        draft: Draft,
        /// Human-readable failure message
        message: String,
    },
}

impl WizardState {
    /// A fresh compose state with no inline error
    pub fn compose() -> Self {
        Self::Compose { error: None }
    }

    /// The draft carried by the current state, if any
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Landing | Self::Compose { .. } => None,
            Self::Preview { draft }
            | Self::Sending { draft }
            | Self::Success { draft }
            | Self::Error { draft, .. } => Some(draft),
        }
    }

    /// Whether an external call is outstanding (UI inputs disabled)
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}

/// Events driving the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// User starts from the landing page
    Start,
    /// Draft generation succeeded
    DraftReady(Draft),
    /// Draft generation failed (validation or upstream)
    DraftFailed(String),
    /// User rewrote the subject during preview
    EditSubject(String),
    /// User rewrote the body during preview
    EditBody(String),
    /// User sends the previewed draft
    Send,
    /// The sender delivered the message
    SendSucceeded,
    /// The sender failed
    SendFailed(String),
    /// User retries the failed send with the same draft
    Retry,
    /// User abandons the failed send and returns to compose
    Back,
    /// User starts over after a successful send
    Reset,
}

/// Apply one event to the wizard, returning the next state.
///
/// Transitions not listed leave the state untouched.
pub fn transition(state: WizardState, event: WizardEvent) -> WizardState {
    match (state, event) {
        (WizardState::Landing, WizardEvent::Start) => WizardState::compose(),
        (WizardState::Compose { .. }, WizardEvent::DraftReady(draft)) => {
            WizardState::Preview { draft }
        },
        (WizardState::Compose { .. }, WizardEvent::DraftFailed(message)) => WizardState::Compose {
            error: Some(message),
        },
        (WizardState::Preview { mut draft }, WizardEvent::EditSubject(subject)) => {
            draft.set_subject(subject);
            WizardState::Preview { draft }
        },
        (WizardState::Preview { mut draft }, WizardEvent::EditBody(body)) => {
            draft.set_body(body);
            WizardState::Preview { draft }
        },
        (WizardState::Preview { draft }, WizardEvent::Send) => WizardState::Sending { draft },
        (WizardState::Sending { draft }, WizardEvent::SendSucceeded) => {
            WizardState::Success { draft }
        },
        (WizardState::Sending { draft }, WizardEvent::SendFailed(message)) => {
            WizardState::Error { draft, message }
        },
        (WizardState::Error { draft, .. }, WizardEvent::Retry) => WizardState::Sending { draft },
        (WizardState::Error { .. }, WizardEvent::Back) => WizardState::compose(),
        (WizardState::Success { .. }, WizardEvent::Reset) => WizardState::compose(),
        (state, _) => state,
    }
}
