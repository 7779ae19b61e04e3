//! Owned display state of the estimate screen.

use solara_fetch::Calculator;
use solara_types::{ConsumptionInput, EstimateResult, RequestError};
use tracing::{debug, trace};

use crate::Phase;

/// What happens to a displayed estimate when a later submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StaleResultPolicy {
    /// Keep showing the previous estimate next to the error.
    #[default]
    Retain,
    /// Hide the previous estimate once a submission fails.
    Clear,
}

/// Main content area of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    /// No estimate to show yet.
    Placeholder,
    /// The latest estimate, exactly as received.
    Result(&'a EstimateResult),
}

/// Snapshot of what to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenView<'a> {
    /// Error message to show, if any.
    pub error: Option<&'a str>,
    /// Placeholder or estimate.
    pub body: Body<'a>,
    /// Whether the submit trigger is disabled.
    pub busy: bool,
}

/// Display state of one estimate screen.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    input: String,
    result: Option<EstimateResult>,
    error: Option<String>,
    phase: Phase,
    policy: StaleResultPolicy,
}

impl Screen {
    /// Creates an idle screen with the default stale result policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle screen with the given stale result policy.
    #[must_use]
    pub fn with_policy(policy: StaleResultPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Returns the current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the displayed estimate.
    #[must_use]
    pub const fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    /// Returns the displayed error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the stale result policy.
    #[must_use]
    pub const fn policy(&self) -> StaleResultPolicy {
        self.policy
    }

    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Starts a submission by validating the current input.
    ///
    /// Clears the previous error first. Returns the validated input when the
    /// caller should send a request, or `None` if the input was rejected or a
    /// request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<ConsumptionInput> {
        if !self.phase.accepts_submit() {
            debug!(phase = %self.phase, "submission ignored while busy");
            return None;
        }

        self.transition(Phase::Validating);
        self.error = None;

        match ConsumptionInput::parse(&self.input) {
            Ok(input) => {
                self.transition(Phase::Submitting);
                Some(input)
            }
            Err(e) => {
                self.fail(Phase::ValidationFailed, e.to_string());
                None
            }
        }
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// Outcomes arriving when no request is outstanding are ignored.
    pub fn finish(&mut self, outcome: Result<EstimateResult, RequestError>) {
        if !self.phase.is_busy() {
            debug!(phase = %self.phase, "outcome ignored, no request outstanding");
            return;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.transition(Phase::Success);
            }
            Err(e) => {
                let phase = match Phase::for_error(&e) {
                    Phase::ValidationFailed => Phase::ServiceError,
                    phase => phase,
                };
                self.fail(phase, e.to_string());
            }
        }
    }

    /// Validates, requests and applies the outcome in one step.
    ///
    /// Returns the phase the screen settled in.
    pub async fn submit<C>(&mut self, calculator: &C) -> Phase
    where
        C: Calculator + ?Sized,
    {
        if let Some(input) = self.begin_submit() {
            let outcome = calculator.calculate(input).await;
            self.finish(outcome);
        }
        self.phase
    }

    /// Returns what should be rendered.
    #[must_use]
    pub fn view(&self) -> ScreenView<'_> {
        ScreenView {
            error: self.error(),
            body: self.result.as_ref().map_or(Body::Placeholder, Body::Result),
            busy: self.is_busy(),
        }
    }

    fn fail(&mut self, phase: Phase, message: String) {
        if self.policy == StaleResultPolicy::Clear {
            self.result = None;
        }
        self.error = Some(message);
        self.transition(phase);
    }

    fn transition(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal transition {} -> {}",
            self.phase,
            next
        );
        trace!(from = %self.phase, to = %next, "screen transition");
        self.phase = next;
    }
}
