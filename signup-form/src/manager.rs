use std::collections::VecDeque;

use super::{FormAction, FormEvent, FormState, Mode, SignupError, Step};
use crate::field::Field;

pub struct SignupManager {
    // Current state - single source of truth
    state: FormState,

    // Action queue for sequential processing
    pending_actions: VecDeque<FormAction>,

    // Notifications for the host UI
    events: Vec<FormEvent>,
}

impl Default for SignupManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupManager {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            pending_actions: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// UI calls this - just queues the action
    pub fn dispatch(&mut self, action: FormAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one action from the queue
    pub fn update(&mut self) {
        if let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
        }
    }

    /// Drains the queue; the UI calls this once per frame.
    pub fn process_all(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update();
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    fn handle_action(&mut self, action: FormAction) {
        if self.state.is_submitted() && action.requires_editing() {
            if let FormAction::SetField { field, .. } = action {
                let error = SignupError::FormLocked(field);
                log::error!("Rejected field update: {}", error);
            } else {
                log::warn!("Ignoring '{}' while the summary is shown", action.description());
            }
            return;
        }

        if !self.state.is_submitted() && action.requires_submitted() {
            log::warn!("Ignoring '{}': nothing has been submitted", action.description());
            return;
        }

        match action {
            FormAction::SetField { field, value } => {
                self.handle_set_field(field, value);
            }
            FormAction::Touch(field) => {
                self.state.touch(field);
            }
            FormAction::Advance => {
                self.handle_advance();
            }
            FormAction::Retreat => {
                self.handle_retreat();
            }
            FormAction::JumpToStep(step) => {
                self.state.current_step = step;
                log::info!("Jumped to step {}", step.number());
            }
            FormAction::Submit => {
                self.handle_submit();
            }
            FormAction::Edit => {
                self.handle_edit();
            }
            FormAction::ConfirmAnyway => {
                self.handle_confirm_anyway();
            }
            FormAction::Reset => {
                self.handle_reset();
            }
        }

        // Update derived flags after each action
        self.state.refresh_flags();
    }
}

// Action handler implementations
impl SignupManager {
    fn handle_set_field(&mut self, field: Field, value: String) {
        if !self.state.inputs_enabled() {
            log::warn!("Ignoring input for {} during submission", field);
            return;
        }

        self.state.values.set(field, value);
        self.state.touch(field);
        self.state.revalidate();
    }

    fn handle_advance(&mut self) {
        let current = self.state.current_step;
        if current.is_last() {
            log::warn!("Already at step {}; advance has no effect", current.number());
            return;
        }

        self.state.current_step = current.next();
        self.events.push(FormEvent::Advanced(self.state.current_step));
        log::info!("Advanced to step {}", self.state.current_step.number());
    }

    fn handle_retreat(&mut self) {
        let current = self.state.current_step;
        if current.is_first() {
            log::warn!("Already at step {}; retreat has no effect", current.number());
            return;
        }

        self.state.current_step = current.previous();
        self.events.push(FormEvent::Retreated(self.state.current_step));
        log::info!("Went back to step {}", self.state.current_step.number());
    }

    fn handle_submit(&mut self) {
        self.state.revalidate();

        if !self.state.validation.is_valid() {
            // A failed submit reveals every message at once
            self.state.touch_all();
            let error_count = self.state.validation.error_count();
            self.events.push(FormEvent::SubmitRejected { error_count });
            log::info!("Submit rejected with {} invalid field(s)", error_count);
            return;
        }

        self.state.is_submitting = true;
        let snapshot = self.state.values.clone();
        log::info!("Form submitted: {}", snapshot.to_log_json());
        self.state.mode = Mode::Submitted(snapshot);
        self.state.is_submitting = false;

        self.events.push(FormEvent::Submitted);
    }

    fn handle_edit(&mut self) {
        self.state.mode = Mode::Editing;
        self.state.current_step = Step::FIRST;
        self.events.push(FormEvent::Edited);
        log::info!("Returned to editing at step {}", Step::FIRST.number());
    }

    fn handle_confirm_anyway(&mut self) {
        self.handle_reset();
        self.events.push(FormEvent::ReloadRequested);
    }

    fn handle_reset(&mut self) {
        self.state = FormState::default();
        self.pending_actions.clear();
        log::info!("Form state reset");
    }
}
