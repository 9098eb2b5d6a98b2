use shared::domain::{NetworkId, PersonId};

/// The single "current view" of the UI session. No history stack; the ids in
/// `Person`/`Network` are not checked against the store, so a transition to a
/// dangling id succeeds and the view layer renders nothing for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Home,
    People,
    Person(PersonId),
    Network(NetworkId),
    Networks,
    Calendar,
    Places,
}

/// Explicit user-triggered transitions. Every one is applied synchronously;
/// there is no cancellation and nothing runs in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    GoHome,
    GoPeople,
    GoNetworks,
    GoCalendar,
    GoPlaces,
    OpenPerson(PersonId),
    OpenNetwork(NetworkId),
    Back,
    /// Submit the Home prompt. Non-empty text is a navigation shortcut to the
    /// people list (no query is executed) and clears the prompt; empty or
    /// whitespace-only text does nothing.
    SubmitPrompt,
}

/// View selection state plus the Home prompt buffer. Starts on `Home` and
/// runs for the lifetime of the UI session.
pub struct ViewRouter {
    view: ViewState,
    prompt: String,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: ViewState::Home,
            prompt: String::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Mutable access for the prompt text field binding.
    pub fn prompt_mut(&mut self) -> &mut String {
        &mut self.prompt
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::GoHome => self.view = ViewState::Home,
            NavEvent::GoPeople => self.view = ViewState::People,
            NavEvent::GoNetworks => self.view = ViewState::Networks,
            NavEvent::GoCalendar => self.view = ViewState::Calendar,
            NavEvent::GoPlaces => self.view = ViewState::Places,
            NavEvent::OpenPerson(id) => self.view = ViewState::Person(id),
            NavEvent::OpenNetwork(id) => self.view = ViewState::Network(id),
            // Back only exists on the person and network headers; both return
            // to the people list. Anywhere else it is a no-op.
            NavEvent::Back => {
                if matches!(self.view, ViewState::Person(_) | ViewState::Network(_)) {
                    self.view = ViewState::People;
                }
            }
            NavEvent::SubmitPrompt => {
                if !self.prompt.trim().is_empty() {
                    self.view = ViewState::People;
                    self.prompt.clear();
                }
            }
        }
        tracing::debug!(view = ?self.view, "view transition");
    }
}
