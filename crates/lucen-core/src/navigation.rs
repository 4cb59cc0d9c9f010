//! Navigation state machine.
//!
//! [`NavigationController`] owns the current [`NavState`] and is the single
//! source of truth for rendering. Every transition replaces the state
//! wholesale and notifies subscribers with a [`NavChange`]; rendering and
//! address-bar updates happen in those subscribers, never in here.
//!
//! Legal moves on the five-level path `core - master - field - module - mini`:
//! - jump to any fully specified target (`go_*`, [`NavigationController::go_to`])
//! - step exactly one level toward the root ([`NavigationController::ascend_one`])

use crate::models::{ContentRepository, NavContext, NavState};
use crate::route;

/// What triggered a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A click on a nav affordance; the route should be pushed.
    User,
    /// The address bar changed (load, back/forward); the route is already there.
    Route,
}

/// Notification emitted after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavChange {
    pub previous: NavState,
    pub current: NavState,
    pub origin: ChangeOrigin,
}

impl NavChange {
    /// Hash to write to the address bar, for user-initiated changes only.
    pub fn route_to_push(&self) -> Option<String> {
        match self.origin {
            ChangeOrigin::User => Some(route::to_hash(&self.current)),
            ChangeOrigin::Route => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }

    /// Whether the view should return to the top of the page.
    ///
    /// A user click always does, even on the current position; a route echo
    /// of the same state does not.
    pub fn resets_scroll(&self) -> bool {
        self.origin == ChangeOrigin::User || !self.is_noop()
    }
}

type Subscriber = Box<dyn FnMut(&NavChange)>;

/// Owner of the current navigation state.
pub struct NavigationController<R> {
    repo: R,
    state: NavState,
    subscribers: Vec<Subscriber>,
}

impl<R: ContentRepository> NavigationController<R> {
    /// Create a controller positioned at the hub.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: NavState::Core,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Entities named by the current state, resolved against the repository.
    pub fn context(&self) -> NavContext<'_> {
        NavContext::resolve(&self.repo, &self.state)
    }

    /// Register a change listener. Listeners run in registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&NavChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn go_core(&mut self) -> &NavState {
        self.go_to(NavState::Core)
    }

    pub fn go_master(&mut self, master: &str) -> &NavState {
        self.go_to(NavState::master(master))
    }

    pub fn go_field(&mut self, master: &str, field: &str) -> &NavState {
        self.go_to(NavState::field(master, field))
    }

    pub fn go_module(&mut self, master: &str, field: &str, module: &str) -> &NavState {
        self.go_to(NavState::module(master, field, module))
    }

    pub fn go_mini(&mut self, master: &str, field: &str, module: &str, mini: &str) -> &NavState {
        self.go_to(NavState::mini(master, field, module, mini))
    }

    /// Jump to a fully specified target. Always legal.
    ///
    /// Targets whose ids don't resolve are still adopted; rendering degrades
    /// to the deepest resolved ancestor.
    pub fn go_to(&mut self, target: NavState) -> &NavState {
        let resolved = NavContext::resolve(&self.repo, &target).depth();
        if resolved < target.level() {
            tracing::warn!(
                route = %route::encode(&target),
                resolved = %resolved,
                "navigating to a partially resolved target"
            );
        }
        self.set_state(target, ChangeOrigin::User)
    }

    /// Move exactly one level toward the root, dropping the deepest id.
    ///
    /// No-op at the hub: returns the unchanged state without notifying.
    pub fn ascend_one(&mut self) -> &NavState {
        if self.state.is_core() {
            return &self.state;
        }
        let parent = self.state.parent();
        self.set_state(parent, ChangeOrigin::User)
    }

    /// Adopt the state a route token describes, without pushing a new route.
    pub fn apply_route(&mut self, token: &str) -> &NavState {
        let state = route::decode(token);
        self.set_state(state, ChangeOrigin::Route)
    }

    /// [`Self::apply_route`] for a raw URL hash (`#` optional).
    pub fn apply_hash(&mut self, hash: &str) -> &NavState {
        let state = route::from_hash(hash);
        self.set_state(state, ChangeOrigin::Route)
    }

    fn set_state(&mut self, next: NavState, origin: ChangeOrigin) -> &NavState {
        let previous = std::mem::replace(&mut self.state, next);
        tracing::trace!(
            from = %route::encode(&previous),
            to = %route::encode(&self.state),
            ?origin,
            "navigation"
        );

        let change = NavChange {
            previous,
            current: self.state.clone(),
            origin,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::{Level, World};

    fn world() -> World {
        World::from_json(
            r#"{"masterFields":[{"id":"mf","name":"Master","short":"s","fields":[
                {"id":"f","name":"Field","short":"s","modules":[
                    {"id":"m","name":"Module","short":"s","minis":[
                        {"id":"x","name":"Mini","body":"b"}
                    ]}
                ]}
            ]}]}"#,
        )
        .unwrap()
    }

    fn recording(controller: &mut NavigationController<World>) -> Rc<RefCell<Vec<NavChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        controller.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        log
    }

    #[test]
    fn test_starts_at_core() {
        let controller = NavigationController::new(world());
        assert_eq!(controller.state(), &NavState::Core);
        assert!(controller.context().is_empty());
    }

    #[test]
    fn test_go_transitions() {
        let mut nav = NavigationController::new(world());
        assert_eq!(nav.go_master("mf"), &NavState::master("mf"));
        assert_eq!(nav.go_field("mf", "f"), &NavState::field("mf", "f"));
        assert_eq!(nav.go_module("mf", "f", "m"), &NavState::module("mf", "f", "m"));
        assert_eq!(
            nav.go_mini("mf", "f", "m", "x"),
            &NavState::mini("mf", "f", "m", "x")
        );
        assert_eq!(nav.go_core(), &NavState::Core);
    }

    #[test]
    fn test_go_jumps_across_levels() {
        let mut nav = NavigationController::new(world());
        nav.go_mini("mf", "f", "m", "x");
        assert_eq!(nav.go_master("mf"), &NavState::master("mf"));
    }

    #[test]
    fn test_ascend_walks_to_core() {
        let mut nav = NavigationController::new(world());
        nav.go_mini("mf", "f", "m", "x");

        let expected = [
            (Level::Module, vec!["mf", "f", "m"]),
            (Level::Field, vec!["mf", "f"]),
            (Level::Master, vec!["mf"]),
            (Level::Core, vec![]),
        ];
        for (level, ids) in expected {
            let state = nav.ascend_one();
            assert_eq!(state.level(), level);
            assert_eq!(state.ids(), ids);
        }
    }

    #[test]
    fn test_ascend_at_core_is_noop() {
        let mut nav = NavigationController::new(world());
        let log = recording(&mut nav);
        assert_eq!(nav.ascend_one(), &NavState::Core);
        assert_eq!(nav.ascend_one(), &NavState::Core);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_ascend_keeps_dangling_ids() {
        let mut nav = NavigationController::new(world());
        nav.go_module("mf", "gone", "m");
        assert_eq!(nav.ascend_one(), &NavState::field("mf", "gone"));
    }

    #[test]
    fn test_user_moves_push_routes() {
        let mut nav = NavigationController::new(world());
        let log = recording(&mut nav);
        nav.go_field("mf", "f");
        nav.ascend_one();

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].previous, NavState::Core);
        assert_eq!(log[0].route_to_push().as_deref(), Some("#field|mf|f"));
        assert_eq!(log[1].origin, ChangeOrigin::User);
        assert_eq!(log[1].route_to_push().as_deref(), Some("#master|mf"));
    }

    #[test]
    fn test_apply_route_does_not_push() {
        let mut nav = NavigationController::new(world());
        let log = recording(&mut nav);
        assert_eq!(nav.apply_route("module|mf|f|m"), &NavState::module("mf", "f", "m"));

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].origin, ChangeOrigin::Route);
        assert_eq!(log[0].route_to_push(), None);
    }

    #[test]
    fn test_apply_malformed_route_goes_home() {
        let mut nav = NavigationController::new(world());
        nav.go_field("mf", "f");
        assert_eq!(nav.apply_route("module|mf"), &NavState::Core);
        nav.go_field("mf", "f");
        assert_eq!(nav.apply_hash("#"), &NavState::Core);
    }

    #[test]
    fn test_reapplying_same_route_is_noop_change() {
        let mut nav = NavigationController::new(world());
        let log = recording(&mut nav);
        nav.go_master("mf");
        nav.apply_hash("#master|mf");

        let log = log.borrow();
        assert!(!log[0].is_noop());
        assert!(log[1].is_noop());
    }

    #[test]
    fn test_repeat_click_still_resets_scroll() {
        let mut nav = NavigationController::new(world());
        let log = recording(&mut nav);
        nav.go_master("mf");
        nav.go_master("mf");
        nav.apply_hash("#master|mf");
        nav.apply_hash("#field|mf|f");

        let log = log.borrow();
        assert!(log[1].is_noop());
        assert!(log[1].resets_scroll());
        assert!(!log[2].resets_scroll());
        assert!(log[3].resets_scroll());
    }

    #[test]
    fn test_dangling_target_still_adopted() {
        let mut nav = NavigationController::new(world());
        nav.go_mini("nope", "f", "m", "x");
        assert_eq!(nav.state().level(), Level::Mini);
        assert!(nav.context().is_empty());
    }
}
