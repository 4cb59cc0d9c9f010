//! End-to-end navigation: route tokens through the controller to resolved
//! context and view models.

use std::cell::RefCell;
use std::rc::Rc;

use lucen_core::footer::{FooterMode, FooterPolicy};
use lucen_core::route;
use lucen_core::view;
use lucen_core::{ChangeOrigin, Level, NavContext, NavState, NavigationController, World};

const NEUTRAL_WORLD: &str = r#"{
    "masterFields": [{
        "id": "mf-neutral",
        "name": "Neutral Master Field",
        "short": "A clean placeholder world.",
        "fields": [{
            "id": "field-a",
            "name": "Sample Field A",
            "short": "Placeholder field for testing.",
            "modules": [{
                "id": "mod-1",
                "name": "Module One",
                "short": "A placeholder module.",
                "minis": [{ "id": "mini-1", "name": "Mini Module 1", "body": "Example mini module." }]
            }]
        }]
    }]
}"#;

fn world() -> World {
    World::from_json(NEUTRAL_WORLD).unwrap()
}

#[test]
fn test_decode_field_route_resolves_partial_context() {
    let world = world();
    let state = route::decode("field|mf-neutral|field-a");
    assert_eq!(state, NavState::field("mf-neutral", "field-a"));
    assert_eq!(state.level(), Level::Field);

    let ctx = NavContext::resolve(&world, &state);
    assert_eq!(ctx.master.map(|m| m.id.as_str()), Some("mf-neutral"));
    assert_eq!(ctx.field.map(|f| f.id.as_str()), Some("field-a"));
    assert!(ctx.module.is_none());
    assert!(ctx.mini.is_none());
}

#[test]
fn test_dangling_mini_route_keeps_level() {
    let world = world();
    let state = route::decode("mini|mf-x|f-y|m-z|mini-w");
    assert_eq!(state.level(), Level::Mini);

    let ctx = NavContext::resolve(&world, &state);
    assert!(ctx.master.is_none());
    assert!(ctx.field.is_none());
    assert!(ctx.module.is_none());
    assert!(ctx.mini.is_none());
}

#[test]
fn test_hash_navigation_session() {
    let mut nav = NavigationController::new(world());
    let pushed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pushed);
    nav.subscribe(move |change| {
        if let Some(hash) = change.route_to_push() {
            sink.borrow_mut().push(hash);
        }
    });

    // Initial load from a shared link
    nav.apply_hash("#module|mf-neutral|field-a|mod-1");
    assert!(pushed.borrow().is_empty());

    let cards = view::cards(nav.repo(), nav.state());
    let target = cards[0].minis[0].target.clone();
    nav.go_to(target);
    assert_eq!(
        pushed.borrow().last().map(String::as_str),
        Some("#mini|mf-neutral|field-a|mod-1|mini-1")
    );

    nav.ascend_one();
    nav.ascend_one();
    assert_eq!(nav.state(), &NavState::field("mf-neutral", "field-a"));
    assert_eq!(pushed.borrow().len(), 3);

    // Back button in the browser
    nav.apply_hash("#mini|mf-neutral|field-a|mod-1|mini-1");
    assert_eq!(nav.context().mini.map(|m| m.name.as_str()), Some("Mini Module 1"));
    assert_eq!(pushed.borrow().len(), 3);
}

#[test]
fn test_every_origin_is_reported() {
    let mut nav = NavigationController::new(world());
    let origins = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&origins);
    nav.subscribe(move |change| sink.borrow_mut().push(change.origin));

    nav.go_master("mf-neutral");
    nav.apply_route("garbage");
    nav.ascend_one();

    assert_eq!(*origins.borrow(), vec![ChangeOrigin::User, ChangeOrigin::Route]);
    assert_eq!(nav.state(), &NavState::Core);
}

#[test]
fn test_round_trip_through_view_targets() {
    let world = world();
    let mut targets = vec![NavState::Core];
    let mut frontier = vec![NavState::Core];

    while let Some(state) = frontier.pop() {
        for card in view::cards(&world, &state) {
            let next = card.minis.first().map_or(card.target, |row| row.target.clone());
            if next.level() > state.level() {
                targets.push(next.clone());
                frontier.push(next);
            }
        }
    }

    assert_eq!(targets.len(), 5);
    for state in targets {
        assert_eq!(route::decode(&route::encode(&state)), state);
    }
}

#[test]
fn test_footer_policy_is_independent_of_navigation() {
    let mut nav = NavigationController::new(world());
    let mut policy = FooterPolicy::new(FooterMode::Interactive, 50.0, true);

    policy.on_intersection(true, 600.0);
    nav.go_mini("mf-neutral", "field-a", "mod-1", "mini-1");
    assert!(policy.on_scroll(580.0));
    nav.apply_hash("#core");
    assert!(!policy.on_scroll(540.0));
    assert_eq!(nav.state(), &NavState::Core);
}
