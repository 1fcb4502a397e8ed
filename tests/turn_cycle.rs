//! Full-turn integration tests: the orchestrator driving the offline
//! harness across several turns, checking the spend, idempotence and
//! escalation properties end to end.

use arena_vanguard::harness::MatchHarness;
use arena_vanguard::resources::ResourcePool;
use arena_vanguard::units::UnitClass;
use arena_vanguard::{Location, Owner, Policy, TurnOrchestrator, UnitKind, UnitRoster};

fn agent() -> TurnOrchestrator {
    TurnOrchestrator::new(UnitRoster::standard(), Policy::default())
}

#[test]
fn a_turn_places_defense_spawns_mobiles_and_submits() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());

    let receipt = agent.on_turn(&mut engine);

    assert!(receipt.placed > 0);
    assert!(engine.was_submitted());
    assert!(
        !engine.mobile_spawns().is_empty(),
        "offense always deploys something on turn 0"
    );
    // The structure budget goes to the highest-priority layout tier first.
    assert!(engine.occupant(Location::new(9, 6)).is_some());
}

#[test]
fn spend_never_exceeds_the_pre_turn_budget() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());

    for _ in 0..6 {
        let before = engine.my_resources();
        agent.on_turn(&mut engine);
        let after = engine.my_resources();

        assert!(after.structure >= 0.0 && after.mobile >= 0.0);
        assert!(after.structure <= before.structure);
        assert!(after.mobile <= before.mobile);
        engine.advance_turn();
    }
}

#[test]
fn defense_converges_and_becomes_idempotent() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());
    // Enough structure budget to stand up the entire layout in one turn.
    engine.set_my_resources(ResourcePool::new(500.0, 5.0));

    agent.on_turn(&mut engine);
    let filled: Vec<Location> = Policy::default()
        .layout
        .iter()
        .flat_map(|tier| tier.cells.iter().copied())
        .collect();
    for cell in &filled {
        assert!(
            engine.occupant(*cell).is_some(),
            "layout cell {cell:?} unfilled despite ample budget"
        );
    }

    // Second turn on the converged board: no new stationary placement
    // succeeds, and that is not an error.
    engine.advance_turn();
    let spawns_before = engine.mobile_spawns().len();
    let receipt = agent.on_turn(&mut engine);
    let mobile_placed: u32 = engine.mobile_spawns()[spawns_before..]
        .iter()
        .map(|(_, _, count)| count)
        .sum();
    assert_eq!(
        receipt.placed, mobile_placed,
        "every successful placement on a converged board is a mobile spawn"
    );
}

#[test]
fn stagnation_escalates_and_retargets_offense() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());

    // Turns 0-2 with enemy health 40, 40, 39: a one-point drop is within
    // the default margin of 3, so turn 2 must escalate.
    agent.on_turn(&mut engine);
    engine.advance_turn();
    agent.on_turn(&mut engine);
    assert!(!agent.state().is_aggressive());

    engine.advance_turn();
    engine.set_enemy_health(39.0);
    agent.on_turn(&mut engine);

    assert!(agent.state().is_aggressive());
    assert_eq!(agent.state().enemy_health_history(), &[40.0, 40.0, 39.0]);

    // Aggression is monotonic: later turns never spawn runners, even after
    // turn 3 when the parity rush would otherwise begin.
    engine.advance_turn();
    engine.set_enemy_health(20.0);
    let spawns_before = engine.mobile_spawns().len();
    agent.on_turn(&mut engine);
    assert!(agent.state().is_aggressive());
    let late_spawns = &engine.mobile_spawns()[spawns_before..];
    assert!(!late_spawns.is_empty());
    assert!(late_spawns.iter().all(|&(kind, _, _)| kind == UnitKind::Disruptor));
}

#[test]
fn breach_frames_redirect_defense_and_offense() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());
    agent.on_turn(&mut engine);

    // Mid-turn combat frames: the opponent scores twice on our left edge;
    // our own breach on their edge must be ignored.
    agent.on_action_frame(
        r#"{"events": {"breach": [
            [[5, 13], 1.0, 3, "e1", 2],
            [[20, 14], 1.0, 3, "m1", 1],
            [[4, 12], 1.0, 3, "e2", 2]
        ]}}"#,
    );
    assert_eq!(agent.state().breaches.len(), 2);
    let focus = Location::new(4, 12);
    assert_eq!(agent.state().breaches.latest(), Some(focus));

    engine.advance_turn();
    // Enough structure budget that the reactive net is affordable on top of
    // the fixed layout.
    engine.set_my_resources(ResourcePool::new(500.0, 5.0));
    let spawns_before = engine.mobile_spawns().len();
    agent.on_turn(&mut engine);

    // Reactive defense: some turret now stands in the breach neighborhood.
    let reactive = (2i8..=6).flat_map(|i| (2i8..=6).map(move |j| (i, j))).any(|(i, j)| {
        [(i, j), (-i, -j), (i, -j), (-i, j)].iter().any(|&(dx, dy)| {
            focus
                .offset(dx, dy)
                .and_then(|cell| engine.occupant(cell))
                .map(|unit| unit.kind == UnitKind::Turret && unit.owner == Owner::Friendly)
                .unwrap_or(false)
        })
    });
    assert!(reactive, "no reactive turret appeared around the breach");

    // Offense retargets the screening wave at the breach cell. The breach
    // itself is not an edge cell, so the engine rejects the spawn; what
    // matters here is that the memory-driven target was attempted, which
    // shows up as no least-risk spawn at an untouched edge.
    assert!(engine.mobile_spawns()[spawns_before..]
        .iter()
        .all(|&(_, at, _)| at == Location::new(13, 0) || at == Location::new(14, 0)));
}

#[test]
fn upgrades_follow_once_the_budget_allows() {
    let mut agent = agent();
    let mut engine = MatchHarness::new(UnitRoster::standard());
    engine.set_my_resources(ResourcePool::new(1000.0, 5.0));

    let receipt = agent.on_turn(&mut engine);
    assert!(
        receipt.upgraded > 0,
        "with ample budget the sweep upgrades this turn's placements"
    );
    assert!(engine
        .occupant(Location::new(9, 6))
        .map(|unit| unit.upgraded)
        .unwrap_or(false));

    // Pools stay lawful even under the saturation deployment.
    assert!(engine.my_resources().available(UnitClass::Stationary) >= 0.0);
    assert!(engine.my_resources().available(UnitClass::Mobile) >= 0.0);
}
