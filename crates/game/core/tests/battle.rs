use battle_core::{
    Action, ActionKind, AutoBattle, BattleConfig, BattleEngine, BattleEnv, BattleError,
    BattlePhase, CatalogOracle, EncounterMode, FloorConfig, Item, Job, Outcome, Party, PcgRng,
    SequenceRng, Session, Slot, StatKind, Storage, Target, TargetOutcome, TurnChoice, TurnEvent,
    Unit,
};
use battle_core::{EntityId, RankUp, StatList};

fn strike(multiplier: f32) -> Action {
    Action::builder("Strike", ActionKind::Damage)
        .multiplier(multiplier)
        .build()
        .unwrap()
}

fn explorer(stats: [i32; 7]) -> Unit {
    let mut unit = Unit::explorer("Aldo", 1, &stats, Job::new("Fighter", [1.0; 7])).unwrap();
    unit.actions_mut().set(Slot::Basic, Some(&strike(1.0))).unwrap();
    unit
}

fn monster(name: &str, level: i32, stats: [i32; 7], loot: Vec<Item>) -> Unit {
    let mut unit = Unit::monster(name, level, &stats, loot).unwrap();
    let tackle = Action::builder("Tackle", ActionKind::Damage).build().unwrap();
    unit.actions_mut().set(Slot::Basic, Some(&tackle)).unwrap();
    unit
}

fn party(units: impl IntoIterator<Item = Unit>) -> Party {
    let mut party = Party::new();
    for unit in units {
        party.push(unit);
    }
    party
}

fn golem() -> Unit {
    monster("Golem", 3, [1000, 1, 50, 5, 5, 10, 5], Vec::new())
}

fn session(danger: u32) -> Session {
    Session::new(FloorConfig::new(danger), BattleConfig::default(), 7)
}

#[test]
fn single_strike_wins_and_awards_the_explorer() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 50, 10, 10, 10, 20, 5]);
    let jelly = Item::new("Slime Jelly", "Wobbly.", 3);

    let report = {
        let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
        engine
            .set_party(party([monster(
                "Slime",
                2,
                [30, 10, 5, 5, 5, 10, 5],
                vec![jelly.clone()],
            )]))
            .unwrap();
        let report = engine.run(EncounterMode::Monster, &mut AutoBattle).unwrap();
        assert_eq!(engine.phase(), BattlePhase::Concluded(Outcome::Victory));
        report
    };

    assert_eq!(report.outcome, Outcome::Victory);
    assert_eq!(report.turns, 1);
    assert!(report.events.contains(&TurnEvent::Defeated {
        turn: 1,
        unit: EntityId::hostile(0),
    }));

    let rewards = report.rewards.unwrap();
    assert_eq!(rewards.experience, 20);
    assert_eq!(rewards.mastery, 5);
    assert_eq!(rewards.rank_up, None);
    assert_eq!(rewards.looted, vec![jelly.clone()]);
    assert!(rewards.lost.is_empty());

    use battle_core::Progression;
    assert_eq!(player.level().value(), 21);
    let kit = player.explorer_kit().unwrap();
    assert_eq!(kit.job.rank().value(), 6);
    assert_eq!(kit.bag.name_search("Slime Jelly"), Some(0));
}

#[test]
fn loot_that_does_not_fit_is_lost() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 50, 10, 10, 10, 20, 5]);
    let bag = &mut player.explorer_mut().unwrap().bag;
    while !bag.is_full() {
        bag.store(Item::new("Pebble", "", 0)).unwrap();
    }

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine
        .set_party(party([monster(
            "Slime",
            1,
            [30, 10, 5, 5, 5, 10, 5],
            vec![Item::new("Slime Jelly", "", 3)],
        )]))
        .unwrap();
    let report = engine.run(EncounterMode::Monster, &mut AutoBattle).unwrap();

    let rewards = report.rewards.unwrap();
    assert!(rewards.looted.is_empty());
    assert_eq!(rewards.lost, vec![Item::new("Slime Jelly", "", 3)]);
}

#[test]
fn self_buff_reverts_after_its_duration() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let focus = Action::builder("Focus", ActionKind::Buff(StatList::from_iter([StatKind::Atk])))
        .target(Target::SelfOnly)
        .duration(2)
        .cooldown(5)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Skill, Some(&focus)).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([golem()])).unwrap();

    // turn 1: player buffs ATK by 25% of 40
    assert_eq!(engine.step(&mut AutoBattle).unwrap(), None);
    assert_eq!(engine.player().stat(StatKind::Atk), 50);
    assert_eq!(engine.active_effects().len(), 1);

    // turns 2-3: golem, then the player strikes; one turn of the buff is used
    engine.step(&mut AutoBattle).unwrap();
    engine.step(&mut AutoBattle).unwrap();
    assert_eq!(engine.player().stat(StatKind::Atk), 50);

    // turns 4-5: the buff expires at the end of the player's turn
    engine.step(&mut AutoBattle).unwrap();
    engine.step(&mut AutoBattle).unwrap();
    assert_eq!(engine.player().stat(StatKind::Atk), 40);
    assert!(engine.active_effects().is_empty());

    let player_slots: Vec<Slot> = engine
        .events()
        .iter()
        .filter_map(|event| match event {
            TurnEvent::Acted { actor, slot, .. } if actor.is_player() => Some(*slot),
            _ => None,
        })
        .collect();
    assert_eq!(player_slots, [Slot::Skill, Slot::Basic, Slot::Basic]);
}

#[test]
fn debuff_expires_on_the_target_turn() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let sunder = Action::builder("Sunder", ActionKind::Debuff(StatList::from_iter([StatKind::Def])))
        .duration(1)
        .cooldown(3)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Skill, Some(&sunder)).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([golem()])).unwrap();

    engine.step(&mut AutoBattle).unwrap();
    // round(50 × 25%) = 13
    assert_eq!(engine.party()[0].stat(StatKind::Def), 37);

    engine.step(&mut AutoBattle).unwrap();
    assert_eq!(engine.party()[0].stat(StatKind::Def), 50);
}

#[test]
fn critical_units_reach_for_their_critical_action() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let last_stand = Action::builder("Last Stand", ActionKind::Damage)
        .multiplier(2.0)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Critical, Some(&last_stand)).unwrap();
    player.stats_mut().get_mut(StatKind::Hp).lower_by(80).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([golem()])).unwrap();
    engine.step(&mut AutoBattle).unwrap();

    match &engine.events()[0] {
        TurnEvent::Acted { slot, action, .. } => {
            assert_eq!(*slot, Slot::Critical);
            assert_eq!(action, "Last Stand");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn failed_flee_loses_the_turn() {
    let catalog = CatalogOracle::new();
    // flee roll 10 < 30 fails, golem hits with 0, flee roll 70 >= 30 succeeds
    let rng = SequenceRng::new(vec![10, 0, 70]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);

    let mut engine = BattleEngine::new(session(3), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([golem()])).unwrap();

    let mut flee = |_: &Unit, _: &[Unit]| TurnChoice::Flee;
    let report = engine.run(EncounterMode::Monster, &mut flee).unwrap();

    assert_eq!(report.outcome, Outcome::Fled);
    assert_eq!(report.turns, 3);
    assert_eq!(report.events[0], TurnEvent::FleeFailed { turn: 1 });
    assert_eq!(report.events[2], TurnEvent::Fled { turn: 3 });
    assert!(report.rewards.is_none());
    assert_eq!(engine.party()[0].stat(StatKind::Hp), 1000);
}

#[test]
fn overwhelming_hostiles_defeat_the_player() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([10, 1, 0, 0, 0, 1, 0]);
    let ogre = monster("Ogre", 5, [500, 60, 50, 0, 0, 30, 0], Vec::new());

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([ogre])).unwrap();
    let report = engine.run(EncounterMode::Monster, &mut AutoBattle).unwrap();

    assert_eq!(report.outcome, Outcome::Defeat);
    assert_eq!(report.turns, 1);
    drop(engine);
    assert!(!player.is_alive());
}

#[test]
fn boss_changes_form_before_falling() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 100, 10, 10, 10, 20, 5]);
    let mut drake = Unit::boss(
        "FireDrake",
        10,
        &[40, 5, 0, 5, 5, 5, 5],
        vec![Item::new("Drake Scale", "", 40)],
        1,
        StatList::from_iter([StatKind::Hp]),
    )
    .unwrap();
    drake
        .actions_mut()
        .set(Slot::Basic, Some(&strike(1.0)))
        .unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([drake])).unwrap();

    assert_eq!(engine.step(&mut AutoBattle).unwrap(), None);
    let boss = &engine.party()[0];
    assert!(boss.is_alive());
    assert_eq!(boss.stat(StatKind::Hp), 41);
    assert_eq!(boss.forms(), 0);
    assert!(engine.events().contains(&TurnEvent::Morphed {
        turn: 1,
        unit: EntityId::hostile(0),
        forms_left: 0,
    }));

    let report = engine.run(EncounterMode::Boss, &mut AutoBattle).unwrap();
    assert_eq!(report.outcome, Outcome::Victory);
    assert_eq!(report.turns, 3);

    let rewards = report.rewards.unwrap();
    assert_eq!(rewards.experience, 100);
    assert_eq!(rewards.rank_up, Some(RankUp::default()));
    assert_eq!(rewards.looted.len(), 1);
}

#[test]
fn stalemates_hit_the_turn_limit() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 1, 100, 10, 10, 20, 5]);
    let config = BattleConfig::default().with_max_turns(4);

    let mut engine = BattleEngine::new(
        Session::new(FloorConfig::new(1), config, 0),
        BattleEnv::new(&catalog, &rng),
        &mut player,
    );
    engine.set_party(party([golem()])).unwrap();

    let error = engine.run(EncounterMode::Monster, &mut AutoBattle).unwrap_err();
    assert_eq!(error, BattleError::TurnLimitExceeded(4));
    assert_eq!(engine.turn(), 4);
}

#[test]
fn turn_limit_reverts_the_player_modifiers() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 100, 10, 10, 20, 5]);
    let focus = Action::builder("Focus", ActionKind::Buff(StatList::from_iter([StatKind::Atk])))
        .target(Target::SelfOnly)
        .duration(50)
        .cooldown(50)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Skill, Some(&focus)).unwrap();
    let config = BattleConfig::default().with_max_turns(4);

    let mut engine = BattleEngine::new(
        Session::new(FloorConfig::new(1), config, 0),
        BattleEnv::new(&catalog, &rng),
        &mut player,
    );
    engine.set_party(party([golem()])).unwrap();

    engine.step(&mut AutoBattle).unwrap();
    assert_eq!(engine.player().stat(StatKind::Atk), 50);

    let error = engine.run(EncounterMode::Monster, &mut AutoBattle).unwrap_err();
    assert_eq!(error, BattleError::TurnLimitExceeded(4));
    assert!(engine.active_effects().is_empty());
    drop(engine);

    let atk = player.stats().get(StatKind::Atk);
    assert_eq!((atk.current(), atk.max()), (40, 40));
}

fn acted_targets(event: &TurnEvent) -> Vec<(EntityId, TargetOutcome)> {
    match event {
        TurnEvent::Acted { outcomes, .. } => outcomes.clone(),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn missed_attacks_leave_the_target_untouched() {
    let catalog = CatalogOracle::new();
    // single candidate needs no targeting roll; accuracy roll 70 >= 50 misses
    let rng = SequenceRng::new(vec![70]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let wild_swing = Action::builder("Wild Swing", ActionKind::Damage)
        .multiplier(3.0)
        .accuracy(50)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Basic, Some(&wild_swing)).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([golem()])).unwrap();
    engine.step(&mut AutoBattle).unwrap();

    assert_eq!(
        acted_targets(&engine.events()[0]),
        [(EntityId::hostile(0), TargetOutcome::Missed)]
    );
    assert_eq!(engine.party()[0].stat(StatKind::Hp), 1000);
}

#[test]
fn sweeping_attacks_hit_every_hostile() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let sweep = Action::builder("Sweep", ActionKind::Damage)
        .target(Target::AllOpponents)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Basic, Some(&sweep)).unwrap();
    let slime = || monster("Slime", 1, [100, 5, 5, 5, 5, 5, 5], Vec::new());

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([slime(), slime(), slime()])).unwrap();
    engine.step(&mut AutoBattle).unwrap();

    let hit = TargetOutcome::Damaged { amount: 35 };
    assert_eq!(
        acted_targets(&engine.events()[0]),
        [
            (EntityId::hostile(0), hit.clone()),
            (EntityId::hostile(1), hit.clone()),
            (EntityId::hostile(2), hit),
        ]
    );
    assert!(engine.party().iter().all(|slime| slime.stat(StatKind::Hp) == 65));
}

#[test]
fn ally_buffs_stay_on_the_caster_side() {
    let catalog = CatalogOracle::new();
    let rng = SequenceRng::new(vec![0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let guard = Action::builder("Guard", ActionKind::Buff(StatList::from_iter([StatKind::Def])))
        .target(Target::Ally)
        .duration(2)
        .cooldown(3)
        .build()
        .unwrap();
    player.actions_mut().set(Slot::Skill, Some(&guard)).unwrap();

    let rally = Action::builder("Rally", ActionKind::Buff(StatList::from_iter([StatKind::Atk])))
        .target(Target::AllAllies)
        .duration(2)
        .cooldown(3)
        .build()
        .unwrap();
    let mut shaman = monster("Shaman", 2, [100, 20, 5, 5, 5, 50, 5], Vec::new());
    shaman.actions_mut().set(Slot::Skill, Some(&rally)).unwrap();
    let grunt = monster("Grunt", 1, [100, 12, 5, 5, 5, 10, 5], Vec::new());
    let mut fallen = monster("Fallen", 1, [100, 16, 5, 5, 5, 10, 5], Vec::new());
    fallen.stats_mut().get_mut(StatKind::Hp).lower_by(100).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([shaman, grunt, fallen])).unwrap();

    // turn 1: the shaman rallies its living allies, itself included
    engine.step(&mut AutoBattle).unwrap();
    let rallied: Vec<EntityId> = acted_targets(&engine.events()[0])
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(rallied, [EntityId::hostile(0), EntityId::hostile(1)]);
    assert_eq!(engine.party()[0].stat(StatKind::Atk), 25);
    assert_eq!(engine.party()[1].stat(StatKind::Atk), 15);
    assert_eq!(engine.party()[2].stat(StatKind::Atk), 16);
    assert_eq!(engine.player().stat(StatKind::Atk), 40);

    // turn 2: the player guards; its side is the player alone
    engine.step(&mut AutoBattle).unwrap();
    let guarded: Vec<EntityId> = acted_targets(&engine.events()[1])
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(guarded, [EntityId::PLAYER]);
    assert_eq!(engine.player().stat(StatKind::Def), 13);
    assert_eq!(engine.party()[1].stat(StatKind::Def), 5);
}

#[test]
fn single_target_attacks_skip_the_dead() {
    let catalog = CatalogOracle::new();
    // targeting roll 1 picks the second living slime, accuracy roll 0 hits
    let rng = SequenceRng::new(vec![1, 0]);
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let slime = || monster("Slime", 1, [100, 5, 5, 5, 5, 5, 5], Vec::new());
    let mut dead = slime();
    dead.stats_mut().get_mut(StatKind::Hp).lower_by(100).unwrap();

    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);
    engine.set_party(party([slime(), dead, slime()])).unwrap();
    engine.step(&mut AutoBattle).unwrap();

    assert_eq!(
        acted_targets(&engine.events()[0]),
        [(EntityId::hostile(2), TargetOutcome::Damaged { amount: 35 })]
    );
    assert_eq!(engine.party()[0].stat(StatKind::Hp), 100);
    assert_eq!(engine.party()[1].stat(StatKind::Hp), 0);
    assert_eq!(engine.party()[2].stat(StatKind::Hp), 65);
}

#[test]
fn turns_require_a_party() {
    let catalog = CatalogOracle::new();
    let rng = PcgRng;
    let mut player = explorer([100, 40, 10, 10, 10, 20, 5]);
    let mut engine = BattleEngine::new(session(1), BattleEnv::new(&catalog, &rng), &mut player);

    let error = engine.step(&mut AutoBattle).unwrap_err();
    assert!(matches!(
        error,
        BattleError::InvalidPhase {
            phase: BattlePhase::Idle,
            ..
        }
    ));
}

fn slime_catalog() -> CatalogOracle {
    CatalogOracle::new()
        .with_hostile(
            "Slime",
            monster(
                "Slime",
                1,
                [30, 12, 5, 5, 5, 10, 5],
                vec![Item::new("Slime Jelly", "", 3)],
            ),
        )
        .with_hostile("Bat", monster("Bat", 2, [20, 14, 3, 5, 5, 25, 5], Vec::new()))
}

fn replay(seed: u64) -> (battle_core::BattleReport, Unit) {
    let catalog = slime_catalog();
    let rng = PcgRng;
    let floor = FloorConfig::new(2).with_roster(vec!["Slime".into(), "Bat".into()], vec![60, 40]);
    let mut player = explorer([500, 60, 10, 10, 10, 20, 5]);

    let report = BattleEngine::new(
        Session::new(floor, BattleConfig::default(), seed),
        BattleEnv::new(&catalog, &rng),
        &mut player,
    )
    .run(EncounterMode::Monster, &mut AutoBattle)
    .unwrap();
    (report, player)
}

#[test]
fn same_seed_replays_the_same_battle() {
    let (first, first_player) = replay(42);
    let (second, second_player) = replay(42);

    assert_eq!(first, second);
    assert_eq!(first_player, second_player);
    assert_eq!(first.outcome, Outcome::Victory);
    assert!((1..=BattleConfig::MAX_PARTY).contains(&first.hostiles.len()));
}
