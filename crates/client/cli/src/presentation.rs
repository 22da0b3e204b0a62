//! Plain-text rendering of battle reports.

use battle_core::{
    BattleEngine, BattleReport, EntityId, Progression, Rewards, StatKind, TargetOutcome,
    TurnEvent, Unit,
};

fn name_of(engine: &BattleEngine<'_>, id: EntityId) -> String {
    engine.unit(id).name().to_string()
}

fn describe_outcome(outcome: &TargetOutcome) -> String {
    match outcome {
        TargetOutcome::Missed => "missed".to_string(),
        TargetOutcome::Damaged { amount } => format!("{amount} damage"),
        TargetOutcome::Modified { changes } => changes
            .iter()
            .map(|change| format!("{} {:+}", change.stat, change.delta))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn describe_event(engine: &BattleEngine<'_>, event: &TurnEvent) -> String {
    match event {
        TurnEvent::Acted {
            turn,
            actor,
            slot,
            action,
            outcomes,
        } => {
            let targets = outcomes
                .iter()
                .map(|(target, outcome)| {
                    format!("{}: {}", name_of(engine, *target), describe_outcome(outcome))
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!(
                "[{turn:>3}] {} uses {action} ({slot}) -> {targets}",
                name_of(engine, *actor)
            )
        }
        TurnEvent::Passed { turn, actor } => {
            format!("[{turn:>3}] {} waits", name_of(engine, *actor))
        }
        TurnEvent::FleeFailed { turn } => format!("[{turn:>3}] could not get away"),
        TurnEvent::Fled { turn } => format!("[{turn:>3}] got away safely"),
        TurnEvent::Morphed {
            turn,
            unit,
            forms_left,
        } => format!(
            "[{turn:>3}] {} changes form ({forms_left} left)",
            name_of(engine, *unit)
        ),
        TurnEvent::Defeated { turn, unit } => {
            format!("[{turn:>3}] {} is defeated", name_of(engine, *unit))
        }
    }
}

/// Prints the encounter summary, and the turn log when `verbose` is set.
pub fn print_report(engine: &BattleEngine<'_>, report: &BattleReport, verbose: bool) {
    println!("Encountered: {}", report.hostiles.join(", "));
    if verbose {
        for event in &report.events {
            println!("{}", describe_event(engine, event));
        }
    }
    println!(
        "Outcome: {} after {} turns ({} rounds)",
        report.outcome, report.turns, report.rounds
    );
}

/// Prints the explorer's state after the battle.
pub fn print_player(player: &Unit, rewards: Option<&Rewards>) {
    let hp = player.stats().get(StatKind::Hp);
    println!(
        "{}: level {}, HP {}/{}",
        player.name(),
        player.level().value(),
        hp.current(),
        hp.max()
    );

    let Some(rewards) = rewards else {
        return;
    };
    println!(
        "Gained {} experience and {} mastery",
        rewards.experience, rewards.mastery
    );
    if let Some(kit) = player.explorer_kit() {
        println!(
            "Job {} rank {}, explorer rank {}",
            kit.job.name(),
            kit.job.rank().value(),
            kit.rank.letter()
        );
    }
    for item in &rewards.looted {
        println!("  + {}", item.name);
    }
    for item in &rewards.lost {
        println!("  - {} (no room)", item.name);
    }
}
