//! Machine integration tests: selection, dispense animation, settle alarm and
//! reset, driven through a bare ECS world without a window or audio device.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use emojivend::components::button::{Button, ButtonId};
use emojivend::components::emoji::{Emoji, EmojiPiece, StockPiece};
use emojivend::components::alarm::Alarm;
use emojivend::components::worldposition::WorldPosition;
use emojivend::events::audio::AudioCmd;
use emojivend::events::dispense::{DispenseCompleteEvent, ResetRequestEvent};
use emojivend::events::pointer::PointerEvent;
use emojivend::game;
use emojivend::resources::dispenser::{DispenseState, Dispenser};
use emojivend::resources::emojimeshes::EmojiMeshes;
use emojivend::resources::gameconfig::GameConfig;
use emojivend::resources::interaction::{InteractionState, NO_SELECTION_MESSAGE};
use emojivend::resources::modal::ResultModal;
use emojivend::resources::worldtime::WorldTime;
use emojivend::systems::dispense::{
    dispense_complete_observer, dispense_system, reset_observer, settle_alarm_observer,
};
use emojivend::systems::selection::{button_pose_system, pointer_observer};
use emojivend::systems::time::{update_alarms, update_world_time};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn v3_approx_eq(a: Vector3, b: Vector3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[derive(Resource, Default)]
struct Completed(Vec<Emoji>);

fn record_completion(trigger: On<DispenseCompleteEvent>, mut completed: ResMut<Completed>) {
    completed.0.push(trigger.event().emoji);
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InteractionState::default());
    world.insert_resource(Dispenser::default());
    world.insert_resource(EmojiMeshes::new());
    world.insert_resource(ResultModal::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(Completed::default());
    world.init_resource::<Messages<AudioCmd>>();

    world.add_observer(pointer_observer);
    world.add_observer(settle_alarm_observer);
    world.add_observer(dispense_complete_observer);
    world.add_observer(reset_observer);
    world.add_observer(record_completion);
    world.flush();

    let setup = world.register_system(game::setup);
    world.run_system(setup).unwrap();
    // setup queues sound loads; tests only look at plays
    world.resource_mut::<Messages<AudioCmd>>().clear();
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(button_pose_system);
    schedule.add_systems(update_alarms);
    schedule.add_systems(dispense_system.after(update_alarms));
    schedule
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

fn click(world: &mut World, button: ButtonId) {
    world.trigger(PointerEvent::click(button));
    world.flush();
}

fn position(world: &World, emoji: Emoji) -> Vector3 {
    let entity = world.resource::<EmojiMeshes>().get(emoji).unwrap();
    world.get::<WorldPosition>(entity).unwrap().pos
}

fn played(world: &mut World) -> Vec<String> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .filter_map(|cmd| match cmd {
            AudioCmd::PlayFx { id } => Some(id),
            _ => None,
        })
        .collect()
}

fn completed(world: &World) -> Vec<Emoji> {
    world.resource::<Completed>().0.clone()
}

#[test]
fn setup_spawns_machine() {
    let mut world = make_world();

    for emoji in Emoji::ALL {
        assert!(v3_approx_eq(position(&world, emoji), emoji.slot().rest));
    }
    let pieces = world.query::<&EmojiPiece>().iter(&world).count();
    let stock = world.query::<&StockPiece>().iter(&world).count();
    let buttons = world.query::<&Button>().iter(&world).count();
    assert_eq!(pieces, 5);
    assert_eq!(stock, 7);
    assert_eq!(buttons, ButtonId::ALL.len());
}

#[test]
fn setup_queues_every_sound() {
    let mut world = World::new();
    world.insert_resource(GameConfig::new());
    world.insert_resource(EmojiMeshes::new());
    world.init_resource::<Messages<AudioCmd>>();
    let setup = world.register_system(game::setup);
    world.run_system(setup).unwrap();

    let loads: Vec<String> = world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .filter_map(|cmd| match cmd {
            AudioCmd::LoadFx { id, .. } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(loads, vec!["cancel", "check", "emoji"]);
}

#[test]
fn sad_smiley_end_to_end() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    click(&mut world, ButtonId::Emoji(Emoji::SadSmiley));
    click(&mut world, ButtonId::Ok);
    assert_eq!(played(&mut world), vec!["emoji", "check"]);
    assert!(world.resource::<InteractionState>().input_disabled);

    // 2.0 s: landed at 1.1 s, still settling
    for _ in 0..20 {
        tick(&mut world, &mut schedule, 0.1);
        assert!(world.resource::<InteractionState>().input_disabled);
    }
    assert!(completed(&world).is_empty());
    assert!(matches!(
        world.resource::<Dispenser>().state(),
        DispenseState::Settling {
            emoji: Emoji::SadSmiley,
            alarm: Some(_)
        }
    ));
    assert_eq!(
        position(&world, Emoji::SadSmiley),
        Emoji::SadSmiley.slot().end()
    );

    for _ in 0..20 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert_eq!(completed(&world), vec![Emoji::SadSmiley]);
    assert!(world.resource::<Dispenser>().is_idle());
    assert!(!world.resource::<InteractionState>().input_disabled);
    assert_eq!(
        world.resource::<ResultModal>().showing(),
        Some(Emoji::SadSmiley)
    );
    assert_eq!(world.query::<&Alarm>().iter(&world).count(), 0);

    // closing the modal puts everything back
    world.trigger(ResetRequestEvent {});
    world.flush();
    assert!(!world.resource::<ResultModal>().is_open());
    assert_eq!(world.resource::<InteractionState>().selected, None);
    assert!(v3_approx_eq(
        position(&world, Emoji::SadSmiley),
        Emoji::SadSmiley.slot().rest
    ));
}

#[test]
fn sad_smiley_completes_on_the_deadline_tick() {
    // (500 + 600) ms fall plus 1500 ms settle
    for (dt, deadline_tick) in [(0.1, 26), (1.0 / 60.0, 156), (1.0 / 120.0, 312)] {
        let mut world = make_world();
        let mut schedule = make_schedule();
        click(&mut world, ButtonId::Emoji(Emoji::SadSmiley));
        click(&mut world, ButtonId::Ok);

        for _ in 1..deadline_tick {
            tick(&mut world, &mut schedule, dt);
        }
        assert!(completed(&world).is_empty(), "dt {}: completed early", dt);

        tick(&mut world, &mut schedule, dt);
        assert_eq!(completed(&world), vec![Emoji::SadSmiley], "dt {}", dt);

        for _ in 0..30 {
            tick(&mut world, &mut schedule, dt);
        }
        assert_eq!(completed(&world).len(), 1);
    }
}

#[test]
fn fall_path_is_l_shaped() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let slot = *Emoji::Smiley.slot();

    click(&mut world, ButtonId::Emoji(Emoji::Smiley));
    click(&mut world, ButtonId::Ok);

    let mut last = slot.rest;
    for _ in 0..25 {
        tick(&mut world, &mut schedule, 0.1);
        let p = position(&world, Emoji::Smiley);
        assert!(p.x >= last.x - EPSILON, "moved backwards");
        assert!(p.y <= last.y + EPSILON, "moved up");
        assert!(approx_eq(p.z, slot.rest.z));
        // never below the rest height before reaching the corner
        if p.x < slot.corner().x - EPSILON {
            assert!(approx_eq(p.y, slot.rest.y));
        }
        last = p;
    }
    assert_eq!(position(&world, Emoji::Smiley), slot.end());
}

#[test]
fn clicks_ignored_while_dispensing() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    click(&mut world, ButtonId::Emoji(Emoji::HeartSmiley));
    click(&mut world, ButtonId::Ok);
    played(&mut world);
    tick(&mut world, &mut schedule, 0.3);

    for button in ButtonId::ALL {
        click(&mut world, button);
    }
    assert!(played(&mut world).is_empty());
    let interaction = world.resource::<InteractionState>();
    assert_eq!(interaction.selected, Some(Emoji::HeartSmiley));
    assert_eq!(
        world.resource::<Dispenser>().active_emoji(),
        Some(Emoji::HeartSmiley)
    );
}

#[test]
fn ok_without_selection_sets_message() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    click(&mut world, ButtonId::Ok);
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.resource::<Dispenser>().is_idle());
    assert_eq!(
        world.resource::<InteractionState>().message,
        Some(NO_SELECTION_MESSAGE)
    );

    click(&mut world, ButtonId::Emoji(Emoji::ThreeHearts));
    assert_eq!(world.resource::<InteractionState>().message, None);
}

#[test]
fn cancel_clears_selection() {
    let mut world = make_world();
    click(&mut world, ButtonId::Emoji(Emoji::SparkleHeart));
    click(&mut world, ButtonId::Cancel);
    assert_eq!(world.resource::<InteractionState>().selected, None);
    assert_eq!(played(&mut world), vec!["emoji", "cancel"]);
}

#[test]
fn reset_during_fall_restores_everything() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    click(&mut world, ButtonId::Emoji(Emoji::Smiley));
    click(&mut world, ButtonId::Ok);
    for _ in 0..8 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert!(!v3_approx_eq(
        position(&world, Emoji::Smiley),
        Emoji::Smiley.slot().rest
    ));

    world.trigger(ResetRequestEvent {});
    world.flush();

    for emoji in Emoji::ALL {
        assert!(v3_approx_eq(position(&world, emoji), emoji.slot().rest));
    }
    let interaction = world.resource::<InteractionState>();
    assert_eq!(interaction.selected, None);
    assert!(!interaction.input_disabled);
    assert!(world.resource::<Dispenser>().is_idle());

    for _ in 0..40 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert!(completed(&world).is_empty());
    assert!(v3_approx_eq(
        position(&world, Emoji::Smiley),
        Emoji::Smiley.slot().rest
    ));
}

#[test]
fn reset_during_settle_cancels_alarm() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    click(&mut world, ButtonId::Emoji(Emoji::SadSmiley));
    click(&mut world, ButtonId::Ok);
    for _ in 0..15 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert_eq!(world.query::<&Alarm>().iter(&world).count(), 1);

    world.trigger(ResetRequestEvent {});
    world.flush();
    assert_eq!(world.query::<&Alarm>().iter(&world).count(), 0);

    for _ in 0..40 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert!(completed(&world).is_empty());
    assert!(!world.resource::<ResultModal>().is_open());
}

#[test]
fn second_dispense_after_reset() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    for emoji in [Emoji::ThreeHearts, Emoji::Smiley] {
        click(&mut world, ButtonId::Emoji(emoji));
        click(&mut world, ButtonId::Ok);
        for _ in 0..50 {
            tick(&mut world, &mut schedule, 0.1);
        }
        world.trigger(ResetRequestEvent {});
        world.flush();
    }
    assert_eq!(completed(&world), vec![Emoji::ThreeHearts, Emoji::Smiley]);
}

#[test]
fn hovered_buttons_push_in() {
    let mut world = make_world();
    let mut schedule = make_schedule();

    world.trigger(PointerEvent::enter(ButtonId::Ok));
    world.flush();
    click(&mut world, ButtonId::Emoji(Emoji::Smiley));
    tick(&mut world, &mut schedule, 0.016);

    let mut q = world.query::<(&Button, &WorldPosition)>();
    for (button, wp) in q.iter(&world) {
        let expected_x = match button.id {
            ButtonId::Ok => 2.0,
            ButtonId::Emoji(Emoji::Smiley) => 1.95,
            other => other.rest().x,
        };
        assert!(approx_eq(wp.pos.x, expected_x), "{} at {}", button.id, wp.pos.x);
    }
}
