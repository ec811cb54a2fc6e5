//! Emoji vending machine entry point.
//!
//! An interactive 3D vending machine built on:
//! - **raylib** for windowing, 3D drawing, picking and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world
//! 2. Spawn the machine and queue the sound effects
//! 3. Register observers and systems
//! 4. Each frame: read input, apply pointer events, advance the dispense
//!    animation and its settle alarm, then render
//! 5. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use emojivend::events::switchdebug::switch_debug_observer;
use emojivend::game;
use emojivend::resources::audio::{setup_audio, shutdown_audio};
use emojivend::resources::camera3d::Camera3DRes;
use emojivend::resources::debugmode::DebugMode;
use emojivend::resources::dispenser::Dispenser;
use emojivend::resources::emojimeshes::EmojiMeshes;
use emojivend::resources::emojitextures::EmojiTextures;
use emojivend::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use emojivend::resources::input::InputState;
use emojivend::resources::interaction::InteractionState;
use emojivend::resources::modal::ResultModal;
use emojivend::resources::worldtime::WorldTime;
use emojivend::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use emojivend::systems::dispense::{
    dispense_complete_observer, dispense_system, reset_observer, settle_alarm_observer,
};
use emojivend::systems::gameconfig::apply_gameconfig_changes;
use emojivend::systems::input::update_input_state;
use emojivend::systems::render::{apply_cursor, render_system};
use emojivend::systems::selection::{button_pose_system, pointer_observer};
use emojivend::systems::time::{update_alarms, update_world_time};

/// Emoji vending machine
#[derive(Parser)]
#[command(version, about = "An interactive 3D emoji vending machine.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the current configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: write the configuration and quit (no window/audio needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Configuration written to {}", config.path.display()),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (w, h) = (config.window.width, config.window.height);
    let mut builder = raylib::init();
    builder
        .size(w as i32, h as i32)
        .resizable()
        .msaa_4x()
        .title("Emoji Vending Machine");
    if config.window.vsync {
        builder.vsync();
    }
    if config.window.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    // Escape closes the result modal, not the window
    rl.set_exit_key(None);

    let textures = EmojiTextures::load(&mut rl, &thread, &config.assets.images);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(InteractionState::default());
    world.insert_resource(Dispenser::new(config.dispense));
    world.insert_resource(EmojiMeshes::new());
    world.insert_resource(ResultModal::default());
    world.insert_resource(Camera3DRes::default());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);

    // Init audio; must precede setup, which queues the sound loads
    setup_audio(&mut world);

    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(switch_debug_observer);
    world.add_observer(pointer_observer);
    world.add_observer(settle_alarm_observer);
    world.add_observer(dispense_complete_observer);
    world.add_observer(reset_observer);
    world.flush();

    let setup = world.register_system(game::setup);
    if let Err(e) = world.run_system(setup) {
        error!("scene setup failed: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state);
    update.add_systems(button_pose_system.after(update_input_state));
    update.add_systems(update_alarms.after(update_input_state));
    // alarms armed on the landing frame start counting next frame
    update.add_systems(dispense_system.after(update_alarms));
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(dispense_system),
    );
    update.add_systems(apply_cursor.after(update_input_state));
    update.add_systems(render_system.after(dispense_system).after(button_pose_system));

    info!("machine ready");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
