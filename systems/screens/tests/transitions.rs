use wizard_maze_core::{
    Button, Cell, ConfigurationError, Effect, Inventory, Message, Music, Position, Sound,
};
use wizard_maze_system_screens::{Screen, ScreenError, ScreenKind};

fn authored(rows: &[&[Cell]]) -> Vec<String> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.glyph()).collect())
        .collect()
}

fn scenario_levels() -> Vec<Vec<String>> {
    use Cell::*;
    vec![authored(&[
        &[Wall, Wall, Wall, Wall],
        &[Wall, Wizard, Key, Wall],
        &[Wall, Lock, Space, Wall],
        &[Wall, Wall, Wall, Wall],
    ])]
}

fn press(screen: &Screen, buttons: &[Button]) -> Screen {
    buttons.iter().fold(screen.clone(), |current, button| {
        current
            .handle(*button)
            .unwrap_or_else(|error| panic!("{button:?} failed: {error}"))
    })
}

#[test]
fn play_enters_the_maze_at_the_wizard() {
    let main = Screen::main(scenario_levels());
    let maze = press(&main, &[Button::Play]);

    assert_eq!(maze.kind(), ScreenKind::Maze);
    assert_eq!(maze.sound(), Sound::ButtonHit);
    assert_eq!(maze.effect(), Effect::Fade);
    assert_eq!(maze.music(), Music::None);
    assert_eq!(
        maze.actions(),
        &[Button::Up, Button::Down, Button::Left, Button::Right]
    );
    let state = maze.state().expect("maze carries a state");
    assert_eq!(state.position(), Position::new(1, 1));
}

#[test]
fn quiet_moves_stay_in_the_maze() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    let moved = press(&maze, &[Button::Right]);

    assert_eq!(moved.kind(), ScreenKind::Maze);
    assert_eq!(moved.sound(), Sound::KeyPickup);
    assert_eq!(moved.effect(), Effect::Fade);
    assert_eq!(
        moved.state().map(|state| state.inventory()),
        Some(Inventory::new(1, 0))
    );

    let bounced = press(&moved, &[Button::Up]);
    assert_eq!(bounced.kind(), ScreenKind::Maze);
    assert_eq!(bounced.sound(), Sound::WallHit);
    assert_eq!(bounced.state(), moved.state());
}

#[test]
fn messages_open_a_dialog_even_without_movement() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    let dialog = press(&maze, &[Button::Down]);

    assert_eq!(dialog.kind(), ScreenKind::Dialog);
    assert_eq!(dialog.sound(), Sound::DoorHit);
    assert_eq!(dialog.effect(), Effect::WipeUp);
    assert_eq!(dialog.message(), Some(Message::DoorLocked));
    assert_eq!(dialog.actions(), &[Button::Close]);
    assert_eq!(dialog.state(), maze.state(), "rejected move keeps the state");
}

#[test]
fn closing_a_dialog_resumes_the_stored_state() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    let dialog = press(&maze, &[Button::Down]);
    let resumed = press(&dialog, &[Button::Close]);

    assert_eq!(resumed.kind(), ScreenKind::Maze);
    assert_eq!(resumed.sound(), Sound::ButtonHit);
    assert_eq!(resumed.effect(), Effect::WipeUp);
    assert_eq!(resumed.state(), dialog.state());
    assert_ne!(resumed, maze, "cosmetic cues distinguish the resumed screen");
}

#[test]
fn maze_rejects_menu_buttons() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    for button in [Button::Play, Button::Close] {
        assert_eq!(
            maze.handle(button),
            Err(ScreenError::Unsupported {
                button,
                screen: ScreenKind::Maze,
            })
        );
    }
}

#[test]
fn dialog_rejects_movement() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    let dialog = press(&maze, &[Button::Down]);

    assert_eq!(
        dialog.handle(Button::Left),
        Err(ScreenError::Unsupported {
            button: Button::Left,
            screen: ScreenKind::Dialog,
        })
    );
}

#[test]
fn play_surfaces_level_errors() {
    let main = Screen::main(vec![vec![Cell::Wall.glyph().to_owned()]]);
    assert_eq!(
        main.handle(Button::Play),
        Err(ScreenError::Configuration(
            ConfigurationError::MissingStartCell
        ))
    );
}

#[test]
fn transitions_never_mutate_the_source_screen() {
    let maze = press(&Screen::main(scenario_levels()), &[Button::Play]);
    let snapshot = maze.clone();
    let _ = press(&maze, &[Button::Right, Button::Left, Button::Down]);

    assert_eq!(maze, snapshot);
}

#[test]
fn only_the_first_level_is_played() {
    let mut levels = scenario_levels();
    levels.push(vec!["unparseable".to_owned()]);
    let maze = press(&Screen::main(levels), &[Button::Play]);

    assert_eq!(maze.kind(), ScreenKind::Maze);
}
