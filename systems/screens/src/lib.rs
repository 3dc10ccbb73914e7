#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Screen state machine that turns rule outcomes into navigable UI nodes.
//!
//! A [`Screen`] is one of three closed variants. Each exposes a fixed set of
//! legal [`Button`] actions and a pure [`Screen::handle`] transition that
//! allocates the successor screen. Maze moves delegate to the rule engine in
//! `wizard-maze-system-logic`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use wizard_maze_core::{Button, ConfigurationError, Effect, Message, Music, Position, Sound};
use wizard_maze_system_logic::Logic;
use wizard_maze_world::State;

/// Identifies a screen variant without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ScreenKind {
    /// Title menu.
    Main,
    /// Maze in play.
    Maze,
    /// Dialog overlaying the maze.
    Dialog,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Main => "main",
            Self::Maze => "maze",
            Self::Dialog => "dialog",
        };
        f.write_str(name)
    }
}

/// Failures raised by [`Screen::handle`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// The caller pressed a button the screen does not offer.
    #[error("button {button:?} is not supported on the {screen} screen")]
    Unsupported {
        /// Requested button.
        button: Button,
        /// Screen that received the request.
        screen: ScreenKind,
    },
    /// The screen offers the button but has no transition for it.
    #[error("button {button:?} is offered on the {screen} screen but has no transition")]
    NotImplemented {
        /// Requested button.
        button: Button,
        /// Screen that received the request.
        screen: ScreenKind,
    },
    /// The level data could not be simulated.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// One navigable unit of the screen graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    /// Title menu.
    Main(MainScreen),
    /// Maze in play.
    Maze(MazeScreen),
    /// Dialog overlaying the maze.
    Dialog(DialogScreen),
}

impl Screen {
    /// Creates the title menu for the provided authored levels.
    #[must_use]
    pub fn main(levels: Vec<Vec<String>>) -> Self {
        Self::Main(MainScreen::new(levels))
    }

    /// Variant of the screen.
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Main(_) => ScreenKind::Main,
            Self::Maze(_) => ScreenKind::Maze,
            Self::Dialog(_) => ScreenKind::Dialog,
        }
    }

    /// Buttons the screen offers, in presentation order.
    #[must_use]
    pub const fn actions(&self) -> &'static [Button] {
        match self {
            Self::Main(_) => &MainScreen::ACTIONS,
            Self::Maze(_) => &MazeScreen::ACTIONS,
            Self::Dialog(_) => &DialogScreen::ACTIONS,
        }
    }

    /// Sound cue played when the screen appears.
    #[must_use]
    pub const fn sound(&self) -> Sound {
        match self {
            Self::Main(screen) => screen.sound,
            Self::Maze(screen) => screen.sound,
            Self::Dialog(screen) => screen.sound,
        }
    }

    /// Background music of the screen.
    #[must_use]
    pub const fn music(&self) -> Music {
        match self {
            Self::Main(screen) => screen.music,
            Self::Maze(screen) => screen.music,
            Self::Dialog(screen) => screen.music,
        }
    }

    /// Transition effect used when the screen appears.
    #[must_use]
    pub const fn effect(&self) -> Effect {
        match self {
            Self::Main(screen) => screen.effect,
            Self::Maze(screen) => screen.effect,
            Self::Dialog(screen) => screen.effect,
        }
    }

    /// Game state bound to the screen, if any.
    #[must_use]
    pub const fn state(&self) -> Option<&State> {
        match self {
            Self::Main(_) => None,
            Self::Maze(screen) => Some(&screen.state),
            Self::Dialog(screen) => Some(&screen.state),
        }
    }

    /// Dialog text shown on the screen, if any.
    #[must_use]
    pub const fn message(&self) -> Option<Message> {
        match self {
            Self::Dialog(screen) => Some(screen.message),
            Self::Main(_) | Self::Maze(_) => None,
        }
    }

    /// Resolves a button press into the successor screen.
    pub fn handle(&self, button: Button) -> Result<Screen, ScreenError> {
        if !self.actions().contains(&button) {
            return Err(ScreenError::Unsupported {
                button,
                screen: self.kind(),
            });
        }

        match self {
            Self::Main(screen) => screen.handle(button),
            Self::Maze(screen) => screen.handle(button),
            Self::Dialog(screen) => screen.handle(button),
        }
    }
}

/// Title menu holding the authored levels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MainScreen {
    sound: Sound,
    music: Music,
    effect: Effect,
    levels: Vec<Vec<String>>,
}

impl MainScreen {
    /// Buttons offered by the title menu.
    pub const ACTIONS: [Button; 1] = [Button::Play];

    /// Creates the title menu.
    #[must_use]
    pub fn new(levels: Vec<Vec<String>>) -> Self {
        Self {
            sound: Sound::None,
            music: Music::Theme,
            effect: Effect::None,
            levels,
        }
    }

    /// Authored levels, one row of glyphs per entry.
    #[must_use]
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    fn handle(&self, button: Button) -> Result<Screen, ScreenError> {
        match button {
            Button::Play => {
                let level = self.levels.first().ok_or(ConfigurationError::NoLevels)?;
                let state = State::create(level)?;
                Ok(Screen::Maze(MazeScreen::new(
                    Sound::ButtonHit,
                    MazeScreen::EFFECT,
                    state,
                )))
            }
            _ => Err(ScreenError::NotImplemented {
                button,
                screen: ScreenKind::Main,
            }),
        }
    }
}

/// Maze in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MazeScreen {
    sound: Sound,
    music: Music,
    effect: Effect,
    state: State,
}

impl MazeScreen {
    /// Buttons offered while walking the maze.
    pub const ACTIONS: [Button; 4] = [Button::Up, Button::Down, Button::Left, Button::Right];

    /// Transition used after every move.
    pub const EFFECT: Effect = Effect::Fade;

    /// Creates a maze screen.
    #[must_use]
    pub const fn new(sound: Sound, effect: Effect, state: State) -> Self {
        Self {
            sound,
            music: Music::None,
            effect,
            state,
        }
    }

    /// Game state shown on the screen.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    fn handle(&self, button: Button) -> Result<Screen, ScreenError> {
        match button.delta() {
            Some(delta) => self.step(delta),
            None => Err(ScreenError::NotImplemented {
                button,
                screen: ScreenKind::Maze,
            }),
        }
    }

    fn step(&self, delta: Position) -> Result<Screen, ScreenError> {
        let outcome = Logic::iterate(&self.state, self.state.moved(delta))?;
        let screen = match outcome.message {
            Some(message) => {
                Screen::Dialog(DialogScreen::new(outcome.sound, outcome.state, message))
            }
            None => Screen::Maze(MazeScreen::new(outcome.sound, Self::EFFECT, outcome.state)),
        };
        Ok(screen)
    }
}

/// Dialog overlaying the maze.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DialogScreen {
    sound: Sound,
    music: Music,
    effect: Effect,
    state: State,
    message: Message,
}

impl DialogScreen {
    /// Buttons offered by a dialog.
    pub const ACTIONS: [Button; 1] = [Button::Close];

    /// Transition used when a dialog opens and when it closes.
    pub const EFFECT: Effect = Effect::WipeUp;

    /// Creates a dialog carrying the state to resume.
    #[must_use]
    pub const fn new(sound: Sound, state: State, message: Message) -> Self {
        Self {
            sound,
            music: Music::None,
            effect: Self::EFFECT,
            state,
            message,
        }
    }

    /// Game state resumed when the dialog closes.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Dialog text.
    #[must_use]
    pub const fn message(&self) -> Message {
        self.message
    }

    fn handle(&self, button: Button) -> Result<Screen, ScreenError> {
        match button {
            Button::Close => Ok(Screen::Maze(MazeScreen::new(
                Sound::ButtonHit,
                Self::EFFECT,
                self.state.clone(),
            ))),
            _ => Err(ScreenError::NotImplemented {
                button,
                screen: ScreenKind::Dialog,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_match_variant() {
        let main = Screen::main(Vec::new());
        assert_eq!(main.actions(), &[Button::Play]);
        assert_eq!(main.kind(), ScreenKind::Main);
        assert_eq!(main.music(), Music::Theme);
        assert_eq!(main.sound(), Sound::None);
        assert_eq!(main.effect(), Effect::None);
        assert_eq!(main.state(), None);
    }

    #[test]
    fn play_without_levels_is_a_configuration_error() {
        let main = Screen::main(Vec::new());
        assert_eq!(
            main.handle(Button::Play),
            Err(ScreenError::Configuration(ConfigurationError::NoLevels))
        );
    }

    #[test]
    fn undeclared_button_is_unsupported() {
        let main = Screen::main(Vec::new());
        assert_eq!(
            main.handle(Button::Up),
            Err(ScreenError::Unsupported {
                button: Button::Up,
                screen: ScreenKind::Main,
            })
        );
    }

    fn boxed_in() -> State {
        let rows = [
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}",
            "\u{1F9F1}\u{1F9D9}\u{1F9F1}",
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}",
        ];
        State::create(&rows).expect("level parses")
    }

    #[test]
    fn declared_button_without_rule_is_not_implemented() {
        let main = MainScreen::new(Vec::new());
        assert_eq!(
            main.handle(Button::Up),
            Err(ScreenError::NotImplemented {
                button: Button::Up,
                screen: ScreenKind::Main,
            })
        );

        let maze = MazeScreen::new(Sound::None, MazeScreen::EFFECT, boxed_in());
        assert_eq!(
            maze.handle(Button::Close),
            Err(ScreenError::NotImplemented {
                button: Button::Close,
                screen: ScreenKind::Maze,
            })
        );

        let dialog = DialogScreen::new(Sound::DoorHit, boxed_in(), Message::DoorLocked);
        assert_eq!(
            dialog.handle(Button::Play),
            Err(ScreenError::NotImplemented {
                button: Button::Play,
                screen: ScreenKind::Dialog,
            })
        );
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(ScreenKind::Dialog.to_string(), "dialog");
    }
}
