#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure rule engine that resolves a single movement attempt.

use wizard_maze_core::{Cell, ConfigurationError, Message, Sound, DRAGON_BRIBE_GEMS};
use wizard_maze_world::State;

/// Result of resolving a movement attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Sound cue produced by the move.
    pub sound: Sound,
    /// State after the cell effect was applied, or the pre-move state when
    /// the move was rejected.
    pub state: State,
    /// Dialog text surfaced by the move, if any.
    pub message: Option<Message>,
}

impl Outcome {
    fn silent(sound: Sound, state: State) -> Self {
        Self {
            sound,
            state,
            message: None,
        }
    }

    fn spoken(sound: Sound, state: State, message: Message) -> Self {
        Self {
            sound,
            state,
            message: Some(message),
        }
    }
}

/// Stateless rule engine keyed by the cell under the destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logic;

impl Logic {
    /// Resolves a move from `before` into `after`.
    ///
    /// `after` must already hold the advanced position but no cell effect.
    /// Rejected moves return `before` unchanged, possibly with a message.
    pub fn iterate(before: &State, after: State) -> Result<Outcome, ConfigurationError> {
        let position = after.position();
        let cell = after.current_cell()?;
        match cell {
            Cell::Wall => Ok(Outcome::silent(Sound::WallHit, before.clone())),
            Cell::Space | Cell::Door => Ok(Outcome::silent(Sound::FloorWalk, after)),
            Cell::Key => {
                let state = consume(&after, Cell::Space, 1, 0)?;
                Ok(Outcome::silent(Sound::KeyPickup, state))
            }
            Cell::Lock => {
                if after.inventory().keys() >= 1 {
                    let state = consume(&after, Cell::Door, -1, 0)?;
                    Ok(Outcome::silent(Sound::DoorUnlock, state))
                } else {
                    Ok(Outcome::spoken(
                        Sound::DoorHit,
                        before.clone(),
                        Message::DoorLocked,
                    ))
                }
            }
            Cell::Gem => {
                let state = consume(&after, Cell::Space, 0, 1)?;
                Ok(Outcome::silent(Sound::GemPickup, state))
            }
            Cell::Dragon => {
                if after.inventory().gems() >= DRAGON_BRIBE_GEMS {
                    let state = consume(&after, Cell::Space, 0, -(DRAGON_BRIBE_GEMS as i32))?;
                    Ok(Outcome::spoken(
                        Sound::DragonRoar,
                        state,
                        Message::DragonBribe,
                    ))
                } else {
                    Ok(Outcome::spoken(
                        Sound::DragonRoar,
                        before.clone(),
                        Message::DragonBlock,
                    ))
                }
            }
            // The princess never lets the player through.
            Cell::Princess => Ok(Outcome::spoken(
                Sound::PrincessLaugh,
                before.clone(),
                Message::PrincessMessage,
            )),
            Cell::Wizard => Err(ConfigurationError::UnhandledCell { cell, position }),
        }
    }
}

/// Replaces the cell under the player and applies an inventory delta.
fn consume(
    state: &State,
    replace: Cell,
    keys: i32,
    gems: i32,
) -> Result<State, ConfigurationError> {
    let level = state.level().change(state.position(), replace)?;
    let inventory = state.inventory().change(keys, gems)?;
    Ok(State::new(level, state.position(), inventory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_maze_core::Position;

    #[test]
    fn wizard_cell_is_a_configuration_error() {
        let rows = [
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}\u{1F9F1}",
            "\u{1F9F1}\u{1F9D9}\u{1F9D9}\u{1F9F1}",
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}\u{1F9F1}",
        ];
        let before = State::create(&rows).expect("level parses");
        let after = before.moved(Position::new(1, 0));

        assert_eq!(
            Logic::iterate(&before, after),
            Err(ConfigurationError::UnhandledCell {
                cell: Cell::Wizard,
                position: Position::new(2, 1),
            })
        );
    }

    #[test]
    fn leaving_the_grid_is_a_configuration_error() {
        let rows = ["\u{1F9D9}\u{2B1B}"];
        let before = State::create(&rows).expect("level parses");
        let after = before.moved(Position::new(-1, 0));

        assert!(matches!(
            Logic::iterate(&before, after),
            Err(ConfigurationError::OutOfBounds { .. })
        ));
    }
}
