//! The transition-function capability wrapped by a history.

use super::command::Command;

/// Error type returned by transition functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A pure, deterministic state-transition function.
///
/// `initial` yields the state the function produces when it has no prior
/// state; `apply` produces the next state for a command. Both must be free
/// of side effects, otherwise replaying history is not deterministic.
///
/// Any `Fn(&S, &Command) -> Result<S, E>` implements this trait when `S`
/// has a `Default`, which serves as the initial state.
///
/// # Example
///
/// ```rust
/// use undoable::core::{Command, TransitionFn};
/// use std::convert::Infallible;
///
/// fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
///     Ok(match command.kind() {
///         "INC" => state + 1,
///         "DEC" => state - 1,
///         _ => *state,
///     })
/// }
///
/// assert_eq!(TransitionFn::<i64>::initial(&counter), 0);
/// assert_eq!(counter.apply(&4, &Command::new("INC")).unwrap(), 5);
/// ```
pub trait TransitionFn<S> {
    /// The state before any command has been applied.
    fn initial(&self) -> S;

    /// Apply `command` to `state`, producing the next state.
    fn apply(&self, state: &S, command: &Command) -> Result<S, BoxError>;
}

impl<S, E, F> TransitionFn<S> for F
where
    F: Fn(&S, &Command) -> Result<S, E>,
    S: Default,
    E: Into<BoxError>,
{
    fn initial(&self) -> S {
        S::default()
    }

    fn apply(&self, state: &S, command: &Command) -> Result<S, BoxError> {
        self(state, command).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Playlist {
        tracks: Vec<String>,
    }

    struct PlaylistEditor {
        seed: Vec<String>,
    }

    impl TransitionFn<Playlist> for PlaylistEditor {
        fn initial(&self) -> Playlist {
            Playlist {
                tracks: self.seed.clone(),
            }
        }

        fn apply(&self, state: &Playlist, command: &Command) -> Result<Playlist, BoxError> {
            let mut next = state.clone();
            match command.kind() {
                "PUSH" => {
                    let track = command
                        .data()
                        .and_then(|d| d.as_str())
                        .ok_or("PUSH needs a track name")?;
                    next.tracks.push(track.to_string());
                }
                "POP" => {
                    next.tracks.pop();
                }
                _ => {}
            }
            Ok(next)
        }
    }

    fn parity(state: &u8, command: &Command) -> Result<u8, String> {
        match command.kind() {
            "FLIP" => Ok(1 - state),
            other => Err(format!("unknown command {other}")),
        }
    }

    #[test]
    fn functions_use_default_as_initial_state() {
        assert_eq!(TransitionFn::<u8>::initial(&parity), 0);
        assert_eq!(parity.apply(&0, &Command::new("FLIP")).unwrap(), 1);
    }

    #[test]
    fn function_errors_are_boxed() {
        let error = parity.apply(&0, &Command::new("JUMP")).unwrap_err();
        assert_eq!(error.to_string(), "unknown command JUMP");
    }

    #[test]
    fn custom_implementations_supply_their_own_initial_state() {
        let editor = PlaylistEditor {
            seed: vec!["intro".to_string()],
        };

        let state = editor.initial();
        let state = editor
            .apply(&state, &Command::with_data("PUSH", "outro"))
            .unwrap();

        assert_eq!(state.tracks, vec!["intro".to_string(), "outro".to_string()]);
        assert!(editor.apply(&state, &Command::new("PUSH")).is_err());
    }
}
