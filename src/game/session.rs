//! Game session: the turn state machine.
//!
//! A `Session` owns everything mutable about one game - status, current
//! name, used-name set, transcript, and its RNG - and is driven by the
//! caller through `start`, `submit_move`, `concede`, and `reset`. The
//! vocabulary index is shared read-only.
//!
//! Each turn is one atomic validate → advance → counter-move cycle:
//! rejections short-circuit without touching state (a dead-end
//! submission additionally ends the game), and an accepted move always
//! produces the opponent's reply or a terminal status before the call
//! returns. The session is never left in `InProgress` without a legal
//! position.

use std::sync::Arc;

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState};
use crate::vocab::VocabIndex;

use super::outcome::{GameError, GameStatus, TranscriptEntry, TurnOutcome};
use super::selector::ChainSelector;

/// One shiritori game against the sampled opponent.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use shiritori_engine::{ChainRules, EntryId, Session, VocabEntry, VocabIndex};
///
/// let index = Arc::new(
///     VocabIndex::build(
///         vec![
///             VocabEntry::new(EntryId::new(25), "ピカチュウ"),
///             VocabEntry::new(EntryId::new(59), "ウインディ"),
///         ],
///         ChainRules::plain(),
///     )
///     .unwrap(),
/// );
///
/// let mut session = Session::new(index, 42);
/// session.start().unwrap();
///
/// // ピカチュウ chains on ウ, ウインディ on イ.
/// let key = session.required_key().unwrap();
/// assert!(key == 'ウ' || key == 'イ');
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    index: Arc<VocabIndex>,
    rng: GameRng,
    status: GameStatus,
    /// The opponent's most recent name; what the player chains from.
    current: Option<String>,
    used: ImHashSet<String>,
    transcript: Vector<TranscriptEntry>,
}

impl Session {
    /// Create a session with a seeded RNG.
    #[must_use]
    pub fn new(index: Arc<VocabIndex>, seed: u64) -> Self {
        Self::with_rng(index, GameRng::new(seed))
    }

    /// Create a session with an externally constructed RNG.
    ///
    /// This is the injection seam: tests pin a seed and assert the
    /// exact opponent replies.
    #[must_use]
    pub fn with_rng(index: Arc<VocabIndex>, rng: GameRng) -> Self {
        Self {
            index,
            rng,
            status: GameStatus::NotStarted,
            current: None,
            used: ImHashSet::new(),
            transcript: Vector::new(),
        }
    }

    /// Start a game: draw an opening name that does not end in the
    /// terminal syllable, mark it used, and enter `InProgress`.
    ///
    /// Valid only from `NotStarted`. If the vocabulary has no legal
    /// opening the session stays in `NotStarted` and
    /// `GameError::VocabularyExhausted` is returned.
    pub fn start(&mut self) -> Result<&str, GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        let opening = self
            .index
            .sample_opening(&self.used, &mut self.rng)
            .map(str::to_owned)
            .ok_or(GameError::VocabularyExhausted)?;

        tracing::debug!(%opening, "session started");
        self.used.insert(opening.clone());
        self.status = GameStatus::InProgress;
        Ok(self.current.insert(opening).as_str())
    }

    /// Submit the player's candidate name.
    ///
    /// Validation short-circuits at the first failure and, except for
    /// the dead-end case, mutates nothing:
    ///
    /// 1. `EmptyInput`
    /// 2. `WrongStartingCharacter` - wrong linking key
    /// 3. `UnknownName` - not in the vocabulary
    /// 4. `AlreadyUsed` - played earlier this session
    /// 5. `DeadEndMove` - ends in the terminal syllable; the session
    ///    becomes `OpponentWon`, but used-set, transcript, and current
    ///    name stay untouched
    ///
    /// An accepted move is recorded, then the opponent replies: a
    /// normal reply keeps the game going, a terminal-ending reply is
    /// the opponent's forced loss (`PlayerWon`), and no reply at all is
    /// `Exhausted`.
    pub fn submit_move(&mut self, candidate: &str) -> Result<TurnOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        if candidate.is_empty() {
            return Err(GameError::EmptyInput);
        }
        let current = self.current.clone().ok_or(GameError::NotInProgress)?;
        let rules = self.index.rules();

        let expected = rules.linking_key(&current);
        if !candidate.starts_with(expected) {
            return Err(GameError::WrongStartingCharacter { expected });
        }
        if !self.index.contains(candidate) {
            return Err(GameError::UnknownName);
        }
        if self.used.contains(candidate) {
            return Err(GameError::AlreadyUsed);
        }
        if rules.ends_in_terminal(candidate) {
            tracing::debug!(candidate, "dead-end submission, opponent wins");
            self.status = GameStatus::OpponentWon;
            return Err(GameError::DeadEndMove);
        }

        self.transcript.push_back(TranscriptEntry {
            opponent: current,
            player: candidate.to_string(),
        });
        self.used.insert(candidate.to_string());

        let reply = ChainSelector::new(&self.index)
            .next_move(candidate, &self.used, &mut self.rng)
            .map(str::to_owned);

        match reply {
            Some(reply) if self.index.rules().ends_in_terminal(&reply) => {
                tracing::debug!(%reply, "opponent forced into dead end, player wins");
                self.used.insert(reply.clone());
                self.current = Some(reply.clone());
                self.status = GameStatus::PlayerWon;
                Ok(TurnOutcome::OpponentDeadEnd(reply))
            }
            Some(reply) => {
                tracing::debug!(%reply, "opponent replied");
                self.used.insert(reply.clone());
                self.current = Some(reply.clone());
                Ok(TurnOutcome::Reply(reply))
            }
            None => {
                tracing::debug!("no legal reply, vocabulary exhausted");
                self.current = None;
                self.status = GameStatus::Exhausted;
                Ok(TurnOutcome::VocabularyExhausted)
            }
        }
    }

    /// Give up the running game. The session becomes `Conceded`;
    /// whether that scores as a loss is the presentation layer's call.
    pub fn concede(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        tracing::debug!("player conceded");
        self.status = GameStatus::Conceded;
        Ok(())
    }

    /// Clear used names, transcript, and current name, returning to
    /// `NotStarted`. Valid from any state.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        self.status = GameStatus::NotStarted;
        self.current = None;
        self.used = ImHashSet::new();
        self.transcript = Vector::new();
    }

    /// Reset and immediately start the next game.
    pub fn restart(&mut self) -> Result<&str, GameError> {
        self.reset();
        self.start()
    }

    // === Accessors ===

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The name the player must chain from, while a game is running.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The linking key the next candidate must start with.
    #[must_use]
    pub fn required_key(&self) -> Option<char> {
        self.current
            .as_deref()
            .map(|name| self.index.rules().linking_key(name))
    }

    /// Names played so far this session, by either side.
    #[must_use]
    pub fn used_names(&self) -> &ImHashSet<String> {
        &self.used
    }

    /// Completed (opponent, player) exchanges, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &Vector<TranscriptEntry> {
        &self.transcript
    }

    /// Number of completed exchanges.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    /// The shared vocabulary index.
    #[must_use]
    pub fn vocab(&self) -> &VocabIndex {
        &self.index
    }

    // === Snapshots ===

    /// Capture the session state, including the RNG position, so a
    /// caller with per-request lifecycles can carry the game across
    /// requests.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            current: self.current.clone(),
            used: self.used.clone(),
            transcript: self.transcript.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot and the index it was playing
    /// against. Behavior after restore is identical to the original
    /// session's.
    #[must_use]
    pub fn from_snapshot(index: Arc<VocabIndex>, snapshot: SessionSnapshot) -> Self {
        Self {
            index,
            rng: GameRng::from_state(&snapshot.rng),
            status: snapshot.status,
            current: snapshot.current,
            used: snapshot.used,
            transcript: snapshot.transcript,
        }
    }
}

/// Serializable capture of a session's mutable state.
///
/// Does not embed the vocabulary; the caller supplies the same index on
/// restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub current: Option<String>,
    pub used: ImHashSet<String>,
    pub transcript: Vector<TranscriptEntry>,
    pub rng: GameRngState,
}
