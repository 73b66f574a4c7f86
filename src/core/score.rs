//! Guess scoring
//!
//! Scores a guess against the hidden answer, one outcome per position:
//! - `Correct` — letter matches the answer at the same position
//! - `Present` — letter is in the answer elsewhere, with supply remaining
//! - `Absent` — no remaining supply for the letter
//!
//! Supply is a multiset: Correct matches claim their letter before any
//! Present is awarded, so repeated guess letters are never over-credited.

use super::{WORD_LEN, Word};

/// Outcome class for a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Absent,
    Present,
    Correct,
}

/// One scored cell: the guessed letter and its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterScore {
    pub letter: u8,
    pub outcome: Outcome,
}

/// Score for one committed row, one `LetterScore` per position
///
/// Produced atomically by [`RoundScore::of`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore([LetterScore; WORD_LEN]);

impl RoundScore {
    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. Build the answer's letter supply (count per distinct letter).
    /// 2. First pass: exact position matches become `Correct` and consume
    ///    their letter from the supply.
    /// 3. Second pass: remaining positions become `Present` while supply
    ///    lasts, `Absent` otherwise.
    ///
    /// A single left-to-right pass would hand out `Present` for letters a
    /// later `Correct` still has to claim, so both passes are required.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Outcome, RoundScore, Word};
    ///
    /// let guess = Word::new("react").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let score = RoundScore::of(&guess, &answer);
    ///
    /// let outcomes: Vec<Outcome> = score.iter().map(|c| c.outcome).collect();
    /// assert_eq!(
    ///     outcomes,
    ///     [
    ///         Outcome::Present, // R
    ///         Outcome::Present, // E
    ///         Outcome::Correct, // A
    ///         Outcome::Present, // C
    ///         Outcome::Absent,  // T
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn of(guess: &Word, answer: &Word) -> Self {
        let mut cells = guess.chars().map(|letter| LetterScore {
            letter,
            outcome: Outcome::Absent,
        });
        let mut supply = answer.char_counts();

        // First pass: exact matches claim their letter
        // Allow: index needed to compare guess[i] with answer[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                cells[i].outcome = Outcome::Correct;

                if let Some(count) = supply.get_mut(&guess.chars()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters while supply lasts
        for cell in &mut cells {
            if cell.outcome == Outcome::Correct {
                continue;
            }
            if let Some(count) = supply.get_mut(&cell.letter)
                && *count > 0
            {
                cell.outcome = Outcome::Present;
                *count -= 1;
            }
        }

        Self(cells)
    }

    /// Whether every cell is `Correct` (winning row)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|cell| cell.outcome == Outcome::Correct)
    }

    /// The scored cells in position order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[LetterScore; WORD_LEN] {
        &self.0
    }

    /// Iterate over the scored cells in position order
    pub fn iter(&self) -> impl Iterator<Item = &LetterScore> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RoundScore {
    type Item = &'a LetterScore;
    type IntoIter = std::slice::Iter<'a, LetterScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
