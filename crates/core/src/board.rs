//! Board module - manages the 14-slot ring
//!
//! The board is a flat array of stone counts. Slots 0-5 are Player A's pits,
//! slot 6 is A's store, slots 7-12 are Player B's pits, slot 13 is B's store.
//! Sowing walks the ring counter-clockwise (increasing index, wrapping at 13)
//! and never drops a stone into the opponent's store.
//!
//! The stone total is invariant under sowing and capture; only the final
//! settlement sweep relocates stones, and even that keeps the total constant.

use tui_mancala_types::{Player, NUM_SLOTS, STORE_A, STORE_B};

/// Result of one sowing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SowResult {
    /// Slot that received the last stone
    pub landing: usize,
    /// Stones taken from the picked pit
    pub sown: u16,
}

/// The game board - 12 pits and 2 stores in a single flat array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [u16; NUM_SLOTS],
}

impl Board {
    /// Create a board with every pit filled and both stores empty
    pub fn new(stones_per_pit: u8) -> Self {
        let mut slots = [stones_per_pit as u16; NUM_SLOTS];
        slots[STORE_A] = 0;
        slots[STORE_B] = 0;
        Self { slots }
    }

    /// Create a board from explicit slot counts
    ///
    /// Useful for setting up positions in tests and analysis.
    pub fn from_slots(slots: [u16; NUM_SLOTS]) -> Self {
        Self { slots }
    }

    /// Check if `index` is one of the two stores
    pub fn is_store(index: usize) -> bool {
        index == STORE_A || index == STORE_B
    }

    /// Check if `index` is a pit (in range and not a store)
    pub fn is_pit(index: usize) -> bool {
        index < NUM_SLOTS && !Self::is_store(index)
    }

    /// The pit directly across the board from a pit
    pub fn opposite(index: usize) -> usize {
        debug_assert!(Self::is_pit(index));
        2 * STORE_A - index
    }

    /// Stones in slot `index`
    ///
    /// Returns `None` if out of range.
    pub fn get(&self, index: usize) -> Option<u16> {
        self.slots.get(index).copied()
    }

    /// Stones in slot `index`
    ///
    /// Panics if `index` is out of range; use [`Board::get`] for checked access.
    pub fn stones(&self, index: usize) -> u16 {
        self.slots[index]
    }

    /// A reference to all 14 slot counts
    pub fn slots(&self) -> &[u16; NUM_SLOTS] {
        &self.slots
    }

    /// Stones in `player`'s store
    pub fn store(&self, player: Player) -> u16 {
        self.slots[player.store()]
    }

    /// Total stones in `player`'s six pits (store excluded)
    pub fn side_sum(&self, player: Player) -> u16 {
        player.pits().map(|i| self.slots[i]).sum()
    }

    /// Check whether all six of `player`'s pits are empty
    pub fn side_empty(&self, player: Player) -> bool {
        player.pits().all(|i| self.slots[i] == 0)
    }

    /// Total stones across all 14 slots
    pub fn total(&self) -> u16 {
        self.slots.iter().sum()
    }

    /// Empty pit `from` and sow its stones counter-clockwise
    ///
    /// One stone is dropped per visited slot, except the opponent's store,
    /// which is passed over without cost. Sowing an empty pit deposits
    /// nothing and reports the pit itself as the landing slot.
    pub fn sow(&mut self, from: usize, mover: Player) -> SowResult {
        debug_assert!(Self::is_pit(from));

        let skipped = mover.other().store();
        let mut remaining = self.slots[from];
        let sown = remaining;
        self.slots[from] = 0;

        let mut index = from;
        while remaining > 0 {
            index = (index + 1) % NUM_SLOTS;
            if index == skipped {
                continue;
            }
            self.slots[index] += 1;
            remaining -= 1;
        }

        SowResult {
            landing: index,
            sown,
        }
    }

    /// Apply the capture rule at `landing`, if it holds
    ///
    /// Captures when `landing` is one of `mover`'s pits holding exactly the
    /// just-landed stone and the opposite pit is non-empty: both pits are
    /// zeroed and their stones credited to `mover`'s store. Returns the
    /// number of stones captured (0 when the rule does not apply).
    pub fn try_capture(&mut self, landing: usize, mover: Player) -> u16 {
        if !mover.owns_pit(landing) || self.slots[landing] != 1 {
            return 0;
        }
        let opposite = Self::opposite(landing);
        if self.slots[opposite] == 0 {
            return 0;
        }

        let captured = self.slots[opposite] + 1;
        self.slots[landing] = 0;
        self.slots[opposite] = 0;
        self.slots[mover.store()] += captured;
        captured
    }

    /// End-of-game settlement: move every remaining pit stone into its
    /// owner's store and zero the pits
    pub fn sweep(&mut self) {
        for player in [Player::A, Player::B] {
            let remaining = self.side_sum(player);
            for i in player.pits() {
                self.slots[i] = 0;
            }
            self.slots[player.store()] += remaining;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_fill() {
        let board = Board::new(4);
        for player in [Player::A, Player::B] {
            for i in player.pits() {
                assert_eq!(board.stones(i), 4);
            }
            assert_eq!(board.store(player), 0);
        }
        assert_eq!(board.total(), 48);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(3);
        assert_eq!(board.get(13), Some(0));
        assert_eq!(board.get(14), None);
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Board::opposite(0), 12);
        assert_eq!(Board::opposite(5), 7);
        assert_eq!(Board::opposite(7), 5);
        assert_eq!(Board::opposite(12), 0);
    }

    #[test]
    fn test_is_store_and_is_pit() {
        assert!(Board::is_store(6));
        assert!(Board::is_store(13));
        assert!(!Board::is_store(0));

        assert!(Board::is_pit(0));
        assert!(Board::is_pit(12));
        assert!(!Board::is_pit(6));
        assert!(!Board::is_pit(14));
    }

    #[test]
    fn test_sow_simple() {
        let mut board = Board::new(3);
        let result = board.sow(0, Player::A);

        assert_eq!(result, SowResult { landing: 3, sown: 3 });
        assert_eq!(board.stones(0), 0);
        assert_eq!(board.stones(1), 4);
        assert_eq!(board.stones(2), 4);
        assert_eq!(board.stones(3), 4);
        assert_eq!(board.stones(4), 3);
    }

    #[test]
    fn test_sow_reaches_own_store() {
        let mut board = Board::new(4);
        let result = board.sow(2, Player::A);

        assert_eq!(result.landing, STORE_A);
        assert_eq!(board.store(Player::A), 1);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[5] = 9;
        let mut board = Board::from_slots(slots);

        let result = board.sow(5, Player::A);

        // 9 stones: slots 6..=12, then skip B's store, wrap to 0 and 1.
        assert_eq!(result.landing, 1);
        assert_eq!(board.store(Player::B), 0);
        assert_eq!(board.store(Player::A), 1);
        for i in 7..=12 {
            assert_eq!(board.stones(i), 1);
        }
        assert_eq!(board.stones(0), 1);
        assert_eq!(board.stones(1), 1);
    }

    #[test]
    fn test_sow_skip_is_free_for_either_player() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[12] = 2;
        let mut board = Board::from_slots(slots);

        let result = board.sow(12, Player::B);

        // B's last pit: one stone into B's store, then wrap past A's store.
        assert_eq!(result.landing, STORE_B);
        assert_eq!(board.store(Player::B), 2);
        assert_eq!(board.store(Player::A), 0);
    }

    #[test]
    fn test_sow_empty_pit_is_noop() {
        let mut board = Board::from_slots([0u16; NUM_SLOTS]);
        let result = board.sow(3, Player::A);

        assert_eq!(result, SowResult { landing: 3, sown: 0 });
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_sow_conserves_total() {
        let mut board = Board::new(4);
        let before = board.total();
        board.sow(9, Player::B);
        assert_eq!(board.total(), before);
    }

    #[test]
    fn test_capture_applies() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[4] = 1;
        slots[8] = 5;
        let mut board = Board::from_slots(slots);

        let captured = board.try_capture(4, Player::A);

        assert_eq!(captured, 6);
        assert_eq!(board.stones(4), 0);
        assert_eq!(board.stones(8), 0);
        assert_eq!(board.store(Player::A), 6);
    }

    #[test]
    fn test_capture_requires_single_stone() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[4] = 2;
        slots[8] = 5;
        let mut board = Board::from_slots(slots);

        assert_eq!(board.try_capture(4, Player::A), 0);
        assert_eq!(board.stones(8), 5);
    }

    #[test]
    fn test_capture_requires_opposite_stones() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[4] = 1;
        let mut board = Board::from_slots(slots);

        assert_eq!(board.try_capture(4, Player::A), 0);
        assert_eq!(board.stones(4), 1);
    }

    #[test]
    fn test_capture_requires_own_side() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[8] = 1;
        slots[4] = 5;
        let mut board = Board::from_slots(slots);

        // A's stone landing in B's pit never captures.
        assert_eq!(board.try_capture(8, Player::A), 0);
        assert_eq!(board.stones(8), 1);
        assert_eq!(board.stones(4), 5);
    }

    #[test]
    fn test_sweep_settles_both_sides() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[1] = 2;
        slots[3] = 1;
        slots[STORE_A] = 10;
        slots[9] = 4;
        slots[STORE_B] = 7;
        let mut board = Board::from_slots(slots);

        let before = board.total();
        board.sweep();

        assert_eq!(board.store(Player::A), 13);
        assert_eq!(board.store(Player::B), 11);
        assert!(board.side_empty(Player::A));
        assert!(board.side_empty(Player::B));
        assert_eq!(board.total(), before);
    }

    #[test]
    fn test_side_sum_and_empty() {
        let mut slots = [0u16; NUM_SLOTS];
        slots[7] = 3;
        slots[12] = 6;
        let board = Board::from_slots(slots);

        assert_eq!(board.side_sum(Player::B), 9);
        assert_eq!(board.side_sum(Player::A), 0);
        assert!(board.side_empty(Player::A));
        assert!(!board.side_empty(Player::B));
    }
}
