//! Transform engine: the four deck moves of one keystream cycle.
//!
//! Each move rearranges the deck in place with slice rotations. A joker
//! move that crosses the bottom card keeps the circular order of the deck
//! but re-anchors it on the card where the joker lands, so the new bottom
//! card is not always the old one.

use crate::card::{Card, DECK_SIZE};
use crate::deck::{Deck, BOTTOM};

impl Deck {
    /// Step 1: moves Joker A one card down, swapping it with the card
    /// below it.
    ///
    /// At the boundary the joker passes over the bottom card:
    /// - second to last, it jumps the bottom card and becomes the top card;
    /// - at the bottom, it trades places with the top card, which becomes
    ///   the new bottom card.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Card, Deck};
    ///
    /// let mut deck = Deck::ordered();
    /// deck.move_joker_a();
    /// assert_eq!(deck.top(), Card::JOKER_A);
    /// assert_eq!(deck.bottom(), Card::JOKER_B);
    /// ```
    pub fn move_joker_a(&mut self) {
        match self.position(Card::JOKER_A) {
            // [c0 .. c25, A, c27] -> [A, c0 .. c25, c27]
            slot if slot == BOTTOM - 1 => self.cards[..BOTTOM].rotate_right(1),
            // [c0, c1 .. c26, A] -> [A, c1 .. c26, c0]
            BOTTOM => self.cards.swap(0, BOTTOM),
            slot => self.move_down(slot, 1),
        }
        self.debug_check();
    }

    /// Step 2: moves Joker B two cards down.
    ///
    /// Second to last, it lands below the top card. At the bottom it lands
    /// below the second card and the old top card becomes the new bottom
    /// card.
    pub fn move_joker_b(&mut self) {
        match self.position(Card::JOKER_B) {
            // [c0 .. c25, B, c27] -> [c0, B, c1 .. c25, c27]
            slot if slot == BOTTOM - 1 => self.cards[1..BOTTOM].rotate_right(1),
            // [c0, c1, c2 .. c26, B] -> [c1, B, c2 .. c26, c0]
            BOTTOM => {
                self.cards.rotate_left(1);
                self.cards[1..BOTTOM].rotate_right(1);
            }
            slot => self.move_down(slot, 2),
        }
        self.debug_check();
    }

    /// Step 3: swaps the cards above the first joker with the cards below
    /// the second joker. The jokers and everything between them stay
    /// together, in order, in the middle.
    pub fn triple_cut(&mut self) {
        let (first, second) = self.joker_bounds();

        match (first == 0, second == BOTTOM) {
            // Jokers already bound the deck.
            (true, true) => {}
            // Nothing above: the lower segment moves to the front.
            (true, false) => self.cards.rotate_left(second + 1),
            // Nothing below: the upper segment moves to the end.
            (false, true) => self.cards.rotate_left(first),
            (false, false) => {
                // [top | middle | bottom] -> [middle | bottom | top]
                self.cards.rotate_left(first);
                // [middle | bottom] -> [bottom | middle]
                let middle = second - first + 1;
                self.cards[..DECK_SIZE - first].rotate_left(middle);
            }
        }
        self.debug_check();
    }

    /// Step 4: takes as many cards from the top as the bottom card's count
    /// value and puts them just above the bottom card.
    ///
    /// A count of 27 would lift every card but the bottom one and put it
    /// back unchanged, so it is skipped.
    pub fn count_cut(&mut self) {
        let count = self.bottom().count_value();
        if count == BOTTOM {
            return;
        }
        self.cards[..BOTTOM].rotate_left(count);
        self.debug_check();
    }

    /// Runs the four moves of one cycle in their fixed order.
    pub fn cycle(&mut self) {
        self.move_joker_a();
        self.move_joker_b();
        self.triple_cut();
        self.count_cut();
    }

    /// Moves the card at `from` `steps` slots down, within the deck.
    fn move_down(&mut self, from: usize, steps: usize) {
        let to = from + steps;
        debug_assert!(to <= BOTTOM);
        self.cards[from..=to].rotate_left(1);
    }

    /// Slots of the first and second joker from the top.
    fn joker_bounds(&self) -> (usize, usize) {
        let a = self.position(Card::JOKER_A);
        let b = self.position(Card::JOKER_B);
        (a.min(b), a.max(b))
    }

    fn debug_check(&self) {
        debug_assert!(self.is_well_formed(), "deck invariant broken: {self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(values: &[u32]) -> Deck {
        Deck::from_values(values).unwrap()
    }

    /// Ordered numbered cards with the given cards spliced in at `slot`.
    fn with(base: &[u32], inserts: &[(usize, u32)]) -> Vec<u32> {
        let mut values = base.to_vec();
        for &(slot, value) in inserts {
            values.insert(slot, value);
        }
        values
    }

    fn numbered() -> Vec<u32> {
        (1..=26).collect()
    }

    fn values(deck: &Deck) -> Vec<u32> {
        deck.values().iter().map(|&v| v as u32).collect()
    }

    #[test]
    fn test_joker_a_swaps_with_next() {
        let mut d = deck(&with(&numbered(), &[(4, 27), (10, 28)]));
        d.move_joker_a();
        assert_eq!(d.position(Card::JOKER_A), 5);
        assert_eq!(d.cards[4].value(), 5);
        assert_eq!(d.position(Card::JOKER_B), 10);
    }

    #[test]
    fn test_joker_a_second_to_last_jumps_to_top() {
        // [c0 .. c25, A, c27] -> [A, c0 .. c25, c27]
        let mut d = Deck::ordered();
        d.move_joker_a();
        let mut expected = vec![27];
        expected.extend(1..=26);
        expected.push(28);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_joker_a_bottom_trades_with_top() {
        // [c0, c1 .. c26, A] -> [A, c1 .. c26, c0]
        let mut start = numbered();
        start.extend([28, 27]);
        let mut d = deck(&start);
        d.move_joker_a();
        let mut expected = vec![27];
        expected.extend(2..=26);
        expected.extend([28, 1]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_joker_b_moves_two() {
        let mut d = deck(&with(&numbered(), &[(0, 28), (13, 27)]));
        d.move_joker_b();
        assert_eq!(d.position(Card::JOKER_B), 2);
        assert_eq!(&values(&d)[..3], &[1, 2, 28]);
    }

    #[test]
    fn test_joker_b_third_to_last_becomes_bottom() {
        let mut start: Vec<u32> = (1..=25).collect();
        start.extend([28, 26, 27]);
        let mut d = deck(&start);
        d.move_joker_b();
        assert_eq!(d, Deck::ordered());
    }

    #[test]
    fn test_joker_b_second_to_last_wraps_below_top() {
        let mut start = numbered();
        start.extend([28, 27]);
        let mut d = deck(&start);
        d.move_joker_b();
        let mut expected = vec![1, 28];
        expected.extend(2..=27);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_joker_b_bottom_lands_below_new_top() {
        // [c0, c1, c2 .. c26, B] -> [c1, B, c2 .. c26, c0]
        let mut d = Deck::ordered();
        d.move_joker_b();
        let mut expected = vec![2, 28];
        expected.extend(3..=27);
        expected.push(1);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_triple_cut_general() {
        // 1 2 | 27 3 4 28 | 5 .. 26
        let mut d = deck(&with(&numbered(), &[(2, 27), (5, 28)]));
        d.triple_cut();
        let mut expected: Vec<u32> = (5..=26).collect();
        expected.extend([27, 3, 4, 28, 1, 2]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_triple_cut_adjacent_jokers() {
        let mut d = deck(&with(&numbered(), &[(2, 28), (3, 27)]));
        d.triple_cut();
        let mut expected: Vec<u32> = (3..=26).collect();
        expected.extend([28, 27, 1, 2]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_triple_cut_joker_on_top() {
        // No cards above the first joker: only the lower segment moves.
        let mut d = deck(&with(&numbered(), &[(0, 27), (3, 28)]));
        d.triple_cut();
        let mut expected: Vec<u32> = (3..=26).collect();
        expected.extend([27, 1, 2, 28]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_triple_cut_joker_at_bottom() {
        // No cards below the second joker: only the upper segment moves.
        let mut d = deck(&with(&numbered(), &[(2, 27), (27, 28)]));
        d.triple_cut();
        let mut expected = vec![27];
        expected.extend(3..=26);
        expected.extend([28, 1, 2]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_triple_cut_jokers_at_both_ends() {
        let start = with(&numbered(), &[(0, 28), (27, 27)]);
        let mut d = deck(&start);
        d.triple_cut();
        assert_eq!(values(&d), start);
    }

    #[test]
    fn test_count_cut_moves_top_block() {
        let mut start: Vec<u32> = (4..=28).collect();
        start.extend([1, 2, 3]);
        let mut d = deck(&start);
        d.count_cut();
        let mut expected: Vec<u32> = (7..=28).collect();
        expected.extend([1, 2, 4, 5, 6, 3]);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_count_cut_joker_bottom_is_noop() {
        let mut d = Deck::ordered();
        d.count_cut();
        assert_eq!(d, Deck::ordered());

        let mut start = numbered();
        start.extend([28, 27]);
        let mut d = deck(&start);
        d.count_cut();
        assert_eq!(values(&d), start);
    }

    #[test]
    fn test_count_cut_bottom_26() {
        let mut start = vec![27, 28];
        start.extend(1..=26);
        let mut d = deck(&start);
        d.count_cut();
        let mut expected = vec![25];
        expected.extend([27, 28]);
        expected.extend(1..=24);
        expected.push(26);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_cycle_on_ordered_deck() {
        let mut d = Deck::ordered();
        d.cycle();
        let mut expected: Vec<u32> = (2..=28).collect();
        expected.push(1);
        assert_eq!(values(&d), expected);
    }

    #[test]
    fn test_moves_preserve_invariant() {
        let mut d = deck(&with(&numbered(), &[(9, 28), (17, 27)]));
        for _ in 0..500 {
            d.move_joker_a();
            assert!(d.is_well_formed());
            d.move_joker_b();
            assert!(d.is_well_formed());
            d.triple_cut();
            assert!(d.is_well_formed());
            d.count_cut();
            assert!(d.is_well_formed());
        }
    }
}
