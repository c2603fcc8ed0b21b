// Move ordering: push moves first
//
// Pushes can end the opponent's options outright, so searching them first
// tightens alpha-beta bounds sooner. The order is otherwise stable.

use crate::types::Move;

/// Reorders moves so that every push comes first, keeping relative order
/// within pushes and within quiet moves
pub fn order_moves(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(|m| !m.push);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pushes_move_to_front_stably() {
        let moves = vec![
            Move::new(0, 1, false),
            Move::new(2, 2, true),
            Move::new(1, 1, false),
            Move::new(0, 2, true),
        ];
        let ordered = order_moves(moves);
        assert_eq!(
            ordered,
            vec![
                Move::new(2, 2, true),
                Move::new(0, 2, true),
                Move::new(0, 1, false),
                Move::new(1, 1, false),
            ]
        );
    }

    #[test]
    fn test_no_moves_dropped_or_duplicated() {
        let moves: Vec<Move> = (0..6).map(|i| Move::new(i, i, i % 3 == 0)).collect();
        let mut ordered = order_moves(moves.clone());
        assert_eq!(ordered.len(), moves.len());
        ordered.sort_by_key(|m| m.row);
        assert_eq!(ordered, moves);
    }

    #[test]
    fn test_empty_and_singleton_are_noops() {
        assert!(order_moves(Vec::new()).is_empty());
        let single = vec![Move::new(3, 4, false)];
        assert_eq!(order_moves(single.clone()), single);
    }
}
