//! Visual ordering of a line containing text in both directions.
//!
//! The scan walks the line in logical order. Tokens in the paragraph's
//! direction (and neutral glue between them) are emitted as they come. A
//! token in the opposite direction opens a reverse run, which collects
//! tokens until the next token in the paragraph's direction and is then
//! emitted back to front. Glue seen inside a reverse run is held back: if
//! the run continues it becomes part of the run, otherwise it hangs after
//! the reversed tokens.

use crate::ConsistencyError;

/// How a token relates to the paragraph direction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BidiClass {
    /// Glue and other tokens without a direction of their own
    Neutral,
    /// Text in the paragraph's direction
    Same,
    /// Text in the other direction
    Opposite,
}

#[derive(Debug, Default)]
struct ReverseRun {
    stack: Vec<usize>,
    hanging_glue: Vec<usize>,
}

impl ReverseRun {
    fn flush_into(self, order: &mut Vec<usize>) {
        order.extend(self.stack.into_iter().rev());
        order.extend(self.hanging_glue);
    }
}

#[derive(Debug)]
enum ScanState {
    MainRun,
    ReverseRun(ReverseRun),
}

impl ScanState {
    fn next(self, index: usize, class: BidiClass, order: &mut Vec<usize>) -> ScanState {
        match (self, class) {
            (ScanState::MainRun, BidiClass::Neutral | BidiClass::Same) => {
                order.push(index);
                ScanState::MainRun
            }
            (ScanState::MainRun, BidiClass::Opposite) => ScanState::ReverseRun(ReverseRun {
                stack: vec![index],
                hanging_glue: Vec::new(),
            }),
            (ScanState::ReverseRun(mut run), BidiClass::Neutral) => {
                run.hanging_glue.push(index);
                ScanState::ReverseRun(run)
            }
            (ScanState::ReverseRun(mut run), BidiClass::Opposite) => {
                while let Some(glue) = run.hanging_glue.pop() {
                    run.stack.push(glue);
                }
                run.stack.push(index);
                ScanState::ReverseRun(run)
            }
            (ScanState::ReverseRun(run), BidiClass::Same) => {
                run.flush_into(order);
                order.push(index);
                ScanState::MainRun
            }
        }
    }

    fn finish(self, order: &mut Vec<usize>) {
        if let ScanState::ReverseRun(run) = self {
            run.flush_into(order);
        }
    }
}

/// Indices of `classes` in display order. The result is a permutation of
/// `0..classes.len()`; anything else is reported as a consistency error.
pub fn display_order(classes: &[BidiClass]) -> Result<Vec<usize>, ConsistencyError> {
    let mut order = Vec::with_capacity(classes.len());
    let mut state = ScanState::MainRun;
    for (index, &class) in classes.iter().enumerate() {
        state = state.next(index, class, &mut order);
    }
    state.finish(&mut order);

    if order.len() != classes.len() {
        return Err(ConsistencyError::TokenCountMismatch {
            expected: classes.len(),
            actual: order.len(),
        });
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::BidiClass::{Neutral as G, Opposite as O, Same as S};
    use super::*;

    #[test]
    fn single_direction_keeps_logical_order() {
        assert_eq!(display_order(&[S, G, S, G, S]), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(display_order(&[]), Ok(vec![]));
    }

    #[test]
    fn single_opposite_token_stays_in_place() {
        assert_eq!(display_order(&[S, G, O, G, S]), Ok(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn opposite_run_is_reversed_with_hanging_glue_after() {
        assert_eq!(
            display_order(&[S, G, O, G, O, G, O, G, S]),
            Ok(vec![0, 1, 6, 5, 4, 3, 2, 7, 8])
        );
    }

    #[test]
    fn several_glues_inside_a_run() {
        assert_eq!(display_order(&[O, G, G, O]), Ok(vec![3, 1, 2, 0]));
    }

    #[test]
    fn run_at_end_of_line_is_flushed() {
        assert_eq!(display_order(&[S, G, O, G, O, G]), Ok(vec![0, 1, 4, 3, 2, 5]));
    }

    #[test]
    fn whole_line_in_other_direction() {
        assert_eq!(display_order(&[O, G, O, G, O]), Ok(vec![4, 3, 2, 1, 0]));
    }

    #[test]
    fn two_separate_runs() {
        assert_eq!(
            display_order(&[O, G, O, G, S, G, O, G, O]),
            Ok(vec![2, 1, 0, 3, 4, 5, 8, 7, 6])
        );
    }
}
