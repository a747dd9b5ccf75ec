use crate::ui::mvi::Intent;

/// A child's action tagged with the index of the child it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAction<A> {
    pub index: usize,
    pub action: A,
}

impl<A> GridAction<A> {
    pub fn new(index: usize, action: A) -> Self {
        Self { index, action }
    }
}

impl<A: Intent> Intent for GridAction<A> {}
