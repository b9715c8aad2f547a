use crate::core::{BoardSnapshot, Position, Role};

/// 各アクターの意思決定 trait
///
/// One call per turn signal. The returned cell is what the actor will try to
/// commit; returning its current cell means "stay".
pub trait Strategy: Send {
    fn choose_move(&mut self, snapshot: &BoardSnapshot) -> Position;
    fn role(&self) -> Role;
    fn name(&self) -> &str;
}
