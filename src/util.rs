use crate::board::SIDE;

/// (column, row) on the board, 0-based.
pub type Cursor = (u16, u16);

#[derive(Copy, Clone, Debug)]
pub enum Unit {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

pub fn xy_i((x, y): Cursor) -> Option<usize> {
    let side = SIDE as u16;
    if side <= x || side <= y {
        None
    } else {
        Some(y as usize * SIDE + x as usize)
    }
}

pub fn i_xy(index: usize) -> Option<Cursor> {
    if index >= SIDE * SIDE {
        None
    } else {
        Some(((index % SIDE) as u16, (index / SIDE) as u16))
    }
}

/// Steps `value` by `unit`, staying within `0..len`.
pub fn step_clamped(value: usize, unit: Unit, len: usize) -> usize {
    let stepped = match unit {
        Unit::Negative => value.saturating_sub(1),
        Unit::Zero => value,
        Unit::Positive => value + 1,
    };
    stepped.min(len.saturating_sub(1))
}
