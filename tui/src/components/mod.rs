mod selection_state;

pub(crate) use selection_state::SelectionState;
