pub mod drag_outcome;
pub mod drag_result;
pub mod draggable_location;
pub mod interpreter;
