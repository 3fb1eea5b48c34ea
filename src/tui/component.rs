use ratatui::text::Line;

/// A piece of the frame.
///
/// Components follow the props-in-struct pattern: they borrow the data they
/// show as struct fields and turn it into styled lines. They never mutate
/// state, so the same props always produce the same lines.
///
/// Lines are owned (`'static`) so the assembled frame does not borrow the
/// `App` it was built from.
pub trait Component {
    /// Produce this component's lines, top to bottom.
    fn lines(&self) -> Vec<Line<'static>>;
}
