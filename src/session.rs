/// The equation and its commit lifecycle.
///
/// An equation pairs an editable buffer with the text last committed and the
/// outcome of compiling it.
pub mod equation;
/// The ordered collection of equations with a selection.
///
/// Focus changes commit the equation losing focus.
pub mod list;
/// The editable text buffer with a cursor.
pub mod text;
