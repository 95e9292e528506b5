use crate::{
    ast::Expr,
    compile,
    error::SyntaxError,
    interpreter::evaluator::core::evaluate,
    session::text::TextBuffer,
};

/// The externally visible state of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationState {
    /// Never committed.
    Unparsed,
    /// The last commit failed; there is no tree.
    Invalid,
    /// The last commit produced a tree.
    Valid,
}

/// The result of the last commit.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Unparsed,
    Invalid(SyntaxError),
    Valid(Expr),
}

/// A user-edited equation `y = f(x)`.
///
/// The editable buffer may hold anything, including text that does not
/// parse. Only [`Equation::commit`] copies it into the committed text and
/// rebuilds the tree, so the tree stays stable while the user types.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    editor:  TextBuffer,
    text:    String,
    outcome: Outcome,
}

impl Default for Equation {
    fn default() -> Self {
        Self::new()
    }
}

impl Equation {
    /// Creates an empty, unparsed equation.
    #[must_use]
    pub const fn new() -> Self {
        Self { editor:  TextBuffer::new(),
               text:    String::new(),
               outcome: Outcome::Unparsed, }
    }

    /// Creates an unparsed equation whose editable buffer holds `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self { editor: TextBuffer::from_text(text),
               ..Self::new() }
    }

    /// Returns the editable buffer.
    #[must_use]
    pub const fn editor(&self) -> &TextBuffer {
        &self.editor
    }

    /// Returns the editable buffer for modification. Edits take effect on
    /// the next commit.
    pub const fn editor_mut(&mut self) -> &mut TextBuffer {
        &mut self.editor
    }

    /// Returns the text of the last commit.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the state of the last commit.
    #[must_use]
    pub const fn state(&self) -> EquationState {
        match self.outcome {
            Outcome::Unparsed => EquationState::Unparsed,
            Outcome::Invalid(_) => EquationState::Invalid,
            Outcome::Valid(_) => EquationState::Valid,
        }
    }

    /// Returns the tree, if the last commit succeeded.
    #[must_use]
    pub const fn expr(&self) -> Option<&Expr> {
        match &self.outcome {
            Outcome::Valid(expr) => Some(expr),
            Outcome::Unparsed | Outcome::Invalid(_) => None,
        }
    }

    /// Returns why the last commit failed, if it did.
    #[must_use]
    pub const fn error(&self) -> Option<&SyntaxError> {
        match &self.outcome {
            Outcome::Invalid(error) => Some(error),
            Outcome::Unparsed | Outcome::Valid(_) => None,
        }
    }

    /// Commits the editable buffer: copies it into the committed text,
    /// compiles it, and replaces the previous tree.
    ///
    /// Never fails; the returned state is the report. A failed commit drops
    /// the previous tree instead of keeping a stale one.
    ///
    /// # Example
    /// ```
    /// use grapher::session::equation::{Equation, EquationState};
    ///
    /// let mut equation = Equation::with_text("2sin(x)+3");
    /// assert_eq!(equation.state(), EquationState::Unparsed);
    /// assert_eq!(equation.commit(), EquationState::Valid);
    /// assert_eq!(equation.evaluate(0.0), Some(3.0));
    ///
    /// equation.editor_mut().insert('(');
    /// assert_eq!(equation.commit(), EquationState::Invalid);
    /// assert!(equation.expr().is_none());
    /// ```
    pub fn commit(&mut self) -> EquationState {
        self.text = self.editor.to_string();
        log::debug!("Parsing equation: {}", self.text);

        self.outcome = match compile(&self.text) {
            Ok(expr) => {
                log::debug!("Syntax tree:\n{expr}");
                Outcome::Valid(expr)
            },
            Err(error) => {
                log::debug!("Rejected '{}': {error}", self.text);
                Outcome::Invalid(error)
            },
        };
        self.state()
    }

    /// Evaluates the committed tree at `x`, or returns `None` unless the
    /// equation is valid.
    #[must_use]
    pub fn evaluate(&self, x: f32) -> Option<f32> {
        self.expr().map(|expr| evaluate(expr, x))
    }
}
