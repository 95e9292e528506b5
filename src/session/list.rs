use crate::{
    ast::Expr,
    session::equation::{Equation, EquationState},
};

/// An ordered list of equations, at most one of which is selected.
///
/// The selected equation is the one being edited. Moving the selection away
/// from an equation commits it, as pressing Enter does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquationList {
    equations: Vec<Equation>,
    selected:  Option<usize>,
}

impl EquationList {
    /// Creates an empty list with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { equations: Vec::new(),
               selected:  None, }
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns `true` if the list holds no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the equation at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.equations.get(index)
    }

    /// Iterates over all equations in order.
    pub fn iter(&self) -> impl Iterator<Item = &Equation> {
        self.equations.iter()
    }

    /// Iterates over the trees of valid equations, with their indices.
    pub fn valid(&self) -> impl Iterator<Item = (usize, &Expr)> {
        self.equations
            .iter()
            .enumerate()
            .filter_map(|(index, equation)| equation.expr().map(|expr| (index, expr)))
    }

    /// Returns the index of the selected equation.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected equation.
    #[must_use]
    pub fn selected(&self) -> Option<&Equation> {
        self.selected.and_then(|index| self.equations.get(index))
    }

    /// Returns the selected equation for editing.
    pub fn selected_mut(&mut self) -> Option<&mut Equation> {
        self.selected.and_then(|index| self.equations.get_mut(index))
    }

    /// Appends an empty equation and selects it.
    ///
    /// The previously selected equation loses focus and is committed.
    ///
    /// # Example
    /// ```
    /// use grapher::session::{equation::EquationState, list::EquationList};
    ///
    /// let mut list = EquationList::new();
    /// list.add().editor_mut().insert('x');
    /// list.add();
    ///
    /// assert_eq!(list.selected_index(), Some(1));
    /// assert_eq!(list.get(0).map(|e| e.state()), Some(EquationState::Valid));
    /// ```
    pub fn add(&mut self) -> &mut Equation {
        self.equations.push(Equation::new());
        let index = self.equations.len() - 1;
        self.select(index);
        &mut self.equations[index]
    }

    /// Selects the equation at `index`, committing the previously selected
    /// one if the selection changes.
    ///
    /// Returns `false`, leaving the selection unchanged, if `index` is out of
    /// range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.equations.len() {
            return false;
        }
        if let Some(previous) = self.selected
           && previous != index
           && let Some(equation) = self.equations.get_mut(previous)
        {
            equation.commit();
        }
        self.selected = Some(index);
        true
    }

    /// Commits the selected equation.
    ///
    /// Returns its new state, or `None` if nothing is selected.
    pub fn commit_selected(&mut self) -> Option<EquationState> {
        self.selected_mut().map(Equation::commit)
    }

    /// Removes the selected equation, or the last one if nothing is selected.
    ///
    /// The selection moves to the previous equation (or stays at the first),
    /// and is cleared once the list is empty.
    ///
    /// # Example
    /// ```
    /// use grapher::session::list::EquationList;
    ///
    /// let mut list = EquationList::new();
    /// list.add();
    /// list.add();
    /// list.add();
    /// list.select(1);
    ///
    /// assert!(list.remove_selected().is_some());
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.selected_index(), Some(0));
    /// ```
    pub fn remove_selected(&mut self) -> Option<Equation> {
        match self.selected {
            None => self.equations.pop(),
            Some(index) => {
                let removed = self.equations.remove(index);
                self.selected = if self.equations.is_empty() {
                    None
                } else {
                    Some(index.saturating_sub(1))
                };
                Some(removed)
            },
        }
    }
}
