//! Keypad input binding
//!
//! Maps an activated keypad control to exactly one calculator call. The
//! page marks controls with `data-number`, `data-operation`,
//! `data-equals`, `data-delete` and `data-all-clear`; the control's label
//! is the token handed to the calculator.

use tracing::trace;

use crate::core::{CalcError, CalcResult, Calculator, Operation};

/// Kind of keypad control, as tagged by its data attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Digit or decimal point
    Number,
    /// One of the four operators
    Operation,
    /// Equals
    Equals,
    /// Delete last character
    Delete,
    /// All clear
    AllClear,
}

impl ControlKind {
    /// Every control kind
    pub const ALL: [Self; 5] = [
        Self::Number,
        Self::Operation,
        Self::Equals,
        Self::Delete,
        Self::AllClear,
    ];

    /// The data attribute tagging controls of this kind
    #[must_use]
    pub const fn data_attribute(&self) -> &'static str {
        match self {
            Self::Number => "data-number",
            Self::Operation => "data-operation",
            Self::Equals => "data-equals",
            Self::Delete => "data-delete",
            Self::AllClear => "data-all-clear",
        }
    }

    /// Resolves a data attribute name back to its kind
    #[must_use]
    pub fn from_data_attribute(attribute: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.data_attribute() == attribute)
    }

    /// Parses the kind name used by scripts (`number`, `operation`, ...)
    pub fn from_name(name: &str) -> CalcResult<Self> {
        match name {
            "number" => Ok(Self::Number),
            "operation" => Ok(Self::Operation),
            "equals" => Ok(Self::Equals),
            "delete" => Ok(Self::Delete),
            "all-clear" => Ok(Self::AllClear),
            other => Err(CalcError::UnknownControl(other.to_string())),
        }
    }
}

/// What a keypad button does to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Choose an operation
    Operation(Operation),
    /// Compute the pending operation
    Equals,
    /// Delete the last character
    Delete,
    /// Clear everything
    AllClear,
}

impl KeypadAction {
    /// Builds the action for an activated control from its label
    pub fn from_control(kind: ControlKind, label: &str) -> CalcResult<Self> {
        let label = label.trim();
        match kind {
            ControlKind::Number => match label.as_bytes() {
                [b'.'] => Ok(Self::Decimal),
                [d @ b'0'..=b'9'] => Ok(Self::Digit(d - b'0')),
                _ => Err(CalcError::UnknownControl(label.to_string())),
            },
            ControlKind::Operation => Operation::from_symbol(label)
                .map(Self::Operation)
                .ok_or_else(|| CalcError::UnknownOperation(label.to_string())),
            ControlKind::Equals => Ok(Self::Equals),
            ControlKind::Delete => Ok(Self::Delete),
            ControlKind::AllClear => Ok(Self::AllClear),
        }
    }

    /// Kind of control that triggers this action
    #[must_use]
    pub const fn kind(&self) -> ControlKind {
        match self {
            Self::Digit(_) | Self::Decimal => ControlKind::Number,
            Self::Operation(_) => ControlKind::Operation,
            Self::Equals => ControlKind::Equals,
            Self::Delete => ControlKind::Delete,
            Self::AllClear => ControlKind::AllClear,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Performs the single calculator call bound to this action
    pub fn apply(&self, calc: &mut Calculator) {
        trace!(action = ?self, "keypad action");
        match self {
            Self::Digit(_) | Self::Decimal => calc.append_symbol(&self.label()),
            Self::Operation(op) => calc.choose_operation(*op),
            Self::Equals => calc.compute(),
            Self::Delete => calc.delete_last_char(),
            Self::AllClear => calc.clear(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-cell button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operation(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button to `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Whether the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Maps typed aliases onto keypad labels
fn canonical_label(label: &str) -> String {
    let trimmed = label.trim();
    match trimmed.to_ascii_uppercase().as_str() {
        "/" => "÷".to_string(),
        "X" | "×" => "*".to_string(),
        "C" | "AC" | "CLEAR" => "AC".to_string(),
        "DEL" | "DELETE" | "⌫" => "DEL".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [   AC    ] [DEL] [ ÷ ]
/// [ 1 ] [ 2 ] [ 3 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ . ] [ 0 ] [    =    ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{AllClear, Decimal, Delete, Digit, Equals};

        let op = KeypadAction::Operation;
        let buttons = vec![
            // Row 0: AC DEL ÷
            KeypadButtonDef::new(AllClear, 0, 0).spanning(2),
            KeypadButtonDef::new(Delete, 0, 2),
            KeypadButtonDef::new(op(Operation::Divide), 0, 3),
            // Row 1: 1 2 3 *
            KeypadButtonDef::new(Digit(1), 1, 0),
            KeypadButtonDef::new(Digit(2), 1, 1),
            KeypadButtonDef::new(Digit(3), 1, 2),
            KeypadButtonDef::new(op(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(op(Operation::Add), 2, 3),
            // Row 3: 7 8 9 -
            KeypadButtonDef::new(Digit(7), 3, 0),
            KeypadButtonDef::new(Digit(8), 3, 1),
            KeypadButtonDef::new(Digit(9), 3, 2),
            KeypadButtonDef::new(op(Operation::Subtract), 3, 3),
            // Row 4: . 0 =
            KeypadButtonDef::new(Decimal, 4, 0),
            KeypadButtonDef::new(Digit(0), 4, 1),
            KeypadButtonDef::new(Equals, 4, 2).spanning(2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Buttons on one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets a button by element ID
    #[must_use]
    pub fn get_button(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.iter().find(|b| b.covers(row, col))
        } else {
            None
        }
    }

    /// Finds a button by its label, accepting `/`, `x`, `C` and `DEL`
    /// style aliases
    pub fn find_by_label(&self, label: &str) -> CalcResult<&KeypadButtonDef> {
        let canonical = canonical_label(label);
        self.buttons
            .iter()
            .find(|b| b.label() == canonical)
            .ok_or_else(|| CalcError::UnknownKey(label.to_string()))
    }

    /// Presses the button with element ID `id`
    pub fn click(&self, calc: &mut Calculator, id: &str) -> CalcResult<KeypadAction> {
        let button = self
            .get_button(id)
            .ok_or_else(|| CalcError::UnknownControl(id.to_string()))?;
        button.action.apply(calc);
        Ok(button.action)
    }

    /// Presses the button labelled `label`
    pub fn press(&self, calc: &mut Calculator, label: &str) -> CalcResult<KeypadAction> {
        let action = self.find_by_label(label)?.action;
        action.apply(calc);
        Ok(action)
    }
}
