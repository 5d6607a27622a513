use std::fmt::{Display, Formatter};

/// Comma-separated rendering of a slice, without enclosing brackets.
pub struct DisplayList<'a, D: Display> {
    items: &'a [D],
}
impl<D: Display> Display for DisplayList<'_, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplayList<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplayList { items }
    }
}

/// Renders the contained value, or a placeholder when there is none.
pub struct DisplayOption<'a, D: Display> {
    option: &'a Option<D>,
}
impl<D: Display> Display for DisplayOption<'_, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.option {
            None => write!(f, "n/a"),
            Some(value) => write!(f, "{value}"),
        }
    }
}

impl<'a, D: Display> From<&'a Option<D>> for DisplayOption<'a, D> {
    fn from(option: &'a Option<D>) -> Self {
        DisplayOption { option }
    }
}
