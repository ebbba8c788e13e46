/// The two fullscreen button directions.
///
/// Each direction carries its own label and class suffix, and the DOM layer
/// binds each button to its controller action at construction time, so
/// nothing dispatches on the direction name at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonDirection {
    View,
    Exit,
}

impl ButtonDirection {
    /// Lowercase direction name, used as a CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonDirection::View => "view",
            ButtonDirection::Exit => "exit",
        }
    }

    /// Accessible label for the button (`aria-label` and `title`).
    pub fn label(self) -> &'static str {
        match self {
            ButtonDirection::View => "View full-screen",
            ButtonDirection::Exit => "Exit full-screen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_capitalized_direction_names() {
        for direction in [ButtonDirection::View, ButtonDirection::Exit] {
            let label = direction.label();
            let name = direction.as_str();
            assert!(label.to_lowercase().starts_with(name));
            assert!(label.ends_with(" full-screen"));
            assert!(label.chars().next().unwrap().is_uppercase());
        }
    }
}
