//! Show/hide toggles for the two password inputs.

use serde::{Deserialize, Serialize};

/// The two password inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Password,
    Confirmation,
}

/// Whether a password input shows its contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldVisibility {
    #[default]
    Hidden,
    Shown,
}

impl FieldVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }

    /// Icon on the toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Hidden => "fa-eye",
            Self::Shown => "fa-eye-slash",
        }
    }
}
