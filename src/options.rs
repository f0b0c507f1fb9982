//! Configuration surface of the picker.
//!
//! `PickerOptions::default()` carries the stock defaults; an application with
//! house defaults keeps its own `PickerOptions` value and derives instances
//! from it with struct-update syntax, so there is no shared mutable state:
//!
//! ```
//! use jalali_picker::PickerOptions;
//!
//! let house = PickerOptions { show_today_button: true, ..PickerOptions::default() };
//! let instance = PickerOptions { start_year: 1350, ..house.clone() };
//! assert!(instance.show_today_button);
//! ```

use crate::consts::{DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use serde::{Deserialize, Serialize};

/// Default inline SVG markup for the Today icon. Uses `currentColor` to
/// inherit from CSS.
pub const DEFAULT_TODAY_ICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"20px\" viewBox=\"0 -960 960 960\" width=\"20px\" fill=\"currentColor\"><path d=\"M384.23-264Q344-264 316-291.77q-28-27.78-28-68Q288-400 315.77-428q27.78-28 68-28Q424-456 452-428.23q28 27.78 28 68Q480-320 452.23-292q-27.78 28-68 28ZM216-96q-29.7 0-50.85-21.5Q144-139 144-168v-528q0-29 21.15-50.5T216-768h72v-96h72v96h240v-96h72v96h72q29.7 0 50.85 21.5Q816-725 816-696v528q0 29-21.15 50.5T744-96H216Zm0-72h528v-360H216v360Z\"/></svg>";

/// Default inline SVG markup for the Clear icon. Uses `currentColor` to
/// inherit from CSS.
pub const DEFAULT_CLEAR_ICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"204px\" viewBox=\"0 -960 960 960\" width=\"20px\" fill=\"currentColor\"><path d=\"m256-200-56-56 224-224-224-224 56-56 224 224 224-224 56 56-224 224 224 224-56 56-224-224-224 224Z\"/></svg>";

/// Determines the input style of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Year, month and day rendered as drop-down selects
    DropDown,
    /// Year, month and day rendered as numeric text inputs
    #[default]
    TextBox,
}

/// Per-instance configuration, merged from defaults at construction time.
///
/// The presentation fields (classes, styles, tooltips, icons, color) carry no
/// logic; the picker holds them for the rendering layer to read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOptions {
    /// CSS class for the root container
    pub class: String,
    /// CSS class for action buttons
    pub button_class: String,
    /// CSS class for input elements
    pub input_class: String,

    /// Inline style for the root container
    pub style: String,
    /// Inline style for action buttons
    pub button_style: String,
    /// Inline style for input elements
    pub input_style: String,

    /// Tooltip for the year input
    pub year_tooltip: String,
    /// Tooltip for the month input
    pub month_tooltip: String,
    /// Tooltip for the day input
    pub day_tooltip: String,
    /// Tooltip for the clear button
    pub clear_tooltip: String,
    /// Tooltip for the today button
    pub today_tooltip: String,

    /// Separator drawn between the three inputs, also used by
    /// [`display_value`](crate::PersianDatePicker::display_value)
    pub separator: String,
    /// Input style: drop-downs or numeric text boxes
    pub selection_mode: SelectionMode,

    /// Whether the picker rejects user edits but still renders its value
    pub read_only: bool,
    /// Whether the picker is disabled entirely
    pub disabled: bool,

    /// Whether the clear (set null) button is shown
    pub show_clear_button: bool,
    /// Whether the today button is shown
    pub show_today_button: bool,

    /// Lower bound of the selectable Persian year window
    pub start_year: i32,
    /// Upper bound of the selectable Persian year window
    pub end_year: i32,

    /// Button/icon color override. When unset, the rendering layer falls back
    /// to its CSS variable chain.
    pub color: Option<String>,
    /// Inline SVG markup for the today button icon
    pub today_icon: String,
    /// Inline SVG markup for the clear button icon
    pub clear_icon: String,

    /// Whether the bound value may be absent. A non-nullable picker rejects
    /// `clear` and absent `set_value` calls with
    /// [`PickerError::NullNotAllowed`](crate::PickerError::NullNotAllowed).
    pub nullable: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            class: String::new(),
            button_class: String::new(),
            input_class: String::new(),
            style: String::new(),
            button_style: String::new(),
            input_style: String::new(),
            year_tooltip: "Year".to_owned(),
            month_tooltip: "Month".to_owned(),
            day_tooltip: "Day".to_owned(),
            clear_tooltip: "Clear".to_owned(),
            today_tooltip: "Today".to_owned(),
            separator: "-".to_owned(),
            selection_mode: SelectionMode::default(),
            read_only: false,
            disabled: false,
            show_clear_button: false,
            show_today_button: false,
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            color: None,
            today_icon: DEFAULT_TODAY_ICON.to_owned(),
            clear_icon: DEFAULT_CLEAR_ICON.to_owned(),
            nullable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = PickerOptions::default();
        assert_eq!(options.year_tooltip, "Year");
        assert_eq!(options.separator, "-");
        assert_eq!(options.selection_mode, SelectionMode::TextBox);
        assert_eq!(options.start_year, 1300);
        assert_eq!(options.end_year, 1500);
        assert!(!options.read_only);
        assert!(!options.show_clear_button);
        assert!(options.color.is_none());
        assert!(options.nullable);
    }

    #[test]
    fn test_struct_update_merge() {
        let house = PickerOptions {
            show_today_button: true,
            start_year: 1350,
            ..PickerOptions::default()
        };
        let instance = PickerOptions {
            end_year: 1450,
            ..house.clone()
        };

        // Explicit fields override, everything else flows through.
        assert!(instance.show_today_button);
        assert_eq!(instance.start_year, 1350);
        assert_eq!(instance.end_year, 1450);
        assert_eq!(instance.year_tooltip, "Year");

        // The source value is untouched by derived instances.
        assert_eq!(house.end_year, 1500);
    }

    #[test]
    fn test_selection_mode_serde() {
        let json = serde_json::to_string(&SelectionMode::DropDown).unwrap();
        assert_eq!(json, r#""DropDown""#);
        let parsed: SelectionMode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SelectionMode::DropDown);
    }
}
