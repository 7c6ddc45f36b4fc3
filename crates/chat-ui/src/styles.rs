//! Centralized style constants for consistent theming across the chat UI components

// Background colors with dark mode support
pub const PANEL_BG: &str = "bg-white dark:bg-gray-800";
pub const LOG_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const BRAND_BG: &str = "bg-primary-600 dark:bg-primary-700";

// Text colors with dark mode support
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubble styles
pub const USER_BUBBLE_COLORS: &str = "bg-primary-600 text-white dark:bg-primary-700";
pub const BOT_BUBBLE_COLORS: &str = "bg-white text-gray-800 dark:bg-gray-700 dark:text-white border border-gray-200 dark:border-gray-600";

// Button styles
pub const LAUNCHER_BUTTON: &str = "fixed z-50 bottom-6 right-6 bg-primary-600 text-white p-4 rounded-full shadow-lg hover:bg-primary-700 hover:scale-105 active:scale-95 transition-transform focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2";
pub const SEND_BUTTON: &str = "bg-primary-600 text-white p-2 rounded-r-lg hover:bg-primary-700 focus:outline-none dark:bg-primary-700 dark:hover:bg-primary-600 flex items-center justify-center disabled:opacity-50 disabled:cursor-not-allowed";
pub const CHIP_BUTTON: &str = "bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-800 dark:text-gray-200 text-xs py-1 px-2 rounded-full transition-colors flex items-center gap-1";

// Input styles
pub const INPUT_BASE: &str = "flex-1 p-2 border border-gray-300 dark:border-gray-600 rounded-l-lg focus:outline-none focus:ring-1 focus:ring-primary-500 dark:bg-gray-700 dark:text-white";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";

// Shadows and rounded corners
pub const ROUNDED_STANDARD: &str = "rounded-lg";
pub const LIGHT_SHADOW: &str = "shadow-sm";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
