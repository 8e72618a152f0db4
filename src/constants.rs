//! Constants used throughout consola

/// Default banner and padding width, in columns
pub const DEFAULT_WIDTH: usize = 119;

/// Default pause after alerts and the farewell, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Whether the screen is cleared around banners and alerts by default
pub const DEFAULT_CLEAR: bool = false;

/// Key that answers a confirmation prompt affirmatively
pub const DEFAULT_CONFIRM_KEY: char = 'S';

/// Key that answers a confirmation prompt negatively
pub const DEFAULT_REJECT_KEY: char = 'N';

/// Character used to fill padded lines
pub const DEFAULT_FILL: char = '-';

/// Character repeated to draw banner separators
pub const SEPARATOR_CHAR: char = '=';

/// User-facing text
pub mod messages {
    pub const PRESS_ANY_KEY: &str = "Presiona cualquier tecla para continuar...";
    pub const SELECT_OPTION: &str = "Selecciona una opción";
    pub const EMPTY_INPUT: &str = "Entrada inválida, debes escribir algo";
    pub const INVALID_INT: &str = "Entrada inválida, debes ingresar un número entero";
    pub const INVALID_DECIMAL: &str =
        "Entrada inválida, debes ingresar un número decimal";
    pub const INVALID_OPTION: &str = "Opción inválida";
    pub const MUST_BE_POSITIVE: &str = "Debes ingresar un número mayor a cero";
    pub const MUST_BE_POSITIVE_OR_ZERO: &str =
        "Debes ingresar un número mayor o igual a cero";
    pub const MUST_BE_NEGATIVE: &str = "Debes ingresar un número menor a cero";
    pub const MUST_BE_NEGATIVE_OR_ZERO: &str =
        "Debes ingresar un número menor o igual a cero";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
