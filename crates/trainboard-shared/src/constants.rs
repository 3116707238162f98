/// Application name
pub const APP_NAME: &str = "Training Board";

/// Colors a new department may be given. One is picked at random on
/// creation; existing departments keep theirs.
pub const DEPARTMENT_PALETTE: [&str; 12] = [
    "#F59A6A", "#F7A97C", "#F6C177", "#F28B82",
    "#F4B183", "#F8D49A", "#F3B0A2", "#F5C09A",
    "#F6DE8D", "#E57373", "#F29C6B", "#E0A458",
];

/// Shown next to a department that cannot be deselected from a training.
pub const LOCKED_DEPARTMENT_REASON: &str =
    "This department has participants who already attended or acknowledged";

/// Shown when a login attempt fails, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
