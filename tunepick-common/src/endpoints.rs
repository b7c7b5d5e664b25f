/// Path the draft list is posted to.
pub const SAVE_PATH: &str = "/save";

/// Path of the sign-out form.
pub const SIGNOUT_PATH: &str = "/signout";

/// Id of the script element carrying the bootstrap payload.
pub const BOOTSTRAP_ELEMENT_ID: &str = "data";
