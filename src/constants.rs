pub const PLANE_API_URL: &str = "https://api.plane.so";
pub const CONFIG_FILE: &str = ".plane-labels-config.json";

pub const API_KEY_ENV: &str = "PLANE_API_KEY";
pub const BASE_URL_ENV: &str = "PLANE_BASE_URL";
/// `error`, `info` or `debug`. Defaults to `info`.
pub const LOG_LEVEL_ENV: &str = "PLANE_LABELS_LOG";

/// Message the label endpoint returns when a project already has a label with that name.
pub const DUPLICATE_LABEL_ERROR: &str = "Label with the same name already exists in the project";

// Toast titles
pub const SUCCESS_TITLE: &str = "Success!";
pub const ERROR_TITLE: &str = "Error!";

// Toast messages
pub const ISSUE_UPDATE_FAILED: &str = "Issue update failed";
pub const LABEL_CREATED: &str = "Label created successfully";
pub const LABEL_EXISTS: &str = "Label already exists";
pub const LABEL_CREATE_FAILED: &str = "Label creation failed";
