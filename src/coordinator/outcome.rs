use crate::constants::{ISSUE_UPDATE_FAILED, LABEL_CREATED, LABEL_CREATE_FAILED, LABEL_EXISTS};
use crate::models::Label;
use crate::notify::Notification;
use crate::store::{ErrorClassifier, ErrorKind, StoreResult};

/// What an operation wants the user to see once it has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Notify(Notification),
}

impl Outcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Outcome::Silent => None,
            Outcome::Notify(notification) => Some(notification),
        }
    }
}

/// Label toggles succeed quietly; a failed update gets one generic error toast.
pub fn update_outcome(result: &StoreResult<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Silent,
        Err(_) => Outcome::Notify(Notification::error(ISSUE_UPDATE_FAILED)),
    }
}

/// Draft issues skip the success toast; failures are classified.
pub fn create_outcome(result: &StoreResult<Label>, is_draft: bool, classify: ErrorClassifier) -> Outcome {
    match result {
        Ok(_) if is_draft => Outcome::Silent,
        Ok(_) => Outcome::Notify(Notification::success(LABEL_CREATED)),
        Err(err) => {
            let message = match classify(err) {
                ErrorKind::DuplicateName => LABEL_EXISTS,
                ErrorKind::Other => LABEL_CREATE_FAILED,
            };
            Outcome::Notify(Notification::error(message))
        }
    }
}
