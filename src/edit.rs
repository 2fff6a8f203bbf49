//! Item Edit Flow
//!
//! Load and submit logic for the edit page, written against the `ItemApi`,
//! `Notifier` and `Navigator` seams so the page component stays thin.

use crate::api::ItemApi;
use crate::config::DASHBOARD_ROUTE;
use crate::error::{ApiError, ApiResult};
use crate::models::{ItemForm, ItemTarget};
use crate::session::SessionError;
use crate::toast::{Notifier, ToastMessage};
use crate::validation::{validate_item_form, FieldErrors};

pub const SAVED_TITLE: &str = "Registered success";
pub const SAVED_DESCRIPTION: &str = "Item successfully registered";
pub const FAILED_TITLE: &str = "Error in register";
pub const FAILED_DESCRIPTION: &str = "There was an error making your registration, please try again!";

/// Client-side route changes
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Page lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Loading,
    Editable,
    Submitting,
    Done,
}

impl FormPhase {
    /// The mount-time load settled; a failed load still leaves the form editable
    pub fn finish_load(&mut self) {
        if *self == FormPhase::Loading {
            *self = FormPhase::Editable;
        }
    }

    /// Enter `Submitting`. Returns `false` while loading or with a write in flight.
    pub fn begin_submit(&mut self) -> bool {
        if *self != FormPhase::Editable {
            return false;
        }
        *self = FormPhase::Submitting;
        true
    }

    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        *self = match outcome {
            SubmitOutcome::Saved => FormPhase::Done,
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed => FormPhase::Editable,
        };
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent; annotate these fields
    Invalid(FieldErrors),
    Saved,
    Failed,
}

/// Fetch the item to pre-fill the form
pub async fn load_item<A>(api: &A, target: Result<&ItemTarget, &SessionError>) -> ApiResult<ItemForm>
where
    A: ItemApi + ?Sized,
{
    let target = target.map_err(|e| ApiError::Session(e.clone()))?;
    let item = api.fetch_item(target).await?;
    log::info!("Loaded item {} for user {}", target.item_id, target.user_id);
    Ok(item.into())
}

/// Validate, write, then notify and navigate
pub async fn submit_item<A, N, V>(
    api: &A,
    notifier: &N,
    navigator: &V,
    target: Result<&ItemTarget, &SessionError>,
    form: ItemForm,
) -> SubmitOutcome
where
    A: ItemApi + ?Sized,
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    if let Err(errors) = validate_item_form(&form) {
        log::debug!("Rejected submit, {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }

    let result = match target {
        Ok(target) => api.update_item(target, &form).await,
        Err(e) => Err(ApiError::Session(e.clone())),
    };

    match result {
        Ok(()) => {
            notifier.notify(ToastMessage::success(SAVED_TITLE, SAVED_DESCRIPTION));
            navigator.navigate(DASHBOARD_ROUTE);
            SubmitOutcome::Saved
        }
        Err(e) => {
            log::error!("Item update failed: {}", e);
            notifier.notify(ToastMessage::error(FAILED_TITLE, FAILED_DESCRIPTION));
            SubmitOutcome::Failed
        }
    }
}
