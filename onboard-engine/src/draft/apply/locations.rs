//! Location reducers

use shared::draft::OnboardingDraft;
use shared::models::{LocationDraft, LocationForm, LocationFormPatch};

/// Append a finished location, reset the scratch form, and flag that the
/// UI should offer to add another
pub(super) fn add_location(draft: &mut OnboardingDraft, location: LocationDraft) {
    draft.locations.locations.push(location);
    draft.locations.form = LocationForm::default();
    draft.locations.offer_add_another = true;
}

pub(super) fn patch_form(draft: &mut OnboardingDraft, patch: LocationFormPatch) {
    let form = &mut draft.locations.form;
    if let Some(name) = patch.name {
        form.name = name;
    }
    if let Some(address) = patch.address {
        form.address = address;
    }
    if let Some(latitude) = patch.latitude {
        form.latitude = Some(latitude);
    }
    if let Some(longitude) = patch.longitude {
        form.longitude = Some(longitude);
    }
    if let Some(place_id) = patch.external_place_id {
        form.external_place_id = Some(place_id);
    }
}

pub(super) fn replace_locations(draft: &mut OnboardingDraft, list: Vec<LocationDraft>) {
    draft.locations.locations = list;
}
