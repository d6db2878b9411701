//! Offer reducers

use shared::draft::OnboardingDraft;
use shared::models::OfferDraft;

pub(super) fn set_wants_offers(draft: &mut OnboardingDraft, wants: Option<bool>) {
    draft.offers.wants_offers = wants;
}

pub(super) fn add_offer(draft: &mut OnboardingDraft, offer: OfferDraft) {
    draft.offers.offers.push(offer);
}

pub(super) fn replace_offers(draft: &mut OnboardingDraft, offers: Vec<OfferDraft>) {
    draft.offers.offers = offers;
}
