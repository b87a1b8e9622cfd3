//! Side effects requested by `update`. The page executes them in `effects`.

use common::model::media::ComponentUpdateForm;
use common::requests::CreateReviewRequest;

use super::state::MediaSlot;

#[derive(Debug)]
pub enum Command {
    FetchComponent { id: String, generation: u64 },
    FetchUser,
    DeleteComponent { id: String },
    UpdateComponent { id: String, form: ComponentUpdateForm },
    CreateReview { id: String, body: CreateReviewRequest },
    ReadMedia {
        slot: MediaSlot,
        ticket: u64,
        file: web_sys::File,
    },
    Notify(String),
    Navigate(&'static str),
}
