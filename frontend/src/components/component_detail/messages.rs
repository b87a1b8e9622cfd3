use common::model::component::Component;
use common::model::media::MediaFile;
use common::model::user::User;
use common::requests::CreateReviewResponse;

use super::state::MediaSlot;
use crate::api::ApiError;

pub enum Msg {
    Load,
    RouteChanged(String),
    Loaded {
        generation: u64,
        result: Result<Option<Component>, ApiError>,
    },
    UserLoaded(Option<User>),

    Delete,
    DeleteFinished(Result<(), ApiError>),

    OpenUpdateDialog,
    CloseUpdateDialog,
    SetTitle(String),
    SetDescription(String),
    SetPath(String),
    PickMedia(MediaSlot, Option<web_sys::File>),
    MediaRead {
        slot: MediaSlot,
        ticket: u64,
        file: MediaFile,
    },
    MediaReadFailed {
        slot: MediaSlot,
        ticket: u64,
    },
    SubmitUpdate,
    UpdateFinished(Result<(), ApiError>),

    OpenReviewDialog,
    CloseReviewDialog,
    SetComment(String),
    SetRating(String),
    SubmitReview,
    ReviewFinished(Result<CreateReviewResponse, ApiError>),
}
