//! Update function for the component detail page.
//!
//! Elm-style: `update` receives the state and a `Msg`, mutates the state, pushes
//! the side effects it needs onto `commands` and returns whether the view should
//! re-render. It never performs I/O itself, so every transition can be driven
//! from plain unit tests.

use super::commands::Command;
use super::helpers::parse_rating;
use super::messages::Msg;
use super::state::{ComponentDetail, SaveOperation, UpdateFlow};

pub const DELETE_OK: &str = "Component deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete component. Please try again.";
pub const UPDATE_OK: &str = "Component updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update component. Please try again.";
pub const REVIEW_OK: &str = "Review created successfully";
pub const REVIEW_REJECTED: &str = "Failed to create review. Please try again.";
pub const REVIEW_FAILED: &str = "An error occurred. Please try again.";
pub const MEDIA_READ_FAILED: &str = "Could not read the selected file. Please choose it again.";

pub fn update(component: &mut ComponentDetail, msg: Msg, commands: &mut Vec<Command>) -> bool {
    match msg {
        Msg::Load => {
            issue_load(component, commands);
            false
        }
        Msg::RouteChanged(component_id) => {
            if component_id == component.component_id {
                return false;
            }
            component.component_id = component_id;
            issue_load(component, commands);
            true
        }
        Msg::Loaded { generation, result } => {
            if generation != component.load_generation {
                // Superseded by a later load.
                return false;
            }
            // Only the latest load gets here, so any pending reload is over.
            if matches!(component.update_flow, UpdateFlow::Reloading { .. }) {
                component.update_flow = UpdateFlow::Idle;
            }
            match result {
                Ok(loaded) => {
                    component.update_draft.seed_from(loaded.as_ref());
                    component.component = loaded;
                    true
                }
                // Already logged by the executor; the page keeps what it had.
                Err(_) => false,
            }
        }
        Msg::UserLoaded(user) => {
            component.user = user;
            true
        }

        Msg::Delete => {
            let Some(id) = component.component.as_ref().map(|c| c.id.clone()) else {
                return false;
            };
            if component.delete_in_flight {
                return false;
            }
            component.delete_in_flight = true;
            commands.push(Command::DeleteComponent { id });
            true
        }
        Msg::DeleteFinished(result) => {
            component.delete_in_flight = false;
            match result {
                Ok(()) => {
                    commands.push(Command::Notify(DELETE_OK.to_string()));
                    commands.push(Command::Navigate(common::api::COMPONENTS_PAGE));
                }
                Err(_) => commands.push(Command::Notify(DELETE_FAILED.to_string())),
            }
            true
        }

        Msg::OpenUpdateDialog => {
            component.update_dialog_open = true;
            true
        }
        Msg::CloseUpdateDialog => {
            component.update_dialog_open = false;
            true
        }
        Msg::SetTitle(value) => {
            component.update_draft.title = value;
            true
        }
        Msg::SetDescription(value) => {
            component.update_draft.description = value;
            true
        }
        Msg::SetPath(value) => {
            component.update_draft.component_path = value;
            true
        }
        Msg::PickMedia(slot, file) => {
            component.update_draft.set_media(slot, None);
            match file {
                Some(file) => {
                    let ticket = component.media_reads.begin(slot);
                    commands.push(Command::ReadMedia { slot, ticket, file });
                }
                None => component.media_reads.cancel(slot),
            }
            true
        }
        Msg::MediaRead { slot, ticket, file } => {
            if !component.media_reads.finish(slot, ticket) {
                return false;
            }
            component.update_draft.set_media(slot, Some(file));
            true
        }
        Msg::MediaReadFailed { slot, ticket } => {
            if !component.media_reads.finish(slot, ticket) {
                return false;
            }
            commands.push(Command::Notify(MEDIA_READ_FAILED.to_string()));
            true
        }
        Msg::SubmitUpdate => {
            let Some(id) = component.component.as_ref().map(|c| c.id.clone()) else {
                return false;
            };
            if component.media_reads.is_pending() {
                return false;
            }
            if !component.save_lock.try_acquire(SaveOperation::Update) {
                return false;
            }
            component.update_flow = UpdateFlow::Submitting;
            commands.push(Command::UpdateComponent {
                id,
                form: component.update_draft.to_form(),
            });
            true
        }
        Msg::UpdateFinished(result) => {
            component.save_lock.release(SaveOperation::Update);
            match result {
                Ok(()) => {
                    commands.push(Command::Notify(UPDATE_OK.to_string()));
                    let generation = issue_load(component, commands);
                    component.update_flow = UpdateFlow::Reloading { generation };
                    component.update_dialog_open = false;
                }
                Err(_) => {
                    commands.push(Command::Notify(UPDATE_FAILED.to_string()));
                    component.update_flow = UpdateFlow::Idle;
                }
            }
            true
        }

        Msg::OpenReviewDialog => {
            component.review_dialog_open = true;
            true
        }
        Msg::CloseReviewDialog => {
            component.review_dialog_open = false;
            true
        }
        Msg::SetComment(value) => {
            component.review_draft.comment = value;
            true
        }
        Msg::SetRating(raw) => {
            component.review_draft.rating = parse_rating(&raw);
            true
        }
        Msg::SubmitReview => {
            if !component.save_lock.try_acquire(SaveOperation::Review) {
                return false;
            }
            commands.push(Command::CreateReview {
                id: component.component_id.clone(),
                body: component.review_draft.to_request(),
            });
            true
        }
        Msg::ReviewFinished(result) => {
            component.save_lock.release(SaveOperation::Review);
            match result {
                Ok(response) if response.success => {
                    commands.push(Command::Notify(REVIEW_OK.to_string()));
                    component.review_dialog_open = false;
                }
                Ok(_) => commands.push(Command::Notify(REVIEW_REJECTED.to_string())),
                Err(_) => commands.push(Command::Notify(REVIEW_FAILED.to_string())),
            }
            true
        }
    }
}

/// Bumps the load generation and requests the entry for the current route id.
fn issue_load(component: &mut ComponentDetail, commands: &mut Vec<Command>) -> u64 {
    component.load_generation += 1;
    commands.push(Command::FetchComponent {
        id: component.component_id.clone(),
        generation: component.load_generation,
    });
    component.load_generation
}
