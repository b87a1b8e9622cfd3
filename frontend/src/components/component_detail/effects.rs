//! Executes the commands produced by `update`.
//!
//! Requests run on the browser event loop via `spawn_local`; each completion is
//! fed back to the page as a message. Transport failures are logged to the
//! console here, before the state machine sees them.

use gloo_file::futures::read_as_bytes;
use gloo_file::File;
use yew::html::Scope;
use yew::platform::spawn_local;

use common::model::media::MediaFile;

use super::commands::Command;
use super::helpers::{navigate_to, show_toast};
use super::messages::Msg;
use super::state::ComponentDetail;
use crate::api;

pub fn run(commands: Vec<Command>, link: &Scope<ComponentDetail>) {
    for command in commands {
        execute(command, link.clone());
    }
}

fn execute(command: Command, link: Scope<ComponentDetail>) {
    match command {
        Command::FetchComponent { id, generation } => spawn_local(async move {
            let result = api::fetch_component(&id).await;
            if let Err(err) = &result {
                gloo_console::error!(format!("Error fetching component {}: {}", id, err));
            }
            link.send_message(Msg::Loaded { generation, result });
        }),
        Command::FetchUser => spawn_local(async move {
            let user = match api::fetch_current_user().await {
                Ok(user) => user,
                Err(err) => {
                    gloo_console::error!(format!("Error fetching current user: {}", err));
                    None
                }
            };
            link.send_message(Msg::UserLoaded(user));
        }),
        Command::DeleteComponent { id } => spawn_local(async move {
            let result = api::delete_component(&id).await;
            if let Err(err) = &result {
                gloo_console::error!(format!("Error deleting component: {}", err));
            }
            link.send_message(Msg::DeleteFinished(result));
        }),
        Command::UpdateComponent { id, form } => spawn_local(async move {
            let result = api::update_component(&id, &form).await;
            if let Err(err) = &result {
                gloo_console::error!(format!("Error updating component: {}", err));
            }
            link.send_message(Msg::UpdateFinished(result));
        }),
        Command::CreateReview { id, body } => spawn_local(async move {
            let result = api::create_review(&id, &body).await;
            if let Err(err) = &result {
                gloo_console::error!(format!("Error submitting review: {}", err));
            }
            link.send_message(Msg::ReviewFinished(result));
        }),
        Command::ReadMedia { slot, ticket, file } => spawn_local(async move {
            let file = File::from(file);
            let name = file.name();
            let content_type = file.raw_mime_type();
            match read_as_bytes(&file).await {
                Ok(bytes) => link.send_message(Msg::MediaRead {
                    slot,
                    ticket,
                    file: MediaFile {
                        name,
                        content_type,
                        bytes,
                    },
                }),
                Err(err) => {
                    gloo_console::error!(format!("Error reading {}: {}", name, err));
                    link.send_message(Msg::MediaReadFailed { slot, ticket });
                }
            }
        }),
        Command::Notify(message) => show_toast(&message),
        Command::Navigate(path) => navigate_to(path),
    }
}
