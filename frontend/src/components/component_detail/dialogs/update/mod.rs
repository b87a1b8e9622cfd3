use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::first_file;
use crate::components::component_detail::state::{MediaSlot, UpdateFlow};
use crate::components::component_detail::{ComponentDetail, Msg};
use crate::tops_sheet::material_top_sheet::MaterialTopSheet;

pub fn update_dialog(component: &ComponentDetail, link: &Scope<ComponentDetail>) -> Html {
    let draft = &component.update_draft;

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitUpdate
    });

    html! {
        <MaterialTopSheet open={component.update_dialog_open}>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <div class="actions">
                        <h3>{"Update Component"}</h3>
                        <button class="btn" onclick={link.callback(|_| Msg::CloseUpdateDialog)}>{"✕"}</button>
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="field">
                            <label>{"Title"}</label>
                            <input
                                type="text"
                                value={draft.title.clone()}
                                placeholder="Enter component title..."
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label>{"Path"}</label>
                            <input
                                type="text"
                                value={draft.component_path.clone()}
                                placeholder="Enter component Path..."
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetPath(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label>{"Description"}</label>
                            <textarea
                                value={draft.description.clone()}
                                placeholder="Enter component description..."
                                rows={4}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label>{"Image"}</label>
                            <input
                                type="file"
                                accept="image/*"
                                onchange={link.callback(|e: Event| Msg::PickMedia(MediaSlot::Image, first_file(&e)))}
                            />
                        </div>
                        <div class="field">
                            <label>{"Video"}</label>
                            <input
                                type="file"
                                accept="video/*"
                                onchange={link.callback(|e: Event| Msg::PickMedia(MediaSlot::Video, first_file(&e)))}
                            />
                        </div>
                        <div class="actions">
                            <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseUpdateDialog)}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn primary" disabled={component.update_submit_disabled()}>
                                { submit_label(component) }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </MaterialTopSheet>
    }
}

fn submit_label(component: &ComponentDetail) -> &'static str {
    match component.update_flow {
        UpdateFlow::Submitting => "Saving...",
        _ if component.media_reads.is_pending() => "Reading file...",
        _ => "Save Changes",
    }
}
