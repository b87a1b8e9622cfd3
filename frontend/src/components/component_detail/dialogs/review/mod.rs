use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::component_detail::state::SaveOperation;
use crate::components::component_detail::{ComponentDetail, Msg};
use crate::tops_sheet::material_top_sheet::MaterialTopSheet;

pub fn review_dialog(component: &ComponentDetail, link: &Scope<ComponentDetail>) -> Html {
    let draft = &component.review_draft;
    let creating = component.save_lock.holder() == Some(SaveOperation::Review);
    // A rating that is not a number shows as an empty field.
    let rating = draft.rating.map(|r| r.to_string()).unwrap_or_default();

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitReview
    });

    html! {
        <MaterialTopSheet open={component.review_dialog_open}>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <div class="actions">
                        <h3>{"Add your thought"}</h3>
                        <button class="btn" onclick={link.callback(|_| Msg::CloseReviewDialog)}>{"✕"}</button>
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="field">
                            <label>{"Write your comment"}</label>
                            <textarea
                                value={draft.comment.clone()}
                                placeholder="Enter your thought..."
                                rows={4}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetComment(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label>{"Add ratings"}</label>
                            <input
                                type="number"
                                min="1"
                                max="5"
                                value={rating}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetRating(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div class="actions">
                            <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseReviewDialog)}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn primary" disabled={component.save_lock.is_held()}>
                                { if creating { "Create..." } else { "Create" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </MaterialTopSheet>
    }
}
