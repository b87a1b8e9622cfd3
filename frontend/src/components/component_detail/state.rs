//! Runtime state of the component detail page.
//!
//! Everything here is plain data so the update logic can run without a browser:
//! the loaded entry, the viewer, two dialog flags, both form drafts, the delete
//! flag, the save lock shared by the two dialogs and the load generation used to
//! drop stale responses.

use common::model::component::Component;
use common::model::media::{ComponentUpdateForm, MediaFile};
use common::model::user::User;
use common::requests::CreateReviewRequest;

/// Which of the two save operations currently holds the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOperation {
    Update,
    Review,
}

/// Single-slot lock shared by the update and review dialogs.
///
/// Both submit buttons are disabled while it is held, whichever dialog took it,
/// so at most one save request is outstanding per page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveLock {
    holder: Option<SaveOperation>,
}

impl SaveLock {
    /// Takes the lock for `op`. Returns `false` if any operation already holds it.
    pub fn try_acquire(&mut self, op: SaveOperation) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(op);
        true
    }

    /// Releases the lock if `op` holds it.
    pub fn release(&mut self, op: SaveOperation) {
        if self.holder == Some(op) {
            self.holder = None;
        }
    }

    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    pub fn holder(&self) -> Option<SaveOperation> {
        self.holder
    }
}

/// Progress of an update submission.
///
/// `Idle -> Submitting -> Reloading -> Idle` on success, `Submitting -> Idle`
/// with the dialog left open on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlow {
    Idle,
    Submitting,
    Reloading { generation: u64 },
}

/// Target slot of a chosen media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Image,
    Video,
}

/// Outstanding file reads, one ticket per slot.
///
/// Every pick takes a fresh ticket; a finished read is only applied if its
/// ticket is still the slot's current one, so clearing or re-picking a file
/// discards reads that were already running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaReads {
    issued: u64,
    image: Option<u64>,
    video: Option<u64>,
}

impl MediaReads {
    fn slot_mut(&mut self, slot: MediaSlot) -> &mut Option<u64> {
        match slot {
            MediaSlot::Image => &mut self.image,
            MediaSlot::Video => &mut self.video,
        }
    }

    /// Starts a read for `slot` and returns its ticket.
    pub fn begin(&mut self, slot: MediaSlot) -> u64 {
        self.issued += 1;
        *self.slot_mut(slot) = Some(self.issued);
        self.issued
    }

    pub fn cancel(&mut self, slot: MediaSlot) {
        *self.slot_mut(slot) = None;
    }

    /// Ends the read holding `ticket`. Returns `false` for a superseded read.
    pub fn finish(&mut self, slot: MediaSlot, ticket: u64) -> bool {
        let current = self.slot_mut(slot);
        if *current != Some(ticket) {
            return false;
        }
        *current = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.image.is_some() || self.video.is_some()
    }
}

/// Editable copy of the fields the update dialog changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDraft {
    pub title: String,
    pub description: String,
    pub component_path: String,
    pub image: Option<MediaFile>,
    pub video: Option<MediaFile>,
}

impl UpdateDraft {
    /// Copies title, description and path from a freshly loaded entry. Chosen
    /// files are left untouched.
    pub fn seed_from(&mut self, component: Option<&Component>) {
        let field = |pick: fn(&Component) -> &Option<String>| {
            component.and_then(|c| pick(c).clone()).unwrap_or_default()
        };
        self.title = field(|c| &c.title);
        self.description = field(|c| &c.description);
        self.component_path = field(|c| &c.component_path);
    }

    pub fn set_media(&mut self, slot: MediaSlot, file: Option<MediaFile>) {
        match slot {
            MediaSlot::Image => self.image = file,
            MediaSlot::Video => self.video = file,
        }
    }

    pub fn to_form(&self) -> ComponentUpdateForm {
        ComponentUpdateForm {
            title: self.title.clone(),
            description: self.description.clone(),
            component_path: self.component_path.clone(),
            image: self.image.clone(),
            video: self.video.clone(),
        }
    }
}

/// Review form contents. `rating` is `None` when the typed text is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub comment: String,
    pub rating: Option<i64>,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            comment: String::new(),
            rating: Some(1),
        }
    }
}

impl ReviewDraft {
    pub fn to_request(&self) -> CreateReviewRequest {
        CreateReviewRequest {
            comment: self.comment.clone(),
            rating: self.rating,
        }
    }
}

/// State container for the detail page. Fields are `pub` because `update`
/// and `view` both work on them directly.
pub struct ComponentDetail {
    /// Route identifier. Used as the key for loads and review creation.
    pub component_id: String,

    /// Loaded entry; `None` until a load resolves with a document.
    pub component: Option<Component>,

    /// Current viewer, if signed in.
    pub user: Option<User>,

    pub delete_in_flight: bool,
    pub update_dialog_open: bool,
    pub review_dialog_open: bool,

    pub update_draft: UpdateDraft,
    pub media_reads: MediaReads,
    pub review_draft: ReviewDraft,

    pub save_lock: SaveLock,
    pub update_flow: UpdateFlow,

    /// Generation of the most recently issued load.
    pub load_generation: u64,
}

impl ComponentDetail {
    pub fn new(component_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            component: None,
            user: None,
            delete_in_flight: false,
            update_dialog_open: false,
            review_dialog_open: false,
            update_draft: UpdateDraft::default(),
            media_reads: MediaReads::default(),
            review_draft: ReviewDraft::default(),
            save_lock: SaveLock::default(),
            update_flow: UpdateFlow::Idle,
            load_generation: 0,
        }
    }

    /// Update submit is blocked while any save runs or a chosen file is still
    /// being read.
    pub fn update_submit_disabled(&self) -> bool {
        self.save_lock.is_held() || self.media_reads.is_pending()
    }

    /// Whether edit and delete controls are shown. UI gate only; the server
    /// checks ownership again on every mutation.
    pub fn is_owner(&self) -> bool {
        super::helpers::is_owner(self.user.as_ref(), self.component.as_ref())
    }
}
