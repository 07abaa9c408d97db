//! The page/section editing model
//!
//! A [`PageEditor`] owns one page draft. Section edits happen inside a
//! [`SectionDraft`], a working copy opened from (or appended to) the
//! page; nothing touches the page until the draft is applied back with
//! [`PageEditor::update_section`]. Closing a draft without applying it
//! discards it wholesale - there is no partial commit.
//!
//! A draft captures its target's identity the moment it opens: the
//! persisted id when the section has one, otherwise the pre-edit
//! `order`. The operator may then change `order` (or anything else)
//! inside the draft without the apply step attaching to the wrong
//! section.
//!
//! Structural staleness - the target section was deleted while the
//! draft was open, a stale button index - degrades to a logged no-op,
//! never a crash. The only errors are save-related and keep the draft
//! intact.

use crate::error::{PagesError, PagesResult};
use crate::pages::Page;
use crate::sections::{
	CallToActionButton, Display, Section, SectionBody, SectionType, SlideType, SliderConfig,
};
use crate::seo::SeoRecord;
use crate::store::{PageStore, SavedPage};
use tessera_core::{Attachment, CollaboratorError, Locale, ordering};
use tessera_forms::FormSchema;
use uuid::Uuid;

/// Where the editor stands with respect to its persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SaveState {
	/// No save running.
	#[default]
	Idle,
	/// A save request is awaiting its collaborator; structural saves are
	/// blocked, reads are not.
	Saving,
	/// The last save failed; the draft is untouched and retryable.
	Failed(CollaboratorError),
}

impl SaveState {
	/// Whether a save request is currently in flight.
	pub fn is_saving(&self) -> bool {
		matches!(self, Self::Saving)
	}

	/// The failure of the last save, if it failed.
	pub fn failure(&self) -> Option<&CollaboratorError> {
		match self {
			Self::Failed(error) => Some(error),
			_ => None,
		}
	}
}

/// Identity of an edit target, captured when the draft opens.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DraftTarget {
	/// The section has a persisted id.
	Persisted(i64),
	/// Not yet persisted; the pre-edit order is the only stable handle.
	Unsaved { order_at_open: u32 },
}

/// A working copy of one section under edit.
pub struct SectionDraft {
	session: Uuid,
	target: DraftTarget,
	section: Section,
}

impl SectionDraft {
	fn open(section: &Section) -> Self {
		let target = match section.id {
			Some(id) => DraftTarget::Persisted(id),
			None => DraftTarget::Unsaved {
				order_at_open: section.order,
			},
		};
		Self {
			session: Uuid::new_v4(),
			target,
			section: section.clone(),
		}
	}

	/// Session-local handle for logging and UI keys.
	pub fn session_id(&self) -> Uuid {
		self.session
	}

	/// The current working copy.
	pub fn section(&self) -> &Section {
		&self.section
	}

	/// Replace one locale variant of the heading.
	pub fn set_title(&mut self, locale: Locale, value: impl Into<String>) {
		self.section.title.set(locale, value);
	}

	/// Replace one locale variant of the body copy.
	pub fn set_content(&mut self, locale: Locale, value: impl Into<String>) {
		self.section.content.set(locale, value);
	}

	/// Move the section to another order. The page renumbers everything
	/// when the draft is applied.
	pub fn set_order(&mut self, order: u32) {
		self.section.order = order;
	}

	/// Flip public visibility.
	pub fn toggle_active(&mut self) {
		self.section.active = !self.section.active;
	}

	/// Rebuild the payload as another kind.
	///
	/// What survives: title/content always (they live on the section),
	/// attachment and buttons between hero and content, the attachment
	/// alone into a banner. Display state survives only between the
	/// slider-capable kinds; entering or leaving a banner lands on
	/// standard display. Entering a form starts an empty schema and
	/// drops the attachment (the form variant has no slot for it).
	pub fn change_body_type(&mut self, target: SectionType) {
		if self.section.section_type() == target {
			return;
		}
		let old = std::mem::replace(&mut self.section.body, SectionBody::empty(target));
		let (attachment, buttons, display) = match old {
			SectionBody::Hero {
				attachment,
				buttons,
				display,
			}
			| SectionBody::Content {
				attachment,
				buttons,
				display,
			} => (attachment, buttons, Some(display)),
			SectionBody::Banner { attachment, .. } => (attachment, Vec::new(), None),
			SectionBody::Form { .. } => (None, Vec::new(), None),
		};
		match &mut self.section.body {
			SectionBody::Hero {
				attachment: slot,
				buttons: button_slot,
				display: display_slot,
			}
			| SectionBody::Content {
				attachment: slot,
				buttons: button_slot,
				display: display_slot,
			} => {
				*slot = attachment;
				*button_slot = buttons;
				*display_slot = display.unwrap_or_default();
			}
			SectionBody::Banner {
				attachment: slot, ..
			} => {
				*slot = attachment;
			}
			SectionBody::Form { .. } => {}
		}
	}

	/// Flip between standard rendering and a slider.
	///
	/// An existing attachment is left in place while slider mode is
	/// active; it is dormant, not discarded.
	pub fn toggle_display_mode(&mut self) {
		match self.display_mut() {
			Some(display) => {
				*display = match display {
					Display::Standard => Display::Slider(SliderConfig::new(SlideType::Services)),
					Display::Slider(_) => Display::Standard,
				};
			}
			None => {
				tracing::warn!(
					session = %self.session,
					"toggle_display_mode on a kind without display; ignoring"
				);
			}
		}
	}

	/// Point the slider at another catalog, clearing the selection.
	pub fn change_slide_type(&mut self, slide_type: SlideType) {
		match self.slider_mut() {
			Some(config) => config.change_slide_type(slide_type),
			None => {
				tracing::warn!(session = %self.session, "change_slide_type outside slider mode; ignoring");
			}
		}
	}

	/// Replace the slider's selected catalog ids.
	pub fn select_entities(&mut self, ids: Vec<i64>) {
		match self.slider_mut() {
			Some(config) => config.selected_entity_ids = ids,
			None => {
				tracing::warn!(session = %self.session, "select_entities outside slider mode; ignoring");
			}
		}
	}

	/// Flip the per-slide payment link, where the catalog supports it.
	pub fn toggle_payment_link(&mut self) {
		match self.slider_mut() {
			Some(config) if config.slide_type.supports_payment_link() => {
				config.payment_link_enabled = !config.payment_link_enabled;
			}
			Some(config) => {
				let slide_type = config.slide_type;
				tracing::warn!(
					session = %self.session,
					slide_type = ?slide_type,
					"payment link not supported by this catalog; ignoring"
				);
			}
			None => {
				tracing::warn!(session = %self.session, "toggle_payment_link outside slider mode; ignoring");
			}
		}
	}

	/// Set or clear the image, for kinds that carry one.
	pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
		match &mut self.section.body {
			SectionBody::Hero {
				attachment: slot, ..
			}
			| SectionBody::Content {
				attachment: slot, ..
			}
			| SectionBody::Banner {
				attachment: slot, ..
			} => *slot = attachment,
			SectionBody::Form { .. } => {
				tracing::warn!(session = %self.session, "form sections carry no attachment; ignoring");
			}
		}
	}

	/// Set or clear the banner's outbound link.
	pub fn set_link(&mut self, link: Option<String>) {
		match &mut self.section.body {
			SectionBody::Banner { link: slot, .. } => *slot = link,
			_ => {
				tracing::warn!(session = %self.session, "only banners carry a link; ignoring");
			}
		}
	}

	/// Append an empty primary-style button.
	pub fn add_button(&mut self) {
		match self.buttons_mut() {
			Some(buttons) => buttons.push(CallToActionButton::new()),
			None => {
				tracing::warn!(session = %self.session, "this kind carries no buttons; ignoring");
			}
		}
	}

	/// Apply an edit to one button. A stale index is a no-op.
	pub fn update_button(&mut self, index: usize, edit: impl FnOnce(&mut CallToActionButton)) {
		match self.buttons_mut().and_then(|buttons| buttons.get_mut(index)) {
			Some(button) => edit(button),
			None => {
				tracing::warn!(session = %self.session, index, "update_button target vanished; ignoring edit");
			}
		}
	}

	/// Remove one button. Buttons carry no rank, so nothing renumbers.
	pub fn remove_button(&mut self, index: usize) {
		match self.buttons_mut() {
			Some(buttons) if index < buttons.len() => {
				buttons.remove(index);
			}
			_ => {
				tracing::warn!(session = %self.session, index, "remove_button target vanished; ignoring");
			}
		}
	}

	/// The embedded form schema, for form sections.
	pub fn form_schema(&self) -> Option<&FormSchema> {
		self.section.form_schema()
	}

	/// Mutable access to the embedded form schema, for form sections.
	pub fn form_schema_mut(&mut self) -> Option<&mut FormSchema> {
		match &mut self.section.body {
			SectionBody::Form { schema } => Some(schema),
			_ => None,
		}
	}

	fn buttons_mut(&mut self) -> Option<&mut Vec<CallToActionButton>> {
		match &mut self.section.body {
			SectionBody::Hero { buttons, .. } | SectionBody::Content { buttons, .. } => {
				Some(buttons)
			}
			SectionBody::Banner { .. } | SectionBody::Form { .. } => None,
		}
	}

	fn display_mut(&mut self) -> Option<&mut Display> {
		match &mut self.section.body {
			SectionBody::Hero { display, .. } | SectionBody::Content { display, .. } => {
				Some(display)
			}
			SectionBody::Banner { .. } | SectionBody::Form { .. } => None,
		}
	}

	fn slider_mut(&mut self) -> Option<&mut SliderConfig> {
		match self.display_mut() {
			Some(Display::Slider(config)) => Some(config),
			_ => None,
		}
	}
}

/// The editing session for one page draft.
pub struct PageEditor {
	page: Page,
	save_state: SaveState,
	dirty: bool,
}

impl PageEditor {
	/// Start editing a page loaded from the collaborator.
	///
	/// Section orders are normalized on entry; collaborator payloads are
	/// not trusted to uphold the contiguity invariant.
	pub fn new(mut page: Page) -> Self {
		page.normalize_sections();
		Self {
			page,
			save_state: SaveState::Idle,
			dirty: false,
		}
	}

	/// Start a brand-new page with the given slug.
	pub fn blank(slug: impl Into<String>) -> Self {
		Self::new(Page::new(slug))
	}

	/// The current draft.
	pub fn page(&self) -> &Page {
		&self.page
	}

	/// Give up the editor and keep the draft value.
	pub fn into_page(self) -> Page {
		self.page
	}

	/// Whether the draft differs from the last saved state.
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Where the editor stands with its persistence collaborator.
	pub fn save_state(&self) -> &SaveState {
		&self.save_state
	}

	/// Replace the page slug.
	pub fn set_slug(&mut self, slug: impl Into<String>) {
		self.page.slug = slug.into();
		self.dirty = true;
	}

	/// Replace one locale variant of the navigation name.
	pub fn set_name(&mut self, locale: Locale, value: impl Into<String>) {
		self.page.name.set(locale, value);
		self.dirty = true;
	}

	/// Replace one locale variant of the page title.
	pub fn set_title(&mut self, locale: Locale, value: impl Into<String>) {
		self.page.title.set(locale, value);
		self.dirty = true;
	}

	/// Replace one locale variant of the description.
	pub fn set_description(&mut self, locale: Locale, value: impl Into<String>) {
		self.page.description.set(locale, value);
		self.dirty = true;
	}

	/// Replace one locale variant of the meta title.
	pub fn set_meta_title(&mut self, locale: Locale, value: impl Into<String>) {
		self.page.meta_title.set(locale, value);
		self.dirty = true;
	}

	/// Replace one locale variant of the meta description.
	pub fn set_meta_description(&mut self, locale: Locale, value: impl Into<String>) {
		self.page.meta_description.set(locale, value);
		self.dirty = true;
	}

	/// Show or hide the page in the menu.
	pub fn set_show_in_menu(&mut self, show: bool) {
		self.page.show_in_menu = show;
		self.dirty = true;
	}

	/// Show or hide the page in the footer.
	pub fn set_show_in_footer(&mut self, show: bool) {
		self.page.show_in_footer = show;
		self.dirty = true;
	}

	/// Edit the SEO record in place.
	pub fn seo_mut(&mut self) -> &mut SeoRecord {
		self.dirty = true;
		&mut self.page.seo
	}

	/// Append a fresh section of the given kind and open it for editing.
	///
	/// The new section lands at `order = n + 1`, active, standard
	/// display.
	pub fn add_section(&mut self, section_type: SectionType) -> SectionDraft {
		let order = ordering::next_rank(&self.page.sections);
		let section = Section::new(section_type, order);
		self.page.sections.push(section);
		self.dirty = true;
		SectionDraft::open(self.page.sections.last().expect("just pushed"))
	}

	/// Open a working copy of the section at the given order.
	pub fn open_section(&self, order: u32) -> Option<SectionDraft> {
		self.page.section_by_order(order).map(SectionDraft::open)
	}

	/// Apply a draft back onto the page.
	///
	/// The target is resolved by the identity captured when the draft
	/// opened - persisted id first, pre-edit order for unsaved sections.
	/// A vanished target (deleted while the draft was open) discards the
	/// edit with a warning. Orders are renumbered afterwards, so a draft
	/// that changed its own `order` moves the section.
	pub fn update_section(&mut self, draft: &SectionDraft) {
		let index = match &draft.target {
			DraftTarget::Persisted(id) => self
				.page
				.sections
				.iter()
				.position(|s| s.id == Some(*id)),
			DraftTarget::Unsaved { order_at_open } => self
				.page
				.sections
				.iter()
				.position(|s| s.id.is_none() && s.order == *order_at_open),
		};
		match index {
			Some(index) => {
				self.page.sections[index] = draft.section.clone();
				ordering::renumber(&mut self.page.sections);
				self.dirty = true;
			}
			None => {
				tracing::warn!(
					session = %draft.session,
					target = ?draft.target,
					"update_section target vanished; discarding edit"
				);
			}
		}
	}

	/// Remove the section at the given order and close the gap.
	pub fn delete_section(&mut self, order: u32) {
		let Some(index) = self.page.sections.iter().position(|s| s.order == order) else {
			tracing::warn!(order, "delete_section target vanished; ignoring");
			return;
		};
		self.page.sections.remove(index);
		ordering::renumber(&mut self.page.sections);
		self.dirty = true;
	}

	/// Move a section between positions (drag-and-drop drop handler).
	///
	/// Positions address the order-sorted list. The whole move happens
	/// or nothing does; there is no partial reorder.
	pub fn reorder_sections(&mut self, source: usize, dest: usize) {
		let next = ordering::reorder(&self.page.sections, source, dest);
		if next != self.page.sections {
			self.page.sections = next;
			self.dirty = true;
		}
	}

	/// Persist the whole draft through the collaborator.
	///
	/// While the returned future is pending the editor reports
	/// [`SaveState::Saving`] and refuses a second save. On success the
	/// collaborator-assigned ids are adopted into the draft; on failure
	/// the draft is left exactly as it was and the same call can be
	/// retried. Dropping the future mid-save leaves the editor in
	/// `Saving`; discard the editor (the draft is gone anyway) rather
	/// than resuming it.
	pub async fn save(&mut self, store: &dyn PageStore) -> PagesResult<()> {
		if self.save_state.is_saving() {
			return Err(PagesError::SaveInFlight);
		}
		self.save_state = SaveState::Saving;
		match store.save_page(&self.page).await {
			Ok(saved) => {
				self.adopt_saved(saved);
				self.save_state = SaveState::Idle;
				self.dirty = false;
				Ok(())
			}
			Err(error) => {
				self.save_state = SaveState::Failed(error.clone());
				Err(PagesError::Save(error))
			}
		}
	}

	/// Persist one section through the collaborator's finer-grained
	/// endpoint.
	///
	/// Requires the page itself to have a persisted id. A stale order is
	/// a structural no-op, consistent with the other mutation paths.
	pub async fn save_section(&mut self, store: &dyn PageStore, order: u32) -> PagesResult<()> {
		let page_id = self.page.id.ok_or(PagesError::UnsavedPage)?;
		if self.save_state.is_saving() {
			return Err(PagesError::SaveInFlight);
		}
		let Some(index) = self.page.sections.iter().position(|s| s.order == order) else {
			tracing::warn!(order, "save_section target vanished; ignoring");
			return Ok(());
		};
		self.save_state = SaveState::Saving;
		match store.save_section(page_id, &self.page.sections[index]).await {
			Ok(saved) => {
				self.page.sections[index].id = Some(saved.section_id);
				self.save_state = SaveState::Idle;
				Ok(())
			}
			Err(error) => {
				self.save_state = SaveState::Failed(error.clone());
				Err(PagesError::Save(error))
			}
		}
	}

	fn adopt_saved(&mut self, saved: SavedPage) {
		self.page.id = Some(saved.page_id);
		if saved.section_ids.len() == self.page.sections.len() {
			for (section, id) in self.page.sections.iter_mut().zip(saved.section_ids) {
				section.id = Some(id);
			}
		} else if !saved.section_ids.is_empty() {
			tracing::warn!(
				expected = self.page.sections.len(),
				received = saved.section_ids.len(),
				"collaborator returned a mismatched section id list; keeping local ids"
			);
		}
	}
}
