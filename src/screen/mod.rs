pub mod modal;

use crate::roster::CharacterRecord;
use crate::roster::avatar::AvatarRef;
use crate::roster::field::DetailField;
use crate::source::FetchError;

use modal::ModalState;

/// Identifies the activation a fetch was started for. Results carrying an
/// older ticket are discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    InFlight(FetchTicket),
    Loaded,
    Failed(String),
}

/// One list row: the record plus its derived portrait reference.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    pub index: usize,
    pub record: &'a CharacterRecord,
    pub avatar: &'a AvatarRef,
    pub highlighted: bool,
}

/// Contents of the detail modal for the selected record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub record: &'a CharacterRecord,
    pub fields: Vec<(DetailField, String)>,
}

/// The character browser controller. Owns the fetched roster and the modal
/// selection; both change only through the methods below.
pub struct BrowserScreen {
    records: Vec<CharacterRecord>,
    avatars: Vec<AvatarRef>,
    modal: ModalState,
    fetch: FetchStatus,
    generation: u64,
    cursor: usize,
    fields: Vec<DetailField>,
}

impl BrowserScreen {
    pub fn new(fields: Vec<DetailField>) -> Self {
        Self {
            records: Vec::new(),
            avatars: Vec::new(),
            modal: ModalState::Closed,
            fetch: FetchStatus::Idle,
            generation: 0,
            cursor: 0,
            fields,
        }
    }

    /// Lifecycle hook for the screen coming to the foreground. Returns a
    /// ticket when the caller should start the listing fetch; a repeated
    /// activation while a fetch is pending or finished returns `None`.
    pub fn on_activate(&mut self) -> Option<FetchTicket> {
        if self.fetch != FetchStatus::Idle {
            log::debug!("activation ignored, fetch status is {:?}", self.fetch);
            return None;
        }
        let ticket = FetchTicket(self.generation);
        self.fetch = FetchStatus::InFlight(ticket);
        Some(ticket)
    }

    /// Lifecycle hook for the screen leaving the foreground. Any fetch still
    /// in flight is orphaned and the modal closes. The last roster stays on
    /// display until the next activation replaces it.
    pub fn on_deactivate(&mut self) {
        self.generation += 1;
        self.fetch = FetchStatus::Idle;
        self.modal.dismiss();
    }

    /// Apply the outcome of the fetch started for `ticket`. Returns whether
    /// the outcome was applied; stale outcomes are dropped.
    pub fn on_fetch_complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CharacterRecord>, FetchError>,
    ) -> bool {
        if self.fetch != FetchStatus::InFlight(ticket) {
            log::debug!("dropping stale fetch result for {ticket:?}");
            return false;
        }
        match result {
            Ok(records) => {
                log::info!("loaded {} characters", records.len());
                self.populate(records);
                self.fetch = FetchStatus::Loaded;
            }
            Err(err) => {
                log::error!("Error fetching Star Wars characters: {err}");
                self.fetch = FetchStatus::Failed(err.to_string());
            }
        }
        true
    }

    fn populate(&mut self, records: Vec<CharacterRecord>) {
        self.avatars = records.iter().map(AvatarRef::for_record).collect();
        self.records = records;
        self.cursor = 0;
        self.modal.dismiss();
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.records
            .iter()
            .zip(self.avatars.iter())
            .enumerate()
            .map(|(index, (record, avatar))| RowView {
                index,
                record,
                avatar,
                highlighted: index == self.cursor,
            })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first row drawn when `visible` rows fit, chosen so the
    /// cursor stays on screen.
    pub fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return self.cursor;
        }
        (self.cursor + 1).saturating_sub(visible)
    }

    pub fn fields(&self) -> &[DetailField] {
        &self.fields
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Select the record at `index`, opening the modal on it. Out-of-range
    /// indices leave the state untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        self.modal.select(index);
        true
    }

    /// The "view details" control of the highlighted row.
    pub fn view_details(&mut self) -> bool {
        if self.modal.is_open() {
            return false;
        }
        self.select(self.cursor)
    }

    /// The number-key shortcut: open the row at `slot` counted from the top
    /// of the `visible` rows on screen. Ignored while the modal is open.
    pub fn select_visible(&mut self, slot: usize, visible: usize) -> bool {
        if self.modal.is_open() || slot >= visible {
            return false;
        }
        let index = self.scroll_offset(visible) + slot;
        if index >= self.records.len() {
            return false;
        }
        self.cursor = index;
        self.select(index)
    }

    pub fn dismiss(&mut self) {
        self.modal.dismiss();
    }

    pub fn selected(&self) -> Option<&CharacterRecord> {
        self.modal
            .selected_index()
            .and_then(|index| self.records.get(index))
    }

    pub fn detail(&self) -> Option<DetailView<'_>> {
        let record = self.selected()?;
        let fields = self
            .fields
            .iter()
            .map(|field| (*field, field.display(record)))
            .collect();
        Some(DetailView { record, fields })
    }

    /// Advance time-based presentation state.
    pub fn tick(&mut self) {
        self.modal.advance();
    }

    // The list underneath the modal does not react while it is open.

    pub fn cursor_down(&mut self) {
        self.move_cursor_to(self.cursor.saturating_add(1));
    }

    pub fn cursor_up(&mut self) {
        self.move_cursor_to(self.cursor.saturating_sub(1));
    }

    pub fn page_down(&mut self, rows: usize) {
        self.move_cursor_to(self.cursor.saturating_add(rows.max(1)));
    }

    pub fn page_up(&mut self, rows: usize) {
        self.move_cursor_to(self.cursor.saturating_sub(rows.max(1)));
    }

    pub fn cursor_first(&mut self) {
        self.move_cursor_to(0);
    }

    pub fn cursor_last(&mut self) {
        self.move_cursor_to(self.records.len().saturating_sub(1));
    }

    fn move_cursor_to(&mut self, target: usize) {
        if self.modal.is_open() || self.records.is_empty() {
            return;
        }
        self.cursor = target.min(self.records.len() - 1);
    }
}
