use crate::core::export::export_document;
use crate::core::preview::{render_all, Preview};
use crate::core::reducer::{reduce, FormEvent};
use crate::domain::model::{HotelRow, QuoteForm};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Holds the form and its preview and runs the edit cycle:
/// event, reduce, full re-render.
pub struct QuoteSession {
    form: QuoteForm,
    preview: Preview,
    events_applied: usize,
}

impl QuoteSession {
    pub fn new(form: QuoteForm) -> Self {
        let preview = render_all(&form);
        Self {
            form,
            preview,
            events_applied: 0,
        }
    }

    /// Opens a session the way a fresh quotation starts: today's date when no
    /// quote date was given and one sample hotel row when there are none.
    pub fn start(mut form: QuoteForm, today: NaiveDate) -> Self {
        if form.quote_date.trim().is_empty() {
            form.quote_date = today.format("%Y-%m-%d").to_string();
        }
        if form.hotels.is_empty() {
            form.hotels.push(HotelRow {
                city: "موسكو".to_string(),
                hotel: "فندق اكوامارين".to_string(),
                ..HotelRow::default()
            });
        }
        Self::new(form)
    }

    pub fn dispatch(&mut self, event: FormEvent) -> &Preview {
        tracing::debug!("Applying event #{}: {:?}", self.events_applied, event);
        let form = std::mem::take(&mut self.form);
        self.form = reduce(form, event);
        self.preview = render_all(&self.form);
        self.events_applied += 1;
        &self.preview
    }

    pub fn dispatch_all<I>(&mut self, events: I) -> &Preview
    where
        I: IntoIterator<Item = FormEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        &self.preview
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn events_applied(&self) -> usize {
        self.events_applied
    }

    pub async fn export<S: Storage>(&self, storage: &S) -> Result<String> {
        export_document(storage, &self.form.quote_no, &self.preview).await
    }
}
