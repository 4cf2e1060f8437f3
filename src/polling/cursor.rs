/// Last confirmed update identifier, owned exclusively by the poller.
///
/// Written only at the single confirmation point after a dispatch; never
/// decreases. Unset until the first update is confirmed, which lets the
/// server pick the starting point.
#[derive(Debug, Default)]
pub(crate) struct OffsetCursor {
    last_confirmed: Option<i64>,
}

impl OffsetCursor {
    /// Offset for the next retrieval call: one past the last confirmed id.
    pub(crate) fn next_offset(&self) -> Option<i64> {
        self.last_confirmed.map(|id| id + 1)
    }

    pub(crate) fn confirm(&mut self, update_id: i64) {
        if self.last_confirmed.map_or(true, |prev| update_id > prev) {
            self.last_confirmed = Some(update_id);
        }
    }
}
