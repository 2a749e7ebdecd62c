use crate::config::Config;
use crate::engine::clock::Clock;
use crate::engine::srs::{self, ReviewStatus, ScheduleState};
use crate::store::ProgressStore;
use crate::store::schema::Schedule;
use crate::vocab::VocabItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewLimits {
    pub daily_new: usize,
    pub daily_review: usize,
}

impl Default for ReviewLimits {
    fn default() -> Self {
        Self {
            daily_new: 5,
            daily_review: 20,
        }
    }
}

impl ReviewLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            daily_new: config.daily_new_limit,
            daily_review: config.daily_review_limit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStats {
    pub new_learned: usize,
    pub reviewed: usize,
    pub total: usize,
    pub remaining: usize,
}

#[derive(Clone, Debug)]
pub struct ItemProgress<'a> {
    pub item: &'a VocabItem,
    pub state: Option<&'a ScheduleState>,
    pub status: ReviewStatus,
}

/// A vocabulary review session: owns the schedule for every seen item and
/// the per-session counters, and persists after each answer.
pub struct ReviewSession<S: ProgressStore> {
    store: S,
    clock: Box<dyn Clock>,
    vocabulary: Vec<VocabItem>,
    limits: ReviewLimits,
    schedule: Schedule,
    session_new: usize,
    session_review: usize,
    current: Option<VocabItem>,
    phase: SessionPhase,
}

impl<S: ProgressStore> ReviewSession<S> {
    pub fn new(
        store: S,
        clock: Box<dyn Clock>,
        vocabulary: &[VocabItem],
        limits: ReviewLimits,
    ) -> Self {
        let schedule = store.load_schedule();
        tracing::debug!(items = schedule.len(), "loaded review schedule");
        Self {
            store,
            clock,
            vocabulary: vocabulary.to_vec(),
            limits,
            schedule,
            session_new: 0,
            session_review: 0,
            current: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_item(&self) -> Option<&VocabItem> {
        self.current.as_ref()
    }

    pub fn limits(&self) -> ReviewLimits {
        self.limits
    }

    pub fn item_progress(&self, item_id: &str) -> Option<&ScheduleState> {
        self.schedule.get(item_id)
    }

    fn lookup(&self, item_id: &str) -> Option<&VocabItem> {
        self.vocabulary.iter().find(|item| item.id == item_id)
    }

    /// Seen items due today or earlier, most urgent first.
    pub fn due_items(&self) -> Vec<&ScheduleState> {
        self.due_entries().into_iter().map(|(_, s)| s).collect()
    }

    /// Due schedule entries with their map keys, in review order.
    fn due_entries(&self) -> Vec<(&str, &ScheduleState)> {
        let today = self.clock.today();
        let mut due: Vec<(&str, &ScheduleState)> = self
            .schedule
            .iter()
            .filter(|(_, s)| s.is_due(today))
            .map(|(id, s)| (id.as_str(), s))
            .collect();
        // HashMap order is arbitrary; fix it before the stable priority sort
        // so equal-priority items come out the same way every time.
        due.sort_by(|a, b| a.0.cmp(b.0));
        due.sort_by(|a, b| srs::priority_cmp(a.1, b.1, today));
        due
    }

    /// Vocabulary never answered, in table order.
    pub fn new_items(&self) -> Vec<&VocabItem> {
        self.vocabulary
            .iter()
            .filter(|item| !self.schedule.contains_key(item.id))
            .collect()
    }

    /// Today's remaining queue: due reviews first, then new items, each
    /// capped by what is left of its daily limit.
    pub fn review_queue(&self) -> Vec<VocabItem> {
        let review_budget = self.limits.daily_review.saturating_sub(self.session_review);
        let new_budget = self.limits.daily_new.saturating_sub(self.session_new);

        let due = self
            .due_entries()
            .into_iter()
            .filter_map(|(id, _)| self.lookup(id))
            .take(review_budget);
        let fresh = self.new_items().into_iter().take(new_budget);
        due.chain(fresh).copied().collect()
    }

    pub fn has_more_to_review(&self) -> bool {
        !self.review_queue().is_empty()
    }

    pub fn session_stats(&self) -> SessionStats {
        SessionStats {
            new_learned: self.session_new,
            reviewed: self.session_review,
            total: self.session_new + self.session_review,
            remaining: self.review_queue().len(),
        }
    }

    pub fn start_session(&mut self) {
        self.session_new = 0;
        self.session_review = 0;
        self.select_next_item();
        tracing::debug!(phase = ?self.phase, "review session started");
    }

    fn select_next_item(&mut self) {
        self.current = self.review_queue().first().copied();
        self.phase = if self.current.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Exhausted
        };
    }

    /// Score the current item, persist, and move to the next one. Returns
    /// the item's new schedule, or `None` when nothing is being shown.
    pub fn record_answer(&mut self, correct: bool) -> Option<ScheduleState> {
        let item = self.current?;
        let today = self.clock.today();

        let next = match self.schedule.get(item.id) {
            Some(existing) => {
                self.session_review += 1;
                srs::record_outcome(existing, correct, today)
            }
            None => {
                self.session_new += 1;
                srs::record_outcome(&srs::create_initial(item.id, today), correct, today)
            }
        };
        tracing::debug!(
            item = item.id,
            correct,
            interval = next.interval,
            "recorded answer"
        );
        self.schedule.insert(item.id.to_string(), next.clone());
        self.persist();
        self.select_next_item();
        Some(next)
    }

    /// Re-pick the head of the queue without scoring. The skipped item is
    /// not deferred, so it comes straight back when it is still first.
    pub fn skip_item(&mut self) {
        if self.phase != SessionPhase::Idle {
            self.select_next_item();
        }
    }

    /// Forget every schedule and end the session.
    pub fn reset_progress(&mut self) {
        self.schedule.clear();
        self.session_new = 0;
        self.session_review = 0;
        self.current = None;
        self.phase = SessionPhase::Idle;
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.save_schedule(&self.schedule) {
            tracing::warn!("failed to save review progress: {err:#}");
        }
    }

    pub fn vocab_with_progress(&self) -> Vec<ItemProgress<'_>> {
        self.vocabulary
            .iter()
            .map(|item| {
                let state = self.schedule.get(item.id);
                ItemProgress {
                    item,
                    state,
                    status: state.map_or(ReviewStatus::New, |s| s.status()),
                }
            })
            .collect()
    }

    pub fn learned_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn mastered_count(&self) -> usize {
        self.schedule.values().filter(|s| s.is_mastered()).count()
    }
}
