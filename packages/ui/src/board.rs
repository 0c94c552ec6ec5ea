//! # Activity board loader
//!
//! Fetches the activity collection and turns it into the view state the
//! [`ActivityBoardView`](crate::views::ActivityBoardView) component renders: one card per
//! activity plus the option list of the activity `<select>`.
//!
//! The fetch ([`load_activities`]) and the state update ([`BoardState::apply_load`])
//! are separate so the component never holds a signal borrow across an await.

use api::{Activities, ActivityBackend, ApiError};

use crate::display::{escape_html, initials, DisplayName};
use crate::handle::BoardHandle;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// One entry of a card's participant list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantView {
    pub initial: String,
    pub display_name: String,
    /// Address to unregister with, when the entry carries one.
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantView>,
}

impl ActivityCardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Everything rendered from one successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardView {
    pub cards: Vec<ActivityCardView>,
}

impl BoardView {
    pub fn from_activities(activities: &Activities) -> Self {
        let cards = activities
            .iter()
            .map(|(name, activity)| ActivityCardView {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: activity
                    .participants
                    .iter()
                    .map(|p| {
                        let display_name = p.display_name();
                        ParticipantView {
                            initial: initials(&display_name),
                            email: p.email().map(str::to_string),
                            display_name,
                        }
                    })
                    .collect(),
            })
            .collect();
        Self { cards }
    }

    /// Values (and labels) of the activity `<select>`, after the placeholder.
    pub fn options(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Ready(BoardView),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub list: ListState,
    /// Activity names offered by the signup `<select>`.
    pub options: Vec<String>,
}

impl BoardState {
    /// Replace the rendered list with the outcome of a fetch.
    ///
    /// A success swaps list and options together. A failure only replaces the list;
    /// options keep whatever the last successful load produced.
    pub fn apply_load(&mut self, result: Result<Activities, ApiError>) {
        match result {
            Ok(activities) => {
                let view = BoardView::from_activities(&activities);
                self.options = view.options();
                self.list = ListState::Ready(view);
            }
            Err(_) => self.list = ListState::Failed,
        }
    }
}

/// Fetch the activity collection, logging a failure before handing it back.
pub async fn load_activities<B: ActivityBackend>(backend: &B) -> Result<Activities, ApiError> {
    let result = backend.fetch_activities().await;
    match &result {
        Ok(activities) => tracing::debug!("Loaded {} activities", activities.len()),
        Err(e) => tracing::error!("Error fetching activities: {}", e),
    }
    result
}

/// Fetch the activity collection and store the result behind `handle`.
pub async fn refresh_board<B, H>(backend: &B, handle: &mut H)
where
    B: ActivityBackend,
    H: BoardHandle,
{
    let result = load_activities(backend).await;
    handle.apply_load(result);
}

/// Markup for the head of a card: name, description, schedule, availability.
pub fn card_markup(card: &ActivityCardView) -> String {
    format!(
        "<h4>{}</h4><p>{}</p><p><strong>Schedule:</strong> {}</p><p><strong>Availability:</strong> {}</p>",
        escape_html(&card.name),
        escape_html(&card.description),
        escape_html(&card.schedule),
        escape_html(&card.availability()),
    )
}
