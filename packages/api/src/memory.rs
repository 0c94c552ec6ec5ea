use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::ActivityBackend;
use crate::error::ApiError;
use crate::models::{Activities, Activity, Participant, ServerReply, SignupRequest};

/// In-memory ActivityBackend for testing and offline demos.
///
/// Applies the same rules as the REST backend: unknown activities are 404s, while
/// duplicate signups, full activities, and unregistering an absent email are 400s.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    activities: Arc<Mutex<Activities>>,
    scripted: Arc<Mutex<VecDeque<(u16, ServerReply)>>>,
    offline: Arc<AtomicBool>,
    fetches: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: Activities) -> Self {
        let backend = Self::new();
        *backend.activities.lock().unwrap() = activities;
        backend
    }

    /// Simulate the network going down (or coming back).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answer the next signup/unregister with `reply` instead of applying the rules.
    pub fn push_reply(&self, status: u16, reply: ServerReply) {
        self.scripted.lock().unwrap().push_back((status, reply));
    }

    /// Number of `fetch_activities` calls served so far (including failed ones).
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Activities {
        self.activities.lock().unwrap().clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Unavailable("network is down".to_string()))
        } else {
            Ok(())
        }
    }

    fn scripted_reply(&self) -> Option<Result<String, ApiError>> {
        let (status, reply) = self.scripted.lock().unwrap().pop_front()?;
        if (200..300).contains(&status) {
            Some(Ok(reply.message.unwrap_or_default()))
        } else {
            Some(Err(ApiError::Rejected {
                status,
                detail: reply.detail,
            }))
        }
    }

    fn with_activity<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut activities = self.activities.lock().unwrap();
        let activity = activities.get_mut(name).ok_or_else(|| rejected(404, "Activity not found"))?;
        f(activity)
    }
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

fn is_registered(participant: &Participant, email: &str) -> bool {
    match participant {
        Participant::PlainIdentifier(id) => id == email,
        Participant::NamedParticipant { email: Some(e), .. } => e == email,
        Participant::NamedParticipant { .. } => false,
    }
}

impl ActivityBackend for MemoryBackend {
    async fn fetch_activities(&self) -> Result<Activities, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.snapshot())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.check_online()?;
        if let Some(reply) = self.scripted_reply() {
            return reply;
        }
        self.with_activity(&request.activity, |activity| {
            if activity.participants.iter().any(|p| is_registered(p, &request.email)) {
                return Err(rejected(400, "Student is already signed up"));
            }
            if activity.spots_left() <= 0 {
                return Err(rejected(400, "Activity is full"));
            }
            activity
                .participants
                .push(Participant::plain(request.email.clone()));
            Ok(format!("Signed up {} for {}", request.email, request.activity))
        })
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.check_online()?;
        if let Some(reply) = self.scripted_reply() {
            return reply;
        }
        self.with_activity(&request.activity, |activity| {
            let before = activity.participants.len();
            activity
                .participants
                .retain(|p| !is_registered(p, &request.email));
            if activity.participants.len() == before {
                return Err(rejected(400, "Student is not signed up for this activity"));
            }
            Ok(format!("Unregistered {} from {}", request.email, request.activity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> MemoryBackend {
        let mut activities = Activities::new();
        activities.insert(
            "Chess Club",
            Activity::new("Learn strategies", "Fridays, 3:30 PM - 5:00 PM", 2)
                .with_participants(vec![Participant::plain("michael@mergington.edu")]),
        );
        MemoryBackend::with_activities(activities)
    }

    #[tokio::test]
    async fn test_signup_and_unregister_flow() {
        let backend = chess_club();
        let request = SignupRequest::new("Chess Club", "pytest.temp.user@example.com");

        let message = backend.signup(&request).await.unwrap();
        assert!(message.contains("Signed up"));

        let after = backend.fetch_activities().await.unwrap();
        assert!(after
            .get("Chess Club")
            .unwrap()
            .participants
            .contains(&Participant::plain("pytest.temp.user@example.com")));

        let message = backend.unregister(&request).await.unwrap();
        assert!(message.contains("Unregistered"));

        let last = backend.fetch_activities().await.unwrap();
        assert_eq!(last.get("Chess Club").unwrap().participants.len(), 1);
        assert_eq!(backend.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_and_full() {
        let backend = chess_club();
        let dup = SignupRequest::new("Chess Club", "michael@mergington.edu");
        let err = backend.signup(&dup).await.unwrap_err();
        assert_eq!(err.detail(), Some("Student is already signed up"));

        backend
            .signup(&SignupRequest::new("Chess Club", "second@x.org"))
            .await
            .unwrap();
        let err = backend
            .signup(&SignupRequest::new("Chess Club", "third@x.org"))
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("Activity is full"));
    }

    #[tokio::test]
    async fn test_unknown_activity_is_404() {
        let backend = chess_club();
        let err = backend
            .signup(&SignupRequest::new("Underwater Basket Weaving", "a@b.c"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 404, .. }));

        let err = backend
            .unregister(&SignupRequest::new("Chess Club", "ghost@b.c"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_scripted_reply_takes_precedence() {
        let backend = chess_club();
        backend.push_reply(200, ServerReply::with_message("Signed up!"));
        backend.push_reply(400, ServerReply::with_detail("Activity full"));

        let request = SignupRequest::new("Chess Club", "x@y.com");
        assert_eq!(backend.signup(&request).await.unwrap(), "Signed up!");
        let err = backend.signup(&request).await.unwrap_err();
        assert_eq!(err.detail(), Some("Activity full"));
        // Scripted replies leave the data alone.
        assert_eq!(backend.snapshot().get("Chess Club").unwrap().participants.len(), 1);
    }

    #[tokio::test]
    async fn test_offline() {
        let backend = chess_club();
        backend.set_offline(true);
        assert!(matches!(
            backend.fetch_activities().await,
            Err(ApiError::Unavailable(_))
        ));
        assert!(backend
            .signup(&SignupRequest::new("Chess Club", "a@b.c"))
            .await
            .is_err());
        assert_eq!(backend.fetch_count(), 1);

        backend.set_offline(false);
        assert!(backend.fetch_activities().await.is_ok());
    }
}
