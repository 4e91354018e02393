use roster::{Contact, payloads::RootData};
use tracing::{debug, info};

use crate::{
    error::NavigatorError,
    history::History,
    location::Location,
    navigation::{HistoryAction, LoadIntent, LoadKind, Navigation, SearchPhase, Submission},
    revalidate::{Revalidator, Subscription},
    routes::{RouteId, RouteMatch, match_routes},
    transport::{LoaderData, Transport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    /// A newer navigation started before this one finished. Nothing was rendered.
    Superseded,
}

#[derive(Debug)]
pub struct PendingLoad {
    id: u64,
    intent: LoadIntent,
    matches: Vec<RouteMatch>,
}

#[derive(Debug)]
pub struct PendingSubmit {
    id: u64,
    submission: Submission,
}

/// Output of one loader, with the subscription taken before it was read.
pub struct Loaded {
    data: LoaderData,
    subscription: Subscription,
}

struct Mounted {
    route: RouteMatch,
    key: String,
    data: LoaderData,
    subscription: Subscription,
}

/// Client-side controller: owns session history, the pending navigation, the loader output of
/// the mounted routes and the search field.
///
/// Every navigation runs in two steps. `begin_*` records the intent and hands out a pending
/// token, `complete_*` commits the loaded data if the token is still the latest one. The
/// async helpers (`search`, `follow`, `back`, ...) chain both around the [`Transport`].
pub struct Navigator<T> {
    transport: T,
    history: History,
    navigation: Navigation,
    latest: u64,
    committed: Location,
    mounted: Vec<Mounted>,
    search_value: String,
    search_phase: SearchPhase,
    revalidator: Revalidator,
}

impl<T: Transport> Navigator<T> {
    /// Loads `href` as the first page of a session, the way a full page load does.
    pub async fn open(transport: T, href: &str) -> Result<Self, NavigatorError> {
        let location = Location::parse(href)?;

        let mut navigator = Self {
            transport,
            history: History::new(location.clone()),
            navigation: Navigation::Idle,
            latest: 0,
            committed: location,
            mounted: Vec::new(),
            search_value: String::new(),
            search_phase: SearchPhase::Inactive,
            revalidator: Revalidator::new(),
        };

        navigator.reload().await?;
        Ok(navigator)
    }

    pub fn begin_search(&mut self, text: &str) -> Result<PendingLoad, NavigatorError> {
        self.search_value = text.to_string();

        let history = self.search_phase.history_action();
        self.begin_load(LoadIntent {
            location: Location::search_for(text),
            kind: LoadKind::Search,
            history,
        })
    }

    pub fn begin_follow(&mut self, href: &str) -> Result<PendingLoad, NavigatorError> {
        self.begin_load(LoadIntent {
            location: Location::parse(href)?,
            kind: LoadKind::Link,
            history: HistoryAction::Push,
        })
    }

    pub fn begin_back(&mut self) -> Result<PendingLoad, NavigatorError> {
        let location = self
            .history
            .back()
            .cloned()
            .ok_or(NavigatorError::NoHistoryEntry)?;

        self.begin_pop(location)
    }

    pub fn begin_forward(&mut self) -> Result<PendingLoad, NavigatorError> {
        let location = self
            .history
            .forward()
            .cloned()
            .ok_or(NavigatorError::NoHistoryEntry)?;

        self.begin_pop(location)
    }

    pub fn begin_reload(&mut self) -> Result<PendingLoad, NavigatorError> {
        self.begin_load(LoadIntent {
            location: self.history.current().clone(),
            kind: LoadKind::Reload,
            history: HistoryAction::Keep,
        })
    }

    /// Re-reads the rendered page in place once a write made its loader output stale.
    pub fn begin_revalidate(&mut self) -> Result<PendingLoad, NavigatorError> {
        self.begin_load(LoadIntent {
            location: self.committed.clone(),
            kind: LoadKind::Revalidate,
            history: HistoryAction::Keep,
        })
    }

    pub fn begin_submit(&mut self, submission: Submission) -> PendingSubmit {
        let id = self.next_id();

        self.navigation = Navigation::Submitting {
            id,
            submission: submission.clone(),
        };

        PendingSubmit { id, submission }
    }

    /// Runs the loaders of `pending` that cannot reuse their mounted output. Reloads and
    /// revalidations always read fresh.
    pub async fn fetch(&self, pending: &PendingLoad) -> Result<Vec<Loaded>, NavigatorError> {
        let fresh_only = matches!(
            pending.intent.kind,
            LoadKind::Reload | LoadKind::Revalidate
        );
        let mut loaded = Vec::with_capacity(pending.matches.len());

        for route in &pending.matches {
            let reused = if fresh_only {
                None
            } else {
                self.reusable(route, &pending.intent.location)
            };

            if let Some(mounted) = reused {
                debug!("Reusing {:?} loader output", route.route);
                loaded.push(Loaded {
                    data: mounted.data.clone(),
                    subscription: mounted.subscription.clone(),
                });
                continue;
            }

            // taken before the read, a write landing meanwhile leaves it stale
            let subscription = self.revalidator.subscribe();
            let data = if route.has_loader() {
                self.transport.load(route, &pending.intent.location).await?
            } else {
                LoaderData::Empty
            };

            loaded.push(Loaded { data, subscription });
        }

        Ok(loaded)
    }

    pub async fn perform(&self, pending: &PendingSubmit) -> Result<Location, NavigatorError> {
        self.transport.submit(&pending.submission).await
    }

    pub fn complete_load(
        &mut self,
        pending: PendingLoad,
        result: Result<Vec<Loaded>, NavigatorError>,
    ) -> Result<Outcome, NavigatorError> {
        if pending.id != self.latest {
            debug!("Dropping superseded navigation to {}", pending.intent.location);
            return Ok(Outcome::Superseded);
        }

        let loaded = match result {
            Ok(loaded) => loaded,
            Err(err) => {
                self.navigation = Navigation::Idle;
                return Err(err);
            }
        };

        let PendingLoad {
            intent, matches, ..
        } = pending;

        match intent.history {
            HistoryAction::Push => self.history.push(intent.location.clone()),
            HistoryAction::Replace => self.history.replace(intent.location.clone()),
            HistoryAction::Keep => {}
        }

        self.mounted = matches
            .into_iter()
            .zip(loaded)
            .map(|(route, loaded)| Mounted {
                key: route.key(&intent.location),
                route,
                data: loaded.data,
                subscription: loaded.subscription,
            })
            .collect();

        self.committed = intent.location;
        self.navigation = Navigation::Idle;
        self.sync_search();

        Ok(Outcome::Committed)
    }

    /// Invalidates every mounted loader once the write went through, then starts the
    /// navigation to the redirect target. `None` when a newer navigation took over meanwhile.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmit,
        result: Result<Location, NavigatorError>,
    ) -> Result<Option<PendingLoad>, NavigatorError> {
        let redirect = match result {
            Ok(redirect) => redirect,
            Err(err) => {
                if pending.id == self.latest {
                    self.navigation = Navigation::Idle;
                }
                return Err(err);
            }
        };

        self.revalidator.invalidate();
        info!("{} answered with {redirect}", pending.submission.action);

        if pending.id != self.latest {
            return Ok(None);
        }

        let history = if redirect == *self.history.current() {
            HistoryAction::Replace
        } else {
            HistoryAction::Push
        };

        self.begin_load(LoadIntent {
            location: redirect,
            kind: LoadKind::Redirect,
            history,
        })
        .map(Some)
    }

    pub async fn search(&mut self, text: &str) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_search(text)?;
        self.run(pending).await
    }

    pub async fn follow(&mut self, href: &str) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_follow(href)?;
        self.run(pending).await
    }

    pub async fn back(&mut self) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_back()?;
        self.run(pending).await
    }

    pub async fn forward(&mut self) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_forward()?;
        self.run(pending).await
    }

    pub async fn reload(&mut self) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_reload()?;
        self.run(pending).await
    }

    pub async fn revalidate(&mut self) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_revalidate()?;
        let result = self.fetch(&pending).await;
        self.complete_load(pending, result)
    }

    /// Leaving the edit form without saving is a step back in history.
    pub async fn cancel(&mut self) -> Result<Outcome, NavigatorError> {
        self.back().await
    }

    pub async fn submit(&mut self, submission: Submission) -> Result<Outcome, NavigatorError> {
        let pending = self.begin_submit(submission);
        let result = self.perform(&pending).await;

        match self.complete_submit(pending, result)? {
            Some(pending) => self.run(pending).await,
            None => Ok(Outcome::Superseded),
        }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Location of the page currently rendered. Differs from the history cursor while a
    /// back/forward is still loading.
    pub fn location(&self) -> &Location {
        &self.committed
    }

    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// A read navigation with a non-empty `q` is pending.
    pub fn searching(&self) -> bool {
        match &self.navigation {
            Navigation::Loading { intent, .. } => {
                intent.kind != LoadKind::Revalidate
                    && intent.location.q().is_some_and(|q| !q.is_empty())
            }
            _ => false,
        }
    }

    /// A pending navigation heads for another view and is not a search.
    pub fn detail_loading(&self) -> bool {
        let target = match &self.navigation {
            Navigation::Idle => return false,
            Navigation::Loading { intent, .. } => {
                if intent.location.q().is_some() {
                    return false;
                }
                intent.location.pathname.as_str()
            }
            Navigation::Submitting { submission, .. } => submission
                .action
                .split('?')
                .next()
                .unwrap_or_default(),
        };

        target != self.committed.pathname
    }

    pub fn root(&self) -> Option<&RootData> {
        self.mounted.iter().find_map(|mounted| match &mounted.data {
            LoaderData::Root(root) => Some(root),
            _ => None,
        })
    }

    pub fn contacts(&self) -> &[Contact] {
        self.root()
            .map(|root| root.contacts.as_slice())
            .unwrap_or_default()
    }

    pub fn detail(&self) -> Option<&LoaderData> {
        self.mounted
            .iter()
            .find(|mounted| mounted.route.route != RouteId::Root)
            .map(|mounted| &mounted.data)
    }

    /// Some rendered loader output was read before the latest write.
    pub fn needs_revalidation(&self) -> bool {
        self.mounted
            .iter()
            .any(|mounted| mounted.subscription.is_stale())
    }

    pub fn revision(&self) -> u64 {
        self.revalidator.revision()
    }

    fn begin_pop(&mut self, location: Location) -> Result<PendingLoad, NavigatorError> {
        self.begin_load(LoadIntent {
            location,
            kind: LoadKind::Pop,
            history: HistoryAction::Keep,
        })
    }

    fn begin_load(&mut self, intent: LoadIntent) -> Result<PendingLoad, NavigatorError> {
        let matches = match_routes(&intent.location.pathname)
            .ok_or_else(|| NavigatorError::NoRoute(intent.location.pathname.clone()))?;

        let id = self.next_id();
        debug!("Navigation {id}: {:?} to {}", intent.kind, intent.location);

        self.navigation = Navigation::Loading {
            id,
            intent: intent.clone(),
        };

        Ok(PendingLoad {
            id,
            intent,
            matches,
        })
    }

    async fn run(&mut self, pending: PendingLoad) -> Result<Outcome, NavigatorError> {
        let result = self.fetch(&pending).await;
        let outcome = self.complete_load(pending, result)?;

        if outcome == Outcome::Committed && self.needs_revalidation() {
            debug!("Committed data predates a write, revalidating {}", self.committed);
            return self.revalidate().await;
        }

        Ok(outcome)
    }

    fn next_id(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn reusable(&self, route: &RouteMatch, location: &Location) -> Option<&Mounted> {
        self.mounted
            .iter()
            .find(|mounted| {
                mounted.route == *route
                    && mounted.key == route.key(location)
                    && !mounted.subscription.is_stale()
            })
    }

    // the input shows what the last committed read says, whatever the DOM had before
    fn sync_search(&mut self) {
        let q = self.root().and_then(|root| root.q.clone());

        self.search_phase = SearchPhase::from_committed(q.as_deref());
        self.search_value = q.unwrap_or_default();
    }
}

impl<T> Navigator<T> {
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn search_phase(&self) -> SearchPhase {
        self.search_phase
    }
}

