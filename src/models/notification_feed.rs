use std::time::Duration;

use boolinator::Boolinator;
use derivative::Derivative;
use enclose::enclose;
use futures::future::{self, AbortHandle};
use futures::{FutureExt, TryFutureExt};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::constants::NOTIFICATIONS_AUTO_REFRESH_INTERVAL;
use crate::models::common::{eq_update, eq_update_where};
use crate::models::ctx::{AuthError, Ctx, CtxError};
use crate::runtime::msg::{Action, ActionLoad, ActionNotificationFeed, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFuture, EnvFutureExt, UpdateWithCtx};
use crate::types::api::{
    fetch_api, NotificationReadBody, NotificationReadRequest, NotificationsRequest,
};
use crate::types::notifications::{Notification, NotificationId, NotificationsPage, Pagination};
use crate::types::profile::UserId;

#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub struct AutoRefresh {
    #[derivative(Default(value = "NOTIFICATIONS_AUTO_REFRESH_INTERVAL.as_secs()"))]
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    NOTIFICATIONS_AUTO_REFRESH_INTERVAL.as_secs()
}

impl AutoRefresh {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub request: NotificationsRequest,
    #[serde(default)]
    pub auto_refresh: Option<AutoRefresh>,
}

/// The running auto-refresh timer.
#[derive(Clone, Debug)]
struct AutoRefreshTask {
    auto_refresh: AutoRefresh,
    handle: AbortHandle,
}

/// Paginated notifications of the authenticated user.
///
/// `notifications` and `pagination` always come from the last completed fetch
/// of the current selection. Any failed fetch clears them.
#[derive(Derivative, Clone, Debug)]
#[derivative(Default, PartialEq)]
pub struct NotificationFeed {
    pub selected: Option<Selected>,
    pub notifications: Vec<Notification>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<CtxError>,
    #[derivative(PartialEq = "ignore")]
    auto_refresh_task: Option<AutoRefreshTask>,
}

impl NotificationFeed {
    /// Computed from the current list on every call.
    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }
    pub fn is_auto_refreshing(&self) -> bool {
        self.auto_refresh_task.is_some()
    }
    fn current_page(&self) -> Option<u32> {
        self.selected.as_ref().map(|selected| selected.request.page)
    }
}

impl Serialize for NotificationFeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("NotificationFeed", 7)?;
        state.serialize_field("selected", &self.selected)?;
        state.serialize_field("notifications", &self.notifications)?;
        state.serialize_field("pagination", &self.pagination)?;
        state.serialize_field("loading", &self.loading)?;
        state.serialize_field("error", &self.error)?;
        state.serialize_field("unreadCount", &self.unread_count())?;
        state.serialize_field(
            "totalPages",
            &self.pagination.map(|pagination| pagination.total_pages()),
        )?;
        state.end()
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for NotificationFeed {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::NotificationFeed(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let load_effects = load_notifications::<E>(self, ctx);
                let auto_refresh_effects = sync_auto_refresh::<E>(self, ctx);
                selected_effects
                    .join(load_effects)
                    .join(auto_refresh_effects)
            }
            Msg::Action(Action::Unload) => {
                if let Some(task) = self.auto_refresh_task.take() {
                    debug!("Notifications auto-refresh stopped");
                    task.handle.abort();
                }
                eq_update(self, NotificationFeed::default())
            }
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::Refresh)) => {
                load_notifications::<E>(self, ctx)
            }
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::GoToPage(page))) => {
                let page = self.current_page().and_then(|current_page| {
                    self.pagination.and_then(|pagination| {
                        pagination
                            .accepts_page(current_page, *page)
                            .as_some(*page)
                    })
                });
                match page {
                    Some(page) => go_to_page::<E>(self, page, ctx),
                    None => Effects::none().unchanged(),
                }
            }
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::NextPage)) => {
                let has_more = self
                    .pagination
                    .map(|pagination| pagination.has_more)
                    .unwrap_or_default();
                match self.current_page() {
                    Some(current_page) if has_more => go_to_page::<E>(self, current_page + 1, ctx),
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::PrevPage)) => {
                match self.current_page() {
                    Some(current_page) if current_page > 1 => {
                        go_to_page::<E>(self, current_page - 1, ctx)
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::SetAutoRefresh(
                auto_refresh,
            ))) => match &mut self.selected {
                Some(selected) => {
                    let selected_effects = eq_update(&mut selected.auto_refresh, *auto_refresh);
                    let auto_refresh_effects = sync_auto_refresh::<E>(self, ctx);
                    selected_effects.join(auto_refresh_effects)
                }
                None => Effects::none().unchanged(),
            },
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::MarkAsRead {
                id,
                read,
            })) if ctx.is_authenticated() => Effects::one(mark_as_read::<E>(NotificationReadRequest {
                id: id.to_owned(),
                read: *read,
            }))
            .unchanged(),
            Msg::Action(Action::NotificationFeed(ActionNotificationFeed::MarkAllAsRead))
                if ctx.is_authenticated() =>
            {
                let ids = self
                    .notifications
                    .iter()
                    .filter(|notification| !notification.read)
                    .map(|notification| notification.id.to_owned())
                    .collect::<Vec<_>>();
                if ids.is_empty() {
                    Effects::none().unchanged()
                } else {
                    Effects::one(mark_all_as_read::<E>(ids)).unchanged()
                }
            }
            Msg::Internal(Internal::IdentityChanged(previous_user_id)) => {
                let state_effects = match ctx.user_id() {
                    Some(user_id) if previous_user_id.as_ref() != Some(user_id) => {
                        // Nothing of the previous user may stay visible.
                        let clear_effects = clear_notifications(self, None);
                        clear_effects.join(load_notifications::<E>(self, ctx))
                    }
                    Some(_) => load_notifications::<E>(self, ctx),
                    None => clear_notifications(self, None),
                };
                let auto_refresh_effects = sync_auto_refresh::<E>(self, ctx);
                state_effects.join(auto_refresh_effects)
            }
            Msg::Internal(Internal::NotificationsResult(user_id, request, result))
                if ctx.user_id() == Some(user_id)
                    && self
                        .selected
                        .as_ref()
                        .map(|selected| &selected.request == request)
                        .unwrap_or_default() =>
            {
                match result {
                    Ok(page) => {
                        let notifications_effects =
                            eq_update(&mut self.notifications, page.notifications.to_owned());
                        let pagination_effects =
                            eq_update(&mut self.pagination, Some(page.pagination));
                        let loading_effects = eq_update(&mut self.loading, false);
                        let error_effects = eq_update(&mut self.error, None);
                        notifications_effects
                            .join(pagination_effects)
                            .join(loading_effects)
                            .join(error_effects)
                    }
                    Err(error) => {
                        warn!(page = request.page, "Failed to fetch notifications: {error}");
                        clear_notifications(self, Some(error.to_owned()))
                    }
                }
            }
            Msg::Internal(Internal::NotificationReadResult(request, result)) => match result {
                Ok(()) => {
                    let notifications_effects =
                        set_read(&mut self.notifications, &[request.id.to_owned()], request.read);
                    Effects::msg(Msg::Event(Event::NotificationMarkedAsRead {
                        id: request.id.to_owned(),
                        read: request.read,
                    }))
                    .unchanged()
                    .join(notifications_effects)
                }
                Err(error) => {
                    warn!(id = %request.id, "Failed to mark notification: {error}");
                    Effects::msg(Msg::Event(Event::Error {
                        error: error.to_owned(),
                        source: Box::new(Event::NotificationMarkedAsRead {
                            id: request.id.to_owned(),
                            read: request.read,
                        }),
                    }))
                    .unchanged()
                }
            },
            Msg::Internal(Internal::NotificationsBulkReadResult(ids, failure)) => {
                let notifications_effects = set_read(&mut self.notifications, ids, true);
                let event = match failure {
                    Some((id, error)) => {
                        warn!(%id, "Failed to mark all notifications: {error}");
                        Event::Error {
                            error: error.to_owned(),
                            source: Box::new(Event::NotificationMarkedAsRead {
                                id: id.to_owned(),
                                read: true,
                            }),
                        }
                    }
                    None => Event::AllNotificationsMarkedAsRead {
                        ids: ids.to_owned(),
                    },
                };
                Effects::msg(Msg::Event(event))
                    .unchanged()
                    .join(notifications_effects)
            }
            Msg::Internal(Internal::NotificationsAutoRefresh(Ok(()))) => {
                self.auto_refresh_task = None;
                let auto_refresh_selected = self
                    .selected
                    .as_ref()
                    .map(|selected| selected.auto_refresh.is_some())
                    .unwrap_or_default();
                let load_effects = if auto_refresh_selected && ctx.is_authenticated() {
                    load_notifications::<E>(self, ctx)
                } else {
                    Effects::none().unchanged()
                };
                let auto_refresh_effects = sync_auto_refresh::<E>(self, ctx);
                load_effects.join(auto_refresh_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn go_to_page<E: Env + 'static>(feed: &mut NotificationFeed, page: u32, ctx: &Ctx) -> Effects {
    match &mut feed.selected {
        Some(selected) => {
            let page_effects = eq_update(&mut selected.request.page, page);
            page_effects.join(load_notifications::<E>(feed, ctx))
        }
        None => Effects::none().unchanged(),
    }
}

/// Starts a fetch of the current selection.
///
/// Without an authenticated user nothing is requested and the feed ends up
/// in the error state.
fn load_notifications<E: Env + 'static>(feed: &mut NotificationFeed, ctx: &Ctx) -> Effects {
    let request = match &feed.selected {
        Some(selected) => selected.request.to_owned(),
        None => return Effects::none().unchanged(),
    };
    let user_id = match ctx.user_id() {
        Some(user_id) => user_id.to_owned(),
        None => {
            let error = CtxError::from(AuthError::UserNotAuthenticated);
            warn!("Failed to fetch notifications: {error}");
            return clear_notifications(feed, Some(error));
        }
    };
    let loading_effects = eq_update(&mut feed.loading, true);
    let error_effects = eq_update(&mut feed.error, None);
    Effects::one(fetch_notifications::<E>(user_id, &request))
        .unchanged()
        .join(loading_effects)
        .join(error_effects)
}

fn clear_notifications(feed: &mut NotificationFeed, error: Option<CtxError>) -> Effects {
    let notifications_effects = eq_update(&mut feed.notifications, vec![]);
    let pagination_effects = eq_update(&mut feed.pagination, None);
    let loading_effects = eq_update(&mut feed.loading, false);
    let error_effects = eq_update(&mut feed.error, error);
    notifications_effects
        .join(pagination_effects)
        .join(loading_effects)
        .join(error_effects)
}

/// Starts, restarts or stops the timer so that it runs exactly when
/// auto-refresh is selected and a user is authenticated.
fn sync_auto_refresh<E: Env + 'static>(feed: &mut NotificationFeed, ctx: &Ctx) -> Effects {
    let auto_refresh = feed
        .selected
        .as_ref()
        .and_then(|selected| selected.auto_refresh)
        .filter(|_| ctx.is_authenticated());
    match (auto_refresh, &feed.auto_refresh_task) {
        (Some(auto_refresh), Some(task)) if task.auto_refresh == auto_refresh => {
            Effects::none().unchanged()
        }
        (Some(auto_refresh), _) => {
            if let Some(task) = feed.auto_refresh_task.take() {
                task.handle.abort();
            }
            let (effect, handle) = schedule_auto_refresh::<E>(auto_refresh.interval());
            feed.auto_refresh_task = Some(AutoRefreshTask {
                auto_refresh,
                handle,
            });
            debug!(
                interval_secs = auto_refresh.interval_secs,
                "Notifications auto-refresh scheduled"
            );
            Effects::one(effect).unchanged()
        }
        (None, Some(_)) => {
            if let Some(task) = feed.auto_refresh_task.take() {
                task.handle.abort();
            }
            debug!("Notifications auto-refresh stopped");
            Effects::none().unchanged()
        }
        (None, None) => Effects::none().unchanged(),
    }
}

fn set_read(notifications: &mut [Notification], ids: &[NotificationId], read: bool) -> Effects {
    eq_update_where(
        notifications,
        |notification| ids.contains(&notification.id),
        |notification| eq_update(&mut notification.read, read),
    )
}

fn schedule_auto_refresh<E: Env + 'static>(interval: Duration) -> (Effect, AbortHandle) {
    let (timeout, handle) = future::abortable(E::timeout(interval));
    let effect = EffectFuture::Concurrent(
        timeout
            .map(|result| Msg::Internal(Internal::NotificationsAutoRefresh(result)))
            .boxed_env(),
    )
    .into();
    (effect, handle)
}

fn fetch_notifications<E: Env + 'static>(user_id: UserId, request: &NotificationsRequest) -> Effect {
    EffectFuture::Concurrent(
        fetch_api::<E, _, ()>(request)
            .map(enclose!((request.to_owned() => request) move |result| {
                let result = result.and_then(|response| {
                    NotificationsPage::from_response(&request, &response).map_err(CtxError::from)
                });
                Msg::Internal(Internal::NotificationsResult(user_id, request, result))
            }))
            .boxed_env(),
    )
    .into()
}

fn mark_as_read_request<E: Env + 'static>(
    request: NotificationReadRequest,
) -> EnvFuture<'static, Result<(), CtxError>> {
    fetch_api::<E, _, NotificationReadBody>(&request).map_ok(|_| ()).boxed_env()
}

fn mark_as_read<E: Env + 'static>(request: NotificationReadRequest) -> Effect {
    EffectFuture::Concurrent(
        mark_as_read_request::<E>(request.to_owned())
            .map(move |result| Msg::Internal(Internal::NotificationReadResult(request, result)))
            .boxed_env(),
    )
    .into()
}

/// One request at a time, in order. The first failure stops the sequence.
fn mark_all_as_read<E: Env + 'static>(ids: Vec<NotificationId>) -> Effect {
    EffectFuture::Sequential(
        async move {
            let mut marked = Vec::with_capacity(ids.len());
            for id in ids {
                let request = NotificationReadRequest {
                    id: id.to_owned(),
                    read: true,
                };
                if let Err(error) = mark_as_read_request::<E>(request).await {
                    return Msg::Internal(Internal::NotificationsBulkReadResult(
                        marked,
                        Some((id, error)),
                    ));
                }
                marked.push(id);
            }
            Msg::Internal(Internal::NotificationsBulkReadResult(marked, None))
        }
        .boxed_env(),
    )
    .into()
}
