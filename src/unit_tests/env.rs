use crate::runtime::msg::Event;
use crate::runtime::{
    ConditionalSend, Env, EnvError, EnvFuture, EnvFutureExt, Model, RuntimeEvent, TryEnvFuture,
};
use crate::types::profile::AccessToken;
use futures::channel::{mpsc::Receiver, oneshot};
use futures::executor::{LocalPool, LocalSpawner};
use futures::future;
use futures::task::LocalSpawnExt;
use futures::{Future, FutureExt, TryFutureExt};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

lazy_static! {
    static ref ENV_MUTEX: Mutex<()> = Default::default();
    pub static ref FETCH_HANDLER: RwLock<FetchHandler> =
        RwLock::new(Box::new(default_fetch_handler));
    pub static ref REQUESTS: RwLock<Vec<Request>> = Default::default();
    pub static ref ACCESS_TOKEN: RwLock<Option<AccessToken>> =
        RwLock::new(Some(AccessToken("token".to_owned())));
    pub static ref TIMERS: Mutex<Vec<(Duration, oneshot::Sender<()>)>> = Default::default();
}

thread_local! {
    static EXECUTOR: (RefCell<LocalPool>, LocalSpawner) = {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        (RefCell::new(pool), spawner)
    };
}

/// Answers a request with the raw JSON the API would send.
pub type FetchHandler = Box<dyn Fn(Request) -> TryEnvFuture<Value> + Send + Sync + 'static>;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl<T: Serialize> From<http::Request<T>> for Request {
    fn from(request: http::Request<T>) -> Self {
        let (head, body) = request.into_parts();
        Request {
            url: head.uri.to_string(),
            method: head.method.as_str().to_owned(),
            headers: head
                .headers
                .iter()
                .map(|(key, value)| (key.as_str().to_owned(), value.to_str().unwrap().to_owned()))
                .collect::<HashMap<_, _>>(),
            body: serde_json::to_string(&body).unwrap(),
        }
    }
}

pub enum TestEnv {}

impl TestEnv {
    /// Restores the default environment. Hold the guard for the whole test.
    pub fn reset() -> MutexGuard<'static, ()> {
        let guard = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        *FETCH_HANDLER.write().unwrap() = Box::new(default_fetch_handler);
        *REQUESTS.write().unwrap() = vec![];
        *ACCESS_TOKEN.write().unwrap() = Some(AccessToken("token".to_owned()));
        *TIMERS.lock().unwrap() = vec![];
        guard
    }
    pub fn run<F: FnOnce()>(runnable: F) {
        runnable();
        TestEnv::run_pending();
    }
    /// Runs the spawned tasks until all of them wait on something external,
    /// like a timer that was not fired yet.
    pub fn run_pending() {
        EXECUTOR.with(|(pool, _)| pool.borrow_mut().run_until_stalled());
    }
    /// Elapses every scheduled timer and returns their durations.
    pub fn fire_timers() -> Vec<Duration> {
        let timers = mem::take(&mut *TIMERS.lock().unwrap());
        let durations = timers
            .into_iter()
            .map(|(duration, sender)| {
                let _ = sender.send(());
                duration
            })
            .collect();
        TestEnv::run_pending();
        durations
    }
    pub fn requests() -> Vec<Request> {
        REQUESTS.read().unwrap().to_owned()
    }
    fn spawn<F: Future<Output = ()> + 'static>(future: F) {
        EXECUTOR.with(|(_, spawner)| {
            spawner
                .spawn_local(future)
                .expect("TestEnv executor is gone")
        });
    }
}

impl Env for TestEnv {
    fn fetch<
        IN: Serialize + ConditionalSend + 'static,
        OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
    >(
        request: http::Request<IN>,
    ) -> TryEnvFuture<OUT> {
        let request = Request::from(request);
        REQUESTS.write().unwrap().push(request.to_owned());
        FETCH_HANDLER.read().unwrap()(request)
            .and_then(|value| future::ready(serde_json::from_value(value).map_err(EnvError::from)))
            .boxed_env()
    }
    fn access_token() -> TryEnvFuture<Option<AccessToken>> {
        future::ok(ACCESS_TOKEN.read().unwrap().to_owned()).boxed_env()
    }
    fn timeout(duration: Duration) -> EnvFuture<'static, ()> {
        let (sender, receiver) = oneshot::channel();
        TIMERS.lock().unwrap().push((duration, sender));
        receiver.map(|_| ()).boxed_env()
    }
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        TestEnv::spawn(future);
    }
    fn exec_sequential<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        TestEnv::spawn(future);
    }
}

pub fn default_fetch_handler(request: Request) -> TryEnvFuture<Value> {
    panic!("Unhandled fetch request: {request:#?}")
}

pub fn respond(value: Value) -> TryEnvFuture<Value> {
    future::ok(value).boxed_env()
}

/// Drains the core events emitted so far.
pub fn core_events<M: Model<TestEnv>>(rx: &mut Receiver<RuntimeEvent<TestEnv, M>>) -> Vec<Event> {
    std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|event| match event {
            RuntimeEvent::CoreEvent(event) => Some(event),
            RuntimeEvent::NewState(_) => None,
        })
        .collect()
}
