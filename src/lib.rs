//! Cooperative coroutines built by (ab)using async/await as a state machine compiler.
//!
//! A [Coro] owns a single suspended computation: an async body that pauses itself with
//! the futures provided by its [Handle] and is pushed forwards by whoever owns the
//! [Coro]. Each pause surfaces a [Suspension] to the owner, who replies by calling
//! [resume][Coro::resume] (no value), [send][Coro::send] (inject a value) or
//! [fail][Coro::fail] (inject a failure at the paused await point). A coroutine that is
//! no longer wanted can be shut down with [stop][Coro::stop], which runs the drop glue
//! for any locals that are live across the current pause before recording the forced
//! return value.
//!
//! Coroutines whose suspensions are all [Plain][Suspension::Plain] values can be
//! consumed as a lazy [Iterator]. Coroutines that pause on
//! [Pending][Suspension::Pending] operations are run with [drive], a trampoline that
//! awaits each pending operation in turn and feeds the result (or failure) back in
//! until the body returns.
#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::style,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rustdoc::all,
    clippy::undocumented_unsafe_blocks
)]

use std::{
    fmt,
    future::Future,
    marker::PhantomData,
    pin::Pin,
    sync::atomic::{AtomicU64, Ordering},
    task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

/// An opaque identity for a [Coro], stable for the coroutine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoroId(u64);

impl CoroId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a [Coro] currently is in its lifecycle.
///
/// Exactly one status holds at any point in time. `Completed` and `Failed` are
/// terminal: once either is reached the body never runs again and every operation
/// replays the stored outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Created but never resumed: no body code has run yet.
    NotStarted,
    /// Paused at a suspension point, waiting for a reply.
    Suspended,
    /// The body is being polled right now.
    Running,
    /// The body returned normally (or was stopped); the final value is stored.
    Completed,
    /// A failure escaped the body; the error is stored.
    Failed,
}

impl Status {
    /// Whether this status is `Completed` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::NotStarted => "not started",
            Status::Suspended => "suspended",
            Status::Running => "running",
            Status::Completed => "completed",
            Status::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Why an operation on a [Coro] did not produce a [Step].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The operation is not valid for the coroutine's current status.
    ///
    /// This is always a caller bug: e.g. [fail][Coro::fail] on a coroutine that has
    /// never been resumed has no suspension point to inject the failure at.
    InvalidState {
        /// The operation that was attempted.
        op: &'static str,
        /// The status the coroutine was in at the time.
        status: Status,
    },
    /// A failure escaped the body without being handled.
    ///
    /// The coroutine is now [Failed][Status::Failed] and will replay this error on
    /// every subsequent operation.
    Uncaught(E),
    /// A [Pending][Suspension::Pending] suspension reached a consumer that cannot
    /// wait on asynchronous operations (the [Iterator] adapter or
    /// [run_sync][Coro::run_sync]).
    UnsupportedSuspension,
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState { op, status } => {
                write!(f, "{op} called on a {status} coroutine")
            }
            Error::Uncaught(e) => write!(f, "uncaught failure: {e}"),
            Error::UnsupportedSuspension => {
                f.write_str("pending operation reached a synchronous consumer")
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Error<E> {}

/// A boxed asynchronous operation that a [Coro] has asked its driver to wait on.
///
/// This is the full contract between the core and whatever supplies real I/O: an
/// operation eventually settles with `Ok` or `Err` and is otherwise opaque. [drive]
/// honors the same contract itself, so drivers compose.
pub type PendingOp<R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'static>>;

/// The value produced by one pause of a [Coro] body.
pub enum Suspension<S, R, E> {
    /// A value to surface directly to whoever is driving the coroutine.
    Plain(S),
    /// An asynchronous operation the driver must wait on before resuming.
    Pending(PendingOp<R, E>),
}

impl<S: fmt::Debug, R, E> fmt::Debug for Suspension<S, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suspension::Plain(s) => f.debug_tuple("Plain").field(s).finish(),
            Suspension::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// The outcome of pushing a [Coro] forwards.
pub enum Step<S, R, T, E> {
    /// The body paused at a suspension point.
    Yielded(Suspension<S, R, E>),
    /// The body returned and the coroutine is now [Completed][Status::Completed].
    Done(T),
}

impl<S: fmt::Debug, R, T: fmt::Debug, E> fmt::Debug for Step<S, R, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Yielded(s) => f.debug_tuple("Yielded").field(s).finish(),
            Step::Done(t) => f.debug_tuple("Done").field(t).finish(),
        }
    }
}

/// A type that can construct a [Coro].
///
/// This is the type-level equivalent of `Coro::from(closure)` for computation
/// templates that warrant a name.
///
/// # Panics
/// Any calls to async methods or functions other than those provided by [Handle]
/// will panic when the resulting coroutine is resumed.
pub trait AsCoro: Sized {
    /// The type yielded at each plain suspension point
    type Snd: Unpin + 'static;
    /// The type injected back in at each suspension point
    type Rcv: Unpin + 'static;
    /// The final value of a body that runs to completion
    type Out: Clone;
    /// The failure type of the body and of its pending operations
    type Err: Unpin + Clone + 'static;

    /// Return the suspend-aware body to run as a [Coro].
    fn as_coro(
        handle: Handle<Self::Snd, Self::Rcv, Self::Err>,
    ) -> impl Future<Output = Result<Self::Out, Self::Err>>;

    /// Construct a [NotStarted][Status::NotStarted] coroutine from this template.
    fn initialize() -> Coro<
        Self::Snd,
        Self::Rcv,
        Self::Out,
        Self::Err,
        impl Future<Output = Result<Self::Out, Self::Err>>,
    > {
        Coro::from(Self::as_coro)
    }
}

impl<F, S, R, T, E, Fut> From<F> for Coro<S, R, T, E, Fut>
where
    F: FnOnce(Handle<S, R, E>) -> Fut,
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
    Fut: Future<Output = Result<T, E>>,
{
    fn from(f: F) -> Self {
        Coro {
            id: CoroId::next(),
            status: Status::NotStarted,
            shared: SharedState::default(),
            fut: Some(Box::pin((f)(Handle {
                _snd: PhantomData,
                _rcv: PhantomData,
                _err: PhantomData,
            }))),
            outcome: None,
        }
    }
}

// The rendezvous cell used to smuggle values in and out of the body as it is polled.
//
// `yielded` is written by the body's suspension future on its first poll and taken by
// Coro::step; `reply` is written by Coro::step before the next poll and taken by the
// suspension future when it is polled again.
#[derive(Debug)]
struct SharedState<S, R, E> {
    yielded: Option<Suspension<S, R, E>>,
    reply: Option<Result<Option<R>, E>>,
}

impl<S, R, E> Default for SharedState<S, R, E> {
    fn default() -> Self {
        Self {
            yielded: None,
            reply: None,
        }
    }
}

/// A handle to one suspended computation.
///
/// The body only ever runs inside calls to [resume][Coro::resume],
/// [send][Coro::send] and [fail][Coro::fail]: execution is synchronous between
/// suspension points and nothing happens until the owner asks for the next step.
pub struct Coro<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
    F: Future<Output = Result<T, E>>,
{
    id: CoroId,
    status: Status,
    shared: SharedState<S, R, E>,
    fut: Option<Pin<Box<F>>>,
    outcome: Option<Result<T, E>>,
}

impl<S, R, T, E, F> fmt::Debug for Coro<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coro")
            .field("id", &self.id)
            .field("status", &self.status)
            .finish()
    }
}

const WAKER_VTABLE: RawWakerVTable = RawWakerVTable::new(clone_callback, |_| {}, |_| {}, |_| {});
unsafe fn clone_callback(ptr: *const ()) -> RawWaker {
    RawWaker::new(ptr, &WAKER_VTABLE)
}

impl<S, R, T, E, F> Coro<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    /// The identity assigned to this coroutine when it was constructed.
    pub fn id(&self) -> CoroId {
        self.id
    }

    /// Where this coroutine currently is in its lifecycle.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Run the body to its next suspension point without injecting a value.
    ///
    /// From [NotStarted][Status::NotStarted] this begins execution of the body; from
    /// a terminal status it replays the stored outcome without running any body code.
    pub fn resume(&mut self) -> Result<Step<S, R, T, E>, Error<E>> {
        self.step("resume", Ok(None))
    }

    /// Run the body to its next suspension point, delivering `value` as the result
    /// of the current one.
    ///
    /// A value sent to a [NotStarted][Status::NotStarted] coroutine is discarded:
    /// there is no suspension point to deliver it to yet.
    pub fn send(&mut self, value: R) -> Result<Step<S, R, T, E>, Error<E>> {
        self.step("send", Ok(Some(value)))
    }

    /// Inject `error` at the current suspension point, as if the paused await had
    /// produced it itself.
    ///
    /// If the body handles the error execution continues to the next suspension
    /// point or return as normal. If it does not, the coroutine becomes
    /// [Failed][Status::Failed] and the same error is handed back as
    /// [Error::Uncaught].
    pub fn fail(&mut self, error: E) -> Result<Step<S, R, T, E>, Error<E>> {
        if self.status == Status::NotStarted {
            return Err(Error::InvalidState {
                op: "fail",
                status: self.status,
            });
        }

        self.step("fail", Err(error))
    }

    /// Force immediate termination with `value` as the final result.
    ///
    /// Drop glue for locals live across the current suspension point runs exactly
    /// once before the coroutine becomes [Completed][Status::Completed]; no other
    /// body code runs. This is the cancellation primitive for abandoning a
    /// coroutine early (e.g. walking away from an infinite sequence).
    pub fn stop(&mut self, value: T) -> Result<T, Error<E>> {
        match self.status {
            Status::Completed | Status::Failed => match self.replay()? {
                Step::Done(v) => Ok(v),
                Step::Yielded(_) => unreachable!("terminal replay is always Done"),
            },
            Status::Running => Err(Error::InvalidState {
                op: "stop",
                status: self.status,
            }),
            Status::NotStarted | Status::Suspended => {
                // dropping the body future runs the cleanup scoped to the current
                // suspension point
                self.fut = None;
                self.shared = SharedState::default();
                self.outcome = Some(Ok(value.clone()));
                self.status = Status::Completed;

                Ok(value)
            }
        }
    }

    fn step(
        &mut self,
        op: &'static str,
        reply: Result<Option<R>, E>,
    ) -> Result<Step<S, R, T, E>, Error<E>> {
        match self.status {
            Status::Completed | Status::Failed => return self.replay(),
            Status::Running => {
                return Err(Error::InvalidState {
                    op,
                    status: self.status,
                });
            }
            Status::Suspended => self.shared.reply = Some(reply),
            Status::NotStarted => (), // nothing is waiting for a reply yet
        }

        // SAFETY: we never use this waker for its intended purpose
        let waker = unsafe {
            Waker::from_raw(RawWaker::new(
                &self.shared as *const SharedState<S, R, E> as *const (),
                &WAKER_VTABLE,
            ))
        };
        let mut ctx = Context::from_waker(&waker);

        self.status = Status::Running;
        let fut = self
            .fut
            .as_mut()
            .expect("a non-terminal coroutine to have a live body");

        match fut.as_mut().poll(&mut ctx) {
            Poll::Ready(res) => {
                self.fut = None;
                self.status = match &res {
                    Ok(_) => Status::Completed,
                    Err(_) => Status::Failed,
                };
                self.outcome = Some(res);

                self.replay()
            }

            Poll::Pending => {
                self.status = Status::Suspended;
                let point = self.shared.yielded.take().expect(
                    "a coroutine body awaited a future other than those provided by Handle",
                );

                Ok(Step::Yielded(point))
            }
        }
    }

    fn replay(&self) -> Result<Step<S, R, T, E>, Error<E>> {
        match self
            .outcome
            .as_ref()
            .expect("a terminal coroutine to have a stored outcome")
        {
            Ok(v) => Ok(Step::Done(v.clone())),
            Err(e) => Err(Error::Uncaught(e.clone())),
        }
    }

    /// Run this [Coro] to completion using the provided synchronous step function.
    ///
    /// `step_fn` resolves each [Plain][Suspension::Plain] suspension into the value
    /// to send back in; an `Err` from `step_fn` is injected with [fail][Coro::fail]
    /// instead, giving the body a chance to handle it. A
    /// [Pending][Suspension::Pending] suspension cannot be serviced synchronously
    /// and ends the run with [Error::UnsupportedSuspension] (the coroutine is
    /// dropped, so cleanup scoped to its suspension point still runs).
    pub fn run_sync<SF>(mut self, mut step_fn: SF) -> Result<T, Error<E>>
    where
        SF: FnMut(S) -> Result<R, E>,
    {
        let mut next = self.resume();
        loop {
            match next? {
                Step::Done(v) => return Ok(v),
                Step::Yielded(Suspension::Plain(s)) => {
                    next = match (step_fn)(s) {
                        Ok(r) => self.send(r),
                        Err(e) => self.fail(e),
                    };
                }
                Step::Yielded(Suspension::Pending(_)) => {
                    return Err(Error::UnsupportedSuspension);
                }
            }
        }
    }
}

/// Drive a coroutine to completion, awaiting each pending operation it pauses on.
///
/// The loop is iterative (a trampoline) so arbitrarily long suspension chains never
/// grow the call stack:
///   - a [Plain][Suspension::Plain] suspension is echoed straight back in as the
///     next value, with no external wait;
///   - a [Pending][Suspension::Pending] suspension is awaited; its result is sent
///     back in on success and injected with [fail][Coro::fail] on failure, so the
///     body can handle an operation failure like any other error at that point;
///   - a failure that escapes the body rejects the driver with that error.
///
/// Exactly one pending operation is awaited at a time and none is ever retried.
/// `drive` is itself an async fn, so one driver's result can be awaited as a pending
/// operation of another.
pub async fn drive<S, R, T, E, F, C>(template: C) -> Result<T, E>
where
    S: Into<R> + Unpin + 'static,
    R: Unpin + 'static,
    T: Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
    C: Into<Coro<S, R, T, E, F>>,
{
    let mut coro = template.into();
    let mut reply: Result<Option<R>, E> = Ok(None);

    loop {
        let step = match reply {
            Ok(None) => coro.resume(),
            Ok(Some(r)) => coro.send(r),
            Err(e) => coro.fail(e),
        };

        reply = match step {
            Ok(Step::Done(v)) => return Ok(v),
            Ok(Step::Yielded(Suspension::Plain(s))) => Ok(Some(s.into())),
            Ok(Step::Yielded(Suspension::Pending(op))) => match op.await {
                Ok(r) => Ok(Some(r)),
                Err(e) => Err(e),
            },
            Err(Error::Uncaught(e)) => return Err(e),
            Err(Error::InvalidState { .. }) | Err(Error::UnsupportedSuspension) => {
                unreachable!("the driver respects the resume protocol")
            }
        };
    }
}

/// A yield handle to facilitate communication between a [Coro] body and the logic
/// driving it.
///
/// The only way to obtain a [Handle] is to be handed one when a [Coro] is
/// constructed from a computation template.
#[derive(Debug)]
pub struct Handle<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
    _snd: PhantomData<S>,
    _rcv: PhantomData<R>,
    _err: PhantomData<E>,
}

impl<S, R, E> Clone for Handle<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, R, E> Copy for Handle<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
}

impl<S, R, E> Handle<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
    /// Pause the body, surfacing `snd` to whoever is driving this coroutine.
    ///
    /// Resolves to `Ok(Some(r))` when a value is injected with [Coro::send],
    /// `Ok(None)` for a bare [Coro::resume] and `Err(e)` when a failure is injected
    /// with [Coro::fail]. An injected failure is indistinguishable from an error
    /// produced at this exact program point, so handle (or propagate) it the same
    /// way.
    pub async fn yield_value(&self, snd: S) -> Result<Option<R>, E> {
        Suspend {
            polled: false,
            point: Some(Suspension::Plain(snd)),
        }
        .await
    }

    /// Pause the body until the driver has waited on `op` and injected its result.
    ///
    /// # Panics
    /// Panics if whoever is driving the coroutine resumes this suspension without a
    /// value rather than sending the operation's result or failure.
    pub async fn await_op<O>(&self, op: O) -> Result<R, E>
    where
        O: Future<Output = Result<R, E>> + Send + 'static,
    {
        let suspend: Suspend<S, R, E> = Suspend {
            polled: false,
            point: Some(Suspension::Pending(Box::pin(op))),
        };
        let reply = suspend.await;

        match reply {
            Ok(r) => Ok(r.expect("a pending operation was resumed without a result")),
            Err(e) => Err(e),
        }
    }

    /// Delegate to `child` until it completes, resolving to its final result.
    ///
    /// The child's suspensions surface to whoever is driving this coroutine exactly
    /// as if they were our own, and values and failures injected while the child is
    /// active arrive at the child's suspension points: from the outside, delegation
    /// at any depth is invisible. A failure the child does not handle resolves this
    /// future to `Err` so the delegating body can catch it here.
    pub async fn yield_from<U, F2, C>(&self, child: C) -> Result<U, E>
    where
        U: Clone,
        E: Clone,
        F2: Future<Output = Result<U, E>> + Send,
        C: Into<Coro<S, R, U, E, F2>>,
    {
        let mut child = child.into();
        match child.fut.take() {
            Some(fut) => fut.await,
            // already terminal: replay its outcome at the delegation point
            None => child
                .outcome
                .clone()
                .expect("a terminal coroutine to have a stored outcome"),
        }
    }
}

struct Suspend<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
    polled: bool,
    point: Option<Suspension<S, R, E>>,
}

impl<S, R, E> Future for Suspend<S, R, E>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    E: Unpin + 'static,
{
    type Output = Result<Option<R>, E>;

    fn poll(mut self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.polled {
            // SAFETY: we can only be polled with a waker wrapping the SharedState of
            // the Coro that owns this body and the cell is only ever accessed from
            // here or from inside of Coro::step which never execute at the same time.
            let reply = unsafe {
                (ctx.waker().data() as *mut () as *mut SharedState<S, R, E>)
                    .as_mut()
                    .unwrap_unchecked()
                    .reply
                    .take()
                    // should not be possible
                    .expect("shared state was not set before resuming")
            };

            Poll::Ready(reply)
        } else {
            self.polled = true;
            let point = self.point.take();
            // SAFETY: we can only be polled with a waker wrapping the SharedState of
            // the Coro that owns this body and the cell is only ever accessed from
            // here or from inside of Coro::step which never execute at the same time.
            unsafe {
                (ctx.waker().data() as *mut () as *mut SharedState<S, R, E>)
                    .as_mut()
                    .unwrap_unchecked()
                    .yielded = Some(point.unwrap_unchecked());
            };

            Poll::Pending
        }
    }
}

/// A lazy, possibly infinite, single pass sequence over the
/// [Plain][Suspension::Plain] values of a [Coro].
///
/// Dropping the iterator before the coroutine completes stops it with
/// `T::default()` so that cleanup scoped to the current suspension point still runs.
pub struct CoroIter<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Default + Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    coro: Coro<S, R, T, E, F>,
    done: bool,
}

impl<S, R, T, E, F> fmt::Debug for CoroIter<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Default + Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoroIter")
            .field("coro", &self.coro)
            .field("done", &self.done)
            .finish()
    }
}

impl<S, R, T, E, F> Iterator for CoroIter<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Default + Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    type Item = Result<S, Error<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.coro.resume() {
            Ok(Step::Yielded(Suspension::Plain(s))) => Some(Ok(s)),
            Ok(Step::Yielded(Suspension::Pending(_))) => {
                self.done = true;
                let _ = self.coro.stop(T::default());
                Some(Err(Error::UnsupportedSuspension))
            }
            Ok(Step::Done(_)) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S, R, T, E, F> Drop for CoroIter<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Default + Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    fn drop(&mut self) {
        if !self.coro.status().is_terminal() {
            let _ = self.coro.stop(T::default());
        }
    }
}

impl<S, R, T, E, F> IntoIterator for Coro<S, R, T, E, F>
where
    S: Unpin + 'static,
    R: Unpin + 'static,
    T: Default + Clone,
    E: Unpin + Clone + 'static,
    F: Future<Output = Result<T, E>> + Send,
{
    type Item = Result<S, Error<E>>;
    type IntoIter = CoroIter<S, R, T, E, F>;

    fn into_iter(self) -> Self::IntoIter {
        CoroIter {
            coro: self,
            done: false,
        }
    }
}
