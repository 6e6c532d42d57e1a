use serde::{Deserialize, Serialize};

/// The status and result of an asynchronously fetched value.
///
/// The caller is responsible for moving a value between states as its fetch
/// progresses; every method here is a pure function that consumes its inputs
/// and produces a fresh value.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum RemoteData<T, E = anyhow::Error> {
    /// No request has been made yet.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request completed with a value.
    Success(T),
    /// The request completed with an error.
    Failure(E),
}

impl<T, E> RemoteData<T, E> {
    /// True iff no request has been made.
    pub fn is_not_asked(&self) -> bool {
        match self {
            RemoteData::NotAsked => true,
            _ => false,
        }
    }

    /// True iff a request is in flight.
    pub fn is_loading(&self) -> bool {
        match self {
            RemoteData::Loading => true,
            _ => false,
        }
    }

    /// True iff the request completed with a value.
    pub fn is_success(&self) -> bool {
        match self {
            RemoteData::Success(_) => true,
            _ => false,
        }
    }

    /// True iff the request completed with an error.
    pub fn is_failure(&self) -> bool {
        match self {
            RemoteData::Failure(_) => true,
            _ => false,
        }
    }

    /// True iff the request has completed, successfully or not.
    pub fn is_resolved(&self) -> bool {
        self.is_success() || self.is_failure()
    }

    /// Borrow the contents without consuming the container.
    pub fn as_ref(&self) -> RemoteData<&T, &E> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(ref t) => RemoteData::Success(t),
            RemoteData::Failure(ref e) => RemoteData::Failure(e),
        }
    }

    /// Mutably borrow the contents without consuming the container.
    pub fn as_mut(&mut self) -> RemoteData<&mut T, &mut E> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(ref mut t) => RemoteData::Success(t),
            RemoteData::Failure(ref mut e) => RemoteData::Failure(e),
        }
    }

    /// The success value, if there is one. A `Failure`'s error is discarded.
    pub fn to_option(self) -> Option<T> {
        match self {
            RemoteData::Success(t) => Some(t),
            _ => None,
        }
    }

    /// The failure error, if there is one.
    pub fn to_error(self) -> Option<E> {
        match self {
            RemoteData::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// The success value, distinguishing "no value yet" from "failed".
    ///
    /// `NotAsked` and `Loading` give `Ok(None)`; a `Failure` propagates its
    /// error to the caller. This is the only method that does not swallow the
    /// carried error.
    pub fn get(self) -> Result<Option<T>, E> {
        match self {
            RemoteData::NotAsked | RemoteData::Loading => Ok(None),
            RemoteData::Success(t) => Ok(Some(t)),
            RemoteData::Failure(e) => Err(e),
        }
    }

    /// Transform the success value; every other variant passes through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U, E> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(t) => RemoteData::Success(f(t)),
            RemoteData::Failure(e) => RemoteData::Failure(e),
        }
    }

    /// Transform the success value with a fallible function.
    ///
    /// An `Err` from the function becomes a `Failure`; it never escapes.
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> RemoteData<U, E> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(t) => match f(t) {
                Ok(u) => RemoteData::Success(u),
                Err(e) => RemoteData::Failure(e),
            },
            RemoteData::Failure(e) => RemoteData::Failure(e),
        }
    }

    /// Transform the failure error; every other variant passes through.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteData<T, F> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(t) => RemoteData::Success(t),
            RemoteData::Failure(e) => RemoteData::Failure(f(e)),
        }
    }

    /// Recover from a failure.
    ///
    /// On `Failure`, an `Ok` from the function becomes a `Success` and an
    /// `Err` becomes a new `Failure`. Every other variant passes through.
    pub fn catch(self, f: impl FnOnce(E) -> Result<T, E>) -> RemoteData<T, E> {
        match self {
            RemoteData::Failure(e) => match f(e) {
                Ok(t) => RemoteData::Success(t),
                Err(e) => RemoteData::Failure(e),
            },
            other => other,
        }
    }

    /// Combine two independently fetched values into one.
    ///
    /// Both sides must be `Success` to produce a `Success` pair. A failure on
    /// either side wins over `Loading` and `NotAsked`, and when both sides
    /// have failed, `self`'s error is the one carried forward. With no
    /// failure and no pair, `Loading` on either side wins over `NotAsked`.
    ///
    /// Chained calls nest pairs to the left: combining four values yields
    /// `(((A, B), C), D)`. The [`untuple3`](crate::untuple3) family flattens
    /// that shape back out.
    pub fn and_map<U>(self, next: RemoteData<U, E>) -> RemoteData<(T, U), E> {
        match (self, next) {
            (RemoteData::Success(t), RemoteData::Success(u)) => RemoteData::Success((t, u)),
            (RemoteData::Failure(e), _) => RemoteData::Failure(e),
            (_, RemoteData::Failure(e)) => RemoteData::Failure(e),
            (RemoteData::Loading, _) | (_, RemoteData::Loading) => RemoteData::Loading,
            _ => RemoteData::NotAsked,
        }
    }
}

impl<T, E> Default for RemoteData<T, E> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<T, E> From<Result<T, E>> for RemoteData<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(t) => RemoteData::Success(t),
            Err(e) => RemoteData::Failure(e),
        }
    }
}

impl<T, E> From<Option<T>> for RemoteData<T, E> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(t) => RemoteData::Success(t),
            None => RemoteData::NotAsked,
        }
    }
}

impl<T: PartialEq, E> PartialEq for RemoteData<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RemoteData::NotAsked, RemoteData::NotAsked) => true,
            (RemoteData::Loading, RemoteData::Loading) => true,
            (RemoteData::Success(a), RemoteData::Success(b)) => a == b,
            // Two failures carrying the same error still aren't "the same" -
            // like NULL in SQL, the comparison is always false.
            _ => false,
        }
    }
}
