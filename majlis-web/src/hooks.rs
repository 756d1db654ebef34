//! Fetch-on-mount lifecycle hook.
//!
//! Every screen loads its data through [`use_remote`]: one loader future per
//! dependency value, re-run whenever the dependencies change. A generation
//! counter is bumped on every re-run and on unmount, and the spawned task
//! checks it before writing, so a response that arrives after the user has
//! navigated away can never touch the state of a dead view.
use std::future::Future;

use majlis_core::Error;
use yew::prelude::*;

/// Result states of one remote load.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Ready(T),
    Failed(Error),
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> RemoteData<Vec<T>> {
    /// Rows to render. Loading and failure both collapse to an empty slice,
    /// so list screens show their localized empty state for either.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Ready(rows) => rows,
            _ => &[],
        }
    }
}

#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, load: F) -> UseStateHandle<RemoteData<T>>
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, Error>> + 'static,
{
    let state = use_state(|| RemoteData::Loading);
    let generation = use_mut_ref(|| 0_u32);

    {
        let state = state.clone();
        let generation = generation.clone();
        use_effect_with(deps, move |deps| {
            let started = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };
            state.set(RemoteData::Loading);

            let future = load(deps.clone());
            let task_generation = generation.clone();
            crate::dom::spawn(async move {
                let outcome = future.await;
                if *task_generation.borrow() != started {
                    // Superseded by a newer load or an unmount.
                    return;
                }
                match outcome {
                    Ok(data) => state.set(RemoteData::Ready(data)),
                    Err(err) => {
                        log::error!("remote load failed: {err}");
                        state.set(RemoteData::Failed(err));
                    }
                }
            });

            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_data_accessors_cover_all_states() {
        let loading: RemoteData<u32> = RemoteData::Loading;
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());

        let ready = RemoteData::Ready(7_u32);
        assert_eq!(ready.ready(), Some(&7));
        assert!(!ready.is_loading());

        let failed: RemoteData<u32> = RemoteData::Failed(Error::NotFound);
        assert!(failed.ready().is_none());
        assert!(!failed.is_loading());
    }
}
