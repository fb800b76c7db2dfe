//! Deprecation notices
//!
//! Legacy accessors keep working but report each use through [`emit`].
//! By default the notice is logged with `tracing::warn!`. A scoped hook
//! installed with [`with_hook`] replaces the default on the current
//! thread, so tests and embedders can observe notices directly.

use std::cell::{Cell, RefCell};

/// A use of a deprecated API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// The deprecated item, e.g. `RevokedCertificate::revocation_date`.
    pub item: &'static str,
    /// What to use instead.
    pub replacement: &'static str,
    /// Release the item was deprecated in.
    pub since: &'static str,
}

type Hook = Box<dyn Fn(&Deprecation)>;

thread_local! {
    static HOOK: RefCell<Option<Hook>> = const { RefCell::new(None) };
    static IN_HOOK: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` with `hook` receiving every deprecation notice emitted on this
/// thread. The previous hook is restored afterwards, even if `f` panics.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use kumiki_x509::deprecation::{self, Deprecation};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// deprecation::with_hook(
///     move |notice: &Deprecation| sink.borrow_mut().push(notice.item),
///     || {
///         deprecation::emit(Deprecation {
///             item: "old",
///             replacement: "new",
///             since: "0.1.0",
///         })
///     },
/// );
/// assert_eq!(*seen.borrow(), vec!["old"]);
/// ```
pub fn with_hook<H, F, R>(hook: H, f: F) -> R
where
    H: Fn(&Deprecation) + 'static,
    F: FnOnce() -> R,
{
    struct Restore(Option<Hook>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            HOOK.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = HOOK.with(|slot| slot.borrow_mut().replace(Box::new(hook)));
    let _restore = Restore(previous);
    f()
}

/// Marks the current thread as running a hook until dropped.
struct InHook;

impl InHook {
    fn enter() -> Self {
        IN_HOOK.with(|flag| flag.set(true));
        InHook
    }
}

impl Drop for InHook {
    fn drop(&mut self) {
        IN_HOOK.with(|flag| flag.set(false));
    }
}

/// Report a deprecated API use.
pub fn emit(notice: Deprecation) {
    // A hook that itself touches deprecated APIs falls back to logging.
    let handled = !IN_HOOK.with(Cell::get)
        && HOOK.with(|slot| {
            let hook = slot.borrow();
            let Some(hook) = hook.as_ref() else {
                return false;
            };
            let _guard = InHook::enter();
            hook(&notice);
            true
        });

    if !handled {
        tracing::warn!(
            item = notice.item,
            replacement = notice.replacement,
            since = notice.since,
            "deprecated API used"
        );
    }
}
