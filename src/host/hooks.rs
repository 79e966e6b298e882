//! Synchronous hook with named taps
//!
//! Taps run in registration order every time the hook is called.

type Tap<T> = Box<dyn FnMut(&mut T) + Send>;

/// Ordered collection of named callbacks receiving a mutable argument
pub struct SyncHook<T> {
    taps: Vec<(String, Tap<T>)>,
}

impl<T> SyncHook<T> {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    /// Register a callback under the given plugin name
    pub fn tap<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&mut T) + Send + 'static,
    {
        self.taps.push((name.into(), Box::new(callback)));
    }

    /// Run every registered tap against `arg`
    pub fn call(&mut self, arg: &mut T) {
        for (name, tap) in self.taps.iter_mut() {
            log::trace!("Calling hook tap '{}'", name);
            tap(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Names of the registered taps in call order
    pub fn names(&self) -> Vec<&str> {
        self.taps.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl<T> Default for SyncHook<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SyncHook<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncHook")
            .field("taps", &self.names())
            .finish()
    }
}
