use crate::*;
use std::fmt;

type Handler<T> = Box<dyn FnMut(&T)>;

/// A callback slot filled at most once by the owner of an editor.
pub struct Callback<T: ?Sized> {
    name: &'static str,
    handler: Option<Handler<T>>,
}

impl<T: ?Sized> Callback<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            handler: None,
        }
    }

    /// Install `handler`. Fails if the slot is already taken.
    pub fn register(&mut self, handler: impl FnMut(&T) + 'static) -> Result {
        if self.handler.is_some() {
            warn!("Rejected second registration of the {} observer", self.name);
            return Err(Error::ObserverAlreadyRegistered(self.name));
        }
        self.handler = Some(Box::new(handler));
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler, if any.
    pub fn notify(&mut self, value: &T) {
        if let Some(handler) = self.handler.as_mut() {
            trace!("Notifying {} observer", self.name);
            handler(value);
        }
    }
}

impl<T: ?Sized> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .field("registered", &self.is_registered())
            .finish()
    }
}
